//! Color palette, configuration paths, and user settings.
//!
//! The palette ships with a dark default and can be overridden per-color from
//! `theme.toml` in the config directory. Settings (API base URL, recent-list
//! capacity, startup view) load from `settings.toml`. Both files are optional
//! and invalid values fall back to defaults rather than failing startup.

pub mod paths;
pub mod settings;

pub use paths::{config_dir, logs_dir};
pub use settings::{DEFAULT_API_BASE_URL, Settings, load_settings};

use std::sync::OnceLock;

use ratatui::style::Color;

/// Resolved color palette used by every render function.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Window background.
    pub base: Color,
    /// Panel/card background.
    pub surface: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text (bylines, excerpts).
    pub subtext: Color,
    /// Borders and separators.
    pub overlay: Color,
    /// Highlight/selection accent.
    pub accent: Color,
    /// Success states.
    pub green: Color,
    /// Attention states (loading, category tags).
    pub yellow: Color,
    /// Error states.
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x0a, 0x0a, 0x0a),
            surface: Color::Rgb(0x1f, 0x1f, 0x1f),
            text: Color::Rgb(0xe6, 0xe6, 0xe6),
            subtext: Color::Rgb(0x9c, 0xa3, 0xaf),
            overlay: Color::Rgb(0x4b, 0x4b, 0x4b),
            accent: Color::Rgb(0x93, 0xc5, 0xfd),
            green: Color::Rgb(0x4a, 0xde, 0x80),
            yellow: Color::Rgb(0xfa, 0xcc, 0x15),
            red: Color::Rgb(0xf8, 0x71, 0x71),
        }
    }
}

/// Per-color overrides as they appear in `theme.toml` (hex strings).
#[derive(Debug, Default, serde::Deserialize)]
struct ThemeFile {
    /// Window background override.
    base: Option<String>,
    /// Panel background override.
    surface: Option<String>,
    /// Primary text override.
    text: Option<String>,
    /// Secondary text override.
    subtext: Option<String>,
    /// Border override.
    overlay: Option<String>,
    /// Accent override.
    accent: Option<String>,
    /// Success color override.
    green: Option<String>,
    /// Attention color override.
    yellow: Option<String>,
    /// Error color override.
    red: Option<String>,
}

/// Parse a `#rrggbb` hex string into a ratatui color.
fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Apply file overrides onto the default palette; unknown or malformed colors
/// keep their defaults.
fn apply_overrides(mut th: Theme, file: &ThemeFile) -> Theme {
    let slots: [(&Option<String>, &mut Color); 9] = [
        (&file.base, &mut th.base),
        (&file.surface, &mut th.surface),
        (&file.text, &mut th.text),
        (&file.subtext, &mut th.subtext),
        (&file.overlay, &mut th.overlay),
        (&file.accent, &mut th.accent),
        (&file.green, &mut th.green),
        (&file.yellow, &mut th.yellow),
        (&file.red, &mut th.red),
    ];
    for (src, dst) in slots {
        if let Some(c) = src.as_deref().and_then(parse_hex) {
            *dst = c;
        }
    }
    th
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Load the theme from `theme.toml` once; later calls return the cached value.
pub fn theme() -> Theme {
    *THEME.get_or_init(|| {
        let path = config_dir().join("theme.toml");
        let file = std::fs::read_to_string(&path)
            .ok()
            .and_then(|body| match toml::from_str::<ThemeFile>(&body) {
                Ok(f) => Some(f),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring malformed theme file");
                    None
                }
            })
            .unwrap_or_default();
        apply_overrides(Theme::default(), &file)
    })
}
