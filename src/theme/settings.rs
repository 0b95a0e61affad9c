//! User settings loaded from `settings.toml`.

use crate::state::View;

/// API base URL used when the settings file does not override it.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// User-tunable settings.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the blog API, without a trailing slash.
    pub api_base_url: String,
    /// Bound on the recent-searches list.
    pub recent_capacity: usize,
    /// View shown at startup (`home`, `blogs`, `about`, `contact`).
    pub default_view: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            recent_capacity: crate::state::app_state::DEFAULT_RECENT_CAPACITY,
            default_view: "home".to_owned(),
        }
    }
}

impl Settings {
    /// Startup view resolved from the settings key; defaults to Home.
    #[must_use]
    pub fn startup_view(&self) -> View {
        View::from_config_key(&self.default_view).unwrap_or(View::Home)
    }

    /// Base URL with any trailing slash removed so endpoint paths can be
    /// appended unconditionally.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.api_base_url.trim_end_matches('/').to_owned()
    }
}

/// What: Load settings from `settings.toml` in the config directory.
///
/// Inputs: none
///
/// Output:
/// - Parsed [`Settings`], or defaults when the file is absent or malformed.
///
/// Details:
/// - A malformed file logs a warning and is otherwise ignored; startup never
///   fails on configuration problems.
pub fn load_settings() -> Settings {
    let path = super::config_dir().join("settings.toml");
    match std::fs::read_to_string(&path) {
        Ok(body) => match toml::from_str::<Settings>(&body) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings file");
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Defaults apply for missing keys and unknown view names
    ///
    /// - Input: TOML body with only `api_base_url`; bogus `default_view`
    /// - Output: Other fields default; startup view falls back to Home
    fn partial_settings_fill_defaults() {
        let s: Settings =
            toml::from_str("api_base_url = \"https://blog.example.com/\"").unwrap();
        assert_eq!(s.base_url(), "https://blog.example.com");
        assert_eq!(
            s.recent_capacity,
            crate::state::app_state::DEFAULT_RECENT_CAPACITY
        );
        assert_eq!(s.startup_view(), View::Home);

        let s: Settings = toml::from_str("default_view = \"garage\"").unwrap();
        assert_eq!(s.startup_view(), View::Home);
    }

    #[test]
    /// What: Trailing slashes are trimmed from the configured base URL
    ///
    /// - Input: Base URL with and without a trailing slash
    /// - Output: Identical normalized value
    fn base_url_trailing_slash_normalized() {
        let a: Settings = toml::from_str("api_base_url = \"http://x:8000/\"").unwrap();
        let b: Settings = toml::from_str("api_base_url = \"http://x:8000\"").unwrap();
        assert_eq!(a.base_url(), b.base_url());
    }
}
