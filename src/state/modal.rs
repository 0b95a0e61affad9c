//! Modal overlay state.

use super::types::BlogPost;

/// Which list the search modal's selection currently walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSelection {
    /// No row highlighted (input-only).
    None,
    /// Highlight among recents/suggestions (shown while the input is empty).
    Shortcut(usize),
    /// Highlight among fetched results.
    Result(usize),
}

/// Modal dialogs layered over the current view.
///
/// Exactly one modal is active at a time; `Esc` always dismisses the topmost
/// one. The detail overlay remembers the modal it was opened from so closing
/// it can restore the search modal underneath.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal is open.
    #[default]
    None,
    /// The search modal (input, recents, suggestions, results).
    Search {
        /// Current row highlight.
        selection: SearchSelection,
    },
    /// Full-post detail overlay.
    Detail {
        /// Post being displayed (freshest copy wins; see the detail worker).
        post: Box<BlogPost>,
        /// Vertical scroll offset in wrapped lines.
        scroll: u16,
        /// Whether closing should return to the search modal.
        from_search: bool,
    },
    /// Detail overlay error state (e.g., unknown slug).
    DetailError {
        /// Message shown in place of the post body.
        message: String,
    },
    /// Transient alert (network failures and similar).
    Alert {
        /// Message text.
        message: String,
    },
}

impl Modal {
    /// Whether any modal is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::Modal;

    #[test]
    /// What: Modal open check distinguishes None from every open variant
    ///
    /// - Input: Default modal and an alert
    /// - Output: `is_open` false then true
    fn modal_is_open() {
        assert!(!Modal::default().is_open());
        assert!(
            Modal::Alert {
                message: "network unreachable".into()
            }
            .is_open()
        );
    }
}
