//! Header search box state.
//!
//! The box follows navigation: landing on a listings collection clears it.
//! Submitting trims the text and yields the collection path to push.

use crate::routes::paths::{is_listings_path, listings_path};
use crate::shared::error::UiError;
use crate::shared::notify::Notifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// User typed into the box
    Typed(String),
    /// Current location changed
    PathChanged(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub text: String,
}

impl SearchState {
    /// Returns whether the text changed.
    pub fn apply(&mut self, action: SearchAction) -> bool {
        match action {
            SearchAction::Typed(text) => {
                if self.text == text {
                    return false;
                }
                self.text = text;
                true
            }
            SearchAction::PathChanged(path) => {
                if is_listings_path(&path) && !self.text.is_empty() {
                    self.text.clear();
                    return true;
                }
                false
            }
        }
    }

    pub fn target(&self) -> Result<String, UiError> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(UiError::EmptySearch);
        }
        Ok(listings_path(trimmed))
    }

    /// Path to navigate to, or `None` after reporting an empty search
    pub fn submit(&self, notifier: &impl Notifier) -> Option<String> {
        match self.target() {
            Ok(path) => Some(path),
            Err(e) => {
                notifier.notify_error(&e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notify::testing::RecordingNotifier;

    fn typed(text: &str) -> SearchState {
        let mut state = SearchState::default();
        state.apply(SearchAction::Typed(text.to_string()));
        state
    }

    #[test]
    fn test_submit_navigates_with_trimmed_term() {
        let notifier = RecordingNotifier::default();
        for (input, expected) in [
            ("toronto", "/listings/toronto"),
            ("  Toronto  ", "/listings/Toronto"),
            ("\tSan Francisco\n", "/listings/San%20Francisco"),
        ] {
            assert_eq!(typed(input).submit(&notifier), Some(expected.to_string()));
        }
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_blank_submit_reports_once_and_stays() {
        for input in ["", "   ", "\t\n"] {
            let notifier = RecordingNotifier::default();
            assert_eq!(typed(input).submit(&notifier), None);
            assert_eq!(
                notifier.errors(),
                vec!["Please enter a valid search input".to_string()]
            );
        }
    }

    #[test]
    fn test_collection_route_clears_text() {
        let mut state = typed("paris");
        assert!(state.apply(SearchAction::PathChanged("/listings/paris".into())));
        assert_eq!(state.text, "");

        let mut state = typed("paris");
        assert!(state.apply(SearchAction::PathChanged("/listings".into())));
        assert_eq!(state.text, "");
    }

    #[test]
    fn test_other_routes_keep_text() {
        let mut state = typed("paris");
        for path in ["/", "/host", "/listing/42", "/user/1"] {
            assert!(!state.apply(SearchAction::PathChanged(path.into())));
            assert_eq!(state.text, "paris");
        }
    }

    #[test]
    fn test_collection_route_never_prefills() {
        let mut state = SearchState::default();
        assert!(!state.apply(SearchAction::PathChanged("/listings/berlin".into())));
        assert_eq!(state.text, "");
    }

    #[test]
    fn test_typing_same_text_is_not_a_change() {
        let mut state = typed("a");
        assert!(!state.apply(SearchAction::Typed("a".into())));
        assert!(state.apply(SearchAction::Typed("ab".into())));
    }
}
