//! UI-related application state

use egui_commonmark::CommonMarkCache;

use crate::form::ValidationError;
use crate::ui::theme::Theme;

/// UI-related state
pub struct UiState {
    /// Cache for markdown rendering
    pub markdown_cache: CommonMarkCache,
    /// Current theme
    pub current_theme: Theme,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,
    /// Text being typed into the keyword chip field
    pub keyword_input: String,
    /// Rejected keyword, shown until the chips change again
    pub keyword_error: Option<ValidationError>,
}

impl UiState {
    /// Create a new UiState with the given theme
    pub fn new(theme: Theme) -> Self {
        Self {
            markdown_cache: CommonMarkCache::default(),
            current_theme: theme,
            theme_dirty: true, // Apply theme on first frame
            show_about_dialog: false,
            keyword_input: String::new(),
            keyword_error: None,
        }
    }

    /// Clear transient input state
    pub fn reset_inputs(&mut self) {
        self.keyword_input.clear();
        self.keyword_error = None;
    }
}
