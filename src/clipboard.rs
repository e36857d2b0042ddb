//! Clipboard access for generated posts

use eframe::egui;

/// Write-only clipboard used when a post is ready or the copy button is pressed
pub trait Clipboard {
    fn set_text(&self, text: &str);
}

impl Clipboard for egui::Context {
    fn set_text(&self, text: &str) {
        self.copy_text(text.to_owned());
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::Clipboard;

    /// Clipboard double that remembers everything written to it
    #[derive(Default)]
    pub struct RecordingClipboard {
        pub writes: RefCell<Vec<String>>,
    }

    impl RecordingClipboard {
        pub fn last(&self) -> Option<String> {
            self.writes.borrow().last().cloned()
        }
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&self, text: &str) {
            self.writes.borrow_mut().push(text.to_owned());
        }
    }
}
