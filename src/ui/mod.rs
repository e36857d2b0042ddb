//! UI modules for BlogCrafter
//!
//! The window is a header bar, the request form on the left and the
//! generated post on the right.

mod components;
mod form_panel;
mod response_panel;
pub mod theme;

pub use components::{render_about_dialog, render_header};
pub use form_panel::render_form_panel;
pub use response_panel::render_response_panel;
