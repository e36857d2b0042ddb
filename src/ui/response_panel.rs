//! Generated post rendering

use eframe::egui::{self, RichText};
use egui_commonmark::CommonMarkViewer;

use crate::app::BlogCrafterApp;
use crate::state::ResponseState;
use crate::ui::form_panel::card;

/// Greeting shown before the first request
pub const WELCOME_TEXT: &str =
    "Hello! I'm BlogCrafter, crafting captivating content to elevate your online presence.";

/// Render the response card
pub fn render_response_panel(app: &mut BlogCrafterApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    card(&theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.set_min_height(ui.available_height());

        match app.generation.response() {
            ResponseState::Idle => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(WELCOME_TEXT).size(16.0).color(theme.text_primary));
                });
            }
            ResponseState::Loading => {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            }
            ResponseState::Success(text) => {
                egui::ScrollArea::vertical()
                    .id_salt("response_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        CommonMarkViewer::new().show(ui, &mut app.ui.markdown_cache, text);
                    });
            }
            ResponseState::Error(_) => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("No post yet. Fix the form and generate again.")
                            .color(theme.text_muted),
                    );
                });
            }
        }
    });
}
