//! Request form rendering
//!
//! The form reads as a sentence: "Create a blog post titled ... with these
//! ... keywords. It should be around ... words and for ... level audience."

use eframe::egui::{self, RichText, Vec2};

use crate::app::BlogCrafterApp;
use crate::form::AudienceLevel;
use crate::ui::theme::Theme;

/// Render the form card
pub fn render_form_panel(app: &mut BlogCrafterApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    card(&theme).show(ui, |ui| {
        ui.set_width(ui.available_width());

        prose(ui, &theme, "Create a blog post titled");
        ui.add(
            egui::TextEdit::singleline(&mut app.form.title)
                .hint_text("Blog Title*")
                .desired_width(f32::INFINITY),
        )
        .on_hover_text("Enter the title of your blog");

        ui.add_space(8.0);
        prose(ui, &theme, "with these");
        render_keywords(app, ui, &theme);

        ui.add_space(8.0);
        prose(ui, &theme, "keywords. It should be around");
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut app.form.word_count).desired_width(60.0))
                .on_hover_text("Enter the word count for your blog (up to 2000)");
            prose(ui, &theme, "words and for");
        });

        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("audience_select")
                .selected_text(app.form.audience.as_str())
                .show_ui(ui, |ui| {
                    for level in AudienceLevel::all() {
                        ui.selectable_value(&mut app.form.audience, *level, level.as_str());
                    }
                })
                .response
                .on_hover_text("Select the audience level for your blog");
            prose(ui, &theme, "level audience.");
        });

        ui.add_space(16.0);
        ui.separator();
        render_actions(app, ui, &theme);
    });
}

/// Keyword chips plus the input that adds them
fn render_keywords(app: &mut BlogCrafterApp, ui: &mut egui::Ui, theme: &Theme) {
    let mut remove = None;
    ui.horizontal_wrapped(|ui| {
        for (i, keyword) in app.form.keywords().iter().enumerate() {
            let chip = egui::Button::new(
                RichText::new(format!("{}  ✕", keyword)).color(theme.text_primary),
            )
            .fill(theme.chip)
            .corner_radius(egui::CornerRadius::same(12));
            if ui.add(chip).on_hover_text("Click to remove").clicked() {
                remove = Some(i);
            }
        }
    });
    if let Some(i) = remove {
        app.remove_keyword(i);
    }

    let response = ui.add(
        egui::TextEdit::singleline(&mut app.ui.keyword_input)
            .hint_text("Type a keyword and press Enter")
            .desired_width(f32::INFINITY),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        app.add_keyword();
        response.request_focus();
    }
}

/// Error line with the reset and generate buttons
fn render_actions(app: &mut BlogCrafterApp, ui: &mut egui::Ui, theme: &Theme) {
    let message = app
        .ui
        .keyword_error
        .map(|e| e.to_string())
        .or_else(|| app.generation.response().error().map(|e| e.to_string()));

    ui.horizontal(|ui| {
        if let Some(message) = message {
            ui.label(RichText::new(message).color(theme.error));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let loading = app.generation.is_loading();
            let generate = egui::Button::new(RichText::new("➤ Generate").color(theme.text_primary))
                .fill(theme.accent)
                .min_size(Vec2::new(110.0, 36.0));
            if ui
                .add_enabled(!loading, generate)
                .on_hover_text("Click to generate text")
                .on_disabled_hover_text("Waiting for the current post")
                .clicked()
            {
                app.submit();
            }

            let reset = egui::Button::new(RichText::new("⟲ Reset").color(theme.text_primary))
                .fill(theme.error.gamma_multiply(0.7))
                .min_size(Vec2::new(90.0, 36.0));
            if ui.add(reset).on_hover_text("Click to reset").clicked() {
                app.reset();
            }
        });
    });
}

/// Connecting text between the form controls
fn prose(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(RichText::new(text).color(theme.text_muted));
}

/// Frame shared by the form and response cards
pub(super) fn card(theme: &Theme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.bg_card)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
        .stroke(egui::Stroke::new(1.0, theme.border))
}
