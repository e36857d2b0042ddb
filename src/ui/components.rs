//! Shared UI components for BlogCrafter

use eframe::egui::{self, RichText, Vec2};

use crate::app::BlogCrafterApp;
use crate::ui::theme::ThemePreset;

/// Render the header bar: app name, copy button, theme picker and About
pub fn render_header(app: &mut BlogCrafterApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("BlogCrafter")
                .size(22.0)
                .strong()
                .color(theme.accent),
        );

        if app.generation.response().text().is_some() {
            ui.add_space(16.0);
            let label = if app.generation.copied() {
                "✔ Copied"
            } else {
                "📋 Copy"
            };
            let button = egui::Button::new(RichText::new(label).color(theme.text_primary))
                .fill(theme.success.gamma_multiply(0.6))
                .min_size(Vec2::new(90.0, 28.0));
            if ui.add(button).on_hover_text("Click to copy text").clicked() {
                let ctx = ui.ctx().clone();
                app.copy_response(&ctx);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("About").clicked() {
                app.ui.show_about_dialog = true;
            }

            let current = app.config.appearance.theme;
            egui::ComboBox::from_id_salt("theme_select")
                .selected_text(current.name())
                .show_ui(ui, |ui| {
                    for preset in ThemePreset::all() {
                        if ui.selectable_label(current == *preset, preset.name()).clicked() {
                            app.config.appearance.theme = *preset;
                            app.ui.current_theme = preset.theme();
                            app.ui.theme_dirty = true;
                            app.save_config();
                        }
                    }
                })
                .response
                .on_hover_text("Color theme");
        });
    });
    ui.add_space(6.0);
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut BlogCrafterApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let theme = app.ui.current_theme.clone();

    egui::Window::new("About BlogCrafter")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 220.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("BlogCrafter").size(24.0).strong().color(theme.accent));
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);
                ui.label(RichText::new("Posts are generated by").color(theme.text_primary));
                if ui.link(app.config.service.endpoint.as_str()).clicked() {
                    if let Err(e) = open::that(&app.config.service.endpoint) {
                        tracing::warn!("Failed to open {}: {}", app.config.service.endpoint, e);
                    }
                }

                ui.add_space(12.0);
                ui.label(
                    RichText::new("Built with Rust + egui")
                        .size(11.0)
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    app.ui.show_about_dialog = false;
                }
                ui.add_space(8.0);
            });
        });
}
