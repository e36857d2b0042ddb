use anyhow::Result;
use eframe::egui;

use crate::config::Config;
use crate::form::FormState;
use crate::service::GenerationClient;
use crate::state::{GenerationState, StateEvent, UiState};
use crate::ui;

/// Main application state
pub struct BlogCrafterApp {
    /// Application configuration
    pub config: Config,
    /// Generation service client
    pub client: GenerationClient,
    /// Form contents
    pub form: FormState,
    /// Request lifecycle
    pub generation: GenerationState,
    /// UI-related state
    pub ui: UiState,
    /// Status message for the status bar
    pub status_message: String,
}

impl BlogCrafterApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        });
        Self::with_config(config)
    }

    /// Create an application instance from an already loaded config
    pub fn with_config(config: Config) -> Result<Self> {
        let client = GenerationClient::new(&config.service.endpoint, config.service.timeout())?;
        tracing::info!("Using generation service at {}", client.endpoint());

        let theme = config.appearance.theme.theme();
        Ok(Self {
            config,
            client,
            form: FormState::default(),
            generation: GenerationState::default(),
            ui: UiState::new(theme),
            status_message: "Ready".to_string(),
        })
    }

    /// Validate the form and send it
    pub fn submit(&mut self) {
        self.ui.keyword_error = None;
        if let Some(event) = self.generation.submit(&self.form, &self.client) {
            self.handle_event(event);
        }
    }

    /// Restore the form and response panel to a fresh state
    pub fn reset(&mut self) {
        self.form.reset();
        self.generation.reset();
        self.ui.reset_inputs();
        self.status_message = "Ready".to_string();
    }

    /// Turn the keyword input buffer into a chip
    pub fn add_keyword(&mut self) {
        match self.form.add_keyword(&self.ui.keyword_input) {
            Ok(_) => {
                self.ui.keyword_input.clear();
                self.ui.keyword_error = None;
            }
            Err(e) => {
                tracing::debug!("Keyword rejected: {}", e);
                self.ui.keyword_error = Some(e);
            }
        }
    }

    /// Remove a chip by its position in the list
    pub fn remove_keyword(&mut self, index: usize) {
        if self.form.remove_keyword(index).is_some() {
            self.ui.keyword_error = None;
        }
    }

    /// Copy the displayed post to the clipboard
    pub fn copy_response(&mut self, ctx: &egui::Context) {
        if self.generation.copy(ctx) {
            self.status_message = "Copied to clipboard".to_string();
        }
    }

    /// Save configuration to disk
    pub fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }

    fn handle_event(&mut self, event: StateEvent) {
        match event {
            StateEvent::StatusMessage(msg) => self.status_message = msg,
            StateEvent::LogError(msg) => tracing::error!("{}", msg),
            StateEvent::LogInfo(msg) => tracing::info!("{}", msg),
        }
    }
}

impl eframe::App for BlogCrafterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        for event in self.generation.poll(ctx, ctx) {
            self.handle_event(event);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui::render_header(self, ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.status_message)
                        .color(self.ui.current_theme.text_muted)
                        .size(11.0),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                ui::render_form_panel(self, &mut columns[0]);
                ui::render_response_panel(self, &mut columns[1]);
            });
        });

        ui::render_about_dialog(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{AudienceLevel, ValidationError};
    use crate::state::{RequestError, ResponseState};

    fn test_app() -> BlogCrafterApp {
        BlogCrafterApp::with_config(Config::default()).unwrap()
    }

    #[test]
    fn test_keyword_input_becomes_chip() {
        let mut app = test_app();
        app.ui.keyword_input = " rust ".to_string();
        app.add_keyword();

        assert_eq!(app.form.keywords(), ["rust".to_string()]);
        assert!(app.ui.keyword_input.is_empty());
        assert_eq!(app.ui.keyword_error, None);
    }

    #[test]
    fn test_sixth_keyword_shows_error() {
        let mut app = test_app();
        for kw in ["a", "b", "c", "d", "e", "f"] {
            app.ui.keyword_input = kw.to_string();
            app.add_keyword();
        }

        assert_eq!(app.form.keywords().len(), 5);
        assert_eq!(app.ui.keyword_error, Some(ValidationError::TooManyKeywords));
        assert_eq!(app.ui.keyword_input, "f");

        app.remove_keyword(0);
        assert_eq!(app.ui.keyword_error, None);
        assert_eq!(app.form.keywords()[0], "b");
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut app = test_app();
        app.form.title = "Draft".to_string();
        app.form.word_count = "lots".to_string();
        app.form.audience = AudienceLevel::Intermediate;
        app.ui.keyword_input = "pending".to_string();
        app.add_keyword();
        app.submit();
        assert_eq!(
            app.generation.response().error(),
            Some(RequestError::Validation(ValidationError::InvalidWordCount))
        );

        app.reset();
        assert_eq!(app.form, FormState::default());
        assert_eq!(app.generation.response(), &ResponseState::Idle);
        assert!(!app.generation.copied());
        assert!(app.ui.keyword_input.is_empty());
        assert_eq!(app.status_message, "Ready");

        app.reset();
        assert_eq!(app.form, FormState::default());
        assert_eq!(app.generation.response(), &ResponseState::Idle);
    }
}
