//! Color presets applied to egui's visuals

use eframe::egui::{self, Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Ocean,
    Ember,
    Slate,
}

impl ThemePreset {
    /// Get all available presets
    pub fn all() -> &'static [ThemePreset] {
        &[ThemePreset::Ocean, ThemePreset::Ember, ThemePreset::Slate]
    }

    /// Get display name for the preset
    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Ocean => "Ocean",
            ThemePreset::Ember => "Ember",
            ThemePreset::Slate => "Slate",
        }
    }

    /// Parse a preset from its display or config name
    pub fn from_name(name: &str) -> Option<ThemePreset> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Get the theme colors for this preset
    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Ocean => Theme::ocean(),
            ThemePreset::Ember => Theme::ember(),
            ThemePreset::Slate => Theme::slate(),
        }
    }
}

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // Surfaces
    pub bg_dark: Color32,
    pub bg_card: Color32,
    pub bg_input: Color32,

    // Text
    pub text_primary: Color32,
    pub text_muted: Color32,

    // Accents
    pub accent: Color32,
    pub accent_pressed: Color32,
    pub chip: Color32,

    // Semantic colors
    pub success: Color32,
    pub error: Color32,

    pub border: Color32,
}

impl Theme {
    /// Deep blue, the default
    pub fn ocean() -> Self {
        Self {
            bg_dark: Color32::from_rgb(15, 23, 42),
            bg_card: Color32::from_rgb(30, 41, 59),
            bg_input: Color32::from_rgb(10, 16, 30),

            text_primary: Color32::from_rgb(241, 245, 249),
            text_muted: Color32::from_rgb(148, 163, 184),

            accent: Color32::from_rgb(59, 130, 246),
            accent_pressed: Color32::from_rgb(37, 99, 235),
            chip: Color32::from_rgb(29, 78, 216),

            success: Color32::from_rgb(34, 197, 94),
            error: Color32::from_rgb(248, 113, 113),

            border: Color32::from_rgb(51, 65, 85),
        }
    }

    /// Warm orange on charcoal
    pub fn ember() -> Self {
        Self {
            bg_dark: Color32::from_rgb(24, 20, 18),
            bg_card: Color32::from_rgb(38, 32, 28),
            bg_input: Color32::from_rgb(16, 13, 12),

            text_primary: Color32::from_rgb(250, 245, 240),
            text_muted: Color32::from_rgb(168, 154, 140),

            accent: Color32::from_rgb(249, 115, 22),
            accent_pressed: Color32::from_rgb(234, 88, 12),
            chip: Color32::from_rgb(154, 52, 18),

            success: Color32::from_rgb(74, 222, 128),
            error: Color32::from_rgb(239, 68, 68),

            border: Color32::from_rgb(68, 58, 50),
        }
    }

    /// Neutral grays with a teal accent
    pub fn slate() -> Self {
        Self {
            bg_dark: Color32::from_rgb(23, 23, 23),
            bg_card: Color32::from_rgb(38, 38, 38),
            bg_input: Color32::from_rgb(12, 12, 12),

            text_primary: Color32::from_rgb(245, 245, 245),
            text_muted: Color32::from_rgb(163, 163, 163),

            accent: Color32::from_rgb(20, 184, 166),
            accent_pressed: Color32::from_rgb(13, 148, 136),
            chip: Color32::from_rgb(17, 94, 89),

            success: Color32::from_rgb(52, 211, 153),
            error: Color32::from_rgb(251, 113, 133),

            border: Color32::from_rgb(64, 64, 64),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.bg_card;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_card;
        visuals.extreme_bg_color = self.bg_input;

        visuals.widgets.noninteractive.bg_fill = self.bg_card;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.bg_fill = self.bg_card;
        visuals.widgets.inactive.weak_bg_fill = self.bg_card;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.accent_pressed;
        visuals.widgets.active.weak_bg_fill = self.accent_pressed;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;

        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}
