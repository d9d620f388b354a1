use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub background: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub card_hover_stroke: Color32,
    pub dot_inactive: Color32,
    pub track: Color32,
    pub notes_fill: Color32,
    pub timer_running: Color32,
    pub timer_paused: Color32,
}

/// Palette stops fed to `colorgrad` for headings, tiles and dots.
#[derive(Clone, Copy)]
pub struct UiGradients {
    pub primary_to_secondary: &'static [&'static str],
    pub primary_to_accent: &'static [&'static str],
    pub secondary_to_accent: &'static [&'static str],
    pub accent_to_primary: &'static [&'static str],
    pub full: &'static [&'static str],
}

/// Sizes for the full-screen and presenter layouts
#[derive(Clone, Copy)]
pub struct UiLayout {
    pub max_content_width: f32,
    pub dot_size: f32,
    pub active_dot_width: f32,
    pub presenter_side_width: f32,
    pub preview_scale: f32,
    pub card_corner_radius: u8,
    pub card_margin: i8,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub gradients: UiGradients,
    pub layout: UiLayout,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(75, 85, 99),
        heading: Color32::from_rgb(31, 41, 55),
        subdued: Color32::from_rgb(107, 114, 128),
        background: Color32::from_rgb(250, 245, 255), // Lavender wash
        panel: Color32::from_rgb(243, 236, 252),
        card: Color32::WHITE,
        card_hover_stroke: Color32::from_rgb(155, 135, 245),
        dot_inactive: Color32::from_rgb(209, 213, 219),
        track: Color32::from_rgb(229, 231, 235),
        notes_fill: Color32::from_rgb(255, 251, 235),
        timer_running: Color32::from_rgb(22, 163, 74),
        timer_paused: Color32::from_rgb(107, 114, 128),
    },
    gradients: UiGradients {
        primary_to_secondary: &["#9b87f5", "#d946ef"],
        primary_to_accent: &["#9b87f5", "#0ea5e9"],
        secondary_to_accent: &["#d946ef", "#0ea5e9"],
        accent_to_primary: &["#0ea5e9", "#9b87f5"],
        full: &["#9b87f5", "#d946ef", "#0ea5e9"],
    },
    layout: UiLayout {
        max_content_width: 1100.0,
        dot_size: 8.0,
        active_dot_width: 32.0,
        presenter_side_width: 360.0,
        preview_scale: 0.45,
        card_corner_radius: 12,
        card_margin: 16,
    },
};
