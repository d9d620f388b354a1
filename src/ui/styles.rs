use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;
use crate::ui::utils::gradient_text;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text.
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" pair. The label is subdued, the value is colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a panel header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a large slide heading colored along a gradient.
    fn gradient_heading(&mut self, text: &str, size: f32, stops: &[&str]);

    /// Renders body text at a given size in the label color.
    fn body(&mut self, text: &str, size: f32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.label(
            RichText::new(text)
                .color(UI_CONFIG.colors.heading)
                .monospace()
                .strong(),
        );
    }

    fn gradient_heading(&mut self, text: &str, size: f32, stops: &[&str]) {
        self.label(gradient_text(text, size, stops));
    }

    fn body(&mut self, text: &str, size: f32) {
        self.label(RichText::new(text).size(size).color(UI_CONFIG.colors.label));
    }
}
