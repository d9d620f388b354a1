//! Renderers for the five slide kinds.
//!
//! One renderer draws both the full-size slide and the miniature used for
//! the presenter's next-slide preview; only `scale` and `interactive` differ.

use eframe::egui::{
    Align, Align2, Color32, CornerRadius, CursorIcon, FontId, Frame, Layout, Margin, Rect,
    Response, RichText, Sense, Stroke, Ui, vec2,
};

use crate::domain::content::{ContentsCard, GalleryItem, Stat, Topic};
use crate::domain::{DECK_CONTENT, Slide, SlideKind};
use crate::engine::Command;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{gradient_colors, paint_gradient_rect, paint_rounded};

#[derive(Debug, Clone, Copy)]
pub struct SlideRenderer {
    scale: f32,
    interactive: bool,
}

impl SlideRenderer {
    pub fn full() -> Self {
        Self {
            scale: 1.0,
            interactive: true,
        }
    }

    /// Miniature, non-clickable rendering.
    pub fn preview() -> Self {
        Self {
            scale: UI_CONFIG.layout.preview_scale,
            interactive: false,
        }
    }

    fn s(&self, size: f32) -> f32 {
        size * self.scale
    }

    /// Draws `slide` and returns the jumps requested by clicks on it.
    pub fn render(&self, ui: &mut Ui, slide: &Slide) -> Vec<Command> {
        let mut events = Vec::new();
        match slide.kind {
            SlideKind::Title => self.title_slide(ui),
            SlideKind::Contents => self.contents_slide(ui, &mut events),
            SlideKind::MainContent => self.main_content_slide(ui),
            SlideKind::Statistics => self.statistics_slide(ui),
            SlideKind::Gallery => self.gallery_slide(ui),
        }
        events
    }

    // ------------------------------------------------------------------
    // Building blocks
    // ------------------------------------------------------------------

    fn card<R>(&self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> Response {
        let margin = (UI_CONFIG.layout.card_margin as f32 * self.scale).round() as i8;
        Frame::new()
            .fill(UI_CONFIG.colors.card)
            .corner_radius(CornerRadius::same(UI_CONFIG.layout.card_corner_radius))
            .inner_margin(Margin::same(margin.max(2)))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui)
            })
            .response
    }

    fn clickable(&self, ui: &Ui, response: Response) -> bool {
        if !self.interactive {
            return false;
        }
        let response = response
            .interact(Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);
        if response.hovered() {
            ui.painter().rect_stroke(
                response.rect,
                CornerRadius::same(UI_CONFIG.layout.card_corner_radius),
                Stroke::new(2.0, UI_CONFIG.colors.card_hover_stroke),
                eframe::egui::StrokeKind::Outside,
            );
        }
        response.clicked()
    }

    fn icon_tile(&self, ui: &mut Ui, icon: &str, stops: &[&str], size: f32) {
        let size = self.s(size);
        let (rect, _) = ui.allocate_exact_size(vec2(size, size), Sense::hover());
        paint_rounded(ui, rect, size * 0.2, stops);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            icon,
            FontId::proportional(size * 0.5),
            Color32::WHITE,
        );
    }

    fn heading(&self, ui: &mut Ui, text: &str, subtitle: &str, stops: &[&str]) {
        ui.vertical_centered(|ui| {
            ui.gradient_heading(text, self.s(44.0), stops);
            if !subtitle.is_empty() {
                ui.add_space(self.s(6.0));
                ui.body(subtitle, self.s(20.0));
            }
        });
        ui.add_space(self.s(28.0));
    }

    fn card_title(&self, ui: &mut Ui, text: &str, size: f32) {
        ui.label(
            RichText::new(text)
                .size(self.s(size))
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }

    // ------------------------------------------------------------------
    // Slides
    // ------------------------------------------------------------------

    fn title_slide(&self, ui: &mut Ui) {
        let title = &DECK_CONTENT.title;
        ui.vertical_centered(|ui| {
            ui.add_space(self.s(40.0));
            self.icon_tile(ui, title.icon, UI_CONFIG.gradients.full, 96.0);
            ui.add_space(self.s(28.0));
            ui.gradient_heading(title.heading, self.s(64.0), UI_CONFIG.gradients.full);
            ui.add_space(self.s(16.0));
            ui.body(title.subtitle, self.s(24.0));
            ui.add_space(self.s(24.0));
            ui.label(
                RichText::new(format!("📅 {}    •    🕒 {}", title.date, title.duration))
                    .size(self.s(16.0))
                    .color(UI_CONFIG.colors.subdued),
            );
        });
    }

    fn contents_slide(&self, ui: &mut Ui, events: &mut Vec<Command>) {
        let section = &DECK_CONTENT.contents;
        self.heading(
            ui,
            section.heading,
            section.subtitle,
            UI_CONFIG.gradients.primary_to_secondary,
        );

        let items = section.items;
        ui.columns(items.len().max(1), |columns| {
            for (column, item) in columns.iter_mut().zip(items) {
                if self.contents_card(column, item) {
                    events.push(Command::GoTo(item.target_slide));
                }
            }
        });
    }

    fn contents_card(&self, ui: &mut Ui, item: &ContentsCard) -> bool {
        let response = self.card(ui, |ui| {
            self.icon_tile(ui, item.icon, item.gradient, 64.0);
            ui.add_space(self.s(16.0));
            self.card_title(ui, item.title, 22.0);
            ui.add_space(self.s(6.0));
            ui.body(item.description, self.s(15.0));
            ui.add_space(self.s(16.0));
            let link_color = gradient_colors(UI_CONFIG.gradients.primary_to_secondary, 2)[0];
            ui.label(
                RichText::new(UI_TEXT.contents_link)
                    .size(self.s(15.0))
                    .strong()
                    .color(link_color),
            );
        });
        self.clickable(ui, response)
    }

    fn main_content_slide(&self, ui: &mut Ui) {
        let section = &DECK_CONTENT.main;
        self.heading(
            ui,
            section.heading,
            section.subtitle,
            UI_CONFIG.gradients.primary_to_accent,
        );
        for row in section.items.chunks(2) {
            ui.columns(2, |columns| {
                for (column, topic) in columns.iter_mut().zip(row) {
                    self.topic_card(column, topic);
                }
            });
            ui.add_space(self.s(16.0));
        }
    }

    fn topic_card(&self, ui: &mut Ui, topic: &Topic) {
        self.card(ui, |ui| {
            ui.horizontal(|ui| {
                self.icon_tile(ui, topic.icon, UI_CONFIG.gradients.primary_to_secondary, 56.0);
                ui.add_space(self.s(16.0));
                ui.vertical(|ui| {
                    self.card_title(ui, topic.title, 20.0);
                    ui.add_space(self.s(4.0));
                    ui.body(topic.description, self.s(15.0));
                });
            });
        });
    }

    fn statistics_slide(&self, ui: &mut Ui) {
        let section = &DECK_CONTENT.statistics;
        self.heading(
            ui,
            section.heading,
            section.subtitle,
            UI_CONFIG.gradients.secondary_to_accent,
        );
        for row in section.items.chunks(2) {
            ui.columns(2, |columns| {
                for (column, stat) in columns.iter_mut().zip(row) {
                    self.stat_card(column, stat);
                }
            });
            ui.add_space(self.s(16.0));
        }

        let highlight = &DECK_CONTENT.highlight;
        let banner = gradient_colors(UI_CONFIG.gradients.full, 3)[1];
        Frame::new()
            .fill(banner)
            .corner_radius(CornerRadius::same(UI_CONFIG.layout.card_corner_radius))
            .inner_margin(Margin::same(
                (UI_CONFIG.layout.card_margin as f32 * self.scale).round() as i8,
            ))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("{} {}", highlight.icon, highlight.heading))
                            .size(self.s(28.0))
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.add_space(self.s(6.0));
                    ui.label(
                        RichText::new(highlight.text)
                            .size(self.s(16.0))
                            .color(Color32::from_white_alpha(230)),
                    );
                });
            });
    }

    fn stat_card(&self, ui: &mut Ui, stat: &Stat) {
        self.card(ui, |ui| {
            ui.horizontal(|ui| {
                self.card_title(ui, stat.label, 18.0);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.gradient_heading(
                        &format!("{}%", stat.value),
                        self.s(32.0),
                        UI_CONFIG.gradients.primary_to_secondary,
                    );
                });
            });
            ui.add_space(self.s(10.0));

            let width = ui.available_width();
            let height = self.s(14.0).max(3.0);
            let (track, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
            ui.painter().rect_filled(
                track,
                CornerRadius::same((height / 2.0) as u8),
                UI_CONFIG.colors.track,
            );
            let filled = Rect::from_min_size(
                track.min,
                vec2(width * f32::from(stat.value.min(100)) / 100.0, height),
            );
            paint_gradient_rect(ui, filled, stat.gradient);
        });
    }

    fn gallery_slide(&self, ui: &mut Ui) {
        let section = &DECK_CONTENT.gallery;
        self.heading(
            ui,
            section.heading,
            section.subtitle,
            UI_CONFIG.gradients.accent_to_primary,
        );
        for row in section.items.chunks(3) {
            ui.columns(3, |columns| {
                for (column, item) in columns.iter_mut().zip(row) {
                    self.gallery_card(column, item);
                }
            });
            ui.add_space(self.s(16.0));
        }
    }

    fn gallery_card(&self, ui: &mut Ui, item: &GalleryItem) {
        self.card(ui, |ui| {
            let width = ui.available_width();
            let (band, _) = ui.allocate_exact_size(vec2(width, self.s(96.0)), Sense::hover());
            paint_gradient_rect(ui, band, item.gradient);
            ui.painter().text(
                band.center(),
                Align2::CENTER_CENTER,
                item.icon,
                FontId::proportional(self.s(40.0)),
                Color32::WHITE,
            );
            ui.add_space(self.s(12.0));
            self.card_title(ui, item.title, 18.0);
            ui.add_space(self.s(4.0));
            ui.body(item.description, self.s(14.0));
        });
    }
}
