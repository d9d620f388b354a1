use eframe::egui::{
    Button, CornerRadius, CursorIcon, Layout, RichText, ScrollArea, Sense, Ui, vec2, Align,
};

use crate::domain::{Slide, SlideDeck};
use crate::engine::{Command, Navigator, Stopwatch};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::slides::SlideRenderer;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{gradient_colors, paint_gradient_rect, spaced_separator};
use crate::utils::time_utils::local_clock_now;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

fn nav_button(ui: &mut Ui, text: &str, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(RichText::new(text).size(16.0)).min_size(vec2(110.0, 36.0)))
        .clicked()
}

/// Bottom bar of the full-screen layout: prev, indicator dots, next.
pub struct NavigationBar<'a> {
    navigator: &'a Navigator,
    deck: &'a SlideDeck,
    presenter_active: bool,
}

impl<'a> NavigationBar<'a> {
    pub fn new(navigator: &'a Navigator, deck: &'a SlideDeck, presenter_active: bool) -> Self {
        Self {
            navigator,
            deck,
            presenter_active,
        }
    }

    fn render_dots(&self, ui: &mut Ui) -> Option<usize> {
        let mut clicked = None;
        let layout = &UI_CONFIG.layout;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;
            for slide in self.deck.iter() {
                let active = self.navigator.is_current(slide.index);
                let width = if active {
                    layout.active_dot_width
                } else {
                    layout.dot_size
                };
                let (rect, response) =
                    ui.allocate_exact_size(vec2(width, layout.dot_size), Sense::click());
                let radius = CornerRadius::same((layout.dot_size / 2.0) as u8);
                if active {
                    paint_gradient_rect(ui, rect, UI_CONFIG.gradients.primary_to_secondary);
                } else {
                    let color = if response.hovered() {
                        UI_CONFIG.colors.subdued
                    } else {
                        UI_CONFIG.colors.dot_inactive
                    };
                    ui.painter().rect_filled(rect, radius, color);
                }
                let response = response
                    .on_hover_cursor(CursorIcon::PointingHand)
                    .on_hover_text(format!("{}{}", UI_TEXT.dot_tooltip_prefix, slide.ordinal()));
                if response.clicked() {
                    clicked = Some(slide.index);
                }
            }
        });
        clicked
    }
}

impl<'a> Panel for NavigationBar<'a> {
    type Event = Command;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.add_space(8.0);
        ui.columns(3, |columns| {
            if nav_button(&mut columns[0], UI_TEXT.nav_prev, self.navigator.can_go_prev()) {
                events.push(Command::Prev);
            }

            columns[1].vertical_centered(|ui| {
                ui.add_space(14.0);
                if let Some(index) = self.render_dots(ui) {
                    events.push(Command::GoTo(index));
                }
            });

            columns[2].with_layout(Layout::right_to_left(Align::Center), |ui| {
                if nav_button(ui, UI_TEXT.nav_next, self.navigator.can_go_next()) {
                    events.push(Command::Next);
                }
                let toggle_text = if self.presenter_active {
                    UI_TEXT.presenter_exit
                } else {
                    UI_TEXT.presenter_enter
                };
                if ui.button(toggle_text).clicked() {
                    events.push(Command::TogglePresenter);
                }
            });
        });

        let (ordinal, total) = self.navigator.position();
        ui.vertical_centered(|ui| {
            ui.label_subdued(UI_TEXT.slide_position(ordinal, total));
        });
        ui.add_space(8.0);
        events
    }
}

/// Presenter header: stopwatch with play/pause and reset, wall clock, exit.
pub struct PresenterControls<'a> {
    stopwatch: &'a Stopwatch,
    navigator: &'a Navigator,
}

impl<'a> PresenterControls<'a> {
    pub fn new(stopwatch: &'a Stopwatch, navigator: &'a Navigator) -> Self {
        Self {
            stopwatch,
            navigator,
        }
    }
}

impl<'a> Panel for PresenterControls<'a> {
    type Event = Command;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            ui.label_header(UI_TEXT.timer_heading);
            let color = if self.stopwatch.is_running() {
                UI_CONFIG.colors.timer_running
            } else {
                UI_CONFIG.colors.timer_paused
            };
            ui.label(
                RichText::new(self.stopwatch.display())
                    .size(28.0)
                    .monospace()
                    .strong()
                    .color(color),
            );

            let toggle_text = if self.stopwatch.is_running() {
                UI_TEXT.timer_pause
            } else {
                UI_TEXT.timer_start
            };
            if ui.button(toggle_text).clicked() {
                events.push(Command::ToggleTimer);
            }
            if ui.button(UI_TEXT.timer_reset).clicked() {
                events.push(Command::ResetTimer);
            }

            ui.separator();
            ui.metric(UI_TEXT.clock_heading, &local_clock_now(), UI_CONFIG.colors.heading);
            ui.separator();
            let (ordinal, total) = self.navigator.position();
            ui.label_subdued(UI_TEXT.slide_position(ordinal, total));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(UI_TEXT.presenter_exit).clicked() {
                    events.push(Command::TogglePresenter);
                }
            });
        });
        events
    }
}

/// Presenter footer: prev / next plus one jump button per slide.
pub struct SlideJumpPanel<'a> {
    navigator: &'a Navigator,
    deck: &'a SlideDeck,
}

impl<'a> SlideJumpPanel<'a> {
    pub fn new(navigator: &'a Navigator, deck: &'a SlideDeck) -> Self {
        Self { navigator, deck }
    }
}

impl<'a> Panel for SlideJumpPanel<'a> {
    type Event = Command;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal_wrapped(|ui| {
            if nav_button(ui, UI_TEXT.nav_prev, self.navigator.can_go_prev()) {
                events.push(Command::Prev);
            }
            if nav_button(ui, UI_TEXT.nav_next, self.navigator.can_go_next()) {
                events.push(Command::Next);
            }
            ui.separator();
            ui.label_subdued(UI_TEXT.jump_heading);
            let active_color = gradient_colors(UI_CONFIG.gradients.primary_to_secondary, 2)[0];
            for slide in self.deck.iter() {
                let active = self.navigator.is_current(slide.index);
                let mut text = RichText::new(slide.jump_label());
                if active {
                    text = text.strong().color(active_color);
                }
                if ui.selectable_label(active, text).clicked() {
                    events.push(Command::GoTo(slide.index));
                }
            }
        });
        events
    }
}

/// Presenter side panel: next-slide preview above the speaker notes.
pub struct NotesPanel<'a> {
    current: &'a Slide,
    next: Option<&'a Slide>,
}

impl<'a> NotesPanel<'a> {
    pub fn new(current: &'a Slide, next: Option<&'a Slide>) -> Self {
        Self { current, next }
    }

    fn render_preview(&self, ui: &mut Ui) {
        ui.label_header(UI_TEXT.next_slide_heading);
        ui.add_space(4.0);
        match self.next {
            Some(next) => {
                ui.label_subdued(next.jump_label());
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ScrollArea::vertical()
                        .id_salt("next_slide_preview")
                        .max_height(ui.available_height() * 0.5)
                        .show(ui, |ui| {
                            // Preview is not clickable, so it never produces events
                            let _ = SlideRenderer::preview().render(ui, next);
                        });
                });
            }
            None => {
                ui.label_subdued(UI_TEXT.end_of_deck);
            }
        }
    }
}

impl<'a> Panel for NotesPanel<'a> {
    type Event = Command;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        self.render_preview(ui);
        spaced_separator(ui);

        ui.label_header(UI_TEXT.notes_heading);
        ui.add_space(4.0);
        eframe::egui::Frame::new()
            .fill(UI_CONFIG.colors.notes_fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(eframe::egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ScrollArea::vertical()
                    .id_salt("speaker_notes")
                    .show(ui, |ui| {
                        if self.current.notes.trim().is_empty() {
                            ui.label_subdued(UI_TEXT.no_notes);
                        } else {
                            ui.body(&self.current.notes, 16.0);
                        }
                    });
            });
        Vec::new()
    }
}
