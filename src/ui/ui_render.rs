use eframe::egui::{
    Align2, CentralPanel, Context, Frame, Grid, Key, Margin, RichText, ScrollArea, SidePanel,
    TopBottomPanel, Ui, Window, vec2,
};

use crate::domain::Slide;
use crate::engine::Command;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::shortcuts::{COMMAND_KEYS, command_for_key};
use crate::ui::slides::SlideRenderer;
use crate::ui::ui_panels::{NavigationBar, NotesPanel, Panel, PresenterControls, SlideJumpPanel};

use super::app::DeckViewerApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Draws `slide` horizontally centred within the configured content width.
fn centered_slide(ui: &mut Ui, slide: &Slide, id_salt: &str) -> Vec<Command> {
    let mut events = Vec::new();
    ScrollArea::vertical()
        .id_salt(id_salt)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let available = ui.available_width();
            let width = available.min(UI_CONFIG.layout.max_content_width);
            let side = ((available - width) / 2.0).max(0.0);
            ui.add_space(24.0);
            ui.horizontal(|ui| {
                ui.add_space(side);
                ui.vertical(|ui| {
                    ui.set_width(width);
                    events = SlideRenderer::full().render(ui, slide);
                });
            });
            ui.add_space(24.0);
        });
    events
}

impl DeckViewerApp {
    /// Full-screen single slide with the navigation bar underneath.
    pub(super) fn render_viewer_layout(&mut self, ctx: &Context) {
        let mut events = Vec::new();

        let bar_frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::symmetric(32, 8));
        TopBottomPanel::bottom("navigation_bar")
            .frame(bar_frame)
            .show_separator_line(false)
            .show(ctx, |ui| {
                let mut bar = NavigationBar::new(
                    self.engine.navigator(),
                    self.engine.deck(),
                    self.engine.is_presenter_active(),
                );
                events.extend(bar.render(ui));
            });

        let central_frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::same(32));
        CentralPanel::default().frame(central_frame).show(ctx, |ui| {
            events.extend(centered_slide(ui, self.engine.current_slide(), "slide_view"));
        });

        self.dispatch(events);
    }

    /// Docked layout: controls on top, slide in the centre, preview and
    /// notes on the right, jump row at the bottom.
    pub(super) fn render_presenter_layout(&mut self, ctx: &Context) {
        let mut events = Vec::new();

        let header_frame = Frame::new()
            .fill(UI_CONFIG.colors.panel)
            .inner_margin(Margin::symmetric(16, 8));
        TopBottomPanel::top("presenter_header")
            .frame(header_frame)
            .show(ctx, |ui| {
                let mut controls =
                    PresenterControls::new(self.engine.stopwatch(), self.engine.navigator());
                events.extend(controls.render(ui));
            });

        let footer_frame = Frame::new()
            .fill(UI_CONFIG.colors.panel)
            .inner_margin(Margin::symmetric(16, 8));
        TopBottomPanel::bottom("presenter_jump_bar")
            .frame(footer_frame)
            .show(ctx, |ui| {
                let mut jumps = SlideJumpPanel::new(self.engine.navigator(), self.engine.deck());
                events.extend(jumps.render(ui));
            });

        let side_frame = Frame::new()
            .fill(UI_CONFIG.colors.panel)
            .inner_margin(Margin::same(12));
        SidePanel::right("presenter_side")
            .frame(side_frame)
            .default_width(UI_CONFIG.layout.presenter_side_width)
            .resizable(true)
            .show(ctx, |ui| {
                let mut notes =
                    NotesPanel::new(self.engine.current_slide(), self.engine.next_slide());
                events.extend(notes.render(ui));
            });

        let central_frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::same(16));
        CentralPanel::default().frame(central_frame).show(ctx, |ui| {
            events.extend(centered_slide(
                ui,
                self.engine.current_slide(),
                "presenter_slide_view",
            ));
        });

        self.dispatch(events);
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        let mut open = self.show_help;
        Window::new(UI_TEXT.help_heading)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .open(&mut open)
            .show(ctx, |ui| {
                Grid::new("shortcut_help")
                    .striped(true)
                    .spacing(vec2(24.0, 6.0))
                    .show(ui, |ui| {
                        for (keys, action) in UI_TEXT.help_rows {
                            ui.label(RichText::new(*keys).monospace().strong());
                            ui.label(*action);
                            ui.end_row();
                        }
                    });
            });
        self.show_help = open;
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        let last_index = self.engine.navigator().last();
        let mut events = Vec::new();

        ctx.input(|i| {
            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }
            if i.key_pressed(Key::Escape) && self.show_help {
                self.show_help = false;
            }

            for key in COMMAND_KEYS {
                if i.key_pressed(key) {
                    if let Some(command) = command_for_key(key, last_index) {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_shortcuts {
                            log::info!("[keys] {:?} -> {}", key, command);
                        }
                        events.push(command);
                    }
                }
            }
        });

        self.dispatch(events);
    }
}
