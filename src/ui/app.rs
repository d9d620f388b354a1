use eframe::{Frame, egui};

use crate::engine::{Command, DeckEngine};
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The eframe application. Owns the engine plus view-only state.
pub struct DeckViewerApp {
    pub(super) engine: DeckEngine,
    // Shortcut help overlay (view-only, never touches the engine)
    pub(super) show_help: bool,
}

impl DeckViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, engine: DeckEngine) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        Self {
            engine,
            show_help: false,
        }
    }

    /// Apply a batch of commands produced by panels or shortcuts this frame.
    pub(super) fn dispatch(&mut self, events: Vec<Command>) {
        if events.is_empty() {
            return;
        }
        let at = now();
        for command in events {
            self.engine.apply(command, at);
        }
    }

    pub fn engine(&self) -> &DeckEngine {
        &self.engine
    }
}

impl eframe::App for DeckViewerApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Cancel the stopwatch schedule so nothing keeps ticking after close
        self.engine.teardown();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!(
                "Application shutdown complete (elapsed {}).",
                self.engine.elapsed_display()
            );
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 1. Drain due stopwatch ticks
        self.engine.update(now());

        // 2. Keyboard
        self.handle_global_shortcuts(ctx);

        // 3. Layout
        if self.engine.is_presenter_active() {
            self.render_presenter_layout(ctx);
        } else {
            self.render_viewer_layout(ctx);
        }
        if self.show_help {
            self.render_help_panel(ctx);
        }

        // 4. Keep waking up while the clock runs (it may have started this frame)
        if let Some(delay) = self.engine.repaint_delay(now()) {
            ctx.request_repaint_after(delay);
        }
    }
}
