#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use domain::{Slide, SlideDeck, SlideKind, builtin_deck};
pub use engine::{Command, DeckEngine, PresenterState};
pub use ui::DeckViewerApp;
pub use utils::app_time;

use anyhow::{Context, Result};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Open directly in presenter mode
    #[arg(long, default_value_t = false)]
    pub presenter: bool,

    /// Slide to open on (1-based). Values past the end open the last slide
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub start_slide: usize,

    /// Start the presenter stopwatch immediately
    #[arg(long, default_value_t = false)]
    pub start_timer: bool,

    /// Print the slide table as JSON and exit
    #[arg(long, default_value_t = false)]
    pub dump_deck: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            presenter: false,
            start_slide: 1,
            start_timer: false,
            dump_deck: false,
        }
    }
}

impl Cli {
    /// Commands that put a fresh engine into the state the flags ask for.
    pub fn startup_commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();
        let start_index = self.start_slide.saturating_sub(1);
        if start_index > 0 {
            commands.push(Command::GoTo(start_index));
        }
        if self.presenter {
            commands.push(Command::TogglePresenter);
        }
        if self.start_timer {
            commands.push(Command::ToggleTimer);
        }
        commands
    }
}

/// Builds the engine for the built-in deck and applies the CLI startup state.
pub fn build_engine(args: &Cli) -> Result<DeckEngine> {
    let deck = builtin_deck().context("Built-in slide deck failed validation")?;
    let mut engine = DeckEngine::new(deck);
    let at = app_time::now();
    for command in args.startup_commands() {
        engine.apply(command, at);
    }
    Ok(engine)
}

/// Pretty JSON of the slide table, for `--dump-deck`.
pub fn dump_deck(deck: &SlideDeck) -> Result<String> {
    serde_json::to_string_pretty(deck).context("Failed to serialise slide deck")
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, engine: DeckEngine) -> Box<dyn eframe::App> {
    let app = ui::DeckViewerApp::new(cc, engine);
    Box::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cli_opens_first_slide_in_viewer_mode() {
        let engine = build_engine(&Cli::default()).expect("engine builds");
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.presenter_state(), PresenterState::default());
    }

    #[test]
    fn cli_flags_become_startup_state() {
        let args = Cli::parse_from([
            "deck-viewer",
            "--presenter",
            "--start-slide",
            "3",
            "--start-timer",
        ]);
        let engine = build_engine(&args).expect("engine builds");
        assert_eq!(engine.current_index(), 2);
        assert!(engine.is_presenter_active());
        assert!(engine.stopwatch().is_running());
    }

    #[test]
    fn start_slide_past_the_end_clamps() {
        let args = Cli::parse_from(["deck-viewer", "--start-slide", "42"]);
        let engine = build_engine(&args).expect("engine builds");
        assert_eq!(engine.current_index(), 4);
    }

    #[test]
    fn dumped_deck_lists_every_slide() {
        let deck = builtin_deck().expect("built-in deck is valid");
        let json = dump_deck(&deck).expect("serialises");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let slides = value["slides"].as_array().expect("slides array");
        assert_eq!(slides.len(), 5);
        assert_eq!(slides[3]["kind"], "Statistics");
        assert_eq!(slides[0]["index"], 0);
    }
}
