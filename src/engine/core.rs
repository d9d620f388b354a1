use std::time::Duration;

use crate::config::TIMING;
use crate::domain::{Slide, SlideDeck};
use crate::utils::app_time::{self, AppInstant};

use super::messages::Command;
use super::navigation::Navigator;
use super::state::PresenterState;
use super::stopwatch::Stopwatch;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Single owner of all viewer state.
///
/// The UI never mutates fields directly: clicks and key presses become
/// [`Command`]s passed to [`DeckEngine::apply`], and the per-frame
/// [`DeckEngine::update`] drains stopwatch ticks.
pub struct DeckEngine {
    deck: SlideDeck,
    navigator: Navigator,
    presenter_active: bool,
    stopwatch: Stopwatch,
}

impl DeckEngine {
    pub fn new(deck: SlideDeck) -> Self {
        let navigator = Navigator::new(deck.len());
        Self {
            deck,
            navigator,
            presenter_active: false,
            stopwatch: Stopwatch::new(TIMING.tick_period),
        }
    }

    /// Apply one user command. Returns true if anything visible changed.
    pub fn apply(&mut self, command: Command, now: AppInstant) -> bool {
        let changed = match command {
            Command::Next => self.navigator.next(),
            Command::Prev => self.navigator.prev(),
            Command::GoTo(index) => self.navigator.go_to(index),
            Command::TogglePresenter => {
                self.presenter_active = !self.presenter_active;
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_presenter {
                    log::info!(
                        "[presenter] {}",
                        if self.presenter_active { "entered" } else { "exited" }
                    );
                }
                true
            }
            Command::ToggleTimer => {
                self.stopwatch.toggle(now);
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_timer {
                    log::info!(
                        "[timer] {} at {}",
                        if self.stopwatch.is_running() { "started" } else { "paused" },
                        self.stopwatch.display()
                    );
                }
                true
            }
            Command::ResetTimer => {
                self.stopwatch.reset();
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_timer {
                    log::info!("[timer] reset");
                }
                true
            }
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_navigation
            && changed
            && matches!(command, Command::Next | Command::Prev | Command::GoTo(_))
        {
            let (n, total) = self.navigator.position();
            log::info!("[nav] {} -> slide {}/{}", command, n, total);
        }

        changed
    }

    /// Per-frame pump. Applies due stopwatch ticks and returns true while the
    /// stopwatch is running, i.e. while the UI must keep waking up.
    pub fn update(&mut self, now: AppInstant) -> bool {
        let _applied = self.stopwatch.poll(now);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_timer_ticks && _applied > 0 {
            log::debug!("[timer] +{}s -> {}", _applied, self.stopwatch.display());
        }

        self.stopwatch.is_running()
    }

    /// How long the UI may sleep before the next tick is due.
    pub fn repaint_delay(&self, now: AppInstant) -> Option<Duration> {
        self.stopwatch
            .next_deadline()
            .map(|deadline| app_time::until(deadline, now).min(TIMING.max_repaint_interval))
    }

    /// Cancel the stopwatch schedule. Called when the window closes.
    pub fn teardown(&mut self) {
        self.stopwatch.teardown();
    }

    // --- ACCESSORS ---

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current()
    }

    pub fn current_slide(&self) -> &Slide {
        // The navigator is sized from the deck, so the index is always valid
        &self.deck.slides()[self.navigator.current()]
    }

    pub fn next_slide(&self) -> Option<&Slide> {
        self.navigator
            .next_index()
            .and_then(|index| self.deck.get(index))
    }

    pub fn is_presenter_active(&self) -> bool {
        self.presenter_active
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn elapsed_display(&self) -> String {
        self.stopwatch.display()
    }

    pub fn presenter_state(&self) -> PresenterState {
        PresenterState {
            is_active: self.presenter_active,
            timer_running: self.stopwatch.is_running(),
            elapsed_seconds: self.stopwatch.elapsed_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builtin_deck;
    use crate::utils::app_time::now;

    fn engine() -> DeckEngine {
        DeckEngine::new(builtin_deck().expect("built-in deck is valid"))
    }

    #[test]
    fn presenter_toggle_leaves_navigation_and_timer_alone() {
        let t0 = now();
        let mut engine = engine();
        engine.apply(Command::GoTo(2), t0);
        engine.apply(Command::ToggleTimer, t0);
        engine.update(t0 + Duration::from_secs(4));

        engine.apply(Command::TogglePresenter, t0 + Duration::from_secs(4));
        assert!(engine.is_presenter_active());
        assert_eq!(engine.current_index(), 2);
        assert_eq!(
            engine.presenter_state(),
            PresenterState {
                is_active: true,
                timer_running: true,
                elapsed_seconds: 4,
            }
        );
    }

    #[test]
    fn update_reports_busy_only_while_running() {
        let t0 = now();
        let mut engine = engine();
        assert!(!engine.update(t0));
        engine.apply(Command::ToggleTimer, t0);
        assert!(engine.update(t0));
        engine.apply(Command::ToggleTimer, t0);
        assert!(!engine.update(t0));
    }

    #[test]
    fn repaint_delay_tracks_next_tick() {
        let t0 = now();
        let mut engine = engine();
        assert_eq!(engine.repaint_delay(t0), None);
        engine.apply(Command::ToggleTimer, t0);
        assert_eq!(
            engine.repaint_delay(t0 + Duration::from_millis(400)),
            Some(Duration::from_millis(600))
        );
    }

    #[test]
    fn next_slide_preview_follows_navigation() {
        let t0 = now();
        let mut engine = engine();
        assert_eq!(engine.next_slide().map(|s| s.index), Some(1));
        engine.apply(Command::GoTo(4), t0);
        assert!(engine.next_slide().is_none());
        assert_eq!(engine.current_slide().index, 4);
    }

    #[test]
    fn teardown_stops_the_clock() {
        let t0 = now();
        let mut engine = engine();
        engine.apply(Command::ToggleTimer, t0);
        engine.teardown();
        assert!(!engine.update(t0 + Duration::from_secs(3)));
        assert_eq!(engine.elapsed_display(), "00:00");
    }
}
