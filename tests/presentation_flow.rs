use std::time::Duration;

use deck_viewer::app_time::now;
use deck_viewer::{Command, DeckEngine, builtin_deck};

fn engine() -> DeckEngine {
    DeckEngine::new(builtin_deck().expect("built-in deck is valid"))
}

#[test]
fn walking_forward_stops_on_the_last_slide() {
    let t0 = now();
    let mut engine = engine();
    for _ in 0..4 {
        engine.apply(Command::Next, t0);
    }
    assert_eq!(engine.current_index(), 4);

    assert!(!engine.apply(Command::Next, t0));
    assert_eq!(engine.current_index(), 4);
    assert!(!engine.navigator().can_go_next());
}

#[test]
fn prev_on_the_first_slide_changes_nothing() {
    let t0 = now();
    let mut engine = engine();
    assert!(!engine.apply(Command::Prev, t0));
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn any_sequence_of_moves_stays_in_range() {
    let t0 = now();
    let mut engine = engine();
    let last = engine.deck().last_index();
    let moves = [
        Command::Prev,
        Command::Next,
        Command::Next,
        Command::Next,
        Command::Next,
        Command::Next,
        Command::Next,
        Command::Prev,
        Command::Prev,
        Command::Prev,
        Command::Prev,
        Command::Prev,
        Command::Prev,
    ];
    for command in moves.iter().cycle().take(130) {
        engine.apply(*command, t0);
        assert!(engine.current_index() <= last);
    }
}

#[test]
fn direct_jumps_land_exactly_or_clamp() {
    let t0 = now();
    let mut engine = engine();
    for index in 0..engine.deck().len() {
        engine.apply(Command::GoTo(index), t0);
        assert_eq!(engine.current_index(), index);
    }
    engine.apply(Command::GoTo(usize::MAX), t0);
    assert_eq!(engine.current_index(), engine.deck().last_index());
}

#[test]
fn reset_in_presenter_mode_stops_and_zeroes_the_clock() {
    let t0 = now();
    let mut engine = engine();
    engine.apply(Command::TogglePresenter, t0);
    engine.apply(Command::ToggleTimer, t0);
    engine.update(t0 + Duration::from_secs(7));
    assert_eq!(engine.elapsed_display(), "00:07");

    engine.apply(Command::ResetTimer, t0 + Duration::from_secs(7));
    let state = engine.presenter_state();
    assert!(state.is_active);
    assert!(!state.timer_running);
    assert_eq!(state.elapsed_seconds, 0);
    assert_eq!(engine.elapsed_display(), "00:00");
}

#[test]
fn navigation_does_not_disturb_a_running_clock() {
    let t0 = now();
    let mut engine = engine();
    engine.apply(Command::ToggleTimer, t0);
    engine.apply(Command::Next, t0 + Duration::from_millis(500));
    engine.apply(Command::GoTo(3), t0 + Duration::from_millis(800));
    engine.update(t0 + Duration::from_secs(3));
    assert_eq!(engine.presenter_state().elapsed_seconds, 3);

    engine.apply(Command::ToggleTimer, t0 + Duration::from_secs(3));
    engine.update(t0 + Duration::from_secs(20));
    assert_eq!(engine.presenter_state().elapsed_seconds, 3);
}

#[test]
fn long_talks_print_minutes_past_sixty() {
    let t0 = now();
    let mut engine = engine();
    engine.apply(Command::ToggleTimer, t0);
    engine.update(t0 + Duration::from_secs(3661));
    assert_eq!(engine.elapsed_display(), "61:01");
}
