use eframe::egui::Key;

use crate::engine::Command;

const DIGIT_KEYS: [Key; 9] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

/// Keys that map onto deck commands. Help toggling (H / Esc) is handled by
/// the app since it is view-only state.
pub const COMMAND_KEYS: [Key; 19] = [
    Key::ArrowRight,
    Key::PageDown,
    Key::Space,
    Key::ArrowLeft,
    Key::PageUp,
    Key::Home,
    Key::End,
    Key::P,
    Key::T,
    Key::R,
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

/// Translate a key press into a deck command. `last_index` is the index of
/// the final slide, used by `End`. Digits jump to that slide (clamped by
/// the navigator when the deck is shorter).
pub fn command_for_key(key: Key, last_index: usize) -> Option<Command> {
    match key {
        Key::ArrowRight | Key::PageDown | Key::Space => Some(Command::Next),
        Key::ArrowLeft | Key::PageUp => Some(Command::Prev),
        Key::Home => Some(Command::GoTo(0)),
        Key::End => Some(Command::GoTo(last_index)),
        Key::P => Some(Command::TogglePresenter),
        Key::T => Some(Command::ToggleTimer),
        Key::R => Some(Command::ResetTimer),
        _ => DIGIT_KEYS
            .iter()
            .position(|digit| *digit == key)
            .map(Command::GoTo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_paging_navigate() {
        assert_eq!(command_for_key(Key::ArrowRight, 4), Some(Command::Next));
        assert_eq!(command_for_key(Key::Space, 4), Some(Command::Next));
        assert_eq!(command_for_key(Key::PageUp, 4), Some(Command::Prev));
    }

    #[test]
    fn home_end_jump_to_bounds() {
        assert_eq!(command_for_key(Key::Home, 4), Some(Command::GoTo(0)));
        assert_eq!(command_for_key(Key::End, 4), Some(Command::GoTo(4)));
    }

    #[test]
    fn digits_are_one_based() {
        assert_eq!(command_for_key(Key::Num1, 4), Some(Command::GoTo(0)));
        assert_eq!(command_for_key(Key::Num5, 4), Some(Command::GoTo(4)));
        assert_eq!(command_for_key(Key::Num9, 4), Some(Command::GoTo(8)));
    }

    #[test]
    fn presenter_keys() {
        assert_eq!(command_for_key(Key::P, 4), Some(Command::TogglePresenter));
        assert_eq!(command_for_key(Key::T, 4), Some(Command::ToggleTimer));
        assert_eq!(command_for_key(Key::R, 4), Some(Command::ResetTimer));
        assert_eq!(command_for_key(Key::H, 4), None);
    }

    #[test]
    fn every_listed_key_maps_to_a_command() {
        assert!(COMMAND_KEYS.iter().all(|key| command_for_key(*key, 4).is_some()));
    }
}
