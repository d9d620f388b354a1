//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` by default
//! so release builds remain quiet. Every check site is additionally gated by
//! `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit a line for every slide change (next / prev / jump).
    pub print_navigation: bool,

    /// Emit stopwatch start / pause / reset events.
    pub print_timer: bool,

    /// Emit a line per processed tick. Very chatty.
    pub print_timer_ticks: bool,

    /// Emit presenter-mode enter / exit.
    pub print_presenter: bool,

    /// Emit the command produced by each keyboard shortcut.
    pub print_shortcuts: bool,

    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_navigation: true,
    print_timer: true,
    print_timer_ticks: false,
    print_presenter: true,
    print_shortcuts: false,
    print_shutdown: false,
};
