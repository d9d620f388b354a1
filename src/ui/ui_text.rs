/// Every user-facing string in one place
pub struct UiText {
    pub window_title: &'static str,
    pub nav_prev: &'static str,
    pub nav_next: &'static str,
    pub slide_position_prefix: &'static str,
    pub slide_position_separator: &'static str,
    pub presenter_enter: &'static str,
    pub presenter_exit: &'static str,
    pub timer_heading: &'static str,
    pub timer_start: &'static str,
    pub timer_pause: &'static str,
    pub timer_reset: &'static str,
    pub clock_heading: &'static str,
    pub next_slide_heading: &'static str,
    pub end_of_deck: &'static str,
    pub notes_heading: &'static str,
    pub no_notes: &'static str,
    pub jump_heading: &'static str,
    pub contents_link: &'static str,
    pub help_heading: &'static str,
    pub help_rows: &'static [(&'static str, &'static str)],
    pub dot_tooltip_prefix: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Deck Viewer",
    nav_prev: "⏴ Back",
    nav_next: "Next ⏵",
    slide_position_prefix: "Slide ",
    slide_position_separator: " of ",
    presenter_enter: "🖥 Presenter mode",
    presenter_exit: "⛶ Exit presenter mode",
    timer_heading: "Elapsed",
    timer_start: "▶ Start",
    timer_pause: "⏸ Pause",
    timer_reset: "⟲ Reset",
    clock_heading: "Clock",
    next_slide_heading: "Next slide",
    end_of_deck: "End of presentation",
    notes_heading: "Speaker notes",
    no_notes: "No notes for this slide.",
    jump_heading: "Slides",
    contents_link: "Go ➡",
    help_heading: "Keyboard shortcuts",
    help_rows: &[
        ("→ / PgDn / Space", "Next slide"),
        ("← / PgUp", "Previous slide"),
        ("Home / End", "First / last slide"),
        ("1 – 9", "Jump to slide"),
        ("P", "Toggle presenter mode"),
        ("T", "Start / pause timer"),
        ("R", "Reset timer"),
        ("H", "Show / hide this help"),
        ("Esc", "Close help"),
    ],
    dot_tooltip_prefix: "Go to slide ",
};

impl UiText {
    /// "Slide 3 of 5"
    pub fn slide_position(&self, ordinal: usize, total: usize) -> String {
        format!(
            "{}{}{}{}",
            self.slide_position_prefix, ordinal, self.slide_position_separator, total
        )
    }
}
