// Domain types: the slide table and the static content each slide draws
pub mod content;
pub mod slide;

// Re-export commonly used types
pub use content::{builtin_deck, DECK_CONTENT};
pub use slide::{DeckError, Slide, SlideDeck, SlideKind};
