use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which renderer draws a slide.
/// The variant order is the canonical order of the built-in deck.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum SlideKind {
    Title,
    Contents,
    MainContent,
    Statistics,
    Gallery,
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideKind::Title => write!(f, "Title"),
            SlideKind::Contents => write!(f, "Contents"),
            SlideKind::MainContent => write!(f, "Main content"),
            SlideKind::Statistics => write!(f, "Statistics"),
            SlideKind::Gallery => write!(f, "Gallery"),
        }
    }
}

/// One static screen of the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub index: usize,
    pub title: String,
    pub notes: String,
    pub kind: SlideKind,
}

impl Slide {
    pub fn new(index: usize, kind: SlideKind, title: &str, notes: &str) -> Self {
        Self {
            index,
            title: title.to_string(),
            notes: notes.to_string(),
            kind,
        }
    }

    /// 1-based position, as shown to the audience.
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }

    /// Label used by the presenter jump buttons, e.g. "3. Key aspects".
    pub fn jump_label(&self) -> String {
        format!("{}. {}", self.ordinal(), self.title)
    }
}

/// Error types for deck construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// A deck needs at least one slide to navigate
    Empty,
    /// A slide's index does not match its position in the sequence
    IndexMismatch { position: usize, index: usize },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Empty => write!(f, "Deck contains no slides"),
            DeckError::IndexMismatch { position, index } => write!(
                f,
                "Slide at position {} declares index {} (indices must be 0..n in order)",
                position, index
            ),
        }
    }
}

impl std::error::Error for DeckError {}

/// Ordered, validated sequence of slides.
///
/// Invariant: non-empty and `slides[i].index == i`, so indices are unique and
/// the order of the vector is the navigation order.
#[derive(Clone, Debug, Serialize)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        if let Some((position, slide)) = slides
            .iter()
            .enumerate()
            .find(|(position, slide)| slide.index != *position)
        {
            return Err(DeckError::IndexMismatch {
                position,
                index: slide.index,
            });
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    // Always false for a constructed deck
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(SlideDeck::new(Vec::new()).unwrap_err(), DeckError::Empty);
    }

    #[test]
    fn misordered_indices_are_rejected() {
        let slides = vec![
            Slide::new(0, SlideKind::Title, "A", ""),
            Slide::new(2, SlideKind::Contents, "B", ""),
            Slide::new(1, SlideKind::Gallery, "C", ""),
        ];
        let err = SlideDeck::new(slides).unwrap_err();
        assert_eq!(
            err,
            DeckError::IndexMismatch {
                position: 1,
                index: 2
            }
        );
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn duplicate_indices_are_rejected() {
        let slides = vec![
            Slide::new(0, SlideKind::Title, "A", ""),
            Slide::new(0, SlideKind::Contents, "B", ""),
        ];
        assert!(SlideDeck::new(slides).is_err());
    }

    #[test]
    fn jump_label_is_one_based() {
        let slide = Slide::new(2, SlideKind::MainContent, "Key aspects", "");
        assert_eq!(slide.ordinal(), 3);
        assert_eq!(slide.jump_label(), "3. Key aspects");
    }
}
