//! The static content of the built-in deck.
//!
//! Everything here is hard-coded presentation data: text, icon glyphs,
//! percentages and gradient stops. Gradient stops are HTML hex strings so
//! they can be fed straight into `colorgrad`.

use strum::IntoEnumIterator;

use super::slide::{DeckError, Slide, SlideDeck, SlideKind};

pub const PURPLE: &str = "#a855f7";
pub const PINK: &str = "#ec4899";
pub const ORANGE: &str = "#f97316";
pub const BLUE: &str = "#3b82f6";
pub const GREEN: &str = "#22c55e";
pub const RED: &str = "#ef4444";
pub const INDIGO: &str = "#6366f1";

pub struct TitleContent {
    pub icon: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub date: &'static str,
    pub duration: &'static str,
}

/// Table-of-contents card; clicking it jumps to `target_slide`.
pub struct ContentsCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static [&'static str],
    pub target_slide: usize,
}

pub struct Topic {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub label: &'static str,
    /// Percentage in 0..=100
    pub value: u8,
    pub gradient: &'static [&'static str],
}

pub struct Highlight {
    pub icon: &'static str,
    pub heading: &'static str,
    pub text: &'static str,
}

pub struct GalleryItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static [&'static str],
}

pub struct SectionContent<T: 'static> {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [T],
}

pub struct DeckContent {
    pub title: TitleContent,
    pub contents: SectionContent<ContentsCard>,
    pub main: SectionContent<Topic>,
    pub statistics: SectionContent<Stat>,
    pub highlight: Highlight,
    pub gallery: SectionContent<GalleryItem>,
}

pub const DECK_CONTENT: DeckContent = DeckContent {
    title: TitleContent {
        icon: "🎓",
        heading: "Modern Education",
        subtitle: "Innovative approaches to learning in the digital age",
        date: "30 November 2025",
        duration: "45 minutes",
    },
    contents: SectionContent {
        heading: "Presentation contents",
        subtitle: "",
        items: &[
            ContentsCard {
                icon: "📖",
                title: "Main content",
                description: "Key concepts and methodology",
                gradient: &[PURPLE, PINK],
                target_slide: 2,
            },
            ContentsCard {
                icon: "📊",
                title: "Statistics and data",
                description: "Research results and metrics",
                gradient: &[PINK, ORANGE],
                target_slide: 3,
            },
            ContentsCard {
                icon: "🖼",
                title: "Gallery of work",
                description: "Practical examples and case studies",
                gradient: &[BLUE, PURPLE],
                target_slide: 4,
            },
        ],
    },
    main: SectionContent {
        heading: "Key aspects",
        subtitle: "Main directions of modern education",
        items: &[
            Topic {
                icon: "💡",
                title: "Personalised learning",
                description: "Adaptive learning paths for every student",
            },
            Topic {
                icon: "👥",
                title: "Collaborative learning",
                description: "Group projects and peer-to-peer interaction",
            },
            Topic {
                icon: "💻",
                title: "Digital tools",
                description: "Interactive platforms and multimedia content",
            },
            Topic {
                icon: "🎯",
                title: "Gamification",
                description: "Motivation through game mechanics and achievements",
            },
        ],
    },
    statistics: SectionContent {
        heading: "Research results",
        subtitle: "Key performance indicators",
        items: &[
            Stat {
                label: "Student engagement",
                value: 87,
                gradient: &[PURPLE, PINK],
            },
            Stat {
                label: "Academic performance",
                value: 92,
                gradient: &[PINK, ORANGE],
            },
            Stat {
                label: "Satisfaction",
                value: 85,
                gradient: &[BLUE, PURPLE],
            },
            Stat {
                label: "Course completion",
                value: 78,
                gradient: &[GREEN, BLUE],
            },
        ],
    },
    highlight: Highlight {
        icon: "📈",
        heading: "34% growth",
        text: "Learning effectiveness has increased compared to traditional methods",
    },
    gallery: SectionContent {
        heading: "Tools and technologies",
        subtitle: "Practical examples of modern solutions",
        items: &[
            GalleryItem {
                icon: "🖥",
                title: "Interactive whiteboard",
                description: "A digital space for working together",
                gradient: &[PURPLE, PINK],
            },
            GalleryItem {
                icon: "🥽",
                title: "Virtual reality",
                description: "Immersive learning experiences",
                gradient: &[PINK, ORANGE],
            },
            GalleryItem {
                icon: "📱",
                title: "Mobile learning",
                description: "Access to materials at any time",
                gradient: &[BLUE, PURPLE],
            },
            GalleryItem {
                icon: "📉",
                title: "Data analytics",
                description: "Progress tracking and adaptation",
                gradient: &[GREEN, BLUE],
            },
            GalleryItem {
                icon: "🎬",
                title: "Video lectures",
                description: "High-quality asynchronous learning",
                gradient: &[ORANGE, RED],
            },
            GalleryItem {
                icon: "📋",
                title: "Testing",
                description: "Automated knowledge assessment",
                gradient: &[INDIGO, PURPLE],
            },
        ],
    },
};

fn title_and_notes(kind: SlideKind) -> (&'static str, &'static str) {
    match kind {
        SlideKind::Title => (
            "Title slide",
            "Welcome everyone and introduce yourself. Frame the talk: how digital \
             tools are changing the way we teach and learn. Mention the session \
             runs about 45 minutes with time for questions at the end.",
        ),
        SlideKind::Contents => (
            "Contents",
            "Walk through the three parts: key concepts, the research numbers, \
             and concrete tools. Cards are clickable if someone asks to skip ahead.",
        ),
        SlideKind::MainContent => (
            "Main content",
            "Spend most time on personalisation and collaboration. Give one \
             classroom example per card. Gamification often draws questions, \
             keep an anecdote ready.",
        ),
        SlideKind::Statistics => (
            "Statistics and data",
            "Numbers come from the end-of-term survey. Stress that completion \
             (78%) is the weakest metric and the one we are targeting next. \
             Close on the 34% effectiveness growth.",
        ),
        SlideKind::Gallery => (
            "Gallery of work",
            "Pick two or three tools the audience is least familiar with. \
             Offer to demo the interactive whiteboard afterwards. Transition \
             to Q&A.",
        ),
    }
}

/// Builds the five-slide deck in its fixed order.
pub fn builtin_deck() -> Result<SlideDeck, DeckError> {
    let slides = SlideKind::iter()
        .enumerate()
        .map(|(index, kind)| {
            let (title, notes) = title_and_notes(kind);
            Slide::new(index, kind, title, notes)
        })
        .collect();
    SlideDeck::new(slides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_has_five_slides_in_canonical_order() {
        let deck = builtin_deck().expect("built-in deck is valid");
        assert_eq!(deck.len(), 5);
        let kinds: Vec<SlideKind> = deck.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SlideKind::Title,
                SlideKind::Contents,
                SlideKind::MainContent,
                SlideKind::Statistics,
                SlideKind::Gallery,
            ]
        );
        assert!(deck.iter().all(|s| !s.notes.is_empty()));
    }

    #[test]
    fn contents_cards_point_at_existing_slides() {
        let deck = builtin_deck().expect("built-in deck is valid");
        for card in DECK_CONTENT.contents.items {
            let target = deck.get(card.target_slide).expect("target exists");
            assert_ne!(target.kind, SlideKind::Title);
            assert_ne!(target.kind, SlideKind::Contents);
        }
    }

    #[test]
    fn statistics_are_percentages() {
        assert!(DECK_CONTENT.statistics.items.iter().all(|s| s.value <= 100));
    }
}
