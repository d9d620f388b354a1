// The deck engine: navigation, presenter mode and the stopwatch
pub mod core;
pub mod messages;
pub mod navigation;
pub mod state;
pub mod stopwatch;

pub use core::DeckEngine;
pub use messages::Command;
pub use navigation::Navigator;
pub use state::PresenterState;
pub use stopwatch::{IntervalTimer, Stopwatch};
