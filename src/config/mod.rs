//! Configuration module for the deck viewer.

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::{DEBUG_FLAGS, DebugFlags};

pub mod timing;

// Re-export commonly used items
pub use timing::{TIMING, TimingConfig};
