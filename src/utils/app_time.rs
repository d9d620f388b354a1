// src/utils/app_time.rs

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Time left until `deadline`, or zero if it has already passed.
pub fn until(deadline: AppInstant, from: AppInstant) -> Duration {
    deadline.saturating_duration_since(from)
}
