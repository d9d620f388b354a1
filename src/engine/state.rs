use serde::{Deserialize, Serialize};

/// Snapshot of presenter-mode state.
///
/// The live values are owned by the engine (flag) and its stopwatch
/// (running / elapsed); this is what the UI and `--dump-state` read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterState {
    pub is_active: bool,
    pub timer_running: bool,
    pub elapsed_seconds: u64,
}
