// src/run/status.rs

use serde::{Deserialize, Serialize};

/// Execution status of a pipeline run or node-run.
///
/// Wire spelling follows the originating system (`"NEVER_BUILT"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineStatus {
    Queued,
    Waiting,
    Building,
    Success,
    Fail,
    Stopped,
    Skipped,
    Disabled,
    NeverBuilt,
}

impl PipelineStatus {
    /// `true` for any status that means "still executing" (queued, waiting
    /// or building); `false` for every terminal status.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            PipelineStatus::Queued | PipelineStatus::Waiting | PipelineStatus::Building
        )
    }

    pub fn is_terminal(self) -> bool {
        !self.is_active()
    }
}
