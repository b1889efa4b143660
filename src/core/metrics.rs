use std::time::{Duration, Instant};
use tracing::debug;

/// Measures how long a remote call takes
pub struct Timer {
    operation: String,
    start: Instant,
}

impl Timer {
    pub fn start(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and log the duration with the call's outcome
    pub fn finish(self, outcome: impl std::fmt::Display) -> Duration {
        let duration = self.start.elapsed();
        debug!(
            operation = %self.operation,
            duration_ms = duration.as_millis(),
            outcome = %outcome,
            "Remote call finished"
        );
        duration
    }
}
