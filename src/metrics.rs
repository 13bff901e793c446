use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Operations slower than this are logged at warn level.
pub const SLOW_OPERATION: Duration = Duration::from_millis(500);

/// Logs how long an operation took when dropped.
///
/// ```ignore
/// async fn move_lesson(&self, request: Request<MoveLessonRequest>) -> Result<Response<LessonResponse>, Status> {
///     let _timer = OperationTimer::new("move_lesson");
///     // ...
/// }
/// ```
pub struct OperationTimer {
    name: &'static str,
    start: Instant,
}

impl OperationTimer {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        let duration = self.elapsed();
        if duration >= SLOW_OPERATION {
            warn!(
                operation = %self.name,
                duration_ms = %duration.as_millis(),
                "Slow operation"
            );
        } else {
            info!(
                operation = %self.name,
                duration_ms = %duration.as_millis(),
                "Operation completed"
            );
        }
    }
}

/// Short request id for correlating log lines of one call.
#[must_use]
pub fn generate_request_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    uuid.get(..8).unwrap_or(&uuid).to_string()
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;
