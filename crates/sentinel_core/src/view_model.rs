use crate::Phase;

/// Render-ready snapshot for a hosting UI: which surface to show (loading,
/// error, monitor status) and the latest monitor readings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerView {
    pub phase: Phase,
    pub last_submission_count: Option<u64>,
    pub last_poll_error: Option<String>,
    pub dirty: bool,
}

impl ControllerView {
    /// Message for the host's error element, when there is one to show.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
