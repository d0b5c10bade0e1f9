/// Failure inside one poll cycle. Connectivity loss is not a failure; the
/// cycle is skipped before any of these can occur.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PollError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("timeout")]
    Timeout,
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("no table in document")]
    NoTable,
}

/// What one poll cycle produced. Cycles skipped for lack of connectivity
/// emit nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    ObservedCount { count: u64 },
    CycleFailed { reason: String },
}
