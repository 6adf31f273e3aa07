use thiserror::Error;

/// Failures surfaced by the search pipeline.
///
/// Validation skips (empty or too-short terms) and stale replies are not
/// represented here; both are suppressed inside the orchestrator and never
/// reach the consumer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The request never produced a usable response: connection refused,
    /// timeout, malformed body.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The remote service answered, but with a failure payload.
    #[error("search service rejected the request: {0}")]
    Service(String),
}
