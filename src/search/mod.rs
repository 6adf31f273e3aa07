//! The search orchestration layer: debounced input, canonical query
//! building, cursor pagination, and the generation-tagged request lifecycle.

use std::time::Duration;

mod commands;
mod debounce;
mod error;
mod orchestrator;
mod pagination;
mod query;
mod worker;

pub use commands::{Generation, SearchCommand, SearchReply, SearchRequest};
pub use debounce::{DebounceSignal, Debouncer};
pub use error::SearchError;
pub use orchestrator::{SearchOrchestrator, SearchSnapshot};
pub use pagination::PaginationState;
pub use query::QueryExpression;
pub use worker::spawn;

/// Tunables recognized by the search pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Shortest trimmed term that triggers a search.
    pub min_term_length: usize,
    /// How long the input must be stable before a search is issued.
    pub debounce: Duration,
    /// Items requested per page.
    pub page_size: u32,
    /// Backend request timeout; `None` leaves requests pending indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_term_length: 3,
            debounce: Duration::from_millis(500),
            page_size: 20,
            request_timeout: None,
        }
    }
}

impl SearchOptions {
    /// Build a debouncer configured for these options.
    pub fn debouncer(&self) -> Debouncer {
        Debouncer::new(self.debounce, self.min_term_length)
    }
}
