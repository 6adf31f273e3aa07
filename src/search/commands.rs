use crate::search::error::SearchError;
use crate::search::query::QueryExpression;
use crate::types::{Cursor, SearchPage};

/// Monotonic counter disambiguating requests of superseded queries from the
/// current one. A new search bumps it; a load-more continuation reuses it.
pub type Generation = u64;

/// One request against the remote search endpoint. `after` is `None` for a
/// fresh page-1 request and carries the stored trailing cursor for a
/// load-more continuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: QueryExpression,
    pub page_size: u32,
    pub after: Option<Cursor>,
}

/// Commands consumed by the background search worker.
#[derive(Debug)]
pub enum SearchCommand {
    Fetch {
        generation: Generation,
        request: SearchRequest,
    },
    Shutdown,
}

/// Outcome of one request, tagged with the generation of the query it
/// belongs to so the orchestrator can discard replies that arrive after
/// their query was superseded.
#[derive(Debug)]
pub struct SearchReply {
    pub generation: Generation,
    /// The cursor the request carried; `Some` marks a load-more reply.
    pub after: Option<Cursor>,
    pub outcome: Result<SearchPage, SearchError>,
}
