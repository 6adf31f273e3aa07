//! The remote search endpoint seam.

mod github;

pub use github::{DEFAULT_ENDPOINT, GithubBackend};

use crate::search::{SearchError, SearchRequest};
use crate::types::SearchPage;

/// A remote search service: canonical query plus cursor in, one result page
/// out. Implementations run on the worker thread and may block.
pub trait SearchBackend: Send {
    fn fetch(&self, request: &SearchRequest) -> Result<SearchPage, SearchError>;
}
