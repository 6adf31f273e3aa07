//! Incremental search client for remote repository catalogs.
//!
//! The heart of the crate is the [`search`] module: a debounced, validated,
//! generation-tagged request pipeline that drives cursor pagination against
//! a remote search endpoint and exposes one consistent view of the
//! accumulated results. The [`ui`] module wraps it in a terminal front-end;
//! the [`backend`] module supplies the GitHub GraphQL implementation of the
//! endpoint contract.

pub mod backend;
pub mod cli;
pub mod search;
pub mod settings;
pub mod types;
pub mod ui;
pub mod util;

pub use backend::{GithubBackend, SearchBackend};
pub use search::{
    DebounceSignal, Debouncer, PaginationState, QueryExpression, SearchError, SearchOptions,
    SearchOrchestrator, SearchRequest, SearchSnapshot,
};
pub use settings::{ResolvedSettings, resolve};
pub use types::{Cursor, Language, PageInfo, Repository, SearchPage};
