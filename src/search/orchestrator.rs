//! The search state machine.
//!
//! Turns validated terms into generation-tagged requests, drives cursor
//! pagination, and owns the accumulated result list. All replies funnel
//! through [`SearchOrchestrator::pump`], which applies a reply only when its
//! generation matches the current one; anything else is a stale leftover of
//! a superseded query and is discarded without observable effect.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use log::{debug, warn};

use super::SearchOptions;
use super::commands::{Generation, SearchCommand, SearchReply, SearchRequest};
use super::error::SearchError;
use super::pagination::PaginationState;
use super::query::QueryExpression;
use crate::types::{Cursor, Repository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No active query.
    Idle,
    /// Page-1 request in flight; the result list will be replaced.
    Fetching,
    /// Results on screen, nothing in flight.
    Ready,
    /// Load-more in flight; current results stay visible.
    FetchingMore,
    /// The active query's page-1 request failed.
    Error,
}

/// Consistent view of the orchestrator's state for the presentation layer.
///
/// `items` preserves arrival order (page 1, then page 2, ...) and is not
/// deduplicated by id: if the remote ordering shifts between pages, an entry
/// can appear twice, matching the remote service's observed behavior.
#[derive(Debug, Clone, Copy)]
pub struct SearchSnapshot<'a> {
    pub items: &'a [Repository],
    pub loading: bool,
    pub error: Option<&'a SearchError>,
    pub total_count: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub current_term: &'a str,
}

/// Coordinates the debounced term stream, the query builder, pagination
/// state, and the background search worker.
pub struct SearchOrchestrator {
    tx: Sender<SearchCommand>,
    rx: Receiver<SearchReply>,
    latest_generation: Arc<AtomicU64>,
    generation: Generation,
    phase: Phase,
    min_term_length: usize,
    page_size: u32,
    current_term: String,
    query: QueryExpression,
    items: Vec<Repository>,
    pagination: PaginationState,
    error: Option<SearchError>,
}

impl SearchOrchestrator {
    /// Wire the orchestrator to a worker's channel triple (see
    /// [`super::spawn`]).
    pub fn new(
        tx: Sender<SearchCommand>,
        rx: Receiver<SearchReply>,
        latest_generation: Arc<AtomicU64>,
        options: &SearchOptions,
    ) -> Self {
        Self {
            tx,
            rx,
            latest_generation,
            generation: 0,
            phase: Phase::Idle,
            min_term_length: options.min_term_length,
            page_size: options.page_size,
            current_term: String::new(),
            query: QueryExpression::noop(),
            items: Vec::new(),
            pagination: PaginationState::default(),
            error: None,
        }
    }

    /// Start a fresh search for `term`.
    ///
    /// An empty term resets to idle and logically cancels anything in
    /// flight. A term below the minimum length is silently suppressed,
    /// leaving existing results untouched. Otherwise the result list is
    /// cleared and a page-1 request goes out under a new generation.
    pub fn search(&mut self, term: &str) {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            self.clear();
            return;
        }
        if trimmed.chars().count() < self.min_term_length {
            debug!("suppressing search for short term {trimmed:?}");
            return;
        }

        self.current_term = trimmed.to_string();
        self.query = QueryExpression::build(trimmed);
        self.items.clear();
        self.pagination.reset();
        self.error = None;
        self.phase = Phase::Fetching;
        self.issue(None);
    }

    /// Fetch the next page of the active query, appending to the current
    /// results. A no-op unless results are ready, another page exists, and
    /// nothing is in flight.
    pub fn load_more(&mut self) {
        if self.phase != Phase::Ready || self.query.is_noop() || !self.pagination.has_next_page() {
            return;
        }
        let Some(cursor) = self.pagination.end_cursor().cloned() else {
            return;
        };
        self.phase = Phase::FetchingMore;
        self.issue(Some(cursor));
    }

    /// Re-issue the active query from page 1. Current results stay visible
    /// until the fresh page arrives and replaces them.
    pub fn refetch(&mut self) {
        if self.query.is_noop() {
            return;
        }
        self.error = None;
        self.phase = Phase::Fetching;
        self.issue(None);
    }

    /// Drain the reply channel and apply every reply that still belongs to
    /// the current generation.
    pub fn pump(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(reply) => self.handle_reply(reply),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Ask the worker to exit. Further searches become silent no-ops.
    pub fn shutdown(&self) {
        let _ = self.tx.send(SearchCommand::Shutdown);
    }

    pub fn snapshot(&self) -> SearchSnapshot<'_> {
        SearchSnapshot {
            items: &self.items,
            loading: self.is_loading(),
            error: self.error.as_ref(),
            total_count: self.pagination.total_count(),
            has_next_page: self.pagination.has_next_page(),
            has_previous_page: self.pagination.has_previous_page(),
            current_term: &self.current_term,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Fetching | Phase::FetchingMore)
    }

    pub fn current_term(&self) -> &str {
        &self.current_term
    }

    /// Reset to idle. Bumps the generation so any in-flight reply arrives
    /// stale and is discarded.
    fn clear(&mut self) {
        self.generation = self.generation.saturating_add(1);
        self.latest_generation
            .store(self.generation, AtomicOrdering::Release);
        self.current_term.clear();
        self.query = QueryExpression::noop();
        self.items.clear();
        self.pagination.reset();
        self.error = None;
        self.phase = Phase::Idle;
    }

    /// Send one request to the worker. A page-1 request (`after` = None)
    /// opens a new generation; a load-more continuation shares the
    /// generation of the query it extends, so only a newer search can
    /// invalidate it.
    fn issue(&mut self, after: Option<Cursor>) {
        debug_assert!(!self.query.is_noop());
        if after.is_none() {
            self.generation = self.generation.saturating_add(1);
            self.latest_generation
                .store(self.generation, AtomicOrdering::Release);
        }
        debug!(
            "issuing request (generation {}, load_more: {})",
            self.generation,
            after.is_some()
        );
        let request = SearchRequest {
            query: self.query.clone(),
            page_size: self.page_size,
            after,
        };
        let _ = self.tx.send(SearchCommand::Fetch {
            generation: self.generation,
            request,
        });
    }

    fn handle_reply(&mut self, reply: SearchReply) {
        if reply.generation != self.generation {
            debug!(
                "discarding stale reply (generation {} vs current {})",
                reply.generation, self.generation
            );
            return;
        }
        let appended = reply.after.is_some();
        // A reply only applies while its request is the one in flight;
        // duplicate deliveries after that are dropped, which keeps the
        // discard idempotent.
        let expected = match self.phase {
            Phase::Fetching => !appended,
            Phase::FetchingMore => appended,
            _ => false,
        };
        if !expected {
            return;
        }

        match reply.outcome {
            Ok(page) => {
                if appended {
                    self.items.extend(page.items);
                } else {
                    self.items = page.items;
                }
                self.pagination.apply_page(&page.page_info, page.total_count);
                self.error = None;
                self.phase = Phase::Ready;
            }
            Err(err) => {
                warn!("search request failed: {err}");
                self.error = Some(err);
                // A failed continuation keeps what was already loaded; a
                // failed page-1 leaves the (empty) fresh query in error.
                self.phase = if appended { Phase::Ready } else { Phase::Error };
            }
        }
    }
}

impl Drop for SearchOrchestrator {
    fn drop(&mut self) {
        self.shutdown();
    }
}
