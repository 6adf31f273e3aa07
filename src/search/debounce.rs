//! Input debounce control.
//!
//! Suppresses propagation of a rapidly changing search input until it has
//! been stable for the configured interval, and gates terms below the
//! minimum useful length. The host event loop feeds every edit through
//! [`Debouncer::on_change`] and polls [`Debouncer::poll`] on its tick; the
//! debouncer itself owns no timer thread.

use std::time::{Duration, Instant};

/// A value the debouncer decided to let through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceSignal {
    /// The input was cleared; any active search should be dropped.
    Cleared,
    /// The input settled on this trimmed term.
    Settled(String),
}

#[derive(Debug)]
struct Pending {
    term: String,
    deadline: Instant,
}

/// Delay-and-coalesce filter over a changing input value.
///
/// Only the most recent pending value survives: every change re-arms the
/// deadline, so intermediate values are never propagated.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    min_term_length: usize,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration, min_term_length: usize) -> Self {
        Self {
            delay,
            min_term_length,
            pending: None,
        }
    }

    /// Feed the current raw input value.
    ///
    /// An empty (trimmed) value propagates immediately as
    /// [`DebounceSignal::Cleared`] and cancels any pending term. A value
    /// shorter than the minimum length cancels the pending term without
    /// propagating anything. Longer values arm a fresh deadline and surface
    /// later through [`Debouncer::poll`].
    pub fn on_change(&mut self, raw: &str, now: Instant) -> Option<DebounceSignal> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.pending = None;
            return Some(DebounceSignal::Cleared);
        }
        if trimmed.chars().count() < self.min_term_length {
            self.pending = None;
            return None;
        }
        self.pending = Some(Pending {
            term: trimmed.to_string(),
            deadline: now + self.delay,
        });
        None
    }

    /// Propagate an initial value once, without any delay. Used for a
    /// pre-populated query on startup.
    pub fn prime(&mut self, raw: &str) -> Option<DebounceSignal> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().count() < self.min_term_length {
            return None;
        }
        Some(DebounceSignal::Settled(trimmed.to_string()))
    }

    /// Emit the pending term once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<DebounceSignal> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            let pending = self.pending.take()?;
            return Some(DebounceSignal::Settled(pending.term));
        }
        None
    }

    /// Drop any pending term, for callers that trigger a search directly.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debouncer() -> Debouncer {
        Debouncer::new(Duration::from_millis(500), 3)
    }

    #[test]
    fn empty_input_propagates_cleared_immediately() {
        let mut debouncer = debouncer();
        let now = Instant::now();
        debouncer.on_change("react", now);
        assert!(debouncer.is_pending());

        let signal = debouncer.on_change("  ", now);
        assert_eq!(signal, Some(DebounceSignal::Cleared));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn short_terms_are_suppressed_and_cancel_pending() {
        let mut debouncer = debouncer();
        let now = Instant::now();
        debouncer.on_change("react", now);

        assert_eq!(debouncer.on_change("re", now), None);
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(now + Duration::from_secs(10)), None);
    }

    #[test]
    fn term_settles_after_the_delay() {
        let mut debouncer = debouncer();
        let now = Instant::now();
        debouncer.on_change("react", now);

        assert_eq!(debouncer.poll(now + Duration::from_millis(499)), None);
        assert_eq!(
            debouncer.poll(now + Duration::from_millis(500)),
            Some(DebounceSignal::Settled("react".to_string()))
        );
        // Emitting consumes the pending value.
        assert_eq!(debouncer.poll(now + Duration::from_secs(1)), None);
    }

    #[test]
    fn rapid_edits_coalesce_to_the_final_value() {
        let mut debouncer = debouncer();
        let now = Instant::now();
        debouncer.on_change("rea", now);
        debouncer.on_change("reac", now + Duration::from_millis(100));
        debouncer.on_change("react", now + Duration::from_millis(200));

        // The first deadline has passed, but it was re-armed by later edits.
        assert_eq!(debouncer.poll(now + Duration::from_millis(500)), None);
        assert_eq!(
            debouncer.poll(now + Duration::from_millis(700)),
            Some(DebounceSignal::Settled("react".to_string()))
        );
    }

    #[test]
    fn settled_value_is_trimmed() {
        let mut debouncer = debouncer();
        let now = Instant::now();
        debouncer.on_change("  react  ", now);
        assert_eq!(
            debouncer.poll(now + Duration::from_millis(500)),
            Some(DebounceSignal::Settled("react".to_string()))
        );
    }

    #[test]
    fn prime_propagates_immediately_or_not_at_all() {
        let mut debouncer = debouncer();
        assert_eq!(
            debouncer.prime("react"),
            Some(DebounceSignal::Settled("react".to_string()))
        );
        assert_eq!(debouncer.prime("re"), None);
        assert_eq!(debouncer.prime(""), None);
    }

    #[test]
    fn cancel_drops_the_pending_term() {
        let mut debouncer = debouncer();
        let now = Instant::now();
        debouncer.on_change("react", now);
        debouncer.cancel();
        assert_eq!(debouncer.poll(now + Duration::from_secs(1)), None);
    }
}
