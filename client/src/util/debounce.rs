//! Keystroke debouncing for address autocomplete.
//!
//! DESIGN
//! ======
//! Instead of owning a cancellable timer, every keystroke bumps a generation
//! counter and gets a [`DebounceTicket`]. The task spawned for that keystroke
//! sleeps, then asks [`Debouncer::take_if_current`]; only the newest ticket
//! gets the query back, so earlier sleeps wake up and do nothing. This keeps
//! the logic clock-free and testable off the browser.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::future::Future;

use crate::net::error::ApiError;
use crate::net::services::AddressSearch;
use crate::net::types::AddressSuggestion;

/// Quiet period after the last keystroke before searching.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Shorter queries clear suggestions without a search.
pub const MIN_QUERY_LEN: usize = 3;

/// Proof of which keystroke scheduled a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Latest-wins scheduler for one input field.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: Option<String>,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede any pending query with `query`.
    pub fn schedule(&mut self, query: &str) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(query.to_owned());
        DebounceTicket(self.generation)
    }

    /// Hand out the pending query if `ticket` is still the newest.
    pub fn take_if_current(&mut self, ticket: DebounceTicket) -> Option<String> {
        if self.is_latest(ticket) { self.pending.take() } else { None }
    }

    #[must_use]
    pub fn is_latest(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Drop the pending query and invalidate outstanding tickets.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}

/// Whether `query` is long enough to search for.
#[must_use]
pub fn should_search(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Sleep for `ms` in the browser; resolves immediately elsewhere.
pub async fn wait_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

/// Wait out the debounce window, then search if this keystroke is still the
/// newest one.
///
/// Returns `None` when superseded or when the query is too short; `Some`
/// with the (possibly empty) result list otherwise. Search failures yield an
/// empty list.
pub async fn debounced_search<S, W>(
    search: &S,
    wait: W,
    take_current: impl FnOnce() -> Option<String>,
) -> Option<Vec<AddressSuggestion>>
where
    S: AddressSearch + ?Sized,
    W: Future<Output = ()>,
{
    wait.await;
    let query = take_current()?;
    if !should_search(&query) {
        return Some(Vec::new());
    }
    Some(search.search(&query).await.unwrap_or_else(|err: ApiError| {
        log::warn!("address search failed: {err}");
        Vec::new()
    }))
}
