//! Explore page state machine
//!
//! [`QueryStateController`] is the single writer of the query text, the page
//! number, and `has_interacted`. Two input channels drive it:
//!
//! - URL changes (deep links, back/forward) are already-settled state and
//!   fetch immediately.
//! - User actions (search, page change, retry) push the new state into the
//!   URL and go through the debouncer, so a burst of input costs one fetch.
//!
//! Fetches are split into [`QueryStateController::begin_fetch`] and
//! [`QueryStateController::finish_fetch`]. Only the most recently begun
//! fetch may write results; anything older is discarded when it lands.
//! [`QueryStateController::drive`] keeps reading input while searches are
//! in flight, so a newer fetch can start before an older one returns.

use crate::config::ExploreConfig;
use crate::debounce::Debouncer;
use crate::dump::data_dump;
use crate::models::{RecipeSummary, SearchFilters, SearchResult};
use crate::pagination::Pagination;
use crate::query::{QueryKey, QueryState, UrlParams};
use crate::search::RecipeSource;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load recipes. Please try again.";

/// Pushed URLs the router has not echoed back yet
const MAX_PENDING_ECHOES: usize = 32;

/// A dispatched search, resolving to its ticket and outcome
pub type SearchFuture = BoxFuture<'static, (FetchTicket, crate::Result<SearchResult>)>;

/// Input to the explore page
#[derive(Debug, Clone, PartialEq)]
pub enum ExploreEvent {
    /// The router reports new query parameters
    UrlChanged(UrlParams),
    /// Search box submitted
    Search(String),
    /// Pager clicked
    PageChange(u32),
    /// Retry from the error banner
    Refresh,
}

/// What the results area should show right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Loading,
    Error(String),
    Results,
    /// Empty after the user asked for something
    NoResults,
    /// Empty, and nobody has asked for anything yet
    Initial,
}

/// Handle for one dispatched search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: QueryKey,
    seq: u64,
}

impl FetchTicket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

pub struct QueryStateController {
    source: Arc<dyn RecipeSource>,
    page_size: usize,
    state: QueryState,
    url: UrlParams,
    last_url_key: Option<QueryKey>,
    pending_echoes: VecDeque<QueryKey>,
    debouncer: Debouncer,
    latest_seq: u64,
    recipes: Vec<RecipeSummary>,
    total: usize,
    loading: bool,
    error: Option<String>,
}

impl QueryStateController {
    pub fn new(source: Arc<dyn RecipeSource>, config: &ExploreConfig) -> Self {
        Self {
            source,
            page_size: config.page_size.max(1),
            state: QueryState::default(),
            url: UrlParams::new(),
            last_url_key: None,
            pending_echoes: VecDeque::new(),
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            latest_seq: 0,
            recipes: Vec::new(),
            total: 0,
            loading: false,
            error: None,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn page(&self) -> u32 {
        self.state.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_interacted(&self) -> bool {
        self.state.has_interacted
    }

    /// The URL parameters as this controller last wrote or accepted them
    pub fn url(&self) -> &UrlParams {
        &self.url
    }

    pub fn recipes(&self) -> &[RecipeSummary] {
        &self.recipes
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_pending_fetch(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.state.page, self.page_size, self.total)
    }

    /// The "no results" panel shows only after an interaction
    pub fn show_empty_state(&self) -> bool {
        !self.loading && self.error.is_none() && self.recipes.is_empty() && self.state.has_interacted
    }

    pub fn presentation(&self) -> Presentation {
        if self.loading {
            Presentation::Loading
        } else if let Some(message) = &self.error {
            Presentation::Error(message.clone())
        } else if !self.recipes.is_empty() {
            Presentation::Results
        } else if self.state.has_interacted {
            Presentation::NoResults
        } else {
            Presentation::Initial
        }
    }

    pub fn data_dump(&self) -> String {
        data_dump(&self.recipes)
    }

    /// Accept new URL parameters; returns true when the state changed
    ///
    /// The echo of any URL this controller pushed and has not yet seen come
    /// back is ignored, as is an unchanged `(query, page)` pair.
    pub fn apply_url(&mut self, params: &UrlParams) -> bool {
        let next = QueryState::from_url(params);
        let key = next.key();

        if let Some(pos) = self.pending_echoes.iter().position(|k| *k == key) {
            // Echoes arrive in push order: everything up to this one is settled
            self.pending_echoes.drain(..=pos);
            debug!("Ignoring echo of pushed URL {:?}", key);
            if self.pending_echoes.is_empty() {
                self.url = params.clone();
            }
            return false;
        }

        self.url = params.clone();
        if self.last_url_key.as_ref() == Some(&key) {
            debug!("URL state unchanged: {:?}", key);
            return false;
        }

        debug!("URL state -> {:?}", key);
        self.state = next;
        self.last_url_key = Some(key);
        self.pending_echoes.clear();
        // The immediate fetch covers whatever the debouncer was holding
        self.debouncer.cancel();
        true
    }

    /// URL change: normalize and fetch right away
    pub async fn on_url_change(&mut self, params: &UrlParams) {
        if self.apply_url(params) {
            self.fetch().await;
        }
    }

    /// Pushed keys still waiting for their echo
    pub fn pending_echoes(&self) -> usize {
        self.pending_echoes.len()
    }

    /// Search box submitted: back to page 1 with the trimmed text
    pub fn submit_search(&mut self, input: &str) {
        self.state.query = input.trim().to_string();
        self.state.page = 1;
        self.state.has_interacted = true;
        self.push_url();
        self.debouncer.schedule();
    }

    pub fn change_page(&mut self, page: u32) {
        self.state.page = page.max(1);
        self.state.has_interacted = true;
        self.push_url();
        self.debouncer.schedule();
    }

    /// Retry the current state
    pub fn refresh(&mut self) {
        self.debouncer.schedule();
    }

    fn push_url(&mut self) {
        let key = self.state.key();
        self.url.merge_query(&key);
        if self.pending_echoes.len() == MAX_PENDING_ECHOES {
            self.pending_echoes.pop_front();
        }
        self.pending_echoes.push_back(key.clone());
        self.last_url_key = Some(key);
    }

    /// Mark a search as in flight for the current state
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;

        FetchTicket {
            key: self.state.key(),
            seq: self.latest_seq,
        }
    }

    /// Apply a search outcome; returns false if the ticket was superseded
    ///
    /// A transport error keeps the last good items and total and sets the
    /// retry message.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, outcome: crate::Result<SearchResult>) -> bool {
        if ticket.seq != self.latest_seq {
            debug!("Discarding stale result for {:?}", ticket.key);
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                info!(
                    "Loaded {} of {} recipes for {:?}",
                    result.items.len(),
                    result.total,
                    ticket.key
                );
                self.recipes = result.items;
                self.total = result.total;
            }
            Err(e) => {
                warn!("Search for {:?} failed: {}", ticket.key, e);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// Begin a search for the current state without waiting on it
    ///
    /// The returned future owns everything it needs; hand its output to
    /// [`Self::finish_fetch`].
    pub fn dispatch(&mut self) -> SearchFuture {
        let ticket = self.begin_fetch();
        let source = Arc::clone(&self.source);
        let page_size = self.page_size;
        debug!("Dispatching search {:?}", ticket.key);

        async move {
            let outcome = source
                .search_recipes(
                    &ticket.key.query,
                    &SearchFilters::none(),
                    ticket.key.page,
                    page_size,
                )
                .await;
            (ticket, outcome)
        }
        .boxed()
    }

    /// Run one search for the current state
    pub async fn fetch(&mut self) {
        let (ticket, outcome) = self.dispatch().await;
        self.finish_fetch(ticket, outcome);
    }

    /// Wait out the debounce window, then fetch once
    ///
    /// Returns false without waiting when nothing is pending.
    pub async fn run_pending(&mut self) -> bool {
        if self.debouncer.settled().await {
            self.fetch().await;
            true
        } else {
            false
        }
    }

    /// Apply one event; a URL change hands back its search to run
    pub fn accept(&mut self, event: ExploreEvent) -> Option<SearchFuture> {
        match event {
            ExploreEvent::UrlChanged(params) => {
                if self.apply_url(&params) {
                    return Some(self.dispatch());
                }
            }
            ExploreEvent::Search(input) => self.submit_search(&input),
            ExploreEvent::PageChange(page) => self.change_page(page),
            ExploreEvent::Refresh => self.refresh(),
        }
        None
    }

    pub async fn handle(&mut self, event: ExploreEvent) {
        if let Some(search) = self.accept(event) {
            let (ticket, outcome) = search.await;
            self.finish_fetch(ticket, outcome);
        }
    }

    /// Event loop: process input until the sender side closes
    ///
    /// Searches run concurrently with input. Debounced fetches fire when
    /// their quiet period ends. A fetch still pending when input stops is
    /// dispatched, and every in-flight search settles before returning.
    pub async fn drive(&mut self, events: &mut mpsc::UnboundedReceiver<ExploreEvent>) {
        let mut in_flight: FuturesUnordered<SearchFuture> = FuturesUnordered::new();

        loop {
            let deadline = self.debouncer.deadline();
            tokio::select! {
                biased;
                event = events.recv() => match event {
                    Some(event) => {
                        if let Some(search) = self.accept(event) {
                            in_flight.push(search);
                        }
                    }
                    None => break,
                },
                Some((ticket, outcome)) = in_flight.next(), if !in_flight.is_empty() => {
                    self.finish_fetch(ticket, outcome);
                }
                _ = wait_until(deadline) => {
                    if self.debouncer.take_due(Instant::now()) {
                        in_flight.push(self.dispatch());
                    }
                }
            }
        }

        if self.debouncer.cancel() {
            in_flight.push(self.dispatch());
        }
        while let Some((ticket, outcome)) = in_flight.next().await {
            self.finish_fetch(ticket, outcome);
        }
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
