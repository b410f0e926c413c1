//! Stateful pagination controller for one grid instance.
//!
//! The controller owns the request/response cycle between UI events and the
//! REST client: every parameter change mutates the current [`QueryRequest`]
//! and triggers exactly one fetch. Completions are committed under a
//! monotonic sequence guard, so when fetches overlap, only the last-issued
//! request's response survives, regardless of arrival order. Superseded
//! completions are dropped without touching state and without notifying.
//!
//! State lives behind a single `Mutex` owner; the controller itself is
//! long-lived and usable from multiple threads.

pub mod pager;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::client::{ApiClient, ApiResult};
use crate::domain::Resource;
use crate::envelope::PagedResult;
use crate::notify::{Notifier, Severity};
use crate::query::{QueryRequest, SortKey};
use pager::PageWindow;

/// Lifecycle of one grid instance. Never terminal: an error clears the rows
/// but the next parameter change fetches again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridStatus {
    /// A request is in flight. Also the initial state, since mount always
    /// issues a fetch.
    Loading,
    /// Holds the last successful result.
    Idle,
    /// The last request failed; rows were discarded.
    Error,
}

struct GridState<R> {
    request: QueryRequest,
    items: Vec<R>,
    total_count: u64,
    page_count: usize,
    status: GridStatus,
}

/// Point-in-time copy of the grid for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSnapshot<R> {
    pub items: Vec<R>,
    pub total_count: u64,
    pub page_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub status: GridStatus,
}

pub struct GridController<R: Resource> {
    client: ApiClient,
    notifier: Arc<dyn Notifier>,
    issued: AtomicU64,
    state: Mutex<GridState<R>>,
}

impl<R: Resource> GridController<R> {
    /// Creates a controller in its initial `Loading` state. No request is on
    /// the wire until [`GridController::mount`].
    pub fn new(client: ApiClient, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        Self {
            client,
            notifier,
            issued: AtomicU64::new(0),
            state: Mutex::new(GridState {
                request: QueryRequest::new(page_size),
                items: Vec::new(),
                total_count: 0,
                page_count: 0,
                status: GridStatus::Loading,
            }),
        }
    }

    /// Issues the initial fetch.
    pub fn mount(&self) {
        self.refresh();
    }

    pub fn set_page(&self, page: usize) {
        self.lock_state().request.page = page;
        self.refresh();
    }

    /// Changes the page size, clamping zero to one. The page index is kept;
    /// a now-out-of-range page simply comes back empty from the backend.
    pub fn set_page_size(&self, page_size: usize) {
        self.lock_state().request.page_size = page_size.max(1);
        self.refresh();
    }

    pub fn set_sort(&self, sort: Option<SortKey>) {
        self.lock_state().request.sort = sort;
        self.refresh();
    }

    /// Replaces the filter set and returns to the first page.
    pub fn set_filters(&self, filters: Vec<(String, String)>) {
        {
            let mut state = self.lock_state();
            state.request.filters = filters;
            state.request.page = 0;
        }
        self.refresh();
    }

    /// Replaces the free-text search term and returns to the first page.
    pub fn set_search(&self, term: Option<String>) {
        {
            let mut state = self.lock_state();
            state.request.search = term;
            state.request.page = 0;
        }
        self.refresh();
    }

    /// Runs one fetch cycle on the calling thread: tag, fetch, commit.
    pub fn refresh(&self) {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let request = {
            let mut state = self.lock_state();
            state.status = GridStatus::Loading;
            state.request.clone()
        };
        let result = self.client.list::<R>(&request);
        self.commit(seq, result);
    }

    /// Current grid state for rendering.
    pub fn snapshot(&self) -> GridSnapshot<R> {
        let state = self.lock_state();
        GridSnapshot {
            items: state.items.clone(),
            total_count: state.total_count,
            page_count: state.page_count,
            page: state.request.page,
            page_size: state.request.page_size,
            status: state.status,
        }
    }

    /// 1-based page links for the pagination control.
    pub fn page_links(&self) -> Vec<Option<usize>> {
        let state = self.lock_state();
        pager::page_links(state.request.page + 1, state.page_count, &PageWindow::default())
    }

    fn commit(&self, seq: u64, result: ApiResult<PagedResult<R>>) {
        let mut state = self.lock_state();
        if seq != self.issued.load(Ordering::SeqCst) {
            log::debug!("dropping stale {} response (seq {seq})", R::COLLECTION);
            return;
        }

        match result {
            Ok(page) => {
                let shown = page.items.len();
                let total = page.total_count;
                state.items = page.items;
                state.total_count = total;
                state.page_count = page.page_count;
                state.status = GridStatus::Idle;
                drop(state);
                self.notifier.notify(
                    &format!("Loaded {shown} of {total} {}", R::COLLECTION),
                    Severity::Success,
                );
            }
            Err(err) => {
                log::error!("failed to load {}: {err}", R::COLLECTION);
                state.items = Vec::new();
                state.total_count = 0;
                state.page_count = 0;
                state.status = GridStatus::Error;
                drop(state);
                self.notifier.notify(
                    &format!("Failed to load {}: {err}", R::COLLECTION),
                    Severity::Error,
                );
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, GridState<R>> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
