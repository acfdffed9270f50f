//! Paged list cursor: app-owned, SDK-provided transition logic.
//!
//! ```text
//! Ready(n) ──begin──▶ Loading(n) ──non-empty──▶ Ready(n+1)
//!                        │  └──────empty──────▶ Done
//!                        └──────error─────────▶ Failed(n) ──retry──▶ Ready(n)
//! reset(): any state ──▶ Ready(1), items cleared, in-flight results dropped
//! fetch future dropped: Loading(n) ──▶ Ready(n)
//! ```

use async_lock::{Mutex, MutexGuard};
use futures_util::future::{AbortHandle, Abortable};
use futures_util::Stream;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Weak};

/// Where a cursor stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Ready { next_page: u32 },
    Loading { page: u32 },
    /// The fetch for `page` failed; [`Cursor::retry`] re-arms the same page.
    Failed { page: u32 },
    Done,
}

impl Default for CursorState {
    fn default() -> Self {
        CursorState::Ready { next_page: 1 }
    }
}

/// Permission to fetch one page, handed out by [`Cursor::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    pub page: u32,
    generation: u64,
}

/// Result of feeding a page (or an attempt to get one) into a cursor.
#[derive(Debug)]
pub enum PageOutcome<E> {
    /// The cursor was not `Ready`; nothing was fetched.
    Skipped,
    /// `n` items were appended.
    Appended(usize),
    /// The page signalled the end of the list.
    Exhausted,
    Failed(E),
    /// The cursor was reset while the page was in flight; the page was dropped.
    Stale,
}

impl<E> PageOutcome<E> {
    pub fn is_skipped(&self) -> bool {
        matches!(self, PageOutcome::Skipped)
    }
}

type ExhaustionFn<T> = Box<dyn Fn(&[T]) -> bool + Send + Sync>;

/// A paged list plus the state machine that drives it.
pub struct Cursor<T> {
    state: CursorState,
    items: Vec<T>,
    generation: u64,
    exhausted: ExhaustionFn<T>,
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("state", &self.state)
            .field("items", &self.items.len())
            .field("generation", &self.generation)
            .finish()
    }
}

impl<T> Cursor<T> {
    /// A cursor that treats an empty page as the end of the list.
    pub fn new() -> Self {
        Self::with_exhaustion(|page| page.is_empty())
    }

    /// A cursor with a custom end-of-list test. Items of a page that is both
    /// non-empty and exhausting are still appended.
    pub fn with_exhaustion(exhausted: impl Fn(&[T]) -> bool + Send + Sync + 'static) -> Self {
        Self {
            state: CursorState::default(),
            items: Vec::new(),
            generation: 0,
            exhausted: Box::new(exhausted),
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Local edits (optimistic counters, replaced snapshots).
    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, CursorState::Loading { .. })
    }

    /// Start fetching the next page. `None` unless the cursor is `Ready`.
    pub fn begin(&mut self) -> Option<PageTicket> {
        match self.state {
            CursorState::Ready { next_page } => {
                self.state = CursorState::Loading { page: next_page };
                tracing::trace!(page = next_page, "cursor loading");
                Some(PageTicket {
                    page: next_page,
                    generation: self.generation,
                })
            }
            _ => None,
        }
    }

    /// Apply the outcome of the fetch started with `ticket`.
    pub fn complete<E>(&mut self, ticket: PageTicket, result: Result<Vec<T>, E>) -> PageOutcome<E> {
        if ticket.generation != self.generation
            || self.state != (CursorState::Loading { page: ticket.page })
        {
            return PageOutcome::Stale;
        }

        match result {
            Ok(page) => {
                let exhausted = (self.exhausted)(&page);
                let n = page.len();
                self.items.extend(page);
                if exhausted {
                    self.state = CursorState::Done;
                    tracing::trace!(page = ticket.page, "cursor done");
                    if n == 0 {
                        PageOutcome::Exhausted
                    } else {
                        PageOutcome::Appended(n)
                    }
                } else {
                    self.state = CursorState::Ready {
                        next_page: ticket.page + 1,
                    };
                    PageOutcome::Appended(n)
                }
            }
            Err(e) => {
                self.state = CursorState::Failed { page: ticket.page };
                tracing::trace!(page = ticket.page, "cursor failed");
                PageOutcome::Failed(e)
            }
        }
    }

    /// Clear everything and start again from page 1. Any fetch still in
    /// flight will complete as [`PageOutcome::Stale`].
    pub fn reset(&mut self) {
        self.generation += 1;
        self.items.clear();
        self.state = CursorState::default();
    }

    /// Give back a page whose fetch was cancelled: `Loading(n)` returns to
    /// `Ready(n)`. Returns `false` if the ticket is stale.
    pub fn abandon(&mut self, ticket: PageTicket) -> bool {
        if ticket.generation != self.generation
            || self.state != (CursorState::Loading { page: ticket.page })
        {
            return false;
        }
        self.state = CursorState::Ready {
            next_page: ticket.page,
        };
        tracing::trace!(page = ticket.page, "cursor fetch abandoned");
        true
    }

    /// Re-arm a failed cursor on the page that failed. Returns `false` if the
    /// cursor was not `Failed`.
    pub fn retry(&mut self) -> bool {
        match self.state {
            CursorState::Failed { page } => {
                self.state = CursorState::Ready { next_page: page };
                true
            }
            _ => false,
        }
    }

    /// Fetch the next page with `fetch` if the cursor is `Ready`.
    ///
    /// Holding `&mut self` across the await keeps this single-flight; use
    /// [`SharedCursor`] when the fetch must be cancellable from elsewhere.
    /// Dropping the returned future before it finishes puts the page back.
    pub async fn fetch_more<F, Fut, E>(&mut self, fetch: F) -> PageOutcome<E>
    where
        F: FnOnce(u32) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        let Some(ticket) = self.begin() else {
            return PageOutcome::Skipped;
        };
        let mut guard = LoadingGuard {
            cursor: self,
            ticket: Some(ticket),
        };
        let result = fetch(ticket.page).await;
        guard.ticket = None;
        guard.cursor.complete(ticket, result)
    }
}

/// Returns an unfinished page to its cursor when a `fetch_more` future is dropped.
struct LoadingGuard<'c, T> {
    cursor: &'c mut Cursor<T>,
    ticket: Option<PageTicket>,
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.cursor.abandon(ticket);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// SharedCursor
// ═════════════════════════════════════════════════════════════════════════════

struct InFlight {
    handle: AbortHandle,
    ticket: PageTicket,
    /// Dead once the `fetch_more` future that owns the fetch is gone.
    alive: Weak<()>,
}

struct Shared<T> {
    cursor: Cursor<T>,
    in_flight: Option<InFlight>,
}

impl<T> Shared<T> {
    /// Hand back the page of a fetch whose future was dropped mid-flight.
    fn settle(&mut self) {
        if let Some(flight) = &self.in_flight {
            if flight.alive.strong_count() == 0 {
                self.cursor.abandon(flight.ticket);
                self.in_flight = None;
            }
        }
    }
}

/// A [`Cursor`] that can be driven and reset from different tasks.
///
/// The lock is never held across the network call, so `reset()` can abort a
/// fetch that is in flight. A fetch whose future is dropped before it
/// finishes gives its page back; the next access sees `Ready` again.
pub struct SharedCursor<T> {
    inner: Arc<Mutex<Shared<T>>>,
}

impl<T> Clone for SharedCursor<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> From<Cursor<T>> for SharedCursor<T> {
    fn from(cursor: Cursor<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Shared {
                cursor,
                in_flight: None,
            })),
        }
    }
}

impl<T> Default for SharedCursor<T> {
    fn default() -> Self {
        Cursor::new().into()
    }
}

impl<T: Clone> SharedCursor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    async fn lock(&self) -> MutexGuard<'_, Shared<T>> {
        let mut shared = self.inner.lock().await;
        shared.settle();
        shared
    }

    pub async fn state(&self) -> CursorState {
        self.lock().await.cursor.state()
    }

    pub async fn items(&self) -> Vec<T> {
        self.lock().await.cursor.items().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.lock().await.cursor.len()
    }

    /// Run `f` with exclusive access to the underlying cursor.
    pub async fn with<R>(&self, f: impl FnOnce(&mut Cursor<T>) -> R) -> R {
        f(&mut self.lock().await.cursor)
    }

    /// Fetch the next page if the cursor is `Ready`; otherwise no-op.
    pub async fn fetch_more<F, Fut, E>(&self, fetch: F) -> PageOutcome<E>
    where
        F: FnOnce(u32) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        let alive = Arc::new(());
        let (ticket, registration) = {
            let mut shared = self.lock().await;
            let Some(ticket) = shared.cursor.begin() else {
                return PageOutcome::Skipped;
            };
            let (handle, registration) = AbortHandle::new_pair();
            shared.in_flight = Some(InFlight {
                handle,
                ticket,
                alive: Arc::downgrade(&alive),
            });
            (ticket, registration)
        };

        let result = Abortable::new(fetch(ticket.page), registration).await;

        let mut shared = self.inner.lock().await;
        drop(alive);
        match result {
            Ok(page) => {
                let outcome = shared.cursor.complete(ticket, page);
                if !matches!(outcome, PageOutcome::Stale) {
                    shared.in_flight = None;
                }
                outcome
            }
            Err(_aborted) => PageOutcome::Stale,
        }
    }

    /// Abort any in-flight fetch, clear items, and return to `Ready(1)`.
    pub async fn reset(&self) {
        let mut shared = self.inner.lock().await;
        if let Some(flight) = shared.in_flight.take() {
            flight.handle.abort();
        }
        shared.cursor.reset();
    }

    pub async fn retry(&self) -> bool {
        self.lock().await.cursor.retry()
    }

    /// Successive pages until the list is exhausted, a fetch fails, or the
    /// cursor stops being `Ready`. A failure is yielded once, then the stream ends.
    pub fn pages<'a, F, Fut, E>(&'a self, mut fetch: F) -> impl Stream<Item = Result<Vec<T>, E>> + 'a
    where
        F: FnMut(u32) -> Fut + 'a,
        Fut: Future<Output = Result<Vec<T>, E>> + 'a,
        E: 'a,
        T: 'a,
    {
        async_stream::stream! {
            loop {
                match self.fetch_more(&mut fetch).await {
                    PageOutcome::Appended(n) => {
                        let shared = self.inner.lock().await;
                        let mut page: Vec<T> =
                            shared.cursor.items().iter().rev().take(n).cloned().collect();
                        page.reverse();
                        let done = shared.cursor.state() == CursorState::Done;
                        drop(shared);
                        yield Ok(page);
                        if done {
                            break;
                        }
                    }
                    PageOutcome::Failed(e) => {
                        yield Err(e);
                        break;
                    }
                    PageOutcome::Exhausted | PageOutcome::Skipped | PageOutcome::Stale => break,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::cell::Cell;
    use std::time::Duration;

    fn page(start: u32, n: u32) -> Vec<u32> {
        (start..start + n).collect()
    }

    #[test]
    fn test_non_empty_page_advances() {
        let mut c = Cursor::new();
        let t = c.begin().unwrap();
        assert_eq!(t.page, 1);
        assert!(matches!(
            c.complete::<()>(t, Ok(page(0, 20))),
            PageOutcome::Appended(20)
        ));
        assert_eq!(c.state(), CursorState::Ready { next_page: 2 });
        assert_eq!(c.len(), 20);
    }

    #[test]
    fn test_empty_page_is_done_and_stays_done() {
        let mut c: Cursor<u32> = Cursor::new();
        let t = c.begin().unwrap();
        c.complete::<()>(t, Ok(page(0, 5)));
        let t = c.begin().unwrap();
        assert_eq!(t.page, 2);
        assert!(matches!(c.complete::<()>(t, Ok(vec![])), PageOutcome::Exhausted));
        assert_eq!(c.state(), CursorState::Done);
        assert!(c.begin().is_none());
    }

    #[test]
    fn test_begin_is_single_flight() {
        let mut c: Cursor<u32> = Cursor::new();
        assert!(c.begin().is_some());
        assert!(c.begin().is_none());
        assert!(c.is_loading());
    }

    #[test]
    fn test_failure_keeps_page_for_retry() {
        let mut c: Cursor<u32> = Cursor::new();
        let t = c.begin().unwrap();
        c.complete::<()>(t, Ok(page(0, 3)));
        let t = c.begin().unwrap();
        assert!(matches!(c.complete(t, Err("boom")), PageOutcome::Failed("boom")));
        assert_eq!(c.state(), CursorState::Failed { page: 2 });
        assert!(c.begin().is_none());
        assert!(c.retry());
        assert_eq!(c.begin().unwrap().page, 2);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_reset_drops_stale_completion() {
        let mut c: Cursor<u32> = Cursor::new();
        let t = c.begin().unwrap();
        c.reset();
        assert!(matches!(c.complete::<()>(t, Ok(page(0, 3))), PageOutcome::Stale));
        assert!(c.is_empty());
        assert_eq!(c.state(), CursorState::Ready { next_page: 1 });
    }

    #[test]
    fn test_custom_exhaustion_appends_short_page() {
        let mut c = Cursor::with_exhaustion(|p: &[u32]| p.len() < 10);
        let t = c.begin().unwrap();
        assert!(matches!(c.complete::<()>(t, Ok(page(0, 4))), PageOutcome::Appended(4)));
        assert_eq!(c.state(), CursorState::Done);
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn test_fetch_more_skips_when_not_ready() {
        let calls = Cell::new(0);
        let mut c: Cursor<u32> = Cursor::new();
        let fetch = |p: u32| {
            calls.set(calls.get() + 1);
            async move { Ok::<_, ()>(if p == 1 { page(0, 2) } else { vec![] }) }
        };
        tokio_test::block_on(async {
            c.fetch_more(fetch).await;
            c.fetch_more(fetch).await;
            assert!(c.fetch_more(fetch).await.is_skipped());
        });
        assert_eq!(calls.get(), 2);
        assert_eq!(c.state(), CursorState::Done);
    }

    #[tokio::test]
    async fn test_shared_reset_aborts_in_flight() {
        let cursor: SharedCursor<u32> = SharedCursor::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let background = cursor.clone();
        let task = tokio::spawn(async move {
            background
                .fetch_more(|_| async move {
                    let _ = rx.await;
                    Ok::<_, ()>(page(0, 5))
                })
                .await
        });

        while cursor.state().await != (CursorState::Loading { page: 1 }) {
            tokio::task::yield_now().await;
        }
        // A second fetch while loading does nothing.
        assert!(cursor
            .fetch_more(|_| async { Ok::<_, ()>(page(0, 1)) })
            .await
            .is_skipped());

        cursor.reset().await;
        let _ = tx.send(());
        assert!(matches!(task.await.unwrap(), PageOutcome::Stale));
        assert!(cursor.items().await.is_empty());
        assert_eq!(cursor.state().await, CursorState::Ready { next_page: 1 });
    }

    #[tokio::test]
    async fn test_dropped_fetch_gives_page_back() {
        let mut c: Cursor<u32> = Cursor::new();
        c.fetch_more(|_| async { Ok::<_, ()>(page(0, 2)) }).await;

        let timed_out = tokio::time::timeout(
            Duration::from_millis(20),
            c.fetch_more(|_| std::future::pending::<Result<Vec<u32>, ()>>()),
        )
        .await;
        assert!(timed_out.is_err());
        assert_eq!(c.state(), CursorState::Ready { next_page: 2 });
        assert_eq!(c.len(), 2);

        assert!(matches!(
            c.fetch_more(|p| async move { Ok::<_, ()>(page(p * 10, 1)) }).await,
            PageOutcome::Appended(1)
        ));
        assert_eq!(c.items(), &[0, 1, 20]);
    }

    #[tokio::test]
    async fn test_shared_dropped_fetch_gives_page_back() {
        let cursor: SharedCursor<u32> = SharedCursor::new();
        cursor.fetch_more(|_| async { Ok::<_, ()>(page(0, 3)) }).await;

        let timed_out = tokio::time::timeout(
            Duration::from_millis(20),
            cursor.fetch_more(|_| std::future::pending::<Result<Vec<u32>, ()>>()),
        )
        .await;
        assert!(timed_out.is_err());
        assert_eq!(cursor.state().await, CursorState::Ready { next_page: 2 });
        assert_eq!(cursor.len().await, 3);

        let requested = Cell::new(0);
        let outcome = cursor
            .fetch_more(|p| {
                requested.set(p);
                async { Ok::<_, ()>(vec![]) }
            })
            .await;
        assert!(matches!(outcome, PageOutcome::Exhausted));
        assert_eq!(requested.get(), 2);
    }

    #[test]
    fn test_abandon_ignores_stale_ticket() {
        let mut c: Cursor<u32> = Cursor::new();
        let t = c.begin().unwrap();
        c.reset();
        let fresh = c.begin().unwrap();
        assert!(!c.abandon(t));
        assert_eq!(c.state(), CursorState::Loading { page: 1 });
        assert!(c.abandon(fresh));
        assert_eq!(c.state(), CursorState::Ready { next_page: 1 });
    }

    #[tokio::test]
    async fn test_pages_stream_until_exhausted() {
        let cursor: SharedCursor<u32> = SharedCursor::new();
        let pages: Vec<_> = cursor
            .pages(|p| async move { Ok::<_, ()>(if p <= 2 { page(p * 10, 3) } else { vec![] }) })
            .collect()
            .await;
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].as_ref().unwrap(), &vec![20, 21, 22]);
        assert_eq!(cursor.len().await, 6);
        assert_eq!(cursor.state().await, CursorState::Done);
    }
}
