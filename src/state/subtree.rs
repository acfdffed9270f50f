//! Per-key lazy expansion (e.g. "load more replies" under one comment).
//!
//! Each key moves `Ready → Loading → Done | Failed` once; a depth-limited
//! listing returns the whole subtree in one page, so there is no page number.

use super::cursor::PageOutcome;
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubtreeState {
    #[default]
    Ready,
    Loading,
    Done,
    Failed,
}

/// Permission to load the subtree under `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtreeTicket<K> {
    pub key: K,
    generation: u64,
}

/// Independent single-shot cursors keyed by parent.
#[derive(Debug, Clone)]
pub struct SubtreeCursors<K, T> {
    states: HashMap<K, SubtreeState>,
    loaded: HashMap<K, Vec<T>>,
    generation: u64,
}

impl<K: Eq + Hash, T> Default for SubtreeCursors<K, T> {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
            loaded: HashMap::new(),
            generation: 0,
        }
    }
}

impl<K: Eq + Hash + Clone, T> SubtreeCursors<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, key: &K) -> SubtreeState {
        self.states.get(key).copied().unwrap_or_default()
    }

    /// Items loaded under `key`, if its fetch has completed.
    pub fn loaded(&self, key: &K) -> Option<&[T]> {
        self.loaded.get(key).map(Vec::as_slice)
    }

    /// Every loaded item, across all keys.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.loaded.values().flatten()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.loaded.values_mut().flatten()
    }

    /// Start loading `key`. `None` unless that key is `Ready`.
    pub fn begin(&mut self, key: K) -> Option<SubtreeTicket<K>> {
        let state = self.states.entry(key.clone()).or_default();
        if *state != SubtreeState::Ready {
            return None;
        }
        *state = SubtreeState::Loading;
        Some(SubtreeTicket {
            key,
            generation: self.generation,
        })
    }

    pub fn complete<E>(&mut self, ticket: SubtreeTicket<K>, result: Result<Vec<T>, E>) -> PageOutcome<E> {
        if ticket.generation != self.generation || self.state(&ticket.key) != SubtreeState::Loading {
            return PageOutcome::Stale;
        }
        match result {
            Ok(items) => {
                let n = items.len();
                self.states.insert(ticket.key.clone(), SubtreeState::Done);
                self.loaded.insert(ticket.key, items);
                if n == 0 {
                    PageOutcome::Exhausted
                } else {
                    PageOutcome::Appended(n)
                }
            }
            Err(e) => {
                self.states.insert(ticket.key, SubtreeState::Failed);
                PageOutcome::Failed(e)
            }
        }
    }

    /// Return a cancelled load of `ticket.key` to `Ready`. Returns `false` if
    /// the ticket is stale.
    pub fn abandon(&mut self, ticket: &SubtreeTicket<K>) -> bool {
        if ticket.generation != self.generation || self.state(&ticket.key) != SubtreeState::Loading {
            return false;
        }
        self.states.insert(ticket.key.clone(), SubtreeState::Ready);
        true
    }

    /// Load the subtree under `key` with `fetch` if that key is `Ready`.
    /// Dropping the returned future before it finishes re-arms the key.
    pub async fn fetch<F, Fut, E>(&mut self, key: K, fetch: F) -> PageOutcome<E>
    where
        F: FnOnce(&K) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        let Some(ticket) = self.begin(key) else {
            return PageOutcome::Skipped;
        };
        let pending = fetch(&ticket.key);
        let mut guard = ExpandGuard {
            cursors: self,
            ticket: Some(ticket),
        };
        let result = pending.await;
        match guard.ticket.take() {
            Some(ticket) => guard.cursors.complete(ticket, result),
            None => PageOutcome::Stale,
        }
    }

    /// Re-arm a failed key.
    pub fn retry(&mut self, key: &K) -> bool {
        match self.states.get_mut(key) {
            Some(state) if *state == SubtreeState::Failed => {
                *state = SubtreeState::Ready;
                true
            }
            _ => false,
        }
    }

    /// Forget every key; in-flight loads complete as stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.states.clear();
        self.loaded.clear();
    }
}

/// Re-arms a key when its `fetch` future is dropped mid-flight.
struct ExpandGuard<'c, K: Eq + Hash + Clone, T> {
    cursors: &'c mut SubtreeCursors<K, T>,
    ticket: Option<SubtreeTicket<K>>,
}

impl<K: Eq + Hash + Clone, T> Drop for ExpandGuard<'_, K, T> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.cursors.abandon(&ticket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_expand_independently() {
        let mut s: SubtreeCursors<i64, &str> = SubtreeCursors::new();
        let a = s.begin(1).unwrap();
        let b = s.begin(2).unwrap();
        assert!(s.begin(1).is_none());
        assert!(matches!(s.complete::<()>(a, Ok(vec!["x", "y"])), PageOutcome::Appended(2)));
        assert_eq!(s.state(&1), SubtreeState::Done);
        assert_eq!(s.state(&2), SubtreeState::Loading);
        assert!(matches!(s.complete(b, Err(())), PageOutcome::Failed(())));
        assert_eq!(s.loaded(&1).unwrap(), &["x", "y"]);
        assert!(s.loaded(&2).is_none());
    }

    #[test]
    fn test_done_key_is_not_refetched() {
        let mut s: SubtreeCursors<i64, u8> = SubtreeCursors::new();
        let t = s.begin(7).unwrap();
        s.complete::<()>(t, Ok(vec![]));
        assert!(s.begin(7).is_none());
    }

    #[test]
    fn test_retry_and_reset() {
        let mut s: SubtreeCursors<i64, u8> = SubtreeCursors::new();
        let t = s.begin(3).unwrap();
        s.complete(t, Err("down"));
        assert!(s.retry(&3));
        let t = s.begin(3).unwrap();
        s.reset();
        assert!(matches!(s.complete::<()>(t, Ok(vec![1])), PageOutcome::Stale));
        assert_eq!(s.state(&3), SubtreeState::Ready);
    }

    #[tokio::test]
    async fn test_dropped_fetch_re_arms_key() {
        let mut s: SubtreeCursors<i64, u8> = SubtreeCursors::new();
        let timed_out = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            s.fetch(5, |_| std::future::pending::<Result<Vec<u8>, ()>>()),
        )
        .await;
        assert!(timed_out.is_err());
        assert_eq!(s.state(&5), SubtreeState::Ready);

        let outcome = s.fetch(5, |k| {
            let k = *k as u8;
            async move { Ok::<_, ()>(vec![k]) }
        })
        .await;
        assert!(matches!(outcome, PageOutcome::Appended(1)));
        assert_eq!(s.loaded(&5).unwrap(), &[5]);
    }
}
