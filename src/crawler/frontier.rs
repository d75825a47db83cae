//! Frontier queue and visited set
//!
//! The frontier is a plain FIFO of candidate URLs plus an outstanding-work
//! counter. The counter, not queue emptiness, is the authoritative drain
//! signal: a URL counts as outstanding from enqueue until a worker calls
//! `task_done` for it, so an empty queue with fetches still in flight never
//! looks drained. The dequeue timeout is only a bounded wait.

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::Notify;

/// Shared queue of candidate URLs with completion counting
pub struct Frontier {
    queue: Mutex<VecDeque<String>>,
    notify: Notify,
    outstanding: AtomicUsize,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            notify: Notify::new(),
            outstanding: AtomicUsize::new(0),
        }
    }

    /// Enqueues a candidate URL
    ///
    /// Duplicates are allowed and cheap; the visited set at dequeue time is
    /// the single authority on reprocessing.
    pub fn push(&self, url: String) {
        self.outstanding.fetch_add(1, Ordering::SeqCst);
        self.queue.lock().unwrap().push_back(url);
        self.notify.notify_one();
    }

    /// Dequeues a URL, waiting up to `wait` for one to arrive
    ///
    /// Returns `None` when the wait times out or the frontier drains while
    /// waiting. Callers treat `None` as a candidate-exit signal and re-check
    /// [`Frontier::is_drained`].
    pub async fn pop(&self, wait: Duration) -> Option<String> {
        let deadline = tokio::time::Instant::now() + wait;

        loop {
            if let Some(url) = self.queue.lock().unwrap().pop_front() {
                return Some(url);
            }
            if self.is_drained() {
                return None;
            }

            let notified = self.notify.notified();
            if tokio::time::timeout_at(deadline, notified).await.is_err() {
                // Bounded wait elapsed; one last look before giving up
                return self.queue.lock().unwrap().pop_front();
            }
        }
    }

    /// Marks one dequeued URL as fully processed
    ///
    /// Every dequeued URL must be marked exactly once, including discarded
    /// and failed ones. When the outstanding count reaches zero, all blocked
    /// workers are woken so they observe the drain promptly.
    pub fn task_done(&self) {
        if self.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.notify.notify_waiters();
        }
    }

    /// True once every URL ever enqueued has been marked processed
    pub fn is_drained(&self) -> bool {
        self.outstanding.load(Ordering::SeqCst) == 0
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

/// URLs already dequeued and dispatched to processing
///
/// The sole authority preventing duplicate processing of the same URL.
pub struct VisitedSet {
    inner: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Creates an empty visited set
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashSet::new()),
        }
    }

    /// Atomically checks and marks a URL
    ///
    /// Returns `false` when the URL was already claimed; the check and the
    /// mark happen under one lock, so two workers can never both claim the
    /// same URL.
    pub fn claim(&self, url: &str) -> bool {
        self.inner.lock().unwrap().insert(url.to_string())
    }
}

impl Default for VisitedSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_push_then_pop() {
        let frontier = Frontier::new();
        frontier.push("https://example.com/".to_string());

        let url = frontier.pop(Duration::from_millis(50)).await;
        assert_eq!(url, Some("https://example.com/".to_string()));
        assert!(!frontier.is_drained());

        frontier.task_done();
        assert!(frontier.is_drained());
    }

    #[tokio::test]
    async fn test_pop_empty_returns_none_after_wait() {
        let frontier = Frontier::new();
        let url = frontier.pop(Duration::from_millis(20)).await;
        assert_eq!(url, None);
    }

    #[tokio::test]
    async fn test_pop_fifo_order() {
        let frontier = Frontier::new();
        frontier.push("a".to_string());
        frontier.push("b".to_string());

        assert_eq!(frontier.pop(Duration::from_millis(20)).await.as_deref(), Some("a"));
        assert_eq!(frontier.pop(Duration::from_millis(20)).await.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_duplicate_enqueue_allowed() {
        let frontier = Frontier::new();
        frontier.push("x".to_string());
        frontier.push("x".to_string());

        assert!(frontier.pop(Duration::from_millis(20)).await.is_some());
        assert!(frontier.pop(Duration::from_millis(20)).await.is_some());
        assert!(!frontier.is_drained());

        frontier.task_done();
        frontier.task_done();
        assert!(frontier.is_drained());
    }

    #[tokio::test]
    async fn test_blocked_pop_wakes_on_push() {
        let frontier = Arc::new(Frontier::new());

        let waiter = {
            let frontier = Arc::clone(&frontier);
            tokio::spawn(async move { frontier.pop(Duration::from_secs(5)).await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        frontier.push("late".to_string());

        let url = waiter.await.unwrap();
        assert_eq!(url, Some("late".to_string()));
    }

    #[tokio::test]
    async fn test_blocked_pop_wakes_on_drain() {
        let frontier = Arc::new(Frontier::new());
        frontier.push("only".to_string());
        let url = frontier.pop(Duration::from_millis(50)).await.unwrap();
        assert_eq!(url, "only");

        // A second worker blocks on an empty-but-not-drained frontier
        let waiter = {
            let frontier = Arc::clone(&frontier);
            tokio::spawn(async move { frontier.pop(Duration::from_secs(60)).await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        frontier.task_done();

        // The drain notification releases the waiter well before its timeout
        let url = tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake on drain")
            .unwrap();
        assert_eq!(url, None);
        assert!(frontier.is_drained());
    }

    #[test]
    fn test_visited_claim_is_single_winner() {
        let visited = VisitedSet::new();
        assert!(visited.claim("https://example.com/"));
        assert!(!visited.claim("https://example.com/"));
        assert!(visited.claim("https://example.com/other"));
    }

    #[test]
    fn test_visited_claim_concurrent_single_winner() {
        let visited = Arc::new(VisitedSet::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let visited = Arc::clone(&visited);
            handles.push(std::thread::spawn(move || visited.claim("contested")));
        }

        let wins: usize = handles
            .into_iter()
            .map(|h| usize::from(h.join().unwrap()))
            .sum();
        assert_eq!(wins, 1);
    }
}
