//! Latest-state cell with replay-on-subscribe.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::state::UiState;

/// Holds the latest state and the list of live subscribers.
///
/// A new subscriber immediately receives the current state, then every state
/// published afterwards, in order. Publishing and subscribing take the same
/// lock, so a subscriber never misses a state and never sees one twice.
#[derive(Clone)]
pub struct ReplayLatest<S: UiState> {
    inner: Arc<Mutex<Inner<S>>>,
}

struct Inner<S> {
    latest: S,
    observers: Vec<mpsc::UnboundedSender<S>>,
}

impl<S: UiState> ReplayLatest<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                latest: initial,
                observers: Vec::new(),
            })),
        }
    }

    /// Snapshot of the latest state.
    pub fn latest(&self) -> S {
        self.inner.lock().latest.clone()
    }

    /// Attach a new subscriber. The current state is queued before returning.
    pub fn subscribe(&self) -> Subscription<S> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        if tx.send(inner.latest.clone()).is_err() {
            tracing::warn!("Subscriber closed before the latest state was queued");
        }
        inner.observers.push(tx);
        Subscription { rx }
    }

    /// Replace the latest state and deliver it to every live subscriber.
    ///
    /// Subscribers whose receiving end was dropped are pruned here.
    pub fn publish(&self, state: S) {
        let mut inner = self.inner.lock();
        inner
            .observers
            .retain(|observer| observer.send(state.clone()).is_ok());
        inner.latest = state;
    }

    /// Number of subscribers that are still attached.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .observers
            .iter()
            .filter(|observer| !observer.is_closed())
            .count()
    }
}

impl<S: UiState> Default for ReplayLatest<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Receiving end of a [`ReplayLatest`] subscription.
///
/// Dropping it detaches the subscriber.
#[derive(Debug)]
pub struct Subscription<S> {
    rx: mpsc::UnboundedReceiver<S>,
}

impl<S> Subscription<S> {
    /// Wait for the next state. Returns `None` once the publisher is gone.
    pub async fn next(&mut self) -> Option<S> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl<S> Subscription<S> {
        fn try_next(&mut self) -> Option<S> {
            self.rx.try_recv().ok()
        }
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter(u32);

    impl UiState for Counter {}

    #[test]
    fn subscriber_receives_current_state_first() {
        let cell = ReplayLatest::new(Counter(7));
        let mut sub = cell.subscribe();
        assert_eq!(sub.try_next(), Some(Counter(7)));
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn subscriber_receives_every_published_state_in_order() {
        let cell = ReplayLatest::default();
        let mut sub = cell.subscribe();
        cell.publish(Counter(1));
        cell.publish(Counter(2));
        cell.publish(Counter(3));

        let seen: Vec<u32> = std::iter::from_fn(|| sub.try_next()).map(|c| c.0).collect();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn late_subscriber_gets_only_latest() {
        let cell = ReplayLatest::default();
        cell.publish(Counter(1));
        cell.publish(Counter(2));

        let mut late = cell.subscribe();
        assert_eq!(late.try_next(), Some(Counter(2)));
        assert_eq!(late.try_next(), None);
        assert_eq!(cell.latest(), Counter(2));
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_publish() {
        let cell = ReplayLatest::<Counter>::default();
        let keep = cell.subscribe();
        let gone = cell.subscribe();
        assert_eq!(cell.subscriber_count(), 2);

        drop(gone);
        assert_eq!(cell.subscriber_count(), 1);
        cell.publish(Counter(5));
        assert_eq!(cell.inner.lock().observers.len(), 1);
        drop(keep);
    }
}
