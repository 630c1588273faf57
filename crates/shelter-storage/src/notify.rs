// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Change notification for live collaborators.
//!
//! Subscribers register a callback against a resource URI; after every
//! successful mutating call the store invokes, synchronously, each callback
//! whose registered URI covers the changed one. A collection subscription
//! therefore observes single-record mutations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use shelter_core::PetUri;
use tracing::debug;

/// Callback invoked with the URI that changed.
pub type ChangeCallback = dyn Fn(&PetUri) + Send + Sync;

/// Handle returned by [`ChangeNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: u64,
    uri: PetUri,
    callback: Arc<ChangeCallback>,
}

/// Registry of change subscribers.
#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: RwLock<Vec<Subscriber>>,
    next_id: AtomicU64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for changes at or under `uri`.
    pub fn subscribe(
        &self,
        uri: PetUri,
        callback: impl Fn(&PetUri) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut subscribers = self.subscribers.write().expect("subscriber lock poisoned");
        subscribers.push(Subscriber {
            id,
            uri,
            callback: Arc::new(callback),
        });
        SubscriptionId(id)
    }

    /// Remove a subscription. Returns whether it was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write().expect("subscriber lock poisoned");
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id.0);
        subscribers.len() != before
    }

    /// Invoke every subscriber whose registered URI covers `changed`.
    ///
    /// Callbacks run outside the registry lock, so a callback may subscribe
    /// or unsubscribe without deadlocking.
    pub fn notify(&self, changed: &PetUri) {
        let matched: Vec<Arc<ChangeCallback>> = {
            let subscribers = self.subscribers.read().expect("subscriber lock poisoned");
            subscribers
                .iter()
                .filter(|s| s.uri.covers(changed))
                .map(|s| Arc::clone(&s.callback))
                .collect()
        };
        debug!(uri = %changed, subscribers = matched.len(), "dispatching change notification");
        for callback in matched {
            callback(changed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn subscriber_fires_for_its_own_uri() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        notifier.subscribe(PetUri::collection(), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify(&PetUri::collection());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn collection_subscriber_observes_record_changes() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        notifier.subscribe(PetUri::collection(), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify(&PetUri::record(5));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn record_subscriber_ignores_other_records() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        notifier.subscribe(PetUri::record(5), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify(&PetUri::record(6));
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        notifier.notify(&PetUri::record(5));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        let id = notifier.subscribe(PetUri::collection(), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));

        notifier.notify(&PetUri::collection());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn callback_receives_the_changed_uri() {
        let notifier = ChangeNotifier::new();
        let seen = Arc::new(RwLock::new(Vec::new()));

        let sink = Arc::clone(&seen);
        notifier.subscribe(PetUri::collection(), move |uri| {
            sink.write().unwrap().push(uri.clone());
        });

        notifier.notify(&PetUri::record(9));
        let seen = seen.read().unwrap();
        assert_eq!(seen.as_slice(), &[PetUri::record(9)]);
    }
}
