//! Preferences lifecycle notifications.
//!
//! Listeners subscribe to a [`PreferencesNotifier`] and receive every event
//! broadcast after they subscribed. Closed receivers are dropped on the next
//! broadcast.

use std::sync::Arc;

use {
    async_channel::{Receiver, Sender, unbounded},
    parking_lot::RwLock,
    tracing::debug,
};

use crate::config::ScopeKey;

/// Preferences lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferencesEvent {
    /// A preferences session was created.
    Created { scope: ScopeKey },
    /// The preferences dialog is about to be presented.
    WillOpen { scope: ScopeKey },
    /// The preferences dialog closed. `saved` is `true` when the values
    /// were written to the store.
    DidClose { scope: ScopeKey, saved: bool },
}

impl PreferencesEvent {
    /// Scope the event refers to.
    #[must_use]
    pub fn scope(&self) -> &ScopeKey {
        match self {
            Self::Created { scope } | Self::WillOpen { scope } | Self::DidClose { scope, .. } => {
                scope
            }
        }
    }
}

/// Fan-out of preferences events to any number of subscribers.
#[derive(Debug, Clone, Default)]
pub struct PreferencesNotifier {
    /// List of active subscribers for manual broadcast fan-out.
    subscribers: Arc<RwLock<Vec<Sender<PreferencesEvent>>>>,
}

impl PreferencesNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to preferences events.
    ///
    /// # Returns
    ///
    /// A receiver for every event broadcast from now on.
    #[must_use]
    pub fn subscribe(&self) -> Receiver<PreferencesEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.write().push(tx);
        rx
    }

    /// Sends `event` to every subscriber, dropping closed channels.
    ///
    /// # Returns
    ///
    /// The number of subscribers that received the event.
    pub fn broadcast(&self, event: &PreferencesEvent) -> usize {
        let mut subscribers = self.subscribers.write();
        let mut active = Vec::with_capacity(subscribers.len());
        let mut count = 0;

        for tx in subscribers.iter() {
            if let Ok(()) = tx.try_send(event.clone()) {
                active.push(tx.clone());
                count += 1;
            }
        }

        *subscribers = active;
        debug!("PreferencesNotifier: {:?} sent to {} subscribers", event, count);
        count
    }

    /// Number of live subscribers as of the last broadcast.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}
