//! Observable state stream
//!
//! Holds the latest `GameState` and pushes every replacement to registered
//! observers. New observers immediately receive the latest snapshot.

use crate::core::GameState;
use std::fmt;

/// Handle returned by [`StateStream::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&GameState)>;

/// Latest-value stream of game state snapshots
///
/// Only the owning engine can publish; everyone else reads or subscribes.
pub struct StateStream {
    current: GameState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl StateStream {
    #[must_use]
    pub fn new(initial: GameState) -> Self {
        Self {
            current: initial,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// The most recently published snapshot
    #[inline]
    #[must_use]
    pub fn value(&self) -> &GameState {
        &self.current
    }

    /// Register an observer
    ///
    /// The observer is called once right away with the latest snapshot, then
    /// again after every replacement until it is unsubscribed.
    pub fn subscribe<F>(&mut self, mut observer: F) -> SubscriptionId
    where
        F: FnMut(&GameState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        observer(&self.current);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Replace the snapshot and notify every observer
    pub(crate) fn publish(&mut self, state: GameState) {
        self.current = state;
        for (_, observer) in &mut self.observers {
            observer(&self.current);
        }
    }
}

impl fmt::Debug for StateStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStream")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
