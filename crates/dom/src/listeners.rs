//! Document-level listener bookkeeping.
//!
//! Registrations hand back an opaque token; holders release the token on
//! teardown instead of tracking "did I already add this listener" by hand.

use std::collections::HashMap;

/// Kinds of document-level events a listener can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    PointerOut,
    Click,
    KeyDown,
    VisibilityChange,
}

/// Opaque subscription token returned by [`ListenerRegistry::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Tracks live subscriptions by token.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    entries: HashMap<u64, EventKind>,
    next_token: u64,
}

impl ListenerRegistry {
    /// Register interest in an event kind and return the token for it.
    pub fn register(&mut self, kind: EventKind) -> ListenerId {
        let token = self.next_token;
        self.next_token = self.next_token.saturating_add(1);
        self.entries.insert(token, kind);
        ListenerId(token)
    }

    /// Release a subscription. Returns false if the token was already
    /// released, making double-release observable in tests.
    pub fn release(&mut self, token: ListenerId) -> bool {
        self.entries.remove(&token.0).is_some()
    }

    /// Total live subscriptions.
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Live subscriptions for one kind.
    pub fn count_of(&self, kind: EventKind) -> usize {
        self.entries
            .values()
            .filter(|entry| **entry == kind)
            .count()
    }
}
