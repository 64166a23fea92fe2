//! Subscription tokens and subscriber bookkeeping.

use std::collections::BTreeMap;
use std::sync::Arc;

pub(crate) type Callback = Arc<dyn Fn() + Send + Sync>;

/// Token returned by `subscribe`, used to remove the callback again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subscription(u64);

/// Ordered subscriber storage.
///
/// Tokens are handed out monotonically, so iterating the map visits
/// callbacks in registration order while removal stays token-keyed.
pub(crate) struct SubscriberSet {
    entries: BTreeMap<u64, Callback>,
    next_token: u64,
}

impl SubscriberSet {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_token: 0,
        }
    }

    pub(crate) fn insert(&mut self, callback: Callback) -> Subscription {
        let token = self.next_token;
        self.next_token += 1;
        self.entries.insert(token, callback);
        Subscription(token)
    }

    pub(crate) fn remove(&mut self, subscription: Subscription) -> bool {
        self.entries.remove(&subscription.0).is_some()
    }

    /// Clone the callbacks out in registration order.
    ///
    /// Notification runs against this snapshot with no lock held, so a
    /// callback may subscribe or unsubscribe on the same store without
    /// deadlocking.
    pub(crate) fn snapshot(&self) -> Vec<Callback> {
        self.entries.values().cloned().collect()
    }
}
