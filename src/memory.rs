//! In-memory store implementation.

use crate::error::{Result, StoreError};
use crate::store::SubscriptionStore;
use crate::types::{Subscription, SubscriptionId, UserProfile};
use tracing::debug;

/// Stores subscriptions and the owner profile in process memory.
///
/// State lives only as long as the value; nothing is persisted. Writes
/// take `&mut self`, so sharing across threads requires an external
/// lock chosen by the caller.
pub struct InMemorySubscriptionStore {
    /// Current sequence, insertion-ordered between deletes.
    subscriptions: Vec<Subscription>,

    /// Owner profile, zero-valued until first recorded.
    user_profile: UserProfile,
}

impl InMemorySubscriptionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            user_profile: UserProfile::default(),
        }
    }

    /// Number of stored subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether the store holds no subscriptions.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Index of the first entry with a matching ID.
    fn find_index(&self, id: SubscriptionId) -> Option<usize> {
        self.subscriptions.iter().position(|s| s.id == id)
    }
}

impl Default for InMemorySubscriptionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionStore for InMemorySubscriptionStore {
    fn get_subscriptions(&self) -> Result<Vec<Subscription>> {
        Ok(self.subscriptions.clone())
    }

    fn get_subscription(&self, id: SubscriptionId) -> Result<Option<Subscription>> {
        Ok(self.find_index(id).map(|i| self.subscriptions[i].clone()))
    }

    fn record_subscription(&mut self, subscription: Subscription) -> Result<Subscription> {
        debug!(id = %subscription.id, name = %subscription.name, "recording subscription");
        let stored = subscription.clone();
        self.subscriptions.push(subscription);
        Ok(stored)
    }

    fn delete_subscription(&mut self, id: SubscriptionId) -> Result<()> {
        let index = self
            .find_index(id)
            .ok_or(StoreError::SubscriptionNotFound(id))?;

        // O(1) removal: the last entry moves into the freed slot.
        self.subscriptions.swap_remove(index);
        debug!(id = %id, remaining = self.subscriptions.len(), "deleted subscription");
        Ok(())
    }

    fn record_user_details(&mut self, name: &str, email: &str) -> Result<UserProfile> {
        debug!(name = %name, "recording user details");
        self.user_profile = UserProfile {
            name: name.to_string(),
            email: email.to_string(),
        };
        Ok(self.user_profile.clone())
    }

    fn get_user_details(&self) -> Result<UserProfile> {
        Ok(self.user_profile.clone())
    }
}
