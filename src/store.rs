//! Storage interface for subscriptions and the owner profile.
//!
//! The in-memory implementation in [`crate::memory`] is the only
//! backend today; the interface stays fallible so a persistent backend
//! can slot in without changing callers.

use crate::error::Result;
use crate::types::{Subscription, SubscriptionId, UserProfile};

/// Capability interface over subscription and profile storage.
///
/// Reads return owned values rather than references into the store, so
/// callers can hold results across later mutations.
pub trait SubscriptionStore {
    /// Return every stored subscription in current sequence order.
    ///
    /// Order is insertion order until a delete reorders the tail (see
    /// [`delete_subscription`](SubscriptionStore::delete_subscription)).
    /// An empty store yields an empty vec.
    fn get_subscriptions(&self) -> Result<Vec<Subscription>>;

    /// Look up the first subscription with the given ID.
    ///
    /// A miss is `Ok(None)`, not an error.
    fn get_subscription(&self, id: SubscriptionId) -> Result<Option<Subscription>>;

    /// Append a subscription unconditionally and return the stored copy.
    ///
    /// IDs are not checked for uniqueness; duplicates are accepted and
    /// scans resolve to the first match.
    fn record_subscription(&mut self, subscription: Subscription) -> Result<Subscription>;

    /// Remove the first subscription with the given ID.
    ///
    /// Removal swaps the matched entry with the last entry and
    /// truncates, so the relative order of the remainder is not
    /// preserved. Fails with
    /// [`SubscriptionNotFound`](crate::error::StoreError::SubscriptionNotFound)
    /// when no entry matches.
    fn delete_subscription(&mut self, id: SubscriptionId) -> Result<()>;

    /// Replace the owner profile with one built from `name` and `email`.
    ///
    /// The previous profile is discarded; no fields are merged.
    fn record_user_details(&mut self, name: &str, email: &str) -> Result<UserProfile>;

    /// Return the current owner profile.
    fn get_user_details(&self) -> Result<UserProfile>;
}
