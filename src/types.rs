//! Core types for the subscription store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier for a subscription, assigned by the caller rather than
/// the store. Uniqueness is not enforced at insertion.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub i64);

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Microseconds since Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        Timestamp(duration.as_micros() as i64)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// A tracked recurring subscription.
///
/// The store only ever reads `id`; every other field is caller-defined
/// payload carried through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Identifier assigned by the caller.
    pub id: SubscriptionId,

    /// Human-readable service name.
    pub name: String,

    /// Price per renewal, in minor currency units.
    pub price: i64,

    /// Next renewal date.
    pub renews_at: Timestamp,

    /// Application-defined extension payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Subscription {
    /// Create a subscription with no extension payload.
    pub fn new(
        id: SubscriptionId,
        name: impl Into<String>,
        price: i64,
        renews_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            renews_at,
            metadata: None,
        }
    }

    /// Attach extension payload.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// The single owner identity record.
///
/// Zero-valued until the first `record_user_details` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}
