//! # Subscription Store
//!
//! An in-process store for tracked recurring subscriptions and the
//! single owner profile.
//!
//! ## Core Concepts
//!
//! - **Subscriptions**: An ordered sequence of records keyed by an
//!   externally assigned integer ID
//! - **User profile**: One owner identity record, wholly replaced on
//!   each update
//! - **Store interface**: Six operations behind the
//!   [`SubscriptionStore`] trait, fallible so a persistent backend can
//!   slot in later
//!
//! ## Example
//!
//! ```
//! use subtrack::{
//!     InMemorySubscriptionStore, Subscription, SubscriptionId, SubscriptionStore, Timestamp,
//! };
//!
//! let mut store = InMemorySubscriptionStore::new();
//!
//! store.record_subscription(Subscription::new(
//!     SubscriptionId(1),
//!     "Netflix",
//!     999,
//!     Timestamp(1_735_689_600_000_000),
//! ))?;
//!
//! let found = store.get_subscription(SubscriptionId(1))?;
//! assert!(found.is_some());
//!
//! store.record_user_details("Ada", "ada@example.com")?;
//! # Ok::<(), subtrack::StoreError>(())
//! ```

pub mod error;
pub mod memory;
pub mod store;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use memory::InMemorySubscriptionStore;
pub use store::SubscriptionStore;
pub use types::*;
