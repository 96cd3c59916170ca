//! Property tests over generated subscription workloads.

use proptest::prelude::*;
use subtrack::{
    InMemorySubscriptionStore, StoreError, Subscription, SubscriptionId, SubscriptionStore,
    Timestamp,
};

fn arb_subscription() -> impl Strategy<Value = Subscription> {
    (any::<i64>(), "[a-z]{1,12}", 0i64..100_000, 0i64..4_102_444_800_000_000).prop_map(
        |(id, name, price, at)| Subscription::new(SubscriptionId(id), name, price, Timestamp(at)),
    )
}

/// Store seeded with one subscription per name, IDs 0..names.len().
fn seeded(names: &[String]) -> InMemorySubscriptionStore {
    let mut store = InMemorySubscriptionStore::new();
    for (i, name) in names.iter().enumerate() {
        store
            .record_subscription(Subscription::new(
                SubscriptionId(i as i64),
                name.clone(),
                999,
                Timestamp(0),
            ))
            .unwrap();
    }
    store
}

proptest! {
    #[test]
    fn prop_append_grows_sequence_by_one(
        subs in prop::collection::vec(arb_subscription(), 0..20),
        extra in arb_subscription(),
    ) {
        let mut store = InMemorySubscriptionStore::new();
        for s in subs {
            store.record_subscription(s).unwrap();
        }
        let before = store.subscription_count();

        store.record_subscription(extra.clone()).unwrap();

        let all = store.get_subscriptions().unwrap();
        prop_assert_eq!(all.len(), before + 1);
        prop_assert_eq!(all.last().unwrap(), &extra);
    }

    #[test]
    fn prop_lookup_hits_every_recorded_id(
        names in prop::collection::vec("[a-z]{1,8}", 1..16),
    ) {
        let store = seeded(&names);

        for (i, name) in names.iter().enumerate() {
            let found = store.get_subscription(SubscriptionId(i as i64)).unwrap();
            prop_assert_eq!(&found.unwrap().name, name);
        }
    }

    #[test]
    fn prop_lookup_miss_is_none_not_error(
        names in prop::collection::vec("[a-z]{1,8}", 0..16),
        offset in 0i64..1000,
    ) {
        let store = seeded(&names);

        // Seeded IDs are 0..len, so anything at or past len misses.
        let miss = SubscriptionId(names.len() as i64 + offset);
        prop_assert!(store.get_subscription(miss).unwrap().is_none());
    }

    #[test]
    fn prop_delete_removes_exactly_the_requested_id(
        names in prop::collection::vec("[a-z]{1,8}", 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = seeded(&names);
        let target = SubscriptionId(pick.index(names.len()) as i64);

        store.delete_subscription(target).unwrap();

        prop_assert_eq!(store.subscription_count(), names.len() - 1);
        prop_assert!(store.get_subscription(target).unwrap().is_none());
        for i in 0..names.len() as i64 {
            if SubscriptionId(i) != target {
                prop_assert!(store.get_subscription(SubscriptionId(i)).unwrap().is_some());
            }
        }
    }

    #[test]
    fn prop_failed_delete_changes_nothing(
        names in prop::collection::vec("[a-z]{1,8}", 0..16),
        offset in 0i64..1000,
    ) {
        let mut store = seeded(&names);
        let before = store.get_subscriptions().unwrap();

        let miss = SubscriptionId(names.len() as i64 + offset);
        let result = store.delete_subscription(miss);

        prop_assert!(matches!(result, Err(StoreError::SubscriptionNotFound(_))));
        prop_assert_eq!(store.get_subscriptions().unwrap(), before);
    }

    #[test]
    fn prop_profile_last_write_wins(
        details in prop::collection::vec(("[a-z]{1,8}", "[a-z]{1,8}"), 1..10),
    ) {
        let mut store = InMemorySubscriptionStore::new();
        for (name, email) in &details {
            store.record_user_details(name, email).unwrap();
        }

        let (last_name, last_email) = details.last().unwrap();
        let profile = store.get_user_details().unwrap();
        prop_assert_eq!(&profile.name, last_name);
        prop_assert_eq!(&profile.email, last_email);
    }
}
