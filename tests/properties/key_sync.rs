//! Property tests for key synchronization.

use proptest::prelude::*;

use actgen::domain::entities::{ResourceEntry, ResourceStore};
use actgen::domain::services::{ensure_key, synchronize, KeyRequest, KeyStatus};

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-D][a-c]{0,2}").unwrap()
}

fn value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        proptest::string::string_regex("[a-z ]{1,8}").unwrap(),
    ]
}

fn store() -> impl Strategy<Value = ResourceStore> {
    proptest::collection::vec((key(), value()), 0..8).prop_map(|pairs| {
        ResourceStore::from_entries(
            pairs
                .into_iter()
                .map(|(k, v)| ResourceEntry::new(k, v))
                .collect(),
        )
    })
}

fn request() -> impl Strategy<Value = KeyRequest> {
    (key(), value()).prop_map(|(k, v)| KeyRequest::new(k, v).with_comment("property name"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Existing entries are never modified, reordered or removed.
    #[test]
    fn property_ensure_key_preserves_prefix(store in store(), request in request()) {
        let outcome = ensure_key(&store, &request);

        prop_assert!(outcome.store.len() >= store.len());
        prop_assert_eq!(&outcome.store.entries()[..store.len()], store.entries());
    }

    /// PROPERTY: At most one entry is appended, and only when the key lacks a value.
    #[test]
    fn property_ensure_key_appends_at_most_one(store in store(), request in request()) {
        let outcome = ensure_key(&store, &request);
        let appended = outcome.store.len() - store.len();

        prop_assert!(appended <= 1);
        prop_assert_eq!(appended == 1, outcome.status == KeyStatus::Added);
        if store.has_value(&request.key) {
            prop_assert_eq!(outcome.status, KeyStatus::Found);
        }
        if appended == 1 {
            let last = outcome.store.entries().last().unwrap();
            prop_assert_eq!(last.key(), request.key.as_str());
            prop_assert_eq!(last.value(), request.default_value.as_str());
        }
    }

    /// PROPERTY: Running the same requests twice changes nothing the second time.
    #[test]
    fn property_synchronize_is_idempotent(
        store in store(),
        requests in proptest::collection::vec(request(), 0..6),
    ) {
        let first = synchronize(&store, &requests);
        let second = synchronize(&first.store, &requests);

        prop_assert_eq!(&second.store, &first.store);
        prop_assert!(!second.has_changes());
    }

    /// PROPERTY: One record per request, in request order.
    #[test]
    fn property_synchronize_reports_every_request(
        store in store(),
        requests in proptest::collection::vec(request(), 0..6),
    ) {
        let report = synchronize(&store, &requests);

        let keys: Vec<&str> = report.records.iter().map(|r| r.key.as_str()).collect();
        let expected: Vec<&str> = requests.iter().map(|r| r.key.as_str()).collect();
        prop_assert_eq!(keys, expected);
    }
}
