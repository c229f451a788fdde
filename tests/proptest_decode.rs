//! Property-based tests using proptest
//!
//! These tests check that decoding never loses integer precision and that
//! per-item envelope lists are either fully unwrapped in order or fail at
//! the first erroring entry.

use proptest::prelude::*;
use scylla_cloud::cloud::decode::{decode, unwrap_items, ListItem};
use scylla_cloud::cloud::{Cluster, CloudProvider, UserAccount};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

/// Generate a cluster as raw JSON text, with integer ids written literally
fn arb_cluster_json() -> impl Strategy<Value = (i64, String, String)> {
    (any::<i64>(), "[a-z][a-z0-9-]{0,20}").prop_map(|(id, name)| {
        let text = format!(r#"{{"ID": {}, "Name": "{}", "DC": []}}"#, id, name);
        (id, name, text)
    })
}

/// Generate the error slot of a failing entry
fn arb_error_payload() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{0,20}".prop_map(|s| serde_json::to_string(&s).unwrap()),
        (any::<i64>(), "[a-z ]{1,20}")
            .prop_map(|(code, msg)| json!({"Code": code, "Message": msg}).to_string()),
        Just("0".to_string()),
        Just("false".to_string()),
    ]
}

proptest! {
    /// Any i64 account id decodes exactly
    #[test]
    fn account_ids_are_exact(account_id in any::<i64>(), user_id in any::<i64>()) {
        let body = format!(r#"{{"UserID": {}, "AccountID": {}}}"#, user_id, account_id);
        let account: UserAccount = assert_ok!(decode(body.as_bytes()));

        prop_assert_eq!(account.account_id, account_id);
        prop_assert_eq!(account.user_id, user_id);
    }

    /// Provider lists decode field by field
    #[test]
    fn provider_lists_decode(providers in prop::collection::vec((any::<i64>(), "[A-Za-z]{1,10}"), 0..20)) {
        let body = serde_json::to_vec(
            &providers
                .iter()
                .map(|(id, name)| json!({"ID": id, "Name": name}))
                .collect::<Vec<_>>(),
        )
        .unwrap();

        let decoded: Vec<CloudProvider> = assert_ok!(decode(&body));
        prop_assert_eq!(decoded.len(), providers.len());
        for (got, (id, name)) in decoded.iter().zip(&providers) {
            prop_assert_eq!(got.id, *id);
            prop_assert_eq!(&got.name, name);
        }
    }

    /// All-success envelopes keep order and length
    #[test]
    fn envelopes_preserve_order(clusters in prop::collection::vec(arb_cluster_json(), 0..30)) {
        let body = format!(
            "[{}]",
            clusters
                .iter()
                .map(|(_, _, text)| format!(r#"{{"Value": {}, "Error": null}}"#, text))
                .collect::<Vec<_>>()
                .join(",")
        );

        let items: Vec<ListItem<Cluster>> = assert_ok!(decode(body.as_bytes()));
        let unwrapped = assert_ok!(unwrap_items(items));

        prop_assert_eq!(unwrapped.len(), clusters.len());
        for (got, (id, name, _)) in unwrapped.iter().zip(&clusters) {
            prop_assert_eq!(got.id, *id);
            prop_assert_eq!(&got.name, name);
        }
    }

    /// The first erroring entry aborts the list and is reported verbatim
    #[test]
    fn first_item_error_wins(
        clusters in prop::collection::vec(arb_cluster_json(), 1..30),
        errors in prop::collection::vec(proptest::option::of(arb_error_payload()), 1..30),
    ) {
        let entries: Vec<String> = clusters
            .iter()
            .zip(errors.iter().chain(std::iter::repeat(&None)))
            .map(|((_, _, text), error)| {
                let slot = error.clone().unwrap_or_else(|| "null".to_string());
                format!(r#"{{"Value": {}, "Error": {}}}"#, text, slot)
            })
            .collect();
        let body = format!("[{}]", entries.join(","));

        let first_error = errors
            .iter()
            .take(clusters.len())
            .position(Option::is_some);

        let items: Vec<ListItem<Cluster>> = assert_ok!(decode(body.as_bytes()));
        let result = unwrap_items(items);

        match first_error {
            Some(index) => {
                let failure = assert_err!(result);
                prop_assert_eq!(failure.index, index);
                prop_assert_eq!(Some(&failure.payload), errors[index].as_ref());
            }
            None => {
                let unwrapped = assert_ok!(result);
                prop_assert_eq!(unwrapped.len(), clusters.len());
            }
        }
    }
}
