use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;

use groupald_client::doc::{as_bool, as_string_list, as_string_map, pluck};
use groupald_client::{Mod, Mright};

proptest! {
    /// String-list projection preserves every element and their order.
    #[test]
    fn string_list_roundtrip(items in prop::collection::vec(any::<String>(), 0..16)) {
        let node = json!(items);
        let projected = as_string_list(Some(&node)).unwrap();
        prop_assert_eq!(projected, items);
    }

    /// String-map projection preserves every entry.
    #[test]
    fn string_map_roundtrip(
        entries in prop::collection::btree_map(any::<String>(), any::<String>(), 0..16)
    ) {
        let node = json!(entries);
        let projected = as_string_map(Some(&node)).unwrap();
        prop_assert_eq!(projected, entries);
    }

    /// Boolean projection never coerces numbers.
    #[test]
    fn bool_projection_rejects_numbers(n in any::<i64>()) {
        prop_assert!(as_bool(&json!(n)).is_err());
    }

    /// Boolean projection never coerces strings, not even "true"/"false".
    #[test]
    fn bool_projection_rejects_strings(s in any::<String>()) {
        prop_assert!(as_bool(&json!(s)).is_err());
    }

    /// Navigation finds exactly the nested value it was given.
    #[test]
    fn pluck_finds_nested_values(outer in any::<String>(), inner in any::<String>(), value in any::<String>()) {
        let doc = json!({ (outer.clone()): { (inner.clone()): value.clone() } });
        let node = pluck(&doc, &[outer.as_str(), inner.as_str()]);
        prop_assert_eq!(node, Some(&json!(value)));
    }

    /// Navigation on a missing key yields None, never a panic or error.
    #[test]
    fn pluck_missing_key_is_none(key in any::<String>()) {
        let doc = json!({});
        prop_assert_eq!(pluck(&doc, &[key.as_str()]), None);
    }

    /// Only the four mright words parse; everything else is rejected.
    #[test]
    fn mright_parsing_accepts_only_the_vocabulary(s in any::<String>()) {
        let expected = matches!(s.as_str(), "member" | "reader" | "updater" | "admin");
        prop_assert_eq!(s.parse::<Mright>().is_ok(), expected);
    }

    /// Only the three mod words parse; everything else is rejected.
    #[test]
    fn mod_parsing_accepts_only_the_vocabulary(s in any::<String>()) {
        let expected = matches!(s.as_str(), "add" | "delete" | "replace");
        prop_assert_eq!(s.parse::<Mod>().is_ok(), expected);
    }
}
