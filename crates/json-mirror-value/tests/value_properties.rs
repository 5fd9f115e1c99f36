use json_mirror_value::{JsonValue, Kind, Map};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        (-1e9f64..1e9f64).prop_map(JsonValue::Number),
        "[a-zA-Z0-9 ]{0,12}".prop_map(JsonValue::String),
    ]
}

fn tree() -> impl Strategy<Value = JsonValue> {
    scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6)
                .prop_map(|entries| JsonValue::Object(entries.into_iter().collect::<Map>())),
        ]
    })
}

proptest! {
    #[test]
    fn out_of_range_index_is_null(t in tree(), past in 0usize..100, neg in i64::MIN..0) {
        prop_assert!(t[t.len() + past].is_null());
        prop_assert!(t[neg].is_null());
        prop_assert!(t.get(neg).is_null());
    }

    #[test]
    fn mismatched_accessors_yield_zero_values(t in tree()) {
        if t.kind() != Kind::Bool {
            prop_assert_eq!(t.as_bool(), None);
            prop_assert!(!t.as_bool_or_default());
        }
        if t.kind() != Kind::Number {
            prop_assert_eq!(t.as_f64(), None);
            prop_assert_eq!(t.as_f64_or_default(), 0.0);
            prop_assert_eq!(t.as_i64_or_default(), 0);
        }
        if t.kind() != Kind::String {
            prop_assert_eq!(t.as_str(), None);
            prop_assert_eq!(t.as_str_or_default(), "");
        }
        if t.kind() != Kind::Array {
            prop_assert!(t.as_array().is_none());
            prop_assert!(t.as_array_or_default().is_empty());
        }
        if t.kind() != Kind::Object {
            prop_assert!(t.as_object().is_none());
            prop_assert!(t.as_object_or_default().is_empty());
        }
    }

    #[test]
    fn equality_is_reflexive_and_structural(t in tree()) {
        prop_assert_eq!(&t, &t.clone());
    }

    #[test]
    fn object_equality_ignores_key_order(t in tree()) {
        if let JsonValue::Object(fields) = &t {
            let reversed: Map = fields.iter().rev().map(|(k, v)| (k.clone(), v.clone())).collect();
            prop_assert_eq!(&t, &JsonValue::Object(reversed));
        }
    }

    #[test]
    fn array_equality_respects_order(a in scalar(), b in scalar()) {
        prop_assume!(a != b);
        let forward = JsonValue::Array(vec![a.clone(), b.clone()]);
        let backward = JsonValue::Array(vec![b, a]);
        prop_assert_ne!(forward, backward);
    }

    #[test]
    fn serde_json_round_trip(t in tree()) {
        let through = JsonValue::from(serde_json::Value::from(t.clone()));
        prop_assert_eq!(through, t);
    }
}

#[test]
fn scenario_navigation() {
    let doc = JsonValue::from(serde_json::json!({"id": 1, "name": "Thom", "age": 21}));
    assert_eq!(doc["name"], "Thom");
    assert!(doc["missing"].is_null());
    assert_eq!(doc["age"].as_i64(), Some(21));
    assert_eq!(doc.pointer("/name"), &JsonValue::from("Thom"));
}
