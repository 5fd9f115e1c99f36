use crate::JsonValue;

/// Performs a deep equality check between two JSON values.
///
/// Arrays are compared element by element in order. Objects are compared as
/// key sets with pairwise-equal values; key order does not matter.
/// Recursion follows the nesting of the inputs.
///
/// # Examples
///
/// ```
/// use json_mirror_value::{deep_equal, JsonValue};
///
/// let a = JsonValue::from(serde_json::json!({"foo": [1, 2, 3], "bar": true}));
/// let b = JsonValue::from(serde_json::json!({"bar": true, "foo": [1, 2, 3]}));
/// let c = JsonValue::from(serde_json::json!({"foo": [3, 2, 1], "bar": true}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Null, JsonValue::Null) => true,
        (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
        (JsonValue::Number(a), JsonValue::Number(b)) => a == b,
        (JsonValue::String(a), JsonValue::String(b)) => a == b,

        (JsonValue::Array(arr_a), JsonValue::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(a, b)| deep_equal(a, b))
        }

        (JsonValue::Object(obj_a), JsonValue::Object(obj_b)) => {
            obj_a.len() == obj_b.len()
                && obj_a
                    .iter()
                    .all(|(key, a)| obj_b.get(key).is_some_and(|b| deep_equal(a, b)))
        }

        _ => false,
    }
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

impl PartialEq<bool> for JsonValue {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<f64> for JsonValue {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == Some(*other)
    }
}

impl PartialEq<i64> for JsonValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_f64() == Some(*other as f64)
    }
}

impl PartialEq<i32> for JsonValue {
    fn eq(&self, other: &i32) -> bool {
        self.as_f64() == Some(f64::from(*other))
    }
}

impl PartialEq<str> for JsonValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for JsonValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for JsonValue {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(value: serde_json::Value) -> JsonValue {
        JsonValue::from(value)
    }

    #[test]
    fn test_equal_numbers() {
        assert!(deep_equal(&v(json!(1)), &v(json!(1))));
        assert!(!deep_equal(&v(json!(1)), &v(json!(2))));
    }

    #[test]
    fn test_zero_and_null_not_equal() {
        assert!(!deep_equal(&v(json!(0)), &v(json!(null))));
    }

    #[test]
    fn test_empty_string_and_null_not_equal() {
        assert!(!deep_equal(&v(json!("")), &v(json!(null))));
    }

    #[test]
    fn test_one_and_true_not_equal() {
        assert!(!deep_equal(&v(json!(1)), &v(json!(true))));
    }

    #[test]
    fn test_empty_object_and_array_not_equal() {
        assert!(!deep_equal(&v(json!({})), &v(json!([]))));
    }

    #[test]
    fn test_equal_objects_different_order() {
        assert!(deep_equal(
            &v(json!({"a": 1, "b": "2"})),
            &v(json!({"b": "2", "a": 1}))
        ));
    }

    #[test]
    fn test_not_equal_objects_extra_property() {
        assert!(!deep_equal(
            &v(json!({"a": 1, "b": "2"})),
            &v(json!({"a": 1, "b": "2", "c": []}))
        ));
    }

    #[test]
    fn test_not_equal_objects_different_properties() {
        assert!(!deep_equal(
            &v(json!({"a": 1, "b": "2", "c": 3})),
            &v(json!({"a": 1, "b": "2", "d": 3}))
        ));
    }

    #[test]
    fn test_arrays_respect_order() {
        assert!(deep_equal(&v(json!([1, 2, 3])), &v(json!([1, 2, 3]))));
        assert!(!deep_equal(&v(json!([1, 2, 3])), &v(json!([3, 2, 1]))));
        assert!(!deep_equal(&v(json!([1, 2, 3])), &v(json!([1, 2]))));
    }

    #[test]
    fn test_big_object() {
        let a = v(json!({
            "prop1": "value1",
            "prop4": {
                "subProp1": "sub value1",
                "subProp2": {"subSubProp2": [1, 2, {"prop2": 1, "prop": 2}, 4, 5]}
            },
            "prop5": 1000
        }));
        let b = v(json!({
            "prop5": 1000,
            "prop4": {
                "subProp2": {"subSubProp2": [1, 2, {"prop": 2, "prop2": 1}, 4, 5]},
                "subProp1": "sub value1"
            },
            "prop1": "value1"
        }));
        assert_eq!(a, b);
    }

    #[test]
    fn test_compare_with_primitives() {
        assert_eq!(v(json!("Thom")), "Thom");
        assert_eq!(v(json!(21)), 21);
        assert_eq!(v(json!(3.1)), 3.1);
        assert_eq!(v(json!(true)), true);
        assert_ne!(v(json!(null)), "");
    }
}
