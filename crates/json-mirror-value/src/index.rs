use std::ops;

use crate::value::NULL;
use crate::JsonValue;

/// Anything that can locate a child of a [`JsonValue`]: object keys and
/// array positions.
///
/// Signed positions are accepted so that a negative position is simply a
/// miss instead of a type error at the call site.
pub trait Index {
    /// Return the child this index points to, if there is one.
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue>;
}

impl Index for usize {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        match value {
            JsonValue::Array(items) => items.get(*self),
            _ => None,
        }
    }
}

macro_rules! lossless_index {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
                    usize::try_from(*self).ok()?.index_into(value)
                }
            }
        )*
    };
}

lossless_index!(i32, i64, isize, u32, u64);

impl Index for str {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        match value {
            JsonValue::Object(fields) => fields.get(self),
            _ => None,
        }
    }
}

impl Index for String {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        self.as_str().index_into(value)
    }
}

impl<T: Index + ?Sized> Index for &T {
    fn index_into<'v>(&self, value: &'v JsonValue) -> Option<&'v JsonValue> {
        (**self).index_into(value)
    }
}

impl<I: Index> ops::Index<I> for JsonValue {
    type Output = JsonValue;

    fn index(&self, index: I) -> &JsonValue {
        index.index_into(self).unwrap_or(&NULL)
    }
}

#[cfg(test)]
mod tests {
    use crate::JsonValue;

    fn books() -> JsonValue {
        JsonValue::from(serde_json::json!({
            "books": {"book": [{"title": "CPP"}, {"title": "JAVA"}, {"title": "AdobeFlex"}]}
        }))
    }

    #[test]
    fn test_chained_index() {
        let doc = books();
        assert_eq!(doc["books"]["book"][0]["title"].as_str(), Some("CPP"));
        assert_eq!(doc["books"]["book"][2]["title"].as_str(), Some("AdobeFlex"));
    }

    #[test]
    fn test_negative_and_out_of_range() {
        let doc = books();
        assert!(doc["books"]["book"][-1].is_null());
        assert!(doc["books"]["book"][1000].is_null());
        assert!(doc["books"]["book"][usize::MAX].is_null());
    }

    #[test]
    fn test_index_into_scalar() {
        let doc = books();
        let title = &doc["books"]["book"][0]["title"];
        assert!(title[0].is_null());
        assert!(title["x"].is_null());
        assert!(JsonValue::Null["smth"].is_null());
    }

    #[test]
    fn test_key_on_array_and_position_on_object() {
        let doc = books();
        assert!(doc["books"]["book"]["title"].is_null());
        assert!(doc[0].is_null());
    }

    #[test]
    fn test_string_keys() {
        let doc = books();
        let key = String::from("books");
        assert!(doc[&key].is_object());
        assert!(doc[key].is_object());
    }
}
