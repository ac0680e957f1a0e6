//! Per-record structured payload

/// Key-value payload attached to a single log record.
///
/// Keys are strings, values anything JSON-representable. A fresh map is
/// supplied per call and never retained by the logger; insertion order is
/// irrelevant to the output.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Build a [`Fields`] map in place.
///
/// Values go through [`serde_json::json!`], so literals, expressions and
/// nested structures all work. `fields! {}` is the empty map.
///
/// ```
/// use kvlog_core::fields;
///
/// let status = 500;
/// let f = fields! { "code" => status, "msg" => "boom" };
/// assert_eq!(f.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => { $crate::Fields::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Fields::new();
        $(
            map.insert(::std::string::String::from($key), $crate::__json!($value));
        )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::Fields;

    #[test]
    fn test_fields_macro() {
        let f = fields! {
            "code" => 500,
            "msg" => "boom",
            "retryable" => false,
            "ctx" => json!({ "attempt": 3 }),
        };
        assert_eq!(f.len(), 4);
        assert_eq!(f["code"], 500);
        assert_eq!(f["msg"], "boom");
        assert_eq!(f["retryable"], false);
        assert_eq!(f["ctx"]["attempt"], 3);
    }

    #[test]
    fn test_empty_fields() {
        let f = fields! {};
        assert!(f.is_empty());
        assert_eq!(f, Fields::new());
    }
}
