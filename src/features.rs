use serde::Serialize;
use serde_json::Value;

use crate::format::to_fixed;
use crate::models::Features;

pub const DEFAULT_FEATURE_LIMIT: usize = 15;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    pub name: String,
    pub value: String,
}

/// Returns at most `limit` rows in the feature vector's own order. Entries
/// past the limit are dropped without a marker.
pub fn render(features: &Features, limit: usize) -> Vec<FeatureRow> {
    features
        .iter()
        .take(limit)
        .map(|(name, value)| FeatureRow {
            name: name.clone(),
            value: display_value(value),
        })
        .collect()
}

/// Numbers get two decimals; everything else keeps its plain text form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) => to_fixed(f, 2),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => join_items(items),
        other => other.to_string(),
    }
}

/// List items keep their plain form; only a bare number is a numeric value.
fn join_items(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Array(inner) => join_items(inner),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::{json, Map};

    fn numbered(n: usize) -> Features {
        let mut features = Map::new();
        for i in 0..n {
            features.insert(format!("f{:02}", n - i), json!(i));
        }
        features
    }

    #[test]
    fn truncates_to_first_fifteen_in_order() {
        let features = numbered(20);
        let rows = render(&features, DEFAULT_FEATURE_LIMIT);

        assert_eq!(rows.len(), 15);
        let expected: Vec<&String> = features.keys().take(15).collect();
        let actual: Vec<&String> = rows.iter().map(|r| &r.name).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn short_vectors_are_kept_whole() {
        assert_eq!(render(&numbered(10), DEFAULT_FEATURE_LIMIT).len(), 10);
        assert!(render(&Map::new(), DEFAULT_FEATURE_LIMIT).is_empty());
    }

    #[test]
    fn numbers_get_two_decimals() {
        let features = json!({"a": 3, "len": 23, "ratio": 0.125});
        let rows = render(features.as_object().unwrap(), DEFAULT_FEATURE_LIMIT);
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["3.00", "23.00", "0.13"]);
    }

    #[test]
    fn other_values_use_plain_text() {
        let features = json!({
            "a": "www.example.com",
            "HasHTTPS": true,
            "KnownPhishingPattern": null,
            "SuspiciousKeywords": ["login", "verify"],
        });
        let rows = render(features.as_object().unwrap(), DEFAULT_FEATURE_LIMIT);
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["www.example.com", "true", "null", "login,verify"]);
    }

    #[test]
    fn numbers_inside_lists_keep_plain_form() {
        let features = json!({
            "ports": [80, 443],
            "mixed": [1, "a", true],
            "nested": [1.5, [2, null]],
        });
        let rows = render(features.as_object().unwrap(), DEFAULT_FEATURE_LIMIT);
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["80,443", "1,a,true", "1.5,2,"]);
    }

    proptest! {
        #[test]
        fn render_is_a_bounded_prefix(n in 0usize..40, limit in 0usize..30) {
            let features = numbered(n);
            let first = render(&features, limit);
            prop_assert_eq!(first.len(), n.min(limit));
            prop_assert_eq!(&first, &render(&features, limit));
            for (row, key) in first.iter().zip(features.keys()) {
                prop_assert_eq!(&row.name, key);
            }
        }
    }
}
