//! Field-level diffs for audit entries
//!
//! Compares the JSON form of an entity before and after an update and
//! summarizes the top-level fields that changed.

use serde_json::Value;

const MAX_STRING_CHARS: usize = 40;

/// Summarize changed top-level fields (`amount: 5000 -> 6000, ...`)
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes: Vec<String> = before_obj
                .iter()
                .filter_map(|(key, old)| match after_obj.get(key) {
                    Some(new) if new == old => None,
                    Some(new) => Some(format!("{}: {} -> {}", key, format_value(old), format_value(new))),
                    None => Some(format!("{}: {} -> (removed)", key, format_value(old))),
                })
                .collect();

            changes.extend(
                after_obj
                    .iter()
                    .filter(|(key, _)| !before_obj.contains_key(*key))
                    .map(|(key, new)| format!("{}: (added) -> {}", key, format_value(new))),
            );
            changes
        }
        _ if before != after => vec![format!("{} -> {}", format_value(before), format_value(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_STRING_CHARS => {
            let head: String = s.chars().take(MAX_STRING_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_change() {
        let before = json!({"expense_name": "Cine", "amount": 5000});
        let after = json!({"expense_name": "Cine", "amount": 6000});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "amount: 5000 -> 6000");
    }

    #[test]
    fn test_name_and_category_change() {
        let before = json!({"expense_name": "Pan", "category": "2"});
        let after = json!({"expense_name": "Pan integral", "category": "4"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("expense_name: \"Pan\" -> \"Pan integral\""));
        assert!(diff.contains("category: \"2\" -> \"4\""));
    }

    #[test]
    fn test_added_and_removed_fields() {
        let diff = generate_diff(&json!({"a": 1}), &json!({"b": true})).unwrap();
        assert!(diff.contains("a: 1 -> (removed)"));
        assert!(diff.contains("b: (added) -> true"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"amount": 100});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(generate_diff(&json!(100), &json!(250)).unwrap(), "100 -> 250");
    }

    #[test]
    fn test_long_multibyte_string_truncated() {
        let long_name = "ñ".repeat(60);
        let diff = generate_diff(&json!({"n": long_name}), &json!({"n": "corto"})).unwrap();
        assert!(diff.contains("...\""));
    }
}
