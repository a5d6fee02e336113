//! Output helpers for decoder binaries
//!
//! Provides convenient functions for rendering decoded values, reducing
//! boilerplate in command implementations.

use serde::Serialize;

/// Render any serializable data as JSON
///
/// This replaces the common pattern:
/// ```rust,ignore
/// let json = if compact {
///     serde_json::to_string(&data)?
/// } else {
///     serde_json::to_string_pretty(&data)?
/// };
/// ```
///
/// # Arguments
///
/// * `data` - Any type that implements `Serialize`
/// * `compact` - Emit a single line instead of pretty-printed output
///
/// # Errors
///
/// Returns an error if serialization fails (e.g. a map with non-string keys)
pub fn json_output<T: Serialize>(data: &T, compact: bool) -> anyhow::Result<String> {
    let json = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(json)
}

/// Render label/value pairs as an aligned two-column table
///
/// For commands that report a handful of facts rather than structured data.
///
/// # Example
///
/// ```rust,ignore
/// use decode_common::text_table;
///
/// let table = text_table(&[("format", "primary"), ("value", "2020-01-02T03:04:05")]);
/// println!("{table}");
/// ```
pub fn text_table<L: AsRef<str>, V: AsRef<str>>(rows: &[(L, V)]) -> String {
    let width = rows
        .iter()
        .map(|(label, _)| label.as_ref().len())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(label, value)| format!("{:width$}  {}", label.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_json_output_pretty() {
        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };
        let json = json_output(&data, false).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"value\": 42"));
    }

    #[test]
    fn test_json_output_compact() {
        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };
        let json = json_output(&data, true).unwrap();
        assert_eq!(json, r#"{"name":"test","value":42}"#);
    }

    #[test]
    fn test_text_table_aligns_labels() {
        let table = text_table(&[("a", "1"), ("long", "2")]);
        assert_eq!(table, "a     1\nlong  2");
    }

    #[test]
    fn test_text_table_empty() {
        let rows: [(&str, &str); 0] = [];
        assert_eq!(text_table(&rows), "");
    }
}
