use serde::Serialize;

use crate::error::FocalError;

/// Serialize a value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `FocalError::Parse` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FocalError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| FocalError::Parse(format!("Failed to serialize to JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json() {
        let value = vec!["a", "b"];
        let json = to_json(&value).unwrap();
        assert!(json.contains("\"a\""));
        assert!(json.contains("\"b\""));
    }
}
