use serde_json::Value;

/// Truthiness of the upstream `success` flag. The feed documents 0|1
/// but booleans have been observed as well.
pub fn envelope_success(body: &Value) -> bool {
    match body.get("success") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        _ => false,
    }
}

/// Upstream-provided error message, if any
pub fn envelope_error(body: &Value) -> Option<&str> {
    body.get("error").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_success_truthiness() {
        assert!(envelope_success(&json!({"success": 1})));
        assert!(envelope_success(&json!({"success": true})));
        assert!(envelope_success(&json!({"success": "1"})));

        assert!(!envelope_success(&json!({"success": 0})));
        assert!(!envelope_success(&json!({"success": false})));
        assert!(!envelope_success(&json!({})));
        assert!(!envelope_success(&json!(null)));
    }

    #[test]
    fn test_envelope_error_message() {
        let body = json!({"success": 0, "error": "invalid key"});
        assert_eq!(envelope_error(&body), Some("invalid key"));
        assert_eq!(envelope_error(&json!({})), None);
    }
}
