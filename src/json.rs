//! JSON field access for handshake responses.

use {crate::EventDataError, log::warn, serde_json::Value};

/// Look up a string at the dotted `path` (e.g. `payload.token`) in `value`.
///
/// Fails with [`MissingField`][EventDataError::MissingField] if any segment is absent or the
/// final value is not a string.
pub fn str_field<'a>(value: &'a Value, path: &str) -> Result<&'a str, EventDataError> {
    path.split('.')
        .try_fold(value, |current, segment| current.get(segment))
        .and_then(Value::as_str)
        .ok_or_else(|| EventDataError::MissingField(path.to_string()))
}

/// Look up a string at the dotted `path`, falling back to an empty string.
///
/// A missing field yields an empty string and a warning. During the handshake the empty value is
/// sent on to the next step, where the server rejects it.
pub fn str_field_or_empty(value: &Value, path: &str) -> String {
    match str_field(value, path) {
        Ok(s) => s.to_string(),
        Err(_) => {
            warn!("Response has no '{}'; continuing with an empty value", path);
            String::new()
        }
    }
}
