//! Secret payload handling shared by every secret store adapter.

use std::collections::HashMap;

use crate::error::{ResolveError, ResolveResult};

/// Picks the value a secret reference asks for out of a fetched payload.
///
/// `payload` is the secret's textual value, or `None` when the secret only
/// carries binary data. Without a `field` the payload is returned as is.
/// With a `field` the payload must be a flat JSON object whose values are all
/// strings; a JSON `null` counts as an object with no keys.
///
/// # Errors
///
/// - [`ResolveError::NoStringValue`] when `payload` is `None`
/// - [`ResolveError::InvalidJson`] when a field is requested and the payload
///   is not a flat string map
/// - [`ResolveError::KeyNotFound`] when the map lacks `field`
pub fn select_secret_value(
    id: &str,
    payload: Option<&str>,
    field: Option<&str>,
) -> ResolveResult<String> {
    let payload = payload.ok_or_else(|| ResolveError::NoStringValue { id: id.to_string() })?;

    let Some(key) = field else {
        return Ok(payload.to_string());
    };

    let object: Option<HashMap<String, String>> =
        serde_json::from_str(payload).map_err(|e| ResolveError::InvalidJson {
            id: id.to_string(),
            reason: e.to_string(),
        })?;

    object.and_then(|mut map| map.remove(key)).ok_or_else(|| ResolveError::KeyNotFound {
        key: key.to_string(),
        id: id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_whole_payload_without_field() {
        let value = select_secret_value("id", Some("not json at all"), None);
        assert_eq!(value, Ok("not json at all".to_string()));
    }

    #[test]
    fn test_field_extraction() {
        let payload = r#"{"Password":"p","User":"u"}"#;
        let value = select_secret_value("id", Some(payload), Some("Password"));
        assert_eq!(value, Ok("p".to_string()));
    }

    #[test]
    fn test_null_payload_has_no_keys() {
        let err = select_secret_value("/db", Some("null"), Some("Password"));
        assert_eq!(
            err,
            Err(ResolveError::KeyNotFound {
                key: "Password".to_string(),
                id: "/db".to_string()
            })
        );
    }

    #[test]
    fn test_missing_field() {
        let err = select_secret_value("/db", Some(r#"{"User":"u"}"#), Some("Password"));
        assert_eq!(
            err,
            Err(ResolveError::KeyNotFound {
                key: "Password".to_string(),
                id: "/db".to_string()
            })
        );
    }

    #[test]
    fn test_non_json_payload_with_field() {
        let err = select_secret_value("/db", Some("plain"), Some("Password")).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidJson { .. }));
        assert!(err.to_string().starts_with("secret /db is not valid JSON: "));
    }

    #[test]
    fn test_non_string_values_are_rejected() {
        let err = select_secret_value("/db", Some(r#"{"Port":5432}"#), Some("Port")).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidJson { .. }));
    }

    #[test]
    fn test_binary_secret() {
        let err = select_secret_value("id", None, None);
        assert_eq!(err, Err(ResolveError::NoStringValue { id: "id".to_string() }));
    }
}
