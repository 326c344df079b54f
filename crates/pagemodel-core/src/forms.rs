//! Form encoding for component-update payloads.

use std::collections::BTreeMap;

/// Property-name to value mapping for a single component update.
///
/// The ordered map keeps the encoded body deterministic.
pub type ComponentUpdatePayload = BTreeMap<String, String>;

/// Encode a payload as percent-encoded form data.
///
/// Spaces encode as `%20`, not `+`; the backend's form parser expects
/// `encodeURIComponent`-style escaping.
pub fn to_form_encoded(payload: &ComponentUpdatePayload) -> String {
    payload
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(pairs: &[(&str, &str)]) -> ComponentUpdatePayload {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode_single_property() {
        let body = to_form_encoded(&payload(&[("title", "Hello World")]));
        assert_eq!(body, "title=Hello%20World");
    }

    #[test]
    fn test_encode_multiple_properties_ordered() {
        let body = to_form_encoded(&payload(&[("b", "2"), ("a", "1")]));
        assert_eq!(body, "a=1&b=2");
    }

    #[test]
    fn test_encode_reserved_characters() {
        let body = to_form_encoded(&payload(&[("text", "a&b=c")]));
        assert_eq!(body, "text=a%26b%3Dc");
    }

    #[test]
    fn test_encode_empty_payload() {
        assert_eq!(to_form_encoded(&ComponentUpdatePayload::new()), "");
    }

    #[test]
    fn test_encode_empty_value() {
        let body = to_form_encoded(&payload(&[("title", "")]));
        assert_eq!(body, "title=");
    }
}
