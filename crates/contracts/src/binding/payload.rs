use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ActionError;

/// Flat name -> string mapping built from a form's named fields
///
/// Keys keep the order in which the form lists them. A repeated name keeps
/// its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestPayload {
    fields: Map<String, Value>,
}

impl RequestPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        entries.into_iter().collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), Value::String(value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Compact JSON object used as the request body
    pub fn to_json(&self) -> Result<String, ActionError> {
        serde_json::to_string(self).map_err(|e| ActionError::Encode(e.to_string()))
    }
}

impl<K, V> FromIterator<(K, V)> for RequestPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Self::new();
        for (name, value) in iter {
            payload.insert(name, value);
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_keeps_form_order() {
        let payload =
            RequestPayload::from_entries([("pesel", "12345678901"), ("name", "Alice")]);
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"pesel":"12345678901","name":"Alice"}"#
        );
    }

    #[test]
    fn test_repeated_name_last_value_wins() {
        let payload = RequestPayload::from_entries([
            ("status", "planned"),
            ("traveler_pesel", "1"),
            ("status", "active"),
        ]);
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get("status"), Some("active"));
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"status":"active","traveler_pesel":"1"}"#
        );
    }

    #[test]
    fn test_empty_form_is_empty_object() {
        let payload = RequestPayload::new();
        assert!(payload.is_empty());
        assert_eq!(payload.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_values_stay_strings() {
        let payload = RequestPayload::from_entries([("country_id", "7"), ("name", "")]);
        assert_eq!(payload.to_json().unwrap(), r#"{"country_id":"7","name":""}"#);
    }
}
