//! Named data carried by a state.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Ordered mapping from declared field name to value.
///
/// A payload always holds exactly the fields its state declares, in
/// declaration order. Values are arbitrary JSON values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    entries: Vec<(String, Value)>,
}

impl Payload {
    /// Pair each declared field with the positional value at the same index.
    ///
    /// A field declared twice keeps its first slot and takes the later value.
    pub(crate) fn from_fields(fields: &[String], values: Vec<Value>) -> Self {
        let mut entries: Vec<(String, Value)> = Vec::with_capacity(fields.len());
        for (field, value) in fields.iter().zip(values) {
            match entries.iter_mut().find(|(name, _)| name == field) {
                Some(entry) => entry.1 = value,
                None => entries.push((field.clone(), value)),
            }
        }
        Self { entries }
    }

    /// Value stored under `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Field/value pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy the payload into a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect::<Map<String, Value>>(),
        )
    }
}

impl PartialEq<Value> for Payload {
    fn eq(&self, other: &Value) -> bool {
        self.to_json() == *other
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn pairs_fields_with_values_in_order() {
        let payload = Payload::from_fields(
            &fields(&["first", "second"]),
            vec![json!("foo"), json!("bar")],
        );

        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get("first"), Some(&json!("foo")));
        assert_eq!(payload.get("second"), Some(&json!("bar")));
        assert_eq!(payload.fields().collect::<Vec<_>>(), ["first", "second"]);
    }

    #[test]
    fn missing_field_is_none() {
        let payload = Payload::from_fields(&fields(&["example"]), vec![json!(1)]);

        assert_eq!(payload.get("other"), None);
        assert!(!payload.contains("other"));
        assert!(payload.contains("example"));
    }

    #[test]
    fn duplicate_field_takes_last_value() {
        let payload = Payload::from_fields(&fields(&["x", "y", "x"]), vec![
            json!(1),
            json!(2),
            json!(3),
        ]);

        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get("x"), Some(&json!(3)));
        assert_eq!(payload.fields().collect::<Vec<_>>(), ["x", "y"]);
    }

    #[test]
    fn compares_against_json_objects() {
        let payload = Payload::from_fields(
            &fields(&["first", "second"]),
            vec![json!("foo"), json!("bar")],
        );

        assert_eq!(payload, json!({ "first": "foo", "second": "bar" }));
        assert_ne!(payload, json!({ "first": "foo" }));
    }

    #[test]
    fn serializes_as_object() {
        let payload = Payload::from_fields(&fields(&["body", "status"]), vec![
            json!("ok"),
            json!(200),
        ]);

        let text = serde_json::to_string(&payload).unwrap();

        assert_eq!(text, r#"{"body":"ok","status":200}"#);
    }

    #[test]
    fn default_is_empty() {
        let payload = Payload::default();

        assert!(payload.is_empty());
        assert_eq!(payload.to_json(), json!({}));
    }
}
