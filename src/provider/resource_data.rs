//! Generic state container passed through resource lifecycle hooks

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Id plus attribute values of one resource or data source instance
///
/// An empty id means the instance does not exist remotely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    id: String,
    attributes: BTreeMap<String, Value>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instance with only an id set (import)
    pub fn with_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// String attribute, `None` when missing or not a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.attributes.insert(key.to_string(), value.into());
    }

    /// Flat state object: `id` plus every attribute
    pub fn to_state_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::String(self.id.clone()));
        for (key, value) in &self.attributes {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let d = ResourceData::new();
        assert_eq!(d.id(), "");
        assert!(d.get("name").is_none());
    }

    #[test]
    fn test_set_and_get_str() {
        let mut d = ResourceData::new();
        d.set("name", "production");
        assert_eq!(d.get_str("name"), Some("production"));
    }

    #[test]
    fn test_get_str_wrong_type() {
        let mut d = ResourceData::new();
        d.set("count", 3);
        assert_eq!(d.get_str("count"), None);
        assert_eq!(d.get("count"), Some(&Value::from(3)));
    }

    #[test]
    fn test_with_id_and_clear() {
        let mut d = ResourceData::with_id("12");
        assert_eq!(d.id(), "12");
        d.set_id("");
        assert_eq!(d.id(), "");
    }

    #[test]
    fn test_to_state_json() {
        let mut d = ResourceData::with_id("4");
        d.set("name", "dev");
        assert_eq!(
            d.to_state_json(),
            serde_json::json!({"id": "4", "name": "dev"})
        );
    }
}
