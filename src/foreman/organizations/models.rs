//! Organization data models

use serde::{Deserialize, Serialize};

use crate::foreman::models::ForemanObject;
use crate::foreman::traits::{ForemanResource, QueryResponse};

/// Search response for organizations
pub type OrganizationsResponse = QueryResponse<ForemanOrganization>;

/// A Foreman organization
///
/// Carries only the base object attributes; `name` is the sole
/// user-supplied field.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ForemanOrganization {
    #[serde(flatten)]
    pub object: ForemanObject,
}

impl ForemanOrganization {
    /// Create an unsaved organization with the given name
    pub fn new(name: &str) -> Self {
        Self {
            object: ForemanObject {
                name: name.to_string(),
                ..Default::default()
            },
        }
    }

    /// Same organization with an explicit id
    pub fn with_id(mut self, id: i64) -> Self {
        self.object.id = id;
        self
    }
}

impl ForemanResource for ForemanOrganization {
    fn id(&self) -> i64 {
        self.object.id
    }

    fn name(&self) -> &str {
        &self.object.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_organization_body_has_no_id() {
        let org = ForemanOrganization::new("production");
        let json = serde_json::to_value(&org).unwrap();
        assert_eq!(json, serde_json::json!({"name": "production"}));
    }

    #[test]
    fn test_update_body_carries_id_and_name() {
        let org = ForemanOrganization::new("staging").with_id(3);
        let json = serde_json::to_value(&org).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "name": "staging"}));
    }

    #[test]
    fn test_organization_deserialization() {
        let json = r#"{
            "id": 1,
            "name": "Default Organization",
            "title": "Default Organization",
            "description": null,
            "created_at": "2024-01-01 00:00:00 UTC",
            "updated_at": "2024-01-02 00:00:00 UTC"
        }"#;

        let org: ForemanOrganization = serde_json::from_str(json).unwrap();
        assert_eq!(org.id(), 1);
        assert_eq!(org.name(), "Default Organization");
        assert_eq!(
            org.object.created_at.as_deref(),
            Some("2024-01-01 00:00:00 UTC")
        );
        assert_eq!(
            org.object.updated_at.as_deref(),
            Some("2024-01-02 00:00:00 UTC")
        );
    }

    #[test]
    fn test_organization_defaults() {
        let org: ForemanOrganization = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert_eq!(org.name(), "");
        assert!(org.object.created_at.is_none());
        assert!(org.object.updated_at.is_none());
    }

    #[test]
    fn test_organizations_response_deserialization() {
        let json = r#"{
            "total": 3,
            "subtotal": 1,
            "page": 1,
            "per_page": 20,
            "search": "name=\"production\"",
            "results": [{"id": 2, "name": "production"}]
        }"#;

        let response: OrganizationsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.subtotal, 1);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].name(), "production");
        assert_eq!(response.results[0].id(), 2);
    }
}
