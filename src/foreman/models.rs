//! Attributes shared by every Foreman object

use serde::{Deserialize, Serialize};

/// Base attribute set of a Foreman object
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ForemanObject {
    /// Server-assigned id; omitted from request bodies while unset
    #[serde(default, skip_serializing_if = "is_unset")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Server-populated, never sent
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>,
    /// Server-populated, never sent
    #[serde(default, skip_serializing)]
    pub updated_at: Option<String>,
}

fn is_unset(id: &i64) -> bool {
    *id == 0
}
