//! Attribute schemas for resources and data sources

use serde::Serialize;
use std::collections::BTreeMap;

/// Attribute holding generated documentation metadata
pub const META_ATTRIBUTE: &str = "__meta__";

/// Marker prefixing a resource's summary description
pub const META_SUMMARY: &str = "@SUMMARY@";

/// Marker prefixing an example value in a description
pub const META_EXAMPLE: &str = "@EXAMPLE@";

/// Value type of an attribute
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Int,
    Bool,
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeType::String => write!(f, "string"),
            AttributeType::Int => write!(f, "int"),
            AttributeType::Bool => write!(f, "bool"),
        }
    }
}

/// A single attribute definition
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    pub description: String,
}

impl Attribute {
    fn new(attr_type: AttributeType) -> Self {
        Self {
            attr_type,
            required: false,
            optional: false,
            computed: false,
            sensitive: None,
            description: String::new(),
        }
    }

    pub fn required(attr_type: AttributeType) -> Self {
        Self {
            required: true,
            ..Self::new(attr_type)
        }
    }

    pub fn optional(attr_type: AttributeType) -> Self {
        Self {
            optional: true,
            ..Self::new(attr_type)
        }
    }

    pub fn computed(attr_type: AttributeType) -> Self {
        Self {
            computed: true,
            ..Self::new(attr_type)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = Some(true);
        self
    }
}

/// Ordered set of named attributes
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Schema {
    attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }

    /// Insert or replace an attribute
    pub fn set(&mut self, name: &str, attribute: Attribute) {
        self.attributes.insert(name.to_string(), attribute);
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Attribute)> {
        self.attributes.iter()
    }

    /// Derive a data source schema from a resource schema
    ///
    /// Every attribute becomes computed and neither required nor optional;
    /// callers then mark the searchable attributes as required.
    pub fn data_source_from_resource(resource: &Schema) -> Schema {
        let attributes = resource
            .attributes
            .iter()
            .map(|(name, attr)| {
                let mut attr = attr.clone();
                attr.required = false;
                attr.optional = false;
                attr.computed = true;
                (name.clone(), attr)
            })
            .collect();
        Schema { attributes }
    }
}

/// Every schema the provider exposes
#[derive(Serialize, Debug, Clone, Default)]
pub struct ProviderSchema {
    pub provider: Schema,
    pub resources: BTreeMap<String, Schema>,
    pub data_sources: BTreeMap<String, Schema>,
}
