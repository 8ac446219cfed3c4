// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for IFC data representation

use crate::schema::SchemaVersion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe entity identifier
///
/// Wraps the raw STEP instance number (e.g., #123 becomes EntityId(123))
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        EntityId(id)
    }
}

impl From<EntityId> for u32 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Decoded attribute value
///
/// The closed set of shapes a STEP attribute can take.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AttributeValue {
    /// Null value ($)
    #[default]
    Null,
    /// Derived value (*)
    Derived,
    /// Entity reference (#123)
    EntityRef(EntityId),
    /// Boolean value (.T. / .F.)
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value, escapes already decoded
    String(String),
    /// Enumeration value (.VALUE.)
    Enum(String),
    /// List of values
    List(Vec<AttributeValue>),
    /// Typed value like IFCLABEL('text')
    TypedValue(String, Vec<AttributeValue>),
}

impl AttributeValue {
    /// Try to get as entity reference
    pub fn as_entity_ref(&self) -> Option<EntityId> {
        match self {
            AttributeValue::EntityRef(id) => Some(*id),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            AttributeValue::TypedValue(_, args) if !args.is_empty() => args[0].as_string(),
            _ => None,
        }
    }

    /// Try to get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(f) => Some(*f),
            AttributeValue::Integer(i) => Some(*i as f64),
            AttributeValue::TypedValue(_, args) if !args.is_empty() => args[0].as_float(),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(list) => Some(list),
            _ => None,
        }
    }

    /// Null or derived: carries no data
    pub fn is_absent(&self) -> bool {
        matches!(self, AttributeValue::Null | AttributeValue::Derived)
    }
}

/// Decoded IFC entity
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedEntity {
    /// Entity ID
    pub id: EntityId,
    /// Class keyword as written in the file (e.g. `IFCWALL`)
    pub type_name: String,
    /// Attribute values in declaration order
    pub attributes: Vec<AttributeValue>,
}

impl DecodedEntity {
    /// Get attribute at index
    pub fn get(&self, index: usize) -> Option<&AttributeValue> {
        self.attributes.get(index)
    }

    /// Get entity reference at index
    pub fn get_ref(&self, index: usize) -> Option<EntityId> {
        self.get(index).and_then(|v| v.as_entity_ref())
    }

    /// Get string at index
    pub fn get_string(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(|v| v.as_string())
    }

    /// Case-insensitive class keyword comparison
    pub fn is_a(&self, keyword: &str) -> bool {
        self.type_name.eq_ignore_ascii_case(keyword)
    }
}

/// Model metadata extracted from the STEP header
#[derive(Clone, Debug, Default, Serialize)]
pub struct ModelMetadata {
    /// Schema identifier (e.g., "IFC2X3", "IFC4", "IFC4X3")
    pub schema_version: String,
    /// Originating system (CAD application)
    pub originating_system: Option<String>,
    /// Preprocessor version
    pub preprocessor_version: Option<String>,
    /// File name from header
    pub file_name: Option<String>,
    /// File description (view definition)
    pub file_description: Option<String>,
    /// Author
    pub author: Option<String>,
    /// Organization
    pub organization: Option<String>,
    /// Timestamp
    pub timestamp: Option<String>,
}

impl ModelMetadata {
    /// Schema release used for attribute naming
    pub fn schema(&self) -> SchemaVersion {
        SchemaVersion::from_identifier(&self.schema_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId(42).to_string(), "#42");
    }

    #[test]
    fn test_typed_value_unwraps_for_accessors() {
        let label = AttributeValue::TypedValue(
            "IFCLABEL".to_string(),
            vec![AttributeValue::String("Wall".to_string())],
        );
        assert_eq!(label.as_string(), Some("Wall"));

        let length = AttributeValue::TypedValue(
            "IFCLENGTHMEASURE".to_string(),
            vec![AttributeValue::Integer(3)],
        );
        assert_eq!(length.as_float(), Some(3.0));
    }

    #[test]
    fn test_absent_values() {
        assert!(AttributeValue::Null.is_absent());
        assert!(AttributeValue::Derived.is_absent());
        assert!(!AttributeValue::Bool(false).is_absent());
    }

    #[test]
    fn test_is_a_ignores_case() {
        let entity = DecodedEntity {
            id: EntityId(1),
            type_name: "IFCWALL".to_string(),
            attributes: Vec::new(),
        };
        assert!(entity.is_a("IfcWall"));
        assert!(!entity.is_a("IfcSlab"));
    }
}
