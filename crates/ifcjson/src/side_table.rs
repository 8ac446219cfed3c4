// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Representation side-table
//!
//! Geometry payloads become `ShapeRepresentation` pseudo-entities appended
//! after the registry's objects. Their identifiers come from a pluggable
//! generator so tests and reproducible builds can avoid randomness.

use crate::options::IdStrategy;
use serde_json::{json, Map, Value};
use uuid::Uuid;

/// Output class of synthesized representation entries
pub const SHAPE_REPRESENTATION: &str = "ShapeRepresentation";

/// Mints identifiers for representation entries
pub trait GuidGenerator {
    /// New identifier for the payload of the entity with `source` GlobalId
    fn generate(&mut self, source: &str) -> Uuid;
}

/// Random UUID v4 per call
#[derive(Debug, Default)]
pub struct RandomGuids;

impl GuidGenerator for RandomGuids {
    fn generate(&mut self, _source: &str) -> Uuid {
        Uuid::new_v4()
    }
}

/// UUID v5 of the source GlobalId under a fixed namespace
#[derive(Debug)]
pub struct DerivedGuids {
    namespace: Uuid,
}

impl DerivedGuids {
    /// Namespace for representation identifiers
    pub const NAMESPACE: Uuid = Uuid::from_u128(0x6c1f_0f6e_2a7d_4c35_9a4b_51f1_7e0c_d2a8);

    pub fn new() -> Self {
        Self::with_namespace(Self::NAMESPACE)
    }

    pub fn with_namespace(namespace: Uuid) -> Self {
        Self { namespace }
    }
}

impl Default for DerivedGuids {
    fn default() -> Self {
        Self::new()
    }
}

impl GuidGenerator for DerivedGuids {
    fn generate(&mut self, source: &str) -> Uuid {
        Uuid::new_v5(&self.namespace, source.as_bytes())
    }
}

/// Generator for an [`IdStrategy`]
pub fn generator_for(strategy: IdStrategy) -> Box<dyn GuidGenerator> {
    match strategy {
        IdStrategy::Random => Box::new(RandomGuids),
        IdStrategy::Derived => Box::new(DerivedGuids::new()),
    }
}

/// Synthesized representation entries in creation order
pub struct RepresentationTable {
    generator: Box<dyn GuidGenerator>,
    entries: Vec<Map<String, Value>>,
}

impl RepresentationTable {
    pub fn new(generator: Box<dyn GuidGenerator>) -> Self {
        Self {
            generator,
            entries: Vec::new(),
        }
    }

    /// Store a payload and return the reference to its entry
    pub fn synthesize(&mut self, source: &str, payload: &str) -> Value {
        let guid = self.generator.generate(source).hyphenated().to_string();

        let mut entry = Map::new();
        entry.insert("type".into(), SHAPE_REPRESENTATION.into());
        entry.insert("globalId".into(), guid.clone().into());
        entry.insert("representationIdentifier".into(), "Body".into());
        entry.insert("representationType".into(), "OBJ".into());
        entry.insert("items".into(), json!([payload]));
        self.entries.push(entry);

        json!({ "type": SHAPE_REPRESENTATION, "ref": guid })
    }

    /// Entries in creation order
    pub fn entries(&self) -> &[Map<String, Value>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the table into output objects
    pub fn into_objects(self) -> impl Iterator<Item = Value> {
        self.entries.into_iter().map(Value::Object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_entry_shape() {
        let mut table = RepresentationTable::new(Box::new(DerivedGuids::new()));
        let reference = table.synthesize("2XQ$n5SLP5MBLyL442paFx", "v 0 0 0");

        let entry = &table.entries()[0];
        assert_eq!(entry["type"], "ShapeRepresentation");
        assert_eq!(entry["representationIdentifier"], "Body");
        assert_eq!(entry["representationType"], "OBJ");
        assert_eq!(entry["items"], json!(["v 0 0 0"]));
        assert_eq!(reference["type"], "ShapeRepresentation");
        assert_eq!(reference["ref"], entry["globalId"]);

        let keys: Vec<&str> = entry.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["type", "globalId", "representationIdentifier", "representationType", "items"]
        );
    }

    #[test]
    fn test_derived_guids_are_stable() {
        let mut a = DerivedGuids::new();
        let mut b = DerivedGuids::new();
        assert_eq!(a.generate("x"), b.generate("x"));
        assert_ne!(a.generate("x"), a.generate("y"));
        assert_eq!(a.generate("x").get_version_num(), 5);
    }

    #[test]
    fn test_random_guids_differ() {
        let mut generator = RandomGuids;
        let first = generator.generate("x");
        assert_ne!(first, generator.generate("x"));
        assert_eq!(first.get_version_num(), 4);
    }

    #[test]
    fn test_entries_in_creation_order() {
        let mut table = RepresentationTable::new(generator_for(IdStrategy::Derived));
        table.synthesize("b", "second");
        table.synthesize("a", "first");
        let items: Vec<Value> = table.into_objects().map(|o| o["items"][0].clone()).collect();
        assert_eq!(items, vec![json!("second"), json!("first")]);
    }
}
