// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identity registry: GUID -> output object, in first-reservation order

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

/// Construction state of a registry slot
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    /// Reserved; references may already point at it
    InProgress,
    /// Fully built and frozen
    Complete(Map<String, Value>),
}

/// Deduplication table for identified entities
///
/// A GUID is reserved before its object is built so that references handed
/// out during construction (cycles) already find it.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    positions: FxHashMap<String, usize>,
    slots: Vec<(String, Slot)>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the GUID is reserved or complete
    pub fn has_entry(&self, guid: &str) -> bool {
        self.positions.contains_key(guid)
    }

    /// Reserve a slot; returns false if the GUID is already known
    pub fn reserve(&mut self, guid: &str) -> bool {
        if self.has_entry(guid) {
            return false;
        }
        self.positions.insert(guid.to_string(), self.slots.len());
        self.slots.push((guid.to_string(), Slot::InProgress));
        true
    }

    /// Store the finished object for a reserved GUID
    ///
    /// Completed slots are never overwritten; returns false in that case.
    pub fn complete(&mut self, guid: &str, object: Map<String, Value>) -> bool {
        if !self.has_entry(guid) {
            self.reserve(guid);
        }
        let Some(&position) = self.positions.get(guid) else {
            return false;
        };
        let slot = &mut self.slots[position].1;
        if matches!(slot, Slot::Complete(_)) {
            return false;
        }
        *slot = Slot::Complete(object);
        true
    }

    /// Slot state for a GUID
    pub fn slot(&self, guid: &str) -> Option<&Slot> {
        self.positions.get(guid).map(|&i| &self.slots[i].1)
    }

    /// Completed objects in first-reservation order
    pub fn entries(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.slots.iter().filter_map(|(_, slot)| match slot {
            Slot::Complete(object) => Some(object),
            Slot::InProgress => None,
        })
    }

    /// Number of reserved GUIDs
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Consume the registry into output objects
    pub fn into_objects(self) -> impl Iterator<Item = Value> {
        self.slots.into_iter().filter_map(|(guid, slot)| match slot {
            Slot::Complete(object) => Some(Value::Object(object)),
            Slot::InProgress => {
                tracing::warn!(guid = %guid, "registry slot never completed");
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("Expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_reserve_once() {
        let mut registry = IdentityRegistry::new();
        assert!(registry.reserve("g1"));
        assert!(!registry.reserve("g1"));
        assert!(registry.has_entry("g1"));
        assert_eq!(registry.slot("g1"), Some(&Slot::InProgress));
    }

    #[test]
    fn test_reservation_order_wins_over_completion_order() {
        let mut registry = IdentityRegistry::new();
        registry.reserve("g1");
        registry.reserve("g2");
        registry.complete("g2", object(json!({"type": "B"})));
        registry.complete("g1", object(json!({"type": "A"})));

        let types: Vec<&Value> = registry.entries().map(|o| &o["type"]).collect();
        assert_eq!(types, vec!["A", "B"]);
    }

    #[test]
    fn test_complete_is_final() {
        let mut registry = IdentityRegistry::new();
        registry.reserve("g1");
        assert!(registry.complete("g1", object(json!({"type": "A"}))));
        assert!(!registry.complete("g1", object(json!({"type": "Other"}))));
        assert_eq!(registry.entries().next().unwrap()["type"], "A");
    }

    #[test]
    fn test_in_progress_slots_not_emitted() {
        let mut registry = IdentityRegistry::new();
        registry.reserve("g1");
        registry.reserve("g2");
        registry.complete("g2", object(json!({"type": "B"})));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.into_objects().count(), 1);
    }
}
