// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity resolution trait for looking up and resolving IFC entities

use crate::{AttributeValue, DecodedEntity, EntityId};
use std::sync::Arc;

/// Entity lookup and reference resolution
///
/// Implementations should provide O(1) lookup by entity ID and report
/// entity IDs in the order they appear in the source file.
///
/// # Example
///
/// ```ignore
/// use ifcjson_model::{EntityResolver, AttributeValue};
///
/// fn placement_of(resolver: &dyn EntityResolver, product: &DecodedEntity) {
///     if let Some(placement) = product.get(5).and_then(|a| resolver.resolve_ref(a)) {
///         println!("Placement type: {}", placement.type_name);
///     }
/// }
/// ```
pub trait EntityResolver: Send + Sync {
    /// Get entity by ID
    fn get(&self, id: EntityId) -> Option<Arc<DecodedEntity>>;

    /// Resolve an entity reference from an attribute value
    fn resolve_ref(&self, attr: &AttributeValue) -> Option<Arc<DecodedEntity>> {
        match attr {
            AttributeValue::EntityRef(id) => self.get(*id),
            _ => None,
        }
    }

    /// All entity IDs in file order
    fn entity_ids(&self) -> Vec<EntityId>;

    /// Get total entity count
    fn entity_count(&self) -> usize {
        self.entity_ids().len()
    }
}
