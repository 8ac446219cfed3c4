// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! EntityResolver trait implementation

use crate::scanner::EntityIndex;
use crate::tokenizer::parse_entity_at;
use ifcjson_model::{DecodedEntity, EntityId, EntityResolver, ParseError, Result};
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe entity resolver implementation
pub struct ResolverImpl {
    /// Raw IFC content (owned for thread safety)
    content: String,
    /// Entity ID -> (start, end) byte offsets, plus file order
    index: EntityIndex,
    /// Decoded entity cache (thread-safe)
    cache: RwLock<FxHashMap<u32, Arc<DecodedEntity>>>,
}

impl ResolverImpl {
    /// Create a new resolver
    pub fn new(content: String, index: EntityIndex) -> Self {
        Self {
            content,
            index,
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// Decode every indexed entity into the cache
    ///
    /// Fails on the first record that does not decode.
    pub fn decode_all(&self) -> Result<()> {
        for &id in self.index.order() {
            if self.decode_and_cache(id).is_none() {
                let entity_id = EntityId(id);
                let (start, end) = self
                    .index
                    .get(id)
                    .ok_or(ParseError::EntityNotFound(entity_id))?;
                parse_entity_at(&self.content, start, end)
                    .map_err(|msg| ParseError::entity_parse(entity_id, msg))?;
            }
        }
        Ok(())
    }

    /// Raw text of an entity definition
    pub fn raw_text(&self, id: EntityId) -> Option<&str> {
        let (start, end) = self.index.get(id.0)?;
        self.content.get(start..end)
    }

    /// Decode and cache an entity
    fn decode_and_cache(&self, id: u32) -> Option<Arc<DecodedEntity>> {
        // Check cache with read lock
        {
            let cache = self.cache.read().ok()?;
            if let Some(cached) = cache.get(&id) {
                return Some(Arc::clone(cached));
            }
        }

        let (start, end) = self.index.get(id)?;

        // Malformed records behave like missing ones
        let entity = parse_entity_at(&self.content, start, end).ok()?;
        let arc = Arc::new(entity);

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(id, Arc::clone(&arc));
        }

        Some(arc)
    }
}

impl EntityResolver for ResolverImpl {
    fn get(&self, id: EntityId) -> Option<Arc<DecodedEntity>> {
        self.decode_and_cache(id.0)
    }

    fn entity_ids(&self) -> Vec<EntityId> {
        self.index.order().iter().map(|&id| EntityId(id)).collect()
    }

    fn entity_count(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::EntityScanner;
    use ifcjson_model::AttributeValue;

    const TEST_IFC: &str = r#"ISO-10303-21;
HEADER;
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#4=IFCWALL('2XQ$n5SLP5MBLyL442paFx',$,'Wall 1',$,$,$,$,$);
#1=IFCPROJECT('1hOSvn6df7F8_7GcBWlR72',$,'Project',$,$,$,$,$,#2);
#2=IFCUNITASSIGNMENT((#3));
#3=IFCSIUNIT(*,.LENGTHUNIT.,.MILLI.,.METRE.);
#9=IFCBROKEN(#,$);
ENDSEC;
END-ISO-10303-21;
"#;

    fn resolver() -> ResolverImpl {
        let index = EntityScanner::build_index(TEST_IFC);
        ResolverImpl::new(TEST_IFC.to_string(), index)
    }

    #[test]
    fn test_resolver_get() {
        let resolver = resolver();
        let entity = resolver.get(EntityId(1)).unwrap();
        assert_eq!(entity.id, EntityId(1));
        assert_eq!(entity.type_name, "IFCPROJECT");
        assert!(resolver.get(EntityId(42)).is_none());
    }

    #[test]
    fn test_resolver_file_order() {
        let resolver = resolver();
        let ids: Vec<u32> = resolver.entity_ids().iter().map(|id| id.0).collect();
        assert_eq!(ids, vec![4, 1, 2, 3, 9]);
    }

    #[test]
    fn test_malformed_entity_is_missing() {
        let resolver = resolver();
        assert!(resolver.raw_text(EntityId(9)).is_some());
        assert!(resolver.get(EntityId(9)).is_none());
        match resolver.decode_all() {
            Err(ParseError::EntityParse(id, _)) => assert_eq!(id, EntityId(9)),
            other => panic!("Expected entity parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_ref() {
        let resolver = resolver();
        let project = resolver.get(EntityId(1)).unwrap();
        let units = resolver.resolve_ref(project.get(8).unwrap()).unwrap();
        assert_eq!(units.type_name, "IFCUNITASSIGNMENT");
        assert!(resolver.resolve_ref(&AttributeValue::Null).is_none());
    }

    #[test]
    fn test_cache_returns_same_arc() {
        let resolver = resolver();
        let a = resolver.get(EntityId(3)).unwrap();
        let b = resolver.get(EntityId(3)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_resolver_thread_safe() {
        use std::thread;

        let resolver = Arc::new(resolver());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                thread::spawn(move || {
                    for id in 1..=4 {
                        assert!(resolver.get(EntityId(id)).is_some());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
