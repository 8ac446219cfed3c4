// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Graph walker: entity graph to IFC.JSON-5a object list
//!
//! Every entity is visited in file order. Entities carrying a GlobalId are
//! built once into the [`IdentityRegistry`] and replaced by `{type, ref}`
//! wherever they occur; anonymous entities are inlined at each use site.

use crate::geometry::GeometryIndex;
use crate::naming::to_lower_camel_case;
use crate::options::ConvertOptions;
use crate::registry::IdentityRegistry;
use crate::side_table::{generator_for, GuidGenerator, RepresentationTable};
use ifcjson_model::{
    guid, AttributeValue, DecodedEntity, EntityId, EntityLayout, EntityResolver, IfcModel, Schema,
};
use rustc_hash::FxHashSet;
use serde_json::{json, Map, Number, Value};

/// Classes dropped wherever they are referenced
const OMITTED_CLASSES: &[&str] = &["IFCOWNERHISTORY", "IFCGEOMETRICREPRESENTATIONCONTEXT"];

/// Counters collected during one run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Top-level entities visited
    pub entities: usize,
    /// Identified entities written to the registry
    pub identified: usize,
    /// Representation entries synthesized from geometry
    pub representations: usize,
    /// References to entities missing from the model
    pub dangling_refs: usize,
    /// Anonymous entities dropped past the depth limit
    pub depth_limited: usize,
    /// Anonymous cycles broken by omission
    pub cycles_broken: usize,
}

/// Objects produced by a run plus its counters
#[derive(Debug)]
pub struct Conversion {
    pub objects: Vec<Value>,
    pub stats: ConversionStats,
}

/// State of one conversion run
pub struct ConversionSession<'m> {
    resolver: &'m dyn EntityResolver,
    schema: &'static Schema,
    geometry: Option<&'m GeometryIndex>,
    max_depth: usize,
    registry: IdentityRegistry,
    representations: RepresentationTable,
    on_path: FxHashSet<EntityId>,
    stats: ConversionStats,
}

impl<'m> ConversionSession<'m> {
    /// Create a session for a model
    pub fn new(
        model: &'m dyn IfcModel,
        geometry: Option<&'m GeometryIndex>,
        options: &ConvertOptions,
    ) -> Self {
        Self::with_generator(model, geometry, options, generator_for(options.id_strategy))
    }

    /// Create a session with a custom identifier generator
    pub fn with_generator(
        model: &'m dyn IfcModel,
        geometry: Option<&'m GeometryIndex>,
        options: &ConvertOptions,
        generator: Box<dyn GuidGenerator>,
    ) -> Self {
        Self {
            resolver: model.resolver(),
            schema: Schema::for_version(model.metadata().schema()),
            geometry: geometry.filter(|_| options.include_geometry),
            max_depth: options.max_depth,
            registry: IdentityRegistry::new(),
            representations: RepresentationTable::new(generator),
            on_path: FxHashSet::default(),
            stats: ConversionStats::default(),
        }
    }

    /// Walk every entity in file order and collect the output objects
    ///
    /// Registry objects come first in reservation order, then representation
    /// entries in creation order.
    pub fn run(mut self) -> Conversion {
        for id in self.resolver.entity_ids() {
            match self.resolver.get(id) {
                Some(entity) => {
                    self.stats.entities += 1;
                    self.serialize(&entity, 0);
                }
                None => tracing::warn!(entity = %id, "skipping entity that failed to decode"),
            }
        }

        self.stats.identified = self.registry.len();
        self.stats.representations = self.representations.len();
        tracing::debug!(
            entities = self.stats.entities,
            identified = self.stats.identified,
            representations = self.stats.representations,
            dangling_refs = self.stats.dangling_refs,
            "graph walk finished"
        );

        let mut objects = Vec::with_capacity(self.registry.len() + self.representations.len());
        objects.extend(self.registry.into_objects());
        objects.extend(self.representations.into_objects());

        Conversion {
            objects,
            stats: self.stats,
        }
    }

    /// Render one entity: a reference if identified, an inline object if not
    ///
    /// Returns `None` when an anonymous entity cannot be rendered (depth
    /// limit or cycle).
    pub fn serialize(&mut self, entity: &DecodedEntity, depth: usize) -> Option<Value> {
        let schema = self.schema;
        let layout = schema.layout_in(entity, self.resolver);

        let Some(global_id) = identity_of(entity, &layout) else {
            return self.serialize_anonymous(entity, &layout, depth);
        };

        let canonical = guid::canonical(global_id);
        let reference = json!({ "type": layout.class_name.as_ref(), "ref": canonical });

        if self.registry.has_entry(&canonical) {
            return Some(reference);
        }
        if depth > self.max_depth {
            // Built when the file-order loop reaches it
            tracing::trace!(entity = %entity.id, depth, "deferring identified entity past depth limit");
            return Some(reference);
        }

        self.registry.reserve(&canonical);
        let object = self.build_object(entity, &layout, Some((global_id, &canonical)), depth);
        self.registry.complete(&canonical, object);

        Some(reference)
    }

    fn serialize_anonymous(
        &mut self,
        entity: &DecodedEntity,
        layout: &EntityLayout<'_>,
        depth: usize,
    ) -> Option<Value> {
        if depth > self.max_depth {
            self.stats.depth_limited += 1;
            tracing::warn!(entity = %entity.id, depth, "dropping anonymous entity past depth limit");
            return None;
        }
        if !self.on_path.insert(entity.id) {
            self.stats.cycles_broken += 1;
            tracing::warn!(entity = %entity.id, "breaking cycle through anonymous entity");
            return None;
        }

        let object = self.build_object(entity, layout, None, depth);
        self.on_path.remove(&entity.id);

        Some(Value::Object(object))
    }

    /// Build the full output object in attribute declaration order
    ///
    /// `identity` is the (native, canonical) GlobalId pair of identified
    /// entities.
    fn build_object(
        &mut self,
        entity: &DecodedEntity,
        layout: &EntityLayout<'_>,
        identity: Option<(&str, &str)>,
        depth: usize,
    ) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert("type".into(), Value::String(layout.class_name.to_string()));

        for (index, value) in entity.attributes.iter().enumerate() {
            let name = layout.attribute_name(index);

            match (name.as_ref(), identity) {
                ("GlobalId", Some((_, canonical))) => {
                    object.insert("globalId".into(), Value::String(canonical.to_string()));
                }
                ("OwnerHistory", _) | ("ObjectPlacement", _) => {}
                ("Representation", Some((native, _))) => {
                    let payload = self.geometry.and_then(|index| index.get(native));
                    if let Some(payload) = payload {
                        let reference = self.representations.synthesize(native, payload);
                        object.insert("representations".into(), Value::Array(vec![reference]));
                    }
                }
                (name, _) => {
                    if let Some(rendered) = self.render_value(value, depth) {
                        object.insert(to_lower_camel_case(name), rendered);
                    }
                }
            }
        }

        object
    }

    /// Render an attribute value; `None` means the key is omitted
    fn render_value(&mut self, value: &AttributeValue, depth: usize) -> Option<Value> {
        match value {
            AttributeValue::Null | AttributeValue::Derived => None,
            AttributeValue::EntityRef(id) => {
                let Some(target) = self.resolver.get(*id) else {
                    self.stats.dangling_refs += 1;
                    tracing::debug!(entity = %id, "omitting unresolvable reference");
                    return None;
                };
                if is_omitted_class(&target) {
                    return None;
                }
                self.serialize(&target, depth + 1)
            }
            AttributeValue::Bool(b) => Some(Value::Bool(*b)),
            AttributeValue::Integer(i) => Some(Value::from(*i)),
            AttributeValue::Float(f) => Number::from_f64(*f).map(Value::Number),
            AttributeValue::String(s) => Some(Value::String(s.clone())),
            AttributeValue::Enum(e) => Some(Value::String(e.clone())),
            AttributeValue::List(items) => {
                let rendered: Vec<Value> = items
                    .iter()
                    .filter_map(|item| self.render_value(item, depth))
                    .collect();
                (!rendered.is_empty()).then_some(Value::Array(rendered))
            }
            AttributeValue::TypedValue(type_name, args) => {
                let wrapped = match args.as_slice() {
                    [single] => self.render_value(single, depth)?,
                    many => self.render_value(&AttributeValue::List(many.to_vec()), depth)?,
                };
                Some(json!({
                    "type": self.schema.class_name(type_name).as_ref(),
                    "wrappedValue": wrapped,
                }))
            }
        }
    }
}

/// Native GlobalId of an identified entity
fn identity_of<'e>(entity: &'e DecodedEntity, layout: &EntityLayout<'_>) -> Option<&'e str> {
    if layout.attributes().first() != Some(&"GlobalId") {
        return None;
    }
    entity.get_string(0).filter(|s| !s.is_empty())
}

fn is_omitted_class(entity: &DecodedEntity) -> bool {
    OMITTED_CLASSES.iter().any(|class| entity.is_a(class))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side_table::DerivedGuids;
    use ifcjson_parser::ParsedModel;

    const HEADER: &str = "ISO-10303-21;\nHEADER;\nFILE_DESCRIPTION((''),'2;1');\nFILE_NAME('t.ifc','',(''),(''),'','','');\nFILE_SCHEMA(('IFC4'));\nENDSEC;\nDATA;\n";

    fn model(data: &str) -> ParsedModel {
        let content = format!("{HEADER}{data}ENDSEC;\nEND-ISO-10303-21;\n");
        ParsedModel::parse(&content, false).unwrap()
    }

    fn run(model: &ParsedModel, geometry: Option<&GeometryIndex>, options: &ConvertOptions) -> Conversion {
        ConversionSession::with_generator(model, geometry, options, Box::new(DerivedGuids::new()))
            .run()
    }

    #[test]
    fn test_typed_value_wrapping() {
        let m = model("#1=IFCPROPERTYSINGLEVALUE('Width',$,IFCLENGTHMEASURE(0.3),$);\n#2=IFCPROPERTYSET('2XQ$n5SLP5MBLyL442paFx',$,'Pset',$,(#1));\n");
        let out = run(&m, None, &ConvertOptions::default());

        assert_eq!(out.objects.len(), 1);
        let pset = &out.objects[0];
        assert_eq!(
            pset["hasProperties"][0],
            json!({
                "type": "IfcPropertySingleValue",
                "name": "Width",
                "nominalValue": {"type": "IfcLengthMeasure", "wrappedValue": 0.3}
            })
        );
    }

    #[test]
    fn test_owner_history_and_context_omitted_in_lists() {
        let m = model(concat!(
            "#1=IFCOWNERHISTORY($,$,$,.ADDED.,$,$,$,0);\n",
            "#2=IFCGEOMETRICREPRESENTATIONCONTEXT($,'Model',3,1.E-05,#3,$);\n",
            "#3=IFCAXIS2PLACEMENT3D(#4,$,$);\n",
            "#4=IFCCARTESIANPOINT((0.,0.,0.));\n",
            "#5=IFCPROJECT('2XQ$n5SLP5MBLyL442paFx',#1,'P',$,$,$,$,(#2),$);\n",
        ));
        let out = run(&m, None, &ConvertOptions::default());

        let project = &out.objects[0];
        assert_eq!(project["type"], "IfcProject");
        assert!(project.get("ownerHistory").is_none());
        assert!(project.get("representationContexts").is_none());
    }

    #[test]
    fn test_depth_limit_keeps_references_resolvable() {
        let m = model(concat!(
            "#1=IFCRELAGGREGATES('2XQ$n5SLP5MBLyL442paFx',$,$,$,#2,(#3));\n",
            "#2=IFCPROJECT('1hOSvn6df7F8_7GcBWlR72',$,'P',$,$,$,$,$,$);\n",
            "#3=IFCSITE('0YvctVUKr0kugbFTf53O9L',$,'S',$,$,$,$,$,$,$,$,$,$,$);\n",
        ));
        let options = ConvertOptions::default().with_max_depth(0);
        let out = run(&m, None, &options);

        assert_eq!(out.objects.len(), 3);
        let ids: Vec<&Value> = out.objects.iter().map(|o| &o["globalId"]).collect();
        let rel = &out.objects[0];
        assert!(ids.contains(&&rel["relatingObject"]["ref"]));
        assert!(ids.contains(&&rel["relatedObjects"][0]["ref"]));
    }

    #[test]
    fn test_anonymous_depth_limit_drops_value() {
        let m = model(concat!(
            "#1=IFCPROPERTYSINGLEVALUE('Width',$,IFCLENGTHMEASURE(0.3),$);\n",
            "#2=IFCPROPERTYSET('2XQ$n5SLP5MBLyL442paFx',$,'Pset',$,(#1));\n",
        ));
        let options = ConvertOptions::default().with_max_depth(0);
        let out = run(&m, None, &options);

        assert!(out.objects[0].get("hasProperties").is_none());
        assert_eq!(out.stats.depth_limited, 1);
    }

    #[test]
    fn test_anonymous_cycle_is_broken() {
        let m = model(concat!(
            "#1=IFCCOMPOSITECURVE((#2),.F.);\n",
            "#2=IFCCOMPOSITECURVESEGMENT(.CONTINUOUS.,.T.,#1);\n",
        ));
        let out = run(&m, None, &ConvertOptions::default());

        assert!(out.objects.is_empty());
        assert!(out.stats.cycles_broken >= 1);
    }

    #[test]
    fn test_dangling_reference_omitted() {
        let m = model("#1=IFCRELAGGREGATES('2XQ$n5SLP5MBLyL442paFx',$,$,$,#99,(#98));\n");
        let out = run(&m, None, &ConvertOptions::default());

        let rel = &out.objects[0];
        assert!(rel.get("relatingObject").is_none());
        assert!(rel.get("relatedObjects").is_none());
        assert_eq!(out.stats.dangling_refs, 2);
    }

    #[test]
    fn test_geometry_disabled_by_options() {
        let m = model("#1=IFCWALL('2XQ$n5SLP5MBLyL442paFx',$,'W',$,$,$,#2,$,$);\n#2=IFCPRODUCTDEFINITIONSHAPE($,$,());\n");
        let geometry = GeometryIndex::from_obj_str("g 2XQ$n5SLP5MBLyL442paFx\nv 0 0 0\n");
        let options = ConvertOptions::default().with_geometry(false);
        let out = run(&m, Some(&geometry), &options);

        assert_eq!(out.objects.len(), 1);
        assert!(out.objects[0].get("representations").is_none());
        assert!(out.objects[0].get("representation").is_none());
    }

    #[test]
    fn test_unknown_class_positional_keys() {
        let m = model("#1=IFCFANCYTHING('x',2,.T.);\n#2=IFCPROPERTYSET('2XQ$n5SLP5MBLyL442paFx',$,'Pset',$,(#1));\n");
        let out = run(&m, None, &ConvertOptions::default());

        assert_eq!(
            out.objects[0]["hasProperties"][0],
            json!({"type": "IFCFANCYTHING", "attribute1": "x", "attribute2": 2, "attribute3": true})
        );
    }

    const PLACED_PRODUCT: &str = concat!(
        "#1=IFCCARTESIANPOINT((0.,0.,0.));\n",
        "#2=IFCAXIS2PLACEMENT3D(#1,$,$);\n",
        "#3=IFCLOCALPLACEMENT($,#2);\n",
        "#4=IFCPRODUCTDEFINITIONSHAPE($,$,());\n",
    );

    #[test]
    fn test_mep_occurrence_gets_product_rules() {
        let m = model(&format!(
            "{PLACED_PRODUCT}#5=IFCPUMP('2XQ$n5SLP5MBLyL442paFx',$,'P',$,$,#3,#4,$,.CIRCULATOR.);\n"
        ));
        let geometry = GeometryIndex::from_obj_str("g 2XQ$n5SLP5MBLyL442paFx\nv 0 0 0\n");
        let out = run(&m, Some(&geometry), &ConvertOptions::default());

        assert_eq!(out.objects.len(), 2);
        let pump = &out.objects[0];
        assert_eq!(pump["type"], "IfcPump");
        assert_eq!(pump["predefinedType"], "CIRCULATOR");
        assert!(pump.get("objectPlacement").is_none());
        assert!(pump.get("attribute6").is_none());
        assert_eq!(pump["representations"][0]["type"], "ShapeRepresentation");
        assert_eq!(pump["representations"][0]["ref"], out.objects[1]["globalId"]);
    }

    #[test]
    fn test_unknown_product_shaped_class() {
        let m = model(&format!(
            "{PLACED_PRODUCT}#5=IFCHEATPUMPUNIT('2XQ$n5SLP5MBLyL442paFx',$,'H',$,'Air',#3,#4,'T1');\n"
        ));
        let geometry = GeometryIndex::from_obj_str("g 2XQ$n5SLP5MBLyL442paFx\nv 0 0 0\n");
        let out = run(&m, Some(&geometry), &ConvertOptions::default());

        let unit = &out.objects[0];
        assert_eq!(unit["type"], "IFCHEATPUMPUNIT");
        assert_eq!(unit["objectType"], "Air");
        assert_eq!(unit["attribute8"], "T1");
        assert!(unit.get("objectPlacement").is_none());
        assert!(unit.get("attribute6").is_none());
        assert!(unit.get("attribute7").is_none());
        assert_eq!(unit["representations"][0]["type"], "ShapeRepresentation");
    }

    #[test]
    fn test_unknown_rooted_class_without_product_shape() {
        let m = model(&format!(
            "{PLACED_PRODUCT}#5=IFCFANCYRECORD('2XQ$n5SLP5MBLyL442paFx',$,'R',$,'x',#1,#1);\n"
        ));
        let out = run(&m, None, &ConvertOptions::default());

        let record = &out.objects[0];
        assert_eq!(record["name"], "R");
        assert_eq!(record["attribute5"], "x");
        assert_eq!(record["attribute6"]["type"], "IfcCartesianPoint");
    }

    #[test]
    fn test_uncommon_measure_type_names() {
        let m = model(concat!(
            "#1=IFCPROPERTYSINGLEVALUE('P',$,IFCPRESSUREMEASURE(5.),$);\n",
            "#2=IFCPROPERTYSINGLEVALUE('F',$,IFCVOLUMETRICFLOWRATEMEASURE(0.2),$);\n",
            "#3=IFCPROPERTYSET('2XQ$n5SLP5MBLyL442paFx',$,'Pset',$,(#1,#2));\n",
        ));
        let out = run(&m, None, &ConvertOptions::default());

        let props = &out.objects[0]["hasProperties"];
        assert_eq!(
            props[0]["nominalValue"],
            json!({"type": "IfcPressureMeasure", "wrappedValue": 5.0})
        );
        assert_eq!(props[1]["nominalValue"]["type"], "IfcVolumetricFlowRateMeasure");
    }
}
