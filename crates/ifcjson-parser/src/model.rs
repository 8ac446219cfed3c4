// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ParsedModel - Main IFC model implementation

use crate::resolver::ResolverImpl;
use crate::scanner::{parse_header, EntityScanner, HeaderInfo};

use ifcjson_model::{
    EntityResolver, IfcModel, ModelMetadata, ParseError, ProgressCallback, Result,
};
use std::sync::Arc;

/// Parsed IFC model implementing the `IfcModel` trait
///
/// Holds the entity resolver and the header metadata of one STEP file.
pub struct ParsedModel {
    /// Entity resolver for lookups
    resolver: Arc<ResolverImpl>,
    /// File metadata
    metadata: ModelMetadata,
}

impl ParsedModel {
    /// Parse IFC content and create a model
    pub fn parse(content: &str, eager: bool) -> Result<Self> {
        Self::parse_with_progress(content, eager, Box::new(|_: &str, _: f32| {}))
    }

    /// Parse with progress reporting
    pub fn parse_with_progress(
        content: &str,
        eager: bool,
        on_progress: ProgressCallback,
    ) -> Result<Self> {
        on_progress("Reading header", 0.0);
        validate_envelope(content)?;
        let metadata = metadata_from_header(parse_header(content));

        on_progress("Scanning entities", 20.0);
        let index = EntityScanner::build_index(content);
        if index.is_empty() {
            return Err(ParseError::format("DATA section contains no entities"));
        }

        on_progress("Building index", 60.0);
        let resolver = Arc::new(ResolverImpl::new(content.to_string(), index));

        if eager {
            on_progress("Decoding entities", 70.0);
            resolver.decode_all()?;
        }

        on_progress("Complete", 100.0);

        Ok(Self { resolver, metadata })
    }
}

impl IfcModel for ParsedModel {
    fn resolver(&self) -> &dyn EntityResolver {
        self.resolver.as_ref()
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

fn validate_envelope(content: &str) -> Result<()> {
    if !content.trim_start().starts_with("ISO-10303-21") {
        return Err(ParseError::format("missing ISO-10303-21 signature"));
    }
    if !content.contains("HEADER;") {
        return Err(ParseError::InvalidHeader("missing HEADER section".into()));
    }
    if !content.contains("DATA;") {
        return Err(ParseError::format("missing DATA section"));
    }
    Ok(())
}

fn metadata_from_header(header: HeaderInfo) -> ModelMetadata {
    ModelMetadata {
        schema_version: header.schema_version,
        originating_system: header.originating_system,
        preprocessor_version: header.preprocessor_version,
        file_name: header.file_name,
        file_description: header.file_description,
        author: header.author,
        organization: header.organization,
        timestamp: header.timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifcjson_model::{EntityId, SchemaVersion};
    use std::sync::Mutex;

    const TEST_IFC: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [CoordinationView]'),'2;1');
FILE_NAME('test.ifc','2024-01-01T00:00:00',('Author'),('Org'),'Preprocessor','App','');
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#1=IFCPROJECT('1hOSvn6df7F8_7GcBWlR72',$,'Test Project',$,$,$,$,$,#2);
#2=IFCUNITASSIGNMENT((#3));
#3=IFCSIUNIT(*,.LENGTHUNIT.,.MILLI.,.METRE.);
#4=IFCSITE('2XQ$n5SLP5MBLyL442paFx',$,'Site',$,$,$,$,$,$,$,$,$,$,$);
#5=IFCRELAGGREGATES('0YvctVUKr0kugbFTf53O9L',$,$,$,#1,(#4));
ENDSEC;
END-ISO-10303-21;
"#;

    #[test]
    fn test_parse_model() {
        let model = ParsedModel::parse(TEST_IFC, false).unwrap();

        assert_eq!(model.metadata().schema_version, "IFC2X3");
        assert_eq!(model.metadata().schema(), SchemaVersion::Ifc2x3);
        assert_eq!(model.metadata().file_name, Some("test.ifc".to_string()));
        assert_eq!(model.metadata().originating_system.as_deref(), Some("App"));

        assert_eq!(model.resolver().entity_count(), 5);
        let site = model.resolver().get(EntityId(4)).unwrap();
        assert_eq!(site.get_string(2), Some("Site"));
    }

    #[test]
    fn test_parse_eager() {
        let model = ParsedModel::parse(TEST_IFC, true).unwrap();
        assert_eq!(model.resolver().entity_ids().len(), 5);
    }

    #[test]
    fn test_eager_reports_malformed_entity() {
        let broken = TEST_IFC.replace("#3=IFCSIUNIT(*,", "#3=IFCSIUNIT(#,");
        assert!(ParsedModel::parse(&broken, false).is_ok());
        assert!(matches!(
            ParsedModel::parse(&broken, true),
            Err(ParseError::EntityParse(EntityId(3), _))
        ));
    }

    #[test]
    fn test_rejects_non_step_content() {
        assert!(matches!(
            ParsedModel::parse("{\"not\": \"ifc\"}", false),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(ParsedModel::parse("ISO-10303-21;\nHEADER;\nENDSEC;\n", false).is_err());
    }

    #[test]
    fn test_progress_reaches_completion() {
        let phases = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&phases);
        ParsedModel::parse_with_progress(
            TEST_IFC,
            false,
            Box::new(move |phase: &str, pct: f32| sink.lock().unwrap().push((phase.to_string(), pct))),
        )
        .unwrap();

        let phases = phases.lock().unwrap();
        assert_eq!(phases.last().map(|(p, _)| p.as_str()), Some("Complete"));
        assert!(phases.windows(2).all(|w| w[0].1 <= w[1].1));
    }
}
