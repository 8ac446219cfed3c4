// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC.JSON document envelope and writer

use crate::error::Result;
use ifcjson_model::ModelMetadata;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// Envelope format version written to `version`
pub const FORMAT_VERSION: &str = "0.0.1";

/// Top-level IFC.JSON document
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IfcJsonDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub schema_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originating_system: Option<String>,
    pub preprocessor_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<String>,
    pub data: Vec<Value>,
}

impl IfcJsonDocument {
    /// Wrap converted objects with header information from the model
    pub fn new(metadata: &ModelMetadata, data: Vec<Value>) -> Self {
        Self {
            kind: "ifcJSON".to_string(),
            version: FORMAT_VERSION.to_string(),
            schema_identifier: metadata.schema_version.clone(),
            originating_system: metadata.originating_system.clone(),
            preprocessor_version: concat!("ifcjson ", env!("CARGO_PKG_VERSION")).to_string(),
            time_stamp: metadata.timestamp.clone(),
            data,
        }
    }
}

/// How the output is laid out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputStyle {
    /// Indented JSON instead of a single line
    pub pretty: bool,
    /// Write only the `data` array without the envelope
    pub bare: bool,
}

/// Serialize a document to a writer
pub fn write_document<W: Write>(
    mut writer: W,
    document: &IfcJsonDocument,
    style: OutputStyle,
) -> Result<()> {
    match (style.bare, style.pretty) {
        (true, true) => serde_json::to_writer_pretty(&mut writer, &document.data)?,
        (true, false) => serde_json::to_writer(&mut writer, &document.data)?,
        (false, true) => serde_json::to_writer_pretty(&mut writer, document)?,
        (false, false) => serde_json::to_writer(&mut writer, document)?,
    }
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata() -> ModelMetadata {
        ModelMetadata {
            schema_version: "IFC4".to_string(),
            originating_system: Some("Modeler 7".to_string()),
            timestamp: Some("2024-01-01T00:00:00".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_envelope_keys_in_order() {
        let document = IfcJsonDocument::new(&metadata(), vec![json!({"type": "IfcWall"})]);
        let value = serde_json::to_value(&document).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

        assert_eq!(
            keys,
            vec![
                "type",
                "version",
                "schemaIdentifier",
                "originatingSystem",
                "preprocessorVersion",
                "timeStamp",
                "data"
            ]
        );
        assert_eq!(value["type"], "ifcJSON");
        assert_eq!(value["schemaIdentifier"], "IFC4");
    }

    #[test]
    fn test_missing_header_fields_skipped() {
        let document = IfcJsonDocument::new(&ModelMetadata::default(), Vec::new());
        let value = serde_json::to_value(&document).unwrap();
        assert!(value.get("originatingSystem").is_none());
        assert!(value.get("timeStamp").is_none());
    }

    #[test]
    fn test_bare_compact_output() {
        let document = IfcJsonDocument::new(&metadata(), vec![json!({"type": "IfcWall"})]);
        let mut out = Vec::new();
        write_document(&mut out, &document, OutputStyle { pretty: false, bare: true }).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[{\"type\":\"IfcWall\"}]\n");
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let document = IfcJsonDocument::new(&metadata(), vec![json!({"type": "IfcWall"})]);
        let mut out = Vec::new();
        write_document(&mut out, &document, OutputStyle { pretty: true, bare: false }).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\n'));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["data"][0]["type"], "IfcWall");
    }
}
