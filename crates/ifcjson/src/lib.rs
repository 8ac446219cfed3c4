// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC.JSON - IFC (STEP) to IFC.JSON-5a conversion
//!
//! Turns the cyclic, reference-heavy entity graph of an IFC model into a flat
//! list of JSON objects:
//!
//! - **Identified entities** (those with a GlobalId) are emitted once and
//!   referenced elsewhere as `{type, ref}`
//! - **Anonymous entities** are inlined where they are used
//! - **Geometry** comes from an OBJ sidecar and is attached as
//!   `ShapeRepresentation` entries appended to the list
//!
//! # Example
//!
//! ```ignore
//! use ifcjson::{convert, ConvertOptions};
//!
//! let model = ifcjson_parser::parse(ifc_content)?;
//! let objects = convert(model.as_ref(), None, &ConvertOptions::default());
//! println!("{}", serde_json::to_string_pretty(&objects)?);
//! ```

pub mod document;
pub mod error;
pub mod geometry;
pub mod naming;
pub mod options;
pub mod registry;
pub mod side_table;
pub mod walker;

pub use document::{write_document, IfcJsonDocument, OutputStyle};
pub use error::{ConvertError, Result};
pub use geometry::{load_geometry_index, load_sidecar, sidecar_path, GeometryIndex};
pub use options::{ConvertOptions, IdStrategy, DEFAULT_MAX_DEPTH};
pub use registry::IdentityRegistry;
pub use side_table::{DerivedGuids, GuidGenerator, RandomGuids, RepresentationTable};
pub use walker::{Conversion, ConversionSession, ConversionStats};

use ifcjson_model::IfcModel;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// Convert a loaded model into IFC.JSON-5a objects
pub fn convert(
    model: &dyn IfcModel,
    geometry: Option<&GeometryIndex>,
    options: &ConvertOptions,
) -> Vec<Value> {
    ConversionSession::new(model, geometry, options).run().objects
}

/// Read and parse an IFC file
///
/// Bytes that are not valid UTF-8 are replaced; STEP files are ASCII with
/// escapes, so this only affects broken exports.
pub fn load_model(path: &Path) -> Result<Arc<dyn IfcModel>> {
    let bytes = std::fs::read(path).map_err(|err| ConvertError::io(path, err))?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(ifcjson_parser::parse(&content)?)
}

/// Load a model and its geometry sidecar, convert, and wrap in a document
pub fn convert_file(
    path: &Path,
    options: &ConvertOptions,
) -> Result<(IfcJsonDocument, ConversionStats)> {
    let model = load_model(path)?;
    tracing::debug!(
        path = %path.display(),
        schema = %model.metadata().schema_version,
        entities = model.resolver().entity_count(),
        "model loaded"
    );

    let geometry = if options.include_geometry {
        match &options.sidecar {
            Some(sidecar) => load_sidecar(sidecar)?,
            None => load_geometry_index(path)?,
        }
    } else {
        None
    };

    let conversion = ConversionSession::new(model.as_ref(), geometry.as_ref(), options).run();
    let document = IfcJsonDocument::new(model.metadata(), conversion.objects);

    Ok((document, conversion.stats))
}
