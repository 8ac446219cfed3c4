// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core traits for IFC loading

use crate::{EntityResolver, ModelMetadata, Result};
use std::sync::Arc;

/// Progress callback type for loading operations
pub type ProgressCallback = Box<dyn Fn(&str, f32) + Send>;

/// Loading interface - entry point for turning IFC content into a model
///
/// # Example
///
/// ```ignore
/// use ifcjson_model::{IfcParser, IfcModel};
///
/// let parser: Box<dyn IfcParser> = get_parser();
/// let model = parser.parse(ifc_content)?;
/// println!("Schema: {}", model.metadata().schema_version);
/// ```
pub trait IfcParser: Send + Sync {
    /// Parse IFC content and return a model
    fn parse(&self, content: &str) -> Result<Arc<dyn IfcModel>>;

    /// Parse IFC content with progress reporting
    ///
    /// `on_progress` receives (phase_name, percent_complete).
    fn parse_with_progress(
        &self,
        content: &str,
        on_progress: ProgressCallback,
    ) -> Result<Arc<dyn IfcModel>>;
}

/// Read-only access to a loaded IFC model
///
/// The model is `Send + Sync` so a loaded model can be handed across threads
/// by a caller, even though a single conversion runs on one thread.
pub trait IfcModel: Send + Sync {
    /// Get entity resolver for entity lookups in file order
    fn resolver(&self) -> &dyn EntityResolver;

    /// Get file metadata (schema version, originating system, etc.)
    fn metadata(&self) -> &ModelMetadata;
}
