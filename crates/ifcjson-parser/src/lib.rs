// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC.JSON Parser - STEP loader for the converter
//!
//! Loads IFC (STEP physical file) content into a model implementing the
//! traits from `ifcjson-model`.
//!
//! # Features
//!
//! - **Tokenization** using `nom` combinators
//! - **SIMD-accelerated scanning** using `memchr`
//! - **Lazy entity decoding** with an `Arc`-based cache
//! - **File order preserved** for deterministic traversal
//!
//! # Example
//!
//! ```ignore
//! use ifcjson_parser::StepParser;
//! use ifcjson_model::IfcParser;
//!
//! let model = StepParser::new().parse(ifc_content)?;
//! println!("{} entities", model.resolver().entity_count());
//! ```

mod model;
mod resolver;
mod scanner;
mod strings;
mod tokenizer;

pub use model::ParsedModel;
pub use resolver::ResolverImpl;
pub use scanner::{parse_header, EntityIndex, EntityScanner, HeaderInfo};
pub use strings::decode_step_string;
pub use tokenizer::{parse_entity, Token};

use ifcjson_model::{IfcModel, IfcParser, ProgressCallback, Result};
use std::sync::Arc;

/// Main STEP/IFC parser implementing `IfcParser` trait
#[derive(Default)]
pub struct StepParser {
    /// Decode every entity up front instead of on first access
    pub eager: bool,
}

impl StepParser {
    /// Create a new parser with default settings
    pub fn new() -> Self {
        Self { eager: false }
    }

    /// Set whether to decode all entities while loading
    pub fn with_eager_decoding(mut self, enabled: bool) -> Self {
        self.eager = enabled;
        self
    }
}

impl IfcParser for StepParser {
    fn parse(&self, content: &str) -> Result<Arc<dyn IfcModel>> {
        ParsedModel::parse(content, self.eager).map(|m| Arc::new(m) as Arc<dyn IfcModel>)
    }

    fn parse_with_progress(
        &self,
        content: &str,
        on_progress: ProgressCallback,
    ) -> Result<Arc<dyn IfcModel>> {
        ParsedModel::parse_with_progress(content, self.eager, on_progress)
            .map(|m| Arc::new(m) as Arc<dyn IfcModel>)
    }
}

/// Quick parse function for simple use cases
pub fn parse(content: &str) -> Result<Arc<dyn IfcModel>> {
    StepParser::new().parse(content)
}
