// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion settings

use std::path::PathBuf;

/// Default bound on entity nesting during traversal
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How identifiers for synthesized representation entries are minted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Fresh random UUID v4 per entry
    #[default]
    Random,
    /// UUID v5 derived from the owning entity's GlobalId
    Derived,
}

/// Options for one conversion run
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Read the OBJ sidecar and substitute representations
    pub include_geometry: bool,
    /// Explicit sidecar path instead of `<model>.obj`
    pub sidecar: Option<PathBuf>,
    /// Maximum entity nesting depth
    pub max_depth: usize,
    /// Identifier minting for representation entries
    pub id_strategy: IdStrategy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            include_geometry: true,
            sidecar: None,
            max_depth: DEFAULT_MAX_DEPTH,
            id_strategy: IdStrategy::Random,
        }
    }
}

impl ConvertOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether geometry is read from the sidecar
    pub fn with_geometry(mut self, enabled: bool) -> Self {
        self.include_geometry = enabled;
        self
    }

    /// Read geometry from an explicit sidecar path
    pub fn with_sidecar(mut self, path: impl Into<PathBuf>) -> Self {
        self.sidecar = Some(path.into());
        self
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the identifier strategy for representation entries
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }
}
