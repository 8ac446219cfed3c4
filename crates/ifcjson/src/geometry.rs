// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry index loaded from an OBJ sidecar
//!
//! The sidecar is produced by an external tool (IfcConvert with
//! `--use-element-guids`) and groups faces per element with `g <GlobalId>`
//! markers. Each group's lines become the element's raw geometry payload.

use crate::error::{ConvertError, Result};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Raw geometry payloads keyed by native 22-character GlobalId
#[derive(Clone, Debug, Default)]
pub struct GeometryIndex {
    payloads: FxHashMap<String, String>,
}

impl GeometryIndex {
    /// Parse OBJ text from a reader
    ///
    /// Lines before the first group marker are header lines and dropped.
    /// A group id seen twice keeps its first payload.
    pub fn parse<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut index = Self::default();
        let mut seen_marker = false;
        let mut current: Option<String> = None;
        let mut lines: Vec<String> = Vec::new();

        let mut raw = Vec::new();
        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            // Material names and comments may carry Latin-1 bytes
            let line = String::from_utf8_lossy(strip_line_ending(&raw)).into_owned();
            if let Some(id) = group_marker(&line) {
                if let Some(group) = current.take() {
                    index.insert(group, lines.join("\n"));
                }
                seen_marker = true;
                current = id.map(str::to_string);
                lines.clear();
            } else if seen_marker {
                lines.push(line);
            }
        }

        if let Some(group) = current {
            index.insert(group, lines.join("\n"));
        }

        Ok(index)
    }

    /// Parse OBJ text held in memory
    pub fn from_obj_str(text: &str) -> Self {
        // Reading from a byte slice cannot fail
        Self::parse(text.as_bytes()).unwrap_or_default()
    }

    /// Payload for a native GlobalId
    pub fn get(&self, global_id: &str) -> Option<&str> {
        self.payloads.get(global_id).map(String::as_str)
    }

    pub fn contains(&self, global_id: &str) -> bool {
        self.payloads.contains_key(global_id)
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    fn insert(&mut self, global_id: String, payload: String) {
        if self.payloads.contains_key(&global_id) {
            tracing::debug!(global_id = %global_id, "duplicate OBJ group, keeping first payload");
            return;
        }
        self.payloads.insert(global_id, payload);
    }
}

/// `g <id>` starts a group; a bare `g` starts one without an id
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn group_marker(line: &str) -> Option<Option<&str>> {
    let rest = line.strip_prefix('g')?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.split_whitespace().next())
}

/// Default sidecar location: the model path with an `.obj` extension
pub fn sidecar_path(model_path: &Path) -> PathBuf {
    model_path.with_extension("obj")
}

/// Load the geometry index for a model from `<model>.obj`
///
/// A missing sidecar yields `Ok(None)`; read errors on an existing file are
/// returned.
pub fn load_geometry_index(model_path: &Path) -> Result<Option<GeometryIndex>> {
    load_sidecar(&sidecar_path(model_path))
}

/// Load a geometry index from an explicit sidecar path
pub fn load_sidecar(path: &Path) -> Result<Option<GeometryIndex>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "geometry sidecar not found, converting without geometry");
            return Ok(None);
        }
        Err(err) => return Err(ConvertError::io(path, err)),
    };

    let index =
        GeometryIndex::parse(BufReader::new(file)).map_err(|err| ConvertError::io(path, err))?;
    tracing::debug!(path = %path.display(), groups = index.len(), "loaded geometry sidecar");

    Ok(Some(index))
}
