// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fast entity scanner using SIMD-accelerated byte searching
//!
//! Scans IFC files to discover entities without full parsing.

use crate::tokenizer::{parse_arguments, Token};
use memchr::memchr;
use rustc_hash::FxHashMap;

/// Entity index: byte ranges by ID plus the order entities appear in
#[derive(Debug, Default)]
pub struct EntityIndex {
    ranges: FxHashMap<u32, (usize, usize)>,
    order: Vec<u32>,
}

impl EntityIndex {
    /// Byte range of an entity definition
    pub fn get(&self, id: u32) -> Option<(usize, usize)> {
        self.ranges.get(&id).copied()
    }

    /// Entity IDs in file order
    pub fn order(&self) -> &[u32] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn insert(&mut self, id: u32, range: (usize, usize)) {
        // First definition wins
        if let std::collections::hash_map::Entry::Vacant(slot) = self.ranges.entry(id) {
            slot.insert(range);
            self.order.push(id);
        }
    }
}

/// Fast entity scanner for IFC files
///
/// Uses memchr for SIMD-accelerated scanning to quickly find entity
/// boundaries without full parsing.
pub struct EntityScanner<'a> {
    content: &'a str,
    pos: usize,
}

impl<'a> EntityScanner<'a> {
    /// Create a new scanner for the given content
    pub fn new(content: &'a str) -> Self {
        // Skip header section
        let pos = content.find("DATA;").map(|p| p + 5).unwrap_or(0);

        Self { content, pos }
    }

    /// Scan to find the next entity
    ///
    /// Returns (id, type_name, start_byte, end_byte)
    pub fn next_entity(&mut self) -> Option<(u32, &'a str, usize, usize)> {
        let bytes = self.content.as_bytes();

        while self.pos < bytes.len() {
            let hash_pos = memchr(b'#', &bytes[self.pos..])?;
            self.pos += hash_pos;

            // Entity definitions start a line (or follow the previous `;`);
            // any other `#` is a reference inside attributes
            let is_entity_start = self.pos == 0
                || matches!(bytes[self.pos - 1], b'\n' | b'\r' | b';' | b' ' | b'\t');

            if !is_entity_start {
                self.pos += 1;
                continue;
            }

            let start = self.pos;

            self.pos += 1;
            let id_start = self.pos;
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
            if self.pos == id_start {
                continue;
            }
            let id: u32 = match self.content[id_start..self.pos].parse() {
                Ok(id) => id,
                Err(_) => continue,
            };

            while self.pos < bytes.len() && matches!(bytes[self.pos], b' ' | b'\t') {
                self.pos += 1;
            }
            if self.pos >= bytes.len() || bytes[self.pos] != b'=' {
                continue;
            }
            self.pos += 1;

            while self.pos < bytes.len() && matches!(bytes[self.pos], b' ' | b'\t') {
                self.pos += 1;
            }

            let type_start = self.pos;
            while self.pos < bytes.len()
                && (bytes[self.pos].is_ascii_alphanumeric() || bytes[self.pos] == b'_')
            {
                self.pos += 1;
            }

            // Complex instances `#1=(IFCA()IFCB());` have no leading keyword
            if self.pos == type_start {
                self.find_entity_end()?;
                continue;
            }

            let type_name = &self.content[type_start..self.pos];
            let end = self.find_entity_end()?;

            return Some((id, type_name, start, end));
        }

        None
    }

    /// Find the end of an entity (semicolon), handling quoted strings
    fn find_entity_end(&mut self) -> Option<usize> {
        let bytes = self.content.as_bytes();
        let mut in_string = false;

        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'\'' => {
                    if in_string && self.pos + 1 < bytes.len() && bytes[self.pos + 1] == b'\'' {
                        self.pos += 2;
                        continue;
                    }
                    in_string = !in_string;
                }
                b';' if !in_string => {
                    self.pos += 1;
                    return Some(self.pos);
                }
                _ => {}
            }
            self.pos += 1;
        }

        None
    }

    /// Build an index of all entities (ID -> byte offsets, file order)
    pub fn build_index(content: &'a str) -> EntityIndex {
        let mut scanner = Self::new(content);
        let mut index = EntityIndex::default();

        while let Some((id, _, start, end)) = scanner.next_entity() {
            index.insert(id, (start, end));
        }

        index
    }
}

/// Header information extracted from IFC file
#[derive(Clone, Debug, Default)]
pub struct HeaderInfo {
    pub schema_version: String,
    pub file_description: Option<String>,
    pub file_name: Option<String>,
    pub timestamp: Option<String>,
    pub author: Option<String>,
    pub organization: Option<String>,
    pub preprocessor_version: Option<String>,
    pub originating_system: Option<String>,
}

/// Parse the header section to extract metadata
pub fn parse_header(content: &str) -> HeaderInfo {
    let mut info = HeaderInfo::default();

    let header_start = content.find("HEADER;").unwrap_or(0);
    let header_end = content[header_start..]
        .find("ENDSEC;")
        .map(|p| header_start + p)
        .unwrap_or(content.len());
    let header = &content[header_start..header_end];

    // FILE_DESCRIPTION(description_list, implementation_level)
    if let Some(args) = header_record(header, "FILE_DESCRIPTION") {
        info.file_description = args.first().and_then(first_text);
    }

    // FILE_NAME(name, time_stamp, author, organization, preprocessor, originating_system, authorization)
    if let Some(args) = header_record(header, "FILE_NAME") {
        info.file_name = args.first().and_then(non_empty_text);
        info.timestamp = args.get(1).and_then(non_empty_text);
        info.author = args.get(2).and_then(first_text);
        info.organization = args.get(3).and_then(first_text);
        info.preprocessor_version = args.get(4).and_then(non_empty_text);
        info.originating_system = args.get(5).and_then(non_empty_text);
    }

    // FILE_SCHEMA(('IFC2X3'))
    if let Some(args) = header_record(header, "FILE_SCHEMA") {
        if let Some(schema) = args.first().and_then(first_text) {
            info.schema_version = schema;
        }
    }

    info
}

fn header_record<'a>(header: &'a str, keyword: &str) -> Option<Vec<Token<'a>>> {
    let at = header.find(keyword)?;
    parse_arguments(&header[at + keyword.len()..])
}

fn non_empty_text(token: &Token<'_>) -> Option<String> {
    token.as_text().filter(|s| !s.is_empty())
}

/// A string, or the first non-empty string of a list
fn first_text(token: &Token<'_>) -> Option<String> {
    match token {
        Token::List(items) => items.iter().find_map(non_empty_text),
        other => non_empty_text(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_IFC: &str = r#"ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [CoordinationView]'),'2;1');
FILE_NAME('test.ifc','2024-01-01T00:00:00',('Author'),('Org'),'Preprocessor','App','');
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#1=IFCPROJECT('guid',$,'Project; with semicolon',$,$,$,$,$,#2);
#3=IFCSIUNIT(*,.LENGTHUNIT.,.MILLI.,.METRE.);
#2=IFCUNITASSIGNMENT((#3));
#4=IFCWALL('guid',$,'Wall 1',$,$,#5,#6,$);
#5=(IFCNAMEDUNIT(*,.LENGTHUNIT.)IFCSIUNIT(.MILLI.,.METRE.));
ENDSEC;
END-ISO-10303-21;
"#;

    #[test]
    fn test_scanner_finds_entities() {
        let mut scanner = EntityScanner::new(TEST_IFC);
        let mut entities = Vec::new();

        while let Some((id, type_name, _, _)) = scanner.next_entity() {
            entities.push((id, type_name.to_string()));
        }

        assert_eq!(entities.len(), 4);
        assert_eq!(entities[0], (1, "IFCPROJECT".to_string()));
        assert_eq!(entities[3], (4, "IFCWALL".to_string()));
    }

    #[test]
    fn test_build_index_keeps_file_order() {
        let index = EntityScanner::build_index(TEST_IFC);
        assert_eq!(index.len(), 4);
        assert_eq!(index.order(), &[1, 3, 2, 4]);
        assert!(index.get(5).is_none());
    }

    #[test]
    fn test_parse_header() {
        let info = parse_header(TEST_IFC);
        assert_eq!(info.schema_version, "IFC2X3");
        assert_eq!(info.file_name.as_deref(), Some("test.ifc"));
        assert_eq!(info.timestamp.as_deref(), Some("2024-01-01T00:00:00"));
        assert_eq!(info.author.as_deref(), Some("Author"));
        assert_eq!(info.organization.as_deref(), Some("Org"));
        assert_eq!(info.preprocessor_version.as_deref(), Some("Preprocessor"));
        assert_eq!(info.originating_system.as_deref(), Some("App"));
        assert_eq!(
            info.file_description.as_deref(),
            Some("ViewDefinition [CoordinationView]")
        );
    }

    #[test]
    fn test_parse_header_missing_fields() {
        let info = parse_header("ISO-10303-21;\nHEADER;\nENDSEC;\nDATA;\nENDSEC;\n");
        assert!(info.schema_version.is_empty());
        assert!(info.file_name.is_none());
    }
}
