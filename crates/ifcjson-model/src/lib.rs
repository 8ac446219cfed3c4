// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC.JSON Model - Trait definitions and shared types for IFC conversion
//!
//! This crate provides the abstractions the converter works against. Loader
//! backends implement the traits; the converter only ever sees a model
//! through them.
//!
//! # Architecture
//!
//! - [`IfcParser`] - Entry point for loading IFC content
//! - [`IfcModel`] - Read-only access to a loaded model
//! - [`EntityResolver`] - Entity lookup in file order
//! - [`Schema`] - Attribute names and canonical class names per IFC release
//! - [`guid`] - Compressed IFC GlobalId codec
//!
//! # Example
//!
//! ```ignore
//! use ifcjson_model::{IfcModel, Schema};
//!
//! let model = load_model(content)?;
//! let schema = Schema::for_version(model.metadata().schema());
//! for id in model.resolver().entity_ids() {
//!     let entity = model.resolver().get(id).unwrap();
//!     println!("{}", schema.class_name(&entity.type_name));
//! }
//! ```

pub mod error;
pub mod guid;
pub mod resolver;
pub mod schema;
pub mod traits;
pub mod types;

pub use error::*;
pub use resolver::*;
pub use schema::{EntityLayout, Schema, SchemaVersion};
pub use traits::*;
pub use types::*;
