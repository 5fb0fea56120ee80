//! csl-core - Core library for csl
//!
//! This crate provides the strongly-typed schema and version names, project
//! configuration parsing, and the versioned document envelope shared by the
//! migration engine and the CLI.

pub mod config;
pub mod document;
pub mod error;
pub mod name;
mod newtype_string;

pub use config::Config;
pub use document::VersionedDocument;
pub use error::{CoreError, CoreResult};
pub use name::{SchemaName, SchemaVersion};
