/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Xmppenum Dictionary
//!
//! Enum definitions for the XMPP enum generator.
//!
//! This crate provides:
//! - **Schema definitions**: Enum and member definitions
//! - **Built-in catalog**: The stream error conditions generated by default
//! - **Definition loading**: JSON files and directories of JSON files

pub mod catalog;
pub mod error;
pub mod loader;
pub mod schema;

pub use catalog::{builtin_definitions, stream_error_condition};
pub use error::{DefinitionError, Result};
pub use loader::{from_json_str, load_path};
pub use schema::{EnumDefinition, EnumMember, MemberDef};
