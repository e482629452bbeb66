/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Xmppenum Codegen
//!
//! Source generation for XMPP protocol enums.
//!
//! This crate renders enum definitions as C# enum declarations annotated with
//! their wire-format tokens, so the protocol library can map identifiers back
//! to the strings that appear on the wire.
//!
//! ## Usage
//!
//! ```rust
//! use xmppenum_codegen::EnumGenerator;
//! use xmppenum_dictionary::stream_error_condition;
//!
//! let code = EnumGenerator::new().generate(&[stream_error_condition()]);
//! assert!(code.contains("public enum StreamErrorCondition"));
//! ```

pub mod generator;
pub mod naming;
pub mod writer;

pub use generator::{EnumGenerator, GeneratorConfig, NamespaceStyle};
pub use naming::{kebab_to_pascal, member_identifier};
pub use writer::IndentedBuffer;
