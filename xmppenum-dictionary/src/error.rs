/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Errors raised while loading enum definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur while reading or checking enum definitions.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// A definition file or directory could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A definition file is not valid definition JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Inline JSON text is not valid definition JSON.
    #[error("invalid definition json: {0}")]
    Json(#[from] serde_json::Error),

    /// A definition has an empty type name.
    #[error("enum definition is missing a name")]
    MissingName,

    /// A definition has no members.
    #[error("enum {name} has no values")]
    EmptyValues {
        /// Name of the enum.
        name: String,
    },

    /// A structured member carries neither a wire name nor a member name.
    #[error("member #{index} of enum {enum_name} has neither a name nor a member name")]
    UnnamedMember {
        /// Name of the enum.
        enum_name: String,
        /// Zero-based position of the member.
        index: usize,
    },
}

/// Result type alias using [`DefinitionError`] as the error type.
pub type Result<T> = std::result::Result<T, DefinitionError>;
