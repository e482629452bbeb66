/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for a generation run.

use std::path::PathBuf;
use thiserror::Error;
use xmppenum_dictionary::DefinitionError;

/// Result type alias using [`GenerateError`] as the error type.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Top-level error type for a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Definitions could not be loaded.
    #[error("definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// The generated source could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
