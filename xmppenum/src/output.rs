/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Writing generated sources to disk.

use crate::error::{GenerateError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use xmppenum_codegen::EnumGenerator;
use xmppenum_dictionary::EnumDefinition;

/// File written when no output is specified.
pub const DEFAULT_OUTPUT: &str = "generate_enums.g.cs";

/// Extension of per-definition output files.
pub const GENERATED_EXTENSION: &str = "g.cs";

/// Where generated sources are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLayout {
    /// All definitions in one file.
    SingleFile(PathBuf),
    /// One `<Name>.g.cs` file per definition inside a directory.
    PerDefinition(PathBuf),
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::SingleFile(PathBuf::from(DEFAULT_OUTPUT))
    }
}

/// Generates `definitions` and writes them according to `layout`.
///
/// Existing files are overwritten.
///
/// # Returns
/// The paths written, in definition order.
///
/// # Errors
/// Returns an error if the output directory cannot be created or a file
/// cannot be written.
pub fn write_output(
    generator: &EnumGenerator,
    definitions: &[EnumDefinition],
    layout: &OutputLayout,
) -> Result<Vec<PathBuf>> {
    match layout {
        OutputLayout::SingleFile(path) => {
            write_file(path, &generator.generate(definitions))?;
            Ok(vec![path.clone()])
        }
        OutputLayout::PerDefinition(dir) => {
            fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
                path: dir.clone(),
                source,
            })?;

            let mut written = Vec::with_capacity(definitions.len());
            for definition in definitions {
                let path = dir.join(format!("{}.{GENERATED_EXTENSION}", definition.name));
                write_file(&path, &generator.generate_one(definition))?;
                written.push(path);
            }
            Ok(written)
        }
    }
}

/// Writes `contents` to `path` in one pass, replacing any existing file.
///
/// # Errors
/// Returns [`GenerateError::Write`] if the file cannot be created, written
/// or flushed.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        assert_eq!(
            OutputLayout::default(),
            OutputLayout::SingleFile(PathBuf::from("generate_enums.g.cs"))
        );
    }

    #[test]
    fn test_write_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.g.cs");

        write_file(&path, "first contents").unwrap();
        write_file(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.g.cs");

        let err = write_file(&path, "x").unwrap_err();
        match err {
            GenerateError::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
