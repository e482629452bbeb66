/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! JSON definition loading.
//!
//! A definition file holds either a single [`EnumDefinition`] object or an
//! array of them. A directory is loaded by reading every `*.json` file in it,
//! in sorted path order.

use crate::error::{DefinitionError, Result};
use crate::schema::EnumDefinition;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Deserialize)]
#[serde(untagged)]
enum DefinitionFile {
    Many(Vec<EnumDefinition>),
    One(EnumDefinition),
}

impl DefinitionFile {
    fn into_vec(self) -> Vec<EnumDefinition> {
        match self {
            Self::Many(defs) => defs,
            Self::One(def) => vec![def],
        }
    }
}

/// Parses and validates definitions from JSON text.
///
/// # Errors
/// Returns an error if the text is not definition JSON or a definition
/// fails validation.
pub fn from_json_str(json: &str) -> Result<Vec<EnumDefinition>> {
    let defs = serde_json::from_str::<DefinitionFile>(json)?.into_vec();
    validate_all(&defs)?;
    Ok(defs)
}

/// Loads definitions from a JSON file or a directory of JSON files.
///
/// # Arguments
/// * `path` - A `.json` file, or a directory containing them
///
/// # Errors
/// Returns an error if a file cannot be read or parsed, or a definition
/// fails validation.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<EnumDefinition>> {
    let path = path.as_ref();
    let defs = if path.is_dir() {
        load_dir(path)?
    } else {
        load_file(path)?
    };

    info!(
        "Loaded {} enum definition(s) from {}",
        defs.len(),
        path.display()
    );
    Ok(defs)
}

fn load_dir(dir: &Path) -> Result<Vec<EnumDefinition>> {
    let io_err = |source| DefinitionError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    let mut defs = Vec::new();
    for file in &files {
        defs.extend(load_file(file)?);
    }
    Ok(defs)
}

fn load_file(path: &Path) -> Result<Vec<EnumDefinition>> {
    debug!("Reading definitions from {}", path.display());

    let text = fs::read_to_string(path).map_err(|source| DefinitionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let defs = serde_json::from_str::<DefinitionFile>(&text)
        .map_err(|source| DefinitionError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .into_vec();

    validate_all(&defs)?;
    Ok(defs)
}

fn validate_all(defs: &[EnumDefinition]) -> Result<()> {
    defs.iter().try_for_each(EnumDefinition::validate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../data")
    }

    #[test]
    fn test_from_json_str_single() {
        let defs = from_json_str(
            r#"{"name": "Color", "values": ["light-red", "dark-blue"]}"#,
        )
        .unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "Color");
        assert!(defs[0].namespace().is_none());
        assert_eq!(defs[0].values.len(), 2);
    }

    #[test]
    fn test_from_json_str_array() {
        let defs = from_json_str(
            r#"[
                {"name": "A", "namespace": "X.Y", "values": ["one"]},
                {"name": "B", "values": ["two", "three"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].namespace(), Some("X.Y"));
        assert_eq!(defs[1].name, "B");
    }

    #[test]
    fn test_from_json_str_rejects_empty_values() {
        let err = from_json_str(r#"{"name": "Color", "values": []}"#).unwrap_err();
        assert!(matches!(err, DefinitionError::EmptyValues { .. }));
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        let err = from_json_str("{not json").unwrap_err();
        assert!(matches!(err, DefinitionError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_path(data_dir().join("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, DefinitionError::Io { .. }));
    }

    #[test]
    fn test_load_file_parse_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("broken.json");
        fs::write(&file, "[1, 2, 3]").unwrap();

        let err = load_path(&file).unwrap_err();
        match err {
            DefinitionError::Parse { path, .. } => assert_eq!(path, file),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_dir_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("b.json"),
            r#"{"name": "Second", "values": ["b"]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("a.json"),
            r#"{"name": "First", "values": ["a"]}"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let defs = load_path(dir.path()).unwrap();
        let names: Vec<_> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_load_shipped_data() {
        let defs = load_path(data_dir()).unwrap();
        let names: Vec<_> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "FieldType",
                "FormType",
                "MessageType",
                "PresenceType",
                "StanzaErrorType",
            ]
        );

        let presence = &defs[3];
        assert_eq!(presence.values[1].wire_name(), None);
        assert_eq!(presence.values[1].member_name(), Some("Available"));
    }
}
