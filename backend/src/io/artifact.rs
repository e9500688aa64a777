//! Artifact writer
//!
//! The module is written to a sibling temporary file and renamed into
//! place, so the output path only ever holds a complete artifact.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::GeneratorError;

/// Write `contents` to `path`, replacing any previous artifact
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), GeneratorError> {
    let staging = staging_path(path);
    let to_error = |source| GeneratorError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    fs::write(&staging, contents).map_err(to_error)?;
    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(to_error(source));
    }

    info!(path = %path.display(), bytes = contents.len(), "Wrote generated module");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_path_is_sibling() {
        let staging = staging_path(Path::new("out/costs.rs"));
        assert_eq!(staging, PathBuf::from("out/costs.rs.tmp"));
    }

    #[test]
    fn test_write_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("costs.rs");
        fs::write(&path, "old").unwrap();

        write_artifact(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_missing_directory_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("costs.rs");

        let err = write_artifact(&path, "x").unwrap_err();
        assert!(matches!(err, GeneratorError::OutputWrite { .. }));
        assert!(!path.exists());
    }
}
