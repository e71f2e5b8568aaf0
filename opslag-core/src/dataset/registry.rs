//! Dataset discovery and resolution.
//!
//! Datasets are `<name>.csv` files under a configured root directory. The
//! identifier arrives as a request parameter, so it is attacker-influenced:
//! resolution rejects anything that is not a single plain path component
//! before the storage path is ever built.

use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::config::constants::datasets;
use crate::error::{Error, Result};

/// Lists and resolves per-person dataset files under a storage root.
///
/// Holds no mutable state; a single instance is shared across concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    root: PathBuf,
}

impl DatasetRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate available dataset identifiers, extension stripped, in
    /// lexicographic order.
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(|err| {
            warn!(root = %self.root.display(), %err, "could not read data directory");
            Error::Storage(format!(
                "could not read data directory {}: {err}",
                self.root.display()
            ))
        })?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|err| Error::Storage(err.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(datasets::FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        debug!(count = names.len(), "listed datasets");
        Ok(names)
    }

    /// Resolve an identifier to the raw text of its stored dataset.
    pub async fn resolve(&self, identifier: &str) -> Result<String> {
        validate_identifier(identifier)?;

        let path = self
            .root
            .join(format!("{identifier}.{}", datasets::FILE_EXTENSION));
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                debug!(%identifier, bytes = content.len(), "resolved dataset");
                Ok(content)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(Error::NotFound(format!("unknown dataset '{identifier}'")))
            }
            Err(err) => {
                warn!(%identifier, %err, "dataset unreadable");
                Err(Error::Storage(format!(
                    "could not read dataset '{identifier}': {err}"
                )))
            }
        }
    }
}

/// Reject identifiers that are not a single plain path component.
///
/// Parent-directory segments, absolute prefixes, and separators would let a
/// crafted identifier resolve outside the storage root.
fn validate_identifier(identifier: &str) -> Result<()> {
    let mut components = Path::new(identifier).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(Error::NotFound(format!("unknown dataset '{identifier}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_accepted() {
        assert!(validate_identifier("alice").is_ok());
        assert!(validate_identifier("alice-2024").is_ok());
    }

    #[test]
    fn traversal_identifiers_are_rejected() {
        assert!(validate_identifier("../secret").is_err());
        assert!(validate_identifier("..").is_err());
        assert!(validate_identifier("a/../b").is_err());
        assert!(validate_identifier("nested/alice").is_err());
        assert!(validate_identifier("/etc/passwd").is_err());
        assert!(validate_identifier("").is_err());
    }

    #[test]
    fn rejection_reads_as_not_found() {
        let err = validate_identifier("../secret").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
