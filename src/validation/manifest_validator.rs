//! Manifest Validator - Reads the add-on manifest and extracts its version
//!
//! Only the `version` field is consumed; the manifest is otherwise treated
//! as an opaque JSON document. The optional `name` field is passed through
//! for diagnostics and is never validated.
//!
//! # Example
//!
//! ```no_run
//! use addon_publisher::validation::ManifestValidator;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), addon_publisher::core::PublishError> {
//! let validator = ManifestValidator::new();
//! let record = validator.read_version(Path::new("manifest.json")).await?;
//! println!("uploading version {}", record.version);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::core::error::PublishError;

/// Version metadata extracted from a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Declared version, sent verbatim in the upload request
    pub version: String,
    /// Declared add-on name, if any
    pub name: Option<String>,
}

/// Reader for JSON add-on manifests
pub struct ManifestValidator;

impl Default for ManifestValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestValidator {
    /// Create a new ManifestValidator
    pub fn new() -> Self {
        Self
    }

    /// Read a manifest file and extract the declared version
    ///
    /// Fails with [`PublishError::Manifest`] if the file is missing or
    /// unreadable, is not valid JSON, or has no string `version` field.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the manifest file
    pub async fn read_version(&self, path: &Path) -> Result<ManifestRecord, PublishError> {
        let manifest_error = |message: String| PublishError::Manifest {
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| manifest_error(e.to_string()))?;

        let parsed: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| manifest_error(e.to_string()))?;

        let version = parsed
            .get("version")
            .and_then(|v| v.as_str())
            .ok_or_else(|| manifest_error("missing required field: version".to_string()))?;

        Ok(ManifestRecord {
            version: version.to_string(),
            name: parsed
                .get("name")
                .and_then(|v| v.as_str())
                .map(String::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn write_manifest(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("manifest.json");
        fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_reads_version_field() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_manifest(&temp_dir, r#"{"version": "1.2.3"}"#).await;

        let record = ManifestValidator::new().read_version(&path).await.unwrap();
        assert_eq!(record.version, "1.2.3");
        assert_eq!(record.name, None);
    }

    #[tokio::test]
    async fn test_passes_name_through() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_manifest(
            &temp_dir,
            r#"{"name": "My Extension", "version": "0.9.0", "manifest_version": 2}"#,
        )
        .await;

        let record = ManifestValidator::new().read_version(&path).await.unwrap();
        assert_eq!(record.version, "0.9.0");
        assert_eq!(record.name, Some("My Extension".to_string()));
    }

    #[tokio::test]
    async fn test_missing_file_is_manifest_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does-not-exist.json");

        let error = ManifestValidator::new()
            .read_version(&path)
            .await
            .unwrap_err();
        assert_eq!(error.code(), "MANIFEST_ERROR");
    }

    #[tokio::test]
    async fn test_invalid_json_is_manifest_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_manifest(&temp_dir, "not json at all").await;

        let error = ManifestValidator::new()
            .read_version(&path)
            .await
            .unwrap_err();
        assert_eq!(error.code(), "MANIFEST_ERROR");
    }

    #[tokio::test]
    async fn test_missing_version_is_manifest_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_manifest(&temp_dir, r#"{"name": "No Version Here"}"#).await;

        let error = ManifestValidator::new()
            .read_version(&path)
            .await
            .unwrap_err();
        assert_eq!(error.code(), "MANIFEST_ERROR");
        assert!(error.to_string().contains("version"));
    }

    #[tokio::test]
    async fn test_non_string_version_is_manifest_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_manifest(&temp_dir, r#"{"version": 123}"#).await;

        let error = ManifestValidator::new()
            .read_version(&path)
            .await
            .unwrap_err();
        assert_eq!(error.code(), "MANIFEST_ERROR");
    }
}
