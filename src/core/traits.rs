//! Core traits and types for add-on publishing
//!
//! This module defines the registry abstraction the orchestrator publishes
//! through, plus the wire types exchanged with a distribution API.

use crate::core::error::PublishError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

// ============================================================================
// Upload Response
// ============================================================================

/// JSON body returned by the distribution API for an upload request
///
/// A successful upload carries the published `version`; a rejected upload
/// carries a server-reported `error`. Any additional fields the API returns
/// are preserved in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

// ============================================================================
// Registry Trait
// ============================================================================

/// Interface for add-on distribution registries
///
/// Implementations read the package and its manifest locally, issue one
/// authenticated upload request, and interpret the response status.
///
/// # Examples
///
/// ```no_run
/// # use addon_publisher::core::{AddonRegistry, PublishError, UploadResponse};
/// # use async_trait::async_trait;
/// # use std::path::Path;
/// struct NullRegistry;
///
/// #[async_trait]
/// impl AddonRegistry for NullRegistry {
///     fn name(&self) -> &str {
///         "null"
///     }
///
///     async fn upload(
///         &self,
///         _package: &Path,
///         _manifest: &Path,
///         _token: &str,
///     ) -> Result<UploadResponse, PublishError> {
///         Ok(UploadResponse::default())
///     }
/// }
/// ```
#[async_trait]
pub trait AddonRegistry: Send + Sync {
    /// Registry name (e.g. "addons.mozilla.org")
    fn name(&self) -> &str;

    /// Upload the package together with the version declared in its manifest
    ///
    /// # Arguments
    ///
    /// * `package` - Path to the packaged add-on archive
    /// * `manifest` - Path to the JSON manifest declaring the version
    /// * `token` - Signed credential for the `Authorization` header
    async fn upload(
        &self,
        package: &Path,
        manifest: &Path,
        token: &str,
    ) -> Result<UploadResponse, PublishError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_success_body() {
        let body = r#"{"version":"1.2.3"}"#;
        let response: UploadResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.version, Some("1.2.3".to_string()));
        assert!(response.error.is_none());
        assert!(response.extra.is_empty());
    }

    #[test]
    fn test_upload_response_error_body() {
        let body = r#"{"error":"bad file"}"#;
        let response: UploadResponse = serde_json::from_str(body).unwrap();

        assert!(response.version.is_none());
        assert_eq!(response.error, Some("bad file".to_string()));
    }

    #[test]
    fn test_upload_response_preserves_unknown_fields() {
        let body = r#"{"version":"2.0.0","id":"addon@example.org","active":true}"#;
        let response: UploadResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.version, Some("2.0.0".to_string()));
        assert_eq!(
            response.extra.get("id"),
            Some(&serde_json::Value::String("addon@example.org".to_string()))
        );
        assert_eq!(response.extra.get("active"), Some(&serde_json::Value::Bool(true)));
    }

    #[test]
    fn test_upload_response_serialization_skips_absent_fields() {
        let response = UploadResponse {
            version: Some("1.0.0".to_string()),
            error: None,
            extra: HashMap::new(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"version\":\"1.0.0\""));
        assert!(!json.contains("error"));
    }
}
