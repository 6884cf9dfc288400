//! API credential pair with memory-safe handling and masking capabilities
//!
//! This module wraps the key/secret pair used to authenticate against the
//! distribution API, using the `secrecy` crate to prevent accidental secret
//! exposure in logs or failure reports.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

/// Credential pair for the distribution API
///
/// The `key` is a public issuer identity; the `secret` is the HMAC signing
/// key and is never rendered unmasked.
///
/// # Examples
///
/// ```
/// use addon_publisher::security::ApiCredentials;
///
/// let credentials = ApiCredentials::new("user:12345:67", "not-so-secret");
/// assert_eq!(credentials.key(), "user:12345:67");
/// assert_eq!(credentials.masked_key(), "use...:67");
/// ```
pub struct ApiCredentials {
    key: String,
    secret: SecretString,
}

impl ApiCredentials {
    /// Create a new credential pair
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        let secret: String = secret.into();
        Self {
            key: key.into(),
            secret: SecretString::new(secret.into()),
        }
    }

    /// The issuer identity
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The signing secret
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// The key masked for safe logging
    ///
    /// Shows only the first 3 and last 3 characters for identification.
    /// Values shorter than 10 characters are fully masked as "****".
    pub fn masked_key(&self) -> String {
        Self::mask(&self.key)
    }

    /// Replace any occurrence of the secret in a string with a masked form
    ///
    /// Failure messages may embed upstream error text of arbitrary origin;
    /// this scrubs the signing secret out of them before they reach the
    /// pipeline log.
    ///
    /// # Examples
    ///
    /// ```
    /// use addon_publisher::security::ApiCredentials;
    ///
    /// let credentials = ApiCredentials::new("key", "super-secret-value");
    /// let scrubbed = credentials.mask_secret_in("boom: super-secret-value rejected");
    /// assert!(!scrubbed.contains("super-secret-value"));
    /// ```
    pub fn mask_secret_in(&self, text: &str) -> String {
        let secret = self.secret.expose_secret();
        if secret.is_empty() {
            return text.to_string();
        }

        let escaped = regex::escape(secret);
        match Regex::new(&escaped) {
            Ok(pattern) => pattern.replace_all(text, Self::mask(secret).as_str()).to_string(),
            Err(_) => text.to_string(),
        }
    }

    fn mask(value: &str) -> String {
        if value.is_empty() || value.len() < 10 {
            return "****".to_string();
        }

        let prefix = &value[..3];
        let suffix = &value[value.len() - 3..];
        format!("{}...{}", prefix, suffix)
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("key", &self.masked_key())
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
