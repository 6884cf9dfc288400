//! Short-lived JWT issuance for distribution API authentication
//!
//! The distribution API authenticates each request with a compact JWS token
//! signed with the caller's API secret. Tokens are issued fresh per run,
//! valid for one minute, and never cached.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::PublishError;
use crate::security::credentials::ApiCredentials;

/// Token lifetime in seconds
pub const TOKEN_TTL_SECS: i64 = 60;

/// JWT claims for the distribution API
///
/// `jti` carries no uniqueness guarantee; the API only requires it to be
/// present and random-looking.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issuer of short-lived signed tokens
pub struct TokenIssuer;

impl TokenIssuer {
    /// Issue a signed token for the given credentials
    ///
    /// Claims are `iss` = API key, `jti` = random UUID, `iat` = now,
    /// `exp` = now + [`TOKEN_TTL_SECS`]. Signed with HMAC-SHA256 keyed by
    /// the API secret. An empty secret still yields a syntactically valid
    /// token; whether it verifies is the server's concern.
    ///
    /// # Examples
    ///
    /// ```
    /// use addon_publisher::security::{ApiCredentials, TokenIssuer};
    ///
    /// let credentials = ApiCredentials::new("user:12345:67", "hmac-secret");
    /// let token = TokenIssuer::issue(&credentials).unwrap();
    /// assert_eq!(token.split('.').count(), 3);
    /// ```
    pub fn issue(credentials: &ApiCredentials) -> Result<String, PublishError> {
        let issued_at = Utc::now().timestamp();
        let claims = Claims {
            iss: credentials.key().to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
        };

        let encoding_key =
            EncodingKey::from_secret(credentials.secret().expose_secret().as_bytes());

        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
            PublishError::Signing {
                message: e.to_string(),
            }
        })
    }
}
