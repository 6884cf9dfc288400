pub mod credentials;
pub mod token_issuer;

pub use credentials::ApiCredentials;
pub use token_issuer::{Claims, TokenIssuer, TOKEN_TTL_SECS};
