pub mod core;
pub mod orchestration;
pub mod registries;
pub mod security;
pub mod validation;

pub use crate::core::*;
pub use orchestration::{AddonPublisher, PublishInputs, PublishReport};
pub use registries::{AmoRegistry, AMO_ENDPOINT};
pub use security::{ApiCredentials, TokenIssuer};
pub use validation::{ManifestRecord, ManifestValidator};
