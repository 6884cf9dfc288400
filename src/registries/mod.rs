pub mod amo;

pub use amo::{AmoRegistry, AMO_ENDPOINT};
