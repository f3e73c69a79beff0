//! Cryptographically random, lowercase hex secrets used as unique markers in
//! vulnerability-detection payloads.

pub mod config;
pub mod encoding;
pub mod error;
pub mod generator;
pub mod module;
pub mod rng;

pub use config::{SecretConfig, DEFAULT_MAX_SECRET_LENGTH};
pub use encoding::encode_lower_hex;
pub use error::{Error, Result};
pub use generator::PayloadSecretGenerator;
pub use module::PayloadSecretModule;
pub use rng::SharedRng;
