use serde::{Deserialize, Serialize};

/// Largest secret, in bytes, a generator hands out unless configured otherwise (1 MiB).
pub const DEFAULT_MAX_SECRET_LENGTH: usize = 1 << 20;

/// Limits applied by [`PayloadSecretGenerator`](crate::PayloadSecretGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretConfig {
    /// Upper bound on the number of random bytes per secret.
    pub max_secret_length: usize,
}

impl Default for SecretConfig {
    fn default() -> Self {
        Self {
            max_secret_length: DEFAULT_MAX_SECRET_LENGTH,
        }
    }
}
