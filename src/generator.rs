use rand::rngs::StdRng;
use rand::{CryptoRng, RngCore};

use crate::{
    config::SecretConfig,
    encoding::encode_lower_hex,
    error::{Error, Result},
    rng::SharedRng,
};

/// Generates secrets used as unique markers in exploit payloads.
///
/// The random source is injected so tests can substitute a seeded generator.
/// Clones share that source.
#[derive(Debug)]
pub struct PayloadSecretGenerator<R = StdRng> {
    rng: SharedRng<R>,
    config: SecretConfig,
}

impl<R> Clone for PayloadSecretGenerator<R> {
    fn clone(&self) -> Self {
        Self {
            rng: self.rng.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R: RngCore + CryptoRng> PayloadSecretGenerator<R> {
    pub fn new(rng: SharedRng<R>) -> Self {
        Self::with_config(rng, SecretConfig::default())
    }

    pub fn with_config(rng: SharedRng<R>, config: SecretConfig) -> Self {
        tracing::debug!(
            max_secret_length = config.max_secret_length,
            "payload secret generator created"
        );
        Self { rng, config }
    }

    pub fn config(&self) -> &SecretConfig {
        &self.config
    }

    /// Return `secret_length` random bytes as `2 * secret_length` lowercase hex chars.
    ///
    /// Negative or over-limit lengths are rejected with [`Error::InvalidArgument`].
    /// A zero length yields an empty string without drawing from the rng.
    pub fn generate(&self, secret_length: i64) -> Result<String> {
        let len = usize::try_from(secret_length).map_err(|_| {
            tracing::warn!(secret_length, "rejected negative payload secret length");
            Error::InvalidArgument(format!(
                "secret length must be non-negative, got {secret_length}"
            ))
        })?;
        let bytes = self.generate_bytes(len)?;
        Ok(encode_lower_hex(&bytes))
    }

    /// Same draw as [`generate`](Self::generate), without the hex step.
    pub fn generate_bytes(&self, secret_length: usize) -> Result<Vec<u8>> {
        if secret_length > self.config.max_secret_length {
            tracing::warn!(
                secret_length,
                max = self.config.max_secret_length,
                "rejected oversized payload secret length"
            );
            return Err(Error::InvalidArgument(format!(
                "secret length {secret_length} exceeds maximum of {}",
                self.config.max_secret_length
            )));
        }

        let mut bytes = vec![0u8; secret_length];
        if secret_length == 0 {
            return Ok(bytes);
        }
        self.rng.fill(&mut bytes).map_err(|e| {
            tracing::error!(error = %e, "payload secret generation failed");
            e
        })?;
        tracing::debug!(secret_length, "generated payload secret");
        Ok(bytes)
    }
}
