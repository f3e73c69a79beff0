//! Provisioning of the process-wide payload secret rng.
//!
//! The embedding application builds one [`PayloadSecretModule`] at startup and
//! threads it (or the generators it hands out) through its constructors. The
//! rng is seeded on first use and lives as long as the module.

use once_cell::sync::OnceCell;
use rand::rngs::StdRng;

use crate::{config::SecretConfig, error::Result, generator::PayloadSecretGenerator, rng::SharedRng};

#[derive(Debug, Default)]
pub struct PayloadSecretModule {
    config: SecretConfig,
    rng: OnceCell<SharedRng<StdRng>>,
}

impl PayloadSecretModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SecretConfig) -> Self {
        Self {
            config,
            rng: OnceCell::new(),
        }
    }

    /// The single rng of this module, seeded from the OS on first call.
    /// A failed seeding attempt leaves the module uninitialised so a later call may retry.
    pub fn payload_secret_rng(&self) -> Result<SharedRng<StdRng>> {
        self.rng.get_or_try_init(SharedRng::from_os).cloned()
    }

    /// A generator wired to this module's shared rng.
    pub fn generator(&self) -> Result<PayloadSecretGenerator<StdRng>> {
        let rng = self.payload_secret_rng()?;
        Ok(PayloadSecretGenerator::with_config(rng, self.config.clone()))
    }
}
