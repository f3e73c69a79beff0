//! Shared cryptographically secure random source.
//!
//! A [`SharedRng`] owns exactly one CSPRNG instance. Clones of the handle
//! point at the same instance, and every draw goes through its mutex so
//! concurrent callers never observe overlapping output.

use std::sync::{Arc, Mutex};

use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};

use crate::error::{Error, Result};

pub struct SharedRng<R> {
    inner: Arc<Mutex<R>>,
}

impl<R> Clone for SharedRng<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> std::fmt::Debug for SharedRng<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never expose generator state
        f.debug_struct("SharedRng").finish_non_exhaustive()
    }
}

impl SharedRng<StdRng> {
    /// Seed a fresh `StdRng` from the operating system's entropy source.
    /// The instance is never reseeded afterwards.
    pub fn from_os() -> Result<Self> {
        let rng = StdRng::from_rng(OsRng).map_err(|e| {
            tracing::error!(error = %e, "failed to seed payload secret rng from OS entropy");
            Error::from(e)
        })?;
        tracing::debug!("seeded payload secret rng from OS entropy");
        Ok(Self::new(rng))
    }
}

impl<R: RngCore + CryptoRng> SharedRng<R> {
    /// Wrap an existing CSPRNG. Tests use this to substitute a seeded generator.
    pub fn new(rng: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Fill `dest` entirely with bytes from the shared generator.
    pub fn fill(&self, dest: &mut [u8]) -> Result<()> {
        let mut rng = self.inner.lock().map_err(|_| {
            Error::RandomnessUnavailable("payload secret rng lock poisoned".to_string())
        })?;
        rng.try_fill_bytes(dest)?;
        Ok(())
    }

    /// Whether `self` and `other` are handles to the same generator instance.
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
