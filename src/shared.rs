//! Swappable handle for rebuilding the index at runtime.
//!
//! A [`Zcta`] is immutable. Rebuilding means building a whole new one and
//! swapping it in; readers that took a snapshot before the swap keep a
//! consistent view of the old pair.

use crate::error::Result;
use crate::lookup::{Zcta, ZctaConfig};
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared, atomically replaceable [`Zcta`].
#[derive(Debug, Default)]
pub struct SharedZcta {
    current: RwLock<Arc<Zcta>>,
}

impl SharedZcta {
    pub fn new(zcta: Zcta) -> Self {
        Self {
            current: RwLock::new(Arc::new(zcta)),
        }
    }

    /// Load the configured dataset.
    pub fn open(config: &ZctaConfig) -> Result<Self> {
        Ok(Self::new(Zcta::open(config)?))
    }

    /// The index pair currently being served.
    pub fn snapshot(&self) -> Arc<Zcta> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a new index pair, returning the old one.
    pub fn replace(&self, zcta: Zcta) -> Arc<Zcta> {
        std::mem::replace(&mut *self.current.write(), Arc::new(zcta))
    }

    /// Rebuild from the configured dataset and swap it in.
    ///
    /// On failure the current index stays in place.
    pub fn reload(&self, config: &ZctaConfig) -> Result<()> {
        let zcta = Zcta::open(config).map_err(|e| {
            tracing::warn!("Failed to reload zcta dataset: {}", e);
            e
        })?;
        self.replace(zcta);
        Ok(())
    }
}

impl From<Zcta> for SharedZcta {
    fn from(zcta: Zcta) -> Self {
        Self::new(zcta)
    }
}
