//! # Shared Catalog
//!
//! A catalog handle that several threads can hold at once.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    SharedCatalog Operations                             │
//! │                                                                         │
//! │  Thread A: with_catalog_mut(|c| c.review_product(..)) ─┐                │
//! │                                                        ├─► one Mutex   │
//! │  Thread B: with_catalog(|c| c.report_for(..)) ─────────┘                │
//! │                                                                         │
//! │  The whole append → average → replace sequence of a review runs        │
//! │  inside a single lock, so no reader sees a review without its rating.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::catalog::Catalog;

/// Cloneable, thread-safe handle to one [`Catalog`].
///
/// Clones share the same catalog.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    catalog: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        SharedCatalog {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Executes a function with read access to the catalog.
    ///
    /// ## Usage
    /// ```rust
    /// # use shopkeep_catalog::{Catalog, SharedCatalog};
    /// let shared = SharedCatalog::new(Catalog::new("en-GB"));
    /// assert_eq!(shared.with_catalog(|catalog| catalog.len()), 0);
    /// ```
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.lock();
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.lock();
        f(&mut catalog)
    }

    /// A panic while holding the lock cannot leave a half-applied review
    /// behind, so a poisoned lock is taken over as is.
    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        SharedCatalog::new(catalog)
    }
}
