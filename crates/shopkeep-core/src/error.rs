//! # Error Types
//!
//! Domain-specific error types for shopkeep-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopkeep-core errors (this file)                                      │
//! │  └── CoreError       - Malformed domain values                         │
//! │                                                                         │
//! │  shopkeep-catalog errors (separate crate)                              │
//! │  ├── CatalogError    - Lookup failures, config, I/O                    │
//! │  └── ParseError      - Malformed product/review records                │
//! │                                                                         │
//! │  Flow: CoreError → ParseError → CatalogError → shop binary (anyhow)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rating outside `0..=5` is NOT an error: it converts to
//! [`Rating::NotRated`](crate::rating::Rating::NotRated).

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Text that is not a plain decimal amount.
    ///
    /// ## When This Occurs
    /// - Non-numeric characters (`"abc"`, `"1,99"`, `"1e3"`)
    /// - Values outside the decimal range
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
