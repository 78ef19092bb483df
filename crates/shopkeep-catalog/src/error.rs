//! # Catalog Error Types
//!
//! Error types for catalog operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Record line "F,103,Cake,abc,4,2021-09-21"                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ParseError::InvalidPrice (records module)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError::Parse (this module) ← logged as a warning by Catalog    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  shop binary decides: skip the record and keep going                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal to the catalog itself. A lookup miss or a bad
//! record leaves the catalog exactly as it was.

use shopkeep_core::ProductId;
use thiserror::Error;

use crate::records::ParseError;

/// Catalog operation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with this id exists.
    ///
    /// ## When This Occurs
    /// - `find_product`, `review_product` or `report_for` with an unknown id
    /// - A review record that references a product never created
    #[error("Product with id {id} not found")]
    NotFound { id: ProductId },

    /// A product or review record could not be parsed.
    #[error("Could not parse record: {0}")]
    Parse(#[from] ParseError),

    /// Configuration is present but unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Reading a config or record file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Creates a NotFound error for a given product id.
    pub fn not_found(id: impl Into<ProductId>) -> Self {
        CatalogError::NotFound { id: id.into() }
    }

    /// Returns true if this is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Config(err.to_string())
    }
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
