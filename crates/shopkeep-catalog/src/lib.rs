//! # shopkeep-catalog: Catalog Engine for Shopkeep
//!
//! Owns the product → reviews mapping and renders it through a locale
//! formatter.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Data Flow                                  │
//! │                                                                         │
//! │  "F,103,Cake,3.99,0,2021-09-21" ──► records::parse_product             │
//! │  "103,4,Nice cake"              ──► records::parse_review              │
//! │                                         │                               │
//! │                                         ▼                               │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  Catalog                                                        │   │
//! │  │    BTreeMap<ProductId, { Product, Vec<Review> }>                │   │
//! │  │    create_product · review_product · find_product               │   │
//! │  │    list_products(filter, sorter)  (see sort)                    │   │
//! │  └──────────────────────────────┬──────────────────────────────────┘   │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  Box<dyn Formatter> ──► report_for · print_products ·                  │
//! │                         discounts_by_rating                             │
//! │                                                                         │
//! │  SharedCatalog = Arc<Mutex<Catalog>> for multi-threaded callers         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - the catalog itself
//! - [`sort`] - comparators, filters and their combinators
//! - [`format`] - the [`Formatter`] trait and built-in locales
//! - [`records`] - comma-delimited record parsing
//! - [`state`] - [`SharedCatalog`]
//! - [`config`] - [`ShopConfig`] loading
//! - [`error`] - catalog error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopkeep_catalog::{sort, Catalog};
//! use shopkeep_catalog::sort::Comparator;
//!
//! let mut catalog = Catalog::new("en-GB");
//! catalog.parse_product("D,101,Tea,1.99,0").unwrap();
//! catalog.parse_product("D,102,Coffee,1.75,0").unwrap();
//! catalog.parse_review("101,5,Perfect tea").unwrap();
//!
//! let best_first = catalog.list_products(sort::all(), sort::by_rating().reversed());
//! assert_eq!(best_first[0].name(), "Tea");
//! assert_eq!(catalog.discounts_by_rating()["★★★★★"], "£0.20");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod records;
pub mod sort;
pub mod state;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use config::ShopConfig;
pub use error::{CatalogError, CatalogResult};
pub use format::{Formatter, LocaleFormatter};
pub use records::ParseError;
pub use state::SharedCatalog;
