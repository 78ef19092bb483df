//! # shopkeep-core: Pure Domain Model for Shopkeep
//!
//! This crate holds the value types of the catalog as pure data with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopkeep Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shop (CLI binary)                            │   │
//! │  │    parse records ──► review ──► report ──► discounts            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopkeep-catalog                             │   │
//! │  │    Catalog, SharedCatalog, formatters, record parser, config    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopkeep-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  rating   │  │  review   │  │  product  │  │   │
//! │  │   │   Money   │  │  Rating   │  │  Review   │  │  Product  │  │   │
//! │  │   │           │  │ Rateable  │  │           │  │ProductKind│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • VALUE TYPES                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - exact decimal amounts, rounded to the cent on output
//! - [`rating`] - star ratings, averaging, the [`Rateable`] trait
//! - [`review`] - rating + comment pairs
//! - [`product`] - perishable / non-perishable products
//! - [`error`] - domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopkeep_core::{Money, Product, Rateable, Rating};
//!
//! let tea = Product::non_perishable(101, "Tea", "1.99".parse().unwrap(), Rating::NotRated);
//! assert_eq!(tea.discount(), Money::from_cents(20));
//!
//! let rated = tea.apply_rating(Rating::FourStar);
//! assert_eq!(rated, tea); // same id, same identity
//! assert_eq!(rated.rating(), Rating::FourStar);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod rating;
pub mod review;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use product::{Product, ProductId, ProductKind};
pub use rating::{Rateable, Rating};
pub use review::Review;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Discount rate applied to every product, in basis points (1000 = 10%).
pub const DISCOUNT_RATE_BPS: u32 = 1000;
