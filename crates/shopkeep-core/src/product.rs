//! # Product
//!
//! Catalog products and their two variants.
//!
//! ## Type Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             Product                                     │
//! │                                                                         │
//! │   id (ProductId)   ── identity: the ONLY field in Eq / Hash            │
//! │   name             ── fixed at construction                            │
//! │   price (Money)    ── exact cents                                      │
//! │   rating (Rating)  ── replaced via Rateable::apply_rating              │
//! │   kind ──┬── Perishable { best_before }  → stored date                 │
//! │          └── NonPerishable               → "today", read each call     │
//! │                                                                         │
//! │   discount() = price × 10%, half-up to the cent (derived, not stored)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are values. Nothing mutates one in place; a rating change
//! produces a new `Product` with the same identity.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::money::Money;
use crate::rating::{Rateable, Rating};
use crate::DISCOUNT_RATE_BPS;

// =============================================================================
// Product ID
// =============================================================================

/// Catalog-unique integer product identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    #[inline]
    pub const fn new(id: i32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> i32 {
        self.0
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        ProductId(id)
    }
}

/// Lets catalog lookups take either an id or a product.
impl From<&Product> for ProductId {
    fn from(product: &Product) -> Self {
        product.id
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// The two product variants. Only best-before behavior differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductKind {
    /// Has a real shelf life, fixed when the product is created.
    Perishable { best_before: NaiveDate },
    /// No shelf life; best-before is always today.
    NonPerishable,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    rating: Rating,
    kind: ProductKind,
}

impl Product {
    /// Creates a perishable product with a fixed best-before date.
    ///
    /// No validation is applied: an empty name or a negative price is
    /// stored as given.
    pub fn perishable(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        rating: Rating,
        best_before: NaiveDate,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            rating,
            kind: ProductKind::Perishable { best_before },
        }
    }

    /// Creates a non-perishable product.
    pub fn non_perishable(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        rating: Rating,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            rating,
            kind: ProductKind::NonPerishable,
        }
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    #[inline]
    pub fn is_perishable(&self) -> bool {
        matches!(self.kind, ProductKind::Perishable { .. })
    }

    /// Discount owed on this product: 10% of the price, rounded half-up to
    /// two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use shopkeep_core::{Money, Product, Rating};
    ///
    /// let tea = Product::non_perishable(101, "Tea", Money::from_cents(199), Rating::NotRated);
    /// assert_eq!(tea.discount(), Money::from_cents(20)); // 0.199 → 0.20
    /// ```
    pub fn discount(&self) -> Money {
        self.price.percentage(DISCOUNT_RATE_BPS)
    }

    /// Best-before date.
    ///
    /// Non-perishable products report the local date at the moment of the
    /// call, so two reads on different days return different dates.
    pub fn best_before(&self) -> NaiveDate {
        match self.kind {
            ProductKind::Perishable { best_before } => best_before,
            ProductKind::NonPerishable => Local::now().date_naive(),
        }
    }
}

impl Rateable for Product {
    #[inline]
    fn rating(&self) -> Rating {
        self.rating
    }

    /// Same variant, id, name, price and best-before; new rating.
    fn apply_rating(&self, rating: Rating) -> Self {
        Product {
            rating,
            ..self.clone()
        }
    }
}

/// Identity is the id alone: name or price never make two products differ.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {} {}",
            self.id,
            self.name,
            self.price,
            self.discount(),
            self.rating.stars(),
            self.best_before()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
