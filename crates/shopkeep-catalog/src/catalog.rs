//! # Catalog
//!
//! The in-memory store that owns every product and its reviews.
//!
//! ## Entry Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Entry Lifecycle                           │
//! │                                                                         │
//! │  create_product(101, "Tea", ...)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────┐  review_product   ┌──────────────┐                   │
//! │  │  NO REVIEWS  │ ────────────────► │ HAS REVIEWS  │ ◄──┐              │
//! │  │  rating as   │                   │ rating = avg │    │ review_product│
//! │  │  created     │                   │ of reviews   │ ───┘ (re-average) │
//! │  └──────────────┘                   └──────────────┘                   │
//! │                                                                         │
//! │  create_product(101, ...) again ──► no-op, existing entry returned     │
//! │  There is no removal.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries live in a `BTreeMap` keyed by product id, so every listing and
//! aggregation walks products in ascending id order before any sorting is
//! applied.

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use shopkeep_core::{Money, Product, ProductId, Rateable, Rating, Review};
use tracing::{debug, info, warn};

use crate::config::ShopConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::format::{self, Formatter, NO_REVIEWS};
use crate::records;

/// A product together with the reviews submitted for it.
#[derive(Debug, Clone)]
struct CatalogEntry {
    product: Product,
    /// Submission order.
    reviews: Vec<Review>,
}

/// Product catalog with review tracking and localized reporting.
///
/// ## Example
/// ```rust
/// use shopkeep_catalog::Catalog;
/// use shopkeep_core::{Rateable, Rating};
///
/// let mut catalog = Catalog::new("en-GB");
/// catalog.create_product(101, "Tea", "1.99".parse().unwrap(), Rating::NotRated, None);
///
/// for stars in [4, 2, 4, 4, 5, 3] {
///     catalog.review_product(101, Rating::from_stars(stars), "...").unwrap();
/// }
/// assert_eq!(catalog.find_product(101).unwrap().rating(), Rating::FourStar);
/// ```
pub struct Catalog {
    products: BTreeMap<ProductId, CatalogEntry>,
    formatter: Box<dyn Formatter>,
}

impl Catalog {
    /// Creates an empty catalog rendering with the locale for `tag`.
    ///
    /// Unknown tags fall back to [`format::DEFAULT_LOCALE`].
    pub fn new(tag: &str) -> Self {
        Catalog::with_formatter(*resolve_locale(tag))
    }

    /// Creates an empty catalog rendering through a custom formatter.
    pub fn with_formatter(formatter: impl Formatter + 'static) -> Self {
        Catalog {
            products: BTreeMap::new(),
            formatter: Box::new(formatter),
        }
    }

    /// Creates an empty catalog using the configured locale.
    pub fn from_config(config: &ShopConfig) -> Self {
        Catalog::new(&config.catalog.locale)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Adds a product unless one with the same id already exists.
    ///
    /// A `best_before` date makes the product perishable. The returned value
    /// is always what the catalog now holds: for a repeated id that is the
    /// original product, and the new arguments are discarded.
    pub fn create_product(
        &mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        rating: Rating,
        best_before: Option<NaiveDate>,
    ) -> Product {
        let id = id.into();

        match self.products.entry(id) {
            Entry::Occupied(existing) => {
                debug!(product_id = %id, "Product already in catalog, keeping existing entry");
                existing.get().product.clone()
            }
            Entry::Vacant(slot) => {
                let product = match best_before {
                    Some(date) => Product::perishable(id, name, price, rating, date),
                    None => Product::non_perishable(id, name, price, rating),
                };
                debug!(
                    product_id = %id,
                    name = product.name(),
                    price = %product.price(),
                    perishable = product.is_perishable(),
                    "Product created"
                );

                let entry = slot.insert(CatalogEntry {
                    product,
                    reviews: Vec::new(),
                });
                entry.product.clone()
            }
        }
    }

    /// Looks up a product by id.
    pub fn find_product(&self, id: impl Into<ProductId>) -> CatalogResult<Product> {
        self.entry(id.into()).map(|entry| entry.product.clone())
    }

    /// Records a review and re-rates the product with the rounded average
    /// of all its reviews.
    ///
    /// An unknown id is rejected without touching the catalog.
    pub fn review_product(
        &mut self,
        id: impl Into<ProductId>,
        rating: Rating,
        comment: impl Into<String>,
    ) -> CatalogResult<Product> {
        let id = id.into();
        let entry = self
            .products
            .get_mut(&id)
            .ok_or(CatalogError::NotFound { id })?;

        entry.reviews.push(Review::new(rating, comment));
        let average = Rating::average(entry.reviews.iter().map(Review::rating));
        entry.product = entry.product.apply_rating(average);

        debug!(
            product_id = %id,
            review_rating = %rating,
            reviews = entry.reviews.len(),
            rating = %average,
            "Product reviewed"
        );

        Ok(entry.product.clone())
    }

    /// Reviews of a product in the order they were submitted.
    pub fn reviews_for(&self, id: impl Into<ProductId>) -> CatalogResult<Vec<Review>> {
        self.entry(id.into()).map(|entry| entry.reviews.clone())
    }

    /// Products accepted by `filter`, ordered by `sorter`.
    ///
    /// The sort is stable over ascending id order, so products the sorter
    /// considers equal stay in id order.
    pub fn list_products<F, S>(&self, filter: F, sorter: S) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
        S: Fn(&Product, &Product) -> Ordering,
    {
        let mut products: Vec<Product> = self
            .products
            .values()
            .map(|entry| &entry.product)
            .filter(|product| filter(product))
            .cloned()
            .collect();
        products.sort_by(sorter);
        products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Renders [`list_products`](Self::list_products), one line per product.
    pub fn print_products<F, S>(&self, filter: F, sorter: S) -> String
    where
        F: Fn(&Product) -> bool,
        S: Fn(&Product, &Product) -> Ordering,
    {
        self.list_products(filter, sorter)
            .iter()
            .map(|product| line(self.formatter.format_product(product)))
            .collect()
    }

    /// Renders a product and its reviews, lowest rating first.
    ///
    /// ## Output
    /// ```text
    /// Drink: Tea, Price: £1.99, Rating: ★★★★☆, Best Before: 18/10/2026
    /// Review: ★★☆☆☆   Rather weak tea
    /// Review: ★★★☆☆   Just add some lemon
    /// Review: ★★★★☆   Nice hot cup of tea
    /// ...
    /// ```
    ///
    /// A product with no reviews gets a single localized "not reviewed"
    /// line instead. Stored review order is left untouched.
    pub fn report_for(&self, id: impl Into<ProductId>) -> CatalogResult<String> {
        let entry = self.entry(id.into())?;
        let mut report = line(self.formatter.format_product(&entry.product));

        if entry.reviews.is_empty() {
            report.push_str(&line(self.formatter.text(NO_REVIEWS)));
        } else {
            let mut reviews: Vec<&Review> = entry.reviews.iter().collect();
            reviews.sort_by_key(|review| review.rating());
            for review in reviews {
                report.push_str(&line(self.formatter.format_review(review)));
            }
        }

        Ok(report)
    }

    /// Discount owed per rating level, summed exactly.
    pub fn discount_totals(&self) -> BTreeMap<Rating, Money> {
        let mut totals = BTreeMap::new();
        for entry in self.products.values() {
            *totals.entry(entry.product.rating()).or_insert_with(Money::zero) +=
                entry.product.discount();
        }
        totals
    }

    /// [`discount_totals`](Self::discount_totals) keyed by rating stars and
    /// formatted in the active locale's currency.
    pub fn discounts_by_rating(&self) -> BTreeMap<String, String> {
        self.discount_totals()
            .into_iter()
            .map(|(rating, total)| {
                (
                    rating.stars().to_string(),
                    self.formatter.format_currency(total),
                )
            })
            .collect()
    }

    // =========================================================================
    // Locale
    // =========================================================================

    /// Switches the active locale. Unknown tags fall back to
    /// [`format::DEFAULT_LOCALE`].
    pub fn change_locale(&mut self, tag: &str) {
        let formatter = resolve_locale(tag);
        info!(requested = tag, locale = formatter.tag, "Catalog locale changed");
        self.formatter = Box::new(*formatter);
    }

    /// Tag of the active formatter.
    pub fn locale(&self) -> &str {
        self.formatter.tag()
    }

    pub fn supported_locales() -> BTreeSet<&'static str> {
        format::supported_locales()
    }

    // =========================================================================
    // Record Ingestion
    // =========================================================================

    /// Parses a product line and creates the product it describes.
    ///
    /// See [`records::parse_product`] for the line format.
    pub fn parse_product(&mut self, line: &str) -> CatalogResult<Product> {
        let record = records::parse_product(line).map_err(|err| {
            warn!(line, error = %err, "Rejected product record");
            err
        })?;

        Ok(self.create_product(
            record.id,
            record.name,
            record.price,
            record.rating,
            record.best_before,
        ))
    }

    /// Parses a review line and applies it to its product.
    pub fn parse_review(&mut self, line: &str) -> CatalogResult<Product> {
        let record = records::parse_review(line).map_err(|err| {
            warn!(line, error = %err, "Rejected review record");
            err
        })?;

        self.review_product(record.id, record.rating, record.comment)
    }

    fn entry(&self, id: ProductId) -> CatalogResult<&CatalogEntry> {
        self.products.get(&id).ok_or(CatalogError::NotFound { id })
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("locale", &self.locale())
            .field("products", &self.products.len())
            .finish()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(format::DEFAULT_LOCALE)
    }
}

fn resolve_locale(tag: &str) -> &'static format::LocaleFormatter {
    format::formatter_for(tag).unwrap_or_else(|| {
        warn!(
            requested = tag,
            fallback = format::DEFAULT_LOCALE,
            "Unsupported locale"
        );
        format::formatter_or_default(format::DEFAULT_LOCALE)
    })
}

fn line(mut text: String) -> String {
    text.push('\n');
    text
}

// =============================================================================
// Unit Tests
// =============================================================================
