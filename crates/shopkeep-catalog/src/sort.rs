//! # Sorting and Filtering
//!
//! Ready-made comparators and predicates for [`Catalog::list_products`],
//! plus extension traits that compose them.
//!
//! ## Composition
//! ```text
//! by_rating().reversed().then_by(by_price().reversed())
//!     │          │          │
//!     │          │          └── tie-break on price, highest first
//!     │          └── highest rating first
//!     └── Fn(&Product, &Product) -> Ordering
//!
//! price_below(2.00).and(rated_at_least(FourStar)).negate()
//! ```
//!
//! Both traits are blanket-implemented for every matching closure, so
//! callers can mix these helpers with their own closures freely.
//!
//! [`Catalog::list_products`]: crate::Catalog::list_products

use std::cmp::Ordering;

use shopkeep_core::{Money, Product, Rateable, Rating};

// =============================================================================
// Comparator
// =============================================================================

/// Combinators for any `Fn(&T, &T) -> Ordering`.
pub trait Comparator<T: ?Sized>: Fn(&T, &T) -> Ordering {
    /// Uses `next` to order values this comparator considers equal.
    fn then_by<C>(self, next: C) -> impl Fn(&T, &T) -> Ordering
    where
        Self: Sized,
        C: Fn(&T, &T) -> Ordering,
    {
        move |a: &T, b: &T| self(a, b).then_with(|| next(a, b))
    }

    /// Flips the order.
    fn reversed(self) -> impl Fn(&T, &T) -> Ordering
    where
        Self: Sized,
    {
        move |a: &T, b: &T| self(b, a)
    }
}

impl<T: ?Sized, F> Comparator<T> for F where F: Fn(&T, &T) -> Ordering {}

pub fn by_id() -> impl Fn(&Product, &Product) -> Ordering {
    |a: &Product, b: &Product| a.id().cmp(&b.id())
}

pub fn by_name() -> impl Fn(&Product, &Product) -> Ordering {
    |a: &Product, b: &Product| a.name().cmp(b.name())
}

pub fn by_price() -> impl Fn(&Product, &Product) -> Ordering {
    |a: &Product, b: &Product| a.price().cmp(&b.price())
}

/// Lowest rating first; chain `.reversed()` for best-rated first.
pub fn by_rating() -> impl Fn(&Product, &Product) -> Ordering {
    |a: &Product, b: &Product| a.rating().cmp(&b.rating())
}

pub fn by_discount() -> impl Fn(&Product, &Product) -> Ordering {
    |a: &Product, b: &Product| a.discount().cmp(&b.discount())
}

// =============================================================================
// Filter
// =============================================================================

/// Combinators for any `Fn(&T) -> bool`.
pub trait Filter<T: ?Sized>: Fn(&T) -> bool {
    fn and<P>(self, other: P) -> impl Fn(&T) -> bool
    where
        Self: Sized,
        P: Fn(&T) -> bool,
    {
        move |value: &T| self(value) && other(value)
    }

    fn or<P>(self, other: P) -> impl Fn(&T) -> bool
    where
        Self: Sized,
        P: Fn(&T) -> bool,
    {
        move |value: &T| self(value) || other(value)
    }

    fn negate(self) -> impl Fn(&T) -> bool
    where
        Self: Sized,
    {
        move |value: &T| !self(value)
    }
}

impl<T: ?Sized, F> Filter<T> for F where F: Fn(&T) -> bool {}

/// Accepts every product.
pub fn all() -> impl Fn(&Product) -> bool {
    |_: &Product| true
}

/// Strictly cheaper than `limit`.
pub fn price_below(limit: Money) -> impl Fn(&Product) -> bool {
    move |product: &Product| product.price() < limit
}

pub fn rated_at_least(minimum: Rating) -> impl Fn(&Product) -> bool {
    move |product: &Product| product.rating() >= minimum
}

pub fn perishable_only() -> impl Fn(&Product) -> bool {
    |product: &Product| product.is_perishable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn products() -> Vec<Product> {
        let date = NaiveDate::from_ymd_opt(2021, 9, 21).unwrap();
        vec![
            Product::non_perishable(101, "Tea", Money::from_cents(199), Rating::FourStar),
            Product::non_perishable(102, "Coffee", Money::from_cents(175), Rating::FourStar),
            Product::perishable(103, "Cake", Money::from_cents(399), Rating::FiveStar, date),
            Product::perishable(104, "Cookie", Money::from_cents(299), Rating::TwoStar, date),
        ]
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(Product::name).collect()
    }

    #[test]
    fn test_rating_desc_then_price_desc() {
        let mut list = products();
        list.sort_by(by_rating().reversed().then_by(by_price().reversed()));
        assert_eq!(names(&list), ["Cake", "Tea", "Coffee", "Cookie"]);
    }

    #[test]
    fn test_reversing_a_composite_reverses_the_list() {
        let sorter = by_rating().reversed().then_by(by_price().reversed());
        let mut forward = products();
        forward.sort_by(&sorter);

        let mut backward = products();
        backward.sort_by(sorter.reversed());
        backward.reverse();

        assert_eq!(names(&forward), names(&backward));
    }

    #[test]
    fn test_simple_comparators() {
        let mut list = products();
        list.sort_by(by_name());
        assert_eq!(names(&list), ["Cake", "Coffee", "Cookie", "Tea"]);

        list.sort_by(by_discount());
        assert_eq!(names(&list), ["Coffee", "Tea", "Cookie", "Cake"]);

        list.sort_by(by_id().reversed());
        assert_eq!(names(&list), ["Cookie", "Cake", "Coffee", "Tea"]);
    }

    #[test]
    fn test_filters_compose() {
        let list = products();
        let cheap = price_below(Money::from_cents(200));
        assert_eq!(list.iter().filter(|p| cheap(p)).count(), 2);

        let cheap_or_great = price_below(Money::from_cents(200))
            .or(rated_at_least(Rating::FiveStar));
        assert_eq!(list.iter().filter(|p| cheap_or_great(p)).count(), 3);

        let fresh_and_good = perishable_only().and(rated_at_least(Rating::ThreeStar));
        let picked: Vec<_> = list.iter().filter(|p| fresh_and_good(p)).collect();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].name(), "Cake");

        let not_perishable = perishable_only().negate();
        assert_eq!(list.iter().filter(|p| not_perishable(p)).count(), 2);
        assert_eq!(list.iter().filter(|p| all()(p)).count(), 4);
    }
}
