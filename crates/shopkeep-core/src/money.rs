//! # Money Module
//!
//! Provides the `Money` type for exact decimal monetary amounts.
//!
//! ## Why Not Floats?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing discounts as f64:                                              │
//! │    0.10 + 0.20 = 0.30000000000000004                                    │
//! │                                                                         │
//! │  Rounding 1.99 × 0.1 as f64:                                            │
//! │    0.199 is stored as 0.19899999... → may round DOWN to 0.19            │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    "1.995" is held exactly, scale and all                               │
//! │    1.995 × 0.1000 = 0.1995 → half-up to the cent → 0.20                │
//! │    Rounding happens once, explicitly, on the way out                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopkeep_core::money::Money;
//!
//! let price: Money = "1.995".parse().unwrap();
//! assert_eq!(price.to_string(), "2.00");
//!
//! // 10% discount, rounded half-up
//! assert_eq!(price.percentage(1000), Money::from_cents(20));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::CoreError;

/// Decimal places of a rounded amount.
const CENT_SCALE: u32 = 2;

/// Decimal places of a basis-point rate (1000 bps = 0.1000).
const BPS_SCALE: u32 = 4;

// =============================================================================
// Money Type
// =============================================================================

/// An exact monetary amount.
///
/// ## Design Decisions
/// - **Arbitrary scale**: `"1.995"` keeps its third digit; only
///   [`percentage`](Money::percentage) and `Display` round to the cent
/// - **Signed**: prices are accepted as given, negative ones included
/// - **No currency**: the currency symbol belongs to the active locale, not
///   to the amount
/// - **Saturating sums**: adding past the decimal range clamps instead of
///   panicking
/// - **Serde**: serialized as a decimal string
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates an amount from a count of cents.
    ///
    /// ## Example
    /// ```rust
    /// use shopkeep_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, CENT_SCALE))
    }

    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// The exact amount, unrounded.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns `bps` basis points of this amount, rounded half-up to a cent.
    ///
    /// Half-up means ties round away from zero: 0.195 → 0.20 and
    /// -0.195 → -0.20.
    ///
    /// ## Example
    /// ```rust
    /// use shopkeep_core::money::Money;
    ///
    /// // 10% of 1.99 = 0.199 → 0.20
    /// assert_eq!(Money::from_cents(199).percentage(1000), Money::from_cents(20));
    /// // 10% of 0.05 = 0.005 → 0.01
    /// assert_eq!(Money::from_cents(5).percentage(1000), Money::from_cents(1));
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        let rate = Decimal::new(i64::from(bps), BPS_SCALE);
        Money(round_half_up(self.0.saturating_mul(rate)))
    }

    /// Amount rounded half-up to exactly two decimal places.
    fn to_cent_decimal(self) -> Decimal {
        let mut rounded = round_half_up(self.0);
        if rounded.is_zero() {
            // drops the sign of a rounded-away negative, e.g. -0.001
            rounded = Decimal::ZERO;
        }
        rounded.rescale(CENT_SCALE);
        rounded
    }
}

fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"1.99"`, `"1.995"`, `"2"`, `"-0.5"` or
/// `"+3.10"`.
///
/// Every fractional digit is kept. Exponents, grouping separators and
/// amounts beyond the decimal range are rejected.
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidAmount(s.to_string());
        let text = s.trim();

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (major_text, minor_text) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (major_text.is_empty() && minor_text.is_empty())
            || !all_digits(major_text)
            || !all_digits(minor_text)
        {
            return Err(invalid());
        }

        let normalized = format!(
            "{}.{}",
            if major_text.is_empty() { "0" } else { major_text },
            if minor_text.is_empty() { "0" } else { minor_text },
        );
        let amount = Decimal::from_str_exact(&normalized).map_err(|_| invalid())?;

        Ok(Money(if negative { -amount } else { amount }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `major.minor` rendering, rounded half-up to the cent, with no
/// currency symbol.
///
/// Localized output (symbol, separators) is produced by the catalog's
/// formatters, not here.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cent_decimal())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
