//! # Record Parser
//!
//! Turns comma-delimited text lines into product and review records.
//!
//! ## Line Formats
//! ```text
//! Product:  <kind>,<id>,<name>,<price>,<stars>[,<best-before>]
//!           F,103,Cake,3.99,0,2021-09-21      → perishable, date required
//!           D,101,Tea,1.99,0                  → non-perishable, date ignored
//!
//! Review:   <id>,<stars>,<comment>
//!           101,4,Nice hot cup of tea         → comment may contain commas
//! ```
//!
//! Parsing is strict about types and lenient about whitespace: fields are
//! trimmed, star counts outside `0..=5` become `NotRated`, but a
//! non-numeric id or a malformed date fails the whole line.

use chrono::NaiveDate;
use shopkeep_core::{Money, ProductId, Rating};
use thiserror::Error;

/// Reasons a record line is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing field '{field}'")]
    MissingField { field: &'static str },

    #[error("field '{field}' is not an integer: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("price is not a decimal amount: '{0}'")]
    InvalidPrice(String),

    #[error("best-before is not an ISO date: '{0}'")]
    InvalidDate(String),

    #[error("unknown product kind '{0}' (expected F or D)")]
    UnknownKind(String),
}

/// Result type for record parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Which product variant a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `F`: food, perishable.
    Food,
    /// `D`: drink, non-perishable.
    Drink,
}

impl std::str::FromStr for RecordKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" | "f" => Ok(RecordKind::Food),
            "D" | "d" => Ok(RecordKind::Drink),
            other => Err(ParseError::UnknownKind(other.to_string())),
        }
    }
}

/// A parsed product line, ready for `Catalog::create_product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub rating: Rating,
    /// `Some` exactly when the record is perishable.
    pub best_before: Option<NaiveDate>,
}

/// A parsed review line, ready for `Catalog::review_product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub id: ProductId,
    pub rating: Rating,
    pub comment: String,
}

/// Parses a product line.
///
/// ## Example
/// ```rust
/// use shopkeep_catalog::records::parse_product;
///
/// let record = parse_product("D,101,Tea,1.99,0,2021-09-21").unwrap();
/// assert_eq!(record.name, "Tea");
/// assert!(record.best_before.is_none()); // drinks ignore the date
/// ```
pub fn parse_product(line: &str) -> ParseResult<ProductRecord> {
    let mut fields = line.split(',').map(str::trim);

    let kind: RecordKind = next_field(&mut fields, "kind")?.parse()?;
    let id = parse_id(next_field(&mut fields, "id")?)?;
    let name = next_field(&mut fields, "name")?.to_string();
    let price = parse_price(next_field(&mut fields, "price")?)?;
    let rating = parse_stars(next_field(&mut fields, "rating")?)?;

    let best_before = match kind {
        RecordKind::Food => Some(parse_date(next_field(&mut fields, "best_before")?)?),
        RecordKind::Drink => None,
    };

    Ok(ProductRecord {
        id,
        name,
        price,
        rating,
        best_before,
    })
}

/// Parses a review line. Everything after the second comma is the comment.
///
/// ## Example
/// ```rust
/// use shopkeep_catalog::records::parse_review;
/// use shopkeep_core::Rating;
///
/// let record = parse_review("101,3,Just add some lemon, maybe honey").unwrap();
/// assert_eq!(record.rating, Rating::ThreeStar);
/// assert_eq!(record.comment, "Just add some lemon, maybe honey");
/// ```
pub fn parse_review(line: &str) -> ParseResult<ReviewRecord> {
    let mut fields = line.splitn(3, ',').map(str::trim);

    let id = parse_id(next_field(&mut fields, "id")?)?;
    let rating = parse_stars(next_field(&mut fields, "rating")?)?;
    let comment = fields
        .next()
        .ok_or(ParseError::MissingField { field: "comment" })?
        .to_string();

    Ok(ReviewRecord {
        id,
        rating,
        comment,
    })
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> ParseResult<&'a str> {
    fields
        .next()
        .filter(|value| !value.is_empty())
        .ok_or(ParseError::MissingField { field })
}

fn parse_int(value: &str, field: &'static str) -> ParseResult<i32> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_id(value: &str) -> ParseResult<ProductId> {
    parse_int(value, "id").map(ProductId::new)
}

fn parse_stars(value: &str) -> ParseResult<Rating> {
    parse_int(value, "rating").map(Rating::from_stars)
}

fn parse_price(value: &str) -> ParseResult<Money> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidPrice(value.to_string()))
}

fn parse_date(value: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ParseError::InvalidDate(value.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
