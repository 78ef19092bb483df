//! # Rating
//!
//! Discrete star ratings and the [`Rateable`] trait.
//!
//! ## Levels
//! ```text
//! ┌──────────────┬─────────┬────────────┐
//! │ Variant      │ Ordinal │ Display    │
//! ├──────────────┼─────────┼────────────┤
//! │ NotRated     │    0    │ ☆☆☆☆☆      │
//! │ OneStar      │    1    │ ★☆☆☆☆      │
//! │ TwoStar      │    2    │ ★★☆☆☆      │
//! │ ThreeStar    │    3    │ ★★★☆☆      │
//! │ FourStar     │    4    │ ★★★★☆      │
//! │ FiveStar     │    5    │ ★★★★★      │
//! └──────────────┴─────────┴────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered star rating. Ordering follows the ordinal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// No reviews yet, or a score that could not be mapped.
    #[default]
    NotRated,
    OneStar,
    TwoStar,
    ThreeStar,
    FourStar,
    FiveStar,
}

impl Rating {
    /// Every level, lowest first. Indexed by ordinal.
    pub const ALL: [Rating; 6] = [
        Rating::NotRated,
        Rating::OneStar,
        Rating::TwoStar,
        Rating::ThreeStar,
        Rating::FourStar,
        Rating::FiveStar,
    ];

    /// Highest valid ordinal.
    pub const MAX_STARS: i32 = 5;

    /// Converts a star count to a rating.
    ///
    /// Values outside `0..=5` become [`Rating::NotRated`]; this is a silent
    /// clamp, not an error.
    ///
    /// ## Example
    /// ```rust
    /// use shopkeep_core::Rating;
    ///
    /// assert_eq!(Rating::from_stars(4), Rating::FourStar);
    /// assert_eq!(Rating::from_stars(9), Rating::NotRated);
    /// assert_eq!(Rating::from_stars(-1), Rating::NotRated);
    /// ```
    pub fn from_stars(stars: i32) -> Rating {
        if (0..=Self::MAX_STARS).contains(&stars) {
            Self::ALL[stars as usize]
        } else {
            Rating::NotRated
        }
    }

    /// Position in the scale, `0` for [`Rating::NotRated`].
    #[inline]
    pub const fn ordinal(&self) -> i32 {
        *self as i32
    }

    /// Five-glyph display symbol, filled stars first.
    pub const fn stars(&self) -> &'static str {
        match self {
            Rating::NotRated => "☆☆☆☆☆",
            Rating::OneStar => "★☆☆☆☆",
            Rating::TwoStar => "★★☆☆☆",
            Rating::ThreeStar => "★★★☆☆",
            Rating::FourStar => "★★★★☆",
            Rating::FiveStar => "★★★★★",
        }
    }

    /// Mean of the given ratings' ordinals, rounded half-up.
    ///
    /// An empty input has no mean and yields [`Rating::NotRated`].
    ///
    /// ## Worked Example
    /// ```text
    /// ordinals: 4, 2, 4, 4, 5, 3
    /// sum = 22, count = 6, mean = 3.67
    /// (2 × 22 + 6) / (2 × 6) = 50 / 12 = 4  → FourStar
    /// ```
    ///
    /// Integer math keeps exact midpoints exact: a mean of 2.5 becomes 3.
    pub fn average<I>(ratings: I) -> Rating
    where
        I: IntoIterator<Item = Rating>,
    {
        let (sum, count) = ratings
            .into_iter()
            .fold((0i64, 0i64), |(sum, count), r| (sum + r.ordinal() as i64, count + 1));

        if count == 0 {
            return Rating::NotRated;
        }

        // ordinals are non-negative, so this is floor(mean + 0.5)
        let rounded = (2 * sum + count) / (2 * count);
        Rating::from_stars(rounded as i32)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stars())
    }
}

// =============================================================================
// Rateable
// =============================================================================

/// Something that carries a [`Rating`] and can produce a re-rated copy.
///
/// Implementors are value types: `apply_rating` never mutates `self`.
pub trait Rateable: Sized {
    /// Current rating.
    fn rating(&self) -> Rating;

    /// Returns a copy of `self` carrying `rating`.
    fn apply_rating(&self, rating: Rating) -> Self;

    /// Like [`apply_rating`](Rateable::apply_rating), converting a raw star
    /// count with [`Rating::from_stars`].
    fn apply_stars(&self, stars: i32) -> Self {
        self.apply_rating(Rating::from_stars(stars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stars_maps_each_level() {
        for (i, rating) in Rating::ALL.iter().enumerate() {
            assert_eq!(Rating::from_stars(i as i32), *rating);
            assert_eq!(rating.ordinal(), i as i32);
        }
    }

    #[test]
    fn test_from_stars_clamps_out_of_range() {
        assert_eq!(Rating::from_stars(6), Rating::NotRated);
        assert_eq!(Rating::from_stars(-3), Rating::NotRated);
        assert_eq!(Rating::from_stars(i32::MAX), Rating::NotRated);
        assert_eq!(Rating::from_stars(i32::MIN), Rating::NotRated);
    }

    #[test]
    fn test_ordering_follows_ordinal() {
        assert!(Rating::NotRated < Rating::OneStar);
        assert!(Rating::FourStar < Rating::FiveStar);
        assert_eq!(Rating::default(), Rating::NotRated);
    }

    #[test]
    fn test_stars_display() {
        assert_eq!(Rating::ThreeStar.stars(), "★★★☆☆");
        assert_eq!(Rating::FiveStar.to_string(), "★★★★★");
        assert_eq!(Rating::NotRated.to_string(), "☆☆☆☆☆");
    }

    #[test]
    fn test_symbols_are_unique() {
        let mut symbols: Vec<_> = Rating::ALL.iter().map(Rating::stars).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), Rating::ALL.len());
    }

    #[test]
    fn test_average_of_tea_reviews() {
        let ratings = [4, 2, 4, 4, 5, 3].map(Rating::from_stars);
        assert_eq!(Rating::average(ratings), Rating::FourStar);
    }

    #[test]
    fn test_average_rounds_midpoint_up() {
        let ratings = [Rating::TwoStar, Rating::ThreeStar];
        assert_eq!(Rating::average(ratings), Rating::ThreeStar);

        let ratings = [Rating::NotRated, Rating::OneStar];
        assert_eq!(Rating::average(ratings), Rating::OneStar);
    }

    #[test]
    fn test_average_of_nothing_is_not_rated() {
        assert_eq!(Rating::average(Vec::new()), Rating::NotRated);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Rating::FourStar).unwrap();
        assert_eq!(json, "\"four_star\"");
    }
}
