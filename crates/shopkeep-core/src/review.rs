//! # Review
//!
//! A consumer review: one rating plus a free-text comment.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::rating::Rating;

/// An immutable rating/comment pair attached to one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    rating: Rating,
    comment: String,
}

impl Review {
    pub fn new(rating: Rating, comment: impl Into<String>) -> Self {
        Review {
            rating,
            comment: comment.into(),
        }
    }

    #[inline]
    pub fn rating(&self) -> Rating {
        self.rating
    }

    #[inline]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Natural review order: lowest rating first.
    ///
    /// Comments are ignored, so pair this with a stable sort to keep equal
    /// ratings in submission order:
    ///
    /// ```rust
    /// use shopkeep_core::{Rating, Review};
    ///
    /// let mut reviews = vec![
    ///     Review::new(Rating::FourStar, "a"),
    ///     Review::new(Rating::TwoStar, "b"),
    ///     Review::new(Rating::FourStar, "c"),
    /// ];
    /// reviews.sort_by(Review::by_rating);
    /// let order: Vec<_> = reviews.iter().map(Review::comment).collect();
    /// assert_eq!(order, ["b", "a", "c"]);
    /// ```
    pub fn by_rating(a: &Review, b: &Review) -> Ordering {
        a.rating.cmp(&b.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let review = Review::new(Rating::FiveStar, "Perfect tea");
        assert_eq!(review.rating(), Rating::FiveStar);
        assert_eq!(review.comment(), "Perfect tea");
    }

    #[test]
    fn test_by_rating_ignores_comment() {
        let low = Review::new(Rating::OneStar, "zzz");
        let high = Review::new(Rating::FiveStar, "aaa");
        assert_eq!(Review::by_rating(&low, &high), Ordering::Less);
        assert_eq!(
            Review::by_rating(&low, &Review::new(Rating::OneStar, "other")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_stable_sort_keeps_submission_order_for_ties() {
        let mut reviews = vec![
            Review::new(Rating::FourStar, "a"),
            Review::new(Rating::TwoStar, "b"),
            Review::new(Rating::FiveStar, "c"),
            Review::new(Rating::TwoStar, "d"),
        ];
        reviews.sort_by(Review::by_rating);
        let comments: Vec<_> = reviews.iter().map(Review::comment).collect();
        assert_eq!(comments, ["b", "d", "a", "c"]);
    }
}
