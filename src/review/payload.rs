use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::title::generate_title;

/// Class assumed when the label is absent, blank or not an integer.
pub const DEFAULT_CLASS: i64 = 1;

/// Default range of synthetic product ids.
pub const DEFAULT_PRODUCT_IDS: RangeInclusive<i64> = 1..=10;

const NEGATIVE_RATINGS: RangeInclusive<u8> = 1..=2;
const POSITIVE_RATINGS: RangeInclusive<u8> = 3..=5;

/// The JSON record submitted for each review row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub review_title: String,
    pub review_body: String,
    /// Integer product id, sent as a string
    pub product_id: String,
    pub review_rating: u8,
}

/// A payload together with the 1-based position of the row it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRecord {
    pub row: usize,
    pub payload: ReviewPayload,
}

/// Parses a sentiment label, falling back to [`DEFAULT_CLASS`].
///
/// ```
/// use review_seeder::review::payload::parse_class;
///
/// assert_eq!(parse_class(Some(" 0 ")), 0);
/// assert_eq!(parse_class(Some("positive")), 1);
/// assert_eq!(parse_class(None), 1);
/// ```
pub fn parse_class(class: Option<&str>) -> i64 {
    class
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .and_then(|class| class.parse().ok())
        .unwrap_or(DEFAULT_CLASS)
}

/// Picks a rating of 1-2 for class 0 and 3-5 for anything else.
pub fn rating_for_class<R: Rng + ?Sized>(class: i64, rng: &mut R) -> u8 {
    if class == 0 {
        rng.random_range(NEGATIVE_RATINGS)
    } else {
        rng.random_range(POSITIVE_RATINGS)
    }
}

/// Builds the payload for one review.
///
/// `product_ids` must not be empty.
pub fn make_payload<R: Rng + ?Sized>(
    review: &str,
    class: Option<&str>,
    product_ids: &RangeInclusive<i64>,
    title_max_len: usize,
    rng: &mut R,
) -> ReviewPayload {
    let body = review.trim();
    let rating = rating_for_class(parse_class(class), rng);
    let product_id = rng.random_range(product_ids.clone());

    ReviewPayload {
        review_title: generate_title(body, title_max_len),
        review_body: body.to_string(),
        product_id: product_id.to_string(),
        review_rating: rating,
    }
}
