//! Review history types and the decoders for their compact wire encodings.
//!
//! AnkiConnect reports reviews in two terse shapes:
//!
//! - `getReviewsOfCards` returns an object keyed by card ID *strings*, each
//!   value a list of review objects. [`ReviewHistory`] decodes it into a map
//!   keyed by `i64`, rejecting the whole payload if any key is not a base-10
//!   integer.
//! - `cardReviews` returns a list of 9-element integer arrays where position
//!   is the only signal of meaning. [`CardReview`] decodes one such array and
//!   rejects any other length.

use std::collections::HashMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Number of elements in a positional card review.
pub const CARD_REVIEW_FIELDS: usize = 9;

/// One review entry from `getReviewsOfCards`.
///
/// Fields missing from the server payload decode as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewEntry {
    /// Review ID (timestamp in milliseconds since epoch).
    pub id: i64,
    /// Update sequence number.
    pub usn: i64,
    /// Button pressed (1 = again ... 4 = easy).
    pub ease: i64,
    /// Interval after the review (negative = seconds, positive = days).
    #[serde(rename = "ivl")]
    pub interval: i64,
    /// Interval before the review.
    #[serde(rename = "lastIvl")]
    pub last_interval: i64,
    /// Ease factor after the review (2500 = 250%).
    pub factor: i64,
    /// Time spent answering in milliseconds.
    pub time: i64,
    /// Review type (0 = learning, 1 = review, 2 = relearn, 3 = cram).
    #[serde(rename = "type")]
    pub review_type: i64,
}

/// Review history of a set of cards, keyed by card ID.
///
/// Entries for each card keep the order the server returned them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<String, Vec<ReviewEntry>>",
    into = "HashMap<i64, Vec<ReviewEntry>>"
)]
pub struct ReviewHistory(HashMap<i64, Vec<ReviewEntry>>);

impl ReviewHistory {
    /// Decode a map keyed by stringified card IDs.
    ///
    /// Fails on the first key that is not a base-10 `i64`; no partial
    /// history is returned.
    pub fn from_raw(raw: HashMap<String, Vec<ReviewEntry>>) -> Result<Self, DecodeError> {
        let mut reviews = HashMap::with_capacity(raw.len());
        for (key, entries) in raw {
            let card_id = match key.parse::<i64>() {
                Ok(id) => id,
                Err(source) => return Err(DecodeError::InvalidCardId { key, source }),
            };
            reviews.insert(card_id, entries);
        }
        Ok(Self(reviews))
    }

    /// Unwrap into the underlying map.
    pub fn into_inner(self) -> HashMap<i64, Vec<ReviewEntry>> {
        self.0
    }
}

impl Deref for ReviewHistory {
    type Target = HashMap<i64, Vec<ReviewEntry>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<HashMap<String, Vec<ReviewEntry>>> for ReviewHistory {
    type Error = DecodeError;

    fn try_from(raw: HashMap<String, Vec<ReviewEntry>>) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<ReviewHistory> for HashMap<i64, Vec<ReviewEntry>> {
    fn from(history: ReviewHistory) -> Self {
        history.0
    }
}

impl IntoIterator for ReviewHistory {
    type Item = (i64, Vec<ReviewEntry>);
    type IntoIter = std::collections::hash_map::IntoIter<i64, Vec<ReviewEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One review event from `cardReviews`.
///
/// On the wire this is a positional array:
/// `[reviewTime, cardID, usn, buttonPressed, newInterval, previousInterval,
/// newFactor, reviewDuration, reviewType]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "[i64; 9]")]
pub struct CardReview {
    /// Review timestamp in milliseconds since epoch.
    pub review_time: i64,
    /// The reviewed card.
    pub card_id: i64,
    /// Update sequence number.
    pub usn: i64,
    /// Button pressed (1 = again ... 4 = easy).
    pub button_pressed: i64,
    /// Interval after the review.
    pub new_interval: i64,
    /// Interval before the review.
    pub previous_interval: i64,
    /// Ease factor after the review.
    pub new_factor: i64,
    /// Time spent answering in milliseconds.
    pub review_duration: i64,
    /// Review type (0 = learning, 1 = review, 2 = relearn, 3 = cram).
    pub review_type: i64,
}

impl CardReview {
    /// Decode a positional review array.
    pub fn from_fields(fields: &[i64]) -> Result<Self, DecodeError> {
        let fields: [i64; CARD_REVIEW_FIELDS] =
            fields.try_into().map_err(|_| DecodeError::FieldCount {
                actual: fields.len(),
                expected: CARD_REVIEW_FIELDS,
            })?;
        let [
            review_time,
            card_id,
            usn,
            button_pressed,
            new_interval,
            previous_interval,
            new_factor,
            review_duration,
            review_type,
        ] = fields;

        Ok(Self {
            review_time,
            card_id,
            usn,
            button_pressed,
            new_interval,
            previous_interval,
            new_factor,
            review_duration,
            review_type,
        })
    }

    /// Encode back into the positional wire order.
    pub fn to_fields(&self) -> [i64; CARD_REVIEW_FIELDS] {
        [
            self.review_time,
            self.card_id,
            self.usn,
            self.button_pressed,
            self.new_interval,
            self.previous_interval,
            self.new_factor,
            self.review_duration,
            self.review_type,
        ]
    }
}

impl TryFrom<Vec<i64>> for CardReview {
    type Error = DecodeError;

    fn try_from(fields: Vec<i64>) -> Result<Self, Self::Error> {
        Self::from_fields(&fields)
    }
}

impl From<CardReview> for [i64; CARD_REVIEW_FIELDS] {
    fn from(review: CardReview) -> Self {
        review.to_fields()
    }
}
