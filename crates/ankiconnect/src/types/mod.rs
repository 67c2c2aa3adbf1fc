//! Domain types for AnkiConnect.
//!
//! Every value here is a snapshot decoded from a single response.

mod card;
mod deck;
mod review;

pub use card::{CardInfo, FieldData};
pub use deck::DeckStats;
pub use review::{CARD_REVIEW_FIELDS, CardReview, ReviewEntry, ReviewHistory};
