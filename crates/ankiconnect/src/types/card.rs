//! Card-related types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The content of one note field as shown on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldData {
    /// The field value (HTML).
    pub value: String,
    /// The field's position in the note type.
    pub order: i64,
}

/// A snapshot of a card as returned by `cardsInfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// The card ID. Zero when AnkiConnect does not know the requested card.
    #[serde(default)]
    pub card_id: i64,
    /// The card's answer side (HTML).
    #[serde(default)]
    pub answer: String,
    /// The card's question side (HTML).
    #[serde(default)]
    pub question: String,
    /// The deck this card belongs to.
    #[serde(default)]
    pub deck_name: String,
    /// The note type (model) name.
    #[serde(default)]
    pub model_name: String,
    /// Index of the sort field in the note type.
    #[serde(default)]
    pub field_order: i64,
    /// Field values from the note, keyed by field name.
    #[serde(default)]
    pub fields: HashMap<String, FieldData>,
    /// Styling of the note type.
    #[serde(default)]
    pub css: String,
    /// Current interval (negative = seconds, positive = days).
    #[serde(default)]
    pub interval: i64,
    /// The note ID this card was generated from.
    #[serde(default, alias = "noteId")]
    pub note: i64,
    /// Template ordinal within the note type.
    #[serde(default)]
    pub ord: i64,
    /// The card type (0 = new, 1 = learning, 2 = review, 3 = relearning).
    #[serde(default, rename = "type")]
    pub card_type: i64,
    /// The queue the card is in (-1 = suspended, -2 = sibling buried, -3 = manually buried,
    /// 0 = new, 1 = learning, 2 = review, 3 = day learn, 4 = preview).
    #[serde(default)]
    pub queue: i64,
    /// Due position/date (meaning depends on card type).
    #[serde(default)]
    pub due: i64,
    /// Number of reviews.
    #[serde(default)]
    pub reps: i64,
    /// Number of lapses.
    #[serde(default)]
    pub lapses: i64,
    /// Number of reviews left today.
    #[serde(default)]
    pub left: i64,
    /// Last modification timestamp.
    #[serde(default, rename = "mod")]
    pub mod_time: i64,
}
