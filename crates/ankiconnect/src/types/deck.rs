//! Deck-related types.

use serde::{Deserialize, Serialize};

/// Statistics for a deck.
///
/// The deck ID is the key of the map returned by
/// [`DeckActions::stats()`](crate::actions::DeckActions::stats), not a field here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckStats {
    /// The deck name.
    pub name: String,
    /// Number of new cards.
    #[serde(default, alias = "newCount")]
    pub new_count: i64,
    /// Number of cards in learning.
    #[serde(default, alias = "learnCount")]
    pub learn_count: i64,
    /// Number of cards due for review.
    #[serde(default, alias = "reviewCount")]
    pub review_count: i64,
    /// Total number of cards in the deck.
    #[serde(default, alias = "totalInDeck")]
    pub total_in_deck: i64,
}
