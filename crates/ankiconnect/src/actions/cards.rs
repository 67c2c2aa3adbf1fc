//! Card-related AnkiConnect actions.
//!
//! [`CardActions::get()`] and [`CardActions::get_reviews()`] are two-step
//! operations: a `findCards` search followed by a lookup for exactly the IDs
//! it returned. The second request is never sent if the search fails.
//!
//! # Example
//!
//! ```no_run
//! use ankiconnect::AnkiClient;
//!
//! # async fn example() -> ankiconnect::Result<()> {
//! let client = AnkiClient::new()?;
//!
//! let cards = client.cards().get("deck:current").await?;
//! for card in &cards {
//!     println!("Card {} in deck {}", card.card_id, card.deck_name);
//! }
//!
//! let reviews = client.cards().get_reviews("deck:current").await?;
//! for (card_id, entries) in reviews.iter() {
//!     println!("Card {} has {} reviews", card_id, entries.len());
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::debug;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{CardInfo, ReviewHistory};

/// Provides access to card-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct FindCardsParams<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    query: &'a str,
}

#[derive(Serialize)]
struct CardsParams<'a> {
    cards: &'a [i64],
}

impl<'a> CardActions<'a> {
    /// Find cards matching a query.
    ///
    /// Returns card IDs in the order AnkiConnect reports them. The query uses
    /// Anki's search syntax, e.g. `deck:Japanese is:due`.
    pub async fn search(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findCards", FindCardsParams { query })
            .await
    }

    /// Get card records for the given IDs.
    pub async fn info(&self, card_ids: &[i64]) -> Result<Vec<CardInfo>> {
        self.client
            .invoke("cardsInfo", CardsParams { cards: card_ids })
            .await
    }

    /// Get the review history of the given cards.
    pub async fn reviews_of(&self, card_ids: &[i64]) -> Result<ReviewHistory> {
        self.client
            .invoke("getReviewsOfCards", CardsParams { cards: card_ids })
            .await
    }

    /// Search for cards and fetch a record for each match.
    ///
    /// Records come back in the order the search returned the IDs.
    ///
    /// # Errors
    ///
    /// Returns the search error unchanged if `findCards` fails, without
    /// issuing the `cardsInfo` request.
    pub async fn get(&self, query: &str) -> Result<Vec<CardInfo>> {
        let card_ids = self.search(query).await?;
        debug!(query, found = card_ids.len(), "fetching card info");
        self.info(&card_ids).await
    }

    /// Search for cards and fetch their review history.
    ///
    /// Requires an AnkiConnect release that supports `getReviewsOfCards`.
    ///
    /// # Errors
    ///
    /// Returns the search error unchanged if `findCards` fails. A review map
    /// with a key that is not a card ID fails the whole call with
    /// [`Error::Json`](crate::Error::Json).
    pub async fn get_reviews(&self, query: &str) -> Result<ReviewHistory> {
        let card_ids = self.search(query).await?;
        debug!(query, found = card_ids.len(), "fetching card reviews");
        self.reviews_of(&card_ids).await
    }
}
