//! Deck-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use chrono::{Duration, Utc};
//! use ankiconnect::AnkiClient;
//!
//! # async fn example() -> ankiconnect::Result<()> {
//! let client = AnkiClient::new()?;
//!
//! client.decks().create("Japanese::Tokyo").await?;
//! println!("Decks: {:?}", client.decks().get_all().await?);
//!
//! let since = Utc::now() - Duration::days(7);
//! let reviews = client.decks().get_reviews_after("Japanese::Tokyo", since).await?;
//! println!("{} reviews this week", reviews.len());
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{CardReview, DeckStats};

/// Provides access to deck-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct CreateDeckParams<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    deck: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteDecksParams<'a> {
    decks: &'a [&'a str],
    cards_too: bool,
}

#[derive(Serialize)]
struct GetDeckStatsParams<'a> {
    decks: &'a [&'a str],
}

#[derive(Serialize)]
struct CardReviewsParams<'a> {
    deck: &'a str,
    #[serde(rename = "startID")]
    start_id: i64,
}

impl<'a> DeckActions<'a> {
    /// Get all deck names.
    pub async fn get_all(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("deckNames").await
    }

    /// Create a new deck.
    ///
    /// Creating a deck that already exists is not an error. The ID AnkiConnect
    /// returns for the deck is discarded.
    pub async fn create(&self, name: &str) -> Result<()> {
        self.client
            .invoke_void("createDeck", CreateDeckParams { deck: name })
            .await
    }

    /// Delete a deck together with all of its cards.
    pub async fn delete(&self, name: &str) -> Result<()> {
        let decks = [name];
        self.client
            .invoke_void(
                "deleteDecks",
                DeleteDecksParams {
                    decks: &decks,
                    cards_too: true,
                },
            )
            .await
    }

    /// Get statistics for the named decks.
    ///
    /// Returns a map from deck ID (as string) to deck statistics.
    pub async fn stats(&self, names: &[&str]) -> Result<HashMap<String, DeckStats>> {
        self.client
            .invoke("getDeckStats", GetDeckStatsParams { decks: names })
            .await
    }

    /// Get every review in a deck made after `start`.
    ///
    /// `start` is sent as milliseconds since the Unix epoch, which is how
    /// AnkiConnect identifies reviews.
    pub async fn get_reviews_after(
        &self,
        name: &str,
        start: DateTime<Utc>,
    ) -> Result<Vec<CardReview>> {
        self.client
            .invoke(
                "cardReviews",
                CardReviewsParams {
                    deck: name,
                    start_id: start.timestamp_millis(),
                },
            )
            .await
    }
}
