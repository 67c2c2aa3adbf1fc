//! A typed async client for the AnkiConnect card, deck and review APIs.
//!
//! AnkiConnect is an Anki add-on that exposes a single JSON-over-HTTP
//! endpoint. Every call posts `{"action", "version": 6, "params"}` and reads
//! back `{"result", "error"}`. This crate sends those envelopes and decodes the
//! results into typed records, including the compact review encodings used by
//! `getReviewsOfCards` and `cardReviews`.
//!
//! # Quick Start
//!
//! ```no_run
//! use ankiconnect::AnkiClient;
//!
//! # async fn example() -> ankiconnect::Result<()> {
//! // Connects to http://127.0.0.1:8765 by default
//! let client = AnkiClient::new()?;
//!
//! let decks = client.decks().get_all().await?;
//! println!("Decks: {:?}", decks);
//!
//! let cards = client.cards().get("deck:Default is:due").await?;
//! println!("{} cards due", cards.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Action Groups
//!
//! - [`AnkiClient::cards()`] - search cards, fetch card records and review history
//! - [`AnkiClient::decks()`] - list, create and delete decks, deck statistics and reviews
//!
//! # Logging
//!
//! Requests and server-reported errors are emitted as [`tracing`] events.
//! Install a subscriber in the application to see them.
//!
//! # Requirements
//!
//! - Anki must be running with the [AnkiConnect](https://ankiweb.net/shared/info/2055492159) add-on installed
//! - By default, the client connects to `http://127.0.0.1:8765`

pub mod actions;
pub mod client;
pub mod error;
mod request;
pub mod types;

pub use client::{AnkiClient, ClientBuilder};
pub use error::{DecodeError, Error, Result};
pub use types::{CardInfo, CardReview, DeckStats, FieldData, ReviewEntry, ReviewHistory};
