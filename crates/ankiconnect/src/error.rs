//! Error types for the ankiconnect crate.
//!
//! Every failure is returned to the immediate caller; nothing is retried.
//! Errors fall into three groups:
//!
//! - Transport: [`Error::Http`], [`Error::ConnectionRefused`], [`Error::Json`]
//!   and [`Error::EmptyResponse`]. These all report
//!   [`StatusCode::INTERNAL_SERVER_ERROR`] from [`Error::status()`].
//! - Server-reported: [`Error::AnkiConnect`] carries the message AnkiConnect
//!   put in the `error` field and reports [`StatusCode::BAD_REQUEST`].
//! - Decode format errors ([`DecodeError`]) raised while decoding the compact
//!   review encodings. They surface through [`Error::Json`] with their message
//!   intact.
//!
//! # Example
//!
//! ```no_run
//! use ankiconnect::{AnkiClient, Error};
//!
//! # async fn example() -> ankiconnect::Result<()> {
//! let client = AnkiClient::new()?;
//!
//! match client.decks().get_all().await {
//!     Ok(decks) => println!("Found {} decks", decks.len()),
//!     Err(Error::ConnectionRefused) => {
//!         eprintln!("Please start Anki with AnkiConnect installed");
//!     }
//!     Err(e) => eprintln!("{} ({})", e, e.status()),
//! }
//! # Ok(())
//! # }
//! ```

use std::num::ParseIntError;

use reqwest::StatusCode;
use thiserror::Error;

/// The error type for AnkiConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Covers timeouts, non-success HTTP statuses and failures while
    /// building the underlying HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// AnkiConnect returned an error message.
    ///
    /// The string is the server's message, unchanged. Common messages
    /// include "deck was not found" and "collection is not available".
    #[error("AnkiConnect error: {0}")]
    AnkiConnect(String),

    /// Response carried neither a result nor an error.
    #[error("AnkiConnect returned empty response")]
    EmptyResponse,

    /// The response body or its result could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection refused - Anki is likely not running.
    #[error("Could not connect to Anki. Is Anki running with AnkiConnect installed?")]
    ConnectionRefused,
}

impl Error {
    /// The caller-facing status of this error.
    ///
    /// Server-reported errors map to `400 Bad Request`; everything else is a
    /// generic `500 Internal Server Error`.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::AnkiConnect(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message AnkiConnect reported, if this is a server-reported error.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::AnkiConnect(msg) => Some(msg),
            _ => None,
        }
    }
}

/// A violation of one of the compact review encodings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A review-history key was not a base-10 card ID.
    #[error("invalid card id key {key:?}: {source}")]
    InvalidCardId {
        /// The offending key.
        key: String,
        /// Why it failed to parse.
        source: ParseIntError,
    },

    /// A positional card review had the wrong number of elements.
    #[error("unexpected number of fields in card review: got {actual}, expected {expected}")]
    FieldCount {
        /// Elements present in the array.
        actual: usize,
        /// Elements the encoding requires.
        expected: usize,
    },
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
