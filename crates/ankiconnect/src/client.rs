//! The AnkiConnect client and builder.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::actions::{CardActions, DeckActions};
use crate::error::{Error, Result};
use crate::request::{AnkiRequest, AnkiResponse};

/// Default URL for AnkiConnect.
const DEFAULT_URL: &str = "http://127.0.0.1:8765";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The main client for interacting with AnkiConnect.
///
/// The client holds no state beyond its configuration, so clones are cheap
/// and calls from independent tasks do not interfere with each other.
///
/// # Example
///
/// ```no_run
/// use ankiconnect::AnkiClient;
///
/// # async fn example() -> ankiconnect::Result<()> {
/// let client = AnkiClient::new()?;
///
/// let decks = client.decks().get_all().await?;
/// println!("Decks: {:?}", decks);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AnkiClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `http://127.0.0.1:8765` with a 30 second timeout.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The AnkiConnect URL this client posts to.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Access card operations.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// Access deck operations.
    pub fn decks(&self) -> DeckActions<'_> {
        DeckActions { client: self }
    }

    /// Execute an action without parameters.
    pub(crate) async fn invoke_without_params<R>(&self, action: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = AnkiRequest::<()>::without_params(action, self.api_key.as_deref());
        let result = self.send_request(&request).await?;
        decode_result(result)
    }

    /// Execute an action with parameters.
    pub(crate) async fn invoke<P, R>(&self, action: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = AnkiRequest::new(action, params, self.api_key.as_deref());
        let result = self.send_request(&request).await?;
        decode_result(result)
    }

    /// Execute an action whose result carries no meaning for the caller.
    ///
    /// Any response without an error is a success, including a null result.
    pub(crate) async fn invoke_void<P>(&self, action: &str, params: P) -> Result<()>
    where
        P: Serialize,
    {
        let request = AnkiRequest::new(action, params, self.api_key.as_deref());
        self.send_request(&request).await.map(|_| ())
    }

    /// Send a request to AnkiConnect and return its raw result.
    ///
    /// A non-null `error` in the envelope becomes [`Error::AnkiConnect`]
    /// whatever the result holds.
    async fn send_request<T>(
        &self,
        request: &AnkiRequest<'_, T>,
    ) -> Result<Option<serde_json::Value>>
    where
        T: Serialize,
    {
        debug!(action = request.action, url = %self.base_url, "sending AnkiConnect request");

        let response = self
            .http_client
            .post(&self.base_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::ConnectionRefused
                } else {
                    Error::Http(e)
                }
            })?
            .error_for_status()?;

        let body = response.bytes().await?;
        let anki_response: AnkiResponse = serde_json::from_slice(&body)?;

        match anki_response.error {
            Some(err) => {
                warn!(action = request.action, error = %err, "AnkiConnect reported an error");
                Err(Error::AnkiConnect(err))
            }
            None => Ok(anki_response.result),
        }
    }
}

/// Decode a raw result into the caller's type.
fn decode_result<R>(result: Option<serde_json::Value>) -> Result<R>
where
    R: DeserializeOwned,
{
    match result {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Err(Error::EmptyResponse),
    }
}

/// Builder for creating a customized [`AnkiClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ankiconnect::AnkiClient;
///
/// # fn example() -> ankiconnect::Result<()> {
/// let client = AnkiClient::builder()
///     .url("http://localhost:8765")
///     .api_key("my-secret-key")
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the AnkiConnect URL.
    ///
    /// Defaults to `http://127.0.0.1:8765`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key for authentication.
    ///
    /// Only required if AnkiConnect is configured to require an API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AnkiClient> {
        let http_client = Client::builder().timeout(self.timeout).build()?;

        Ok(AnkiClient {
            http_client,
            base_url: self.base_url,
            api_key: self.api_key,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
