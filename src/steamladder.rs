/*
    Thin wrapper around the steamladder.com REST API.
    Every call is a single request, nothing is cached or retried.
*/

use reqwest::header::{HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::settings::Settings;

pub mod ladder;
pub mod profile;
pub mod timestamp;

/// Public service root, used when no other base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://steamladder.com/api/v1/";

const USER_AGENT: &str = concat!("steamladder-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum SteamLadderError {
    #[error("The API key cannot be used as a header value")]
    InvalidToken(#[from] InvalidHeaderValue),
    #[error("Something happened while requesting from steamladder: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("steamladder responded with status {status}")]
    Status { status: StatusCode, body: String },
    #[error("Could not parse the steamladder response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SteamLadderError {
    /// HTTP status attached to the error, if there is one.
    ///
    /// Known codes are 401 (bad token), 404 (unknown profile or ladder) and 429 (rate limited).
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SteamLadderError::Status { status, .. } => Some(*status),
            SteamLadderError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, SteamLadderError>;

/// Authenticated steamladder client.
///
/// Cloning is cheap, clones share the connection pool of the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    authorization: HeaderValue,
}

impl Client {
    /// Creates a client for the public service root.
    pub fn new(api_key: &str) -> ApiResult<Client> {
        Client::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> ApiResult<Client> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Client::with_http_client(api_key, base_url, http)
    }

    /// Creates a client on top of an existing transport.
    ///
    /// The `Authorization` header is attached to every request this client issues,
    /// so the transport does not need to be configured with it.
    pub fn with_http_client(
        api_key: &str,
        base_url: &str,
        http: reqwest::Client,
    ) -> ApiResult<Client> {
        let mut authorization = HeaderValue::from_str(&format!("Token {}", api_key))?;
        authorization.set_sensitive(true);

        Ok(Client {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization,
        })
    }

    pub fn from_settings(settings: &Settings) -> ApiResult<Client> {
        Client::with_base_url(&settings.api_key, &settings.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `profile/76561197960287930/`
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(Method::GET, endpoint).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(Method::POST, endpoint).await
    }

    async fn request<T: DeserializeOwned>(&self, method: Method, endpoint: &str) -> ApiResult<T> {
        tracing::info!("Requesting {} from endpoint {}", method, endpoint);

        let response = self
            .http
            .request(method, &self.url(endpoint))
            .header(AUTHORIZATION, self.authorization.clone())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("steamladder responded with {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Request to {} failed with status {}", endpoint, status);
            return Err(SteamLadderError::Status { status, body });
        }

        let body = response.text().await?;
        decode(&body)
    }
}

/// Parses a response body into the expected record.
///
/// A `null` body fails like any other shape mismatch.
pub fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str::<T>(body).map_err(|e| {
        tracing::error!("Could not parse response: {}", e);
        SteamLadderError::Decode(e)
    })
}
