//! HTTP client for the card-database API.
//!
//! Implements the engine's [`CardLookup`] seam against the REST API:
//! `GET {base}/cards/{id}` for single-card resolution and
//! `GET {base}/sets` for the catalog listing. Calls are blocking; the
//! tracker is a single-threaded, human-paced tool.

use crate::config::Config;
use binder_engine::{card_id, CardLookup, CardName, Error, SetInfo};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;

/// Client for the card-database REST API.
#[derive(Debug, Clone)]
pub struct TcgClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct CardEnvelope {
    data: CardDto,
}

#[derive(Debug, Deserialize)]
struct CardDto {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SetsEnvelope {
    data: Vec<SetDto>,
}

#[derive(Debug, Deserialize)]
struct SetDto {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDto,
}

#[derive(Debug, Deserialize)]
struct ErrorDto {
    message: String,
}

impl TcgClient {
    /// Build a client from the tracker configuration.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Service(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn get(&self, url: &str) -> Result<Response, Error> {
        self.client
            .get(url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .map_err(|e| Error::Service(e.to_string()))
    }

    /// Map a non-success response to a service error, preferring the
    /// message in the API's error payload over the bare status line.
    fn service_error(response: Response) -> Error {
        let status = response.status();
        let message = response
            .json::<ErrorEnvelope>()
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| format!("service returned status {}", status));
        Error::Service(message)
    }
}

impl CardLookup for TcgClient {
    fn resolve(&self, set_code: &str, number: &str) -> Result<CardName, Error> {
        let id = card_id(set_code, number);
        let url = format!("{}/cards/{}", self.base_url, id);
        tracing::debug!(%url, "resolving card");

        let response = self.get(&url)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound { id });
        }
        if !response.status().is_success() {
            return Err(Self::service_error(response));
        }

        let envelope: CardEnvelope = response
            .json()
            .map_err(|e| Error::Service(e.to_string()))?;
        Ok(envelope.data.name)
    }

    fn list_sets(&self) -> Result<Vec<SetInfo>, Error> {
        let url = format!("{}/sets", self.base_url);
        tracing::debug!(%url, "listing sets");

        let response = self.get(&url)?;
        if !response.status().is_success() {
            return Err(Self::service_error(response));
        }

        let envelope: SetsEnvelope = response
            .json()
            .map_err(|e| Error::Service(e.to_string()))?;
        Ok(envelope
            .data
            .into_iter()
            .map(|set| SetInfo {
                code: set.id,
                name: set.name,
            })
            .collect())
    }
}
