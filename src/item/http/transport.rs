use std::time::Duration;

use log::debug;
use reqwest::{
    blocking::Client,
    header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT},
};

use crate::{error::SeedError, review::payload::ReviewPayload};

const ORIGIN_VALUE: &str = "http://localhost:3000";
const REFERER_VALUE: &str = "http://localhost:3000/";
const USER_AGENT_VALUE: &str = "seed-script/1.0";

/// Status and body of the endpoint's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Submits one payload and returns the raw answer.
///
/// Any status is a successful send; only network level failures are errors.
pub trait ReviewTransport {
    fn send(&self, payload: &ReviewPayload) -> Result<TransportResponse, SeedError>;
}

impl<T: ReviewTransport + ?Sized> ReviewTransport for &T {
    fn send(&self, payload: &ReviewPayload) -> Result<TransportResponse, SeedError> {
        (**self).send(payload)
    }
}

/// Blocking HTTP transport posting payloads as JSON to a fixed URL.
///
/// Every request carries `Accept: */*`, `Content-Type: application/json`
/// and fixed `Origin`, `Referer` and `User-Agent` headers.
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ORIGIN, HeaderValue::from_static(ORIGIN_VALUE));
        headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|error| SeedError::Transport(error.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl ReviewTransport for HttpTransport {
    fn send(&self, payload: &ReviewPayload) -> Result<TransportResponse, SeedError> {
        debug!("POST {}", self.url);

        // `json` also sets `Content-Type: application/json`
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .map_err(|error| SeedError::Transport(error.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|error| SeedError::Transport(error.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}
