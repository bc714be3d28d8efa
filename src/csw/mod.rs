//! CSW (Catalogue Service for the Web) client.
//!
//! Only what the checks need: POST a `GetRecords` body to the catalogue
//! endpoint and keep the status, headers and body of the reply.
pub mod queries;
pub mod response;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_TYPE, ORIGIN};
use reqwest::{Client as HttpClient, StatusCode};
use thiserror::Error;
use url::Url;

use self::response::{Document, XmlError};

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Failed to build the HTTP client: {err}")]
    ClientBuildingError { err: Arc<reqwest::Error> },
    #[error("No response from {url}: {err}")]
    ResponseError { url: Url, err: Arc<reqwest::Error> },
    #[error("Failed to read the response body from {url}: {err}")]
    BodyError { url: Url, err: Arc<reqwest::Error> },
}

/// What the catalogue answered.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Reply {
    /// # Errors
    ///
    /// Will return an error if the body is not well formed XML.
    pub fn document(&self) -> Result<Document<'_>, XmlError> {
        Document::parse(&self.body)
    }

    /// A header value, when present and visible ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    endpoint: Url,
    client: HttpClient,
}

impl Client {
    /// # Errors
    ///
    /// Will return an error if the HTTP client can not be built.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, Error> {
        let client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::ClientBuildingError { err: e.into() })?;

        Ok(Self { endpoint, client })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POSTs a `GetRecords` request. The `origin`, when given, is sent in
    /// the `Origin` header to exercise the CORS support of the service.
    ///
    /// Any HTTP status is a reply: judging it is up to the caller.
    ///
    /// # Errors
    ///
    /// Will return an error if there is no response (connection refused,
    /// timeout, ...) or the body can not be read.
    pub async fn get_records(&self, body: &str, origin: Option<&str>) -> Result<Reply, Error> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, queries::CONTENT_TYPE)
            .body(body.to_owned());

        if let Some(origin) = origin {
            request = request.header(ORIGIN, origin);
        }

        tracing::debug!(endpoint = %self.endpoint, "POST GetRecords");

        let response = request.send().await.map_err(|e| Error::ResponseError {
            url: self.endpoint.clone(),
            err: e.into(),
        })?;

        let status = response.status();
        let headers = response.headers().clone();

        let body = response.text().await.map_err(|e| Error::BodyError {
            url: self.endpoint.clone(),
            err: e.into(),
        })?;

        tracing::debug!(endpoint = %self.endpoint, %status, bytes = body.len(), "GetRecords reply");

        Ok(Reply { status, headers, body })
    }
}
