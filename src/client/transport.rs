use std::time::Duration;

use reqwest::Url;

use crate::error::{CatalogError, CatalogResult};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Raw HTTP response handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Contract implemented by any network backend.
///
/// Implementations report only transport-level failures as errors; any
/// response that arrived, whatever its status, is returned as `Ok`.
pub trait HttpTransport {
    fn get(&self, url: &Url) -> CatalogResult<HttpResponse>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get(&self, url: &Url) -> CatalogResult<HttpResponse> {
        (**self).get(url)
    }
}

/// Blocking reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> CatalogResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Transport(format!("reqwest client error: {e}")))?;
        Ok(Self { client })
    }

    pub fn with_default_timeout() -> CatalogResult<Self> {
        Self::new(DEFAULT_REQUEST_TIMEOUT)
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &Url) -> CatalogResult<HttpResponse> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| CatalogError::Transport(format!("failed to read body: {e}")))?;
        Ok(HttpResponse { status, body })
    }
}
