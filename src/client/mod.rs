//! Catalog endpoint client.
//!
//! Every operation resolves to an [`AsyncResult`]: transport, status and
//! body failures are logged and flattened into a failure message instead of
//! being returned as errors.

mod models;
mod transport;

pub use models::{CatalogStats, NamedCount, ProductSummary, RecommendationList, SearchResults};
pub use transport::{DEFAULT_REQUEST_TIMEOUT, HttpResponse, HttpTransport, ReqwestTransport};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{CatalogError, CatalogResult};

pub const RECOMMENDATIONS_PATH: &str = "/api/recommendations";
pub const SEARCH_PATH: &str = "/api/search";
pub const STATS_PATH: &str = "/api/stats";
pub const DEFAULT_SEARCH_LIMIT: u32 = 12;

const UNKNOWN_FAILURE: &str = "unknown failure";

/// Fields every endpoint body may carry regardless of payload.
#[derive(Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<Value>,
}

/// Uniform success/failure envelope of every client operation.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncResult<T> {
    Success(T),
    Failure { error_message: String },
}

impl<T> AsyncResult<T> {
    #[must_use]
    pub fn success(data: T) -> Self {
        Self::Success(data)
    }

    /// Builds a failure; an empty message is replaced so failures always
    /// carry readable text.
    #[must_use]
    pub fn failure(error_message: impl Into<String>) -> Self {
        let error_message = error_message.into();
        let error_message = if error_message.trim().is_empty() {
            UNKNOWN_FAILURE.to_owned()
        } else {
            error_message
        };
        Self::Failure { error_message }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error_message } => Some(error_message),
        }
    }

    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AsyncResult<U> {
        match self {
            Self::Success(data) => AsyncResult::Success(f(data)),
            Self::Failure { error_message } => AsyncResult::Failure { error_message },
        }
    }

    /// Flattens an internal result, logging the failure cause.
    pub fn from_result(operation: &str, result: CatalogResult<T>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => {
                error!(operation, error = %err, "catalog request failed");
                Self::failure(format!("{operation} failed: {err}"))
            }
        }
    }
}

impl<T: Serialize> Serialize for AsyncResult<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AsyncResult", 3)?;
        state.serialize_field("success", &self.is_success())?;
        state.serialize_field("data", &self.data())?;
        state.serialize_field("errorMessage", &self.error_message())?;
        state.end()
    }
}

/// Client for the recommendation, search and stats endpoints.
///
/// Calls are independent: nothing is deduplicated, cancelled or serialized.
/// Callers that need at-most-one-in-flight semantics coordinate themselves.
#[derive(Debug, Clone)]
pub struct DataClient<T: HttpTransport> {
    transport: T,
    base_url: Url,
}

impl DataClient<ReqwestTransport> {
    pub fn with_default_transport(base_url: &str) -> CatalogResult<Self> {
        Self::new(ReqwestTransport::with_default_timeout()?, base_url)
    }
}

impl<T: HttpTransport> DataClient<T> {
    pub fn new(transport: T, base_url: &str) -> CatalogResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CatalogError::InvalidConfig(format!("invalid base url `{base_url}`: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidConfig(format!(
                "base url `{base_url}` cannot carry a path"
            )));
        }
        Ok(Self {
            transport,
            base_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn recommendations_url(&self, product_id: &str) -> CatalogResult<Url> {
        let mut url = self.endpoint(RECOMMENDATIONS_PATH)?;
        url.path_segments_mut()
            .map_err(|()| {
                CatalogError::InvalidConfig("base url cannot carry path segments".to_owned())
            })?
            .pop_if_empty()
            .push(product_id);
        Ok(url)
    }

    pub fn search_url(&self, query: &str, limit: u32) -> CatalogResult<Url> {
        let mut url = self.endpoint(SEARCH_PATH)?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    pub fn fetch_recommendations(&self, product_id: &str) -> AsyncResult<RecommendationList> {
        let result = self
            .recommendations_url(product_id)
            .and_then(|url| self.get_json(&url));
        AsyncResult::from_result("fetching recommendations", result)
    }

    pub fn search_products(&self, query: &str, limit: u32) -> AsyncResult<SearchResults> {
        let result = self
            .search_url(query, limit)
            .and_then(|url| self.get_json(&url));
        AsyncResult::from_result("search", result)
    }

    /// Searches with [`DEFAULT_SEARCH_LIMIT`].
    pub fn search_products_default(&self, query: &str) -> AsyncResult<SearchResults> {
        self.search_products(query, DEFAULT_SEARCH_LIMIT)
    }

    pub fn fetch_stats(&self) -> AsyncResult<CatalogStats> {
        let result = self.endpoint(STATS_PATH).and_then(|url| self.get_json(&url));
        AsyncResult::from_result("fetching catalog stats", result)
    }

    fn endpoint(&self, path: &str) -> CatalogResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::InvalidConfig(format!("invalid endpoint `{path}`: {e}")))
    }

    fn get_json<B: DeserializeOwned>(&self, url: &Url) -> CatalogResult<B> {
        debug!(%url, "issuing catalog request");
        let response = self.transport.get(url)?;
        if !response.is_success() {
            return Err(CatalogError::HttpStatus {
                status: response.status,
            });
        }

        let envelope: ResponseEnvelope = serde_json::from_str(&response.body)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        if envelope.success == Some(false) {
            let reason = envelope
                .error
                .as_ref()
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_FAILURE);
            return Err(CatalogError::ServerReported(reason.to_owned()));
        }
        // Decoded straight from the body so map fields keep server key order.
        serde_json::from_str(&response.body).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}
