use std::time::Duration;

use reqwest::Client;

use collectmap_core::{Category, DateRange, GeoPoint};

use crate::error::ClientError;
use crate::normalize::normalize_batch;
use crate::types::{RawCategory, TransactionsResponse};

/// Parameters for one transactions fetch.
///
/// `start`/`end` are inclusive calendar-date bounds; `region` maps to the
/// service's `state` query parameter. `category` narrows to a single
/// material; `None` means all categories. The weight bounds are optional
/// service-side filters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionQuery {
    pub range: DateRange,
    pub region: String,
    pub category: Option<String>,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
}

/// HTTP client for the remote collection service's two read-only endpoints.
///
/// Non-2xx responses become [`ClientError::UnexpectedStatus`], malformed
/// bodies become [`ClientError::Deserialize`]. No retries: every failure is
/// terminal for that one request, and the caller decides what to do with
/// the data it already has.
pub struct CollectorClient {
    client: Client,
    /// Validated in `new`: absolute, http(s). Endpoint URLs derive from it
    /// infallibly.
    base_url: reqwest::Url,
}

impl CollectorClient {
    /// Creates a `CollectorClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute http(s) URL, or [`ClientError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let parsed = reqwest::Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Fetches the full category list.
    ///
    /// Records without a usable `name` are kept here; the legend assembly
    /// filters them when it builds the color map.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ClientError::Http`] — network or TLS failure.
    /// - [`ClientError::Deserialize`] — body is not a JSON array of
    ///   category records.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError> {
        let url = self.categories_url();
        let body = self.get_checked(&url).await?;

        let raw: Vec<RawCategory> =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: format!("category list from {url}"),
                source: e,
            })?;

        Ok(raw
            .into_iter()
            .map(|c| Category {
                name: c.name.unwrap_or_default(),
                value: c.value,
            })
            .collect())
    }

    /// Fetches aggregated transaction points for the given query and
    /// normalizes them.
    ///
    /// Malformed records are dropped during normalization (warn-logged),
    /// never failing the batch.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ClientError::Http`] — network or TLS failure.
    /// - [`ClientError::Deserialize`] — body is not the expected
    ///   `{ "data": [...] }` envelope.
    pub async fn fetch_transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<Vec<GeoPoint>, ClientError> {
        let url = self.transactions_url(query);
        tracing::debug!(%url, "fetching heatmap transactions");
        let body = self.get_checked(&url).await?;

        let envelope: TransactionsResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: format!("transactions from {url}"),
                source: e,
            })?;

        Ok(normalize_batch(&envelope.data))
    }

    /// Issues a GET and returns the body text after status triage.
    async fn get_checked(&self, url: &str) -> Result<String, ClientError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Appends an endpoint path to the validated base URL, preserving any
    /// path prefix the base carries.
    fn endpoint_url(&self, endpoint_path: &str) -> reqwest::Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}/{}", url.path().trim_end_matches('/'), endpoint_path);
        url.set_path(&joined);
        url
    }

    fn categories_url(&self) -> String {
        self.endpoint_url("api/v2/category/all").to_string()
    }

    /// Builds the transactions URL with all query parameters encoded via
    /// `reqwest::Url`, so category names with spaces survive intact.
    fn transactions_url(&self, query: &TransactionQuery) -> String {
        let mut url = self.endpoint_url("api/v2/heatmap/transactions");

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("startDate", &query.range.start.to_string())
                .append_pair("endDate", &query.range.end.to_string())
                .append_pair("state", &query.region);
            if let Some(category) = &query.category {
                pairs.append_pair("category", category);
            }
            if let Some(min) = query.min_weight {
                pairs.append_pair("minWeight", &format_weight(min));
            }
            if let Some(max) = query.max_weight {
                pairs.append_pair("maxWeight", &format_weight(max));
            }
        }

        url.to_string()
    }
}

/// Formats a weight bound without a trailing `.0` for whole numbers,
/// matching the query strings the service expects.
fn format_weight(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
