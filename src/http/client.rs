//! Low-level HTTP transport — `MeridianHttp`.
//!
//! Speaks GraphQL-over-POST to per-application node endpoints. Returns raw
//! `serde_json::Value` data; conversion to domain types happens at the
//! client layer above. Internal to the SDK — the high-level client wraps
//! this.

use std::time::Duration;

use reqwest::Client;
use tracing;

use crate::error::HttpError;
use crate::http::graphql::{GraphQlRequest, GraphQlResponse};
use crate::http::retry::{retryable_status, RetryConfig, RetryPolicy};
use crate::shared::{ApplicationId, ChainId};

/// Low-level HTTP client for Meridian node GraphQL endpoints.
#[derive(Clone)]
pub struct MeridianHttp {
    endpoint: String,
    client: Client,
}

impl MeridianHttp {
    pub fn new(endpoint: &str) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    /// The configured service endpoint, trailing slash stripped.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The GraphQL URL for one application on one chain.
    pub fn application_url(&self, chain_id: &ChainId, application_id: &ApplicationId) -> String {
        format!(
            "{}/chains/{}/applications/{}",
            self.endpoint, chain_id, application_id
        )
    }

    /// Execute a GraphQL document against an application endpoint.
    ///
    /// On success returns the response `data` field. GraphQL-level errors
    /// are surfaced verbatim as [`HttpError::Graphql`]; nothing is
    /// reclassified or paraphrased.
    pub async fn graphql(
        &self,
        url: &str,
        request: &GraphQlRequest,
        retry: RetryPolicy,
    ) -> Result<serde_json::Value, HttpError> {
        match retry {
            RetryPolicy::None => self.do_graphql(url, request).await,
            RetryPolicy::Idempotent => {
                self.graphql_with_retry(url, request, RetryConfig::default())
                    .await
            }
        }
    }

    async fn graphql_with_retry(
        &self,
        url: &str,
        request: &GraphQlRequest,
        config: RetryConfig,
    ) -> Result<serde_json::Value, HttpError> {
        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_graphql(url, request).await {
                Ok(data) => return Ok(data),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => retryable_status(*status),
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout() || re.is_request();
                            retryable
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying GraphQL query to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_graphql(
        &self,
        url: &str,
        request: &GraphQlRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let resp = self.client.post(url).json(request).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(match status_code {
                404 => HttpError::NotFound(body_text),
                429 => HttpError::RateLimited {
                    retry_after_ms: None,
                },
                400..=499 => HttpError::BadRequest(body_text),
                _ => HttpError::ServerError {
                    status: status_code,
                    body: body_text,
                },
            });
        }

        let parsed = resp.json::<GraphQlResponse>().await?;
        parsed.into_result()
    }
}
