//! Rollup HTTP server client.
//!
//! Implements `RollupServer` over the rollup node's HTTP API using `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use shared_types::{FinishRequest, FinishStatus, IndexResponse, Notice, RollupRequest};
use tracing::{debug, info};

use crate::error::{RollupError, RollupResult};
use crate::ports::outbound::{FinishOutcome, RollupServer};

const FINISH: &str = "finish";
const NOTICE: &str = "notice";

/// HTTP client for the rollup server.
pub struct HttpRollupServer {
    client: Client,
    base_url: String,
}

impl HttpRollupServer {
    /// Create a client for the server at `base_url`.
    ///
    /// Without a timeout a call blocks until the server answers.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> RollupResult<Self> {
        let base_url = base_url.into();

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| RollupError::Http {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    async fn post<B: Serialize + Sync>(&self, endpoint: &str, body: &B) -> RollupResult<Response> {
        let url = self.url(endpoint);

        self.client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    RollupError::Connection {
                        url: url.clone(),
                        reason: e.to_string(),
                    }
                } else {
                    RollupError::Http {
                        url: url.clone(),
                        reason: e.to_string(),
                    }
                }
            })
    }

    async fn read_body(&self, endpoint: &str, response: Response) -> RollupResult<String> {
        response.text().await.map_err(|e| RollupError::Http {
            url: self.url(endpoint),
            reason: format!("could not read response body: {e}"),
        })
    }
}

#[async_trait]
impl RollupServer for HttpRollupServer {
    async fn finish(&self, status: FinishStatus) -> RollupResult<FinishOutcome> {
        let response = self.post(FINISH, &FinishRequest::new(status)).await?;
        let code = response.status();
        info!(status = code.as_u16(), "Received finish status");

        if code == StatusCode::ACCEPTED {
            return Ok(FinishOutcome::Idle);
        }

        let body = self.read_body(FINISH, response).await?;
        if !code.is_success() {
            return Err(RollupError::UnexpectedStatus {
                endpoint: FINISH.to_string(),
                status: code.as_u16(),
                body,
            });
        }

        let request: RollupRequest =
            serde_json::from_str(&body).map_err(|e| RollupError::InvalidBody {
                endpoint: FINISH.to_string(),
                reason: e.to_string(),
            })?;

        debug!(request_type = %request.request_type, "Received rollup request");
        Ok(FinishOutcome::Request(request))
    }

    async fn send_notice(&self, notice: Notice) -> RollupResult<IndexResponse> {
        let response = self.post(NOTICE, &notice).await?;
        let code = response.status();
        let body = self.read_body(NOTICE, response).await?;

        if !code.is_success() {
            return Err(RollupError::UnexpectedStatus {
                endpoint: NOTICE.to_string(),
                status: code.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| RollupError::InvalidBody {
            endpoint: NOTICE.to_string(),
            reason: e.to_string(),
        })
    }
}
