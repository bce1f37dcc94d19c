use std::time::Duration;
use tracing::debug;

use crate::error::{CheckError, StatsError};
use crate::models::{parse_check_payload, CheckRequest, CheckVerdict, StatsSnapshot};

pub const STATS_PATH: &str = "/api/stats";
pub const CHECK_PATH: &str = "/api/check-url";

/// The classification service as seen from the client.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn fetch_stats(&self) -> Result<StatsSnapshot, StatsError>;

    async fn check_url(&self, request: &CheckRequest) -> Result<CheckVerdict, CheckError>;
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Backend for HttpBackend {
    async fn fetch_stats(&self) -> Result<StatsSnapshot, StatsError> {
        let url = format!("{}{}", self.base_url, STATS_PATH);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StatsError::Transport(e.to_string()))?;

        debug!("[urlsentry] GET {} -> {}", STATS_PATH, resp.status());

        resp.json::<StatsSnapshot>()
            .await
            .map_err(|e| StatsError::Parse(e.to_string()))
    }

    async fn check_url(&self, request: &CheckRequest) -> Result<CheckVerdict, CheckError> {
        let url = format!("{}{}", self.base_url, CHECK_PATH);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| CheckError::Transport(e.to_string()))?;

        let status = resp.status();
        debug!("[urlsentry] Response status: {}", status);

        let body = resp
            .text()
            .await
            .map_err(|e| CheckError::Transport(e.to_string()))?;
        debug!("[urlsentry] Response data: {}", body);

        // A 4xx carrying `success: false` is still an application error.
        parse_check_payload(&body).map_err(|err| match err {
            CheckError::Transport(detail) if !status.is_success() => CheckError::Transport(
                format!("POST {} returned {}: {}", CHECK_PATH, status, detail),
            ),
            other => other,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Answers every call from fixed results and records check requests.
    pub struct ScriptedBackend {
        pub stats: Result<StatsSnapshot, StatsError>,
        pub check: Result<CheckVerdict, CheckError>,
        pub requests: Mutex<Vec<CheckRequest>>,
    }

    impl ScriptedBackend {
        pub fn new(
            stats: Result<StatsSnapshot, StatsError>,
            check: Result<CheckVerdict, CheckError>,
        ) -> Self {
            Self {
                stats,
                check,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<CheckRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Backend for ScriptedBackend {
        async fn fetch_stats(&self) -> Result<StatsSnapshot, StatsError> {
            self.stats.clone()
        }

        async fn check_url(&self, request: &CheckRequest) -> Result<CheckVerdict, CheckError> {
            self.requests.lock().unwrap().push(request.clone());
            self.check.clone()
        }
    }
}
