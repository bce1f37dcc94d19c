use tracing::{debug, error, info};

use crate::client::Backend;
use crate::error::CheckError;
use crate::features::DEFAULT_FEATURE_LIMIT;
use crate::models::{CheckRequest, CheckVerdict};
use crate::surface::Surface;
use crate::view::ResultView;

/// State of the URL-check flow. `Failure` never holds
/// [`CheckError::EmptyInput`]; blank input leaves the state as it was.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CheckState {
    #[default]
    Idle,
    Loading,
    Success(CheckVerdict),
    Failure(CheckError),
}

/// An accepted submission waiting for its response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingCheck {
    pub token: u64,
    pub request: CheckRequest,
}

/// Owns the check flow's state and drives a [`Surface`] through it.
///
/// Every accepted submission gets a fresh token. Only the response for the
/// newest token is applied, so overlapping submissions resolve to the last
/// one issued.
pub struct UrlChecker<S> {
    surface: S,
    state: CheckState,
    latest_token: u64,
    feature_limit: usize,
}

impl<S: Surface> UrlChecker<S> {
    pub fn new(surface: S, feature_limit: usize) -> Self {
        Self {
            surface,
            state: CheckState::Idle,
            latest_token: 0,
            feature_limit,
        }
    }

    pub fn state(&self) -> &CheckState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_loading(&self) -> bool {
        self.state == CheckState::Loading
    }

    /// Validates the input and enters `Loading`.
    pub fn begin(&mut self, raw_input: &str) -> Result<PendingCheck, CheckError> {
        let request = match CheckRequest::from_input(raw_input) {
            Some(r) => r,
            None => {
                self.surface.notice(&CheckError::EmptyInput.to_string());
                return Err(CheckError::EmptyInput);
            }
        };

        self.latest_token += 1;
        self.state = CheckState::Loading;
        self.surface.set_loading(true);
        self.surface.hide_result();

        info!("[urlsentry] Checking URL: {}", request.url);

        Ok(PendingCheck {
            token: self.latest_token,
            request,
        })
    }

    /// Applies a response. Returns `false` when `token` has been superseded
    /// and the outcome was dropped.
    pub fn finish(&mut self, token: u64, outcome: Result<CheckVerdict, CheckError>) -> bool {
        if token != self.latest_token {
            debug!(
                "[urlsentry] Discarding response for superseded check #{} (latest #{})",
                token, self.latest_token
            );
            return false;
        }

        self.surface.set_loading(false);

        match outcome {
            Ok(verdict) => {
                let view = ResultView::from_verdict(&verdict, self.feature_limit);
                self.surface.show_result(&view);
                self.surface.clear_input();
                info!(
                    "[urlsentry] {} classified as {:?} (legitimate {}, phishing {})",
                    verdict.url, verdict.prediction, view.legitimate_text, view.phishing_text
                );
                self.state = CheckState::Success(verdict);
            }
            Err(err) => {
                error!("[urlsentry] Error checking URL ({}): {:?}", err.kind(), err);
                self.surface.notice(&format!("Error: {}", err));
                self.state = CheckState::Failure(err);
            }
        }
        true
    }

    /// Runs one submission to completion.
    pub async fn submit<B: Backend>(&mut self, backend: &B, raw_input: &str) {
        let pending = match self.begin(raw_input) {
            Ok(p) => p,
            Err(_) => return,
        };
        let outcome = backend.check_url(&pending.request).await;
        self.finish(pending.token, outcome);
    }
}

impl<S: Surface + Default> Default for UrlChecker<S> {
    fn default() -> Self {
        Self::new(S::default(), DEFAULT_FEATURE_LIMIT)
    }
}
