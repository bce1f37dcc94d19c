use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CheckError;

/// Aggregate model-quality metrics served by `GET /api/stats`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatsSnapshot {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub total_urls: u64,
    pub legitimate_urls: u64,
    pub phishing_urls: u64,
    pub num_features: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckRequest {
    pub url: String,
}

impl CheckRequest {
    /// Trims the raw input; whitespace-only input yields `None`.
    pub fn from_input(raw: &str) -> Option<Self> {
        let url = raw.trim();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            url: url.to_string(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum Prediction {
    Legitimate,
    Phishing,
}

impl TryFrom<u8> for Prediction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Prediction::Legitimate),
            1 => Ok(Prediction::Phishing),
            other => Err(format!("unknown prediction class {}", other)),
        }
    }
}

/// Per-class confidence percentages. The two are reported independently and
/// are not guaranteed to sum to 100.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Confidence {
    pub legitimate: f64,
    pub phishing: f64,
}

/// Ordered feature vector; key order is the order the backend sent.
pub type Features = Map<String, Value>;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CheckVerdict {
    pub url: String,
    pub prediction: Prediction,
    pub confidence: Confidence,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub trust_factors: Vec<String>,
}

impl CheckVerdict {
    pub fn is_phishing(&self) -> bool {
        self.prediction == Prediction::Phishing
    }
}

#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Interprets a `POST /api/check-url` response body.
///
/// `success: false` is an application error carrying the server's message.
/// A body that is not JSON, or a success payload missing verdict fields, is
/// a transport error.
pub fn parse_check_payload(body: &str) -> Result<CheckVerdict, CheckError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| CheckError::Transport(format!("Failed to parse response JSON: {}", e)))?;

    let envelope = Envelope::deserialize(&value)
        .map_err(|e| CheckError::Transport(format!("Malformed response: {}", e)))?;

    if !envelope.success {
        let message = envelope.error.unwrap_or_else(|| "Unknown error".to_string());
        return Err(CheckError::Application(message));
    }

    serde_json::from_value(value)
        .map_err(|e| CheckError::Transport(format!("Malformed verdict: {}", e)))
}
