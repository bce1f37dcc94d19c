use thiserror::Error;

/// Why a URL check did not produce a verdict.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    /// Blank input, rejected before any request is sent.
    #[error("Please enter a URL")]
    EmptyInput,
    /// Network failure or a body that could not be read as a payload.
    #[error("{0}")]
    Transport(String),
    /// The service answered `success: false`.
    #[error("{0}")]
    Application(String),
}

impl CheckError {
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::EmptyInput => "validation",
            CheckError::Transport(_) => "transport",
            CheckError::Application(_) => "application",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("GET /api/stats failed: {0}")]
    Transport(String),
    #[error("Failed to parse stats JSON: {0}")]
    Parse(String),
}
