use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::features::DEFAULT_FEATURE_LIMIT;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub feature_limit: usize,
    pub output_format: OutputFormat,
    pub thousands_separator: String,
    /// `None` leaves requests unbounded; a hung backend keeps the checker loading.
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        let base_url = std::env::var("URLSENTRY_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        let base_url = base_url.trim_end_matches('/').to_string();

        let feature_limit = parse_or_default(
            "FEATURE_LIMIT",
            std::env::var("FEATURE_LIMIT").ok(),
            DEFAULT_FEATURE_LIMIT,
        );

        let output_format = parse_or_default(
            "OUTPUT_FORMAT",
            std::env::var("OUTPUT_FORMAT").ok(),
            OutputFormat::default(),
        );

        let thousands_separator =
            std::env::var("THOUSANDS_SEPARATOR").unwrap_or_else(|_| ",".to_string());

        let request_timeout = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    warn!("[urlsentry] Invalid REQUEST_TIMEOUT_SECS value, requests will not time out");
                    None
                }
            });

        Self {
            base_url,
            feature_limit,
            output_format,
            thousands_separator,
            request_timeout,
        }
    }
}

fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("[urlsentry] Invalid {} value, defaulting to {:?}", name, default);
            default
        }),
        None => default,
    }
}
