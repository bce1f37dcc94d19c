//! Client for a phishing URL classification service: loads the model's
//! quality statistics and checks single URLs, rendering the verdicts.

pub mod checker;
pub mod client;
pub mod config;
pub mod error;
pub mod features;
pub mod format;
pub mod models;
pub mod stats;
pub mod surface;
pub mod templates;
pub mod view;

pub use checker::{CheckState, PendingCheck, UrlChecker};
pub use client::{Backend, HttpBackend};
pub use config::{Config, OutputFormat};
pub use error::{CheckError, StatsError};
pub use stats::{StatsLoader, StatsState};
pub use surface::{ConsoleSurface, PageModel, Surface};
