use tracing::{error, info};

use crate::client::Backend;
use crate::models::StatsSnapshot;
use crate::surface::Surface;
use crate::view::StatsView;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum StatsState {
    #[default]
    Pending,
    Loaded(StatsSnapshot),
    Failed,
}

/// Best-effort, one-shot fetch of the model statistics.
#[derive(Clone, Debug)]
pub struct StatsLoader {
    separator: String,
}

impl StatsLoader {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Fills the eight stat slots. Failures are logged and otherwise leave
    /// the surface untouched.
    pub async fn load<B, S>(&self, backend: &B, surface: &mut S) -> StatsState
    where
        B: Backend,
        S: Surface,
    {
        match backend.fetch_stats().await {
            Ok(stats) => {
                let view = StatsView::from_snapshot(&stats, &self.separator);
                for (slot, text) in &view.slots {
                    surface.set_stat(*slot, text);
                }
                info!(
                    "[urlsentry] Model stats loaded ({} URLs, {} features)",
                    stats.total_urls, stats.num_features
                );
                StatsState::Loaded(stats)
            }
            Err(e) => {
                error!("[urlsentry] Error loading stats: {}", e);
                StatsState::Failed
            }
        }
    }
}

impl Default for StatsLoader {
    fn default() -> Self {
        Self::new(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::ScriptedBackend;
    use crate::error::{CheckError, StatsError};
    use crate::surface::PageModel;
    use crate::view::StatSlot;
    use pretty_assertions::assert_eq;

    fn snapshot() -> StatsSnapshot {
        StatsSnapshot {
            accuracy: 97.345,
            precision: 96.5,
            recall: 94.25,
            f1_score: 95.36,
            total_urls: 1_234_567,
            legitimate_urls: 617_284,
            phishing_urls: 617_283,
            num_features: 30,
        }
    }

    fn unused_check() -> Result<crate::models::CheckVerdict, CheckError> {
        Err(CheckError::Transport("unused".into()))
    }

    #[tokio::test]
    async fn fills_all_eight_slots() {
        let backend = ScriptedBackend::new(Ok(snapshot()), unused_check());
        let mut page = PageModel::default();

        let state = StatsLoader::default().load(&backend, &mut page).await;

        assert_eq!(state, StatsState::Loaded(snapshot()));
        assert_eq!(page.stats.len(), 8);
        assert_eq!(page.stats[&StatSlot::Accuracy], "97.35%");
        assert_eq!(page.stats[&StatSlot::TotalUrls], "1,234,567");
        assert_eq!(page.stats[&StatSlot::Features], "30");
    }

    #[tokio::test]
    async fn custom_separator_is_used_for_counts() {
        let backend = ScriptedBackend::new(Ok(snapshot()), unused_check());
        let mut page = PageModel::default();

        StatsLoader::new(".").load(&backend, &mut page).await;

        assert_eq!(page.stats[&StatSlot::PhishingUrls], "617.283");
    }

    #[tokio::test]
    async fn failure_is_silent() {
        let backend = ScriptedBackend::new(
            Err(StatsError::Transport("connection refused".into())),
            unused_check(),
        );
        let mut page = PageModel::default();

        let state = StatsLoader::default().load(&backend, &mut page).await;

        assert_eq!(state, StatsState::Failed);
        assert_eq!(page, PageModel::default());
    }
}
