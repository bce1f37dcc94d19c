//! Pure display models derived from fetched data. Surfaces only draw these.

use crate::features::{self, FeatureRow};
use crate::format::{group_thousands, percent, whole_percent};
use crate::models::{CheckVerdict, StatsSnapshot};

pub const SAFE_COLOR: &str = "#4CAF50";
pub const DANGER_COLOR: &str = "#f44336";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Safe,
    Danger,
}

impl Tone {
    pub fn color(self) -> &'static str {
        match self {
            Tone::Safe => SAFE_COLOR,
            Tone::Danger => DANGER_COLOR,
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Tone::Safe => "rgba(76, 175, 80, 0.1)",
            Tone::Danger => "rgba(244, 67, 54, 0.1)",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Safe => "✅ LEGITIMATE",
            Tone::Danger => "⚠️ PHISHING",
        }
    }
}

/// The fixed statistics targets, named by their element ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatSlot {
    Accuracy,
    Precision,
    Recall,
    F1,
    TotalUrls,
    LegitimateUrls,
    PhishingUrls,
    Features,
}

impl StatSlot {
    pub fn id(self) -> &'static str {
        match self {
            StatSlot::Accuracy => "accuracy",
            StatSlot::Precision => "precision",
            StatSlot::Recall => "recall",
            StatSlot::F1 => "f1",
            StatSlot::TotalUrls => "totalUrls",
            StatSlot::LegitimateUrls => "legitimateUrls",
            StatSlot::PhishingUrls => "phishingUrls",
            StatSlot::Features => "features",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            StatSlot::Accuracy => "Accuracy",
            StatSlot::Precision => "Precision",
            StatSlot::Recall => "Recall",
            StatSlot::F1 => "F1 Score",
            StatSlot::TotalUrls => "Total URLs",
            StatSlot::LegitimateUrls => "Legitimate URLs",
            StatSlot::PhishingUrls => "Phishing URLs",
            StatSlot::Features => "Features",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsView {
    pub slots: [(StatSlot, String); 8],
}

impl StatsView {
    pub fn from_snapshot(stats: &StatsSnapshot, separator: &str) -> Self {
        Self {
            slots: [
                (StatSlot::Accuracy, percent(stats.accuracy)),
                (StatSlot::Precision, percent(stats.precision)),
                (StatSlot::Recall, percent(stats.recall)),
                (StatSlot::F1, percent(stats.f1_score)),
                (StatSlot::TotalUrls, group_thousands(stats.total_urls, separator)),
                (
                    StatSlot::LegitimateUrls,
                    group_thousands(stats.legitimate_urls, separator),
                ),
                (
                    StatSlot::PhishingUrls,
                    group_thousands(stats.phishing_urls, separator),
                ),
                (StatSlot::Features, stats.num_features.to_string()),
            ],
        }
    }
}

/// Everything a surface needs to draw one verdict.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub tone: Tone,
    pub url: String,
    pub legitimate_text: String,
    pub phishing_text: String,
    /// Fill width in percent; the same number as `legitimate_text`, unrounded.
    pub bar_width: f64,
    pub bar_label: String,
    pub risk_factors: Vec<String>,
    pub trust_factors: Vec<String>,
    pub feature_limit: usize,
    pub features: Vec<FeatureRow>,
}

impl ResultView {
    pub fn from_verdict(verdict: &CheckVerdict, feature_limit: usize) -> Self {
        let tone = if verdict.is_phishing() {
            Tone::Danger
        } else {
            Tone::Safe
        };
        let legitimate = verdict.confidence.legitimate;

        Self {
            tone,
            url: verdict.url.clone(),
            legitimate_text: percent(legitimate),
            phishing_text: percent(verdict.confidence.phishing),
            bar_width: legitimate,
            bar_label: whole_percent(legitimate),
            risk_factors: verdict.risk_factors.clone(),
            trust_factors: verdict.trust_factors.clone(),
            feature_limit,
            features: features::render(&verdict.features, feature_limit),
        }
    }

    pub fn label(&self) -> &'static str {
        self.tone.label()
    }

    pub fn features_heading(&self) -> String {
        format!("Extracted Features (showing top {}):", self.feature_limit)
    }
}
