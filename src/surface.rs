//! Output targets for the two flows.
//!
//! A [`Surface`] receives already-formatted display models; it decides only
//! how to show them.

use std::collections::BTreeMap;
use std::io::Write;
use tracing::warn;

use crate::config::OutputFormat;
use crate::templates::{result_panel, stats_panel};
use crate::view::{ResultView, StatSlot};

pub trait Surface {
    fn set_stat(&mut self, slot: StatSlot, text: &str);

    fn set_loading(&mut self, visible: bool);

    fn hide_result(&mut self);

    fn show_result(&mut self, view: &ResultView);

    /// A message the user has to acknowledge.
    fn notice(&mut self, message: &str);

    fn clear_input(&mut self);
}

/// In-memory page state: what a reader would currently see.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageModel {
    pub stats: BTreeMap<StatSlot, String>,
    pub loading: bool,
    pub result: Option<ResultView>,
    pub notices: Vec<String>,
    pub input_cleared: usize,
}

impl Surface for PageModel {
    fn set_stat(&mut self, slot: StatSlot, text: &str) {
        self.stats.insert(slot, text.to_string());
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn hide_result(&mut self) {
        self.result = None;
    }

    fn show_result(&mut self, view: &ResultView) {
        self.result = Some(view.clone());
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn clear_input(&mut self) {
        self.input_cleared += 1;
    }
}

/// Writes plain text or HTML fragments to a stream, normally stdout.
pub struct ConsoleSurface<W: Write> {
    out: W,
    format: OutputFormat,
}

impl ConsoleSurface<std::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("[urlsentry] Failed to write output: {}", e);
        }
    }
}

impl<W: Write> Surface for ConsoleSurface<W> {
    fn set_stat(&mut self, slot: StatSlot, text: &str) {
        let line = match self.format {
            OutputFormat::Text => format!("{:<16} {}", slot.caption(), text),
            OutputFormat::Html => stats_panel::render_slot(slot, text),
        };
        self.emit(&line);
    }

    fn set_loading(&mut self, visible: bool) {
        if !visible {
            return;
        }
        let line = match self.format {
            OutputFormat::Text => "Checking URL...",
            OutputFormat::Html => r#"<div id="loadingIndicator" style="display: block;"></div>"#,
        };
        self.emit(line);
    }

    // Output already written stays on screen; the next result replaces it logically.
    fn hide_result(&mut self) {}

    fn show_result(&mut self, view: &ResultView) {
        let text = match self.format {
            OutputFormat::Text => render_text(view),
            OutputFormat::Html => result_panel::render(view),
        };
        self.emit(&text);
    }

    fn notice(&mut self, message: &str) {
        self.emit(&format!("[!] {}", message));
    }

    // The submitted line has already been consumed from stdin.
    fn clear_input(&mut self) {}
}

const BAR_CELLS: usize = 30;

/// Terminal rendering of a verdict.
pub fn render_text(view: &ResultView) -> String {
    let filled = ((view.bar_width.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled));

    let mut lines = vec![
        view.label().to_string(),
        format!("  URL:              {}", view.url),
        format!("  Legitimate Score: {}", view.legitimate_text),
        format!("  Phishing Score:   {}", view.phishing_text),
        format!("  [{}] {}", bar, view.bar_label),
    ];

    for (title, items) in [
        ("Risk factors", &view.risk_factors),
        ("Trust factors", &view.trust_factors),
    ] {
        if !items.is_empty() {
            lines.push(format!("  {}: {}", title, items.join("; ")));
        }
    }

    lines.push(format!("  {}", view.features_heading()));
    for row in &view.features {
        lines.push(format!("    {:<24} {}", row.name, row.value));
    }

    lines.join("\n")
}
