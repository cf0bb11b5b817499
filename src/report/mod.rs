pub mod text;

use std::io::Write;

use serde::{Serialize, Deserialize};
use serde_json::json;

use crate::error::Result;
use crate::train::EpochStats;

/// How the report is written to its sink.
///
/// - `Text` — human-readable lines, the layout editors show in their console.
/// - `Json` — one JSON object per line, for tooling that scrapes the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Language of the section labels.
///
/// - `Ja` — the labels the hosted editor's stock check prints.
/// - `En` — English labels for local runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Ja,
    En,
}

/// The three checks of a smoke run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Numeric   = 1,
    Training  = 2,
    DataStats = 3,
}

impl Section {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Section::Numeric,   Language::Ja) => "数値計算",
            (Section::Training,  Language::Ja) => "機械学習シミュレーション",
            (Section::DataStats, Language::Ja) => "データ統計",
            (Section::Numeric,   Language::En) => "Numeric computation",
            (Section::Training,  Language::En) => "Training simulation",
            (Section::DataStats, Language::En) => "Data statistics",
        }
    }

    /// `[Test N] label`
    pub fn marker(self, language: Language) -> String {
        format!("[Test {}] {}", self as u8, self.label(language))
    }
}

pub const SUCCESS_LINE: &str = "✓ All tests completed successfully!";

/// Writes report events to `W` in the configured format. Every write is
/// flushed so epochs show up live in a console.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
    language: Language,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat, language: Language) -> Self {
        Reporter { out, format, language }
    }

    pub fn banner(&mut self, title: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let rule = text::rule();
                self.lines(&[&rule, title, &rule])
            }
            OutputFormat::Json => self.json(json!({ "event": "start", "title": title })),
        }
    }

    pub fn section(&mut self, section: Section) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.lines(&["", &section.marker(self.language)]),
            OutputFormat::Json => self.json(json!({
                "event": "section",
                "index": section as u8,
                "label": section.label(self.language),
            })),
        }
    }

    pub fn array_stats(&mut self, values: &[f64], mean: f64, std: f64) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.lines(&[
                &format!("Array: {}", text::format_values(values)),
                &format!("Mean: {}", text::format_scalar(mean)),
                &format!("Std: {}", text::format_scalar(std)),
            ]),
            OutputFormat::Json => self.json(json!({
                "event": "stats",
                "array": values,
                "mean": mean,
                "std": std,
            })),
        }
    }

    pub fn epoch(&mut self, stats: &EpochStats) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.lines(&[&text::format_epoch(stats)]),
            OutputFormat::Json => self.json(json!({ "event": "epoch", "stats": stats })),
        }
    }

    pub fn data_stats(
        &mut self,
        features_shape: (usize, usize),
        labels_shape: (usize,),
        classes: &[u32],
    ) -> Result<()> {
        let x = [features_shape.0, features_shape.1];
        let y = [labels_shape.0];
        match self.format {
            OutputFormat::Text => self.lines(&[
                &format!("X shape: {}", text::format_shape(&x)),
                &format!("y shape: {}", text::format_shape(&y)),
                &format!("Classes: {}", text::format_array(classes)),
            ]),
            OutputFormat::Json => self.json(json!({
                "event": "data",
                "x_shape": x,
                "y_shape": y,
                "classes": classes,
            })),
        }
    }

    pub fn finish(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let rule = text::rule();
                self.lines(&["", &rule, SUCCESS_LINE, &rule])
            }
            OutputFormat::Json => self.json(json!({ "event": "done", "ok": true })),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn lines(&mut self, lines: &[&str]) -> Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn json(&mut self, value: serde_json::Value) -> Result<()> {
        serde_json::to_writer(&mut self.out, &value)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
