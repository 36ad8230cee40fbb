//! Command-line argument parsing for the layout tool
//!
//! Supports:
//! - Reading a document from a file or stdin
//! - Choosing the measurement strategy and spacing
//! - Aligned text, JSON, or raw stop output

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{ElasticConfig, MeasureKind};

/// Compute elastic tab stops for tab-separated text
#[derive(Parser, Debug)]
#[command(name = "elastic-tabs", version, about = "Compute elastic tab stops")]
pub struct CliArgs {
    /// Document to lay out (reads stdin when omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Aligned)]
    pub format: OutputFormat,

    /// How cell widths are measured
    #[arg(short, long, value_enum)]
    pub measure: Option<MeasureKind>,

    /// Font file used with `--measure font`
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Font size in pixels used with `--measure font`
    #[arg(long, value_name = "PX")]
    pub font_size: Option<f32>,

    /// Width of one character or column
    #[arg(long, value_name = "N")]
    pub unit: Option<f64>,

    /// Gap after the widest cell of each column
    #[arg(long, value_name = "N")]
    pub min_spacing: Option<f64>,

    /// Minimum distance between consecutive stops
    #[arg(long, value_name = "N")]
    pub first_stop: Option<f64>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    pub save_config: bool,
}

/// What to print after computing the layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The document with tabs expanded to the computed stops
    #[default]
    Aligned,
    /// Line ranges and stops as JSON
    Json,
    /// One line of stop positions per document line
    Stops,
}

/// Configuration derived from CLI arguments layered over the config file
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input file, or `None` for stdin
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub settings: ElasticConfig,
    pub save_config: bool,
}

impl CliArgs {
    /// Apply command-line overrides on top of `base` and validate the result
    pub fn into_config(self, base: ElasticConfig) -> Result<RunConfig, String> {
        let mut settings = base;

        if let Some(measure) = self.measure {
            settings.measure = measure;
        }
        if let Some(font) = self.font {
            settings.font = Some(font);
        }
        if let Some(size) = self.font_size {
            settings.font_size = size;
        }
        if let Some(unit) = self.unit {
            settings.unit = unit;
        }
        if let Some(spacing) = self.min_spacing {
            settings.tab_stops.min_spacing = spacing;
        }
        if let Some(first) = self.first_stop {
            settings.tab_stops.first_stop_minimum = first;
        }

        if settings.measure == MeasureKind::Font && settings.font.is_none() {
            return Err("--measure font requires --font <PATH>".to_string());
        }
        if !(settings.unit.is_finite() && settings.unit > 0.0) {
            return Err(format!("unit must be positive, got {}", settings.unit));
        }
        if !(settings.font_size.is_finite() && settings.font_size > 0.0) {
            return Err(format!(
                "font size must be positive, got {}",
                settings.font_size
            ));
        }
        for (name, value) in [
            ("min spacing", settings.tab_stops.min_spacing),
            ("first stop", settings.tab_stops.first_stop_minimum),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{} must be zero or positive, got {}", name, value));
            }
        }

        Ok(RunConfig {
            input: self.path,
            format: self.format,
            settings,
            save_config: self.save_config,
        })
    }
}
