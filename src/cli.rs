use std::path::PathBuf;
use clap::{Args, Parser};
use crate::render::RenderFormat;

/// Printed by `--header`.
pub const DEFINITIONS: &str = "\
Definitions:
	Mean: The average value among the provided data points
	Stddev: The average distance individual points are from the mean
	SEM (Standard Error of the Mean): The uncertainty in the best estimate
	CI95 (95% Confidence Interval): The range around the mean where we are 95% confident the true value is
	CV (Coefficient of Variation): Measures how \"noisy\" the samples are, < 3% is typically considered \"good\"

Equations:
  x\u{0304}  Mean   := (1/n) \u{03A3} x\u{1D62}
  \u{03C3}  Stddev := \u{221A} (1/n) \u{03A3} (x\u{1D62}-x\u{0304})\u{00B2}
  s  SEM    := \u{03C3} / \u{221A}n
     CI\u{2089}\u{2085}   := 1.96 * s
     CV     := \u{03C3} / x\u{0304} * 100%

Missing or unparsable cells are left out of every sum and count.
CI95 uses the normal z-score 1.96 regardless of sample size.";

#[derive(Debug, Parser)]
#[command(name = "tabstats", version, about = "Row and column statistics for tables of measurements")]
pub struct CliArgs {
    /// CSV or spreadsheet file to read data from
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Same as PATH
    #[arg(short, long, value_name = "FILE", conflicts_with = "path")]
    pub file: Option<PathBuf>,

    /// JSON config file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Digits after the decimal point
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Do not append per-row statistics columns
    #[arg(long)]
    pub no_row_stats: bool,

    /// Do not append per-column statistics rows
    #[arg(long)]
    pub no_column_stats: bool,

    /// Guess units from row labels for rows without a units column
    #[arg(long)]
    pub infer_units: bool,

    /// Worker threads (0 = one per core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log filter when RUST_LOG is unset (e.g. info, debug)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print metric definitions and exit
    #[arg(long)]
    pub header: bool,

    #[command(flatten)]
    pub renderer: RendererArgs,
}

impl CliArgs {
    pub fn input(&self) -> Option<&PathBuf> {
        self.path.as_ref().or(self.file.as_ref())
    }
}

#[derive(Debug, Default, Args)]
#[group(id = "renderer", multiple = false)]
pub struct RendererArgs {
    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<RenderFormat>,
    /// Box-drawn text (default)
    #[arg(long)]
    pub text: bool,
    /// Text with highlighted statistics
    #[arg(long)]
    pub color: bool,
    #[arg(long)]
    pub markdown: bool,
    #[arg(long)]
    pub html: bool,
    #[arg(long)]
    pub svg: bool,
    #[arg(long)]
    pub csv: bool,
    #[arg(long)]
    pub json: bool,
}

impl RendererArgs {
    pub fn format(&self) -> Option<RenderFormat> {
        let flags = [
            (self.text, RenderFormat::Text),
            (self.color, RenderFormat::Color),
            (self.markdown, RenderFormat::Markdown),
            (self.html, RenderFormat::Html),
            (self.svg, RenderFormat::Svg),
            (self.csv, RenderFormat::Csv),
            (self.json, RenderFormat::Json),
        ];
        self.format.or_else(|| flags.iter().find(|(set, _)| *set).map(|(_, f)| *f))
    }
}
