//! Row and column statistics (mean, population stddev, SEM, CI95, CV) for
//! tables of measurements, plus the loaders and renderers around them.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod processing;
pub mod render;

use std::path::Path;
use config::Config;
use data::table::Table;
use error::AppError;

/// Load, compile and render every table in `path`.
pub fn run(path: &Path, config: &Config) -> Result<String, AppError> {
    let mut tables = data::loader::load_file(path)?;
    if config.infer_units {
        tables.iter_mut().for_each(data::unit_inference::apply_inferred_units);
    }
    let compiled = processing::compile::compile_all(&tables, &config.stats);
    render_all(&compiled, config)
}

/// Render tables one after another, separated by a blank line. JSON output
/// is a single array instead.
pub fn render_all(tables: &[Table], config: &Config) -> Result<String, AppError> {
    let options = config.render_options();
    if options.format == render::RenderFormat::Json {
        return Ok(render::json::render_many(tables)?);
    }
    let mut out = Vec::with_capacity(tables.len());
    for table in tables {
        out.push(render::dump(table, &options)?);
    }
    Ok(out.join("\n"))
}
