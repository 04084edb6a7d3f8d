mod config;
mod logging;

use std::fs;

use anyhow::Context;
use boyos::{AgeReport, svg, text};
use clap::Parser;
use config::{Config, OutputFormat};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(config.verbose)?;

    let request = config.request().context("invalid birth or reference date")?;
    let report = AgeReport::compute(&request).context("failed to compute age report")?;

    let output = match config.format {
        OutputFormat::Text => text::render(&report),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        }
        OutputFormat::Svg => svg::generate_svg(&report, config.theme),
    };

    match &config.out {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}
