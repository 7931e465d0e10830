use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use full_example::{RasterizationRenderer, Settings};

fn main() -> Result<()> {
    let settings = Settings::parse();

    let log_level = if settings.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("loading {}", settings.model_path.display());

    let model_path = settings.model_path.clone();

    let mut renderer = RasterizationRenderer::init(settings)
        .with_context(|| format!("failed to load {}", model_path.display()))?;

    info!("{} shapes, {} texture files", renderer.model().meshes().len(), renderer.model().texture_files().len());

    let stats = renderer.render().context("failed to render")?;

    info!("done, {} fragments written, {} rejected by the depth test", stats.fragments, stats.depth_rejected);

    Ok(())
}
