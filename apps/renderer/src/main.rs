use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cv_render::backend::DrawingBackend;
use cv_render::config::{Config, InputFormat};
use cv_render::input::{parse_form, parse_record};
use cv_render::output::{delivery_file_name, write_document};
use cv_render::{generate_cv, layout_cv, Localizer, RenderError};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("cv_render={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cv-render v{}", env!("CARGO_PKG_VERSION"));

    let raw = tokio::fs::read_to_string(&config.input_path)
        .await
        .with_context(|| format!("Failed to read {}", config.input_path.display()))?;

    let mut record = match config.input_format {
        InputFormat::Record => parse_record(&raw)?,
        InputFormat::Form => parse_form(&raw, Utc::now())?,
    };
    info!(
        format = ?config.input_format,
        name = %record.personal_info.full_name,
        "input parsed"
    );

    if let Some(lang) = &config.language {
        if !Localizer::shared().supports(lang) {
            warn!(language = %lang, "unsupported language; base language will be used");
        }
        record.language = lang.clone();
    }

    let file_name = delivery_file_name(&record.personal_info.full_name, Utc::now().date_naive());

    // Layout is CPU-bound; keep it off the async workers.
    let dump = config.layout_dump;
    let (pdf, layout) = tokio::task::spawn_blocking(move || -> Result<_, RenderError> {
        let localizer = Localizer::shared();
        let pdf = generate_cv(&record, localizer)?;
        let layout = if dump {
            Some(layout_cv(&record, localizer)?.finish()?)
        } else {
            None
        };
        Ok((pdf, layout))
    })
    .await
    .context("Render task failed")??;

    let path = write_document(&config.output_dir, &file_name, &pdf).await?;
    info!(path = %path.display(), "CV written");

    if let Some(layout) = layout {
        let dump_name = format!("{}.layout.json", file_name.trim_end_matches(".pdf"));
        let dump_path = write_document(&config.output_dir, &dump_name, &layout).await?;
        info!(path = %dump_path.display(), "layout dump written");
    }

    Ok(())
}
