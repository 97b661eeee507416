mod config;
mod engine;
mod model;
mod output;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings_io::load_run_context;
use crate::config::RunContext;
use crate::engine::llm_client::AnthropicClient;
use crate::engine::pipeline::Pipeline;
use crate::output::writer::OutputWriter;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let RunContext {
        config,
        topic,
        api_key,
    } = load_run_context().context("failed to load configuration")?;

    info!(topic = %topic.name, difficulty = %config.difficulty, "generating content");

    let client = AnthropicClient::new(api_key, &config)?;
    let content = Pipeline::new(&client, &config, &topic)
        .run()
        .context("content generation failed")?;

    let today = chrono::Local::now().date_naive();
    let day_dir = OutputWriter::new(&config.output_dir)
        .write(&config, &topic, today, &content)
        .context("failed to write generated content")?;

    info!(path = %day_dir.display(), "content generated");
    Ok(())
}
