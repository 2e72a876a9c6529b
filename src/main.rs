use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod domain;
mod metrics;
mod web;
mod workflow;

use config::AppConfig;
use domain::purge::{CmsPageEvent, Event, Message, ProductChangedEvent};
use workflow::{route, Application, CommandHandler, EventHandler, Workflow};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,purger=debug")),
        )
        .init();

    tracing::info!("Starting purger");

    let config = AppConfig::from_env()?;
    let metrics = Arc::new(metrics::Metrics::new()?);

    // === 1. Wire handlers into the registries ===
    let command_handler = CommandHandler::default();
    let event_handler = EventHandler::default();
    let workflow = Workflow::new(command_handler, event_handler);
    let mut application =
        Application::new(workflow, route, std::io::stdout()).with_metrics(metrics.clone());

    // === 2. Dispatch the sample messages, strictly in order ===
    let samples: [Message; 2] = [
        Event::from(ProductChangedEvent::new("sku", "operatingchain")).into(),
        Event::from(CmsPageEvent::new("sku")).into(),
    ];
    for message in &samples {
        application.handle(message)?;
    }

    // === 3. Serve the HTTP host ===
    let registry = Arc::new(metrics.registry().clone());
    web::start_server(registry, &config.http_host, config.http_port).await?;

    tracing::info!("Shutting down");
    Ok(())
}
