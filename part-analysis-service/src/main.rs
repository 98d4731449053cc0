use part_analysis_service::config::PartAnalysisConfig;
use part_analysis_service::startup::Application;
use service_core::observability::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("part-analysis-service", "info", otlp_endpoint.as_deref());

    // Nothing is bound until the configuration, API key included, is valid.
    let config = PartAnalysisConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        eprintln!("{}", e);
        std::io::Error::from(e)
    })?;

    let app = Application::build(config).await?;
    tracing::info!("Server is running on http://localhost:{}", app.port());

    let result = app.run_until_stopped().await;
    shutdown_tracing();
    result
}
