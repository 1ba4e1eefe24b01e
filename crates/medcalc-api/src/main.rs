use tracing_subscriber::EnvFilter;

use medcalc_api::config::ApiConfig;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = ApiConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, scores = medcalc_scores::registry::all().len(), "listening");

    axum::serve(listener, medcalc_api::router()).await?;
    Ok(())
}
