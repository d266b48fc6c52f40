use hybrid_periodizer::api;
use hybrid_periodizer::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let app = api::router();

    let listener = tokio::net::TcpListener::bind(config.listen_address()).await?;
    tracing::info!(address = %config.listen_address(), "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
