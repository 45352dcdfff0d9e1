mod config;
mod routes;

use config::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let port = config::parse_port(std::env::var("PORT").ok().as_deref())?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "signal402 listening");
    axum::serve(listener, app).await?;
    Ok(())
}
