use anyhow::Result;
use momantza_core::config::{HTTP_HOST, HTTP_PORT};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = momantza_server::load_config();
    let ax = momantza_server::build(&config).await?;

    let snapshot = config.snapshot();
    let host = snapshot.get(HTTP_HOST).unwrap_or("127.0.0.1");
    let port = snapshot.get(HTTP_PORT).unwrap_or("5000");
    let addr = format!("{host}:{port}");

    ax.listen(addr).await?;

    Ok(())
}
