use anyhow::Result;
use tracing_subscriber::EnvFilter;

use bgg_catalog::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bgg_catalog=info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    if let Err(e) = bgg_catalog::run(config).await {
        tracing::error!("Fatal: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
