use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use urlsentry::{Config, ConsoleSurface, HttpBackend, StatsLoader, UrlChecker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!("[urlsentry] Backend: {}", config.base_url);
    info!("[urlsentry] Output format: {:?}", config.output_format);

    let backend = HttpBackend::new(&config.base_url, config.request_timeout)?;

    // Stats are best-effort and run alongside the check loop.
    let stats_backend = backend.clone();
    let loader = StatsLoader::new(config.thousands_separator.clone());
    let format = config.output_format;
    tokio::spawn(async move {
        let mut surface = ConsoleSurface::stdout(format);
        loader.load(&stats_backend, &mut surface).await
    });

    let mut checker = UrlChecker::new(ConsoleSurface::stdout(format), config.feature_limit);

    info!("[urlsentry] Enter one URL per line; end input to quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        checker.submit(&backend, &line).await;
    }

    info!("[urlsentry] Input closed, exiting");
    Ok(())
}
