use blogseed::{config::AppConfig, pipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    if config.log.json {
        tracing_subscriber::fmt()
            .with_env_filter(config.log.filter.as_str())
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(config.log.filter.as_str())
            .with_writer(std::io::stderr)
            .init();
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Stage failures are already logged; the process still exits normally.
    if let Err(e) = pipeline::run(&config, &mut out).await {
        tracing::debug!(stage = e.stage(), "pipeline did not complete");
    }

    Ok(())
}
