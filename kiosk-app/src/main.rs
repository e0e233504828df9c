use std::io;
use anyhow::Context;
use kiosk_app::{app_config::Config, Kiosk};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    // Logs go to stderr; stdout belongs to the kiosk screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let menus = config.menus().context("Invalid catalog configuration")?;
    tracing::info!(categories = menus.len(), "Starting kiosk");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut kiosk = Kiosk::new(menus, stdin.lock(), stdout.lock());
    kiosk.run()?;

    Ok(())
}
