use std::io;

use portfolio::configuration::Settings;
use portfolio::startup::Application;
use portfolio::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
#[allow(clippy::redundant_pub_crate)]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = get_subscriber("portfolio".into(), "info".into(), io::stdout);
    init_subscriber(subscriber);

    // Retrieve settings
    let config = Settings::get_config()?;

    // Serve the site API until the server stops
    Application::build(config).await?.run_until_stopped().await?;

    Ok(())
}
