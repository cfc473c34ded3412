use tracing::{error, warn};

use devsnap_lib::bootstrap::{init_tracing_subscriber, load_config, resolve_config_path};
use ds_core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    init_tracing_subscriber()?;

    let config_path = resolve_config_path();
    let config = match load_config(config_path.clone()) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "Failed to load config, using empty configuration");
            AppConfig::empty()
        }
    };

    if let Err(e) = devsnap_lib::run_app(config).await {
        error!(error = ?e, "devsnap failed");
        return Err(e);
    }
    Ok(())
}
