use anyhow::Result;
use household_energy_estimator::{api, config, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::load()?;
    init_tracing(&cfg.logging);

    #[allow(unused_mut)]
    let mut app = api::router(api::AppState::new(), &cfg)?;

    #[cfg(feature = "swagger")]
    {
        app = api::with_swagger(app);
    }

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!("binding to 0.0.0.0 - the estimator will be reachable from the network");
    }

    info!(%addr, "starting Household Energy Estimator");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
