use alexandra::{router, Config, ErasedError, PowerStateCell};

use log::{error, info};
use tokio::net::TcpListener;
use tokio::signal::unix::{signal, SignalKind};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), ErasedError> {
    pretty_env_logger::init_timed();

    info!("alexandra version {VERSION}");

    let config = Config::from_env()?;
    info!("serving {} endpoint(s)", config.catalog.endpoints().len());

    let listener = TcpListener::bind(config.listen_address).await?;
    info!("Listening http://{}", config.listen_address);

    axum::serve(listener, router(config.catalog, PowerStateCell::new()))
        .with_graceful_shutdown(terminate())
        .await?;

    Ok(())
}

async fn terminate() {
    match signal(SignalKind::terminate()) {
        Ok(mut sig) => {
            sig.recv().await;
            info!("got SIGTERM, exiting...");
        }
        Err(err) => {
            error!("unable to listen for SIGTERM: {err}");
            std::future::pending::<()>().await;
        }
    }
}
