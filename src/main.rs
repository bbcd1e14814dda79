//! tourbook server binary.
//!
//! Run with:
//!   RUST_LOG=info TOURS_DATA=data.json PORT=3000 cargo run
//!
//! Try:
//!   curl 'http://localhost:3000/tours?country=france&sortBy=price,desc&page=1&pageSize=6'
//!   curl http://localhost:3000/tours/2
//!   curl http://localhost:3000/healthz

use std::process::ExitCode;
use std::sync::Arc;

use tourbook::{Config, Server, TourStore};
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::from_env();

    // Nothing can be served without the data, so a load failure is fatal.
    let store = match TourStore::load(&config.data_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("error reading data file: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = Server::bind(config.listen_addr()).serve(tourbook::app(store)).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
