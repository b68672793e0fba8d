use clap::Parser;
use tracing::{error, info};

use bookstore::{
    backend::StoreBackendBuilder,
    config::{BackendKind, Config},
    memory::InMemoryStore,
    server::{StartupError, serve},
    telemetry::setup_tracing,
};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = Config::parse();
    setup_tracing(&config);

    info!(backend = ?config.backend, "starting bookstore-server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = start(&config).await {
        error!(error = %e, "bookstore-server failed");
        std::process::exit(1);
    }
}

async fn start(config: &Config) -> Result<(), StartupError> {
    match config.backend {
        BackendKind::Memory => serve(InMemoryStore::builder().build().await?, config).await,
        BackendKind::Mongodb => start_mongodb(config).await,
    }
}

#[cfg(feature = "mongodb")]
async fn start_mongodb(config: &Config) -> Result<(), StartupError> {
    use bookstore::mongodb::MongoDbStore;

    let backend = MongoDbStore::builder(&config.mongodb_uri, &config.database)
        .connect_timeout(config.connect_timeout())
        .build()
        .await?;

    serve(backend, config).await
}

#[cfg(not(feature = "mongodb"))]
async fn start_mongodb(_config: &Config) -> Result<(), StartupError> {
    Err(StartupError::Unsupported(
        "built without the `mongodb` feature; use --backend memory".to_string(),
    ))
}
