use dotenvy::dotenv;

mod api {
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod catalog {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod error;
    pub mod health {
        pub mod routes;
    }
    pub mod notification {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod order {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod tags;
    pub mod wishlist {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}

mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod server_config;
    pub mod simulation_config;
    pub mod storage_config;
}

mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point
///
/// Loads configuration, restores the shopper's stored state and serves the
/// storefront over HTTP.
/// - config/: Server, CORS, storage and simulation settings
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies and restore stored state
    let container = DependencyContainer::new(&config).await?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
