use super::{
    cors_config, server_config::ServerConfig, simulation_config::SimulationConfig, storage_config,
};
use persistence::store::StorageConfig;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            storage: storage_config::from_env(),
            simulation: SimulationConfig::from_env(),
        }
    }
}
