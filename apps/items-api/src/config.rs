use app_config::{FromEnv, logging::LogConfig, server::ServerConfig};

// Re-export Environment for use in other modules
pub use app_config::Environment;

/// Application configuration
/// Composes shared config components from the `app-config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let log = LogConfig::from_env();

        Ok(Self {
            server,
            log,
            environment,
        })
    }
}
