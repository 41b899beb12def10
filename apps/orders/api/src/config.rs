use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_orders::UpstreamConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components with the upstream API settings
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub upstream: UpstreamConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let upstream = UpstreamConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            upstream,
            server,
            environment,
        })
    }
}
