use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let mongodb = tag_client(MongoConfig::from_env()?, &app);
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
        })
    }
}

/// Name the driver connection after the service unless `MONGODB_APP_NAME` overrides it.
fn tag_client(mongodb: MongoConfig, app: &AppInfo) -> MongoConfig {
    if mongodb.app_name.is_some() {
        mongodb
    } else {
        mongodb.with_app_name(app.name)
    }
}
