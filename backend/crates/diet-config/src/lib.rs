mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

pub const CONFIG_DIR_ENV: &str = "DIET_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".diet";
const CONFIG_FILE_NAME: &str = "config.toml";
const SESSION_FILE_NAME: &str = "session";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_COOKIE_NAME: &str = "sessionId";
const DEFAULT_SESSION_MAX_AGE_DAYS: u32 = 7;
const MIN_SESSION_MAX_AGE_DAYS: u32 = 1;
const MAX_SESSION_MAX_AGE_DAYS: u32 = 365;

#[cfg(test)]
mod tests;
