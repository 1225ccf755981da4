//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, EmailConfig, EmailProvider,
    Environment, JwtConfig, RateLimitConfig, ServerConfig,
};
