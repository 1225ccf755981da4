//! Connection pool management

mod mysql;

pub use mysql::{create_pool, create_pool_from_env, DatabaseConfig};
pub use sqlx::MySqlPool;
