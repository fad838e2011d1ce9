/// Configuration module - Load and validate the license secret
pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{DEV_DEFAULT_SECRET, DEV_MODE_ENV_VAR, LicenseConfig, SECRET_ENV_VAR};
