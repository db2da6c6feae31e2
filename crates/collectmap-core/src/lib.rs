pub mod app_config;
pub mod color;
pub mod config;
pub mod types;

pub use app_config::AppConfig;
pub use color::{generate_colors, HslColor};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use types::{Category, DateRange, GeoPoint};
