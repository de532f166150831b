mod intersect_config;

pub use intersect_config::{ConfigError, IntersectConfig, INTERSECT_CONFIG_FILE};
