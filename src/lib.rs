pub mod config;
pub mod core;

pub use config::{ConfigError, NormalizerConfig};
pub use core::normalizer::{normalize, normalize_with, Normalizer};
