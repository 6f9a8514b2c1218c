pub mod config;
pub mod sea_ext;
pub mod tracing;
