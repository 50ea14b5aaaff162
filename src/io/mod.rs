pub mod config;
pub mod csv;
pub mod json;

pub use config::load_config;
