pub mod catalog;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod models;
pub mod stats;
pub mod store;


pub use catalog::*;
pub use config::*;
pub use display::*;
pub use error::Error;
pub use models::*;
pub use stats::*;
pub use store::*;

use tracing::Level;

/// Installs the fmt subscriber. Logs go to stderr; stdout carries rendered tables.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
