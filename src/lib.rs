#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod fonts;
pub mod inject;
pub mod manifest;
pub mod pipeline;

pub use config::Config;
pub use error::PreloadError;
