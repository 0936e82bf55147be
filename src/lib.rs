pub mod config;
pub mod error;
pub mod observability;
pub mod render;

pub use config::Config;
pub use error::AppError;
