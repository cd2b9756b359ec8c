mod catalog;
mod config;
mod error;
mod handler;
mod power;
mod web_service;

pub use catalog::Catalog;
pub use config::Config;
pub use error::Error;
pub use handler::{handle_directive, Route};
pub use power::PowerStateCell;
pub use web_service::router;

pub type ErasedError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
