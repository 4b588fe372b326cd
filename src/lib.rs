pub mod collection;
pub mod configuration;
pub mod error;
pub mod parser;
pub mod presentation;
pub mod telemetry;
pub mod types;

pub use error::DealsError;
