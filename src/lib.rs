pub mod args;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod processor;
pub mod sort;

pub use error::Error;
