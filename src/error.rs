use crate::{config::ConfigError, discovery::DocumentError};
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {:?}", _0)]
    Config(#[from] ConfigError),
    #[error("Discovery document error: {:?}", _0)]
    Document(#[from] DocumentError),
    #[error("Could not serialize output as json: {:?}", _0)]
    SerializeJson(#[from] serde_json::Error),
    #[error("Could not serialize output as yaml: {:?}", _0)]
    SerializeYaml(#[from] serde_yaml::Error),
    #[error("Could not write output: {:?}", _0)]
    Write(#[from] io::Error),
}
