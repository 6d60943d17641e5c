use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::creational::factory::VehicleError;
use crate::creational::singleton::SingletonError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown pattern: '{name}' (try `pattern-catalog list`)")]
    UnknownPattern { name: String },

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error(transparent)]
    Vehicle(#[from] VehicleError),

    #[error(transparent)]
    Singleton(#[from] SingletonError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CatalogError {
    pub fn unknown_pattern(name: impl Into<String>) -> Self {
        Self::UnknownPattern { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
