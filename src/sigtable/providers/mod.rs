use std::io;
use std::path::PathBuf;

pub use json::JsonFile;
pub use sample::Sample;

use crate::sigtable::FunctionSignature;

mod json;
mod sample;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse signatures in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub trait Provider: Send + Sync {
    fn title(&self) -> String {
        "Unknown".into()
    }

    /// Loads all signatures that this provider can provide.
    fn load(&self) -> Result<Vec<FunctionSignature>, LoadError>;
}
