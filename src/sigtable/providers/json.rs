use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::sigtable::{FunctionSignature, LoadError, Provider};

/// Reads a JSON array of signatures from a file.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Provider for JsonFile {
    fn title(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<FunctionSignature>, LoadError> {
        let fp = File::open(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(fp)).map_err(|source| LoadError::Json {
            path: self.path.clone(),
            source,
        })
    }
}
