//! Script executed by the job.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Script to be run by the job.
///
/// The script can be written in any language, its contents are passed to the backend as is. The backend writes
/// the contents to a file with the given name and executes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// File name of the script.
    pub name: String,
    /// Contents of the script.
    pub value: String,
}

impl Script {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Reads script from file, the script is named after the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .ok_or_else(|| format!("path [{}] does not point to a file", path.display()))?
            .to_str()
            .ok_or_else(|| format!("file name of [{}] is not valid UTF-8", path.display()))?
            .to_string();
        let value = std::fs::read_to_string(path).map_err(|e| format!("can't read file {}: {}", path.display(), e))?;
        log::debug!("Loaded script {} ({} bytes) from {}", name, value.len(), path.display());
        Ok(Self { name, value })
    }
}
