//! Location of job logs.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Storage holding the log files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileProvider {
    Local,
    GoogleStorage,
}

impl Display for FileProvider {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            FileProvider::Local => write!(f, "local"),
            FileProvider::GoogleStorage => write!(f, "google_storage"),
        }
    }
}

/// Path to the location where a job writes its logs.
///
/// Job resources only store and forward this value, its interpretation is up to the backend adapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingParam {
    uri: String,
    file_provider: FileProvider,
}

impl LoggingParam {
    /// Creates logging location from URI, the provider is inferred from the URI scheme.
    pub fn new(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let file_provider = if uri.starts_with("gs://") {
            FileProvider::GoogleStorage
        } else {
            FileProvider::Local
        };
        Self { uri, file_provider }
    }

    pub fn with_provider(uri: impl Into<String>, file_provider: FileProvider) -> Self {
        Self {
            uri: uri.into(),
            file_provider,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn file_provider(&self) -> FileProvider {
        self.file_provider
    }
}

impl Display for LoggingParam {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.uri, self.file_provider)
    }
}
