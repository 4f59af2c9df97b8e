//! Job resources configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::logging::LoggingParam;
use crate::resources::{JobResources, JobResourcesArgs};

/// Holds raw job resources config parsed from YAML file.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct RawJobResources {
    /// Minimum number of CPU cores.
    pub min_cores: Option<u32>,
    /// Minimum amount of memory in GB.
    pub min_ram: Option<f64>,
    /// Size of the data disk in GB.
    pub disk_size: Option<u64>,
    /// Size of the boot disk in GB.
    pub boot_disk_size: Option<u64>,
    /// Whether to use preemptible compute.
    pub preemptible: Option<bool>,
    /// Container image name.
    pub image: Option<String>,
    /// URI of the logs location, e.g. `gs://bucket/logs/` or a local path.
    pub logging: Option<String>,
    /// Locations in which the job is allowed to run.
    pub zones: Option<String>,
    /// Authorization scopes. An empty list means no scopes.
    pub scopes: Option<Vec<String>>,
    /// Seconds to keep the execution environment alive after a failure.
    pub keep_alive: Option<u64>,
}

impl From<RawJobResources> for JobResourcesArgs {
    fn from(raw: RawJobResources) -> Self {
        Self {
            min_cores: raw.min_cores,
            min_ram: raw.min_ram,
            disk_size: raw.disk_size,
            boot_disk_size: raw.boot_disk_size,
            preemptible: raw.preemptible,
            image: raw.image,
            logging: raw.logging.map(LoggingParam::new),
            zones: raw.zones,
            scopes: raw.scopes,
            keep_alive: raw.keep_alive,
        }
    }
}

impl JobResources {
    /// Creates job resources from YAML string (uses default values if some parameters are absent).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, String> {
        // a stream without documents (empty or comments only) and a null document both mean no overrides
        let mut documents = serde_yaml::Deserializer::from_str(yaml);
        let raw = match documents.next() {
            Some(document) => Option::<RawJobResources>::deserialize(document)
                .map_err(|e| format!("can't parse YAML: {}", e))?
                .unwrap_or_default(),
            None => RawJobResources::default(),
        };
        if documents.next().is_some() {
            return Err("can't parse YAML: expected a single document".to_string());
        }
        Ok(Self::new(raw.into()))
    }

    /// Creates job resources by reading parameter values from YAML file
    /// (uses default values if some parameters are absent).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| format!("can't read file {}: {}", path.display(), e))?;
        let resources = Self::from_yaml_str(&yaml).map_err(|e| format!("{} in file {}", e, path.display()))?;
        log::debug!("Loaded job resources from {}: {:?}", path.display(), resources);
        Ok(resources)
    }
}
