//! Job resource requirements.

use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::logging::LoggingParam;

pub const DEFAULT_MIN_CORES: u32 = 1;
pub const DEFAULT_MIN_RAM: f64 = 3.75;
pub const DEFAULT_DISK_SIZE: u64 = 200;
pub const DEFAULT_BOOT_DISK_SIZE: u64 = 10;
pub const DEFAULT_SCOPES: &[&str] = &["https://www.googleapis.com/auth/bigquery"];

/// Returns the default authorization scopes.
///
/// The sequence is allocated once per process and shared by all records using the default.
pub fn default_scopes() -> Arc<[String]> {
    static SCOPES: OnceLock<Arc<[String]>> = OnceLock::new();
    SCOPES
        .get_or_init(|| DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect())
        .clone()
}

/// Arguments for [`JobResources::new`].
///
/// Unset fields take their canonical defaults, so usually only the required ones are specified:
///
/// ```ignore
/// let resources = JobResources::new(JobResourcesArgs {
///     min_cores: Some(4),
///     preemptible: Some(true),
///     ..Default::default()
/// });
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobResourcesArgs {
    pub min_cores: Option<u32>,
    pub min_ram: Option<f64>,
    pub disk_size: Option<u64>,
    pub boot_disk_size: Option<u64>,
    pub preemptible: Option<bool>,
    pub image: Option<String>,
    pub logging: Option<LoggingParam>,
    pub zones: Option<String>,
    /// `Some(vec![])` produces a record without scopes, `None` produces the default scopes.
    pub scopes: Option<Vec<String>>,
    pub keep_alive: Option<u64>,
}

/// Represents resources requested by a job.
///
/// The record is immutable: fields are private and exposed only through accessors. A modified record is obtained
/// via `with_*` methods, which copy the remaining fields (the scopes sequence is shared, not copied).
/// Values are not validated, this is left to the backend adapters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobResources {
    min_cores: u32,
    min_ram: f64,
    disk_size: u64,
    boot_disk_size: u64,
    preemptible: bool,
    image: Option<String>,
    logging: Option<LoggingParam>,
    zones: Option<String>,
    scopes: Arc<[String]>,
    keep_alive: Option<u64>,
}

impl JobResources {
    /// Creates resources record, substituting defaults for the unset arguments.
    pub fn new(args: JobResourcesArgs) -> Self {
        Self {
            min_cores: args.min_cores.unwrap_or(DEFAULT_MIN_CORES),
            min_ram: args.min_ram.unwrap_or(DEFAULT_MIN_RAM),
            disk_size: args.disk_size.unwrap_or(DEFAULT_DISK_SIZE),
            boot_disk_size: args.boot_disk_size.unwrap_or(DEFAULT_BOOT_DISK_SIZE),
            preemptible: args.preemptible.unwrap_or(false),
            image: args.image,
            logging: args.logging,
            zones: args.zones,
            scopes: args.scopes.map(Arc::from).unwrap_or_else(default_scopes),
            keep_alive: args.keep_alive,
        }
    }

    /// Minimum number of CPU cores.
    pub fn min_cores(&self) -> u32 {
        self.min_cores
    }

    /// Minimum amount of memory in GB.
    pub fn min_ram(&self) -> f64 {
        self.min_ram
    }

    /// Size of the data disk in GB.
    pub fn disk_size(&self) -> u64 {
        self.disk_size
    }

    /// Size of the boot disk in GB.
    pub fn boot_disk_size(&self) -> u64 {
        self.boot_disk_size
    }

    /// Whether the job may run on preemptible (low-priority) compute.
    pub fn preemptible(&self) -> bool {
        self.preemptible
    }

    /// Container image name.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Location where the job writes its logs.
    pub fn logging(&self) -> Option<&LoggingParam> {
        self.logging.as_ref()
    }

    /// Locations in which the job is allowed to run.
    pub fn zones(&self) -> Option<&str> {
        self.zones.as_deref()
    }

    /// Authorization scopes granted to the job.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Seconds to keep the execution environment alive after a failure.
    pub fn keep_alive(&self) -> Option<u64> {
        self.keep_alive
    }

    pub fn with_min_cores(&self, min_cores: u32) -> Self {
        Self {
            min_cores,
            ..self.clone()
        }
    }

    pub fn with_min_ram(&self, min_ram: f64) -> Self {
        Self { min_ram, ..self.clone() }
    }

    pub fn with_disk_size(&self, disk_size: u64) -> Self {
        Self {
            disk_size,
            ..self.clone()
        }
    }

    pub fn with_boot_disk_size(&self, boot_disk_size: u64) -> Self {
        Self {
            boot_disk_size,
            ..self.clone()
        }
    }

    pub fn with_preemptible(&self, preemptible: bool) -> Self {
        Self {
            preemptible,
            ..self.clone()
        }
    }

    pub fn with_image(&self, image: Option<String>) -> Self {
        Self { image, ..self.clone() }
    }

    pub fn with_logging(&self, logging: Option<LoggingParam>) -> Self {
        Self {
            logging,
            ..self.clone()
        }
    }

    pub fn with_zones(&self, zones: Option<String>) -> Self {
        Self { zones, ..self.clone() }
    }

    pub fn with_scopes(&self, scopes: Vec<String>) -> Self {
        Self {
            scopes: Arc::from(scopes),
            ..self.clone()
        }
    }

    pub fn with_keep_alive(&self, keep_alive: Option<u64>) -> Self {
        Self {
            keep_alive,
            ..self.clone()
        }
    }
}

impl Default for JobResources {
    fn default() -> Self {
        Self::new(JobResourcesArgs::default())
    }
}
