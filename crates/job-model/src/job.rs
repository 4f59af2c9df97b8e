//! Job description.

use serde::Serialize;

use crate::resources::JobResources;
use crate::script::Script;

/// Represents a single job: requested resources and the script to run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Job {
    pub resources: JobResources,
    pub script: Script,
}

impl Job {
    pub fn new(resources: JobResources, script: Script) -> Self {
        Self { resources, script }
    }
}
