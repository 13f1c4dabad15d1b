use std::path::Path;

use anyhow::Result;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::measurement::MeasurementValue;

/// A record service that only pretends, for `--dry` runs.
pub mod dry;

/// A record service kept in memory.
pub mod memory;

/// The JSON-over-HTTP record service.
#[cfg(feature = "remote")]
pub mod http;

/// A process as stored by the record service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// The unique id.
    pub id: String,

    /// The display name.
    pub name: String,

    /// The user that owns the process.
    #[serde(default)]
    pub owner: String,

    /// The id of the template the process was created from.
    pub template_id: String,

    /// The display name of that template.
    #[serde(default)]
    pub template_name: String,

    /// The last modification time.
    #[serde(default)]
    pub mtime: Option<DateTime<Utc>>,
}

/// A sample as stored by the record service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// The unique id.
    pub id: String,

    /// The display name.
    pub name: String,
}

/// An uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// The unique id.
    pub id: String,

    /// The file name in the project.
    pub name: String,
}

/// Whether files are consumed or produced by a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileDirection {
    /// The process reads the file.
    In,

    /// The process produced the file.
    Out,
}

/// The interface for interacting with the record service.
///
/// A service is bound to one project and experiment. This can be the real
/// service over HTTP, a dry run that only logs, or an in-memory store.
pub trait RecordService {
    /// Create a new process in the experiment from a template.
    fn create_process(&self, template_id: &str) -> Result<ProcessRecord>;

    /// Rename a process, returning its updated record.
    fn rename_process(&self, process: &ProcessRecord, name: &str) -> Result<ProcessRecord>;

    /// Create output samples of a process, one per name.
    fn create_samples(&self, process: &ProcessRecord, names: &[&str]) -> Result<Vec<SampleRecord>>;

    /// Attach a typed measurement to a process.
    fn add_measurement(
        &self,
        process: &ProcessRecord,
        label: &str,
        value: &MeasurementValue,
    ) -> Result<()>;

    /// Upload the contents of a local file to the project.
    fn upload_file(&self, local_path: &Path, contents: &[u8]) -> Result<FileRecord>;

    /// Associate uploaded files with a process.
    fn add_files(
        &self,
        process: &ProcessRecord,
        files: &[FileRecord],
        direction: FileDirection,
    ) -> Result<()>;

    /// Associate uploaded files with a sample.
    fn link_files(&self, sample: &SampleRecord, files: &[FileRecord]) -> Result<()>;

    /// Make existing samples inputs of a process.
    fn add_input_samples(&self, process: &ProcessRecord, samples: &[SampleRecord]) -> Result<()>;

    /// All processes of the experiment.
    fn list_processes(&self) -> Result<Vec<ProcessRecord>>;

    /// The samples a process produced.
    fn output_samples(&self, process: &ProcessRecord) -> Result<Vec<SampleRecord>>;

    /// Every sample a process consumes or produces.
    fn all_samples(&self, process: &ProcessRecord) -> Result<Vec<SampleRecord>>;
}

#[cfg(test)]
#[path = "tests/dry.rs"]
mod tests;
