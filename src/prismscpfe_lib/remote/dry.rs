use std::cell::Cell;
use std::path::Path;

use anyhow::Result;
use log::info;

use super::FileDirection;
use super::FileRecord;
use super::ProcessRecord;
use super::RecordService;
use super::SampleRecord;
use crate::measurement::MeasurementValue;

/// Logs every change instead of making it.
///
/// Created records get made-up sequential ids, and the experiment always
/// looks empty.
#[derive(Debug, Default)]
pub struct DryRunService {
    /// The number of records made up so far.
    issued: Cell<usize>,
}

impl DryRunService {
    /// Make up an id.
    fn next_id(&self, what: &str) -> String {
        let n = self.issued.get() + 1;
        self.issued.set(n);

        format!("dry-{what}-{n}")
    }
}

impl RecordService for DryRunService {
    fn create_process(&self, template_id: &str) -> Result<ProcessRecord> {
        info!("Would have created a process from {template_id:?} (dry)");

        Ok(ProcessRecord {
            id: self.next_id("process"),
            name: String::new(),
            owner: String::new(),
            template_id: template_id.to_string(),
            template_name: template_id.to_string(),
            mtime: None,
        })
    }

    fn rename_process(&self, process: &ProcessRecord, name: &str) -> Result<ProcessRecord> {
        info!("Would have renamed {} to {name:?} (dry)", process.id);

        Ok(ProcessRecord {
            name: name.to_string(),
            ..process.clone()
        })
    }

    fn create_samples(&self, process: &ProcessRecord, names: &[&str]) -> Result<Vec<SampleRecord>> {
        info!("Would have created samples {names:?} for {} (dry)", process.id);

        Ok(names
            .iter()
            .map(|name| SampleRecord {
                id: self.next_id("sample"),
                name: name.to_string(),
            })
            .collect())
    }

    fn add_measurement(
        &self,
        process: &ProcessRecord,
        label: &str,
        value: &MeasurementValue,
    ) -> Result<()> {
        info!(
            "Would have set {label:?} = {value} ({}) on {} (dry)",
            value.kind(),
            process.id
        );

        Ok(())
    }

    fn upload_file(&self, local_path: &Path, contents: &[u8]) -> Result<FileRecord> {
        info!(
            "Would have uploaded {local_path:?} ({} bytes) (dry)",
            contents.len()
        );

        Ok(FileRecord {
            id: self.next_id("file"),
            name: local_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        })
    }

    fn add_files(
        &self,
        process: &ProcessRecord,
        files: &[FileRecord],
        direction: FileDirection,
    ) -> Result<()> {
        info!(
            "Would have added {} file(s) to {} as {direction:?} (dry)",
            files.len(),
            process.id
        );

        Ok(())
    }

    fn link_files(&self, sample: &SampleRecord, files: &[FileRecord]) -> Result<()> {
        info!(
            "Would have linked {} file(s) to {} (dry)",
            files.len(),
            sample.id
        );

        Ok(())
    }

    fn add_input_samples(&self, process: &ProcessRecord, samples: &[SampleRecord]) -> Result<()> {
        info!(
            "Would have added {} input sample(s) to {} (dry)",
            samples.len(),
            process.id
        );

        Ok(())
    }

    fn list_processes(&self) -> Result<Vec<ProcessRecord>> {
        Ok(Vec::new())
    }

    fn output_samples(&self, _: &ProcessRecord) -> Result<Vec<SampleRecord>> {
        Ok(Vec::new())
    }

    fn all_samples(&self, _: &ProcessRecord) -> Result<Vec<SampleRecord>> {
        Ok(Vec::new())
    }
}
