use std::cell::RefCell;
use std::path::Path;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;

use super::FileDirection;
use super::FileRecord;
use super::ProcessRecord;
use super::RecordService;
use super::SampleRecord;
use crate::measurement::MeasurementValue;

/// Everything a [MemoryService] has been asked to store.
#[derive(Debug, Default)]
pub struct MemoryState {
    /// Every process in the experiment.
    pub processes: Vec<ProcessRecord>,
    /// Samples per process as (process id, sample, is an output).
    pub samples: Vec<(String, SampleRecord, bool)>,
    /// Measurements as (process id, label, value).
    pub measurements: Vec<(String, String, MeasurementValue)>,
    /// Every uploaded file.
    pub uploads: Vec<FileRecord>,
    /// Files of processes as (process id, file id, direction).
    pub process_files: Vec<(String, String, FileDirection)>,
    /// Files of samples as (sample id, file id).
    pub sample_files: Vec<(String, String)>,
}

/// A record service that keeps everything in memory.
///
/// Records can be seeded with [MemoryService::with_process] and
/// [MemoryService::with_sample], and everything stored is visible in
/// [MemoryService::state] afterwards.
#[derive(Debug, Default)]
pub struct MemoryService {
    /// The stored records.
    pub state: RefCell<MemoryState>,
}

impl MemoryService {
    /// Seed a process.
    pub fn with_process(self, id: &str, name: &str, template_id: &str) -> Self {
        self.state.borrow_mut().processes.push(ProcessRecord {
            id: id.to_string(),
            name: name.to_string(),
            owner: "local".to_string(),
            template_id: template_id.to_string(),
            template_name: String::new(),
            mtime: None,
        });
        self
    }

    /// Seed a sample of `process_id`, either an output or an input.
    pub fn with_sample(self, process_id: &str, id: &str, name: &str, output: bool) -> Self {
        self.state.borrow_mut().samples.push((
            process_id.to_string(),
            SampleRecord {
                id: id.to_string(),
                name: name.to_string(),
            },
            output,
        ));
        self
    }

    fn next_id(&self, what: &str) -> String {
        let state = self.state.borrow();
        let n = state.processes.len() + state.samples.len() + state.uploads.len() + 1;

        format!("memory-{what}-{n}")
    }

    fn known(&self, process: &ProcessRecord) -> Result<()> {
        if !self
            .state
            .borrow()
            .processes
            .iter()
            .any(|p| p.id == process.id)
        {
            bail!("Unknown process {}", process.id);
        }

        Ok(())
    }
}

impl RecordService for MemoryService {
    fn create_process(&self, template_id: &str) -> Result<ProcessRecord> {
        let process = ProcessRecord {
            id: self.next_id("process"),
            name: String::new(),
            owner: "local".to_string(),
            template_id: template_id.to_string(),
            template_name: String::new(),
            mtime: None,
        };

        self.state.borrow_mut().processes.push(process.clone());
        Ok(process)
    }

    fn rename_process(&self, process: &ProcessRecord, name: &str) -> Result<ProcessRecord> {
        self.known(process)?;

        let mut state = self.state.borrow_mut();
        let stored = state
            .processes
            .iter_mut()
            .find(|p| p.id == process.id)
            .ok_or_else(|| anyhow!("Unknown process {}", process.id))?;

        stored.name = name.to_string();
        Ok(stored.clone())
    }

    fn create_samples(&self, process: &ProcessRecord, names: &[&str]) -> Result<Vec<SampleRecord>> {
        self.known(process)?;

        let mut created = Vec::new();

        for name in names {
            let sample = SampleRecord {
                id: self.next_id("sample"),
                name: name.to_string(),
            };

            self.state
                .borrow_mut()
                .samples
                .push((process.id.clone(), sample.clone(), true));
            created.push(sample);
        }

        Ok(created)
    }

    fn add_measurement(
        &self,
        process: &ProcessRecord,
        label: &str,
        value: &MeasurementValue,
    ) -> Result<()> {
        self.known(process)?;

        self.state.borrow_mut().measurements.push((
            process.id.clone(),
            label.to_string(),
            value.clone(),
        ));
        Ok(())
    }

    fn upload_file(&self, local_path: &Path, _: &[u8]) -> Result<FileRecord> {
        let file = FileRecord {
            id: self.next_id("file"),
            name: local_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        };

        self.state.borrow_mut().uploads.push(file.clone());
        Ok(file)
    }

    fn add_files(
        &self,
        process: &ProcessRecord,
        files: &[FileRecord],
        direction: FileDirection,
    ) -> Result<()> {
        self.known(process)?;

        let mut state = self.state.borrow_mut();
        for file in files {
            state
                .process_files
                .push((process.id.clone(), file.id.clone(), direction));
        }

        Ok(())
    }

    fn link_files(&self, sample: &SampleRecord, files: &[FileRecord]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        for file in files {
            state
                .sample_files
                .push((sample.id.clone(), file.id.clone()));
        }

        Ok(())
    }

    fn add_input_samples(&self, process: &ProcessRecord, samples: &[SampleRecord]) -> Result<()> {
        self.known(process)?;

        let mut state = self.state.borrow_mut();
        for sample in samples {
            state
                .samples
                .push((process.id.clone(), sample.clone(), false));
        }

        Ok(())
    }

    fn list_processes(&self) -> Result<Vec<ProcessRecord>> {
        Ok(self.state.borrow().processes.clone())
    }

    fn output_samples(&self, process: &ProcessRecord) -> Result<Vec<SampleRecord>> {
        Ok(self
            .state
            .borrow()
            .samples
            .iter()
            .filter(|(p, _, output)| *p == process.id && *output)
            .map(|(_, s, _)| s.clone())
            .collect())
    }

    fn all_samples(&self, process: &ProcessRecord) -> Result<Vec<SampleRecord>> {
        Ok(self
            .state
            .borrow()
            .samples
            .iter()
            .filter(|(p, _, _)| *p == process.id)
            .map(|(_, s, _)| s.clone())
            .collect())
    }
}

#[cfg(test)]
#[path = "tests/memory.rs"]
mod tests;
