use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use indicatif::MultiProgress;
use log::debug;
use log::info;
use prismscpfe_lib::constants::ID_STYLE;
use prismscpfe_lib::constants::PROGRESS_TICK;
use prismscpfe_lib::file_system::FileOperations;
use prismscpfe_lib::lookup::find_processes;
use prismscpfe_lib::remote::FileDirection;
use prismscpfe_lib::remote::FileRecord;
use prismscpfe_lib::remote::ProcessRecord;
use prismscpfe_lib::remote::RecordService;
use prismscpfe_lib::remote::SampleRecord;
use prismscpfe_lib::templates::ProcessKind;
use prismscpfe_lib::templates::Templates;

use crate::cli::printing::generate_progress_bar;
use crate::cli::printing::query_yes_no;

/// Creating the numerical parameters.
pub mod parameters;

/// Creating the single-file inputs.
pub mod inputs;

/// Creating the simulation that links inputs to results.
pub mod simulation;

/// Creating everything at once.
pub mod full;

/// Looking up existing records.
pub mod find;

/// A process created by `prismscpfe` together with its output sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    /// The new process.
    pub process: ProcessRecord,

    /// Its output sample.
    pub sample: SampleRecord,
}

impl Created {
    /// The line printed for every created process.
    pub fn report(&self) -> String {
        format!(
            "Created process: {} {ID_STYLE}{}{ID_STYLE:#}",
            self.process.name, self.process.id
        )
    }
}

/// Everything a workflow needs to talk to the outside world.
pub struct Session<'a, S, F>
where
    S: RecordService,
    F: FileOperations,
{
    /// The record service bound to the configured experiment.
    pub service: &'a S,

    /// The local file system.
    pub fs: &'a F,

    /// The template id of every kind.
    pub templates: Templates,

    /// The directory holding `parameters.in` and the simulation outputs.
    pub workdir: PathBuf,

    /// The glob matching result files inside `workdir`.
    pub results: String,

    /// True if the user may not be asked anything.
    pub script: bool,

    /// Where progress bars are drawn.
    pub progress: MultiProgress,
}

impl<S, F> Session<'_, S, F>
where
    S: RecordService,
    F: FileOperations,
{
    /// Check with the user before creating a second process of `kind`.
    ///
    /// Returns false if the user does not want to go ahead.
    pub fn confirm_new(&self, kind: ProcessKind) -> Result<bool> {
        let existing = find_processes(self.service, &self.templates, kind)?;

        if existing.is_empty() || self.script {
            return Ok(true);
        }

        query_yes_no(&format!(
            "The experiment already has {} {kind} process(es). Create another one?",
            existing.len()
        ))
    }

    /// Create a process of `kind` with its name and a single output sample.
    pub fn new_process(&self, kind: ProcessKind, sample_name: Option<&str>) -> Result<Created> {
        let template_id = self.templates.template_id(kind);
        debug!("The template id is {template_id:?}");

        let process = self.service.create_process(template_id)?;
        let process = self.service.rename_process(&process, &kind.process_name())?;

        let sample_name = sample_name
            .map(str::to_string)
            .unwrap_or_else(|| kind.sample_name());

        let sample = self
            .service
            .create_samples(&process, &[sample_name.as_str()])?
            .into_iter()
            .next()
            .ok_or_else(|| {
                anyhow::anyhow!("The record service did not create the sample {sample_name:?}")
            })?;

        Ok(Created { process, sample })
    }

    /// Upload local files and attach them to `process`.
    pub fn attach_files(
        &self,
        process: &ProcessRecord,
        paths: &[PathBuf],
        direction: FileDirection,
    ) -> Result<Vec<FileRecord>> {
        let bar = self
            .progress
            .add(generate_progress_bar(paths.len() as u64, "Uploading")?);
        bar.enable_steady_tick(PROGRESS_TICK);

        let mut uploaded = Vec::new();

        for path in paths {
            bar.set_message(format!("{}", self.display_path(path).display()));

            let contents = self.fs.read_bytes(path)?;
            uploaded.push(self.service.upload_file(path, &contents)?);

            bar.inc(1);
        }

        bar.finish_and_clear();
        self.progress.remove(&bar);

        self.service.add_files(process, &uploaded, direction)?;
        info!("Added {} file(s) to {}", uploaded.len(), process.name);

        Ok(uploaded)
    }

    /// `path` relative to the working directory, where possible.
    fn display_path<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.workdir).unwrap_or(path)
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
