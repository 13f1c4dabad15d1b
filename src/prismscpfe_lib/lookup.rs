use anyhow::Context;
use anyhow::Result;
use log::debug;

use crate::bailc;
use crate::constants::ID_STYLE;
use crate::constants::PRIMARY_STYLE;
use crate::error::ctx;
use crate::remote::ProcessRecord;
use crate::remote::RecordService;
use crate::remote::SampleRecord;
use crate::templates::ProcessKind;
use crate::templates::Templates;

/// The outcome of looking for exactly one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// Nothing matched.
    NotFound,

    /// Exactly one record matched.
    Found(T),

    /// More than one record matched.
    Ambiguous(Vec<T>),
}

impl<T> From<Vec<T>> for Lookup<T> {
    fn from(mut matches: Vec<T>) -> Self {
        match matches.len() {
            0 => Lookup::NotFound,
            1 => Lookup::Found(matches.remove(0)),
            _ => Lookup::Ambiguous(matches),
        }
    }
}

impl Lookup<ProcessRecord> {
    /// The single process of `kind`, or an error telling the user how to
    /// get there.
    pub fn found(self, kind: ProcessKind) -> Result<ProcessRecord> {
        let command = kind.command();

        match self {
            Lookup::Found(process) => Ok(process),
            Lookup::NotFound => {
                bailc!(
                  "Did not find a {kind} process in the experiment", ;
                  "", ;
                  "Create one with {PRIMARY_STYLE}prismscpfe {command} create{PRIMARY_STYLE:#} or pass its id explicitly",
                );
            }
            Lookup::Ambiguous(candidates) => {
                let listed = candidates
                    .iter()
                    .map(|p| format!("  {} {ID_STYLE}{}{ID_STYLE:#}", p.name, p.id))
                    .collect::<Vec<_>>()
                    .join("\n");

                bailc!(
                  "Found {} {kind} processes in the experiment", candidates.len() ;
                  "The candidates are:\n{}", listed ;
                  "Pass the id of the one you want explicitly",
                );
            }
        }
    }
}

/// All processes in the experiment created from the template of `kind`.
pub fn find_processes(
    service: &impl RecordService,
    templates: &Templates,
    kind: ProcessKind,
) -> Result<Vec<ProcessRecord>> {
    let template_id = templates.template_id(kind);

    let found: Vec<ProcessRecord> = service
        .list_processes()?
        .into_iter()
        .filter(|p| p.template_id == template_id)
        .collect();

    debug!("Found {} {kind} process(es)", found.len());

    Ok(found)
}

/// The process of `kind`, if there is exactly one.
pub fn find_unique(
    service: &impl RecordService,
    templates: &Templates,
    kind: ProcessKind,
) -> Result<Lookup<ProcessRecord>> {
    Ok(find_processes(service, templates, kind)?.into())
}

/// Scan the samples of every process in the experiment for `id`.
pub fn find_sample(service: &impl RecordService, id: &str) -> Result<Option<SampleRecord>> {
    for process in service.list_processes()? {
        if let Some(sample) = service
            .all_samples(&process)?
            .into_iter()
            .find(|s| s.id == id)
        {
            return Ok(Some(sample));
        }
    }

    Ok(None)
}

/// The output sample of `kind` used as an input of a simulation.
///
/// An explicit id must name an existing sample. Otherwise we take the
/// first output sample of the only process of that kind.
pub fn resolve_output_sample(
    service: &impl RecordService,
    templates: &Templates,
    kind: ProcessKind,
    explicit_id: Option<&str>,
) -> Result<SampleRecord> {
    if let Some(id) = explicit_id {
        if let Some(sample) = find_sample(service, id)? {
            return Ok(sample);
        }

        bailc!(
          "There is no sample with id {ID_STYLE}{id}{ID_STYLE:#}", ;
          "", ;
          "List the {kind} samples with {PRIMARY_STYLE}prismscpfe {} find{PRIMARY_STYLE:#}", kind.command()
        );
    }

    let process = find_unique(service, templates, kind)?.found(kind)?;

    service
        .output_samples(&process)?
        .into_iter()
        .next()
        .with_context(ctx!(
          "The {kind} process {} has no output sample", process.id ;
          "Recreate it with {PRIMARY_STYLE}prismscpfe {} create{PRIMARY_STYLE:#}", kind.command()
        ))
}

#[cfg(test)]
#[path = "tests/lookup.rs"]
mod tests;
