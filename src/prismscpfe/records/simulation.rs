use anyhow::Context;
use anyhow::Result;
use log::info;
use log::warn;
use prismscpfe_lib::bailc;
use prismscpfe_lib::constants::ID_STYLE;
use prismscpfe_lib::constants::NUM_CORES_LABEL;
use prismscpfe_lib::constants::WARNING_STYLE;
use prismscpfe_lib::ctx;
use prismscpfe_lib::file_system::FileOperations;
use prismscpfe_lib::lookup::find_sample;
use prismscpfe_lib::lookup::resolve_output_sample;
use prismscpfe_lib::measurement::MeasurementValue;
use prismscpfe_lib::remote::FileDirection;
use prismscpfe_lib::remote::RecordService;
use prismscpfe_lib::remote::SampleRecord;
use prismscpfe_lib::templates::ProcessKind;

use super::Created;
use super::Session;

/// The input samples of a new simulation.
///
/// Every explicit id has to exist. Without ids, the output of the only
/// process of every input kind is used.
pub fn resolve_inputs<S, F>(
    session: &Session<'_, S, F>,
    explicit_ids: Option<&[String]>,
) -> Result<Vec<SampleRecord>>
where
    S: RecordService,
    F: FileOperations,
{
    match explicit_ids {
        Some(ids) => ids
            .iter()
            .map(|id| {
                find_sample(session.service, id)?.with_context(ctx!(
                  "There is no sample with id {ID_STYLE}{}{ID_STYLE:#}", id ;
                  "Check the ids passed to --input-sample-ids",
                ))
            })
            .collect(),
        None => ProcessKind::INPUTS
            .iter()
            .map(|kind| resolve_output_sample(session.service, &session.templates, *kind, None))
            .collect(),
    }
}

/// Record a simulation run: its inputs, core count and result files.
pub fn create_simulation<S, F>(
    session: &Session<'_, S, F>,
    name: Option<&str>,
    inputs: &[SampleRecord],
    num_cores: Option<i64>,
) -> Result<Created>
where
    S: RecordService,
    F: FileOperations,
{
    let kind = ProcessKind::Simulation;

    if let Some(cores) = num_cores {
        if cores < 1 {
            bailc!(
              "Cannot run a simulation on {cores} cores", ;
              "", ;
              "Pass a positive number to --num-cores",
            );
        }
    }

    let results = session.fs.glob_files(&session.workdir, &session.results)?;

    if results.is_empty() {
        warn!(
            "{WARNING_STYLE}No files match {:?}, the results sample will be empty{WARNING_STYLE:#}",
            session.results
        );
    }

    let created = session.new_process(kind, name)?;
    let Created { process, sample } = &created;

    info!("Adding {} input sample(s)", inputs.len());
    session.service.add_input_samples(process, inputs)?;

    if let Some(cores) = num_cores {
        session.service.add_measurement(
            process,
            NUM_CORES_LABEL,
            &MeasurementValue::Integer(cores),
        )?;
    }

    let files = session.attach_files(process, &results, FileDirection::Out)?;
    session.service.link_files(sample, &files)?;

    Ok(created)
}

#[cfg(test)]
#[path = "tests/simulation.rs"]
mod tests;
