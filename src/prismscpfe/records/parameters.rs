use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::info;
use log::warn;
use prismscpfe_lib::bailc;
use prismscpfe_lib::constants::COMPANION_FILES;
use prismscpfe_lib::constants::PARAMETERS_FILE;
use prismscpfe_lib::constants::WARNING_STYLE;
use prismscpfe_lib::descriptors::extract_measurements;
use prismscpfe_lib::descriptors::PARAMETER_DESCRIPTORS;
use prismscpfe_lib::file_system::FileOperations;
use prismscpfe_lib::parameters::extract_parameter;
use prismscpfe_lib::parameters::flatten;
use prismscpfe_lib::parameters::read_parameters_file;
use prismscpfe_lib::remote::FileDirection;
use prismscpfe_lib::remote::RecordService;
use prismscpfe_lib::templates::ProcessKind;

use super::Created;
use super::Session;

/// The files uploaded next to `parameters.in`, in upload order.
///
/// Slip files must exist. Missing twin files are skipped with a warning.
pub fn companion_files<S, F>(session: &Session<'_, S, F>, contents: &str) -> Result<Vec<PathBuf>>
where
    S: RecordService,
    F: FileOperations,
{
    let mut found = vec![session.workdir.join(PARAMETERS_FILE)];

    for (key, default, required) in COMPANION_FILES {
        let name = extract_parameter(contents, key).unwrap_or_else(|| default.to_string());
        let path = session.workdir.join(&name);

        if session.fs.is_file(&path) {
            found.push(path);
        } else if required {
            bailc!(
              "The {key} {name:?} does not exist", ;
              "It is referenced by {PARAMETERS_FILE} or is the default", ;
              "Run prismscpfe from the directory of your simulation",
            );
        } else {
            warn!("{WARNING_STYLE}Skipping the missing {key} {name:?}{WARNING_STYLE:#}");
        }
    }

    Ok(found)
}

/// Record the contents of `parameters.in` as a numerical parameters process.
pub fn create_parameters<S, F>(session: &Session<'_, S, F>, name: Option<&str>) -> Result<Created>
where
    S: RecordService,
    F: FileOperations,
{
    let kind = ProcessKind::NumericalParameters;

    let contents = read_parameters_file(&session.workdir, session.fs)?;
    let set = flatten(&contents);
    let measurements = extract_measurements(PARAMETER_DESCRIPTORS, &set)?;
    let files = companion_files(session, &contents)?;

    debug!(
        "Read {} entries and {} measurements",
        set.len(),
        measurements.len()
    );

    let created = session.new_process(kind, name)?;

    for measurement in &measurements {
        session
            .service
            .add_measurement(&created.process, &measurement.label, &measurement.value)?;
    }

    info!(
        "Attached {} measurements to {}",
        measurements.len(),
        created.process.name
    );

    session.attach_files(&created.process, &files, FileDirection::In)?;

    Ok(created)
}

#[cfg(test)]
#[path = "tests/parameters.rs"]
mod tests;
