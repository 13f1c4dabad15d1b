use std::path::Path;
use std::path::PathBuf;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use log::debug;
use prismscpfe_lib::bailc;
use prismscpfe_lib::constants::PARAMETERS_FILE;
use prismscpfe_lib::constants::PRIMARY_STYLE;
use prismscpfe_lib::file_system::FileOperations;
use prismscpfe_lib::parameters::extract_parameter;
use prismscpfe_lib::remote::FileDirection;
use prismscpfe_lib::remote::RecordService;
use prismscpfe_lib::templates::ProcessKind;

use super::Created;
use super::Session;

/// The file to upload for a single-file input `kind`.
///
/// An explicit path wins. Otherwise the name referenced in `parameters.in`
/// is used if that file exists, and the usual name if not.
pub fn input_file<S, F>(
    session: &Session<'_, S, F>,
    kind: ProcessKind,
    explicit: Option<&Path>,
) -> Result<PathBuf>
where
    S: RecordService,
    F: FileOperations,
{
    let (key, default) = kind
        .input_file()
        .ok_or_else(|| anyhow!("{kind} is not a single-file input"))?;

    let path = match explicit {
        Some(path) => session.workdir.join(path),
        None => referenced(session, key).unwrap_or_else(|| session.workdir.join(default)),
    };

    if !session.fs.is_file(&path) {
        bailc!(
          "The {kind} file {path:?} does not exist", ;
          "", ;
          "Pass the file to upload with {PRIMARY_STYLE}--file{PRIMARY_STYLE:#}",
        );
    }

    debug!("Using {path:?} as the {kind} file");

    Ok(path)
}

/// The existing file named by `key` in `parameters.in`, if any.
fn referenced<S, F>(session: &Session<'_, S, F>, key: &str) -> Option<PathBuf>
where
    S: RecordService,
    F: FileOperations,
{
    let parameters = session.workdir.join(PARAMETERS_FILE);

    if !session.fs.is_file(&parameters) {
        return None;
    }

    let contents = session.fs.read_utf8(&parameters).ok()?;
    let path = session.workdir.join(extract_parameter(&contents, key)?);

    session.fs.is_file(&path).then_some(path)
}

/// Record a single-file input of a simulation.
pub fn create_input<S, F>(
    session: &Session<'_, S, F>,
    kind: ProcessKind,
    name: Option<&str>,
    file: Option<&Path>,
) -> Result<Created>
where
    S: RecordService,
    F: FileOperations,
{
    let path = input_file(session, kind, file)?;
    let created = session.new_process(kind, name)?;

    session.attach_files(&created.process, &[path], FileDirection::In)?;

    Ok(created)
}

#[cfg(test)]
#[path = "tests/inputs.rs"]
mod tests;
