use anyhow::Result;
use prismscpfe_lib::constants::ID_STYLE;
use prismscpfe_lib::file_system::FileOperations;
use prismscpfe_lib::lookup::resolve_output_sample;
use prismscpfe_lib::remote::RecordService;
use prismscpfe_lib::templates::ProcessKind;

use super::Session;

/// Describe the sample `kind` would contribute to a simulation.
pub fn find<S, F>(session: &Session<'_, S, F>, kind: ProcessKind, id: Option<&str>) -> Result<String>
where
    S: RecordService,
    F: FileOperations,
{
    let sample = resolve_output_sample(session.service, &session.templates, kind, id)?;

    Ok(format!(
        "{kind} sample: {} {ID_STYLE}{}{ID_STYLE:#}",
        sample.name, sample.id
    ))
}

#[cfg(test)]
#[path = "tests/find.rs"]
mod tests;
