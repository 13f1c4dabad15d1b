use anyhow::Result;
use log::info;
use prismscpfe_lib::file_system::FileOperations;
use prismscpfe_lib::remote::RecordService;
use prismscpfe_lib::templates::ProcessKind;

use super::inputs::create_input;
use super::parameters::create_parameters;
use super::simulation::create_simulation;
use super::Created;
use super::Session;

/// Create the four inputs and a simulation that consumes them.
///
/// The user confirms every kind that already exists up front, so nothing
/// is created if they back out. The created processes are returned in
/// creation order.
pub fn create_full_simulation<S, F>(
    session: &Session<'_, S, F>,
    num_cores: Option<i64>,
) -> Result<Vec<Created>>
where
    S: RecordService,
    F: FileOperations,
{
    for kind in ProcessKind::INPUTS.iter().chain([&ProcessKind::Simulation]) {
        if !session.confirm_new(*kind)? {
            info!("Nothing was created");
            return Ok(Vec::new());
        }
    }

    let mut created = Vec::new();

    for kind in ProcessKind::INPUTS {
        created.push(match kind {
            ProcessKind::NumericalParameters => create_parameters(session, None)?,
            input => create_input(session, input, None, None)?,
        });
    }

    let inputs: Vec<_> = created.iter().map(|c| c.sample.clone()).collect();

    created.push(create_simulation(session, None, &inputs, num_cores)?);

    Ok(created)
}

#[cfg(test)]
#[path = "tests/full.rs"]
mod tests;
