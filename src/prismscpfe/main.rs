//! `prismscpfe` records PRISMS-CPFE crystal plasticity simulations in a
//! Materials Commons experiment.
//!
//! Run it from the directory of a simulation: the numerical parameters in
//! `parameters.in`, the grain ID, orientation and boundary condition files
//! and the `*vtu` results each become a process with an output sample.

/// The command line interface and relevant structures.
pub mod cli;

/// The workflows that turn local files into remote records.
pub mod records;

/// Convenience functions for unit tests.
#[cfg(test)]
pub mod test_utils;

/// The main CLI entry-point of the `prismscpfe` utility.
///
/// This function parses command-line arguments and executes
/// sub-commands as specified by the user.
#[cfg(not(tarpaulin_include))]
fn main() {
    cli::process::parse_command();
}
