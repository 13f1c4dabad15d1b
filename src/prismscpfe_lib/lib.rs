//! The shared core of `prismscpfe`: parsing PRISMS-CPFE input files and
//! talking to the record service.

/// Parsing of `parameters.in` into flat key-value pairs.
pub mod parameters;

/// The table of known PRISMS-CPFE parameters and how they become
/// measurements.
pub mod descriptors;

/// Typed scalar values attached to processes.
pub mod measurement;

/// Process kinds and the template ids that back them.
pub mod templates;

/// The `prismscpfe.toml` configuration.
pub mod config;

/// The interface to the remote record service and its implementations.
pub mod remote;

/// Finding the processes and samples that already exist remotely.
pub mod lookup;

/// Common file operations
pub mod file_system;

/// The error handling for `prismscpfe`.
pub mod error;

/// Constant values.
pub mod constants;

/// Helper functions for testing, only compiled in test mode.
#[cfg(test)]
mod test_utils;
