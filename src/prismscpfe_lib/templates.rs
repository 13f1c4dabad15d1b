use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

/// The kinds of process `prismscpfe` creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProcessKind {
    /// The contents of `parameters.in` and its companion files.
    NumericalParameters,

    /// The grain ID of every voxel.
    GrainId,

    /// The list of crystal orientations.
    Orientations,

    /// The boundary conditions file.
    BoundaryConditions,

    /// A simulation run linking inputs to results.
    Simulation,
}

impl ProcessKind {
    /// The kinds that are inputs of a simulation, in creation order.
    pub const INPUTS: [ProcessKind; 4] = [
        ProcessKind::NumericalParameters,
        ProcessKind::GrainId,
        ProcessKind::Orientations,
        ProcessKind::BoundaryConditions,
    ];

    /// The human readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessKind::NumericalParameters => "Numerical Parameters",
            ProcessKind::GrainId => "GrainId",
            ProcessKind::Orientations => "Orientations",
            ProcessKind::BoundaryConditions => "BoundaryConditions",
            ProcessKind::Simulation => "Simulation",
        }
    }

    /// The name given to a newly created process.
    pub fn process_name(&self) -> String {
        match self {
            ProcessKind::NumericalParameters => "Set Numerical Parameters".to_string(),
            ProcessKind::Simulation => "Run Simulation".to_string(),
            other => format!("{} Input", other.display_name()),
        }
    }

    /// The name of the sample a new process outputs, unless the user picks one.
    pub fn sample_name(&self) -> String {
        match self {
            ProcessKind::NumericalParameters => "Numerical Parameters".to_string(),
            ProcessKind::Simulation => crate::constants::RESULTS_SAMPLE.to_string(),
            other => format!("{} Input", other.display_name()),
        }
    }

    /// The subcommand that operates on this kind.
    pub fn command(&self) -> &'static str {
        match self {
            ProcessKind::NumericalParameters => "numerical-parameters",
            ProcessKind::GrainId => "grain-id",
            ProcessKind::Orientations => "orientations",
            ProcessKind::BoundaryConditions => "boundary-conditions",
            ProcessKind::Simulation => "simulation",
        }
    }

    /// The file uploaded for a single-file input kind, and the
    /// `parameters.in` key that can rename it.
    pub fn input_file(&self) -> Option<(&'static str, &'static str)> {
        match self {
            ProcessKind::GrainId => Some(("Grain ID file name", "GrainId.txt")),
            ProcessKind::Orientations => Some(("Orientations file name", "orientations.txt")),
            ProcessKind::BoundaryConditions => {
                Some(("Boundary condition filename", "boundaryconditions.txt"))
            }
            ProcessKind::NumericalParameters | ProcessKind::Simulation => None,
        }
    }
}

impl Display for ProcessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The record-service template id behind every [ProcessKind].
///
/// Read from the `[templates]` table of the configuration; any entry left
/// out keeps its default.
///
/// ```toml
/// [templates]
/// simulation = "global_Crystal Plasticity Simulation"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Templates {
    /// Template of [ProcessKind::NumericalParameters].
    pub numerical_parameters: String,

    /// Template of [ProcessKind::GrainId].
    pub grain_id: String,

    /// Template of [ProcessKind::Orientations].
    pub orientations: String,

    /// Template of [ProcessKind::BoundaryConditions].
    pub boundary_conditions: String,

    /// Template of [ProcessKind::Simulation].
    pub simulation: String,
}

impl Default for Templates {
    fn default() -> Self {
        Templates {
            numerical_parameters: "global_Crystal Plasticity Simulation: Input File".to_string(),
            grain_id: "global_Crystal Plasticity Simulation: GrainIDs for every voxel".to_string(),
            orientations: "global_Crystal Plasticity Simulation: List of Orientations".to_string(),
            boundary_conditions: "global_Crystal Plasticity Simulation: Boundary Conditions"
                .to_string(),
            simulation: "global_Crystal Plasticity Simulation".to_string(),
        }
    }
}

impl Templates {
    /// The template id for `kind`.
    pub fn template_id(&self, kind: ProcessKind) -> &str {
        match kind {
            ProcessKind::NumericalParameters => &self.numerical_parameters,
            ProcessKind::GrainId => &self.grain_id,
            ProcessKind::Orientations => &self.orientations,
            ProcessKind::BoundaryConditions => &self.boundary_conditions,
            ProcessKind::Simulation => &self.simulation,
        }
    }

    /// Replace the template used for `kind`.
    pub fn with_override(mut self, kind: ProcessKind, template_id: impl Into<String>) -> Self {
        let slot = match kind {
            ProcessKind::NumericalParameters => &mut self.numerical_parameters,
            ProcessKind::GrainId => &mut self.grain_id,
            ProcessKind::Orientations => &mut self.orientations,
            ProcessKind::BoundaryConditions => &mut self.boundary_conditions,
            ProcessKind::Simulation => &mut self.simulation,
        };

        *slot = template_id.into();
        self
    }
}

#[cfg(test)]
#[path = "tests/templates.rs"]
mod tests;
