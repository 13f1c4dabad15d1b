use anyhow::Context;
use anyhow::Result;
use log::trace;

use crate::error::ctx;
use crate::measurement::MeasurementRecord;
use crate::measurement::MeasurementValue;
use crate::measurement::ValueKind;
use crate::parameters::ParameterSet;

/// How one PRISMS-CPFE parameter becomes a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDescriptor {
    /// The key as written after `set` in `parameters.in`.
    pub key: &'static str,

    /// The type the value is attached as.
    pub kind: ValueKind,

    /// The value used when the key is absent (and `subsection` is empty).
    pub default: &'static str,

    /// The subsection header the key may appear in, including its trailing
    /// `:`, e.g. `Boundary Conditions:`. Empty for top-level keys.
    pub subsection: &'static str,
}

impl ParameterDescriptor {
    /// A top-level text parameter.
    pub const fn text(key: &'static str, default: &'static str) -> Self {
        ParameterDescriptor {
            key,
            kind: ValueKind::Text,
            default,
            subsection: "",
        }
    }

    /// Turn the flattened parameters into the records this descriptor emits.
    ///
    /// 1. The key is set at top level: one record with that value.
    /// 2. Otherwise, for a top-level descriptor: one record with the default.
    /// 3. Otherwise, one record for every qualified key that starts with the
    ///    subsection name and ends in the key. No match emits nothing.
    pub fn extract(&self, set: &ParameterSet) -> Result<Vec<MeasurementRecord>> {
        if let Some(value) = set.get(self.key) {
            return Ok(vec![self.record(self.key, value)?]);
        }

        if self.subsection.is_empty() {
            return Ok(vec![self.record(self.key, self.default)?]);
        }

        let mut base = self.subsection.to_string();
        base.pop();

        set.iter()
            .filter(|(qualified, _)| qualified.starts_with(&base) && self.ends_in_key(qualified))
            .map(|(qualified, value)| self.record(qualified, value))
            .collect()
    }

    /// An empty key only matches an empty qualified key.
    fn ends_in_key(&self, qualified: &str) -> bool {
        if self.key.is_empty() {
            qualified.is_empty()
        } else {
            qualified.ends_with(self.key)
        }
    }

    /// Coerce a single value.
    fn record(&self, label: &str, raw: &str) -> Result<MeasurementRecord> {
        trace!("{label} = {raw:?} ({})", self.kind);

        Ok(MeasurementRecord {
            label: label.to_string(),
            value: MeasurementValue::coerce(self.kind, raw).with_context(ctx!(
              "Could not read the parameter {label:?} as {}", self.kind;
              "",
            ))?,
        })
    }
}

/// Extract the measurements of every descriptor, in table order.
pub fn extract_measurements(
    descriptors: &[ParameterDescriptor],
    set: &ParameterSet,
) -> Result<Vec<MeasurementRecord>> {
    let mut records = Vec::new();

    for descriptor in descriptors {
        records.extend(descriptor.extract(set)?);
    }

    Ok(records)
}

/// The parameters of a PRISMS-CPFE input file that are recorded.
pub const PARAMETER_DESCRIPTORS: &[ParameterDescriptor] = &[
    // Mesh
    ParameterDescriptor::text("Order of finite elements", "1"),
    ParameterDescriptor::text("Order of quadrature", "1"),
    ParameterDescriptor::text("Domain size X", "-1"),
    ParameterDescriptor::text("Domain size Y", "-1"),
    ParameterDescriptor::text("Domain size Z", "-1"),
    ParameterDescriptor::text("Subdivisions X", "1"),
    ParameterDescriptor::text("Subdivisions Y", "1"),
    ParameterDescriptor::text("Subdivisions Z", "1"),
    ParameterDescriptor::text("Refine factor", "-1"),
    ParameterDescriptor::text("Write Mesh To EPS", "false"),
    // Output
    ParameterDescriptor::text("Write Output", "false"),
    ParameterDescriptor::text("Output Directory", "."),
    ParameterDescriptor::text("Skip Output Steps", "-1"),
    ParameterDescriptor::text("Output Equivalent strain", "false"),
    ParameterDescriptor::text("Output Equivalent stress", "false"),
    ParameterDescriptor::text("Output Grain ID", "false"),
    ParameterDescriptor::text("Output Twin fractions", "false"),
    // Boundary conditions
    ParameterDescriptor::text("Boundary condition filename", "BCinfo.txt"),
    ParameterDescriptor::text("BC file number of header lines", "2"),
    ParameterDescriptor::text("Number of boundary conditions", "-1"),
    ParameterDescriptor::text("Enable cyclic loading", "false"),
    ParameterDescriptor::text("Cyclic loading face", "-1"),
    ParameterDescriptor::text("Cyclic loading direction", "-1"),
    ParameterDescriptor::text("Quarter cycle time", "-1"),
    // Solver
    ParameterDescriptor::text("Time increments", "-1"),
    ParameterDescriptor::text("Total time", "-1"),
    ParameterDescriptor::text("Maximum linear solver iterations", "-1"),
    ParameterDescriptor::text("Relative linear solver tolerance", "-1"),
    ParameterDescriptor::text("Maximum non linear iterations", "-1"),
    ParameterDescriptor::text("Absolute nonLinear solver tolerance", "-1"),
    ParameterDescriptor::text("Relative nonLinear solver tolerance", "-1"),
    ParameterDescriptor::text("Stop on convergence failure", "false"),
    ParameterDescriptor::text("Enable adaptive Time stepping", "false"),
    ParameterDescriptor::text("Adaptive load step factor", "-1"),
    ParameterDescriptor::text("Adaptive load increase Factor", "-1"),
    ParameterDescriptor::text("Succesive increment for increasing time step", "1"),
    // Material
    ParameterDescriptor::text("Crystal Structure", "fcc"),
    ParameterDescriptor::text("Elastic Stiffness row 1", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Elastic Stiffness row 2", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Elastic Stiffness row 3", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Elastic Stiffness row 4", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Elastic Stiffness row 5", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Elastic Stiffness row 6", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Number of Slip Systems", "-1"),
    ParameterDescriptor::text("Latent Hardening Ratio", "-1"),
    ParameterDescriptor::text("Initial Slip Resistance", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Initial Hardening Modulus", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Power Law Exponent", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Saturation Stress", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Slip Directions File", "slipDirections.txt"),
    ParameterDescriptor::text("Slip Normals File", "slipNormals.txt"),
    ParameterDescriptor::text("Backstress Factor", "-1"),
    // Twinning
    ParameterDescriptor::text("Twinning enabled", "false"),
    ParameterDescriptor::text("Number of Twin Systems", "-1"),
    ParameterDescriptor::text("Initial Slip Resistance Twin", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Initial Hardening Modulus Twin", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Power Law Exponent Twin", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Saturation Stress Twin", "0,0,0,0,0,0"),
    ParameterDescriptor::text("Twin Saturation Factor", "-1"),
    ParameterDescriptor::text("Twin Threshold Fraction", "-1"),
    ParameterDescriptor::text("Twin Directions File", "twinDirections.txt"),
    ParameterDescriptor::text("Twin Normals File", "twinNormals.txt"),
    ParameterDescriptor::text("Characteristic Twin Shear", "-1"),
    // Constitutive model
    ParameterDescriptor::text("Stress Tolerance", "-1"),
    ParameterDescriptor::text("Max Plastic Slip L2 Norm", "-1"),
    ParameterDescriptor::text("Max Slip Search Iterations", "-1"),
    ParameterDescriptor::text("Max Solver Iterations", "-1"),
    // Microstructure
    ParameterDescriptor::text("Voxels in X direction", "-1"),
    ParameterDescriptor::text("Voxels in Y direction", "-1"),
    ParameterDescriptor::text("Voxels in Z direction", "-1"),
    ParameterDescriptor::text("Grain ID file name", "grainID.txt"),
    ParameterDescriptor::text("Header Lines GrainID File", "-1"),
    ParameterDescriptor::text("Orientations file name", "orientations.txt"),
];

#[cfg(test)]
#[path = "tests/descriptors.rs"]
mod tests;
