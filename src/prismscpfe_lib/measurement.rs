use std::fmt::Display;
use std::str::FromStr;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ctx;

/// The declared type of a parameter.
///
/// Serialized with the same names it is parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Free text, `string`.
    #[serde(rename = "string")]
    Text,

    /// A whole number, `int`.
    #[serde(rename = "int")]
    Integer,

    /// A floating point number, `double`.
    #[serde(rename = "double")]
    Real,

    /// `true` or `false`, `bool`.
    #[serde(rename = "bool")]
    Boolean,
}

impl FromStr for ValueKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(ValueKind::Text),
            "int" => Ok(ValueKind::Integer),
            "double" => Ok(ValueKind::Real),
            "bool" => Ok(ValueKind::Boolean),
            other => Err(anyhow!("Unknown parameter type {other:?}"))
                .context("Expected one of: string, int, double, bool"),
        }
    }
}

/// A typed scalar attached to a process.
///
/// Serialized adjacently tagged, the way the record service expects
/// measurements: `{"otype": "integer", "value": 4}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "otype", content = "value", rename_all = "lowercase")]
pub enum MeasurementValue {
    /// A string measurement.
    #[serde(rename = "string")]
    Text(String),

    /// An integer measurement.
    Integer(i64),

    /// A number measurement.
    #[serde(rename = "number")]
    Real(f64),

    /// A boolean measurement.
    Boolean(bool),
}

impl MeasurementValue {
    /// Convert the raw text of a parameter into a value of the declared kind.
    pub fn coerce(kind: ValueKind, raw: &str) -> Result<MeasurementValue> {
        let trimmed = raw.trim();

        match kind {
            ValueKind::Text => Ok(MeasurementValue::Text(raw.to_string())),

            ValueKind::Integer => trimmed
                .parse()
                .map(MeasurementValue::Integer)
                .with_context(ctx!(
                  "{raw:?} is not an integer", ;
                  "Fix the value in the parameters file",
                )),

            ValueKind::Real => trimmed
                .parse()
                .map(MeasurementValue::Real)
                .with_context(ctx!(
                  "{raw:?} is not a number", ;
                  "Fix the value in the parameters file",
                )),

            ValueKind::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" => Ok(MeasurementValue::Boolean(true)),
                "false" => Ok(MeasurementValue::Boolean(false)),
                _ => Err(anyhow!("{raw:?} is not a boolean")).with_context(ctx!(
                  "", ;
                  "Use `true` or `false`",
                )),
            },
        }
    }

    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            MeasurementValue::Text(_) => ValueKind::Text,
            MeasurementValue::Integer(_) => ValueKind::Integer,
            MeasurementValue::Real(_) => ValueKind::Real,
            MeasurementValue::Boolean(_) => ValueKind::Boolean,
        }
    }
}

impl Display for MeasurementValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementValue::Text(s) => write!(f, "{s}"),
            MeasurementValue::Integer(i) => write!(f, "{i}"),
            MeasurementValue::Real(r) => write!(f, "{r}"),
            MeasurementValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Text => "string",
            ValueKind::Integer => "int",
            ValueKind::Real => "double",
            ValueKind::Boolean => "bool",
        };

        write!(f, "{name}")
    }
}

/// A labelled measurement, ready to be attached to a process.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    /// The attribute name shown in the record service.
    pub label: String,

    /// The value.
    pub value: MeasurementValue,
}

#[cfg(test)]
#[path = "tests/measurement.rs"]
mod tests;
