//! A reader for the PRISMS-CPFE `parameters.in` format.
//!
//! The format is line based:
//!
//! ```text
//! # comment
//! set Domain size X = 1.0
//! subsection Boundary Conditions: 0
//!   set Value = 5
//! end
//! ```
//!
//! Entries inside a subsection are qualified with the subsection label, so
//! the example above flattens to `Domain size X -> 1.0` and
//! `Boundary Conditions (0): Value -> 5`.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::trace;

use crate::constants::INVALID_ENTRY;
use crate::constants::PARAMETERS_FILE;
use crate::error::ctx;
use crate::file_system::FileOperations;

/// A flattened parameter file: qualified key to raw value.
pub type ParameterSet = BTreeMap<String, String>;

/// The meaning of one line of a parameter file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank lines and comments.
    Skip,

    /// `subsection <name>: <id>`, carrying the computed label.
    Subsection(String),

    /// `end`, closing the open subsection.
    End,

    /// `set <key> = <value>`, carrying all tokens including `set`.
    Set(Vec<&'a str>),

    /// Anything else, which is ignored.
    Other,
}

/// Decide what a raw line is.
pub fn classify(line: &str) -> Line<'_> {
    let stripped = line.trim();

    if stripped.is_empty() || stripped.starts_with('#') {
        return Line::Skip;
    }

    let tokens: Vec<&str> = stripped.split_whitespace().collect();

    match tokens[0] {
        "subsection" => Line::Subsection(subsection_label(&tokens)),
        "end" => Line::End,
        "set" => Line::Set(tokens),
        _ => Line::Other,
    }
}

/// Build the label of a `subsection` header.
///
/// The tokens between the keyword and the last token form the name, whose
/// trailing `:` is dropped. The last token becomes a parenthesised suffix:
/// `subsection Boundary Conditions: 0` is labelled `Boundary Conditions (0)`.
pub fn subsection_label(tokens: &[&str]) -> String {
    let last = tokens.last().copied().unwrap_or_default();

    let mut name = tokens
        .get(1..tokens.len().saturating_sub(1))
        .unwrap_or_default()
        .join(" ");
    name.pop();

    format!("{name} ({last})")
}

/// Split the tokens of a `set` line into a key and a value.
///
/// The last standalone `=` separates the two. Without one, the value is
/// [INVALID_ENTRY] and the key is everything between `set` and the final
/// token.
pub fn parse_assignment(tokens: &[&str]) -> (String, String) {
    match tokens.iter().rposition(|t| *t == "=") {
        Some(eq) => (
            tokens.get(1..eq).unwrap_or_default().join(" "),
            tokens[eq + 1..].join(" "),
        ),

        None => (
            tokens
                .get(1..tokens.len().saturating_sub(1))
                .unwrap_or_default()
                .join(" "),
            INVALID_ENTRY.to_string(),
        ),
    }
}

/// The line-by-line state of a parse.
#[derive(Debug, Default)]
struct Flattener {
    /// Whether a `subsection` is currently open.
    in_subsection: bool,

    /// The label of the most recent `subsection`.
    label: String,

    /// The entries read so far.
    entries: ParameterSet,
}

impl Flattener {
    /// Apply one line.
    fn feed(&mut self, line: &str) {
        match classify(line) {
            Line::Subsection(label) => {
                trace!("Entering subsection {label:?}");

                self.in_subsection = true;
                self.label = label;
            }

            Line::End => self.in_subsection = false,

            Line::Set(tokens) => {
                let (key, value) = parse_assignment(&tokens);

                let key = if self.in_subsection {
                    format!("{}: {key}", self.label)
                } else {
                    key
                };

                self.entries.insert(key, value);
            }

            Line::Skip | Line::Other => {}
        }
    }
}

/// Flatten the contents of a parameter file.
pub fn flatten(contents: &str) -> ParameterSet {
    let mut state = Flattener::default();

    for line in contents.lines() {
        state.feed(line);
    }

    state.entries
}

/// Read the raw contents of `parameters.in` from the directory `dir`.
pub fn read_parameters_file(dir: &Path, fs: &impl FileOperations) -> Result<String> {
    let path = dir.join(PARAMETERS_FILE);
    debug!("Reading the parameters from {path:?}");

    fs.read_utf8(&path).with_context(ctx!(
      "Could not load the PRISMS-CPFE input file", ;
      "Run prismscpfe from the directory containing {PARAMETERS_FILE}",
    ))
}

/// Read and flatten `parameters.in` from the directory `dir`.
pub fn parse_parameters_file(dir: &Path, fs: &impl FileOperations) -> Result<ParameterSet> {
    let entries = flatten(&read_parameters_file(dir, fs)?);
    debug!("Found {} parameter entries", entries.len());

    Ok(entries)
}

/// Look up a single top-level entry, ignoring differences in whitespace.
///
/// For an entry name of N words, a `set` line matches when its N tokens after
/// `set` spell the name and at least two more tokens follow. The value is
/// the token after the separator (normally `=`). The last match wins.
pub fn extract_parameter(contents: &str, entry_name: &str) -> Option<String> {
    let words = entry_name.split_whitespace().count();
    let wanted: String = entry_name.split_whitespace().collect();

    let mut found = None;

    for line in contents.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.first() != Some(&"set") || tokens.len() <= words + 2 {
            continue;
        }

        if tokens[1..=words].concat() == wanted {
            found = Some(tokens[words + 2].to_string());
        }
    }

    found
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
