use std::time::Duration;

use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The PRISMS-CPFE input file, always read from the working directory.
pub const PARAMETERS_FILE: &str = "parameters.in";

/// The value stored for a `set` line that has no `=`.
pub const INVALID_ENTRY: &str = "Invalid Entry";

/// The environment variable consulted when the config has no api key.
pub const APIKEY_ENV: &str = "MC_API_KEY";

/// The default request timeout for the record service.
pub const TIMEOUT_DEFAULT: fn() -> u64 = || 30;

/// The default glob matching simulation result files.
pub const RESULTS_GLOB_DEFAULT: fn() -> String = || "*vtu".to_string();

/// The interval at which the upload progress bar is redrawn.
pub const PROGRESS_TICK: Duration = Duration::from_millis(120);

/// The companion files of `parameters.in`.
///
/// Each entry is the `parameters.in` key naming the file, the file used
/// when the key is absent, and whether the upload is required.
pub const COMPANION_FILES: [(&str, &str, bool); 4] = [
    ("Slip Directions File", "slipDirections.txt", true),
    ("Slip Normals File", "slipNormals.txt", true),
    ("Twin Directions File", "twinDirections.txt", false),
    ("Twin Normals File", "twinNormals.txt", false),
];

/// The name of the measurement holding the core count of a simulation.
pub const NUM_CORES_LABEL: &str = "Number of cores";

/// The name of the sample holding the simulation results.
pub const RESULTS_SAMPLE: &str = "Simulation Results";

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for the program name and commands shown to the user.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Cyan).bold();

/// The styling for identifiers of remote records.
pub const ID_STYLE: Style = style_from_fg(AnsiColor::BrightBlue);

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();

/// The styling for warnings.
pub const WARNING_STYLE: Style = style_from_fg(AnsiColor::Yellow).bold();
