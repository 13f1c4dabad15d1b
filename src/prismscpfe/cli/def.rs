use std::path::PathBuf;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

/// Structure of the main command (prismscpfe).
#[allow(unused)]
#[derive(Parser, Debug)]
#[command(
    about = "Register PRISMS-CPFE simulations as Materials Commons records",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// The main command issued.
    #[command(subcommand)]
    pub command: Command,

    /// Disable interactive mode, for use in scripts.
    #[arg(short, long, global = true)]
    pub script: bool,

    /// The path to the config file.
    #[arg(short, long, default_value = "./prismscpfe.toml", global = true)]
    pub config: PathBuf,

    /// Verbose mode, displays debug info. For even more try: -vv.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Dry run, log what would be created without touching the record service.
    #[arg(short, long, global = true)]
    pub dry: bool,
}

/// Options shared by every `create` action.
#[derive(Args, Debug, Clone)]
pub struct CreateOptions {
    /// The name of the created sample [default: depends on the kind].
    #[arg(short, long)]
    pub name: Option<String>,

    /// Use this template id instead of the configured one.
    #[arg(short, long)]
    pub template: Option<String>,
}

/// Options of the `find` action.
#[derive(Args, Debug, Clone)]
pub struct FindOptions {
    /// The id of the sample to look up
    /// [default: output of the only process of this kind].
    #[arg(short, long)]
    pub id: Option<String>,
}

/// Actions on the numerical parameters.
#[derive(Subcommand, Debug, Clone)]
pub enum ParametersAction {
    /// Upload `parameters.in` and its slip and twin files.
    #[command()]
    Create(CreateOptions),

    /// Show the sample this kind would contribute to a simulation.
    #[command()]
    Find(FindOptions),
}

/// Actions on a single-file simulation input.
#[derive(Subcommand, Debug, Clone)]
pub enum InputAction {
    /// Upload the input file.
    #[command()]
    Create {
        /// Common creation options.
        #[command(flatten)]
        options: CreateOptions,

        /// The file to upload
        /// [default: the file named in parameters.in, else the usual name].
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show the sample this kind would contribute to a simulation.
    #[command()]
    Find(FindOptions),
}

/// Options of the simulation that links inputs to results.
#[derive(Args, Debug, Clone)]
pub struct SimulationOptions {
    /// The number of cores the simulation runs on.
    #[arg(long)]
    pub num_cores: Option<i64>,
}

/// Actions on the simulation.
#[derive(Subcommand, Debug, Clone)]
pub enum SimulationAction {
    /// Link the inputs of this experiment to the simulation results.
    #[command()]
    Create {
        /// Common creation options.
        #[command(flatten)]
        options: CreateOptions,

        /// Simulation options.
        #[command(flatten)]
        simulation: SimulationOptions,

        /// The ids of the input samples, for example: `-i a1 b2 c3 d4`
        /// [default: the output of the only process of each input kind].
        #[arg(short, long, value_delimiter = ' ', num_args = 1..)]
        input_sample_ids: Option<Vec<String>>,
    },

    /// Show the results sample of the simulation.
    #[command()]
    Find(FindOptions),
}

/// Arguments supplied with the `flatten` command.
#[derive(Args, Debug, Clone, Copy)]
pub struct FlattenStruct {
    /// Show the measurements that would be attached instead of the raw
    /// entries.
    #[arg(short, long)]
    pub measurements: bool,
}

/// Enum for root-level `prismscpfe` commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// The numerical parameters read from `parameters.in`.
    #[command(subcommand)]
    NumericalParameters(ParametersAction),

    /// The grain ID of every voxel.
    #[command(subcommand, alias = "GrainId")]
    GrainId(InputAction),

    /// The list of crystal orientations.
    #[command(subcommand, alias = "Orientations")]
    Orientations(InputAction),

    /// The boundary conditions.
    #[command(subcommand, alias = "BoundaryConditions")]
    BoundaryConditions(InputAction),

    /// The simulation run, linking inputs to results.
    #[command(subcommand)]
    Simulation(SimulationAction),

    /// Create all four inputs and the simulation in one go.
    #[command()]
    FullSimulation(SimulationOptions),

    /// Print `parameters.in` as flat key-value pairs, without uploading.
    #[command()]
    Flatten(FlattenStruct),

    /// Print information about the version.
    #[command()]
    Version,
}
