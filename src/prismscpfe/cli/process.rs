use std::env;
use std::process::exit;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use colog::default_builder;
use colog::formatter;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::debug;
use log::info;
use log::trace;
use log::LevelFilter;
use prismscpfe_lib::config::Config;
use prismscpfe_lib::constants::ERROR_STYLE;
use prismscpfe_lib::ctx;
use prismscpfe_lib::file_system::FileSystemInteractor;
use prismscpfe_lib::parameters::parse_parameters_file;
use prismscpfe_lib::remote::dry::DryRunService;
use prismscpfe_lib::remote::RecordService;
use prismscpfe_lib::templates::ProcessKind;

use super::log::LogTokens;
use super::printing::format_measurements;
use super::printing::format_parameters;
use super::printing::get_styles;
use crate::cli::def::Cli;
use crate::cli::def::Command;
use crate::cli::def::InputAction;
use crate::cli::def::ParametersAction;
use crate::cli::def::SimulationAction;
use crate::cli::printing::print_version;
use crate::records::find::find;
use crate::records::full::create_full_simulation;
use crate::records::inputs::create_input;
use crate::records::parameters::create_parameters;
use crate::records::simulation::create_simulation;
use crate::records::simulation::resolve_inputs;
use crate::records::Created;
use crate::records::Session;

/// This function parses command that prismscpfe was run with.
pub fn parse_command() {
    let styled = Cli::command().styles(get_styles()).get_matches();

    // This unwrap will print the error if the command is wrong.
    let command = Cli::from_arg_matches(&styled).unwrap();

    // https://github.com/rust-lang/rust/blob/master/library/std/src/backtrace.rs
    let backtrace_enabled = match env::var("RUST_LIB_BACKTRACE") {
        Ok(s) => s != "0",
        Err(_) => match env::var("RUST_BACKTRACE") {
            Ok(s) => s != "0",
            Err(_) => false,
        },
    };

    if backtrace_enabled {
        if let Err(e) = process_command(&command) {
            eprintln!("{e:?}");
            exit(1);
        }
    } else if let Err(e) = process_command(&command) {
        eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
        eprint!("{}", e);
        exit(1);
    }
}

/// CLAP has parsed the command, now we process it.
pub fn process_command(cmd: &Cli) -> Result<()> {
    let progress = setup_logging(cmd)?;

    let file_system = FileSystemInteractor;
    let workdir = env::current_dir().with_context(ctx!(
      "Could not access the working directory", ;
      "Ensure that the directory still exists and you may read it",
    ))?;

    match &cmd.command {
        Command::Version => {
            print_version(cmd.script);
            return Ok(());
        }

        Command::Flatten(args) => {
            let set = parse_parameters_file(&workdir, &file_system)?;

            if args.measurements {
                println!("{}", format_measurements(&set)?);
            } else {
                println!("{}", format_parameters(&set));
            }

            return Ok(());
        }

        _ => {}
    }

    debug!("Reading the config: {:?}", cmd.config);

    let config = Config::from_file(&cmd.config, &file_system)?;
    trace!("The config is: {config:#?}");

    let mut templates = config.templates.clone();
    if let Some((kind, template_id)) = template_override(&cmd.command) {
        info!("Using the template {template_id:?} for {kind}");
        templates = templates.with_override(kind, template_id);
    }

    if cmd.dry {
        let service = DryRunService::default();

        return process_records(
            &Session {
                service: &service,
                fs: &file_system,
                templates,
                workdir,
                results: config.results.clone(),
                script: cmd.script,
                progress,
            },
            &cmd.command,
        );
    }

    let service = connect(&config)?;

    process_records(
        &Session {
            service: &service,
            fs: &file_system,
            templates,
            workdir,
            results: config.results.clone(),
            script: cmd.script,
            progress,
        },
        &cmd.command,
    )
}

/// Connect to the configured record service.
#[cfg(feature = "remote")]
fn connect(config: &Config) -> Result<prismscpfe_lib::remote::http::HttpService> {
    debug!("Connecting to {}", config.remote.url);

    Ok(prismscpfe_lib::remote::http::HttpService::new(
        &config.remote,
        config.remote.apikey()?,
    ))
}

/// Without the `remote` feature only dry runs are possible.
#[cfg(not(feature = "remote"))]
fn connect(_: &Config) -> Result<DryRunService> {
    Err(anyhow!("prismscpfe was built without the remote feature")).with_context(ctx!(
      "", ;
      "Pass --dry or rebuild with the default features",
    ))
}

/// The template requested on the command line for this invocation.
fn template_override(command: &Command) -> Option<(ProcessKind, &str)> {
    let (kind, template) = match command {
        Command::NumericalParameters(ParametersAction::Create(options)) => {
            (ProcessKind::NumericalParameters, &options.template)
        }
        Command::GrainId(InputAction::Create { options, .. }) => {
            (ProcessKind::GrainId, &options.template)
        }
        Command::Orientations(InputAction::Create { options, .. }) => {
            (ProcessKind::Orientations, &options.template)
        }
        Command::BoundaryConditions(InputAction::Create { options, .. }) => {
            (ProcessKind::BoundaryConditions, &options.template)
        }
        Command::Simulation(SimulationAction::Create { options, .. }) => {
            (ProcessKind::Simulation, &options.template)
        }
        _ => return None,
    };

    template.as_deref().map(|t| (kind, t))
}

/// Run a command that talks to the record service.
fn process_records<S: RecordService>(
    session: &Session<'_, S, FileSystemInteractor>,
    command: &Command,
) -> Result<()> {
    match command {
        Command::NumericalParameters(action) => {
            let kind = ProcessKind::NumericalParameters;

            match action {
                ParametersAction::Create(options) => create_confirmed(session, kind, || {
                    create_parameters(session, options.name.as_deref())
                }),
                ParametersAction::Find(options) => {
                    println!("{}", find(session, kind, options.id.as_deref())?);
                    Ok(())
                }
            }
        }

        Command::GrainId(action) => process_input(session, ProcessKind::GrainId, action),
        Command::Orientations(action) => process_input(session, ProcessKind::Orientations, action),
        Command::BoundaryConditions(action) => {
            process_input(session, ProcessKind::BoundaryConditions, action)
        }

        Command::Simulation(action) => {
            let kind = ProcessKind::Simulation;

            match action {
                SimulationAction::Create {
                    options,
                    simulation,
                    input_sample_ids,
                } => create_confirmed(session, kind, || {
                    let inputs = resolve_inputs(session, input_sample_ids.as_deref())?;

                    create_simulation(
                        session,
                        options.name.as_deref(),
                        &inputs,
                        simulation.num_cores,
                    )
                }),
                SimulationAction::Find(options) => {
                    println!("{}", find(session, kind, options.id.as_deref())?);
                    Ok(())
                }
            }
        }

        Command::FullSimulation(options) => {
            for created in create_full_simulation(session, options.num_cores)? {
                println!("{}", created.report());
            }

            Ok(())
        }

        Command::Flatten(_) | Command::Version => {
            Err(anyhow!("This command does not use the record service"))
        }
    }
}

/// Run an action on a single-file input.
fn process_input<S: RecordService>(
    session: &Session<'_, S, FileSystemInteractor>,
    kind: ProcessKind,
    action: &InputAction,
) -> Result<()> {
    match action {
        InputAction::Create { options, file } => create_confirmed(session, kind, || {
            create_input(session, kind, options.name.as_deref(), file.as_deref())
        }),
        InputAction::Find(options) => {
            println!("{}", find(session, kind, options.id.as_deref())?);
            Ok(())
        }
    }
}

/// Create a process of `kind` once the user agrees, and report it.
fn create_confirmed<S: RecordService>(
    session: &Session<'_, S, FileSystemInteractor>,
    kind: ProcessKind,
    create: impl FnOnce() -> Result<Created>,
) -> Result<()> {
    if !session.confirm_new(kind)? {
        info!("Nothing was created");
        return Ok(());
    }

    println!("{}", create()?.report());

    Ok(())
}

/// Initialize the logger, with a verbosity picked by the user.
fn setup_logging(cmd: &Cli) -> Result<MultiProgress> {
    let mut log_build = default_builder();
    log_build.format(formatter(LogTokens { plain: cmd.script }));

    let bar = MultiProgress::new();

    if cmd.verbose == 2 {
        log_build.filter(None, LevelFilter::Trace);
    } else if cmd.verbose == 1 {
        log_build.filter(None, LevelFilter::Debug);
    } else if cmd.verbose == 0 {
        log_build.filter(None, LevelFilter::Info);
    } else {
        return Err(anyhow!("Only two levels of verbosity supported (ie. -vv)")).context("");
    }

    LogWrapper::new(bar.clone(), log_build.build())
        .try_init()
        .with_context(ctx!(
            "Failed to initialize the command line interface", ;
            "Make sure you are using a supported terminal",
        ))?;

    Ok(bar)
}
