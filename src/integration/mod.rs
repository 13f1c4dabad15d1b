//! # Integration tests for the command line of `prismscpfe`.
//! These tests run the compiled binary in dry-run mode, so nothing here
//! needs a record service.
//!
//! ## Test Plan
//!
//! + [x] Test the `prismscpfe version` command.
//! + [x] Test the `prismscpfe flatten` command.
//! + [x] Test `create` and `full-simulation` in dry-run mode.
//! + [ ] Test against a live record service.
//!
//! ## Test Strategy
//! Every test gets its own `TestEnv`: a working directory holding a
//! `parameters.in`, its companion files and a `prismscpfe.toml`.

mod dry_run;
mod flatten;
mod version;

use std::fs;
use std::path::PathBuf;

use tempdir::TempDir;

/// The testing environment passed to individual #[test](s)
struct TestEnv {
    prismscpfe_path: PathBuf,
    temp_dir: TempDir,
}

#[macro_export]
macro_rules! prismscpfe {
    ($env:expr; $($arg:expr),*) => {
        {
            std::process::Command::new(&$env.prismscpfe_path)
                .current_dir($env.temp_dir.path())
                .env("RUST_BACKTRACE", "0")
                .env_remove("MC_API_KEY")
                .args(&[$($arg),*])
                .output()
                .unwrap()
        }
    };
    ($env:expr; $($arg:expr),*; $msg:expr) => {
        {
            let out = $crate::prismscpfe!($env; $($arg),*);
            if !out.status.success() {
                panic!("prismscpfe {} failed: {}", $msg, String::from_utf8(out.stderr).unwrap());
            } else {
                out
            }
        }
    };
}

const PARAMETERS: &str = r#"# Tension of a small polycrystal
set Domain size X = 1.0
set Domain size Y = 1.0
set Domain size Z = 1.0
set Slip Directions File = slipDirections.txt

subsection Boundary condition: 0
  set Value = 0.001
end
"#;

const CONFIG: &str = r#"
[remote]
url = "http://127.0.0.1:9"
project = "integration"
experiment = "dry"
"#;

fn init() -> TestEnv {
    let prismscpfe_path = PathBuf::from(env!("CARGO_BIN_EXE_prismscpfe"));
    assert!(
        prismscpfe_path.exists(),
        "\nTest setup couldn't find the prismscpfe executable.
    [Expected to find it at: {:?}]\n",
        prismscpfe_path
    );

    let temp_dir = TempDir::new_in(env!("CARGO_TARGET_TMPDIR"), "simulation").unwrap();

    fs::write(temp_dir.path().join("parameters.in"), PARAMETERS).unwrap();
    fs::write(temp_dir.path().join("prismscpfe.toml"), CONFIG).unwrap();

    for name in [
        "slipDirections.txt",
        "slipNormals.txt",
        "GrainId.txt",
        "orientations.txt",
        "boundaryconditions.txt",
        "solution-0000.vtu",
    ] {
        fs::write(temp_dir.path().join(name), name).unwrap();
    }

    TestEnv {
        prismscpfe_path,
        temp_dir,
    }
}
