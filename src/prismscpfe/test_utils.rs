use std::fs;

use indicatif::MultiProgress;
use indicatif::ProgressDrawTarget;
use prismscpfe_lib::file_system::FileSystemInteractor;
use prismscpfe_lib::remote::memory::MemoryService;
use prismscpfe_lib::templates::Templates;
use tempdir::TempDir;

use crate::records::Session;

pub const REAL_FS: FileSystemInteractor = FileSystemInteractor;

pub const SAMPLE_PARAMETERS: &str = r#"# A small crystal plasticity run
set Domain size X = 1.0
set Domain size Y = 1.0
set Number of boundary conditions = 2

subsection Boundary condition: 0
  set Value = 0.001
end

set Grain ID file name = grains.txt
set Slip Directions File = slipDirections.txt
"#;

/// A session on `service` that works in `dir` and never asks anything.
pub fn session<'a>(
    service: &'a MemoryService,
    dir: &TempDir,
) -> Session<'a, MemoryService, FileSystemInteractor> {
    Session {
        service,
        fs: &REAL_FS,
        templates: Templates::default(),
        workdir: dir.path().to_path_buf(),
        results: "*vtu".to_string(),
        script: true,
        progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
    }
}

/// A simulation directory with `parameters.in` and the required slip files.
pub fn simulation_dir() -> TempDir {
    let dir = TempDir::new("simulation").unwrap();

    fs::write(dir.path().join("parameters.in"), SAMPLE_PARAMETERS).unwrap();
    fs::write(dir.path().join("slipDirections.txt"), "1 1 0\n").unwrap();
    fs::write(dir.path().join("slipNormals.txt"), "1 1 1\n").unwrap();

    dir
}

/// A full simulation directory: inputs, twin files and two results.
pub fn complete_simulation_dir() -> TempDir {
    let dir = simulation_dir();

    for name in [
        "twinDirections.txt",
        "twinNormals.txt",
        "grains.txt",
        "orientations.txt",
        "boundaryconditions.txt",
        "solution-0000.vtu",
        "solution-0001.vtu",
    ] {
        fs::write(dir.path().join(name), name).unwrap();
    }

    dir
}
