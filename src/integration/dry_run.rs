use std::fs;

use crate::init;
use crate::prismscpfe;

#[test]
fn test_dry_numerical_parameters() {
    let env = init();

    let out = prismscpfe!(env; "-s", "-d", "numerical-parameters", "create"; "dry numerical parameters");
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("Created process: Set Numerical Parameters"));
    assert!(stdout.contains("dry-process-"));
}

#[test]
fn test_dry_inputs_accept_aliases() {
    let env = init();

    for command in ["GrainId", "orientations", "BoundaryConditions"] {
        let out = prismscpfe!(env; "-s", "-d", command, "create"; command);

        assert!(String::from_utf8(out.stdout)
            .unwrap()
            .contains("Created process:"));
    }
}

#[test]
fn test_dry_full_simulation() {
    let env = init();

    let out = prismscpfe!(env; "-s", "-d", "full-simulation", "--num-cores", "8"; "dry full simulation");
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert_eq!(stdout.matches("Created process:").count(), 5);
    assert!(stdout.contains("Run Simulation"));
}

#[test]
fn test_dry_simulation_needs_inputs() {
    let env = init();

    let out = prismscpfe!(env; "-s", "-d", "simulation", "create");

    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr)
        .unwrap()
        .contains("numerical-parameters create"));
}

#[test]
fn test_missing_config() {
    let env = init();
    fs::remove_file(env.temp_dir.path().join("prismscpfe.toml")).unwrap();

    let out = prismscpfe!(env; "-s", "-d", "grain-id", "create");

    assert!(!out.status.success());
}

#[test]
fn test_real_run_needs_apikey() {
    let env = init();

    let out = prismscpfe!(env; "-s", "grain-id", "create");
    let stderr = String::from_utf8(out.stderr).unwrap();

    assert!(!out.status.success());
    assert!(stderr.contains("MC_API_KEY"));
}
