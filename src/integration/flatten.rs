use std::fs;

use crate::init;
use crate::prismscpfe;

#[test]
fn test_flatten() {
    let env = init();

    let out = prismscpfe!(env; "flatten"; "flatten");
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("Domain size X = 1.0"));
    assert!(stdout.contains("Boundary condition (0): Value = 0.001"));
}

#[test]
fn test_flatten_measurements() {
    let env = init();

    let out = prismscpfe!(env; "flatten", "--measurements"; "flatten measurements");
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.starts_with("label"));
    assert!(stdout.contains("Crystal Structure"));
    assert!(!stdout.contains("Boundary condition (0)"));
}

#[test]
fn test_flatten_without_parameters() {
    let env = init();
    fs::remove_file(env.temp_dir.path().join("parameters.in")).unwrap();

    let out = prismscpfe!(env; "flatten");

    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr)
        .unwrap()
        .contains("parameters.in"));
}
