use std::process::Command;

use clap::crate_version;

#[test]
fn test_prismscpfe_short_version() {
    let prismscpfe = Command::new(env!("CARGO_BIN_EXE_prismscpfe"))
        .arg("version")
        .arg("-s")
        .output()
        .unwrap();

    assert!(prismscpfe.status.success());
    assert_eq!(
        String::from_utf8(prismscpfe.stdout).unwrap().trim(),
        format!("prismscpfe {}", crate_version!())
    );
}

#[test]
fn test_prismscpfe_version() {
    let prismscpfe = Command::new(env!("CARGO_BIN_EXE_prismscpfe"))
        .arg("version")
        .output()
        .unwrap();

    assert!(prismscpfe.status.success());
    assert!(String::from_utf8(prismscpfe.stdout)
        .unwrap()
        .contains(crate_version!()));
}
