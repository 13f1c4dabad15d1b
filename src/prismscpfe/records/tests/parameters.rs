use std::fs;

use prismscpfe_lib::measurement::MeasurementValue;
use prismscpfe_lib::remote::memory::MemoryService;

use super::*;
use crate::test_utils::complete_simulation_dir;
use crate::test_utils::session;
use crate::test_utils::simulation_dir;

#[test]
fn test_create_parameters() {
    let service = MemoryService::default();
    let dir = complete_simulation_dir();

    let created = create_parameters(&session(&service, &dir), None).unwrap();
    let state = service.state.borrow();

    assert_eq!(created.process.name, "Set Numerical Parameters");
    assert_eq!(created.sample.name, "Numerical Parameters");

    assert!(state.measurements.contains(&(
        created.process.id.clone(),
        "Domain size X".to_string(),
        MeasurementValue::Text("1.0".to_string())
    )));
    assert!(state.measurements.contains(&(
        created.process.id.clone(),
        "Crystal Structure".to_string(),
        MeasurementValue::Text("fcc".to_string())
    )));
    assert!(!state
        .measurements
        .iter()
        .any(|(_, label, _)| label.starts_with("Boundary condition (0)")));

    let uploaded: Vec<&str> = state.uploads.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        uploaded,
        vec![
            "parameters.in",
            "slipDirections.txt",
            "slipNormals.txt",
            "twinDirections.txt",
            "twinNormals.txt"
        ]
    );
    assert!(state
        .process_files
        .iter()
        .all(|(p, _, d)| *p == created.process.id && *d == FileDirection::In));
}

#[test]
fn test_twin_files_are_optional() {
    let service = MemoryService::default();
    let dir = simulation_dir();

    create_parameters(&session(&service, &dir), Some("Run 7")).unwrap();
    let state = service.state.borrow();

    assert_eq!(state.uploads.len(), 3);
    assert_eq!(state.samples[0].1.name, "Run 7");
}

#[test]
fn test_slip_files_are_required() {
    let service = MemoryService::default();
    let dir = simulation_dir();
    fs::remove_file(dir.path().join("slipNormals.txt")).unwrap();

    let err = create_parameters(&session(&service, &dir), None).unwrap_err();

    assert!(format!("{err:?}").contains("Slip Normals File"));
    assert!(service.state.borrow().processes.is_empty());
}

#[test]
fn test_companion_names_come_from_parameters() {
    let service = MemoryService::default();
    let dir = simulation_dir();
    fs::write(dir.path().join("fcc_normals.txt"), "1 1 1\n").unwrap();

    let files = companion_files(
        &session(&service, &dir),
        "set Slip Normals File = fcc_normals.txt\n",
    )
    .unwrap();

    assert_eq!(files[0], dir.path().join("parameters.in"));
    assert_eq!(files[1], dir.path().join("slipDirections.txt"));
    assert_eq!(files[2], dir.path().join("fcc_normals.txt"));
}

#[test]
fn test_missing_parameters_file() {
    let service = MemoryService::default();
    let dir = simulation_dir();
    fs::remove_file(dir.path().join("parameters.in")).unwrap();

    let err = create_parameters(&session(&service, &dir), None).unwrap_err();
    let shown = format!("{err:#}");

    assert!(shown.contains("Could not load the PRISMS-CPFE input file"));
    assert!(shown.contains("Run prismscpfe from the directory containing parameters.in"));
    assert!(service.state.borrow().processes.is_empty());
}
