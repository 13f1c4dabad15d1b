use std::fs;

use prismscpfe_lib::remote::memory::MemoryService;

use super::*;
use crate::test_utils::complete_simulation_dir;
use crate::test_utils::session;
use crate::test_utils::simulation_dir;

#[test]
fn test_referenced_file_wins_over_default() {
    let service = MemoryService::default();
    let dir = complete_simulation_dir();
    fs::write(dir.path().join("GrainId.txt"), "").unwrap();

    let path = input_file(&session(&service, &dir), ProcessKind::GrainId, None).unwrap();

    assert_eq!(path, dir.path().join("grains.txt"));
}

#[test]
fn test_default_when_referenced_file_is_missing() {
    let service = MemoryService::default();
    let dir = simulation_dir();
    fs::write(dir.path().join("GrainId.txt"), "").unwrap();

    let path = input_file(&session(&service, &dir), ProcessKind::GrainId, None).unwrap();

    assert_eq!(path, dir.path().join("GrainId.txt"));
}

#[test]
fn test_explicit_file_wins() {
    let service = MemoryService::default();
    let dir = complete_simulation_dir();
    fs::write(dir.path().join("other.txt"), "").unwrap();

    let path = input_file(
        &session(&service, &dir),
        ProcessKind::GrainId,
        Some(Path::new("other.txt")),
    )
    .unwrap();

    assert_eq!(path, dir.path().join("other.txt"));
}

#[test]
fn test_missing_input_file() {
    let service = MemoryService::default();
    let dir = simulation_dir();

    let err = input_file(&session(&service, &dir), ProcessKind::Orientations, None).unwrap_err();

    assert!(format!("{err:?}").contains("--file"));
}

#[test]
fn test_without_parameters_file() {
    let service = MemoryService::default();
    let dir = simulation_dir();
    fs::remove_file(dir.path().join("parameters.in")).unwrap();
    fs::write(dir.path().join("boundaryconditions.txt"), "").unwrap();

    let path =
        input_file(&session(&service, &dir), ProcessKind::BoundaryConditions, None).unwrap();

    assert_eq!(path, dir.path().join("boundaryconditions.txt"));
}

#[test]
fn test_not_a_single_file_kind() {
    let service = MemoryService::default();
    let dir = simulation_dir();

    assert!(input_file(&session(&service, &dir), ProcessKind::Simulation, None).is_err());
}

#[test]
fn test_create_input() {
    let service = MemoryService::default();
    let dir = complete_simulation_dir();

    let created = create_input(
        &session(&service, &dir),
        ProcessKind::BoundaryConditions,
        None,
        None,
    )
    .unwrap();
    let state = service.state.borrow();

    assert_eq!(created.process.name, "BoundaryConditions Input");
    assert_eq!(created.sample.name, "BoundaryConditions Input");
    assert_eq!(state.uploads.len(), 1);
    assert_eq!(state.uploads[0].name, "boundaryconditions.txt");
    assert_eq!(state.process_files[0].2, FileDirection::In);
}
