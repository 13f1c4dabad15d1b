use std::fs;

use prismscpfe_lib::remote::memory::MemoryService;

use super::*;
use crate::test_utils::session;
use crate::test_utils::simulation_dir;

#[test]
fn test_new_process_names() {
    let service = MemoryService::default();
    let dir = simulation_dir();
    let session = session(&service, &dir);

    let created = session.new_process(ProcessKind::Orientations, None).unwrap();

    assert_eq!(created.process.name, "Orientations Input");
    assert_eq!(created.sample.name, "Orientations Input");
    assert_eq!(
        created.process.template_id,
        Templates::default().template_id(ProcessKind::Orientations)
    );

    let named = session
        .new_process(ProcessKind::Orientations, Some("Texture A"))
        .unwrap();

    assert_eq!(named.sample.name, "Texture A");
}

#[test]
fn test_report_line() {
    let service = MemoryService::default();
    let dir = simulation_dir();
    let created = session(&service, &dir)
        .new_process(ProcessKind::NumericalParameters, None)
        .unwrap();

    let report = created.report();

    assert!(report.starts_with("Created process: Set Numerical Parameters "));
    assert!(report.contains(&created.process.id));
}

#[test]
fn test_confirm_in_script_mode() {
    let service = MemoryService::default().with_process(
        "g1",
        "GrainId Input",
        Templates::default().template_id(ProcessKind::GrainId),
    );
    let dir = simulation_dir();

    assert!(session(&service, &dir)
        .confirm_new(ProcessKind::GrainId)
        .unwrap());
    assert!(session(&service, &dir)
        .confirm_new(ProcessKind::Simulation)
        .unwrap());
}

#[test]
fn test_attach_files() {
    let service = MemoryService::default();
    let dir = simulation_dir();
    let session = session(&service, &dir);
    let created = session.new_process(ProcessKind::GrainId, None).unwrap();

    let path = dir.path().join("grains.txt");
    fs::write(&path, "1\n2\n").unwrap();

    let files = session
        .attach_files(&created.process, &[path], FileDirection::In)
        .unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "grains.txt");
    assert_eq!(
        service.state.borrow().process_files,
        vec![(
            created.process.id.clone(),
            files[0].id.clone(),
            FileDirection::In
        )]
    );
}

#[test]
fn test_attach_missing_file() {
    let service = MemoryService::default();
    let dir = simulation_dir();
    let session = session(&service, &dir);
    let created = session.new_process(ProcessKind::GrainId, None).unwrap();

    assert!(session
        .attach_files(
            &created.process,
            &[dir.path().join("absent.txt")],
            FileDirection::In
        )
        .is_err());
    assert!(service.state.borrow().process_files.is_empty());
}
