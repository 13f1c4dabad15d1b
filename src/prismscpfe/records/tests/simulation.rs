use prismscpfe_lib::remote::memory::MemoryService;
use prismscpfe_lib::templates::Templates;

use super::*;
use crate::test_utils::complete_simulation_dir;
use crate::test_utils::session;
use crate::test_utils::simulation_dir;

/// An experiment with one process and output sample of every input kind.
fn seeded() -> MemoryService {
    let templates = Templates::default();
    let mut service = MemoryService::default();

    for (n, kind) in ProcessKind::INPUTS.iter().enumerate() {
        let process = format!("p{n}");

        service = service
            .with_process(&process, &kind.process_name(), templates.template_id(*kind))
            .with_sample(&process, &format!("s{n}"), &kind.sample_name(), true);
    }

    service
}

#[test]
fn test_inputs_from_unique_processes() {
    let service = seeded();
    let dir = simulation_dir();

    let inputs = resolve_inputs(&session(&service, &dir), None).unwrap();

    assert_eq!(
        inputs.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
        vec!["s0", "s1", "s2", "s3"]
    );
}

#[test]
fn test_missing_input_kind() {
    let service = MemoryService::default().with_process(
        "p0",
        "Set Numerical Parameters",
        Templates::default().template_id(ProcessKind::NumericalParameters),
    );
    let dir = simulation_dir();

    let err = resolve_inputs(&session(&service, &dir), None).unwrap_err();

    assert!(format!("{err:?}").contains("no output sample"));
}

#[test]
fn test_explicit_inputs() {
    let service = seeded();
    let dir = simulation_dir();
    let ids = vec!["s2".to_string(), "s0".to_string()];

    let inputs = resolve_inputs(&session(&service, &dir), Some(ids.as_slice())).unwrap();
    assert_eq!(inputs[0].id, "s2");
    assert_eq!(inputs[1].id, "s0");

    let ids = vec!["s1".to_string(), "unknown".to_string()];
    let err = resolve_inputs(&session(&service, &dir), Some(ids.as_slice())).unwrap_err();
    assert!(format!("{err:?}").contains("unknown"));
}

#[test]
fn test_create_simulation() {
    let service = seeded();
    let dir = complete_simulation_dir();
    let session = session(&service, &dir);

    let inputs = resolve_inputs(&session, None).unwrap();
    let created = create_simulation(&session, None, &inputs, Some(16)).unwrap();
    let state = service.state.borrow();

    assert_eq!(created.process.name, "Run Simulation");
    assert_eq!(created.sample.name, "Simulation Results");

    assert!(state.measurements.contains(&(
        created.process.id.clone(),
        "Number of cores".to_string(),
        MeasurementValue::Integer(16)
    )));

    let uploaded: Vec<&str> = state.uploads.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(uploaded, vec!["solution-0000.vtu", "solution-0001.vtu"]);

    assert!(state
        .process_files
        .iter()
        .all(|(_, _, d)| *d == FileDirection::Out));
    assert_eq!(state.sample_files.len(), 2);
    assert!(state
        .sample_files
        .iter()
        .all(|(sample, _)| *sample == created.sample.id));

    let consumed = state
        .samples
        .iter()
        .filter(|(p, _, output)| *p == created.process.id && !output)
        .count();
    assert_eq!(consumed, 4);
}

#[test]
fn test_simulation_without_results() {
    let service = seeded();
    let dir = simulation_dir();

    let created = create_simulation(&session(&service, &dir), None, &[], None).unwrap();
    let state = service.state.borrow();

    assert!(state.uploads.is_empty());
    assert!(!state
        .measurements
        .iter()
        .any(|(p, _, _)| *p == created.process.id));
}

#[test]
fn test_core_count_must_be_positive() {
    let service = seeded();
    let dir = simulation_dir();

    assert!(create_simulation(&session(&service, &dir), None, &[], Some(0)).is_err());
    assert_eq!(service.state.borrow().processes.len(), 4);
}
