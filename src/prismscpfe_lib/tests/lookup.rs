use super::*;
use crate::remote::memory::MemoryService;

fn grain_template() -> String {
    Templates::default()
        .template_id(ProcessKind::GrainId)
        .to_string()
}

#[test]
fn test_lookup_counts() {
    let templates = Templates::default();
    let grains = grain_template();

    let none = MemoryService::default().with_process("o1", "Orientations Input", "other");
    assert_eq!(
        find_unique(&none, &templates, ProcessKind::GrainId).unwrap(),
        Lookup::NotFound
    );

    let one = MemoryService::default().with_process("g1", "GrainId Input", &grains);
    assert!(matches!(
        find_unique(&one, &templates, ProcessKind::GrainId).unwrap(),
        Lookup::Found(p) if p.id == "g1"
    ));

    let two = MemoryService::default()
        .with_process("g1", "GrainId Input", &grains)
        .with_process("g2", "GrainId Input", &grains);
    assert!(matches!(
        find_unique(&two, &templates, ProcessKind::GrainId).unwrap(),
        Lookup::Ambiguous(c) if c.len() == 2
    ));
}

#[test]
fn test_found_errors_have_help() {
    let err = Lookup::<ProcessRecord>::NotFound
        .found(ProcessKind::Orientations)
        .unwrap_err();
    assert!(format!("{err:?}").contains("prismscpfe orientations create"));

    let service = MemoryService::default()
        .with_process("g1", "first", "t")
        .with_process("g2", "second", "t");
    let candidates = service.list_processes().unwrap();

    let err = Lookup::Ambiguous(candidates)
        .found(ProcessKind::GrainId)
        .unwrap_err();
    let shown = format!("{err:?}");

    assert!(shown.contains("first"));
    assert!(shown.contains("g2"));
}

#[test]
fn test_templates_are_respected() {
    let templates = Templates::default().with_override(ProcessKind::GrainId, "mine");
    let service = MemoryService::default()
        .with_process("g1", "GrainId Input", &grain_template())
        .with_process("g2", "GrainId Input", "mine");

    let found = find_processes(&service, &templates, ProcessKind::GrainId).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "g2");
}

#[test]
fn test_find_sample() {
    let service = MemoryService::default()
        .with_process("p1", "a", "t")
        .with_process("p2", "b", "t")
        .with_sample("p2", "s2", "b out", true);

    assert_eq!(find_sample(&service, "s2").unwrap().unwrap().name, "b out");
    assert_eq!(find_sample(&service, "s3").unwrap(), None);
}

#[test]
fn test_resolve_output_sample() {
    let templates = Templates::default();
    let service = MemoryService::default()
        .with_process("g1", "GrainId Input", &grain_template())
        .with_sample("g1", "in", "used", false)
        .with_sample("g1", "out", "GrainId Input", true)
        .with_process("x", "other", "t")
        .with_sample("x", "explicit", "something", true);

    let implicit =
        resolve_output_sample(&service, &templates, ProcessKind::GrainId, None).unwrap();
    assert_eq!(implicit.id, "out");

    let explicit =
        resolve_output_sample(&service, &templates, ProcessKind::GrainId, Some("explicit"))
            .unwrap();
    assert_eq!(explicit.name, "something");

    assert!(
        resolve_output_sample(&service, &templates, ProcessKind::GrainId, Some("nope")).is_err()
    );
    assert!(resolve_output_sample(&service, &templates, ProcessKind::Orientations, None).is_err());
}

#[test]
fn test_process_without_output() {
    let service = MemoryService::default().with_process(
        "b1",
        "BoundaryConditions Input",
        Templates::default().template_id(ProcessKind::BoundaryConditions),
    );

    let err = resolve_output_sample(
        &service,
        &Templates::default(),
        ProcessKind::BoundaryConditions,
        None,
    )
    .unwrap_err();

    assert!(format!("{err:?}").contains("no output sample"));
}
