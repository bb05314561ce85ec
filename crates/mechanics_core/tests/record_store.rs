use chrono::{Duration, TimeZone, Utc};
use mechanics_core::{
    MemoryStore, NewProgram, NewProject, ProgramPatch, ProgramStatus, ProjectPatch, ProjectStatus,
    Record,
};
use std::collections::HashSet;

fn program(name: &str) -> NewProgram {
    NewProgram {
        name: name.to_string(),
        ..NewProgram::default()
    }
}

#[test]
fn create_then_get_returns_equal_record() {
    let store = MemoryStore::new();
    let created = store.programs().create(program("Digital Transformation"));

    let loaded = store.programs().get(&created.id).unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.status, ProgramStatus::Active);
    assert_eq!(loaded.created_at, loaded.updated_at);
}

#[test]
fn create_assigns_distinct_ids() {
    let store = MemoryStore::new();
    let ids: HashSet<String> = (0..50)
        .map(|index| store.programs().create(program(&format!("p{index}"))).id)
        .collect();

    assert_eq!(ids.len(), 50);
    assert_eq!(store.programs().len(), 50);
}

#[test]
fn create_applies_enum_and_progress_defaults() {
    let store = MemoryStore::new();
    let project = store.projects().create(NewProject {
        name: "API Integration Platform".to_string(),
        ..NewProject::default()
    });

    assert_eq!(project.status, ProjectStatus::Planning);
    assert_eq!(project.progress, 0);
    assert!(project.program_id.is_none());
}

#[test]
fn update_merges_present_fields_and_restamps_updated_at() {
    let store = MemoryStore::new();
    let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let created = store.projects().create_at(
        NewProject {
            name: "Portal".to_string(),
            description: Some("first cut".to_string()),
            progress: Some(10),
            ..NewProject::default()
        },
        t0,
    );

    let patch = ProjectPatch {
        progress: Some(75),
        ..ProjectPatch::default()
    };
    let updated = store
        .projects()
        .update_at(&created.id, patch, t0 + Duration::minutes(5))
        .unwrap();

    assert_eq!(updated.progress, 75);
    assert_eq!(updated.name, "Portal");
    assert_eq!(updated.description.as_deref(), Some("first cut"));
    assert_eq!(updated.created_at, t0);
    assert_eq!(updated.updated_at, t0 + Duration::minutes(5));
    assert_eq!(store.projects().get(&created.id).unwrap(), updated);
}

#[test]
fn explicit_null_in_patch_clears_nullable_field() {
    let store = MemoryStore::new();
    let created = store.programs().create(NewProgram {
        name: "Infra".to_string(),
        manager_id: Some("2".to_string()),
        ..NewProgram::default()
    });

    let patch: ProgramPatch = serde_json::from_str(r#"{"managerId": null}"#).unwrap();
    let updated = store.programs().update(&created.id, patch).unwrap();
    assert!(updated.manager_id.is_none());

    let untouched: ProgramPatch = serde_json::from_str(r#"{"name": "Infra v2"}"#).unwrap();
    let updated = store.programs().update(&created.id, untouched).unwrap();
    assert_eq!(updated.name, "Infra v2");
    assert!(updated.manager_id.is_none());
}

#[test]
fn update_of_missing_id_is_absent_and_leaves_store_unchanged() {
    let store = MemoryStore::new();
    store.programs().create(program("only"));

    let outcome = store.programs().update("missing", ProgramPatch::default());
    assert!(outcome.is_none());
    assert_eq!(store.programs().len(), 1);
}

#[test]
fn delete_reports_presence_and_removes_record() {
    let store = MemoryStore::new();
    let created = store.programs().create(program("gone soon"));

    assert!(store.programs().delete(&created.id));
    assert!(store.programs().get(&created.id).is_none());
    assert!(!store.programs().delete(&created.id));
    assert!(store.programs().is_empty());
}

#[test]
fn list_returns_records_in_insertion_order() {
    let store = MemoryStore::new();
    let names = ["alpha", "beta", "gamma"];
    for name in names {
        store.programs().create(program(name));
    }

    let listed: Vec<String> = store
        .programs()
        .list()
        .into_iter()
        .map(|record| record.name)
        .collect();
    assert_eq!(listed, names);
}

#[test]
fn record_id_accessor_matches_field() {
    let store = MemoryStore::new();
    let created = store.programs().create(program("ids"));
    assert_eq!(Record::id(&created), created.id.as_str());
}

#[test]
fn collections_are_independent() {
    let store = MemoryStore::new();
    store.programs().create(program("one"));

    assert_eq!(store.programs().len(), 1);
    assert!(store.projects().is_empty());
    assert!(store.tasks().is_empty());
    assert!(store.blog_posts().is_empty());
    assert!(store.comments().is_empty());
    assert!(store.users().is_empty());
    assert!(store.media().is_empty());
}
