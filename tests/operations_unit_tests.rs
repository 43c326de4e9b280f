//! Unit tests for the subcommand operations, driven through `MockApi`

use homebox_cli::api::MockApi;
use homebox_cli::cli::Command;
use homebox_cli::dispatch;
use homebox_cli::error::HomeboxError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_location_cmd(name: &str, parent: Option<&str>) -> Command {
    Command::CreateLocation {
        name: name.to_owned(),
        description: String::new(),
        parent: parent.map(str::to_owned),
    }
}

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_create_location_issues_one_create() {
    let api = MockApi::new();
    dispatch(&api, &create_location_cmd("Garage", None), false).unwrap();

    assert_eq!(api.mutations(), vec!["create_location:Garage"]);
    assert!(api.location_named("Garage").unwrap().parent_id.is_none());
}

#[test]
fn test_create_location_under_parent() {
    let api = MockApi::new().with_location("1", "Garage", None);
    dispatch(&api, &create_location_cmd("Shelf", Some("Garage")), false).unwrap();

    let shelf = api.location_named("Shelf").unwrap();
    assert_eq!(shelf.parent_id.as_deref(), Some("1"));
}

#[test]
fn test_create_existing_location_is_a_noop() {
    let api = MockApi::new()
        .with_location("1", "Garage", None)
        .with_location("2", "Shelf", Some("1"));

    dispatch(&api, &create_location_cmd("Shelf", Some("Garage")), false).unwrap();
    assert!(api.mutations().is_empty());
}

#[test]
fn test_create_same_name_under_other_parent_is_not_a_noop() {
    let api = MockApi::new()
        .with_location("1", "Garage", None)
        .with_location("2", "Attic", None)
        .with_location("3", "Shelf", Some("1"));

    // "Shelf" exists under Garage but not under Attic
    dispatch(&api, &create_location_cmd("Shelf", Some("Attic")), false).unwrap();
    assert_eq!(api.mutations(), vec!["create_location:Shelf"]);
}

#[test]
fn test_create_location_missing_parent_is_domain_error() {
    let api = MockApi::new();
    let err = dispatch(&api, &create_location_cmd("Shelf", Some("Garage")), false).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<HomeboxError>(),
        Some(HomeboxError::PathNotFound { .. })
    ));
    assert!(api.mutations().is_empty());
}

#[test]
fn test_import_locations_rows_may_reference_earlier_rows() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "locations.csv",
        "name,description,parent\nGarage,Main garage,\nShelf,,Garage\nBinA,,Shelf\n",
    );

    let api = MockApi::new();
    dispatch(&api, &Command::ImportLocations { csv }, false).unwrap();

    assert_eq!(api.mutations().len(), 3);
    let bin = api.location_named("BinA").unwrap();
    let shelf = api.location_named("Shelf").unwrap();
    assert_eq!(bin.parent_id.as_deref(), Some(shelf.id.as_str()));
}

#[test]
fn test_import_locations_aborts_batch_on_first_failure() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "locations.csv",
        "name,description,parent\nShelf,,Missing\nGarage,,\n",
    );

    let api = MockApi::new();
    let err = dispatch(&api, &Command::ImportLocations { csv }, false).unwrap_err();

    assert!(err.to_string().contains("Shelf"));
    // The failing row aborted the batch before the Garage row ran
    assert!(api.mutations().is_empty());
    assert!(api.location_named("Garage").is_none());
}

#[test]
fn test_rename_location_by_path() {
    let api = MockApi::new()
        .with_location("1", "Garage", None)
        .with_location("2", "Shelf", Some("1"));

    dispatch(
        &api,
        &Command::RenameLocation {
            path: "Garage/Shelf".to_owned(),
            name: "Rack".to_owned(),
        },
        false,
    )
    .unwrap();

    assert_eq!(api.mutations(), vec!["update_location:2:Rack"]);
    assert!(api.location_named("Rack").is_some());
}

#[test]
fn test_rename_location_unresolvable_path_fails() {
    let api = MockApi::new().with_location("1", "Garage", None);
    let err = dispatch(
        &api,
        &Command::RenameLocation {
            path: "Garage/Drawer".to_owned(),
            name: "Rack".to_owned(),
        },
        false,
    )
    .unwrap_err();

    match err.downcast_ref::<HomeboxError>() {
        Some(HomeboxError::PathNotFound { segment, .. }) => assert_eq!(segment, "Drawer"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_export_items_writes_paths_and_tags() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("items.csv");

    let api = MockApi::new()
        .with_location("1", "Garage", None)
        .with_location("2", "Shelf", Some("1"))
        .with_item("i1", "Drill", 2, Some("2"))
        .with_item("i2", "Ladder", 1, None);

    dispatch(
        &api,
        &Command::ExportItems { csv: csv.clone() },
        false,
    )
    .unwrap();

    let written = fs::read_to_string(&csv).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,name,description,quantity,locationPath,tags"
    );
    assert_eq!(lines.next().unwrap(), "i1,Drill,,2,Garage/Shelf,");
    assert_eq!(lines.next().unwrap(), "i2,Ladder,,1,,");
}

#[test]
fn test_update_items_sets_location_and_creates_tags_once() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "items.csv",
        "id,name,description,quantity,locationPath,tags\n\
         i1,Drill,Cordless,2,Garage/Shelf,\"tools,power\"\n\
         i2,Saw,,1,Garage/Shelf,tools\n",
    );

    let api = MockApi::new()
        .with_location("1", "Garage", None)
        .with_location("2", "Shelf", Some("1"))
        .with_item("i1", "Drill", 0, None)
        .with_item("i2", "Saw", 0, None);

    dispatch(&api, &Command::UpdateItems { csv }, false).unwrap();

    // "tools" is created once and reused by the second row
    let mutations = api.mutations();
    assert_eq!(
        mutations
            .iter()
            .filter(|m| m.as_str() == "create_tag:tools")
            .count(),
        1
    );
    assert_eq!(
        mutations
            .iter()
            .filter(|m| m.starts_with("update_item:"))
            .count(),
        2
    );

    let drill = api.item("i1").unwrap();
    assert_eq!(drill.quantity, 2);
    assert_eq!(drill.location.unwrap().id, "2");
    assert_eq!(drill.tags.len(), 2);
}

#[test]
fn test_update_items_skips_rows_without_id() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "items.csv",
        "id,name,description,quantity,locationPath,tags\n\
         ,Ghost,,1,,\n\
         i1,Drill,,2,,\n",
    );

    let api = MockApi::new().with_item("i1", "Drill", 0, None);
    dispatch(&api, &Command::UpdateItems { csv }, false).unwrap();

    assert_eq!(api.mutations(), vec!["update_item:i1"]);
}

#[test]
fn test_update_items_unresolvable_path_aborts_batch() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "items.csv",
        "id,name,description,quantity,locationPath,tags\n\
         i1,Drill,,2,Garage/Missing,\n\
         i2,Saw,,1,,\n",
    );

    let api = MockApi::new()
        .with_location("1", "Garage", None)
        .with_item("i1", "Drill", 0, None)
        .with_item("i2", "Saw", 0, None);

    let err = dispatch(&api, &Command::UpdateItems { csv }, false).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<HomeboxError>(),
        Some(HomeboxError::PathNotFound { .. })
    ));
    assert!(api.mutations().is_empty());
}

#[test]
fn test_dry_run_import_allows_parents_from_earlier_rows() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "locations.csv",
        "name,description,parent\nGarage,,\nShelf,,Garage\nBinA,,Shelf\n",
    );

    // Nothing pre-seeded: every parent would be created by an earlier row,
    // so the preview must complete without resolving them
    let api = MockApi::new();
    dispatch(&api, &Command::ImportLocations { csv }, true).unwrap();

    assert!(api.mutations().is_empty());
    assert!(api.location_named("Garage").is_none());
}

#[test]
fn test_dry_run_never_mutates() {
    let dir = TempDir::new().unwrap();
    let locations_csv = write_csv(
        &dir,
        "locations.csv",
        "name,description,parent\nGarage,,\nShelf,,Garage\n",
    );
    let items_csv = write_csv(
        &dir,
        "items.csv",
        "id,name,description,quantity,locationPath,tags\ni1,Drill,,2,Garage,newtag\n",
    );
    let export_csv = dir.path().join("export.csv");

    let api = MockApi::new()
        .with_location("1", "Garage", None)
        .with_item("i1", "Drill", 0, None);

    let commands = [
        create_location_cmd("Basement", None),
        Command::ImportLocations {
            csv: locations_csv,
        },
        Command::RenameLocation {
            path: "Garage".to_owned(),
            name: "Carport".to_owned(),
        },
        Command::ExportItems {
            csv: export_csv.clone(),
        },
        Command::UpdateItems { csv: items_csv },
    ];

    for command in &commands {
        dispatch(&api, command, true).unwrap();
    }

    assert!(api.mutations().is_empty());
    // Dry-run export does not write the file either
    assert!(!export_csv.exists());
}
