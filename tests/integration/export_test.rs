//! Export and reload of filtered tables

use encounter_dashboard::config::DashboardConfig;
use encounter_dashboard::loader::{export_csv, export_parquet, load_encounters};
use encounter_dashboard::{CategoricalColumn, DataSource, FilterSelection};
use pretty_assertions::assert_eq;

use crate::utils::{generated_table, seeded_config};

fn reload(path: &std::path::Path) -> encounter_dashboard::EncounterTable {
    let config = DashboardConfig {
        source_path: path.to_path_buf(),
        ..seeded_config(1)
    };
    let loaded = load_encounters(&config).unwrap();
    assert_eq!(loaded.source, DataSource::File(path.to_path_buf()));
    assert_eq!(loaded.report.placeholders, 0);
    loaded.table
}

#[test]
fn test_csv_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filtered.csv");
    let table = FilterSelection::new()
        .with_services(["Pediatria", "Cardiologia"])
        .apply(&generated_table(400, 9));
    export_csv(&table, &path).unwrap();

    let reloaded = reload(&path);
    assert_eq!(reloaded.len(), table.len());
    for column in CategoricalColumn::ALL {
        let before: Vec<&str> = table.column_values(column).collect();
        let after: Vec<&str> = reloaded.column_values(column).collect();
        assert_eq!(before, after, "column {column}");
    }
    let ids: Vec<&str> = reloaded.iter().map(|e| e.id.as_str()).collect();
    let expected: Vec<&str> = table.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_parquet_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filtered.parquet");
    let table = generated_table(150, 10);
    export_parquet(&table, &path).unwrap();

    let reloaded = reload(&path);
    assert_eq!(reloaded.len(), 150);
    assert_eq!(reloaded, table);
}

#[test]
fn test_session_export_of_no_data_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    let mut session = encounter_dashboard::Session::from_table(
        generated_table(50, 11),
        encounter_dashboard::dashboard::RenderSettings::default(),
    );
    let rows = session
        .export(&FilterSelection::new().with_cities(["Manaus"]), &path)
        .unwrap();
    assert_eq!(rows, 0);
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("_id,sexo,cidade"));
    assert_eq!(text.lines().count(), 1);
}
