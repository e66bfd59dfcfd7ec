//! End-to-end render passes through a dashboard session

use std::sync::Arc;

use encounter_dashboard::config::DashboardConfig;
use encounter_dashboard::dashboard::{RenderSettings, Session};
use encounter_dashboard::{CategoricalColumn, DataSource, FilterSelection};

use crate::utils::{seeded_config, small_table};

#[test]
fn test_session_falls_back_to_synthetic_data() {
    let dir = tempfile::tempdir().unwrap();
    let config = DashboardConfig {
        source_path: dir.path().join("saude_processada.csv"),
        synthetic_records: 300,
        ..seeded_config(17)
    };
    let mut session = Session::open(&config).unwrap();
    assert_eq!(session.source(), &DataSource::Synthetic);
    assert_eq!(session.table().len(), 300);

    let render = session.render(&FilterSelection::new());
    let view = render.view().unwrap();
    assert_eq!(view.kpis.total_encounters, 300);
    assert!(view.top_cities.len() <= config.city_top_n);
    assert_eq!(view.age_brackets.len(), 4);
}

#[test]
fn test_renders_are_memoized_per_selection() {
    let mut session = Session::from_table(small_table(), RenderSettings::default());
    let curitiba = FilterSelection::new().with_cities(["Curitiba"]);
    let salvador = FilterSelection::new().with_cities(["Salvador"]);

    let first = session.render(&curitiba);
    let other = session.render(&salvador);
    let again = session.render(&curitiba);

    assert!(Arc::ptr_eq(&first, &again));
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(session.cached_renders(), 2);
}

#[test]
fn test_empty_result_renders_no_data() {
    let mut session = Session::from_table(small_table(), RenderSettings::default());
    let selection = FilterSelection::new()
        .with_cities(["Salvador"])
        .with_sexes(["Feminino"]);
    let render = session.render(&selection);
    assert!(render.is_no_data());
}

#[test]
fn test_view_follows_filters() {
    let mut session = Session::from_table(small_table(), RenderSettings::default());
    let render = session.render(&FilterSelection::new().with_cities(["Curitiba"]));
    let view = render.view().unwrap();
    assert_eq!(view.kpis.total_encounters, 3);
    assert_eq!(view.kpis.top_diagnosis, "Gripe");
    assert_eq!(view.table.len(), 3);
    assert!(view.generate_summary().contains("Total Encounters: 3"));
    assert_eq!(
        session.filter_options(CategoricalColumn::City),
        vec!["Curitiba", "Salvador", "São Paulo"]
    );
}
