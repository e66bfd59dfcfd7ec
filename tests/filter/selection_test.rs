//! Tests for sidebar filter selections

use encounter_dashboard::filter::{
    AllFilter, AnyFilter, CategoryFilter, EncounterFilter, FilterSelection, NotFilter, SharedFilter, filter_options,
};
use encounter_dashboard::{AgeBracket, CategoricalColumn};
use pretty_assertions::assert_eq;
use std::sync::Arc;

use crate::utils::{generated_table, small_table};

#[test]
fn test_empty_selection_is_pass_through() {
    let table = generated_table(300, 1);
    let filtered = FilterSelection::new().apply(&table);
    assert_eq!(filtered, table);
}

#[test]
fn test_all_marker_is_pass_through() {
    let table = small_table();
    let selection = FilterSelection::new()
        .with_cities(["Todas"])
        .with_sexes(["Todos", "Feminino"]);
    assert!(selection.is_unrestricted());
    assert_eq!(selection.apply(&table).len(), table.len());
}

#[test]
fn test_selection_keeps_only_members() {
    let table = generated_table(600, 2);
    let selection = FilterSelection::new()
        .with_cities(["Curitiba", "Salvador"])
        .with_sexes(["Feminino"]);
    let filtered = selection.apply(&table);
    assert!(!filtered.is_empty());
    assert!(filtered.iter().all(|e| {
        (e.city == "Curitiba" || e.city == "Salvador") && e.sex == "Feminino"
    }));
}

#[test]
fn test_filtered_and_complement_cover_table() {
    let table = generated_table(400, 3);
    let filter = CategoryFilter::new(CategoricalColumn::City, ["Porto Alegre"]);
    let (kept, rest) = table.partition(|e| filter.matches(e));
    assert_eq!(kept, filter.apply(&table));
    assert_eq!(rest, NotFilter::new(filter).apply(&table));
    assert_eq!(kept.len() + rest.len(), table.len());
}

#[test]
fn test_age_bracket_choice_by_label_or_name() {
    let table = small_table();
    let by_label = FilterSelection::new().with_age_brackets(["Idoso"]).apply(&table);
    let by_name = FilterSelection::new().with_age_brackets(["elderly"]).apply(&table);
    assert_eq!(by_label, by_name);
    assert_eq!(by_label.len(), 2);
    assert!(by_label.iter().all(|e| e.age_bracket == AgeBracket::Elderly));
}

#[test]
fn test_any_filter_is_a_union() {
    let table = small_table();
    let any = AnyFilter::new(vec![
        Arc::new(CategoryFilter::new(CategoricalColumn::City, ["Salvador"])) as SharedFilter,
        Arc::new(CategoryFilter::new(CategoricalColumn::Sex, ["Outro"])),
    ]);
    let filtered = any.apply(&table);
    let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["rec_000001", "rec_000003"]);
}

#[test]
fn test_filter_options_for_sidebar() {
    let table = small_table();
    assert_eq!(
        filter_options(&table, CategoricalColumn::Sex),
        vec!["Feminino", "Masculino", "Outro"]
    );
}

#[test]
fn test_empty_combinators() {
    let table = small_table();
    assert_eq!(AllFilter::default().apply(&table).len(), table.len());
    assert!(AnyFilter::default().apply(&table).is_empty());
}

#[test]
fn test_folded_selection_keeps_placeholder() {
    let selection = FilterSelection::new()
        .with_cities(["São Paulo", "Não informado"])
        .with_age_brackets(["Criança"])
        .with_folded_accents("Não informado");
    let cities: Vec<&str> = selection.cities.iter().map(String::as_str).collect();
    assert_eq!(cities, vec!["Não informado", "Sao Paulo"]);

    let bracket = selection
        .category_filters()
        .into_iter()
        .find(|filter| filter.column() == CategoricalColumn::AgeBracket)
        .unwrap();
    assert!(bracket.values().contains(AgeBracket::Child.label()));
}
