use zonal_core::feature::{Feature, FeatureCollection};
use zonal_core::resolve::by_toggles;
use zonal_types::{Palette, ToggleSet};

fn fixture() -> FeatureCollection {
    FeatureCollection::new(vec![
        Feature::named("w-phx-1", "Waymo - Phoenix - 07/01/2023"),
        Feature::named("w-phx-2", "Waymo - Phoenix - 01/06/2023"),
        Feature::named("w-sf-1", "Waymo - San Francisco - 12/09/2023"),
        Feature::named("t-atx-1", "Tesla - Austin - 15/03/2024"),
        Feature::named("bad-name", "OnlyTwoParts - Zone"),
    ])
}

fn ids(sets: &zonal_core::RenderSets, operator: &str) -> Vec<String> {
    sets.get(operator)
        .map(|g| g.features.iter().map(|f| f.id.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn everything_is_hidden_by_default() {
    let sets = by_toggles(&fixture(), &ToggleSet::new(), &Palette::default());
    assert!(sets.is_empty());
}

#[test]
fn operator_toggle_shows_all_of_that_operators_records() {
    let mut toggles = ToggleSet::new();
    toggles.set_operator("Waymo", true);

    let sets = by_toggles(&fixture(), &toggles, &Palette::default());
    assert_eq!(ids(&sets, "Waymo"), ["w-phx-1", "w-phx-2", "w-sf-1"]);
    assert!(sets.get("Tesla").is_none(), "untoggled operators are omitted");
}

#[test]
fn record_toggle_beats_a_zone_level_hide() {
    let mut toggles = ToggleSet::new();
    toggles.set_zone("Waymo", "Phoenix", false);
    toggles.set_revision("w-phx-2", true);

    let sets = by_toggles(&fixture(), &toggles, &Palette::default());
    assert_eq!(ids(&sets, "Waymo"), ["w-phx-2"]);
}

#[test]
fn zone_hide_is_consulted_before_an_operator_show() {
    let mut toggles = ToggleSet::new();
    toggles.set_operator("Waymo", true);
    toggles.set_zone("Waymo", "Phoenix", false);

    let sets = by_toggles(&fixture(), &toggles, &Palette::default());
    assert_eq!(ids(&sets, "Waymo"), ["w-sf-1"]);
}

#[test]
fn an_absent_level_defers_rather_than_hides() {
    // Only a record-level toggle exists; zone/operator absence must not veto it.
    let mut toggles = ToggleSet::new();
    toggles.set_revision("t-atx-1", true);

    let sets = by_toggles(&fixture(), &toggles, &Palette::default());
    assert_eq!(ids(&sets, "Tesla"), ["t-atx-1"]);
}

#[test]
fn malformed_names_never_render_even_when_toggled_on() {
    let mut toggles = ToggleSet::new();
    toggles.set_revision("bad-name", true);

    let sets = by_toggles(&fixture(), &toggles, &Palette::default());
    assert!(sets.is_empty());
}

#[test]
fn unparseable_date_does_not_exclude_a_record_from_toggle_mode() {
    // Three name segments are enough here; only temporal resolution needs
    // the date to parse.
    let collection = FeatureCollection::new(vec![Feature::named(
        "w-atx-odd",
        "Waymo - Austin - 31/02/2023",
    )]);
    let mut toggles = ToggleSet::new();
    toggles.set_revision("w-atx-odd", true);

    let sets = by_toggles(&collection, &toggles, &Palette::default());
    assert_eq!(ids(&sets, "Waymo"), ["w-atx-odd"]);
}

#[test]
fn operators_get_their_palette_color_with_a_fallback_for_unknowns() {
    let collection = FeatureCollection::new(vec![
        Feature::named("w-phx-1", "Waymo - Phoenix - 07/01/2023"),
        Feature::named("c-hou-1", "Cruise - Houston - 02/02/2023"),
    ]);
    let mut toggles = ToggleSet::new();
    toggles.set_operator("Waymo", true);
    toggles.set_operator("Cruise", true);

    let sets = by_toggles(&collection, &toggles, &Palette::default());
    assert_eq!(sets["Waymo"].color.as_str(), "#01eba7");
    assert_eq!(sets["Cruise"].color.as_str(), "#000000");
}

#[test]
fn resolver_is_idempotent() {
    let collection = fixture();
    let mut toggles = ToggleSet::new();
    toggles.set_operator("Waymo", true);
    toggles.set_zone("Waymo", "Phoenix", false);

    let first = by_toggles(&collection, &toggles, &Palette::default());
    let second = by_toggles(&collection, &toggles, &Palette::default());
    assert_eq!(first, second);
}

#[test]
fn empty_collection_resolves_to_empty_render_sets() {
    let mut toggles = ToggleSet::new();
    toggles.set_operator("Waymo", true);
    let sets = by_toggles(&FeatureCollection::empty(), &toggles, &Palette::default());
    assert!(sets.is_empty());
}

#[test]
fn render_groups_are_valid_collection_subsets() {
    let mut toggles = ToggleSet::new();
    toggles.set_operator("Waymo", true);

    let sets = by_toggles(&fixture(), &toggles, &Palette::default());
    let subset = sets["Waymo"].to_collection();
    assert_eq!(subset.kind, "FeatureCollection");
    assert_eq!(subset.len(), 3);

    let json = serde_json::to_value(&subset).expect("serialize subset");
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["features"][0]["type"], "Feature");
}
