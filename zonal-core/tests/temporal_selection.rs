use chrono::NaiveDate;
use zonal_core::feature::{Feature, FeatureCollection};
use zonal_core::resolve::at_instant;
use zonal_types::Palette;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn phoenix_history() -> FeatureCollection {
    FeatureCollection::new(vec![
        Feature::named("rev-jan", "Waymo - Phoenix - 07/01/2023"),
        Feature::named("rev-jun", "Waymo - Phoenix - 01/06/2023"),
        Feature::named("rev-2024", "Waymo - Phoenix - 01/01/2024"),
    ])
}

fn selected_ids(sets: &zonal_core::RenderSets, operator: &str) -> Vec<String> {
    sets.get(operator)
        .map(|g| g.features.iter().map(|f| f.id.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn instant_between_revisions_selects_the_one_in_force() {
    let sets = at_instant(&phoenix_history(), d(2023, 8, 1), &Palette::default());
    assert_eq!(selected_ids(&sets, "Waymo"), ["rev-jun"]);
}

#[test]
fn instant_before_the_earliest_revision_selects_nothing() {
    let sets = at_instant(&phoenix_history(), d(2022, 1, 1), &Palette::default());
    assert!(sets.is_empty());
}

#[test]
fn latest_revision_stays_in_force_indefinitely() {
    let sets = at_instant(&phoenix_history(), d(2024, 6, 1), &Palette::default());
    assert_eq!(selected_ids(&sets, "Waymo"), ["rev-2024"]);
}

#[test]
fn effective_date_is_inclusive_and_successor_date_is_exclusive() {
    let on_switch = at_instant(&phoenix_history(), d(2023, 6, 1), &Palette::default());
    assert_eq!(selected_ids(&on_switch, "Waymo"), ["rev-jun"]);

    let day_before = at_instant(&phoenix_history(), d(2023, 5, 31), &Palette::default());
    assert_eq!(selected_ids(&day_before, "Waymo"), ["rev-jan"]);
}

#[test]
fn at_most_one_revision_per_zone_is_selected() {
    let sets = at_instant(&phoenix_history(), d(2025, 1, 1), &Palette::default());
    assert_eq!(sets["Waymo"].len(), 1);
}

#[test]
fn zones_resolve_independently_within_an_operator() {
    let collection = FeatureCollection::new(vec![
        Feature::named("phx", "Waymo - Phoenix - 07/01/2023"),
        Feature::named("sf", "Waymo - San Francisco - 01/10/2023"),
    ]);

    // October: both zones have a revision in force.
    let sets = at_instant(&collection, d(2023, 11, 1), &Palette::default());
    assert_eq!(selected_ids(&sets, "Waymo"), ["phx", "sf"]);

    // March: only Phoenix has started.
    let sets = at_instant(&collection, d(2023, 3, 1), &Palette::default());
    assert_eq!(selected_ids(&sets, "Waymo"), ["phx"]);
}

#[test]
fn same_date_revisions_break_ties_toward_the_last_in_source_order() {
    let collection = FeatureCollection::new(vec![
        Feature::named("first", "Waymo - Phoenix - 01/06/2023"),
        Feature::named("second", "Waymo - Phoenix - 01/06/2023"),
    ]);

    let sets = at_instant(&collection, d(2023, 7, 1), &Palette::default());
    assert_eq!(selected_ids(&sets, "Waymo"), ["second"]);
}

#[test]
fn records_without_a_parseable_date_are_excluded() {
    let collection = FeatureCollection::new(vec![
        Feature::named("ok", "Waymo - Phoenix - 07/01/2023"),
        Feature::named("bad-date", "Waymo - Phoenix - 31/02/2023"),
        Feature::named("bad-name", "OnlyTwoParts - Zone"),
    ]);

    let sets = at_instant(&collection, d(2024, 1, 1), &Palette::default());
    assert_eq!(selected_ids(&sets, "Waymo"), ["ok"]);
}

#[test]
fn operators_are_colored_and_empty_ones_omitted() {
    let collection = FeatureCollection::new(vec![
        Feature::named("w", "Waymo - Phoenix - 07/01/2023"),
        Feature::named("t", "Tesla - Austin - 01/01/2025"),
    ]);

    let sets = at_instant(&collection, d(2024, 1, 1), &Palette::default());
    assert_eq!(sets["Waymo"].color.as_str(), "#01eba7");
    assert!(sets.get("Tesla").is_none(), "Tesla has nothing in force yet");
}

#[test]
fn resolver_is_idempotent() {
    let collection = phoenix_history();
    let instant = d(2023, 8, 1);
    assert_eq!(
        at_instant(&collection, instant, &Palette::default()),
        at_instant(&collection, instant, &Palette::default())
    );
}

#[test]
fn empty_collection_resolves_to_empty_render_sets() {
    let sets = at_instant(&FeatureCollection::empty(), d(2023, 8, 1), &Palette::default());
    assert!(sets.is_empty());
}
