use chrono::NaiveDate;
use proptest::prelude::*;
use zonal_core::timeline::Timeline;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn endpoints_map_to_the_range_bounds() {
    let timeline = Timeline::new(d(2020, 1, 1), d(2024, 1, 1));
    assert_eq!(timeline.instant_at(0.0), d(2020, 1, 1));
    assert_eq!(timeline.instant_at(100.0), d(2024, 1, 1));
}

#[test]
fn positions_outside_the_slider_clamp() {
    let timeline = Timeline::new(d(2020, 1, 1), d(2024, 1, 1));
    assert_eq!(timeline.instant_at(-50.0), timeline.start());
    assert_eq!(timeline.instant_at(150.0), timeline.end());
    assert_eq!(timeline.instant_at(f64::NAN), timeline.start());
}

#[test]
fn inverted_range_collapses_to_the_start_day() {
    let timeline = Timeline::new(d(2024, 1, 1), d(2020, 1, 1));
    assert_eq!(timeline.start(), timeline.end());
    assert_eq!(timeline.instant_at(50.0), d(2024, 1, 1));
}

#[test]
fn through_today_never_ends_before_its_anchor() {
    let timeline = Timeline::through_today(d(2020, 1, 1));
    assert!(timeline.end() >= timeline.start());
    assert_eq!(timeline.instant_at(0.0), d(2020, 1, 1));
}

#[test]
fn midpoint_lands_midway_through_the_range() {
    // 2020-01-01 to 2020-01-11 spans ten days; 50% is day five.
    let timeline = Timeline::new(d(2020, 1, 1), d(2020, 1, 11));
    assert_eq!(timeline.instant_at(50.0), d(2020, 1, 6));
}

proptest! {
    #[test]
    fn instants_stay_inside_the_range(
        percent in -50.0f64..150.0,
        span in 0i64..4000,
    ) {
        let start = d(2020, 1, 1);
        let timeline = Timeline::new(start, start + chrono::Duration::days(span));
        let instant = timeline.instant_at(percent);
        prop_assert!(instant >= timeline.start());
        prop_assert!(instant <= timeline.end());
    }

    #[test]
    fn mapping_is_monotonic_in_the_slider_position(
        a in 0.0f64..=100.0,
        b in 0.0f64..=100.0,
        span in 0i64..4000,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let start = d(2020, 1, 1);
        let timeline = Timeline::new(start, start + chrono::Duration::days(span));
        prop_assert!(timeline.instant_at(lo) <= timeline.instant_at(hi));
    }
}
