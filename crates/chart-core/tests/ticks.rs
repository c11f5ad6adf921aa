// File: crates/chart-core/tests/ticks.rs
// Purpose: Tick layout: clean numeric steps and calendar-aligned time ticks.

use chart_core::ticks::{nice_interval, tick_increment, time_ticks, value_ticks};
use chrono::{Datelike, NaiveDate};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn increments_snap_to_1_2_5() {
    assert_eq!(tick_increment(0.0, 10.0, 10), 1.0);
    assert_eq!(tick_increment(0.0, 38.0, 10), 5.0);
    assert_eq!(tick_increment(0.0, 100.0, 10), 10.0);
    assert_eq!(tick_increment(0.0, 1500.0, 10), 200.0);
}

#[test]
fn value_ticks_stay_inside_domain() {
    let ticks = value_ticks(0.0, 40.0, 10);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(40.0));
    for pair in ticks.windows(2) {
        assert!((pair[1] - pair[0] - 5.0).abs() < 1e-9);
    }
}

#[test]
fn nice_interval_expands_outward_only() {
    let (lo, hi) = nice_interval(0.3, 9.7, 10);
    assert!(lo <= 0.3 && hi >= 9.7);
    assert_eq!((lo, hi), (0.0, 10.0));
}

#[test]
fn multi_year_span_ticks_on_january_first() {
    let ticks = time_ticks(date("2008-03-15"), date("2021-07-01"), 12);
    assert!(!ticks.is_empty());
    for t in &ticks {
        assert_eq!((t.date.month(), t.date.day()), (1, 1));
        assert_eq!(t.label, format!("{}", t.date.year()));
    }
    assert!(ticks.first().unwrap().date >= date("2008-03-15"));
    assert!(ticks.last().unwrap().date <= date("2021-07-01"));
}

#[test]
fn year_span_ticks_on_month_starts() {
    let ticks = time_ticks(date("2020-01-01"), date("2020-12-31"), 13);
    assert_eq!(ticks.len(), 12);
    for t in &ticks {
        assert_eq!(t.date.day(), 1);
    }
    // January carries the year label, other months their abbreviation.
    assert_eq!(ticks[0].label, "2020");
    assert_eq!(ticks[1].label, "Feb");
}

#[test]
fn short_span_ticks_daily() {
    let ticks = time_ticks(date("2020-02-01"), date("2020-02-10"), 10);
    assert_eq!(ticks.len(), 10);
    assert_eq!(ticks[0].date, date("2020-02-01"));
    assert_eq!(ticks[1].label, "Feb 02");
}

#[test]
fn reversed_domain_yields_no_ticks() {
    assert!(time_ticks(date("2020-02-01"), date("2020-01-01"), 5).is_empty());
}
