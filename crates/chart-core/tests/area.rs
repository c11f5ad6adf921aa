// File: crates/chart-core/tests/area.rs
// Purpose: Path Generator contract: outline tracing order and gap splitting.

use chart_core::{area_outlines, Band, StackedColumn, TimeScale, ValueScale};
use chrono::NaiveDate;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn scales() -> (TimeScale, ValueScale) {
    let x = TimeScale::new((date("2020-01-01"), date("2020-01-05")), (0.0, 100.0));
    let y = ValueScale::new((0.0, 10.0), (100.0, 0.0));
    (x, y)
}

#[test]
fn outline_traces_upper_then_lower_reversed() {
    let (x, y) = scales();
    let dates = vec![date("2020-01-01"), date("2020-01-03"), date("2020-01-05")];
    let column = StackedColumn {
        key: "a".into(),
        bands: vec![
            Band { lower: 1.0, upper: 4.0 },
            Band { lower: 2.0, upper: 6.0 },
            Band { lower: 0.0, upper: 5.0 },
        ],
    };

    let path = area_outlines(&column, &dates, &x, &y);
    assert_eq!(path.outlines.len(), 1);
    let outline = &path.outlines[0];
    assert_eq!(outline.len(), 6);

    // Upper boundary left to right...
    assert_eq!(outline[0], (x.x(dates[0]), y.y(4.0)));
    assert_eq!(outline[1], (x.x(dates[1]), y.y(6.0)));
    assert_eq!(outline[2], (x.x(dates[2]), y.y(5.0)));
    // ...then lower boundary right to left.
    assert_eq!(outline[3], (x.x(dates[2]), y.y(0.0)));
    assert_eq!(outline[4], (x.x(dates[1]), y.y(2.0)));
    assert_eq!(outline[5], (x.x(dates[0]), y.y(1.0)));
}

#[test]
fn non_finite_band_splits_into_two_runs() {
    let (x, y) = scales();
    let dates = vec![
        date("2020-01-01"),
        date("2020-01-02"),
        date("2020-01-03"),
        date("2020-01-04"),
    ];
    let column = StackedColumn {
        key: "a".into(),
        bands: vec![
            Band { lower: 0.0, upper: 2.0 },
            Band { lower: 0.0, upper: f64::NAN },
            Band { lower: 0.0, upper: 3.0 },
            Band { lower: 0.0, upper: 4.0 },
        ],
    };

    let path = area_outlines(&column, &dates, &x, &y);
    assert_eq!(path.outlines.len(), 2);
    assert_eq!(path.outlines[0].len(), 2); // single surviving row, up + down
    assert_eq!(path.outlines[1].len(), 4);
    for outline in &path.outlines {
        for &(px, py) in outline {
            assert!(px.is_finite() && py.is_finite());
        }
    }
}

#[test]
fn empty_column_yields_empty_path() {
    let (x, y) = scales();
    let column = StackedColumn { key: "a".into(), bands: Vec::new() };
    assert!(area_outlines(&column, &[], &x, &y).is_empty());
}
