// File: crates/chart-page/tests/loader.rs
// Purpose: CSV loading: header contract, column order, raw cell semantics.

use chart_page::{parse_csv, DrawError};
use chrono::NaiveDate;

const SAMPLE: &str = "\
date,Loans,Securities Held Outright,Central bank liquidity swaps
2020-03-04,14,3800,25
2020-03-11,28,3900,45
2020-03-18,106,4100,n/a
";

#[test]
fn header_order_becomes_column_order() {
    let table = parse_csv(SAMPLE.as_bytes()).unwrap();
    assert_eq!(
        table.columns(),
        &[
            "Loans".to_string(),
            "Securities Held Outright".to_string(),
            "Central bank liquidity swaps".to_string(),
        ]
    );
    assert_eq!(table.len(), 3);
}

#[test]
fn dates_parse_and_cells_stay_raw() {
    let table = parse_csv(SAMPLE.as_bytes()).unwrap();
    let first = &table.rows()[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2020, 3, 4).unwrap());
    assert_eq!(first.raw("Loans"), Some("14"));
    assert_eq!(first.number("Securities Held Outright"), 3800.0);

    // Malformed numerics survive as raw text and read as 0.
    let last = &table.rows()[2];
    assert_eq!(last.raw("Central bank liquidity swaps"), Some("n/a"));
    assert_eq!(last.number("Central bank liquidity swaps"), 0.0);
}

#[test]
fn first_column_must_be_date() {
    let err = parse_csv(b"time,a\n2020-01-01,1\n").unwrap_err();
    assert!(matches!(err, DrawError::BadHeader(h) if h == "time"));
}

#[test]
fn unparseable_date_is_an_error() {
    let err = parse_csv(b"date,a\n03/04/2020,1\n").unwrap_err();
    assert!(matches!(err, DrawError::Date { value, .. } if value == "03/04/2020"));
}

#[test]
fn headers_only_yields_empty_table() {
    let table = parse_csv(b"date,a,b\n").unwrap();
    assert!(table.is_empty());
    assert_eq!(table.columns().len(), 2);
}
