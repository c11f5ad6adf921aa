// File: crates/chart-core/src/ticks.rs
// Summary: Tick layout helpers: 1-2-5 numeric steps and calendar-aligned time ticks.

use chrono::{Datelike, Duration, NaiveDate};

/// Tick step for a numeric interval, snapped to a 1, 2 or 5 times a power
/// of ten so tick values land on clean increments.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let span = stop - start;
    if !(span > 0.0) || count == 0 {
        return f64::NAN;
    }
    let step = span / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Expand `[lo, hi]` outward to clean multiples of the tick step.
pub fn nice_interval(lo: f64, hi: f64, count: usize) -> (f64, f64) {
    if !(hi > lo) {
        return (lo, hi);
    }
    let mut out = (lo, hi);
    // Second pass re-derives the step from the widened interval, like d3's nice().
    for _ in 0..2 {
        let step = tick_increment(out.0, out.1, count);
        if !step.is_finite() || step <= 0.0 {
            break;
        }
        out = ((lo / step).floor() * step, (hi / step).ceil() * step);
    }
    out
}

/// Tick values inside `[lo, hi]` at clean increments.
pub fn value_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let step = tick_increment(lo, hi, count);
    if !step.is_finite() || step <= 0.0 {
        return vec![lo];
    }
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// One time-axis tick: the date plus its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeTick {
    pub date: NaiveDate,
    pub label: String,
}

/// Calendar-aligned ticks over `[d0, d1]`, roughly `count` of them.
///
/// The interval is picked from days, weeks, months, and years depending on
/// the span. Labels step down at boundaries: year starts show the year,
/// month starts show the month, finer ticks show day-of-month.
pub fn time_ticks(d0: NaiveDate, d1: NaiveDate, count: usize) -> Vec<TimeTick> {
    if d1 < d0 {
        return Vec::new();
    }
    let count = count.max(1);
    let span_days = (d1 - d0).num_days().max(1) as f64;
    let approx = span_days / count as f64;

    if approx >= 300.0 {
        year_ticks(d0, d1, approx)
    } else if approx >= 25.0 {
        month_ticks(d0, d1, approx)
    } else {
        day_ticks(d0, d1, approx)
    }
}

fn year_ticks(d0: NaiveDate, d1: NaiveDate, approx_days: f64) -> Vec<TimeTick> {
    let want = approx_days / 365.0;
    let step = [1, 2, 5, 10, 20, 50]
        .into_iter()
        .find(|&s| s as f64 >= want)
        .unwrap_or(100) as i32;
    let mut out = Vec::new();
    let first = d0.year() + (step - d0.year().rem_euclid(step)) % step;
    let mut year = first;
    while let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) {
        if date > d1 {
            break;
        }
        if date >= d0 {
            out.push(TimeTick { date, label: format!("{year}") });
        }
        year += step;
    }
    out
}

fn month_ticks(d0: NaiveDate, d1: NaiveDate, approx_days: f64) -> Vec<TimeTick> {
    let want = approx_days / 30.0;
    let step = [1, 2, 3, 6]
        .into_iter()
        .find(|&s| s as f64 >= want)
        .unwrap_or(6) as u32;
    let mut out = Vec::new();
    let mut date = NaiveDate::from_ymd_opt(d0.year(), d0.month(), 1).unwrap_or(d0);
    while date <= d1 {
        if date >= d0 && (date.month0() % step) == 0 {
            out.push(TimeTick { date, label: month_label(date) });
        }
        date = next_month(date);
    }
    out
}

fn day_ticks(d0: NaiveDate, d1: NaiveDate, approx_days: f64) -> Vec<TimeTick> {
    let step = [1i64, 2, 7, 14]
        .into_iter()
        .find(|&s| s as f64 >= approx_days)
        .unwrap_or(14);
    let mut out = Vec::new();
    let mut date = d0;
    if step >= 7 {
        // Week-level ticks sit on Mondays.
        let offset = date.weekday().num_days_from_monday() as i64;
        if offset > 0 {
            date += Duration::days(7 - offset);
        }
    }
    while date <= d1 {
        out.push(TimeTick { date, label: day_label(date) });
        date += Duration::days(step);
    }
    out
}

fn month_label(date: NaiveDate) -> String {
    if date.month() == 1 {
        format!("{}", date.year())
    } else {
        date.format("%b").to_string()
    }
}

fn day_label(date: NaiveDate) -> String {
    if date.day() == 1 {
        month_label(date)
    } else {
        date.format("%b %d").to_string()
    }
}

fn next_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 12 { (date.year() + 1, 1) } else { (date.year(), date.month() + 1) };
    // First of the month is always representable.
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(date)
}
