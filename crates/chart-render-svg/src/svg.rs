// File: crates/chart-render-svg/src/svg.rs
// Summary: SVG drawing backend: stacked bands, bottom time axis, left value axis.

use crate::escape::escape_text;
use chart_core::ticks::{tick_increment, time_ticks, value_ticks};
use chart_core::{AreaPath, ChartFrame, Renderer};
use std::fmt::Write;

/// Pixels of axis width per time tick; a 958px chart gets ~23 ticks.
const PX_PER_TIME_TICK: i32 = 40;
/// Default tick count for the value axis.
const VALUE_TICKS: usize = 10;

/// Renders a [`ChartFrame`] into a standalone `<svg>` document.
///
/// Bands are painted in layer (= stacking) order, each closed path carrying
/// a `<title>` with its column key. The value axis drops its domain line and
/// repeats the unit label in bold next to the topmost tick.
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    unit_label: Option<String>,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit text shown beside the top value tick (e.g. "Millions USD").
    pub fn with_unit_label(mut self, label: impl Into<String>) -> Self {
        self.unit_label = Some(label.into());
        self
    }

    pub fn render_svg(&self, frame: &ChartFrame) -> String {
        let vp = frame.viewport;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">",
            vp.width, vp.height
        );

        out.push_str("  <g>\n");
        for layer in &frame.layers {
            let _ = writeln!(
                out,
                "    <path fill=\"{}\" d=\"{}\"><title>{}</title></path>",
                layer.color,
                path_d(&layer.path),
                escape_text(&layer.key)
            );
        }
        out.push_str("  </g>\n");

        self.write_time_axis(&mut out, frame);
        self.write_value_axis(&mut out, frame);

        out.push_str("</svg>\n");
        out
    }

    fn write_time_axis(&self, out: &mut String, frame: &ChartFrame) {
        let vp = frame.viewport;
        let count = (vp.width / PX_PER_TIME_TICK).max(2) as usize;
        let (d0, d1) = frame.x_scale.domain();

        let _ = writeln!(
            out,
            "  <g transform=\"translate(0,{})\" fill=\"none\" font-size=\"10\" \
             font-family=\"sans-serif\" text-anchor=\"middle\">",
            fmt_px(vp.plot_bottom())
        );
        // Outer tick size is 0, so the domain line is a bare horizontal rule.
        let _ = writeln!(
            out,
            "    <path class=\"domain\" stroke=\"currentColor\" d=\"M{},0H{}\"/>",
            fmt_px(vp.plot_left()),
            fmt_px(vp.plot_right())
        );
        for tick in time_ticks(d0, d1, count) {
            let _ = writeln!(
                out,
                "    <g class=\"tick\" transform=\"translate({},0)\">\
                 <line stroke=\"currentColor\" y2=\"6\"/>\
                 <text fill=\"currentColor\" y=\"9\" dy=\"0.71em\">{}</text></g>",
                fmt_px(frame.x_scale.x(tick.date)),
                escape_text(&tick.label)
            );
        }
        out.push_str("  </g>\n");
    }

    fn write_value_axis(&self, out: &mut String, frame: &ChartFrame) {
        let vp = frame.viewport;
        let (lo, hi) = frame.y_scale.domain();
        let ticks = value_ticks(lo, hi, VALUE_TICKS);
        let step = tick_increment(lo, hi, VALUE_TICKS);

        let _ = writeln!(
            out,
            "  <g transform=\"translate({},0)\" fill=\"none\" font-size=\"10\" \
             font-family=\"sans-serif\" text-anchor=\"end\">",
            fmt_px(vp.plot_left())
        );
        // The domain line is intentionally omitted on the value axis.
        for (i, &value) in ticks.iter().enumerate() {
            let _ = write!(
                out,
                "    <g class=\"tick\" transform=\"translate(0,{})\">\
                 <line stroke=\"currentColor\" x2=\"-6\"/>\
                 <text fill=\"currentColor\" x=\"-9\" dy=\"0.32em\">{}</text>",
                fmt_px(frame.y_scale.y(value)),
                format_value(value, step)
            );
            if i + 1 == ticks.len() {
                if let Some(unit) = &self.unit_label {
                    let _ = write!(
                        out,
                        "<text fill=\"currentColor\" x=\"3\" dy=\"0.32em\" \
                         text-anchor=\"start\" font-weight=\"bold\">{}</text>",
                        escape_text(unit)
                    );
                }
            }
            out.push_str("</g>\n");
        }
        out.push_str("  </g>\n");
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&self, frame: &ChartFrame) -> String {
        self.render_svg(frame)
    }
}

/// SVG path data for an area geometry: every outline is a closed subpath.
pub fn path_d(path: &AreaPath) -> String {
    let mut d = String::new();
    for outline in &path.outlines {
        for (i, &(x, y)) in outline.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{},{}", fmt_px(x), fmt_px(y));
        }
        if !outline.is_empty() {
            d.push('Z');
        }
    }
    d
}

/// Pixel coordinates with sub-pixel precision, without a trailing `.00`.
fn fmt_px(v: f64) -> String {
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Tick label for `value` given the tick `step`: thousands-grouped integers
/// for whole steps, fixed decimals otherwise.
fn format_value(value: f64, step: f64) -> String {
    if step.is_finite() && step > 0.0 && step < 1.0 {
        let decimals = (-step.log10().floor()) as usize;
        return format!("{value:.decimals$}");
    }
    group_thousands(value.round() as i64)
}

fn group_thousands(mut n: i64) -> String {
    let negative = n < 0;
    n = n.abs();
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}
