// File: crates/chart-render-svg/src/legend.rs
// Summary: Legend swatch markup: one colored square plus a label per column.

use crate::escape::{escape_attr, escape_text};
use chart_core::LegendEntry;

/// Build one markup snippet per legend entry, in entry order.
///
/// `class_prefix` scopes the CSS class names, e.g. a prefix of
/// `fed-concept` yields `fed-concept-item` / `-swatch` / `-label`.
pub fn swatch_items(entries: &[LegendEntry], class_prefix: &str) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let label_attr = escape_attr(&entry.label);
            let label_text = escape_text(&entry.label);
            format!(
                "<div class=\"{class_prefix}-item\">\n  \
                 <div class=\"{class_prefix}-swatch\" style=\"background:{};\"></div>\n  \
                 <div class=\"{class_prefix}-label\" title=\"{label_attr}\">{label_text}</div>\n\
                 </div>",
                entry.color
            )
        })
        .collect()
}
