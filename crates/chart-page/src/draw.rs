// File: crates/chart-page/src/draw.rs
// Summary: Per-resource fetch-then-render task and page installation.

use crate::error::DrawError;
use crate::fetch::CsvFetch;
use crate::loader::parse_csv;
use crate::page::DomSink;
use chart_core::{ChartFrame, LegendEntry, Viewport};
use chart_render_svg::{swatch_items, SvgRenderer};

/// Knobs shared by every resource drawn onto one page.
#[derive(Clone, Debug)]
pub struct DrawOptions {
    pub viewport: Viewport,
    /// Unit text repeated beside the top value tick.
    pub unit_label: String,
    /// Container ids follow `<prefix>-<resource>-items`; legend CSS classes
    /// follow `<prefix>-concept-*`.
    pub id_prefix: String,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            unit_label: "Millions USD".to_string(),
            id_prefix: "fed".to_string(),
        }
    }
}

/// Finished artifacts for one resource: the chart SVG, the legend, and the
/// element ids they install under.
#[derive(Clone, Debug)]
pub struct RenderedResource {
    pub resource: String,
    pub svg: String,
    pub legend: Vec<LegendEntry>,
    pub legend_items: Vec<String>,
    pub chart_id: String,
    pub items_id: String,
}

impl RenderedResource {
    /// Append the legend items and the chart into `sink` at their ids.
    pub fn install(&self, sink: &mut impl DomSink) {
        for item in &self.legend_items {
            sink.append(&self.items_id, item);
        }
        sink.append(&self.chart_id, &self.svg);
    }
}

/// Fetch one resource's CSV and run the full layout and render pipeline.
///
/// One explicit async task per chart request; concurrent calls own disjoint
/// data and disjoint target ids, so they need no coordination. Errors are
/// returned, never swallowed; the caller decides to log and move on.
pub async fn render_resource<F: CsvFetch>(
    fetch: &F,
    resource: &str,
    opts: &DrawOptions,
) -> Result<RenderedResource, DrawError> {
    let bytes = fetch.fetch(resource).await?;
    let table = parse_csv(&bytes)?;
    let frame = ChartFrame::compute(&table, &opts.viewport)?;
    let legend = frame.legend();
    let legend_items = swatch_items(&legend, &format!("{}-concept", opts.id_prefix));
    let svg = SvgRenderer::new()
        .with_unit_label(opts.unit_label.clone())
        .render_svg(&frame);
    log::debug!("rendered {resource}: {} columns, {} rows", legend.len(), table.len());

    Ok(RenderedResource {
        resource: resource.to_string(),
        svg,
        legend,
        legend_items,
        chart_id: format!("{resource}-chart"),
        items_id: format!("{}-{resource}-items", opts.id_prefix),
    })
}

/// Fetch, render, and install one resource's chart and legend into `sink`.
pub async fn draw_resource<F: CsvFetch>(
    fetch: &F,
    resource: &str,
    opts: &DrawOptions,
    sink: &mut impl DomSink,
) -> Result<RenderedResource, DrawError> {
    let rendered = render_resource(fetch, resource, opts).await?;
    rendered.install(sink);
    Ok(rendered)
}
