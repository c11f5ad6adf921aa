// File: crates/demo/src/main.rs
// Summary: Demo loads per-resource CSVs (assets/liabilities/capital) and writes one HTML page.

use anyhow::{Context, Result};
use chart_page::{render_resource, DrawOptions, FileFetch, HtmlPage, RenderedResource};
use std::path::{Path, PathBuf};

const RESOURCES: [&str; 3] = ["assets", "liabilities", "capital"];

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Accept the CSV directory from CLI or fall back to the exporter's default.
    let dir = std::env::args().nth(1).unwrap_or_else(|| "tmp".to_string());
    println!("Using CSV directory: {dir}");

    let fetch = FileFetch::new(&dir);
    let opts = DrawOptions::default();

    // All three fetch-then-render tasks run concurrently; each owns its data.
    let (assets, liabilities, capital) = tokio::join!(
        render_resource(&fetch, "assets", &opts),
        render_resource(&fetch, "liabilities", &opts),
        render_resource(&fetch, "capital", &opts),
    );

    let mut page = HtmlPage::new(page_shell());
    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).context("create output directory")?;

    let mut drawn = 0usize;
    for (resource, result) in RESOURCES.iter().zip([assets, liabilities, capital]) {
        match result {
            Ok(rendered) => {
                rendered.install(&mut page);
                write_svg(&out_dir, &rendered)?;
                println!(
                    "Rendered {resource}: {} columns -> {}.svg",
                    rendered.legend.len(),
                    resource
                );
                drawn += 1;
            }
            // A failed resource is logged and skipped; the page still renders.
            Err(err) => log::error!("failed to draw {resource}: {err}"),
        }
    }

    let page_path = out_dir.join("page.html");
    std::fs::write(&page_path, page.into_html())
        .with_context(|| format!("write {}", page_path.display()))?;
    println!("Wrote {} ({drawn}/{} charts)", page_path.display(), RESOURCES.len());
    Ok(())
}

fn write_svg(out_dir: &Path, rendered: &RenderedResource) -> Result<()> {
    let path = out_dir.join(format!("{}.svg", rendered.resource));
    std::fs::write(&path, &rendered.svg).with_context(|| format!("write {}", path.display()))
}

fn page_shell() -> String {
    let mut sections = String::new();
    for resource in RESOURCES {
        sections.push_str(&format!(
            "    <section>\n      <h2>{resource}</h2>\n      \
             <div id=\"fed-{resource}-items\" class=\"fed-items\"></div>\n      \
             <div id=\"{resource}-chart\"></div>\n    </section>\n"
        ));
    }
    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\"/>\n    \
         <title>Federal Reserve balance sheet</title>\n    <style>\n      \
         .fed-items {{ display: flex; flex-wrap: wrap; gap: 0.5em; font: 12px sans-serif; }}\n      \
         .fed-concept-item {{ display: flex; align-items: center; }}\n      \
         .fed-concept-swatch {{ width: 12px; height: 12px; margin-right: 4px; }}\n    \
         </style>\n  </head>\n  <body>\n{sections}  </body>\n</html>\n"
    )
}
