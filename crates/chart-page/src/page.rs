// File: crates/chart-page/src/page.rs
// Summary: DOM-like injection port and an HTML string page implementing it.

/// Injection port for rendered markup, keyed by element id. Keeps the
/// transformation pipeline free of any document structure or global state.
pub trait DomSink {
    /// Append `markup` as the last child of the element with `element_id`.
    fn append(&mut self, element_id: &str, markup: &str);
}

/// An HTML page held as a string. Appends splice markup in just before the
/// closing tag of the identified element.
#[derive(Clone, Debug)]
pub struct HtmlPage {
    html: String,
}

impl HtmlPage {
    pub fn new(shell: impl Into<String>) -> Self {
        Self { html: shell.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl DomSink for HtmlPage {
    fn append(&mut self, element_id: &str, markup: &str) {
        match insert_point(&self.html, element_id) {
            Some(at) => self.html.insert_str(at, markup),
            None => log::warn!(
                "no element with id {element_id:?}; dropping {} bytes of markup",
                markup.len()
            ),
        }
    }
}

/// Byte offset just before the closing tag of the element carrying
/// `id="<element_id>"`, tracking nesting of same-named tags in between.
fn insert_point(html: &str, element_id: &str) -> Option<usize> {
    let needle = format!("id=\"{element_id}\"");
    let id_at = html.find(&needle)?;
    let tag_start = html[..id_at].rfind('<')?;
    let name: String = html[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if name.is_empty() {
        return None;
    }
    let open_end = tag_start + html[tag_start..].find('>')? + 1;

    let open = format!("<{name}");
    let close = format!("</{name}>");
    let mut depth = 1usize;
    let mut pos = open_end;
    loop {
        let next_close = html[pos..].find(&close)?;
        let next_open = html[pos..].find(&open).filter(|&o| {
            o < next_close
                && html[pos + o + open.len()..]
                    .chars()
                    .next()
                    .is_some_and(|c| !c.is_ascii_alphanumeric())
        });
        match next_open {
            Some(o) => {
                depth += 1;
                pos += o + open.len();
            }
            None => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + next_close);
                }
                pos += next_close + close.len();
            }
        }
    }
}
