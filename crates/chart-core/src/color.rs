// File: crates/chart-core/src/color.rs
// Summary: Deterministic ordinal color assignment over a fixed 12-color palette.

/// The "Paired" qualitative palette (12 colors).
pub const PAIRED: [&str; 12] = [
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c",
    "#fdbf6f", "#ff7f00", "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
];

/// Ordinal column-name-to-color mapping.
///
/// Colors follow column position in the ordered set, wrapping past the
/// palette length. The mapping is a pure function of the key order, so
/// repeated renders of the same table always color columns identically.
#[derive(Clone, Debug)]
pub struct OrdinalColors {
    keys: Vec<String>,
}

impl OrdinalColors {
    pub fn new(keys: &[String]) -> Self {
        Self { keys: keys.to_vec() }
    }

    /// Color for a column position.
    pub fn by_index(index: usize) -> &'static str {
        PAIRED[index % PAIRED.len()]
    }

    /// Color for a known key; `None` for keys outside the set.
    pub fn color(&self, key: &str) -> Option<&'static str> {
        self.keys.iter().position(|k| k == key).map(Self::by_index)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}
