/// Open-set implementation used by a [`Searcher`](crate::Searcher).
///
/// Both variants select the same entry at every step and therefore return
/// the same route; they differ only in cost per selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FrontierKind {
    /// Binary heap with lazily discarded stale entries. O(log n) selection.
    #[default]
    Heap,
    /// Insertion-ordered list scanned for the minimum. O(n) selection.
    Scan,
}

/// Configuration for a [`Searcher`](crate::Searcher).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Which open-set implementation to use.
    pub frontier: FrontierKind,
}
