//! Hierarchical figure numbering.
//!
//! Pictures, photos and tables that carry a reference identifier are numbered
//! in pre-order with a single counter shared by all three kinds. The result
//! is a side table: the tree itself is never touched.

use std::collections::HashMap;

use log::debug;

use crate::config::Location;
use crate::tree::{NodeId, Tree};

/// Figure numbers of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FigureNumbers {
    /// Number of figures numbered so far.
    counter: usize,
    /// Reference identifier → formatted number.
    by_ref: HashMap<String, String>,
    /// Figure node → formatted number (empty for unreferenced figures).
    by_node: HashMap<NodeId, String>,
}

impl FigureNumbers {
    /// An empty table; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the whole tree and number its figures.
    pub fn collect(tree: &Tree, location: Option<&Location>) -> Self {
        let mut numbers = Self::new();

        for id in tree.iter_dfs(tree.root()) {
            let Some(reference) = tree.kind(id).and_then(|k| k.figure_ref()) else {
                continue;
            };

            if reference.is_empty() {
                numbers.by_node.insert(id, String::new());
                continue;
            }

            numbers.counter += 1;
            let number = format_number(location, numbers.counter);
            debug!("figure {reference:?} numbered {number}");
            numbers.by_ref.insert(reference.to_string(), number.clone());
            numbers.by_node.insert(id, number);
        }

        numbers
    }

    /// Number assigned to a reference identifier.
    pub fn resolve(&self, reference: &str) -> Option<&str> {
        self.by_ref.get(reference).map(String::as_str)
    }

    /// Number assigned to a figure node; empty if it had no reference id or
    /// was never numbered.
    pub fn number_of(&self, node: NodeId) -> &str {
        self.by_node.get(&node).map(String::as_str).unwrap_or_default()
    }

    /// How many figures were numbered.
    pub fn len(&self) -> usize {
        self.counter
    }

    pub fn is_empty(&self) -> bool {
        self.counter == 0
    }

    /// The reference identifier → number table.
    pub fn figure_map(&self) -> &HashMap<String, String> {
        &self.by_ref
    }
}

/// Format a figure number: `edition-chapter.section.counter`, or the bare
/// counter without a location.
pub fn format_number(location: Option<&Location>, counter: usize) -> String {
    match location {
        Some(loc) => format!("{}-{}.{}.{}", loc.edition, loc.chapter, loc.section, counter),
        None => counter.to_string(),
    }
}
