//! List summarization helper.

use std::collections::HashSet;
use std::hash::Hash;

use serde::Serialize;

/// Shape summary for a list: how many items, how many distinct items, and the
/// boundary elements. Empty input yields zero counts and `None` boundaries,
/// which serialize to JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary<T> {
    pub count: usize,
    pub unique: usize,
    pub first: Option<T>,
    pub last: Option<T>,
}

/// Summarizes a slice of items.
pub fn summarize<T>(items: &[T]) -> Summary<T>
where
    T: Clone + Eq + Hash,
{
    let distinct: HashSet<&T> = items.iter().collect();
    Summary {
        count: items.len(),
        unique: distinct.len(),
        first: items.first().cloned(),
        last: items.last().cloned(),
    }
}
