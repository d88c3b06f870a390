//! Shared fixtures for integration tests.

#![allow(dead_code)]

use deferred_seq::unsplit;

/// Split a comma-separated fixture; the empty string is the empty list.
pub fn split(list: &str) -> Vec<&str> {
    if list.is_empty() {
        Vec::new()
    } else {
        list.split(',').collect()
    }
}

/// Sort and re-join, so category contents compare independent of order.
pub fn sorted_join<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut items: Vec<&str> = items.into_iter().collect();
    items.sort_unstable();
    unsplit(items, ",")
}
