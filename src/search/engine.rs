use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;
use tracing::warn;

use super::query::{Query, SortKey};
use crate::item::Item;

thread_local! {
    // Root locale, tertiary strength: the same order a browser's
    // `localeCompare` gives with no locale argument.
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| warn!("Unicode collation unavailable, sorting by code point: {e}"))
            .ok();
}

/// Filter `items` by `query` and order the survivors by `query.sort`.
///
/// The sort is stable: items comparing equal keep the order they came in,
/// which for a store partition is newest first. The input is not touched.
#[must_use]
pub fn filter_and_sort<'a, I>(items: I, query: &Query) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let needle = query.term.to_lowercase();
    let mut matched: Vec<&'a Item> = items
        .into_iter()
        .filter(|item| query.category.matches(item.category))
        .filter(|item| needle.is_empty() || matches_term(item, &needle))
        .collect();
    matched.sort_by(|a, b| compare_by_key(a, b, query.sort));
    matched
}

/// `needle` must already be lowercase.
fn matches_term(item: &Item, needle: &str) -> bool {
    [&item.title, &item.description, &item.location]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn compare_by_key(a: &Item, b: &Item, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => b.date_posted.cmp(&a.date_posted),
        SortKey::Title => locale_cmp(&a.title, &b.title),
        SortKey::Category => locale_cmp(a.category.as_str(), b.category.as_str()),
        SortKey::Location => locale_cmp(&a.location, &b.location),
    }
}

/// Locale-aware string order from the Unicode collation algorithm.
///
/// Accents and case only break ties between otherwise equal letters, so
/// `Café` sorts before `Cafeteria` and `apple` before `Apple`.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
