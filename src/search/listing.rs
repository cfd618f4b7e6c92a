use super::engine::filter_and_sort;
use super::query::Query;
use crate::item::{Item, ItemKind};

/// One page of a partition as shown to a visitor: the matching items plus
/// what is needed for the count line and the empty state.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    pub kind: ItemKind,
    pub items: Vec<&'a Item>,
    /// Size of the whole partition before filtering.
    pub total: usize,
    /// Whether the query narrowed the partition.
    pub filtered: bool,
}

impl<'a> Listing<'a> {
    /// Build the listing for `partition`, which must hold only items of `kind`.
    #[must_use]
    pub fn build(kind: ItemKind, partition: &[&'a Item], query: &Query) -> Self {
        Self {
            kind,
            items: filter_and_sort(partition.iter().copied(), query),
            total: partition.len(),
            filtered: query.is_filtering(),
        }
    }

    #[must_use]
    pub fn shown(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `Showing 2 of 5 lost items`
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} {} items",
            self.shown(),
            self.total,
            self.kind
        )
    }

    /// Heading for an empty result, e.g. `No lost items found`.
    #[must_use]
    pub fn empty_heading(&self) -> String {
        format!("No {} items found", self.kind)
    }

    /// Hint shown under the empty heading.
    #[must_use]
    pub fn empty_hint(&self) -> String {
        if self.filtered {
            "Try adjusting your search criteria or filters.".to_string()
        } else {
            format!("No {} items have been posted yet.", self.kind)
        }
    }
}
