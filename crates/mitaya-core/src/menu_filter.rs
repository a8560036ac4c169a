//! Menu browser filtering
//!
//! Combines the category tab, free-text search, and vegetarian toggle into
//! one predicate over the static catalog. The catalog is small and bounded,
//! so this is a plain linear scan recomputed whenever an input changes; no
//! index is kept.

use crate::catalog::{CategoryFilter, MenuItem};
use crate::i18n::Language;

/// Select the catalog items matching all three filters.
///
/// The search query matches case-insensitively against the item's name or
/// description in the active language. [`CategoryFilter::Popular`] bypasses
/// the category predicate entirely.
pub fn filter_menu<'a>(
    items: &'a [MenuItem],
    category: CategoryFilter,
    query: &str,
    vegetarian_only: bool,
    lang: Language,
) -> Vec<&'a MenuItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| category.matches(item.category))
        .filter(|item| {
            needle.is_empty()
                || item.name.get(lang).to_lowercase().contains(&needle)
                || item.description.get(lang).to_lowercase().contains(&needle)
        })
        .filter(|item| !vegetarian_only || item.is_vegetarian)
        .collect()
}
