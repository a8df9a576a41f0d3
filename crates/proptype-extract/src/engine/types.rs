//! Extractor output table.

use std::collections::BTreeMap;

use proptype_core::ModifierCategory;
use serde::Serialize;

/// Ordered mapping from category to the names declared for it.
///
/// Names keep first-appearance order and are never de-duplicated. Iteration
/// follows `ModifierCategory` declaration order, which is also the order of
/// the generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorizedLiterals {
    entries: BTreeMap<ModifierCategory, Vec<String>>,
}

impl CategorizedLiterals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: ModifierCategory, name: impl Into<String>) {
        self.entries.entry(category).or_default().push(name.into());
    }

    /// Names for `category`, empty if none were found.
    pub fn get(&self, category: ModifierCategory) -> &[String] {
        self.entries.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-empty categories in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (ModifierCategory, &[String])> {
        self.entries
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(category, names)| (*category, names.as_slice()))
    }

    /// Per-category counts for every category, including empty ones.
    pub fn counts(&self) -> Vec<(ModifierCategory, usize)> {
        ModifierCategory::ALL
            .into_iter()
            .map(|c| (c, self.get(c).len()))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The category a name was filed under, if any.
    pub fn category_of(&self, name: &str) -> Option<ModifierCategory> {
        self.iter()
            .find(|(_, names)| names.iter().any(|n| n == name))
            .map(|(category, _)| category)
    }
}
