use std::collections::HashSet;

/// Stable key used for list rendering. Unique within one list.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Items that carry exactly one tag from a closed category set.
pub trait Categorized {
    type Category: Copy + Eq;

    fn category(&self) -> Self::Category;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Copy + Eq> CategoryFilter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }

    pub fn is_selected(&self, category: C) -> bool {
        matches!(self, Self::Only(c) if *c == category)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Returns the visible subset in source order.
pub fn filter_items<T: Categorized>(items: &[T], filter: CategoryFilter<T::Category>) -> Vec<&T> {
    items
        .iter()
        .filter(|item| filter.matches(item.category()))
        .collect()
}

/// Distinct categories present in `items`, in order of first appearance.
pub fn categories<T: Categorized>(items: &[T]) -> Vec<T::Category> {
    items.iter().fold(Vec::new(), |mut acc, item| {
        let c = item.category();
        if !acc.contains(&c) {
            acc.push(c);
        }
        acc
    })
}

/// At most one expanded item at a time, keyed by `Keyed::key`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleExpansion(Option<String>);

impl SingleExpansion {
    pub fn toggle(&mut self, key: &str) {
        if self.is_expanded(key) {
            self.0 = None;
        } else {
            self.0 = Some(key.to_string());
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.0.as_deref() == Some(key)
    }
}

/// Independent expanded/collapsed flags per key. Everything starts collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet(HashSet<String>);

impl ExpansionSet {
    pub fn toggle(&mut self, key: &str) {
        if !self.0.remove(key) {
            self.0.insert(key.to_string());
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.0.contains(key)
    }
}
