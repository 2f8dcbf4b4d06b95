//! Identity-based selection set.
//!
//! Records are tracked by `Arc` pointer identity, so two records with equal
//! contents are still distinct entries. Entries keep the order they were added;
//! a pointer index next to the ordered list keeps membership checks constant
//! time, so select-all over large tables stays linear.

use std::collections::HashSet;
use std::sync::Arc;

/// Ordered set of selected records, compared with [`Arc::ptr_eq`].
#[derive(Debug)]
pub struct Selection<R> {
    selected: Vec<Arc<R>>,
    /// `Arc::as_ptr` of every entry in `selected`.
    index: HashSet<*const R>,
}

impl<R> Default for Selection<R> {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
            index: HashSet::new(),
        }
    }
}

impl<R> Clone for Selection<R> {
    fn clone(&self) -> Self {
        Self {
            selected: self.selected.clone(),
            index: self.index.clone(),
        }
    }
}

impl<R> Selection<R> {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected records in the order they were added.
    pub fn as_slice(&self) -> &[Arc<R>] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, record: &Arc<R>) -> bool {
        self.index.contains(&Arc::as_ptr(record))
    }

    /// Add the record if absent, remove it if present.
    /// Returns whether the record is selected afterwards.
    pub fn toggle(&mut self, record: &Arc<R>) -> bool {
        if self.index.remove(&Arc::as_ptr(record)) {
            self.selected.retain(|r| !Arc::ptr_eq(r, record));
            false
        } else {
            self.index.insert(Arc::as_ptr(record));
            self.selected.push(Arc::clone(record));
            true
        }
    }

    /// Replace the whole selection, dropping duplicate identities.
    pub fn replace(&mut self, records: impl IntoIterator<Item = Arc<R>>) {
        self.index.clear();
        self.selected = records
            .into_iter()
            .filter(|r| self.index.insert(Arc::as_ptr(r)))
            .collect();
    }

    /// Clear all selection. Returns how many entries were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.selected.len();
        self.selected.clear();
        self.index.clear();
        removed
    }

    /// Keep only entries that are present (by identity) in `records`.
    /// Returns how many entries were removed.
    pub fn retain_present(&mut self, records: &[Arc<R>]) -> usize {
        let present: HashSet<*const R> = records.iter().map(Arc::as_ptr).collect();
        let before = self.selected.len();
        self.selected.retain(|r| present.contains(&Arc::as_ptr(r)));
        self.index.retain(|ptr| present.contains(ptr));
        before - self.selected.len()
    }

    /// Number of `records` that are selected.
    pub fn count_in<'a>(&self, records: impl IntoIterator<Item = &'a Arc<R>>) -> usize
    where
        R: 'a,
    {
        records.into_iter().filter(|r| self.contains(r)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<Arc<usize>> {
        (0..n).map(Arc::new).collect()
    }

    #[test]
    fn membership_follows_every_mutation() {
        let rows = records(4);
        let mut sel = Selection::new();

        assert!(sel.toggle(&rows[1]));
        assert!(sel.toggle(&rows[3]));
        assert!(sel.contains(&rows[1]) && sel.contains(&rows[3]));

        assert!(!sel.toggle(&rows[1]));
        assert!(!sel.contains(&rows[1]));
        assert_eq!(sel.len(), 1);

        sel.replace([rows[0].clone(), rows[2].clone(), rows[0].clone()]);
        assert_eq!(sel.len(), 2);
        assert!(!sel.contains(&rows[3]));
        assert!(sel.contains(&rows[0]));

        assert_eq!(sel.retain_present(&rows[1..]), 1);
        assert!(!sel.contains(&rows[0]));
        assert!(sel.contains(&rows[2]));

        let copy = sel.clone();
        assert_eq!(sel.clear(), 1);
        assert!(!sel.contains(&rows[2]));
        assert!(copy.contains(&rows[2]));
    }

    #[test]
    fn equal_values_are_distinct_entries() {
        let a = Arc::new(7);
        let b = Arc::new(7);
        let mut sel = Selection::new();

        sel.toggle(&a);

        assert!(sel.contains(&a));
        assert!(!sel.contains(&b));
    }

    #[test]
    fn counting_a_large_selection_is_not_quadratic() {
        let rows = records(200_000);
        let mut sel = Selection::new();

        sel.replace(rows.iter().cloned());
        assert_eq!(sel.count_in(&rows), rows.len());

        sel.toggle(&rows[123]);
        assert_eq!(sel.count_in(&rows), rows.len() - 1);
        assert_eq!(sel.retain_present(&rows[..1000]), rows.len() - 1000);
        assert_eq!(sel.count_in(&rows), 999);
    }
}
