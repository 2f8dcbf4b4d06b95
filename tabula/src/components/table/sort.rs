//! Sort state and the derived display order.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::record::Record;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

/// The active sort: one field and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Sort that results from activating the header for `field`.
    ///
    /// Only an ascending sort on the same field flips to descending; every
    /// other starting point (no sort, another field, descending) starts
    /// ascending.
    pub fn toggled(current: Option<&SortKey>, field: &str) -> SortKey {
        match current {
            Some(key) if key.field == field && key.direction.is_ascending() => {
                SortKey::descending(field)
            }
            _ => SortKey::ascending(field),
        }
    }
}

/// Indices into `records` in display order.
///
/// With no sort this is the input order. Ties keep input order in both
/// directions.
pub(crate) fn display_order<R: Record>(records: &[Arc<R>], sort: Option<&SortKey>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    let Some(key) = sort else {
        return order;
    };

    let values: Vec<Value> = records.iter().map(|r| r.field(&key.field)).collect();
    let direction = key.direction;
    merge_sort_by(&mut order, |a, b| {
        let ord = values[a].compare(&values[b]);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    order
}

/// Stable bottom-up merge sort.
///
/// `Value::compare` is not a total order once NaN or undefined values are
/// mixed in, and `slice::sort_by` may panic on such comparators; this never
/// does.
fn merge_sort_by(items: &mut Vec<usize>, mut cmp: impl FnMut(usize, usize) -> Ordering) {
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut scratch = items.clone();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j) = (start, mid);
            for slot in &mut scratch[start..end] {
                // Right run wins only when strictly less, which keeps ties stable.
                let take_right = j < end && (i >= mid || cmp(items[j], items[i]) == Ordering::Less);
                if take_right {
                    *slot = items[j];
                    j += 1;
                } else {
                    *slot = items[i];
                    i += 1;
                }
            }
            start += 2 * width;
        }
        std::mem::swap(items, &mut scratch);
        width *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sort_matches_std_stable_sort() {
        let keys = [5, 3, 5, 1, 3, 9, 0, 5, 2, 2, 8];
        let mut ours: Vec<usize> = (0..keys.len()).collect();
        merge_sort_by(&mut ours, |a, b| keys[a].cmp(&keys[b]));

        let mut expected: Vec<usize> = (0..keys.len()).collect();
        expected.sort_by_key(|&i| keys[i]);

        assert_eq!(ours, expected);
    }

    #[test]
    fn merge_sort_survives_inconsistent_comparator() {
        let mut items: Vec<usize> = (0..50).collect();
        let mut flip = false;
        merge_sort_by(&mut items, |_, _| {
            flip = !flip;
            if flip { Ordering::Less } else { Ordering::Greater }
        });
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn toggled_cycles_between_directions() {
        let first = SortKey::toggled(None, "name");
        assert_eq!(first, SortKey::ascending("name"));
        let second = SortKey::toggled(Some(&first), "name");
        assert_eq!(second, SortKey::descending("name"));
        let third = SortKey::toggled(Some(&second), "name");
        assert_eq!(third, SortKey::ascending("name"));
        let other = SortKey::toggled(Some(&second), "id");
        assert_eq!(other, SortKey::ascending("id"));
    }
}
