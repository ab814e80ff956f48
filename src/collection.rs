//! Collection helpers: filtering, deduplication, grouping, and lookup.
//!
//! The filter helpers ([`unique`], [`unique_by`]) are predicates over
//! `(value, index, slice)` so they compose with `enumerate` + `filter`
//! the same way on any slice. Deduplication always keeps the first
//! occurrence and preserves the relative order of the survivors.

use indexmap::IndexMap;
use std::hash::Hash;

/// Returns `true` iff `value` holds something.
///
/// Useful as a filter predicate when a projection can come up empty.
///
/// # Examples
/// ```
/// use u_kit::collection::is_value;
/// let prices = [Some(20), None, Some(30)];
/// let kept: Vec<i32> = prices
///     .iter()
///     .filter(|p| is_value(p))
///     .map(|p| p.unwrap())
///     .collect();
/// assert_eq!(kept, vec![20, 30]);
/// ```
pub fn is_value<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// Filter predicate keeping the first occurrence of each value.
///
/// Returns `true` iff no earlier element of `items` equals `value`.
///
/// # Complexity
/// A full filter pass is O(n²).
///
/// # Examples
/// ```
/// use u_kit::collection::unique;
/// let names = ["john", "john", "jane"];
/// let kept: Vec<&str> = names
///     .iter()
///     .enumerate()
///     .filter(|&(i, v)| unique(v, i, &names))
///     .map(|(_, v)| *v)
///     .collect();
/// assert_eq!(kept, vec!["john", "jane"]);
/// ```
pub fn unique<T: PartialEq>(value: &T, index: usize, items: &[T]) -> bool {
    items.iter().position(|e| e == value) == Some(index)
}

/// Like [`unique`], but equality is decided on an extracted key.
///
/// Returns a predicate with the same `(value, index, slice)` shape.
///
/// # Examples
/// ```
/// use u_kit::collection::unique_by;
/// let products = [("a", 1), ("a", 1), ("b", 1)];
/// let by_id = unique_by(|p: &(&str, i32)| p.0);
/// let kept: Vec<(&str, i32)> = products
///     .iter()
///     .enumerate()
///     .filter(|&(i, p)| by_id(p, i, &products))
///     .map(|(_, p)| *p)
///     .collect();
/// assert_eq!(kept, vec![("a", 1), ("b", 1)]);
/// ```
pub fn unique_by<T, K, F>(get_value: F) -> impl Fn(&T, usize, &[T]) -> bool
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    move |value, index, items| {
        let key = get_value(value);
        items.iter().position(|e| get_value(e) == key) == Some(index)
    }
}

/// Groups items by an extracted key, preserving encounter order.
///
/// Single pass: each item is appended to its key's group, and a key seen
/// for the first time opens a new group at the end of insertion order.
/// Within a group, items keep their original order.
///
/// # Examples
/// ```
/// use u_kit::collection::group_by_map;
/// let people = vec![(18, "John"), (18, "Joe"), (16, "Jack")];
/// let groups = group_by_map(people, |p| p.0);
/// assert_eq!(groups[&18], vec![(18, "John"), (18, "Joe")]);
/// assert_eq!(groups[&16], vec![(16, "Jack")]);
/// // 18 was seen first, so it comes first.
/// let keys: Vec<i32> = groups.keys().copied().collect();
/// assert_eq!(keys, vec![18, 16]);
/// ```
pub fn group_by_map<T, K, F>(items: impl IntoIterator<Item = T>, get_key: F) -> IndexMap<K, Vec<T>>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut map: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        let key = get_key(&item);
        map.entry(key).or_default().push(item);
    }
    map
}

/// Groups items by an extracted key into `(key, group)` pairs.
///
/// Same semantics as [`group_by_map`], returned as a sequence in the
/// map's iteration order (first occurrence of each key).
///
/// # Examples
/// ```
/// use u_kit::collection::group_by;
/// let people = vec![(18, "John"), (18, "Joe"), (16, "Jack")];
/// let groups = group_by(people, |p| p.0);
/// assert_eq!(
///     groups,
///     vec![
///         (18, vec![(18, "John"), (18, "Joe")]),
///         (16, vec![(16, "Jack")]),
///     ]
/// );
/// ```
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, get_key: F) -> Vec<(K, Vec<T>)>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    group_by_map(items, get_key).into_iter().collect()
}

/// Finds the first item matching a prioritized list of ids.
///
/// The id list is authoritative: for each id in order, the whole item
/// sequence is scanned, and the first id with any match wins even if a
/// later id would have matched an earlier item. Empty slots in `items`
/// are skipped.
///
/// # Complexity
/// O(ids × items).
///
/// # Returns
/// - `None` if no id matches any item.
///
/// # Examples
/// ```
/// use u_kit::collection::find_first;
/// let products = [Some(("a", 1)), None, Some(("b", 1)), Some(("c", 1))];
/// let found = find_first(&["x", "b"], &products, |p| p.0);
/// assert_eq!(found, Some(&("b", 1)));
/// ```
pub fn find_first<'a, T, K, F>(ids: &[K], items: &'a [Option<T>], get_id: F) -> Option<&'a T>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    for id in ids {
        let found = items.iter().flatten().find(|item| get_id(item) == *id);
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Returns the integers `start, start+1, …, end-1`.
///
/// Empty when `end <= start`.
///
/// # Examples
/// ```
/// use u_kit::collection::range;
/// assert_eq!(range(0, 3), vec![0, 1, 2]);
/// assert_eq!(range(1, 3), vec![1, 2]);
/// assert!(range(3, 3).is_empty());
/// ```
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..end).collect()
}

/// Pairs up two slices index by index.
///
/// The result has one pair per element of `a`; where `b` is shorter the
/// second component is `None`.
///
/// # Examples
/// ```
/// use u_kit::collection::zip;
/// let a = [1, 2, 3];
/// let b = ["a", "b", "c"];
/// assert_eq!(
///     zip(&a, &b),
///     vec![(1, Some("a")), (2, Some("b")), (3, Some("c"))]
/// );
/// ```
pub fn zip<T: Clone, U: Clone>(a: &[T], b: &[U]) -> Vec<(T, Option<U>)> {
    a.iter()
        .enumerate()
        .map(|(i, k)| (k.clone(), b.get(i).cloned()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
