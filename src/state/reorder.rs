//! Stable single-element relocation within an ordered list.

/// Move the element at `from` so that it ends up at index `to`.
///
/// Every other element keeps its relative order. The input is left untouched.
///
/// # Panics
///
/// Panics if `from` or `to` is not a valid index into `items`.
pub fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let len = items.len();
    assert!(
        from < len && to < len,
        "reorder indices out of bounds: from {from}, to {to}, len {len}"
    );

    let mut result = items.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    result
}
