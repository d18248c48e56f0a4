sort_impl!("mergesort");

/// Sorts `v` into a new vector by splitting at the midpoint, sorting each
/// half, and merging the results.
///
/// O(n log n) for every input, O(n) auxiliary space for the merge buffers.
/// Stable because [`merge`] prefers the left half on ties.
pub fn sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    if v.len() <= 1 {
        return v.to_vec();
    }

    let mid = v.len() / 2;
    let left = sort(&v[..mid]);
    let right = sort(&v[mid..]);

    merge(&left, &right)
}

/// Merges two individually sorted slices into one sorted vector.
///
/// Advances a cursor per input, emitting the smaller element each step. On a
/// tie the `left` element is taken first, which is what makes the overall
/// merge sort stable. Once either side is exhausted the remainder of the
/// other is appended in bulk. The inputs are trusted to be sorted; if they
/// are not, the output ordering is unspecified.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    merged
}
