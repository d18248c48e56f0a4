use std::cmp::Ordering;

sort_impl!("quicksort");

/// Sorts `v` into a new vector by recursive three-way partitioning.
///
/// The pivot is the element at the middle index of the current slice. A
/// single pass clones every element into one of three buckets by comparison
/// against the pivot value. Elements equal to the pivot form one untouched
/// block, so the recursion only ever descends into strictly smaller inputs,
/// even when the slice is dominated by duplicates. Cloning into the buckets
/// in input order also keeps the sort stable.
///
/// Average case O(n log n), worst case O(n^2) when the middle element keeps
/// landing near an extreme. Builds three fresh vectors per call, so auxiliary
/// space is O(n) per recursion level rather than the O(log n) of an in-place
/// variant.
pub fn sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    if v.len() <= 1 {
        return v.to_vec();
    }

    let pivot = &v[v.len() / 2];

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for elem in v {
        match elem.cmp(pivot) {
            Ordering::Less => less.push(elem.clone()),
            Ordering::Equal => equal.push(elem.clone()),
            Ordering::Greater => greater.push(elem.clone()),
        }
    }

    let mut sorted = sort(&less);
    sorted.reserve(equal.len() + greater.len());
    sorted.extend(equal);
    sorted.extend(sort(&greater));

    sorted
}
