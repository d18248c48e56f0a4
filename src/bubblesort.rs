sort_impl!("bubblesort");

/// Sorts by repeatedly sweeping adjacent pairs and swapping whenever the left
/// element is greater.
///
/// Works on a copy, so the caller's slice is never touched. Each pass bubbles
/// the largest remaining element to the end of the unsorted prefix. A pass
/// that performs no swap proves the data is sorted and skips the remaining
/// passes, making already-sorted input O(n); otherwise O(n^2). O(1) auxiliary
/// space beyond the working copy. Swapping only on strict inequality keeps
/// equal elements in their input order.
pub fn sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut sorted = v.to_vec();
    let n = sorted.len();

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if sorted[j] > sorted[j + 1] {
                sorted.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    sorted
}
