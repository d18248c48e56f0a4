//! Scenario tests cutting across the three sorts, plus the merge helper's
//! own contract.

use sort_classics_rs::{bubblesort, mergesort, quicksort};
use sort_test_tools::Tagged;

const MIXED: [i32; 14] = [64, 34, 25, 12, 22, 11, 90, 88, 45, 50, 23, 36, 18, 77];
const MIXED_SORTED: [i32; 14] = [11, 12, 18, 22, 23, 25, 34, 36, 45, 50, 64, 77, 88, 90];

#[test]
fn quicksort_mixed_integers() {
    assert_eq!(quicksort::sort(&MIXED), MIXED_SORTED);
}

#[test]
fn mergesort_mixed_integers() {
    assert_eq!(mergesort::sort(&MIXED), MIXED_SORTED);
}

#[test]
fn bubblesort_mixed_integers() {
    assert_eq!(bubblesort::sort(&MIXED), MIXED_SORTED);
}

#[test]
fn quicksort_strings() {
    let fruit = ["banana", "apple", "cherry", "date", "elderberry"];
    assert_eq!(
        quicksort::sort(&fruit),
        ["apple", "banana", "cherry", "date", "elderberry"]
    );
}

/// `[3, 3, 3, 1]` sorts to `[1, 3, 3, 3]` with the three tagged `3`s keeping
/// their input order, under every algorithm.
#[test]
fn duplicate_block_retains_input_order() {
    let input = [
        Tagged { key: 3, tag: 0 },
        Tagged { key: 3, tag: 1 },
        Tagged { key: 3, tag: 2 },
        Tagged { key: 1, tag: 3 },
    ];

    for output in [
        quicksort::sort(&input),
        mergesort::sort(&input),
        bubblesort::sort(&input),
    ] {
        let keys: Vec<i32> = output.iter().map(|val| val.key).collect();
        let tags: Vec<usize> = output.iter().map(|val| val.tag).collect();
        assert_eq!(keys, [1, 3, 3, 3]);
        assert_eq!(tags, [3, 0, 1, 2]);
    }
}

#[test]
fn bubblesort_does_not_touch_input() {
    let input = vec![3, 1, 2];
    let copy = input.clone();

    let output = bubblesort::sort(&input);

    assert_eq!(output, [1, 2, 3]);
    assert_eq!(input, copy);
}

#[test]
fn merge_interleaves_sorted_inputs() {
    // 2 < 3, so both of right's 2s come out before left's 3 with no
    // tie-break involved.
    assert_eq!(mergesort::merge(&[1, 3, 5], &[2, 2, 4]), [1, 2, 2, 3, 4, 5]);
}

/// When both cursors point at equal values, the left element must win.
#[test]
fn merge_prefers_left_on_ties() {
    let left = [Tagged { key: 1, tag: 0 }, Tagged { key: 2, tag: 1 }];
    let right = [Tagged { key: 1, tag: 2 }, Tagged { key: 2, tag: 3 }];

    let merged = mergesort::merge(&left, &right);
    let tags: Vec<usize> = merged.iter().map(|val| val.tag).collect();

    assert_eq!(tags, [0, 2, 1, 3]);
}

#[test]
fn merge_with_an_empty_side() {
    assert_eq!(mergesort::merge::<i32>(&[], &[1, 2]), [1, 2]);
    assert_eq!(mergesort::merge::<i32>(&[1, 2], &[]), [1, 2]);
    assert!(mergesort::merge::<i32>(&[], &[]).is_empty());
}
