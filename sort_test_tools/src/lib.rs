//! Shared test tooling for the sort implementations.
//!
//! Implement [`Sort`] for a unit struct and feed it to
//! [`instantiate_sort_tests!`] from an integration test to get the full
//! battery of correctness, stability, and non-mutation tests. Pattern inputs
//! come from [`patterns`] and are seeded; every assertion message carries the
//! seed so a failing run can be replayed with `OVERRIDE_SEED=<seed>`.

pub mod patterns;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(input: &[T]) -> Vec<T>
    where
        T: Ord + Clone;
}

/// Value compared by `key` alone, carrying its original input position.
/// Lets tests observe whether a sort reordered equal elements.
#[derive(Clone, Copy, Debug)]
pub struct Tagged {
    pub key: i32,
    pub tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Expands one `#[test]` per case, each delegating to the generic checker of
/// the same name in [`tests`]. The invoking crate needs `paste` as a
/// dependency.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @cases $sort_impl,
            empty,
            single_element,
            two_elements,
            ascending,
            descending,
            all_equal,
            random,
            random_dupes,
            random_zipf,
            strings,
            stability,
            idempotence,
            input_unchanged,
        );
    };
    (@cases $sort_impl:ty, $($case:ident),+ $(,)?) => {
        $(
            ::paste::paste! {
                #[test]
                fn [<test_ $case>]() {
                    $crate::tests::$case::<$sort_impl>();
                }
            }
        )+
    };
}

pub mod tests {
    use std::fmt::Debug;

    use crate::{patterns, Sort, Tagged};

    /// Lengths every pattern case sweeps over.
    pub fn test_lengths() -> Vec<usize> {
        let mut lengths = vec![0, 1, 2, 3, 4, 7, 12, 25, 60, 150, 400, 1_000];

        // Kept modest because one of the sorts under test is quadratic.
        if cfg!(feature = "large_test_sizes") {
            lengths.push(5_000);
        }

        lengths
    }

    /// Checks length, multiset, and ordering in one go by comparing against
    /// a known-good stable sort of the same input.
    fn check_sort<T: Ord + Clone + Debug, S: Sort>(input: &[T]) {
        let output = S::sort(input);
        assert_eq!(
            output.len(),
            input.len(),
            "{} changed the element count (seed: {})",
            S::name(),
            patterns::random_init_seed()
        );

        let mut expected = input.to_vec();
        expected.sort();
        assert_eq!(
            output,
            expected,
            "{} produced wrong output (seed: {})",
            S::name(),
            patterns::random_init_seed()
        );
    }

    pub fn empty<S: Sort>() {
        check_sort::<i32, S>(&[]);
    }

    pub fn single_element<S: Sort>() {
        check_sort::<i32, S>(&[77]);
    }

    pub fn two_elements<S: Sort>() {
        check_sort::<i32, S>(&[1, 2]);
        check_sort::<i32, S>(&[2, 1]);
        check_sort::<i32, S>(&[1, 1]);
    }

    pub fn ascending<S: Sort>() {
        for len in test_lengths() {
            let input = patterns::ascending(len);
            let output = S::sort(&input);
            assert_eq!(
                output,
                input,
                "{} disturbed already sorted input",
                S::name()
            );
        }
    }

    pub fn descending<S: Sort>() {
        for len in test_lengths() {
            check_sort::<i32, S>(&patterns::descending(len));
        }
    }

    pub fn all_equal<S: Sort>() {
        for len in test_lengths() {
            let input = patterns::all_equal(len);
            let output = S::sort(&input);
            assert_eq!(output, input, "{} disturbed all-equal input", S::name());
        }
    }

    pub fn random<S: Sort>() {
        for len in test_lengths() {
            check_sort::<i32, S>(&patterns::random(len));
        }
    }

    pub fn random_dupes<S: Sort>() {
        for len in test_lengths() {
            check_sort::<i32, S>(&patterns::random_uniform(len, 0..16));
        }
    }

    pub fn random_zipf<S: Sort>() {
        for len in test_lengths() {
            check_sort::<i32, S>(&patterns::random_zipf(len, 1.0));
        }
    }

    pub fn strings<S: Sort>() {
        let input: Vec<String> = ["banana", "apple", "cherry", "date", "elderberry"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        check_sort::<String, S>(&input);
    }

    /// Tags duplicate-heavy random keys with their input position and checks
    /// that equal keys come out in tag order with no tag lost or duplicated.
    pub fn stability<S: Sort>() {
        for len in test_lengths() {
            let input: Vec<Tagged> = patterns::random_uniform(len, 0..8)
                .into_iter()
                .enumerate()
                .map(|(tag, key)| Tagged { key, tag })
                .collect();

            let output = S::sort(&input);
            assert_eq!(output.len(), input.len());

            for pair in output.windows(2) {
                assert!(
                    pair[0].key <= pair[1].key,
                    "{} output not sorted (seed: {})",
                    S::name(),
                    patterns::random_init_seed()
                );
                if pair[0].key == pair[1].key {
                    assert!(
                        pair[0].tag < pair[1].tag,
                        "{} reordered equal keys (seed: {})",
                        S::name(),
                        patterns::random_init_seed()
                    );
                }
            }

            let mut tags: Vec<usize> = output.iter().map(|val| val.tag).collect();
            tags.sort_unstable();
            let expected_tags: Vec<usize> = (0..input.len()).collect();
            assert_eq!(
                tags,
                expected_tags,
                "{} lost or duplicated elements (seed: {})",
                S::name(),
                patterns::random_init_seed()
            );
        }
    }

    pub fn idempotence<S: Sort>() {
        for len in test_lengths() {
            let once = S::sort(&patterns::random(len));
            let twice = S::sort(&once);
            assert_eq!(
                twice,
                once,
                "{} is not idempotent (seed: {})",
                S::name(),
                patterns::random_init_seed()
            );
        }
    }

    pub fn input_unchanged<S: Sort>() {
        let input = patterns::random(500);
        let copy = input.clone();
        let _ = S::sort(&input);
        assert_eq!(
            input,
            copy,
            "{} mutated the caller's input (seed: {})",
            S::name(),
            patterns::random_init_seed()
        );
    }
}
