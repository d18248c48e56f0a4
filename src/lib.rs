//! Classic comparison sorts over slices of naturally ordered elements.
//!
//! Each module exposes a single `sort` entry point that borrows a slice and
//! returns a freshly allocated sorted vector; the caller's input is never
//! mutated. Elements sort by their `Ord` instance, there is no comparator
//! injection. All three sorts are stable.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(input: &[T]) -> Vec<T>
            where
                T: Ord + Clone,
            {
                sort(input)
            }
        }
    };
}

pub mod bubblesort;
pub mod mergesort;
pub mod quicksort;
