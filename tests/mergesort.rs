use sort_test_tools::instantiate_sort_tests;

type TestSort = sort_classics_rs::mergesort::SortImpl;

instantiate_sort_tests!(TestSort);
