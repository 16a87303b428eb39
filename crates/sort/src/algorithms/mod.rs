pub(crate) mod bubble_sort;
pub(crate) mod common;
pub(crate) mod insertion_sort;
pub(crate) mod merge_sort_top_down;
pub(crate) mod selection_sort;
pub(crate) mod shell_sort_tokuda;
