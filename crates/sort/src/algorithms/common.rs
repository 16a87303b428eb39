use crate::comparator::{Comparator, greater};

#[inline]
pub fn swap<T>(data: &mut [T], i: usize, j: usize) {
    data.swap(i, j);
}

/// Insertion sort on each residue class modulo `gap`; stable within a class.
#[inline]
pub fn gap_insertion_pass<T, C>(data: &mut [T], gap: usize, cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    debug_assert!(gap > 0);
    let len = data.len();
    for i in gap..len {
        let mut j = i;
        while j >= gap && greater(cmp, &data[j - gap], &data[j]) {
            swap(data, j - gap, j);
            j -= gap;
        }
    }
}

#[inline]
pub fn is_sorted_by<T, C>(data: &[T], cmp: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    data.windows(2).all(|w| !greater(cmp, &w[0], &w[1]))
}
