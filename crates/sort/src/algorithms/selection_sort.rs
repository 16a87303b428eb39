use crate::comparator::{Comparator, greater};

use super::common;

// Swaps on every inversion found, not once per position.
pub fn sort<T, C>(data: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    let len = data.len();
    for i in 0..len {
        for j in (i + 1)..len {
            if greater(cmp, &data[i], &data[j]) {
                common::swap(data, i, j);
            }
        }
    }
}
