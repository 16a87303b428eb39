use crate::comparator::{Comparator, greater};

use super::common;

pub fn sort<T, C>(data: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    // Everything at or after `end` is already in final position.
    let mut end = data.len();
    while end > 1 {
        let mut last_swap = 0usize;
        for i in 1..end {
            if greater(cmp, &data[i - 1], &data[i]) {
                common::swap(data, i - 1, i);
                last_swap = i;
            }
        }
        end = last_swap;
    }
}
