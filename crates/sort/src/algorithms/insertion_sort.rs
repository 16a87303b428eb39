use crate::comparator::Comparator;

use super::common;

pub fn sort<T, C>(data: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    if data.len() < 2 {
        return;
    }
    common::gap_insertion_pass(data, 1, cmp);
}
