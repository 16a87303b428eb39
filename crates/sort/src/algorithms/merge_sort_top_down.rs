use std::cmp::Ordering;

use tracing::trace;

use crate::TUNED_PARAMS;
use crate::comparator::Comparator;

use super::common;

pub fn sort<T, C>(data: &mut [T], cmp: &C)
where
    T: Clone + Send,
    C: Comparator<T> + Sync + ?Sized,
{
    sort_with_threshold(data, cmp, TUNED_PARAMS.merge_sort_parallel_min_len);
}

/// Slices of at least `parallel_min_len` elements fork through `rayon::join`.
pub fn sort_with_threshold<T, C>(data: &mut [T], cmp: &C, parallel_min_len: usize)
where
    T: Clone + Send,
    C: Comparator<T> + Sync + ?Sized,
{
    if common::is_sorted_by(data, cmp) {
        return;
    }
    merge_sort_recursive(data, cmp, parallel_min_len);
}

fn merge_sort_recursive<T, C>(data: &mut [T], cmp: &C, parallel_min_len: usize)
where
    T: Clone + Send,
    C: Comparator<T> + Sync + ?Sized,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    // Inclusive split of [0, len - 1] at floor((0 + len - 1) / 2).
    let mid = (len - 1) / 2;
    let (left, right) = data.split_at_mut(mid + 1);

    if len >= parallel_min_len {
        trace!(len, "merge sort fork");
        rayon::join(
            || merge_sort_recursive(left, cmp, parallel_min_len),
            || merge_sort_recursive(right, cmp, parallel_min_len),
        );
    } else {
        merge_sort_recursive(left, cmp, parallel_min_len);
        merge_sort_recursive(right, cmp, parallel_min_len);
    }

    merge(data, mid + 1, cmp);
}

// Asks `compare(right, left)`; ties go to the left run.
fn merge<T, C>(data: &mut [T], split: usize, cmp: &C)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let left = data[..split].to_vec();
    let right = data[split..].to_vec();

    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;

    while i < left.len() && j < right.len() {
        if cmp.compare(&right[j], &left[i]) == Ordering::Less {
            data[k] = right[j].clone();
            j += 1;
        } else {
            data[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }

    if i < left.len() {
        data[k..].clone_from_slice(&left[i..]);
    } else if j < right.len() {
        data[k..].clone_from_slice(&right[j..]);
    }
}
