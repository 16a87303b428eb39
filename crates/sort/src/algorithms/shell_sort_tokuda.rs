use tracing::debug;

use crate::comparator::Comparator;

use super::common;

/// Tokuda gaps below `len`, smallest first: `tokuda_gaps(10) == [1, 4, 9]`.
pub fn tokuda_gaps(len: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut pow9: u128 = 9;
    let mut pow4: u128 = 4;
    // 5 * 4^(k-1)
    let mut den: u128 = 5;

    loop {
        let num = pow9 - pow4;
        let gap = num.div_ceil(den);
        match usize::try_from(gap) {
            Ok(gap) if gap < len => gaps.push(gap),
            _ => break,
        }

        // 9^k leaves u128 long before a gap could reach usize::MAX on 64-bit
        // targets; stopping there still ends the schedule on gap 1.
        let (Some(next9), Some(next4), Some(next_den)) =
            (pow9.checked_mul(9), pow4.checked_mul(4), den.checked_mul(4))
        else {
            break;
        };
        pow9 = next9;
        pow4 = next4;
        den = next_den;
    }

    gaps
}

pub fn sort<T, C>(data: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let passes = pass_gaps(len);
    debug!(len, ?passes, "shell sort gap schedule");
    for gap in passes {
        common::gap_insertion_pass(data, gap, cmp);
    }
}

// Largest gap first, ending on 1.
fn pass_gaps(len: usize) -> Vec<usize> {
    let mut gaps = tokuda_gaps(len);
    gaps.reverse();
    gaps
}
