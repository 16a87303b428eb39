mod algorithms;
mod comparator;

pub use algorithms::common::swap;
pub use algorithms::shell_sort_tokuda::tokuda_gaps;
pub use comparator::{Comparator, Natural, Reverse};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    SelectionSort,
    BubbleSort,
    InsertionSort,
    ShellSortTokuda,
    MergeSortTopDown,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 5] = [
    SortAlgorithm::SelectionSort,
    SortAlgorithm::BubbleSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::ShellSortTokuda,
    SortAlgorithm::MergeSortTopDown,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::ShellSortTokuda => "shell_sort_tokuda",
        SortAlgorithm::MergeSortTopDown => "merge_sort_top_down",
    }
}

pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::BubbleSort | SortAlgorithm::InsertionSort | SortAlgorithm::MergeSortTopDown
    )
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub merge_sort_parallel_min_len: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    merge_sort_parallel_min_len: 2048,
};

pub fn selection_sort<T, C>(data: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    algorithms::selection_sort::sort(data, cmp);
}

pub fn bubble_sort<T, C>(data: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    algorithms::bubble_sort::sort(data, cmp);
}

pub fn insertion_sort<T, C>(data: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    algorithms::insertion_sort::sort(data, cmp);
}

pub fn shell_sort<T, C>(data: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    algorithms::shell_sort_tokuda::sort(data, cmp);
}

pub fn merge_sort<T, C>(data: &mut [T], cmp: &C)
where
    T: Clone + Send,
    C: Comparator<T> + Sync + ?Sized,
{
    algorithms::merge_sort_top_down::sort(data, cmp);
}

pub fn merge_sort_with_threshold<T, C>(data: &mut [T], cmp: &C, parallel_min_len: usize)
where
    T: Clone + Send,
    C: Comparator<T> + Sync + ?Sized,
{
    algorithms::merge_sort_top_down::sort_with_threshold(data, cmp, parallel_min_len);
}

pub fn sort_by<T, C>(algo: SortAlgorithm, data: &mut [T], cmp: &C)
where
    T: Clone + Send,
    C: Comparator<T> + Sync + ?Sized,
{
    match algo {
        SortAlgorithm::SelectionSort => selection_sort(data, cmp),
        SortAlgorithm::BubbleSort => bubble_sort(data, cmp),
        SortAlgorithm::InsertionSort => insertion_sort(data, cmp),
        SortAlgorithm::ShellSortTokuda => shell_sort(data, cmp),
        SortAlgorithm::MergeSortTopDown => merge_sort(data, cmp),
    }
}

pub fn sort_ascending<T>(algo: SortAlgorithm, data: &mut [T])
where
    T: Ord + Clone + Send,
{
    sort_by(algo, data, &Natural);
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::algorithms::common::is_sorted_by;

    fn assert_sorts_like_std(data: &[u64]) {
        for &algo in all_algorithms() {
            let mut actual = data.to_vec();
            sort_ascending(algo, &mut actual);

            let mut expected = data.to_vec();
            expected.sort_unstable();

            assert_eq!(
                actual,
                expected,
                "algorithm={} input_len={}",
                algorithm_name(algo),
                data.len(),
            );
        }
    }

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
        }
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![u64::MIN, 1, u64::MAX, 0, u64::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 10, 31, 32, 63, 64, 127, 128, 511, 2048, 5000] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push(rng.random::<u64>());
            }
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push((rng.random::<u64>() % 16) * 17);
            }
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn merge_sort_known_input() {
        let mut data = vec![5, 3, 8, 1, 9, 2];
        merge_sort(&mut data, &|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(data, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn sorted_input_is_left_unchanged() {
        let sorted: Vec<u64> = (0..300).map(|i| i / 3).collect();
        for &algo in all_algorithms() {
            let mut data = sorted.clone();
            sort_ascending(algo, &mut data);
            assert_eq!(data, sorted, "algorithm={}", algorithm_name(algo));
        }
    }

    #[test]
    fn custom_comparator_orders_descending() {
        let mut rng = StdRng::seed_from_u64(0xDE5C_2026);
        let input: Vec<i64> = (0..200).map(|_| rng.random_range(-50..50)).collect();
        for &algo in all_algorithms() {
            let mut data = input.clone();
            sort_by(algo, &mut data, &Reverse(Natural));
            assert!(
                is_sorted_by(&data, &|a: &i64, b: &i64| b.cmp(a)),
                "algorithm={}",
                algorithm_name(algo)
            );
        }
    }

    #[test]
    fn stable_algorithms_keep_tie_order() {
        let mut rng = StdRng::seed_from_u64(0x57AB_1E00);
        let input: Vec<(u8, usize)> = (0..512).map(|i| (rng.random_range(0..8), i)).collect();
        let by_key = |a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0);

        let mut expected = input.clone();
        expected.sort_by(by_key);

        for &algo in all_algorithms() {
            let mut data = input.clone();
            sort_by(algo, &mut data, &by_key);
            assert!(is_sorted_by(&data, &by_key));
            if is_stable(algo) {
                assert_eq!(data, expected, "algorithm={}", algorithm_name(algo));
            }
        }
    }

    #[test]
    fn non_clone_elements_sort_in_place() {
        #[derive(Debug, PartialEq)]
        struct Token(u32);

        let by_id = |a: &Token, b: &Token| a.0.cmp(&b.0);
        let mut data = vec![Token(4), Token(1), Token(3), Token(2)];
        shell_sort(&mut data, &by_id);
        assert_eq!(data, [Token(1), Token(2), Token(3), Token(4)]);

        let mut data = vec![Token(2), Token(1)];
        selection_sort(&mut data, &by_id);
        bubble_sort(&mut data, &by_id);
        insertion_sort(&mut data, &by_id);
        assert_eq!(data, [Token(1), Token(2)]);
    }

    #[test]
    fn inconsistent_comparator_terminates() {
        let mut rng = StdRng::seed_from_u64(0xBAD_C0DE);
        let input: Vec<u32> = (0..300).map(|_| rng.random()).collect();
        let coin = std::cell::Cell::new(0x9E37_79B9_u32);
        let flaky = |_: &u32, _: &u32| {
            let state = coin.get().rotate_left(5) ^ 0xA5A5_A5A5;
            coin.set(state);
            match state % 3 {
                0 => Ordering::Less,
                1 => Ordering::Equal,
                _ => Ordering::Greater,
            }
        };

        let mut data = input.clone();
        selection_sort(&mut data, &flaky);
        bubble_sort(&mut data, &flaky);
        insertion_sort(&mut data, &flaky);
        shell_sort(&mut data, &flaky);

        let mut expected = input;
        expected.sort_unstable();
        data.sort_unstable();
        assert_eq!(data, expected);
    }
}
