//! Numeric slice helpers: sorting, run grouping and gap detection.
//!
//! Runs are reported as `Vec<i64>` holding either a single value (`[start]`)
//! or two values (`[start, end]`). Every integer width is widened to `i64`
//! through [`RangeValue`], so callers never need a runtime type switch.

use std::collections::HashSet;
use std::hash::Hash;

/// Integer types that can take part in range grouping.
pub trait RangeValue: Copy + Ord {
    fn widen(self) -> i64;
}

macro_rules! impl_range_value {
    ($($t:ty),*) => {
        $(
            impl RangeValue for $t {
                #[inline]
                fn widen(self) -> i64 {
                    self as i64
                }
            }
        )*
    };
}

impl_range_value!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Sort `values` ascending, optionally dropping duplicates.
///
/// Returns the `(min, max)` pair after sorting, or `None` for an empty input.
pub fn sort_numbers<T: RangeValue>(values: &mut Vec<T>, keep_duplicates: bool) -> Option<(i64, i64)> {
    if !values.windows(2).all(|w| w[0] <= w[1]) {
        values.sort_unstable();
    }
    if !keep_duplicates {
        values.dedup();
    }

    let min = values.first()?.widen();
    let max = values.last()?.widen();
    Some((min, max))
}

/// Group an ascending slice into runs of consecutive values.
///
/// A value that is not greater than the last accepted value is skipped.
pub fn ranges<T: RangeValue>(values: &[T]) -> Vec<Vec<i64>> {
    let mut runs: Vec<Vec<i64>> = Vec::new();
    let mut previous: Option<i64> = None;

    for value in values.iter().map(|v| v.widen()) {
        match previous {
            None => runs.push(vec![value]),
            Some(last) => {
                let step = value - last;
                if step < 1 {
                    continue;
                }
                if step == 1 {
                    if let Some(run) = runs.last_mut() {
                        if run.len() < 2 {
                            run.push(value);
                        } else {
                            run[1] = value;
                        }
                    }
                } else {
                    runs.push(vec![value]);
                }
            }
        }
        previous = Some(value);
    }

    runs
}

/// Sort, deduplicate and group `values` into consecutive runs.
pub fn in_range<T: RangeValue>(values: &[T]) -> Vec<Vec<i64>> {
    let mut sorted = values.to_vec();
    sort_numbers(&mut sorted, false);
    ranges(&sorted)
}

/// The gaps between the runs of `values`.
///
/// Each gap is `[from, to]`, or `[from]` when it spans a single value.
/// Fewer than two runs means there is no gap.
pub fn out_range<T: RangeValue>(values: &[T]) -> Vec<Vec<i64>> {
    gaps_between(&in_range(values))
}

/// The gaps between already computed runs.
pub fn gaps_between(runs: &[Vec<i64>]) -> Vec<Vec<i64>> {
    runs.windows(2)
        .filter_map(|pair| {
            let from = pair[0].last()? + 1;
            let to = pair[1].first()? - 1;
            if from == to {
                Some(vec![from])
            } else {
                Some(vec![from, to])
            }
        })
        .collect()
}

/// Whether `needle` is present in `haystack`.
pub fn array_contains<T: PartialEq>(haystack: &[T], needle: &T) -> bool {
    haystack.iter().any(|item| item == needle)
}

/// Distinct values of `values`, in order of first occurrence.
pub fn array_unique<T: Eq + Hash + Clone>(values: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .filter(|value| seen.insert((*value).clone()))
        .cloned()
        .collect()
}

/// Whether any entry of `entries` contains `word` as a substring.
///
/// An empty `word` never matches.
pub fn string_contains_array<S: AsRef<str>>(entries: &[S], word: &str) -> bool {
    !word.is_empty() && entries.iter().any(|entry| entry.as_ref().contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_numbers_without_duplicates() {
        let mut values = vec![5u16, 1, 3, 3, 2];
        let bounds = sort_numbers(&mut values, false);

        assert_eq!(values, vec![1, 2, 3, 5]);
        assert_eq!(bounds, Some((1, 5)));
    }

    #[test]
    fn test_sort_numbers_keeps_duplicates() {
        let mut values = vec![4i32, -1, 4];
        let bounds = sort_numbers(&mut values, true);

        assert_eq!(values, vec![-1, 4, 4]);
        assert_eq!(bounds, Some((-1, 4)));
    }

    #[test]
    fn test_sort_numbers_empty() {
        let mut values: Vec<u8> = vec![];
        assert_eq!(sort_numbers(&mut values, false), None);
    }

    #[test]
    fn test_ranges_groups_consecutive_values() {
        let runs = ranges(&[1u32, 2, 3, 5, 7, 8]);
        assert_eq!(runs, vec![vec![1, 3], vec![5], vec![7, 8]]);
    }

    #[test]
    fn test_ranges_skips_non_increasing_values() {
        let runs = ranges(&[1i64, 2, 2, 1, 3]);
        assert_eq!(runs, vec![vec![1, 3]]);
    }

    #[test]
    fn test_in_range_sorts_first() {
        let runs = in_range(&[10usize, 3, 2, 11, 1, 3]);
        assert_eq!(runs, vec![vec![1, 3], vec![10, 11]]);
    }

    #[test]
    fn test_out_range_reports_gaps() {
        let gaps = out_range(&[1i16, 2, 3, 5, 9, 10]);
        assert_eq!(gaps, vec![vec![4], vec![6, 8]]);
    }

    #[test]
    fn test_out_range_single_run_has_no_gap() {
        assert!(out_range(&[4u8, 5, 6]).is_empty());
        assert!(out_range::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_array_contains() {
        assert!(array_contains(&[1, 2, 3], &2));
        assert!(!array_contains(&["a", "b"], &"c"));
    }

    #[test]
    fn test_array_unique_keeps_first_occurrence_order() {
        assert_eq!(array_unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(
            array_unique(&["json_obj", "bool", "json_obj"]),
            vec!["json_obj", "bool"]
        );
    }

    #[test]
    fn test_string_contains_array() {
        let entries = ["verify_registration", "forgot_password"];
        assert!(string_contains_array(&entries, "forgot"));
        assert!(!string_contains_array(&entries, "update"));
        assert!(!string_contains_array(&entries, ""));
    }
}
