// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation utilities for exhaustive testing.

/// Calls `callback` once with every permutation of `[0, 1, ..., len - 1]`.
///
/// Iterative Heap's algorithm: consecutive permutations differ by one swap.
///
/// # Example
/// ```
/// use hoard_test_utils::index_permutations;
///
/// let mut count = 0;
/// index_permutations(4, |_perm| count += 1);
/// assert_eq!(count, 24);
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut indices: Vec<usize> = (0..len).collect();
    let mut counters = vec![0usize; len];

    callback(&indices);

    let mut k = 1;
    while k < len {
        if counters[k] < k {
            if k % 2 == 0 {
                indices.swap(0, k);
            } else {
                indices.swap(counters[k], k);
            }

            callback(&indices);

            counters[k] += 1;
            k = 1;
        } else {
            counters[k] = 0;
            k += 1;
        }
    }
}

/// Rearranges `slice` in place so that position `i` receives the element
/// previously at `perm[i]`.
///
/// # Example
/// ```
/// use hoard_test_utils::apply_permutation;
///
/// let mut arr = ['a', 'b', 'c'];
/// apply_permutation(&mut arr, &[2, 0, 1]);
/// assert_eq!(arr, ['c', 'a', 'b']);
/// ```
pub fn apply_permutation<T>(slice: &mut [T], perm: &[usize]) {
    assert_eq!(slice.len(), perm.len(), "permutation length mismatch");

    let mut visited = vec![false; slice.len()];

    for start in 0..slice.len() {
        if visited[start] {
            continue;
        }

        let mut current = start;
        loop {
            visited[current] = true;
            let source = perm[current];

            if source == start {
                break;
            }

            slice.swap(current, source);
            current = source;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_index_permutations_counts() {
        for (len, expected) in [(0, 0), (1, 1), (2, 2), (3, 6), (4, 24), (5, 120), (6, 720)] {
            let mut count = 0;
            index_permutations(len, |_| count += 1);
            assert_eq!(count, expected, "{len}! should be {expected}");
        }
    }

    #[test]
    fn test_index_permutations_are_distinct() {
        let mut seen = HashSet::new();
        index_permutations(5, |perm| {
            assert!(seen.insert(perm.to_vec()), "duplicate permutation {perm:?}");
        });
        assert_eq!(seen.len(), 120);
    }

    #[test]
    fn test_apply_permutation_identity() {
        let mut arr = [0, 1, 2, 3];
        apply_permutation(&mut arr, &[0, 1, 2, 3]);
        assert_eq!(arr, [0, 1, 2, 3]);
    }

    #[test]
    fn test_apply_permutation_reverse() {
        let mut arr = ['a', 'b', 'c', 'd'];
        apply_permutation(&mut arr, &[3, 2, 1, 0]);
        assert_eq!(arr, ['d', 'c', 'b', 'a']);
    }

    #[test]
    fn test_apply_permutation_matches_gather() {
        let original = [10, 20, 30, 40, 50];

        index_permutations(original.len(), |perm| {
            let mut arr = original;
            apply_permutation(&mut arr, perm);

            let expected: Vec<i32> = perm.iter().map(|&i| original[i]).collect();
            assert_eq!(arr.to_vec(), expected, "perm {perm:?}");
        });
    }
}
