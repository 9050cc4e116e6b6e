//! Sampling without replacement

use rand::Rng;
use rand::seq::SliceRandom;

/// Uniformly shuffled copy of `items` (Fisher-Yates). The input is untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut pool = items.to_vec();
    pool.shuffle(rng);
    pool
}

/// Random permutation-prefix of length `min(k, items.len())`.
///
/// Every subset of that size is equally likely and no item is returned
/// twice. Asking for more than exist returns everything, shuffled.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], k: usize, rng: &mut R) -> Vec<T> {
    let mut pool = shuffled(items, rng);
    pool.truncate(k);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_length_is_min_of_k_and_len() {
        let mut rng = StdRng::seed_from_u64(42);
        let items: Vec<u32> = (0..7).collect();
        for k in 0..12 {
            let out = sample(&items, k, &mut rng);
            assert_eq!(out.len(), k.min(items.len()), "k = {}", k);
        }
    }

    #[test]
    fn test_sample_no_repeats_and_subset() {
        let mut rng = StdRng::seed_from_u64(3);
        let items: Vec<u32> = (100..120).collect();
        for _ in 0..50 {
            let out = sample(&items, 8, &mut rng);
            let unique: HashSet<_> = out.iter().collect();
            assert_eq!(unique.len(), out.len());
            assert!(out.iter().all(|x| items.contains(x)));
        }
    }

    #[test]
    fn test_sample_empty_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let items: Vec<u32> = Vec::new();
        assert!(sample(&items, 3, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_does_not_mutate_input() {
        let mut rng = StdRng::seed_from_u64(9);
        let items: Vec<u32> = (0..10).collect();
        let before = items.clone();
        let _ = sample(&items, 5, &mut rng);
        assert_eq!(items, before);
    }

    #[test]
    fn test_sample_uniform_single_pick() {
        let mut rng = StdRng::seed_from_u64(2024);
        let items: Vec<usize> = (0..5).collect();
        let trials = 20_000;
        let mut counts = [0usize; 5];
        for _ in 0..trials {
            let pick = sample(&items, 1, &mut rng);
            counts[pick[0]] += 1;
        }
        let expected = trials as f64 / items.len() as f64;
        for (i, count) in counts.iter().enumerate() {
            let deviation = (*count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "Item {} picked {} times, expected ~{}", i, count, expected);
        }
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        let items: Vec<u32> = (0..30).collect();
        let mut out = shuffled(&items, &mut rng);
        out.sort();
        assert_eq!(out, items);
    }
}
