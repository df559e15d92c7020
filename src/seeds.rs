//! Initial seed selection

use crate::error::ConfigurationError;
use rand::Rng;
use std::collections::HashSet;

/// Choose exactly `k` distinct seed points from a pool of `pool_len` points.
///
/// Explicit seeds come first, in the given order, truncated to `k`. Missing
/// seeds are drawn uniformly from the pool, rejecting any draw that repeats an
/// explicit seed or an earlier draw, and appended in draw order.
pub fn select_seeds<R: Rng>(
    k: usize,
    explicit: &[usize],
    pool_len: usize,
    rng: &mut R,
) -> Result<Vec<usize>, ConfigurationError> {
    if pool_len == 0 {
        return Err(ConfigurationError::EmptyPool);
    }
    if k == 0 || k > pool_len {
        return Err(ConfigurationError::InvalidClusterCount {
            requested: k,
            pool: pool_len,
        });
    }

    let mut taken = HashSet::with_capacity(k);
    let mut seeds = Vec::with_capacity(k);
    for &seed in explicit.iter().take(k) {
        if seed >= pool_len {
            return Err(ConfigurationError::SeedOutOfRange {
                seed,
                pool: pool_len,
            });
        }
        if !taken.insert(seed) {
            return Err(ConfigurationError::DuplicateSeed { seed });
        }
        seeds.push(seed);
    }

    let explicit_count = seeds.len();
    while seeds.len() < k {
        let draw = rng.gen_range(0..pool_len);
        if taken.insert(draw) {
            seeds.push(draw);
        }
    }

    log::debug!(
        "selected {} seeds ({} explicit, {} random)",
        k,
        explicit_count,
        k - explicit_count
    );
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_explicit_seeds_are_kept_in_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = select_seeds(3, &[4, 0, 2], 5, &mut rng).unwrap();
        assert_eq!(seeds, vec![4, 0, 2]);
    }

    #[test]
    fn test_surplus_seeds_are_truncated() {
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = select_seeds(2, &[4, 0, 2], 5, &mut rng).unwrap();
        assert_eq!(seeds, vec![4, 0]);
    }

    #[test]
    fn test_duplicates_beyond_k_are_ignored() {
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = select_seeds(2, &[1, 3, 1], 5, &mut rng).unwrap();
        assert_eq!(seeds, vec![1, 3]);
    }

    #[test]
    fn test_random_fill_avoids_explicit_seeds() {
        let mut rng = StdRng::seed_from_u64(11);
        let seeds = select_seeds(5, &[2, 3], 5, &mut rng).unwrap();
        assert_eq!(&seeds[..2], &[2, 3]);

        let mut sorted = seeds.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_same_rng_seed_same_selection() {
        let a = select_seeds(10, &[], 100, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = select_seeds(10, &[], 100, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_configurations() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            select_seeds(0, &[], 5, &mut rng),
            Err(ConfigurationError::InvalidClusterCount {
                requested: 0,
                pool: 5
            })
        );
        assert_eq!(
            select_seeds(6, &[], 5, &mut rng),
            Err(ConfigurationError::InvalidClusterCount {
                requested: 6,
                pool: 5
            })
        );
        assert_eq!(
            select_seeds(1, &[], 0, &mut rng),
            Err(ConfigurationError::EmptyPool)
        );
        assert_eq!(
            select_seeds(2, &[9], 5, &mut rng),
            Err(ConfigurationError::SeedOutOfRange { seed: 9, pool: 5 })
        );
        assert_eq!(
            select_seeds(3, &[1, 1], 5, &mut rng),
            Err(ConfigurationError::DuplicateSeed { seed: 1 })
        );
    }

    proptest! {
        #[test]
        fn always_returns_k_distinct_seeds(
            pool_len in 1usize..60,
            k_frac in 0.0f64..1.0,
            explicit_count in 0usize..8,
            rng_seed in any::<u64>(),
        ) {
            let k = 1 + ((pool_len - 1) as f64 * k_frac) as usize;
            let explicit: Vec<usize> = (0..explicit_count.min(pool_len)).rev().collect();
            let mut rng = StdRng::seed_from_u64(rng_seed);

            let seeds = select_seeds(k, &explicit, pool_len, &mut rng).unwrap();
            prop_assert_eq!(seeds.len(), k);
            let distinct: HashSet<usize> = seeds.iter().copied().collect();
            prop_assert_eq!(distinct.len(), k);
            prop_assert!(seeds.iter().all(|&s| s < pool_len));

            let kept = explicit.len().min(k);
            prop_assert_eq!(&seeds[..kept], &explicit[..kept]);

            prop_assert!(select_seeds(pool_len + 1, &explicit, pool_len, &mut rng).is_err());
        }
    }
}
