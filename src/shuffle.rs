use rand::Rng;

/// Shuffle a slice in place with the Fisher-Yates algorithm.
///
/// Every one of the `n!` orderings is equally likely given a uniform `rng`.
/// For each `k` from `n` down to `2` an index is drawn uniformly from `[0, k)` and swapped with
/// index `k - 1`. Empty and single element slices are left untouched and draw nothing from `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for k in (2..=items.len()).rev() {
        let drawn = rng.gen_range(0..k);
        items.swap(k - 1, drawn);
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;
    use std::collections::HashMap;

    #[test]
    fn empty_and_single_are_noops() {
        let mut rng = XorShiftRng::seed_from_u64(7);

        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = [42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, [42]);
    }

    #[test]
    fn always_zero_rng_rotates_predictably() {
        // k=4 swaps 3<->0, k=3 swaps 2<->0, k=2 swaps 1<->0
        let mut rng = StepRng::new(0, 0);
        let mut items = ['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut rng);
        assert_eq!(items, ['b', 'c', 'd', 'a']);
    }

    #[test]
    fn is_a_permutation() {
        let mut rng = XorShiftRng::seed_from_u64(1234);
        for len in 0..20 {
            let original: Vec<usize> = (0..len).collect();
            let mut shuffled = original.clone();
            shuffle(&mut shuffled, &mut rng);
            let sorted: Vec<usize> = shuffled.into_iter().sorted().collect();
            assert_eq!(sorted, original);
        }
    }

    #[test]
    fn four_items_uniform_chi_square() {
        const TRIALS: usize = 48_000;
        const ORDERINGS: usize = 24;
        let mut rng = XorShiftRng::seed_from_u64(0x5eed);
        let mut counts: HashMap<[u8; 4], usize> = HashMap::new();

        for _ in 0..TRIALS {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), ORDERINGS);

        let expected = (TRIALS / ORDERINGS) as f64;
        let chi_square: f64 = counts.values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // 23 degrees of freedom, p = 0.001 critical value is ~49.7
        assert!(chi_square < 49.7, "chi square {} too large", chi_square);
    }
}
