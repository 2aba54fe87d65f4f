use rand::Rng;

use crate::practice_engine::models::NumberRange;

/// Three operands drawn independently from the same range.
pub type Triple = (i64, i64, i64);

/// Draw one uniform triple from `[range.min(), range.max()]`.
pub fn sample<R: Rng>(rng: &mut R, range: NumberRange) -> Triple {
    let bounds = range.min()..=range.max();
    (
        rng.gen_range(bounds.clone()),
        rng.gen_range(bounds.clone()),
        rng.gen_range(bounds),
    )
}

/// Draw triples until `accept` passes. The whole triple is redrawn on each
/// rejection.
///
/// Loops forever if `accept` can never pass on this range.
pub fn sample_where<R, F>(rng: &mut R, range: NumberRange, accept: F) -> Triple
where
    R: Rng,
    F: Fn(i64, i64, i64) -> bool,
{
    loop {
        let (n1, n2, n3) = sample(rng, range);
        if accept(n1, n2, n3) {
            return (n1, n2, n3);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::range::normalize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = normalize(20, 35).unwrap();
        for _ in 0..1_000 {
            let (a, b, c) = sample(&mut rng, range);
            assert!(range.contains(a) && range.contains(b) && range.contains(c));
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut rng = StdRng::seed_from_u64(11);
        let range = normalize(1, 10).unwrap();
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2_000 {
            let (a, _, _) = sample(&mut rng, range);
            seen_min |= a == 1;
            seen_max |= a == 10;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn predicate_filters_whole_triple() {
        let mut rng = StdRng::seed_from_u64(3);
        let range = normalize(1, 10).unwrap();
        for _ in 0..200 {
            let (a, b, c) = sample_where(&mut rng, range, |a, b, c| a > b && b > c);
            assert!(a > b && b > c);
        }
    }

    #[test]
    fn seeded_samples_repeat() {
        let range = normalize(1, 100).unwrap();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..5).map(|_| sample(&mut rng, range)).collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
        assert_ne!(draw(42), draw(43));
    }
}
