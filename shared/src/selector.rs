use rand::Rng;
use serde::{Deserialize, Serialize};

/// Strategy for picking the winning segment index. Chosen once per
/// spin, before the target angle is computed, so the animator never
/// needs to know which policy is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutcomeSelector {
    /// Every segment equally likely.
    Uniform,
    /// Cumulative-weight walk over the given per-segment weights.
    /// A weight of 0 makes that segment unreachable.
    Weighted(Vec<u32>),
    /// Always index 0 or 1 with 50/50 odds; any further segments are
    /// animated decoys the wheel merely passes through.
    RiggedPair,
}

impl OutcomeSelector {
    /// Returns a segment index in `[0, segment_count)`.
    pub fn pick<R: Rng>(&self, rng: &mut R, segment_count: usize) -> usize {
        match self {
            OutcomeSelector::Uniform => rng.gen_range(0..segment_count),
            OutcomeSelector::Weighted(weights) => {
                let total: u64 = weights.iter().map(|&w| w as u64).sum();
                if total == 0 {
                    log::warn!("weighted selector has zero total weight, falling back to uniform");
                    return rng.gen_range(0..segment_count);
                }
                let draw = rng.gen_range(0..total);
                let mut cumulative = 0u64;
                for (idx, &w) in weights.iter().enumerate() {
                    cumulative += w as u64;
                    if draw < cumulative {
                        return idx.min(segment_count - 1);
                    }
                }
                segment_count - 1
            }
            OutcomeSelector::RiggedPair => usize::from(rng.gen_bool(0.5)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_in_range_and_all_reachable() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 6];
        for _ in 0..5_000 {
            let idx = OutcomeSelector::Uniform.pick(&mut rng, 6);
            assert!(idx < 6);
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_weighted_frequencies_converge() {
        let weights = vec![3, 1, 3, 1, 3, 1];
        let selector = OutcomeSelector::Weighted(weights.clone());
        let mut rng = SmallRng::seed_from_u64(42);
        let mut counts = [0u32; 6];
        let draws = 120_000;
        for _ in 0..draws {
            counts[selector.pick(&mut rng, 6)] += 1;
        }
        let total: u32 = weights.iter().sum();
        for (idx, &w) in weights.iter().enumerate() {
            let expected = draws as f64 * w as f64 / total as f64;
            let observed = counts[idx] as f64;
            // 5% relative tolerance is generous at this sample size.
            assert!(
                (observed - expected).abs() / expected < 0.05,
                "index {idx}: observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_weight_zero_unreachable() {
        let selector = OutcomeSelector::Weighted(vec![1, 0, 1]);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..2_000 {
            assert_ne!(selector.pick(&mut rng, 3), 1);
        }
    }

    #[test]
    fn test_rigged_pair_only_first_two() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = [false; 2];
        for _ in 0..1_000 {
            let idx = OutcomeSelector::RiggedPair.pick(&mut rng, 6);
            assert!(idx < 2, "rigged selector returned decoy index {idx}");
            seen[idx] = true;
        }
        // Both advertised outcomes show up over a sample this size.
        assert!(seen[0] && seen[1]);
    }
}
