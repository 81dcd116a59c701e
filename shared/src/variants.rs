use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{HOUR_MS, SCREENSHOT_SECS, SUSPENSE_MS};
use crate::segments::{SegmentTable, DISCOUNT_SEGMENTS};
use crate::selector::OutcomeSelector;

/// Everything that differs between the shipped widget variants:
/// lock duration, selection policy, spin pacing, and the decorative
/// performance knobs. A page can embed a JSON override of this whole
/// struct; otherwise one of the presets below applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub segments: SegmentTable,
    pub selector: OutcomeSelector,
    pub lock_ms: i64,
    pub spin_ms: u32,
    pub suspense_ms: u32,
    pub screenshot_secs: i64,
    /// Cadence of the tick-sound sampler, decoupled from the render loop.
    pub tick_sample_ms: u32,
    pub extra_turns_min: u32,
    pub extra_turns_max: u32,
    pub desktop_particles: usize,
    pub mobile_particles: usize,
    pub pause_when_hidden: bool,
}

impl VariantConfig {
    /// The default promo: 24-hour lock, every slot equally likely,
    /// fast 2.6s spin with plenty of extra turns.
    pub fn classic() -> Self {
        Self {
            segments: DISCOUNT_SEGMENTS.clone(),
            selector: OutcomeSelector::Uniform,
            lock_ms: 24 * HOUR_MS,
            spin_ms: 2600,
            suspense_ms: SUSPENSE_MS,
            screenshot_secs: SCREENSHOT_SECS,
            tick_sample_ms: 22,
            extra_turns_min: 8,
            extra_turns_max: 12,
            desktop_particles: 65,
            mobile_particles: 30,
            pause_when_hidden: false,
        }
    }

    /// 12-hour lock with the smaller discount favored 3:1 and a
    /// slower, more deliberate spin.
    pub fn weighted() -> Self {
        Self {
            segments: DISCOUNT_SEGMENTS.clone(),
            selector: OutcomeSelector::Weighted(vec![3, 1, 3, 1, 3, 1]),
            lock_ms: 12 * HOUR_MS,
            spin_ms: 3800,
            suspense_ms: SUSPENSE_MS,
            screenshot_secs: SCREENSHOT_SECS,
            tick_sample_ms: 30,
            extra_turns_min: 5,
            extra_turns_max: 8,
            desktop_particles: 65,
            mobile_particles: 30,
            pause_when_hidden: false,
        }
    }

    /// 48-hour lock where only the first two slots can ever win; the
    /// other four are animated decoys. Tuned for mobile: fewer
    /// particles and decorations paused while the tab is hidden.
    pub fn rigged() -> Self {
        Self {
            segments: DISCOUNT_SEGMENTS.clone(),
            selector: OutcomeSelector::RiggedPair,
            lock_ms: 48 * HOUR_MS,
            spin_ms: 3000,
            suspense_ms: SUSPENSE_MS,
            screenshot_secs: SCREENSHOT_SECS,
            tick_sample_ms: 30,
            extra_turns_min: 5,
            extra_turns_max: 8,
            desktop_particles: 40,
            mobile_particles: 16,
            pause_when_hidden: true,
        }
    }

    /// Randomized full-turn count for one spin, inclusive range.
    pub fn extra_turns<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.extra_turns_min..=self.extra_turns_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_presets_are_distinct_policies() {
        assert_eq!(VariantConfig::classic().selector, OutcomeSelector::Uniform);
        assert!(matches!(
            VariantConfig::weighted().selector,
            OutcomeSelector::Weighted(_)
        ));
        assert_eq!(VariantConfig::rigged().selector, OutcomeSelector::RiggedPair);
        assert_eq!(VariantConfig::classic().lock_ms, 24 * HOUR_MS);
        assert_eq!(VariantConfig::weighted().lock_ms, 12 * HOUR_MS);
    }

    #[test]
    fn test_extra_turns_within_range() {
        let config = VariantConfig::classic();
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..500 {
            let turns = config.extra_turns(&mut rng);
            assert!((config.extra_turns_min..=config.extra_turns_max).contains(&turns));
        }
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = VariantConfig::weighted();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: VariantConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
