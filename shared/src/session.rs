use rand::Rng;

use crate::animation::{SpinAnimation, TickSampler};
use crate::spin_lock::SpinRecord;
use crate::variants::VariantConfig;

/// Where the widget currently is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// No record, spin enabled.
    Idle,
    /// An animation is in flight toward `seg_idx`.
    Spinning { seg_idx: usize },
    /// A record exists and the lock window has not elapsed.
    Locked { record: SpinRecord },
}

/// One advanced render frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionFrame {
    pub rotation: f64,
    /// Set exactly once, on the frame that completes the spin.
    pub landed: Option<usize>,
}

/// The widget's single owned mutable state: current rotation (carried
/// across spins, never reset to zero), the in-flight animation, and
/// the lifecycle phase. Deliberately free of timers — the frontend
/// drives it from animation-frame and interval callbacks, tests drive
/// it with a fake clock.
pub struct WheelSession {
    config: VariantConfig,
    phase: SessionPhase,
    rotation: f64,
    animation: Option<SpinAnimation>,
    ticker: Option<TickSampler>,
}

impl WheelSession {
    pub fn new(config: VariantConfig) -> Self {
        Self {
            config,
            phase: SessionPhase::Idle,
            rotation: 0.0,
            animation: None,
            ticker: None,
        }
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn can_spin(&self) -> bool {
        self.phase == SessionPhase::Idle
    }

    /// Jump straight to Locked from a persisted record (page reload
    /// inside the lock window). No animation, no selector call.
    pub fn resume(&mut self, record: SpinRecord) {
        self.animation = None;
        self.ticker = None;
        self.phase = SessionPhase::Locked { record };
    }

    /// Picks the outcome and starts the animation. Returns the chosen
    /// segment index, or None when a spin is disallowed in the current
    /// phase.
    pub fn begin_spin<R: Rng>(&mut self, rng: &mut R, now_ms: f64) -> Option<usize> {
        if !self.can_spin() {
            return None;
        }
        let seg_idx = self
            .config
            .selector
            .pick(rng, self.config.segments.len());
        let extra_turns = self.config.extra_turns(rng);
        let arc = self.config.segments.arc_size();
        log::debug!("spin started: segment {seg_idx}, {extra_turns} extra turns");
        self.ticker = Some(TickSampler::new(arc, self.rotation));
        self.animation = Some(SpinAnimation::new(
            seg_idx,
            arc,
            self.rotation,
            extra_turns,
            f64::from(self.config.spin_ms),
            now_ms,
        ));
        self.phase = SessionPhase::Spinning { seg_idx };
        Some(seg_idx)
    }

    /// Advances the render state to `now_ms`. On the completing frame
    /// the animation is dropped and `landed` carries the segment
    /// index; the phase stays Spinning until the caller has persisted
    /// the outcome and calls [`Self::complete_spin`].
    pub fn frame(&mut self, now_ms: f64) -> SessionFrame {
        let Some(animation) = &self.animation else {
            return SessionFrame {
                rotation: self.rotation,
                landed: None,
            };
        };
        let sampled = animation.sample(now_ms);
        self.rotation = sampled.rotation;
        if !sampled.done {
            return SessionFrame {
                rotation: self.rotation,
                landed: None,
            };
        }
        self.animation = None;
        self.ticker = None;
        let landed = match self.phase {
            SessionPhase::Spinning { seg_idx } => Some(seg_idx),
            _ => None,
        };
        SessionFrame {
            rotation: self.rotation,
            landed,
        }
    }

    /// Samples the eased angle at `now_ms` against the tick detector.
    /// Runs on its own cadence, independent of [`Self::frame`].
    pub fn sample_tick(&mut self, now_ms: f64) -> bool {
        match (&self.animation, &mut self.ticker) {
            (Some(animation), Some(ticker)) => ticker.sample(animation.sample(now_ms).rotation),
            _ => false,
        }
    }

    /// Transition Spinning -> Locked once the outcome is persisted.
    pub fn complete_spin(&mut self, record: SpinRecord) {
        self.phase = SessionPhase::Locked { record };
    }

    /// Transition Locked -> Idle when the lock window has elapsed.
    /// Returns true when the transition happened.
    pub fn poll_unlock(&mut self, now: i64) -> bool {
        if let SessionPhase::Locked { record } = &self.phase {
            if now - record.spin_time >= self.config.lock_ms {
                self.reset();
                return true;
            }
        }
        false
    }

    /// Back to Idle, dropping any in-flight animation. The rotation
    /// angle is intentionally kept.
    pub fn reset(&mut self) {
        self.animation = None;
        self.ticker = None;
        self.phase = SessionPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::OutcomeSelector;
    use crate::spin_lock::{generate_session_id, LockState, MemoryStore};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Config whose selector can only ever return index 1 ("10%").
    fn forced_config() -> VariantConfig {
        let mut config = VariantConfig::classic();
        config.selector = OutcomeSelector::Weighted(vec![0, 1, 0, 0, 0, 0]);
        config
    }

    #[test]
    fn test_end_to_end_spin_lock_reset() {
        let config = forced_config();
        let lock_ms = config.lock_ms;
        let spin_ms = f64::from(config.spin_ms);
        let mut session = WheelSession::new(config);
        let mut lock = LockState::new(MemoryStore::default(), lock_ms);
        let mut rng = SmallRng::seed_from_u64(1);

        // T=0: selector picks index 1.
        let seg_idx = session.begin_spin(&mut rng, 0.0).expect("idle session spins");
        assert_eq!(seg_idx, 1);
        assert!(!session.can_spin());
        // No double spin while one is in flight.
        assert!(session.begin_spin(&mut rng, 10.0).is_none());

        // Mid-animation frames land nothing.
        assert!(session.frame(spin_ms / 2.0).landed.is_none());

        // Completion at T=2600ms reports the chosen index.
        let landed = session.frame(spin_ms);
        assert_eq!(landed.landed, Some(1));
        assert_eq!(landed.rotation, session.rotation());

        // Persist and lock.
        let label = session.config().segments.get(1).unwrap().label.clone();
        assert_eq!(label, "10%");
        let session_id = generate_session_id(&mut rng);
        let record = lock.write(&label, &session_id, 0);
        session.complete_spin(record.clone());
        assert_eq!(lock.read().unwrap().discount_label, "10%");
        assert!(lock.is_locked(100));
        assert!(matches!(session.phase(), SessionPhase::Locked { .. }));

        // Lock expiry resets both sides.
        assert!(!lock.is_locked(lock_ms + 1));
        assert!(session.poll_unlock(lock_ms + 1));
        assert!(session.can_spin());
        lock.clear();
        assert!(lock.read().is_none());
    }

    #[test]
    fn test_resume_skips_selector_and_animation() {
        let mut session = WheelSession::new(VariantConfig::classic());
        let record = SpinRecord {
            used: true,
            spin_time: 42,
            discount_label: "5%".into(),
            session_id: "ABCD2345".into(),
            screenshot_start: 42,
        };
        session.resume(record.clone());
        assert_eq!(
            session.phase(),
            &SessionPhase::Locked { record }
        );
        // Resumed sessions render at rest and never land.
        let frame = session.frame(1_000.0);
        assert_eq!(frame.rotation, 0.0);
        assert!(frame.landed.is_none());
        assert!(!session.sample_tick(1_000.0));
    }

    #[test]
    fn test_rotation_carries_across_spins() {
        let mut config = VariantConfig::classic();
        config.selector = OutcomeSelector::Uniform;
        let spin_ms = f64::from(config.spin_ms);
        let mut session = WheelSession::new(config);
        let mut rng = SmallRng::seed_from_u64(2);

        session.begin_spin(&mut rng, 0.0).unwrap();
        session.frame(spin_ms);
        let after_first = session.rotation();
        assert!(after_first > 0.0);

        session.reset();
        session.begin_spin(&mut rng, 10_000.0).unwrap();
        session.frame(10_000.0 + spin_ms);
        assert!(session.rotation() > after_first);
    }

    #[test]
    fn test_ticks_fire_during_animation() {
        let mut config = VariantConfig::classic();
        config.selector = OutcomeSelector::Uniform;
        let spin_ms = config.spin_ms;
        let mut session = WheelSession::new(config);
        let mut rng = SmallRng::seed_from_u64(3);
        session.begin_spin(&mut rng, 0.0).unwrap();

        let mut ticks = 0;
        let mut now = 0.0;
        while now <= f64::from(spin_ms) {
            if session.sample_tick(now) {
                ticks += 1;
            }
            now += 22.0;
        }
        // The sampler undercounts while the wheel outruns its cadence
        // early in the spin, but the slow tail always produces a
        // steady run of ticks.
        assert!(ticks >= 12, "only {ticks} ticks sampled");
    }
}
