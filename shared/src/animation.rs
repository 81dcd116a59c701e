use std::f64::consts::{FRAC_PI_2, PI};

const TAU: f64 = 2.0 * PI;

/// Ease-out cubic: fast start, slow finish.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Angle (on an unrotated wheel) at which the pointer sits: the top.
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

/// Rotation that puts the center of segment `seg_idx` under the
/// pointer, normalized into `[0, 2π)`.
pub fn aligned_rotation(seg_idx: usize, arc: f64) -> f64 {
    let target = POINTER_ANGLE - (seg_idx as f64 * arc + arc / 2.0);
    target.rem_euclid(TAU)
}

/// One sampled animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub rotation: f64,
    pub done: bool,
}

/// A single spin from the wheel's current angle to the chosen
/// segment, pollable by wall-clock time. The extra full turns only
/// lengthen the visual journey; the landing angle is exact for any
/// duration or turn count. Rotation carries across spins and is never
/// reset, so the final angle is always at or past the start angle.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinAnimation {
    start_rotation: f64,
    final_rotation: f64,
    start_time: f64,
    duration_ms: f64,
}

impl SpinAnimation {
    pub fn new(
        seg_idx: usize,
        arc: f64,
        current_rotation: f64,
        extra_turns: u32,
        duration_ms: f64,
        start_time: f64,
    ) -> Self {
        let target = aligned_rotation(seg_idx, arc);
        let adjustment = (target - current_rotation.rem_euclid(TAU)).rem_euclid(TAU);
        let final_rotation = current_rotation + f64::from(extra_turns) * TAU + adjustment;
        Self {
            start_rotation: current_rotation,
            final_rotation,
            start_time,
            duration_ms,
        }
    }

    pub fn final_rotation(&self) -> f64 {
        self.final_rotation
    }

    /// Eased rotation at `now`. Progress clamps to 1, and the final
    /// frame snaps to the exact target so no floating-point residue
    /// survives the spin.
    pub fn sample(&self, now: f64) -> Frame {
        let progress = ((now - self.start_time) / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return Frame {
                rotation: self.final_rotation,
                done: true,
            };
        }
        let eased = ease_out_cubic(progress);
        Frame {
            rotation: self.start_rotation + (self.final_rotation - self.start_rotation) * eased,
            done: false,
        }
    }
}

/// Detects segment-boundary crossings by watching the rotation modulo
/// one arc width: when the phase wraps (decreases), the wheel has
/// crossed into the next slot. Sampled on its own fixed interval,
/// decoupled from the render loop; it is purely a sound trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSampler {
    arc: f64,
    last_phase: f64,
}

impl TickSampler {
    pub fn new(arc: f64, initial_rotation: f64) -> Self {
        Self {
            arc,
            last_phase: initial_rotation.rem_euclid(arc),
        }
    }

    /// Returns true when a boundary was crossed since the last sample.
    pub fn sample(&mut self, rotation: f64) -> bool {
        let phase = rotation.rem_euclid(self.arc);
        let wrapped = phase < self.last_phase;
        self.last_phase = phase;
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARC: f64 = TAU / 6.0;

    #[test]
    fn test_landing_alignment_for_all_segments() {
        for seg_idx in 0..6 {
            for extra_turns in [5, 8, 12] {
                for start in [0.0, 3.7, 81.2] {
                    let anim = SpinAnimation::new(seg_idx, ARC, start, extra_turns, 2600.0, 0.0);
                    let landed = anim.sample(5000.0);
                    assert!(landed.done);
                    // Segment center sits under the pointer at -π/2.
                    let phase = (landed.rotation + FRAC_PI_2).rem_euclid(ARC);
                    assert!(
                        (phase - ARC / 2.0).abs() < 1e-9,
                        "segment {seg_idx} landed off-center (phase {phase})"
                    );
                    // And the slot under the pointer is the chosen one.
                    let pointer = (POINTER_ANGLE - landed.rotation).rem_euclid(TAU);
                    assert_eq!((pointer / ARC).floor() as usize, seg_idx);
                }
            }
        }
    }

    #[test]
    fn test_rotation_monotonic_within_spin() {
        let anim = SpinAnimation::new(3, ARC, 12.5, 8, 2600.0, 100.0);
        let mut last = f64::MIN;
        for ms in 0..=2600 {
            let frame = anim.sample(100.0 + ms as f64);
            assert!(frame.rotation >= last);
            last = frame.rotation;
        }
    }

    #[test]
    fn test_final_frame_snaps_exactly() {
        let anim = SpinAnimation::new(2, ARC, 7.0, 10, 3800.0, 0.0);
        assert_eq!(anim.sample(3800.0).rotation, anim.final_rotation());
        assert_eq!(anim.sample(9999.0).rotation, anim.final_rotation());
    }

    #[test]
    fn test_carries_forward_from_current_rotation() {
        let anim = SpinAnimation::new(1, ARC, 80.0, 5, 2600.0, 0.0);
        assert!(anim.final_rotation() >= 80.0 + 5.0 * TAU);
        assert_eq!(anim.sample(0.0).rotation, 80.0);
    }

    #[test]
    fn test_tick_sampler_counts_boundary_crossings() {
        let mut sampler = TickSampler::new(ARC, 0.0);
        let mut ticks = 0;
        // Sweep three full arcs in small steps; expect exactly 3 wraps.
        let steps = 300;
        for i in 1..=steps {
            let rotation = 3.0 * ARC * i as f64 / steps as f64;
            if sampler.sample(rotation) {
                ticks += 1;
            }
        }
        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_tick_sampler_quiet_when_still() {
        let mut sampler = TickSampler::new(ARC, 1.0);
        for _ in 0..10 {
            assert!(!sampler.sample(1.0));
        }
    }
}
