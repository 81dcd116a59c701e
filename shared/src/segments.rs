use std::f64::consts::PI;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One wedge of the wheel. `colors` is the radial gradient pair
/// (inner stop, outer stop) used by the canvas renderer. `weight`
/// only affects selection probability, never the angular slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    pub colors: [String; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl Segment {
    pub fn new(label: &str, inner: &str, outer: &str) -> Self {
        Self {
            label: label.to_string(),
            colors: [inner.to_string(), outer.to_string()],
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Ordered, fixed-size segment collection. Order determines angular
/// position; every segment gets an equal arc of `2π / len`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentTable {
    segments: Vec<Segment>,
}

impl SegmentTable {
    pub fn new(segments: Vec<Segment>) -> Self {
        debug_assert!(!segments.is_empty(), "segment table must not be empty");
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Segment> {
        self.segments.get(idx)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Angular width of every slot: `2π / segment count`.
    pub fn arc_size(&self) -> f64 {
        2.0 * PI / self.segments.len() as f64
    }

    /// Start angle of slot `idx` on an unrotated wheel.
    pub fn start_angle(&self, idx: usize) -> f64 {
        idx as f64 * self.arc_size()
    }

    /// Center angle of slot `idx` on an unrotated wheel.
    pub fn center_angle(&self, idx: usize) -> f64 {
        self.start_angle(idx) + self.arc_size() / 2.0
    }

    /// Per-segment weights with a default of 1 for unweighted entries.
    pub fn weights(&self) -> Vec<u32> {
        self.segments.iter().map(|s| s.weight.unwrap_or(1)).collect()
    }
}

/// The discount table used by all shipped variants: only 5% and 10%,
/// each repeated three times with alternating gradients so the wheel
/// looks fuller than the prize list actually is.
pub static DISCOUNT_SEGMENTS: Lazy<SegmentTable> = Lazy::new(|| {
    SegmentTable::new(vec![
        Segment::new("5%", "#e94560", "#ff6b85"),
        Segment::new("10%", "#4fadff", "#80cfff"),
        Segment::new("5%", "#f87c1f", "#ffaa55"),
        Segment::new("10%", "#a855f7", "#d08dff"),
        Segment::new("5%", "#e94560", "#ff8fa0"),
        Segment::new("10%", "#21c95e", "#5aeaa0"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_arcs() {
        let table = DISCOUNT_SEGMENTS.clone();
        assert_eq!(table.len(), 6);
        assert!((table.arc_size() - PI / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_center_angles() {
        let table = DISCOUNT_SEGMENTS.clone();
        let arc = table.arc_size();
        for idx in 0..table.len() {
            let center = table.center_angle(idx);
            assert!((center - (idx as f64 * arc + arc / 2.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_default_weights() {
        let table = SegmentTable::new(vec![
            Segment::new("a", "#000", "#111").with_weight(3),
            Segment::new("b", "#000", "#111"),
        ]);
        assert_eq!(table.weights(), vec![3, 1]);
    }
}
