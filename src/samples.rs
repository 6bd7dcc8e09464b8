use std::collections::VecDeque;

use crate::memory::HeapSnapshot;
use crate::surface::{Surface, LIGHT_BLUE};
use crate::utils::Position;

/// Bar height multiplier for a full (1.0) sample.
pub const GRAPH_HEIGHT: f32 = 25.0;

/// Fixed-capacity FIFO of scalar samples. The buffer always holds exactly
/// `capacity` slots; `None` marks a slot with no reading. Pushing drops
/// the oldest slot and appends at the end.
#[derive(Debug, Clone)]
pub struct SampleRing {
    slots: VecDeque<Option<f32>>,
}

impl SampleRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat(None).take(capacity).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn push(&mut self, sample: Option<f32>) {
        if self.slots.is_empty() {
            return;
        }
        self.slots.pop_front();
        self.slots.push_back(sample);
    }

    /// Track a new panel width: drop oldest slots when shrinking, pad the
    /// front with empty slots when growing.
    pub fn set_capacity(&mut self, capacity: usize) {
        while self.slots.len() > capacity {
            self.slots.pop_front();
        }
        while self.slots.len() < capacity {
            self.slots.push_front(None);
        }
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.slots.get(index).copied().flatten()
    }

    pub fn latest(&self) -> Option<f32> {
        self.slots.back().copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f32>> + '_ {
        self.slots.iter().copied()
    }
}

/// Scrolling heap-usage sparkline. Stores used/total ratios and renders
/// one vertical bar per slot against a fixed baseline; empty slots render
/// as zero height.
#[derive(Debug, Clone)]
pub struct MemoryGraph {
    ring: SampleRing,
}

impl MemoryGraph {
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: SampleRing::new(capacity),
        }
    }

    pub fn record(&mut self, snapshot: &HeapSnapshot) {
        self.ring.push(Some(snapshot.ratio()));
    }

    pub fn resize(&mut self, capacity: usize) {
        self.ring.set_capacity(capacity);
    }

    pub fn ring(&self) -> &SampleRing {
        &self.ring
    }

    pub fn render(&self, surface: &mut dyn Surface, origin_x: f32, baseline_y: f32, scale: f32) {
        for (i, slot) in self.ring.iter().enumerate() {
            let Some(ratio) = slot else {
                continue;
            };
            let height = ratio * GRAPH_HEIGHT * scale;
            if height <= 0.0 {
                continue;
            }
            let x = origin_x + i as f32;
            surface.stroke_segment(
                Position::new(x, baseline_y),
                Position::new(x, baseline_y - height),
                LIGHT_BLUE,
                1.0,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};
    use crate::utils::Size;

    #[test]
    fn push_keeps_length_and_appends_at_the_end() {
        let mut ring = SampleRing::new(4);
        assert_eq!(ring.len(), 4);
        ring.push(Some(0.5));
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.latest(), Some(0.5));
    }

    #[test]
    fn ring_is_strict_fifo_at_capacity() {
        let mut ring = SampleRing::new(3);
        for i in 0..3 {
            ring.push(Some(i as f32));
        }
        ring.push(Some(99.0));
        assert_eq!(ring.get(0), Some(1.0));
        assert_eq!(ring.get(1), Some(2.0));
        assert_eq!(ring.get(2), Some(99.0));
    }

    #[test]
    fn capacity_changes_drop_oldest_and_pad_front() {
        let mut ring = SampleRing::new(4);
        for i in 0..4 {
            ring.push(Some(i as f32));
        }
        ring.set_capacity(2);
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.get(0), Some(2.0));
        assert_eq!(ring.get(1), Some(3.0));

        ring.set_capacity(4);
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.get(0), None);
        assert_eq!(ring.latest(), Some(3.0));
    }

    #[test]
    fn zero_capacity_ring_swallows_pushes() {
        let mut ring = SampleRing::new(0);
        ring.push(Some(1.0));
        assert!(ring.is_empty());
        assert_eq!(ring.latest(), None);
    }

    #[test]
    fn graph_skips_empty_slots_and_scales_bars() {
        let mut graph = MemoryGraph::new(3);
        graph.record(&HeapSnapshot {
            used_bytes: 1,
            total_bytes: 2,
        });
        let mut surface = RecordingSurface::new(Size::new(800.0, 70.0));
        graph.render(&mut surface, 100.0, 30.0, 1.0);
        // two empty slots, one bar for the 0.5 ratio
        assert_eq!(surface.ops.len(), 1);
        match &surface.ops[0] {
            DrawOp::Segment { from, to, .. } => {
                assert_eq!(from.x, 102.0);
                assert_eq!(from.y, 30.0);
                assert_eq!(to.y, 30.0 - 0.5 * GRAPH_HEIGHT);
            }
            other => panic!("unexpected op: {:?}", other),
        }
    }
}
