use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Durations of the most recent frame's phases, in milliseconds.
/// Overwritten every frame; no history is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTiming {
    pub update_ms: f64,
    pub draw_ms: f64,
}

/// Frames-per-second over one-second windows. Ticked once per update
/// phase; `fps` reports the count of the last completed window.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frames: u32,
    fps: u32,
    window_start: Instant,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: 0,
            fps: 0,
            window_start: Instant::now(),
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        self.frames += 1;
        if now.duration_since(self.window_start) >= Duration::from_secs(1) {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = now;
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_rolls_only_on_full_windows() {
        let start = Instant::now();
        let mut counter = FpsCounter {
            frames: 0,
            fps: 0,
            window_start: start,
        };
        for _ in 0..59 {
            counter.tick_at(start + Duration::from_millis(500));
        }
        assert_eq!(counter.fps(), 0);

        counter.tick_at(start + Duration::from_secs(1));
        assert_eq!(counter.fps(), 60);

        // next window starts counting from zero
        counter.tick_at(start + Duration::from_millis(1500));
        assert_eq!(counter.fps(), 60);
    }

    #[test]
    fn timing_serializes_for_export() {
        let timing = FrameTiming {
            update_ms: 1.25,
            draw_ms: 4.5,
        };
        let json = serde_json::to_string(&timing).unwrap();
        let parsed: FrameTiming = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, timing);
    }
}
