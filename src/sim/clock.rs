//! Fixed-step accumulator for hosts driven by real time

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame we will try to catch up on
const MAX_FRAME_DT: f32 = 0.1;

/// Turns variable frame times into a whole number of simulation ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed seconds; returns how many ticks to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_frame_at_sixty_hz() {
        let mut clock = FixedStep::new();
        let mut total = 0;
        for _ in 0..60 {
            total += clock.advance(SIM_DT + 1e-6);
        }
        assert_eq!(total, 60);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(SIM_DT * 0.6), 0);
        assert_eq!(clock.advance(SIM_DT * 0.6), 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FixedStep::new();
        // 0.1s worth of ticks, give or take float rounding
        let steps = clock.advance(5.0);
        assert!((5..=6).contains(&steps));
        assert!(steps <= MAX_SUBSTEPS);
        // Only the clamped 0.1s is owed, not the full five seconds
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(-1.0), 0);
    }
}
