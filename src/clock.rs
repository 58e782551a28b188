/*
 * Clock Module
 *
 * Millisecond time for thirst timers and the frame period nannou paces
 * the update loop with. The simulation steps once per rendered frame, so
 * the frame period is also the step period.
 */

use std::time::{Duration, Instant};

use crate::error::SimError;

pub struct FrameClock {
    start: Instant,
    frame_period: Duration,
}

impl FrameClock {
    pub fn new(steps_per_second: f32) -> Result<Self, SimError> {
        let frame_period = Duration::try_from_secs_f64(1.0 / steps_per_second as f64)
            .map_err(|_| SimError::InvalidStepRate(steps_per_second))?;

        if frame_period.is_zero() {
            return Err(SimError::InvalidStepRate(steps_per_second));
        }

        Ok(Self {
            start: Instant::now(),
            frame_period,
        })
    }

    // Milliseconds since the clock started
    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn frame_period(&self) -> Duration {
        self.frame_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_frames_per_second() {
        let clock = FrameClock::new(60.0).unwrap();
        let period = clock.frame_period().as_secs_f64();
        assert!((period - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_rates_without_a_period() {
        assert_eq!(FrameClock::new(1e-39).err(), Some(SimError::InvalidStepRate(1e-39)));
        assert_eq!(FrameClock::new(0.0).err(), Some(SimError::InvalidStepRate(0.0)));
        assert!(FrameClock::new(-5.0).is_err());
        assert!(FrameClock::new(f32::INFINITY).is_err());
    }

    #[test]
    fn time_is_monotonic() {
        let clock = FrameClock::new(60.0).unwrap();
        let first = clock.now_ms();
        assert!(clock.now_ms() >= first);
    }
}
