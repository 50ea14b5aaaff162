use std::collections::VecDeque;

use crate::dynamics::state::SimConfig;
use crate::error::{require_positive, SimError};

// ---------------------------------------------------------------------------
// Windowed orbit-stability detector
// ---------------------------------------------------------------------------

/// Samples the radius every `interval` steps once the settling period is
/// over and decides when the orbit has stopped drifting.
///
/// Each check scans the window against `mean ± rad_tol * commanded_radius`
/// (strict bounds). Every in-band sample bumps the success counter; the first
/// out-of-band sample zeroes it and ends the scan. The orbit is stable when
/// the counter reaches `stable_check_thresh`.
#[derive(Debug, Clone)]
pub struct StabilityDetector {
    interval: u64,
    thresh: usize,
    start: f64,
    delta: f64,
    window: VecDeque<f64>,
    successes: usize,
}

impl StabilityDetector {
    /// `max_speed` is the throttle-adjusted top speed.
    pub fn new(
        config: &SimConfig,
        commanded_radius: f64,
        max_speed: f64,
    ) -> Result<Self, SimError> {
        config.validate()?;
        require_positive("commanded_radius", commanded_radius)?;
        require_positive("max_speed", max_speed)?;
        Ok(Self {
            interval: config.interval,
            thresh: config.stable_check_thresh,
            start: 2.0 * commanded_radius / (max_speed * config.dt),
            delta: config.rad_tol * commanded_radius,
            window: VecDeque::with_capacity(config.stable_check_thresh + 1),
            successes: 0,
        })
    }

    /// Steps to wait before the first sample is taken.
    pub fn check_start(&self) -> f64 {
        self.start
    }

    pub fn successes(&self) -> usize {
        self.successes
    }

    pub fn window(&self) -> impl Iterator<Item = &f64> {
        self.window.iter()
    }

    pub fn is_converged(&self) -> bool {
        self.successes >= self.thresh
    }

    /// Is `iteration` a sampling tick?
    pub fn is_sample_tick(&self, iteration: u64) -> bool {
        iteration as f64 > self.start && iteration != 0 && iteration % self.interval == 0
    }

    /// Feed the radius of state `iteration`. Returns true once stable.
    pub fn observe(&mut self, iteration: u64, radius: f64) -> bool {
        if self.is_sample_tick(iteration) {
            self.push(radius);
        }
        self.is_converged()
    }

    /// Insert a sample and, once the window is full, run a check.
    pub fn push(&mut self, radius: f64) {
        self.window.push_back(radius);
        if self.window.len() < self.thresh {
            return;
        }
        while self.window.len() > self.thresh {
            self.window.pop_front();
        }
        self.check_window();
    }

    fn check_window(&mut self) {
        let avg = self.window.iter().sum::<f64>() / self.window.len() as f64;
        let (lo, hi) = (avg - self.delta, avg + self.delta);

        for &r in &self.window {
            if lo < r && r < hi {
                self.successes += 1;
            } else {
                self.successes = 0;
                break;
            }
        }

        log::trace!(
            "stability check: avg={:.3} delta={:.3} successes={}/{}",
            avg,
            self.delta,
            self.successes,
            self.thresh
        );
    }
}
