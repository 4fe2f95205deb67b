use super::phase::{ClockPhase, WallTime};
use super::timeline::AnimationClock;
use super::RingId;
use std::time::Duration;

/// The positions every ring should be seeked to for one sampled instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub phase: ClockPhase,
    pub positions: Vec<(RingId, Duration)>,
}

impl Calibration {
    pub fn apply<C: AnimationClock + ?Sized>(&self, clock: &mut C) {
        for &(ring, position) in &self.positions {
            clock.set_position(ring, position);
        }
    }
}

/// Computes `phase × period` for every ring at `now`.
///
/// Pure: the result depends only on `now` and the ring periods.
pub fn plan(now: WallTime, rings: impl IntoIterator<Item = (RingId, Duration)>) -> Calibration {
    let phase = ClockPhase::at(now);
    let positions = rings
        .into_iter()
        .map(|(ring, period)| (ring, period.mul_f64(phase.of(period))))
        .collect();

    Calibration { phase, positions }
}
