use super::scene::Scene;
use crate::clock::{Calibration, RingId, Timeline, WallTime, plan};
use crate::config::Config;
use crate::events::CalibrationTrigger;
use std::time::Duration;

/// Everything the display needs between frames: the static scene, the ring periods
/// keyed by [`RingId`], and the running animation timeline.
pub struct Dial {
    pub scene: Scene,
    pub timeline: Timeline,
    periods: Vec<(RingId, Duration)>,
    visible: bool,
}

impl Dial {
    pub fn new(config: &Config) -> Self {
        let periods = config.ring_periods();
        Self {
            scene: Scene::build(config),
            timeline: Timeline::new(periods.iter().copied()),
            periods,
            visible: true,
        }
    }

    pub fn periods(&self) -> &[(RingId, Duration)] {
        &self.periods
    }

    /// Seeks every ring to where `now` says it should be.
    pub fn calibrate(&mut self, now: WallTime, trigger: CalibrationTrigger) -> Calibration {
        let calibration = plan(now, self.periods.iter().copied());
        calibration.apply(&mut self.timeline);

        log::info!(
            "Calibrated {} rings at {} ({})",
            calibration.positions.len(),
            now,
            trigger
        );
        for (ring, position) in &calibration.positions {
            log::debug!("{} -> {:?}", ring, position);
        }
        calibration
    }

    pub fn advance_to(&mut self, frame_us: i64) {
        self.timeline.advance_to(frame_us);
    }

    /// Records a visibility change. Hidden dials stop turning until shown again.
    ///
    /// Returns `true` when the dial just became visible and should be recalibrated.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let was_visible = std::mem::replace(&mut self.visible, visible);
        if visible {
            self.timeline.resume();
        } else {
            self.timeline.pause();
        }
        visible && !was_visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::AnimationClock;

    #[test]
    fn test_calibrate_seeks_every_ring() {
        let mut dial = Dial::new(&Config::default());
        dial.advance_to(0);
        dial.advance_to(4_321_000);

        let cal = dial.calibrate(WallTime::new(6, 30, 0, 0), CalibrationTrigger::Startup);
        assert_eq!(cal.positions.len(), dial.periods().len());

        // half past: the hour ring is exactly half a turn in
        let hour_turn = dial.timeline.turn(RingId::new(2)).unwrap();
        assert!((hour_turn - 0.5).abs() < 1e-9);
        assert_eq!(dial.timeline.position(RingId::CENTER), Some(Duration::ZERO));
    }

    #[test]
    fn test_hidden_dial_holds_still_and_requests_recalibration_when_shown() {
        let mut dial = Dial::new(&Config::default());
        dial.advance_to(0);

        assert!(!dial.set_visible(false));
        dial.advance_to(30_000_000);
        assert_eq!(dial.timeline.position(RingId::new(1)), Some(Duration::ZERO));

        assert!(!dial.set_visible(false));
        assert!(dial.set_visible(true));
        assert!(!dial.set_visible(true));

        dial.advance_to(30_500_000);
        assert_eq!(dial.timeline.position(RingId::new(1)), Some(Duration::ZERO));
        dial.advance_to(31_000_000);
        assert_eq!(
            dial.timeline.position(RingId::new(1)),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn test_shown_dial_stays_calibrated_after_an_hour_without_frames() {
        let mut dial = Dial::new(&Config::default());
        dial.advance_to(0);
        dial.set_visible(false);

        assert!(dial.set_visible(true));
        dial.calibrate(WallTime::new(6, 0, 0, 0), CalibrationTrigger::Visible);
        let calibrated: Vec<_> = (0..4)
            .map(|i| dial.timeline.position(RingId::new(i)))
            .collect();

        dial.advance_to(3_600_000_000);
        let after: Vec<_> = (0..4)
            .map(|i| dial.timeline.position(RingId::new(i)))
            .collect();
        assert_eq!(after, calibrated);
    }
}
