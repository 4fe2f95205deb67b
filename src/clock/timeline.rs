use super::RingId;
use std::time::Duration;

/// Seekable per-ring animation clocks.
pub trait AnimationClock {
    fn set_position(&mut self, ring: RingId, position: Duration);
    fn position(&self, ring: RingId) -> Option<Duration>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Track {
    period: Duration,
    position: Duration,
}

impl Track {
    fn wrap(&self, position: Duration) -> Duration {
        let period = self.period.as_nanos();
        if period == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((position.as_nanos() % period) as u64)
    }
}

/// Continuous rotation for every ring, driven by monotonic frame timestamps.
///
/// Tracks are indexed by [`RingId`]. Positions advance with frame time and wrap at the
/// track's period. Frames stop arriving while the surface is hidden, so resuming or seeking
/// drops the frame baseline and the next frame only re-establishes it.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    tracks: Vec<Option<Track>>,
    last_frame_us: Option<i64>,
    paused: bool,
}

impl Timeline {
    pub fn new(periods: impl IntoIterator<Item = (RingId, Duration)>) -> Self {
        let mut tracks: Vec<Option<Track>> = Vec::new();
        for (ring, period) in periods {
            let idx = ring.index();
            if tracks.len() <= idx {
                tracks.resize(idx + 1, None);
            }
            tracks[idx] = Some(Track {
                period,
                position: Duration::ZERO,
            });
        }

        Self {
            tracks,
            last_frame_us: None,
            paused: false,
        }
    }

    pub fn period(&self, ring: RingId) -> Option<Duration> {
        self.track(ring).map(|t| t.period)
    }

    /// Current rotation of `ring` as a fraction of a full turn.
    pub fn turn(&self, ring: RingId) -> Option<f64> {
        self.track(ring).map(|t| {
            if t.period.is_zero() {
                0.0
            } else {
                t.position.as_secs_f64() / t.period.as_secs_f64()
            }
        })
    }

    /// Advances to the frame clock timestamp `frame_us` (microseconds, monotonic).
    ///
    /// The first call only establishes the baseline.
    pub fn advance_to(&mut self, frame_us: i64) {
        let elapsed = self
            .last_frame_us
            .map(|last| frame_us.saturating_sub(last).max(0) as u64)
            .map(Duration::from_micros);
        self.last_frame_us = Some(frame_us);

        if let Some(elapsed) = elapsed {
            self.advance(elapsed);
        }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }
        for track in self.tracks.iter_mut().flatten() {
            track.position = track.wrap(track.position + elapsed);
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.last_frame_us = None;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn track(&self, ring: RingId) -> Option<&Track> {
        self.tracks.get(ring.index()).and_then(Option::as_ref)
    }
}

impl AnimationClock for Timeline {
    fn set_position(&mut self, ring: RingId, position: Duration) {
        if let Some(track) = self.tracks.get_mut(ring.index()).and_then(Option::as_mut) {
            track.position = track.wrap(position);
            self.last_frame_us = None;
        }
    }

    fn position(&self, ring: RingId) -> Option<Duration> {
        self.track(ring).map(|t| t.position)
    }
}
