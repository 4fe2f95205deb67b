use std::fmt;
use std::time::Duration;

pub const SECOND_MS: u64 = 1_000;
pub const MINUTE_MS: u64 = 60 * SECOND_MS;
pub const HOUR_MS: u64 = 60 * MINUTE_MS;
pub const DAY_MS: u64 = 24 * HOUR_MS;

/// A sampled local wall-clock time, down to the millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl WallTime {
    pub fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    pub fn from_millis_of_day(ms: u64) -> Self {
        let ms = ms % DAY_MS;
        Self {
            hour: (ms / HOUR_MS) as u32,
            minute: (ms % HOUR_MS / MINUTE_MS) as u32,
            second: (ms % MINUTE_MS / SECOND_MS) as u32,
            millisecond: (ms % SECOND_MS) as u32,
        }
    }

    pub fn millis_of_day(&self) -> u64 {
        self.hour as u64 * HOUR_MS
            + self.minute as u64 * MINUTE_MS
            + self.second as u64 * SECOND_MS
            + self.millisecond as u64
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// How far through each natural cycle the clock is at one sampled instant.
///
/// Each coarser cycle carries the finer one as its fractional part, so the minute phase
/// already includes the milliseconds and so on up to the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockPhase {
    pub time: WallTime,
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
    pub day: f64,
}

impl ClockPhase {
    pub fn at(time: WallTime) -> Self {
        let seconds = time.millisecond as f64 / 1000.0;
        let minutes = (time.second as f64 + seconds) / 60.0;
        let hours = (time.minute as f64 + minutes) / 60.0;
        let day = (time.hour as f64 + hours) / 24.0;

        Self {
            time,
            seconds,
            minutes,
            hours,
            day,
        }
    }

    /// Phase of an arbitrary cycle of length `period`.
    ///
    /// Periods that evenly divide a minute, an hour or a day are derived from the next
    /// coarser named cycle, e.g. a 5-minute ring uses `((minute % 5) + minutes) / 5`.
    pub fn of(&self, period: Duration) -> f64 {
        let p = period.as_millis() as u64;
        match p {
            0 => 0.0,
            SECOND_MS => self.seconds,
            MINUTE_MS => self.minutes,
            HOUR_MS => self.hours,
            DAY_MS => self.day,
            p if p % SECOND_MS == 0 && MINUTE_MS % p == 0 => {
                Self::subdivide(self.time.second, self.seconds, p / SECOND_MS)
            }
            p if p % MINUTE_MS == 0 && HOUR_MS % p == 0 => {
                Self::subdivide(self.time.minute, self.minutes, p / MINUTE_MS)
            }
            p if p % HOUR_MS == 0 && DAY_MS % p == 0 => {
                Self::subdivide(self.time.hour, self.hours, p / HOUR_MS)
            }
            p => (self.time.millis_of_day() % p) as f64 / p as f64,
        }
    }

    fn subdivide(whole: u32, fraction: f64, units: u64) -> f64 {
        ((whole as u64 % units) as f64 + fraction) / units as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_worked_example() {
        let phase = ClockPhase::at(WallTime::new(3, 15, 30, 500));
        assert!((phase.seconds - 0.5).abs() < EPS);
        assert!((phase.minutes - 30.5 / 60.0).abs() < EPS);
        assert!((phase.hours - (15.0 + 30.5 / 60.0) / 60.0).abs() < EPS);
        assert!((phase.day - 0.135_77).abs() < 1e-5);
    }

    #[test]
    fn test_named_periods_match_fields() {
        let phase = ClockPhase::at(WallTime::new(17, 42, 9, 250));
        assert_eq!(phase.of(Duration::from_secs(1)), phase.seconds);
        assert_eq!(phase.of(Duration::from_secs(60)), phase.minutes);
        assert_eq!(phase.of(Duration::from_secs(3600)), phase.hours);
        assert_eq!(phase.of(Duration::from_secs(86_400)), phase.day);
    }

    #[test]
    fn test_whole_minute_adds_no_seconds_contribution() {
        let phase = ClockPhase::at(WallTime::new(8, 20, 0, 0));
        assert_eq!(phase.minutes, 0.0);
        assert!((phase.hours - 20.0 / 60.0).abs() < EPS);
    }

    #[test]
    fn test_end_of_minute_approaches_next_minute() {
        let phase = ClockPhase::at(WallTime::new(8, 20, 59, 999));
        assert!(phase.hours < 21.0 / 60.0);
        assert!((21.0 / 60.0 - phase.hours) < 1e-6);
        assert!(phase.minutes < 1.0);
    }

    #[test]
    fn test_subdivision_rings() {
        let phase = ClockPhase::at(WallTime::new(10, 7, 44, 500));

        // 5 min: 2 minutes and 44.5 seconds into the current block
        let five_min = phase.of(Duration::from_secs(300));
        assert!((five_min - (2.0 + 44.5 / 60.0) / 5.0).abs() < EPS);

        // 30 s: 14.5 seconds in
        assert!((phase.of(Duration::from_secs(30)) - 14.5 / 30.0).abs() < EPS);

        // 5 s: 4.5 seconds in
        assert!((phase.of(Duration::from_secs(5)) - 0.9).abs() < EPS);

        // 12 h: 10 hours and change
        let half_day = phase.of(Duration::from_secs(12 * 3600));
        assert!((half_day - (10.0 + phase.hours) / 12.0).abs() < EPS);
    }

    #[test]
    fn test_odd_period_falls_back_to_millis_of_day() {
        let time = WallTime::new(0, 0, 7, 0);
        let phase = ClockPhase::at(time).of(Duration::from_secs(7));
        assert!(phase.abs() < EPS);

        let phase = ClockPhase::at(WallTime::new(0, 0, 10, 500)).of(Duration::from_secs(7));
        assert!((phase - 3.5 / 7.0).abs() < EPS);
    }

    #[test]
    fn test_phases_stay_in_unit_range() {
        let periods = [1, 5, 30, 60, 300, 3600, 86_400, 7].map(Duration::from_secs);
        for ms in (0..DAY_MS).step_by(7_919) {
            let phase = ClockPhase::at(WallTime::from_millis_of_day(ms));
            for period in periods {
                let p = phase.of(period);
                assert!((0.0..1.0).contains(&p), "{period:?} at {ms}: {p}");
            }
        }
    }

    #[test]
    fn test_phase_repeats_after_one_period() {
        let periods = [1, 5, 30, 60, 300, 3600].map(Duration::from_secs);
        for start in [0, 1_234, 59_999, 3_599_999, 45_296_789] {
            for period in periods {
                let a = ClockPhase::at(WallTime::from_millis_of_day(start)).of(period);
                let later = start + period.as_millis() as u64;
                let b = ClockPhase::at(WallTime::from_millis_of_day(later)).of(period);
                assert!((a - b).abs() < 1e-9, "{period:?} from {start}");
            }
        }
    }

    #[test]
    fn test_millis_of_day_round_trip_and_display() {
        let time = WallTime::new(23, 59, 59, 999);
        assert_eq!(time.millis_of_day(), DAY_MS - 1);
        assert_eq!(WallTime::from_millis_of_day(DAY_MS), WallTime::default());
        assert_eq!(time.to_string(), "23:59:59.999");
    }
}
