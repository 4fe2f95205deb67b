use crate::clock::WallTime;

/// Source of the current wall-clock time.
pub trait TimeSource {
    fn now(&self) -> WallTime;
}

/// Local time as reported by GLib.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> WallTime {
        match glib::DateTime::now_local() {
            Ok(dt) => wall_time(&dt),
            Err(e) => {
                log::error!("Failed to read local time: {}", e);
                WallTime::default()
            }
        }
    }
}

pub fn wall_time(dt: &glib::DateTime) -> WallTime {
    WallTime::new(
        dt.hour() as u32,
        dt.minute() as u32,
        dt.second() as u32,
        (dt.microsecond() / 1000) as u32,
    )
}

/// A fixed instant, for driving the dial deterministically.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub WallTime);

impl TimeSource for FixedClock {
    fn now(&self) -> WallTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_time_from_glib() {
        let dt = glib::DateTime::new(&glib::TimeZone::utc(), 2024, 5, 6, 3, 15, 30.5).unwrap();
        assert_eq!(wall_time(&dt), WallTime::new(3, 15, 30, 500));
    }

    #[test]
    fn test_sources_are_usable_as_trait_objects() {
        let fixed = WallTime::new(12, 0, 0, 0);
        let sources: Vec<Box<dyn TimeSource>> =
            vec![Box::new(FixedClock(fixed)), Box::new(LocalClock)];

        assert_eq!(sources[0].now(), fixed);
        let local = sources[1].now();
        assert!(local.hour < 24 && local.minute < 60 && local.millisecond < 1000);
    }
}
