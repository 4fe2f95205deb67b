use derive_more::{Display, From, Into};

pub mod calibrate;
pub mod layout;
pub mod phase;
pub mod ticks;
pub mod timeline;

pub use calibrate::{Calibration, plan};
pub use layout::{RingGeometry, RingLayout};
pub use phase::{ClockPhase, WallTime};
pub use ticks::{LabelSlot, Tick, label_slots, ticks};
pub use timeline::{AnimationClock, Timeline};

/// Identifies one rotating layer of the dial.
///
/// `RingId(0)` is the central seconds disc; annular rings use their 1-based ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display("ring#{_0}")]
pub struct RingId(usize);

impl RingId {
    pub const CENTER: RingId = RingId(0);

    pub fn new(ordinal: usize) -> Self {
        Self(ordinal)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}
