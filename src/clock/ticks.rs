/// A radial mark at `fraction` of a full turn, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub index: usize,
    pub fraction: f64,
    pub major: bool,
}

impl Tick {
    pub fn degrees(&self) -> f64 {
        self.fraction * 360.0
    }
}

/// Evenly spaced ticks; every `major_every`-th one (starting at index 0) is major.
pub fn ticks(divisions: usize, major_every: usize) -> impl Iterator<Item = Tick> {
    (0..divisions).map(move |index| Tick {
        index,
        fraction: index as f64 / divisions as f64,
        major: index % major_every == 0,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelSlot<'a> {
    pub text: &'a str,
    pub fraction: f64,
    /// The slot at 12 o'clock is drawn heavier and larger.
    pub emphasized: bool,
}

impl LabelSlot<'_> {
    pub fn degrees(&self) -> f64 {
        self.fraction * 360.0
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Spreads `labels` evenly around a ring. Blank strings still occupy their slot.
pub fn label_slots(labels: &[String]) -> impl Iterator<Item = LabelSlot<'_>> {
    let count = labels.len();
    labels.iter().enumerate().map(move |(i, text)| LabelSlot {
        text,
        fraction: i as f64 / count as f64,
        emphasized: i == 0,
    })
}
