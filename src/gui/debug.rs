use crate::clock::ClockPhase;
use crate::gui::theme::DEBUG_DARK_CLASS;
use crate::sys::time;
use gtk::prelude::*;
use gtk4 as gtk;

/// Text and shading of the per-frame time readout.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub text: String,
    /// Dark during the first half of each second, so sub-second drift is visible at a glance.
    pub dark: bool,
}

impl Readout {
    pub fn new(iso: &str, phase: &ClockPhase) -> Self {
        Self {
            text: format!("{} - fracSec: {}", iso, phase.seconds),
            dark: phase.seconds < 0.5,
        }
    }

    pub fn sample() -> Option<Self> {
        let now = glib::DateTime::now_local().ok()?;
        let iso = iso_utc(&now)?;
        Some(Self::new(&iso, &ClockPhase::at(time::wall_time(&now))))
    }

    pub fn show(&self, label: &gtk::Label) {
        label.set_label(&self.text);
        if self.dark {
            label.add_css_class(DEBUG_DARK_CLASS);
        } else {
            label.remove_css_class(DEBUG_DARK_CLASS);
        }
    }
}

/// UTC timestamp with millisecond precision, e.g. `2024-05-06T03:15:30.250Z`.
fn iso_utc(dt: &glib::DateTime) -> Option<String> {
    let utc = dt.to_utc().ok()?;
    let stamp = utc.format("%Y-%m-%dT%H:%M:%S").ok()?;
    Some(format!("{}.{:03}Z", stamp, utc.microsecond() / 1000))
}
