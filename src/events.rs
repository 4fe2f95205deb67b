use strum::Display;

/// Why the dial is being re-synchronised with wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CalibrationTrigger {
    Startup,
    /// The surface became visible again after being hidden or minimised.
    Visible,
    Click,
}
