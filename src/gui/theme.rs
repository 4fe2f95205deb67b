use crate::config::{HexColor, ThemeConfig};
use gtk::gdk;
use gtk4 as gtk;
use palette::{Srgb, Srgba, WithAlpha};
use strum::{Display, EnumIter};

/// Named palette entries the scene refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ColorSlot {
    PrimaryDark,
    PrimaryMed,
    PrimaryLight,
    SecondaryDark,
    SecondaryMed,
    SecondaryLight,
    Outline,
    Indicator,
    Hub,
}

pub struct ThemeColors {
    pub primary_dark: Srgb<f64>,
    pub primary_med: Srgb<f64>,
    pub primary_light: Srgb<f64>,
    pub secondary_dark: Srgb<f64>,
    pub secondary_med: Srgb<f64>,
    pub secondary_light: Srgb<f64>,
    pub outline: Srgb<f64>,
    pub indicator: Srgb<f64>,
    pub hub: Srgb<f64>,
}

impl ThemeColors {
    pub fn from_config(theme: &ThemeConfig) -> Self {
        Self {
            primary_dark: Self::convert(theme.primary_dark),
            primary_med: Self::convert(theme.primary_med),
            primary_light: Self::convert(theme.primary_light),
            secondary_dark: Self::convert(theme.secondary_dark),
            secondary_med: Self::convert(theme.secondary_med),
            secondary_light: Self::convert(theme.secondary_light),
            outline: Self::convert(theme.outline),
            indicator: Self::convert(theme.indicator),
            hub: Self::convert(theme.hub),
        }
    }

    fn convert(color: HexColor) -> Srgb<f64> {
        color.0.into_format()
    }

    pub fn color(&self, slot: ColorSlot) -> Srgb<f64> {
        match slot {
            ColorSlot::PrimaryDark => self.primary_dark,
            ColorSlot::PrimaryMed => self.primary_med,
            ColorSlot::PrimaryLight => self.primary_light,
            ColorSlot::SecondaryDark => self.secondary_dark,
            ColorSlot::SecondaryMed => self.secondary_med,
            ColorSlot::SecondaryLight => self.secondary_light,
            ColorSlot::Outline => self.outline,
            ColorSlot::Indicator => self.indicator,
            ColorSlot::Hub => self.hub,
        }
    }

    pub fn rgba(&self, slot: ColorSlot, alpha: f64) -> Srgba<f64> {
        self.color(slot).with_alpha(alpha)
    }
}

pub const DEBUG_DARK_CLASS: &str = "ringclock-debug-dark";

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.ringclock-window, .ringclock-dial {
    background: none;
    background-color: transparent;
}

.ringclock-debug {
    font-family: monospace;
    padding: 4px 8px;
    color: black;
    background-color: white;
}

.ringclock-debug.ringclock-debug-dark {
    background-color: gray;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
