use crate::clock::{RingGeometry, RingId, RingLayout};
use directories::ProjectDirs;
use palette::Srgb;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// Where the dial is placed on screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Surface {
    /// Ordinary decorated toplevel window.
    #[default]
    Window,
    /// Layer-shell surface below regular windows.
    #[strum(serialize = "bottom", serialize = "desktop")]
    Bottom,
    /// Layer-shell surface on the wallpaper layer.
    #[strum(serialize = "background", serialize = "wallpaper")]
    Background,
}

/// An sRGB colour written as `#rrggbb` or `#rgb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeserializeFromStr, SerializeDisplay)]
pub struct HexColor(pub Srgb<u8>);

impl FromStr for HexColor {
    type Err = palette::rgb::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim()).map(HexColor)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            self.0.red, self.0.green, self.0.blue
        )
    }
}

impl HexColor {
    fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::new(r, g, b))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FaceConfig {
    /// Half the side of the square view box everything is drawn into.
    pub view_radius: f64,
    pub clock_radius: f64,
    pub clock_border: f64,
    pub ring_border: f64,
    pub seconds_ring_radius: f64,
    pub ring_gap: f64,
    /// Revolution period of the central seconds disc.
    pub center_period_secs: u64,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            view_radius: 315.0,
            clock_radius: 300.0,
            clock_border: 2.0,
            ring_border: 1.0,
            seconds_ring_radius: 50.0,
            ring_gap: 5.0,
            center_period_secs: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TickConfig {
    pub major_length_ratio: f64,
    pub major_thickness: f64,
    pub minor_length_ratio: f64,
    pub minor_thickness: f64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            major_length_ratio: 0.666,
            major_thickness: 1.7,
            minor_length_ratio: 0.25,
            minor_thickness: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary_dark: HexColor,
    pub primary_med: HexColor,
    pub primary_light: HexColor,
    pub secondary_dark: HexColor,
    pub secondary_med: HexColor,
    pub secondary_light: HexColor,
    pub outline: HexColor,
    pub indicator: HexColor,
    pub hub: HexColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_dark: HexColor::rgb(0xcb, 0x99, 0x7e),
            primary_med: HexColor::rgb(0xdd, 0xbe, 0xa9),
            primary_light: HexColor::rgb(0xff, 0xe8, 0xd6),
            secondary_dark: HexColor::rgb(0x6b, 0x70, 0x5c),
            secondary_med: HexColor::rgb(0xa5, 0xa5, 0x8d),
            secondary_light: HexColor::rgb(0xb7, 0xb7, 0xa4),
            outline: HexColor::rgb(0x00, 0x00, 0x00),
            indicator: HexColor::rgb(0xff, 0x44, 0x44),
            hub: HexColor::rgb(0x33, 0x33, 0x33),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub surface: Surface,
    /// Connector name (e.g. `DP-1`) to pin a layer-shell surface to.
    pub monitor: Option<String>,
    pub debug_readout: bool,
    pub width: i32,
    pub height: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            surface: Surface::Window,
            monitor: None,
            debug_readout: false,
            width: 630,
            height: 630,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RingConfig {
    pub period_secs: u64,
    pub divisions: usize,
    pub major_every: usize,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Distance along the ring's center line, clockwise from 12 o'clock, where the title starts.
    #[serde(default)]
    pub title_offset: f64,
    #[serde(default)]
    pub bold_labels: bool,
}

impl RingConfig {
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.period_secs)
    }

    fn new(
        period_secs: u64,
        divisions: usize,
        major_every: usize,
        labels: &[&str],
        title: &str,
        title_offset: f64,
    ) -> Self {
        Self {
            period_secs,
            divisions,
            major_every,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            title: (!title.is_empty()).then(|| title.to_string()),
            title_offset,
            bold_labels: false,
        }
    }
}

fn default_rings() -> Vec<RingConfig> {
    let hours: Vec<String> = (0..24).map(|h| format!("{h:02}")).collect();
    let hours: Vec<&str> = hours.iter().map(String::as_str).collect();
    let half_minute: Vec<String> = (3..30).map(|s| s.to_string()).collect();
    let half_minute: Vec<&str> = ["30", "", ""]
        .into_iter()
        .chain(half_minute.iter().map(String::as_str))
        .collect();

    vec![
        RingConfig::new(
            60,
            60,
            5,
            &[
                "0", "", "10", "15", "20", "25", "30", "35", "40", "45", "50", "55",
            ],
            "Seconds",
            12.0,
        ),
        RingConfig::new(
            3600,
            60,
            5,
            &[
                "0", "5", "10", "15", "20", "25", "30", "35", "40", "45", "50", "55",
            ],
            "Minutes",
            7.0,
        ),
        RingConfig {
            bold_labels: true,
            ..RingConfig::new(86_400, 48, 2, &hours, "HH", 11.5)
        },
        RingConfig::new(
            300,
            300,
            10,
            &[
                "5:00", "0:30", "1:00", "1:30", "2:00", "2:30", "3:00", "3:30", "4:00", "4:30",
            ],
            "Five Minutes",
            28.0,
        ),
        RingConfig::new(30, 300, 10, &half_minute, "Seconds div 30", 30.0),
        RingConfig::new(5, 50, 10, &["5", "1", "2", "3", "4"], "Seconds div 5", 16.0),
    ]
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub face: FaceConfig,
    pub ticks: TickConfig,
    pub theme: ThemeConfig,
    pub display: DisplayConfig,
    pub rings: Vec<RingConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            face: FaceConfig::default(),
            ticks: TickConfig::default(),
            theme: ThemeConfig::default(),
            display: DisplayConfig::default(),
            rings: default_rings(),
        }
    }
}

impl Config {
    /// Layout of the annular rings. The central seconds disc counts as the first ring.
    pub fn layout(&self) -> RingLayout {
        RingLayout::new(
            self.face.seconds_ring_radius + self.face.ring_gap,
            self.face.clock_radius,
            self.face.ring_gap,
            self.rings.len() + 1,
        )
    }

    pub fn center_period(&self) -> Duration {
        Duration::from_secs(self.face.center_period_secs)
    }

    /// Every annular ring paired with its id and geometry.
    pub fn annular_rings(&self) -> impl Iterator<Item = (RingId, &RingConfig, RingGeometry)> {
        let layout = self.layout();
        self.rings.iter().enumerate().map(move |(i, ring)| {
            let ordinal = i + 1;
            (RingId::new(ordinal), ring, layout.geometry(ordinal))
        })
    }

    /// Period of every rotating layer, central disc first.
    pub fn ring_periods(&self) -> Vec<(RingId, Duration)> {
        std::iter::once((RingId::CENTER, self.center_period()))
            .chain(
                self.rings
                    .iter()
                    .enumerate()
                    .map(|(i, r)| (RingId::new(i + 1), r.period())),
            )
            .collect()
    }

    /// Rejects tables that would produce degenerate geometry or undefined ticks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rings.is_empty() {
            return Err(ConfigError::TooFewRings);
        }
        if self.face.center_period_secs == 0 {
            return Err(ConfigError::ZeroPeriod(RingId::CENTER));
        }
        if self.face.seconds_ring_radius + self.face.ring_gap >= self.face.clock_radius {
            return Err(ConfigError::SecondsDiscTooLarge {
                radius: self.face.seconds_ring_radius,
                clock_radius: self.face.clock_radius,
            });
        }

        let width = self.layout().ring_width();
        if width <= 0.0 {
            return Err(ConfigError::NonPositiveRingWidth { width });
        }

        for (id, ring, geometry) in self.annular_rings() {
            if ring.period_secs == 0 {
                return Err(ConfigError::ZeroPeriod(id));
            }
            if ring.divisions == 0 {
                return Err(ConfigError::ZeroDivisions(id));
            }
            if ring.major_every == 0 {
                return Err(ConfigError::ZeroMajorModulus(id));
            }
            if geometry.outer > self.face.clock_radius {
                return Err(ConfigError::RingExceedsFace {
                    ring: id,
                    outer: geometry.outer,
                    clock_radius: self.face.clock_radius,
                });
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("At least one ring besides the seconds disc is required")]
    TooFewRings,
    #[error("{0} has a zero period")]
    ZeroPeriod(RingId),
    #[error("{0} has no tick divisions")]
    ZeroDivisions(RingId),
    #[error("{0} has a zero major tick modulus")]
    ZeroMajorModulus(RingId),
    #[error("Rings would be {width:.2} wide; shrink the gap or use fewer rings")]
    NonPositiveRingWidth { width: f64 },
    #[error("Seconds disc radius {radius} plus gap leaves no room inside clock radius {clock_radius}")]
    SecondsDiscTooLarge { radius: f64, clock_radius: f64 },
    #[error("{ring} ends at {outer:.2}, outside clock radius {clock_radius}")]
    RingExceedsFace {
        ring: RingId,
        outer: f64,
        clock_radius: f64,
    },
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "ringclock", "ringclock")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("RINGCLOCK")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => {
            log::info!("Loaded configuration with {} rings", c.rings.len());
            c
        }
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_surface_deserialization() {
        let cases = vec![
            ("\"window\"", Surface::Window),
            ("\"Window\"", Surface::Window),
            ("\"bottom\"", Surface::Bottom),
            ("\"DESKTOP\"", Surface::Bottom),
            ("\"background\"", Surface::Background),
            ("\"wallpaper\"", Surface::Background),
        ];

        for (json, expected) in cases {
            let deserialized: Surface = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!(serde_json::from_str::<Surface>("\"floating\"").is_err());
    }

    #[test]
    fn test_surface_display_parses_back() {
        use strum::IntoEnumIterator;

        for surface in Surface::iter() {
            assert_eq!(surface.to_string().parse::<Surface>().unwrap(), surface);
        }
    }

    #[test]
    fn test_hex_color_deserialization() {
        let c: HexColor = serde_json::from_str("\"#cb997e\"").unwrap();
        assert_eq!(c, HexColor::rgb(0xcb, 0x99, 0x7e));

        let short: HexColor = serde_json::from_str("\"#F44\"").unwrap();
        assert_eq!(short, HexColor::rgb(0xff, 0x44, 0x44));
        assert_eq!(short.to_string(), "#ff4444");

        assert!(serde_json::from_str::<HexColor>("\"#zzzzzz\"").is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.rings.len(), 6);
        assert_eq!(config.layout().total, 7);
        assert_eq!(config.ring_periods().len(), 7);
        assert_eq!(config.rings[2].labels.len(), 24);
        assert_eq!(config.rings[4].labels.len(), 30);
        assert_eq!(config.rings[4].labels[3], "3");
    }

    #[test]
    fn test_outermost_ring_stays_inside_face() {
        let config = Config::default();
        let (_, _, last) = config.annular_rings().last().unwrap();
        assert!(last.outer <= config.face.clock_radius);
        assert!((last.outer - (config.face.clock_radius - config.face.ring_gap)).abs() < 1e-9);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = from_toml(
            r##"
            [face]
            ring_gap = 4.0

            [theme]
            indicator = "#00ff00"

            [display]
            surface = "wallpaper"
            debug_readout = true
            "##,
        );

        assert_eq!(config.face.ring_gap, 4.0);
        assert_eq!(config.face.clock_radius, 300.0);
        assert_eq!(config.theme.indicator, HexColor::rgb(0, 0xff, 0));
        assert_eq!(config.theme.outline, HexColor::rgb(0, 0, 0));
        assert_eq!(config.display.surface, Surface::Background);
        assert!(config.display.debug_readout);
        assert_eq!(config.rings, default_rings());
    }

    #[test]
    fn test_ring_table_from_toml() {
        let config = from_toml(
            r#"
            [[rings]]
            period_secs = 60
            divisions = 60
            major_every = 5
            labels = ["0", "15", "30", "45"]
            title = "Seconds"

            [[rings]]
            period_secs = 3600
            divisions = 12
            major_every = 3
            "#,
        );

        assert_eq!(config.rings.len(), 2);
        assert_eq!(config.rings[0].title.as_deref(), Some("Seconds"));
        assert_eq!(config.rings[1].labels, Vec::<String>::new());
        assert_eq!(config.rings[1].period(), Duration::from_secs(3600));
        config.validate().unwrap();
    }

    #[test]
    fn test_validation_rejects_empty_ring_table() {
        let config = Config {
            rings: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TooFewRings)));
    }

    #[test]
    fn test_validation_rejects_gap_wider_than_interval() {
        let mut config = Config::default();
        config.face.ring_gap = 60.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveRingWidth { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_oversized_seconds_disc() {
        let mut config = Config::default();
        config.face.seconds_ring_radius = 298.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SecondsDiscTooLarge { .. })
        ));
    }

    #[test]
    fn test_validation_names_the_broken_ring() {
        let mut config = Config::default();
        config.rings[3].major_every = 0;
        match config.validate() {
            Err(ConfigError::ZeroMajorModulus(id)) => assert_eq!(id, RingId::new(4)),
            other => panic!("unexpected {other:?}"),
        }

        let mut config = Config::default();
        config.rings[0].divisions = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroDivisions(_))
        ));

        let mut config = Config::default();
        config.rings[5].period_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPeriod(_))));

        let mut config = Config::default();
        config.face.center_period_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroPeriod(RingId::CENTER))
        ));
    }
}
