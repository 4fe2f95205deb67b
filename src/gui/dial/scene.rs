use super::{
    HUB_RADIUS, LABEL_FONT, LABEL_FONT_SIZE, MARKER_HALF_WIDTH, MARKER_OPACITY, MARKER_OVERHANG,
    MARKER_STROKE, TITLE_FONT, TITLE_FONT_SIZE,
};
use crate::clock::{RingGeometry, RingId, label_slots, ticks};
use crate::config::{Config, RingConfig, TickConfig};
use crate::gui::theme::ColorSlot;
use std::f64::consts::TAU;

/// Point in view-box coordinates, origin at the dial center, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `radius` out from the center at `fraction` of a turn clockwise from 12 o'clock.
    pub fn polar(radius: f64, fraction: f64) -> Self {
        let angle = fraction * TAU;
        Self::new(radius * angle.sin(), -radius * angle.cos())
    }

    pub fn distance(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: ColorSlot,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: ColorSlot,
    pub opacity: f64,
}

impl Fill {
    pub fn solid(color: ColorSlot) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
    Bolder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: &'static str,
    pub size: f64,
    pub weight: Weight,
    pub italic: bool,
}

/// One typed drawing instruction. Angles are fractions of a turn, clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle {
        radius: f64,
        fill: Option<Fill>,
        stroke: Option<Stroke>,
    },
    /// Pie slice from `from` to `to`, clockwise.
    Wedge {
        radius: f64,
        from: f64,
        to: f64,
        fill: Fill,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        fill: Option<Fill>,
        stroke: Option<Stroke>,
    },
    /// Text centred on the point `radius` out at `angle`, rotated to face outward.
    RadialText {
        text: String,
        radius: f64,
        angle: f64,
        font: Font,
        color: ColorSlot,
    },
    /// Text laid along the circle of `radius`, starting `offset` units clockwise from the top.
    ArcText {
        text: String,
        radius: f64,
        offset: f64,
        font: Font,
        color: ColorSlot,
    },
}

/// A group of primitives painted together; bound layers rotate with their ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub ring: Option<RingId>,
    pub primitives: Vec<Primitive>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub view_radius: f64,
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Face, central seconds disc, one layer per ring, then the pointer marker.
    pub fn build(config: &Config) -> Self {
        let mut layers = vec![face_layer(config), center_layer(config)];
        layers.extend(
            config
                .annular_rings()
                .map(|(id, ring, geometry)| ring_layer(config, id, ring, geometry)),
        );
        layers.push(marker_layer(config));

        Self {
            view_radius: config.face.view_radius,
            layers,
        }
    }

    pub fn layer(&self, ring: RingId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.ring == Some(ring))
    }
}

fn outline(width: f64) -> Option<Stroke> {
    Some(Stroke {
        color: ColorSlot::Outline,
        width,
    })
}

fn face_layer(config: &Config) -> Layer {
    Layer {
        ring: None,
        primitives: vec![Primitive::Circle {
            radius: config.face.clock_radius,
            fill: Some(Fill::solid(ColorSlot::PrimaryMed)),
            stroke: outline(config.face.clock_border),
        }],
    }
}

fn center_layer(config: &Config) -> Layer {
    let radius = config.face.seconds_ring_radius;
    Layer {
        ring: Some(RingId::CENTER),
        primitives: vec![
            Primitive::Circle {
                radius,
                fill: Some(Fill::solid(ColorSlot::PrimaryLight)),
                stroke: outline(config.face.ring_border),
            },
            Primitive::Wedge {
                radius,
                from: 0.0,
                to: 0.5,
                fill: Fill::solid(ColorSlot::Outline),
            },
        ],
    }
}

fn tick_length(ticks: &TickConfig, width: f64, major: bool) -> f64 {
    let ratio = if major {
        ticks.major_length_ratio
    } else {
        ticks.minor_length_ratio
    };
    width / 2.0 * ratio
}

fn ring_layer(config: &Config, id: RingId, ring: &RingConfig, geometry: RingGeometry) -> Layer {
    let width = geometry.width();
    let mut primitives = vec![
        Primitive::Circle {
            radius: geometry.center,
            fill: None,
            stroke: Some(Stroke {
                color: ColorSlot::PrimaryLight,
                width: width - config.face.ring_border,
            }),
        },
        Primitive::Circle {
            radius: geometry.inner,
            fill: None,
            stroke: outline(config.face.ring_border),
        },
        Primitive::Circle {
            radius: geometry.outer,
            fill: None,
            stroke: outline(config.face.ring_border),
        },
    ];

    for tick in ticks(ring.divisions, ring.major_every) {
        let length = tick_length(&config.ticks, width, tick.major);
        let stroke = Stroke {
            color: ColorSlot::Outline,
            width: if tick.major {
                config.ticks.major_thickness
            } else {
                config.ticks.minor_thickness
            },
        };
        primitives.push(Primitive::Line {
            from: Point::polar(geometry.inner, tick.fraction),
            to: Point::polar(geometry.inner + length, tick.fraction),
            stroke,
        });
        primitives.push(Primitive::Line {
            from: Point::polar(geometry.outer, tick.fraction),
            to: Point::polar(geometry.outer - length, tick.fraction),
            stroke,
        });
    }

    let base_weight = if ring.bold_labels {
        Weight::Bold
    } else {
        Weight::Normal
    };
    primitives.extend(
        label_slots(&ring.labels)
            .filter(|slot| !slot.is_blank())
            .map(|slot| Primitive::RadialText {
                text: slot.text.to_string(),
                radius: geometry.center,
                angle: slot.fraction,
                font: Font {
                    family: LABEL_FONT,
                    size: if slot.emphasized {
                        LABEL_FONT_SIZE * 1.2
                    } else {
                        LABEL_FONT_SIZE
                    },
                    weight: if slot.emphasized {
                        Weight::Bolder
                    } else {
                        base_weight
                    },
                    italic: false,
                },
                color: ColorSlot::Outline,
            }),
    );

    if let Some(title) = ring.title.as_ref().filter(|t| !t.is_empty()) {
        primitives.push(Primitive::ArcText {
            text: title.clone(),
            radius: geometry.center,
            offset: ring.title_offset,
            font: Font {
                family: TITLE_FONT,
                size: TITLE_FONT_SIZE,
                weight: Weight::Normal,
                italic: true,
            },
            color: ColorSlot::Outline,
        });
    }

    Layer {
        ring: Some(id),
        primitives,
    }
}

fn marker_layer(config: &Config) -> Layer {
    let reach = config.face.clock_radius + MARKER_OVERHANG;
    let origin = Point::new(-MARKER_HALF_WIDTH, -reach);
    let (width, height) = (MARKER_HALF_WIDTH * 2.0, reach);

    Layer {
        ring: None,
        primitives: vec![
            Primitive::Rect {
                origin,
                width,
                height,
                fill: None,
                stroke: Some(Stroke {
                    color: ColorSlot::SecondaryDark,
                    width: MARKER_STROKE,
                }),
            },
            Primitive::Rect {
                origin,
                width,
                height,
                fill: Some(Fill {
                    color: ColorSlot::SecondaryLight,
                    opacity: MARKER_OPACITY,
                }),
                stroke: None,
            },
            Primitive::Line {
                from: Point::default(),
                to: Point::new(0.0, -reach),
                stroke: Stroke {
                    color: ColorSlot::Indicator,
                    width: 1.0,
                },
            },
            Primitive::Circle {
                radius: HUB_RADIUS,
                fill: Some(Fill::solid(ColorSlot::Hub)),
                stroke: outline(1.0),
            },
        ],
    }
}
