pub mod model;
pub mod scene;
pub mod view;

pub use model::Dial;
pub use scene::{Layer, Point, Primitive, Scene};
pub use view::draw;

pub const LABEL_FONT: &str = "Times New Roman";
pub const LABEL_FONT_SIZE: f64 = 14.0;
pub const TITLE_FONT: &str = "Verdana";
pub const TITLE_FONT_SIZE: f64 = 12.0;
pub const MARKER_HALF_WIDTH: f64 = 10.0;
pub const MARKER_OVERHANG: f64 = 10.0; // how far the marker pokes past the face edge
pub const MARKER_STROKE: f64 = 2.0;
pub const MARKER_OPACITY: f64 = 0.5;
pub const HUB_RADIUS: f64 = 15.0;
