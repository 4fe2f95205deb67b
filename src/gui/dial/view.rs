use super::scene::{Fill, Font, Layer, Point, Primitive, Scene, Stroke, Weight};
use crate::clock::Timeline;
use crate::gui::theme::{ColorSlot, ThemeColors};
use cairo::Context;
use palette::Srgba;
use std::f64::consts::{FRAC_PI_2, TAU};

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct LayerRenderer<'a> {
    layer: &'a Layer,
    /// Fraction of a full revolution the layer has turned.
    turn: f64,
    colors: &'a ThemeColors,
}

impl<'a> LayerRenderer<'a> {
    fn new(layer: &'a Layer, turn: f64, colors: &'a ThemeColors) -> Self {
        Self {
            layer,
            turn,
            colors,
        }
    }

    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        cr.save()?;
        // the dial turns counter-clockwise beneath the fixed marker
        cr.rotate(-self.turn * TAU);
        for primitive in &self.layer.primitives {
            self.draw_primitive(cr, primitive)?;
        }
        cr.restore()
    }

    fn draw_primitive(&self, cr: &Context, primitive: &Primitive) -> Result<(), cairo::Error> {
        match primitive {
            Primitive::Circle {
                radius,
                fill,
                stroke,
            } => {
                cr.new_path();
                cr.arc(0.0, 0.0, *radius, 0.0, TAU);
                self.paint(cr, *fill, *stroke)
            }
            Primitive::Wedge {
                radius,
                from,
                to,
                fill,
            } => {
                cr.new_path();
                cr.move_to(0.0, 0.0);
                cr.arc(0.0, 0.0, *radius, to_cairo_angle(*from), to_cairo_angle(*to));
                cr.close_path();
                self.paint(cr, Some(*fill), None)
            }
            Primitive::Line { from, to, stroke } => {
                cr.new_path();
                cr.move_to(from.x, from.y);
                cr.line_to(to.x, to.y);
                self.paint(cr, None, Some(*stroke))
            }
            Primitive::Rect {
                origin,
                width,
                height,
                fill,
                stroke,
            } => {
                cr.new_path();
                cr.rectangle(origin.x, origin.y, *width, *height);
                self.paint(cr, *fill, *stroke)
            }
            Primitive::RadialText {
                text,
                radius,
                angle,
                font,
                color,
            } => self.draw_radial_text(cr, text, *radius, *angle, font, *color),
            Primitive::ArcText {
                text,
                radius,
                offset,
                font,
                color,
            } => self.draw_arc_text(cr, text, *radius, *offset, font, *color),
        }
    }

    /// Fills then strokes the current path.
    fn paint(
        &self,
        cr: &Context,
        fill: Option<Fill>,
        stroke: Option<Stroke>,
    ) -> Result<(), cairo::Error> {
        if let Some(fill) = fill {
            set_source(cr, self.colors.rgba(fill.color, fill.opacity));
            cr.fill_preserve()?;
        }
        if let Some(stroke) = stroke {
            set_source(cr, self.colors.rgba(stroke.color, 1.0));
            cr.set_line_width(stroke.width);
            cr.stroke_preserve()?;
        }
        cr.new_path();
        Ok(())
    }

    fn select_font(&self, cr: &Context, font: &Font, color: ColorSlot) {
        let slant = if font.italic {
            cairo::FontSlant::Italic
        } else {
            cairo::FontSlant::Normal
        };
        let weight = match font.weight {
            Weight::Normal => cairo::FontWeight::Normal,
            Weight::Bold | Weight::Bolder => cairo::FontWeight::Bold,
        };
        cr.select_font_face(font.family, slant, weight);
        cr.set_font_size(font.size);
        set_source(cr, self.colors.rgba(color, 1.0));
    }

    /// Vertical shift that puts the middle of the glyph box on the baseline point.
    fn central_baseline(cr: &Context) -> Result<f64, cairo::Error> {
        let fe = cr.font_extents()?;
        Ok((fe.ascent() - fe.descent()) / 2.0)
    }

    fn draw_radial_text(
        &self,
        cr: &Context,
        text: &str,
        radius: f64,
        angle: f64,
        font: &Font,
        color: ColorSlot,
    ) -> Result<(), cairo::Error> {
        self.select_font(cr, font, color);
        let ext = cr.text_extents(text)?;
        let shift = Self::central_baseline(cr)?;

        cr.save()?;
        cr.rotate(angle * TAU);
        cr.move_to(-(ext.x_bearing() + ext.width() / 2.0), -radius + shift);
        cr.show_text(text)?;
        cr.restore()
    }

    /// Lays `text` along the circle glyph by glyph, like text on a path.
    fn draw_arc_text(
        &self,
        cr: &Context,
        text: &str,
        radius: f64,
        offset: f64,
        font: &Font,
        color: ColorSlot,
    ) -> Result<(), cairo::Error> {
        if radius <= 0.0 {
            return Ok(());
        }
        self.select_font(cr, font, color);
        let shift = Self::central_baseline(cr)?;

        let mut distance = offset;
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let glyph = ch.encode_utf8(&mut buf);
            let advance = cr.text_extents(glyph)?.x_advance();

            cr.save()?;
            cr.rotate((distance + advance / 2.0) / radius);
            cr.move_to(-advance / 2.0, -radius + shift);
            cr.show_text(glyph)?;
            cr.restore()?;

            distance += advance;
        }
        Ok(())
    }
}

/// Converts a clockwise-from-top turn fraction into cairo's angle convention.
fn to_cairo_angle(fraction: f64) -> f64 {
    fraction * TAU - FRAC_PI_2
}

/// Scale and offset mapping the scene's view box onto a `width` x `height` area.
pub fn viewport(scene: &Scene, width: f64, height: f64) -> (Point, f64) {
    let scale = width.min(height) / (2.0 * scene.view_radius);
    (Point::new(width / 2.0, height / 2.0), scale)
}

pub fn draw(
    cr: &Context,
    scene: &Scene,
    timeline: &Timeline,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let (center, scale) = viewport(scene, width, height);
    if scale <= 0.0 || !scale.is_finite() {
        return Ok(());
    }

    cr.save()?;
    cr.translate(center.x, center.y);
    cr.scale(scale, scale);

    for layer in &scene.layers {
        let turn = layer
            .ring
            .and_then(|ring| timeline.turn(ring))
            .unwrap_or(0.0);
        LayerRenderer::new(layer, turn, colors).draw(cr)?;
    }
    cr.restore()
}
