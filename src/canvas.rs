//! Drawing surface used by the icon renderer.
//!
//! [`Surface`] lists every primitive the glyphs need. [`Canvas`] implements
//! it on top of a `tiny_skia::Pixmap`, which gives anti-aliased fills and
//! strokes with source-over compositing, so later shapes always land on
//! top of earlier ones.

use crate::{
    color::Color,
    error::{IconError, Result},
    geometry::{Point, RoundedRect},
};
use image::{Rgb, RgbImage};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Mask, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

/// Bezier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

pub trait Surface {
    /// Edge length of the square surface in pixels.
    fn size(&self) -> u32;

    /// Replace every pixel with a top-to-bottom two colour gradient.
    fn fill_vertical_gradient(&mut self, top: Color, bottom: Color) -> Result<()>;

    /// Stroke a circle whose outer edge sits at `radius`.
    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color)
        -> Result<()>;

    fn fill_rounded_rect(&mut self, rect: &RoundedRect, color: Color) -> Result<()>;

    /// Stroke an open polyline with round joins between segments.
    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Color) -> Result<()>;

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<()>;

    /// Clear everything outside a full-size rounded rectangle.
    fn clip_rounded(&mut self, radius: f32) -> Result<()>;

    /// Composite the surface over an opaque `matte` colour.
    fn flatten(&self, matte: Color) -> RgbImage;
}

pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(size: u32) -> Result<Self> {
        let pixmap = Pixmap::new(size, size).ok_or_else(|| {
            IconError::InvalidSpec(format!("Can't allocate a {size}x{size} canvas"))
        })?;
        Ok(Self { pixmap })
    }

    fn fill(&mut self, path: &Path, color: Color) {
        let paint = paint(color);
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

impl Surface for Canvas {
    fn size(&self) -> u32 {
        self.pixmap.width()
    }

    fn fill_vertical_gradient(&mut self, top: Color, bottom: Color) -> Result<()> {
        let width = self.pixmap.width() as usize;
        let height = self.pixmap.height();
        let data = self.pixmap.data_mut();

        for y in 0..height {
            let m = (255 * y as u64 / height as u64) as u8;
            let [r, g, b] = top.blend(bottom, m).to_array();
            let start = y as usize * width * 4;
            for px in data[start..start + width * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&[r, g, b, 255]);
            }
        }
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f32,
        width: f32,
        color: Color,
    ) -> Result<()> {
        let path = PathBuilder::from_circle(center.x, center.y, radius - width / 2.0)
            .ok_or_else(|| IconError::Geometry(format!("circle of radius {radius}")))?;
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        let paint = paint(color);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    fn fill_rounded_rect(&mut self, rect: &RoundedRect, color: Color) -> Result<()> {
        let path = rounded_rect_path(rect)?;
        self.fill(&path, color);
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Color) -> Result<()> {
        let path = polyline_path(points, false)?;
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        let paint = paint(color);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<()> {
        let path = polyline_path(points, true)?;
        self.fill(&path, color);
        Ok(())
    }

    fn clip_rounded(&mut self, radius: f32) -> Result<()> {
        let size = self.pixmap.width();
        let extent = size as f32;
        let outline = rounded_rect_path(&RoundedRect {
            left: 0.0,
            top: 0.0,
            right: extent,
            bottom: extent,
            radius,
        })?;

        let mut mask = Mask::new(size, size)
            .ok_or_else(|| IconError::Geometry(format!("{size}x{size} mask")))?;
        // Hard edged: 255 inside, 0 outside.
        mask.fill_path(&outline, FillRule::Winding, false, Transform::identity());

        for (px, &m) in self
            .pixmap
            .data_mut()
            .chunks_exact_mut(4)
            .zip(mask.data())
        {
            match m {
                255 => {}
                0 => px.fill(0),
                m => {
                    for c in px.iter_mut() {
                        *c = ((*c as u32 * m as u32 + 127) / 255) as u8;
                    }
                }
            }
        }
        Ok(())
    }

    fn flatten(&self, matte: Color) -> RgbImage {
        let size = self.pixmap.width();
        let data = self.pixmap.data();
        let matte = matte.to_array();

        RgbImage::from_fn(size, size, |x, y| {
            let i = (y as usize * size as usize + x as usize) * 4;
            let px = &data[i..i + 4];
            let inv = 255 - px[3] as u32;
            let over = |c: usize| (px[c] as u32 + (matte[c] as u32 * inv + 127) / 255).min(255) as u8;
            Rgb([over(0), over(1), over(2)])
        })
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

fn polyline_path(points: &[Point], close: bool) -> Result<Path> {
    let (first, rest) = points
        .split_first()
        .ok_or_else(|| IconError::Geometry("empty point list".to_string()))?;

    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    if close {
        pb.close();
    }
    pb.finish()
        .ok_or_else(|| IconError::Geometry(format!("path through {} points", points.len())))
}

fn rounded_rect_path(rect: &RoundedRect) -> Result<Path> {
    let RoundedRect {
        left: l,
        top: t,
        right: r,
        bottom: b,
        ..
    } = *rect;
    let radius = rect
        .radius
        .min(rect.width() / 2.0)
        .min(rect.height() / 2.0)
        .max(0.0);
    let k = radius * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(l + radius, t);
    pb.line_to(r - radius, t);
    pb.cubic_to(r - radius + k, t, r, t + radius - k, r, t + radius);
    pb.line_to(r, b - radius);
    pb.cubic_to(r, b - radius + k, r - radius + k, b, r - radius, b);
    pb.line_to(l + radius, b);
    pb.cubic_to(l + radius - k, b, l, b - radius + k, l, b - radius);
    pb.line_to(l, t + radius);
    pb.cubic_to(l, t + radius - k, l + radius - k, t, l + radius, t);
    pb.close();

    pb.finish()
        .ok_or_else(|| IconError::Geometry(format!("rounded rectangle {rect:?}")))
}
