//! Point construction for the anchor and flame glyphs.
//!
//! Every dimension is a fixed fraction of the glyph's size scalar, so the
//! functions here are pure and can be checked without a raster.

use std::f32::consts::PI;

/// Number of samples along each hook curve.
pub const HOOK_SAMPLES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with uniformly rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub radius: f32,
}

impl RoundedRect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Resolved anchor shapes, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorGeometry {
    pub ring_center: Point,
    pub ring_radius: f32,
    pub ring_stroke: f32,
    pub stem: RoundedRect,
    pub crossbar: RoundedRect,
    pub left_hook: Vec<Point>,
    pub right_hook: Vec<Point>,
    pub hook_stroke: f32,
    pub left_tip: [Point; 3],
    pub right_tip: [Point; 3],
}

impl AnchorGeometry {
    pub fn new(center: Point, size: f32) -> Self {
        let Point { x: cx, y: cy } = center;

        let ring_radius = size * 0.12;
        let ring_offset = size * 0.45;
        let crossbar_width = size * 0.7;
        let crossbar_height = size * 0.12;
        let stem_width = size * 0.12;
        let stem_height = size * 0.55;
        let hook_width = size * 0.8;
        let hook_height = size * 0.25;

        let stem_top = cy - ring_offset;
        let stem_bottom = cy + stem_height - ring_offset;

        let stem = RoundedRect {
            left: cx - stem_width / 2.0,
            top: stem_top,
            right: cx + stem_width / 2.0,
            bottom: stem_bottom,
            radius: stem_width / 2.0,
        };
        let crossbar = RoundedRect {
            left: cx - crossbar_width / 2.0,
            top: cy - crossbar_height / 2.0,
            right: cx + crossbar_width / 2.0,
            bottom: cy + crossbar_height / 2.0,
            radius: crossbar_height / 2.0,
        };

        // Quarter arc from straight down (pi/2) sweeping outwards; the
        // horizontal offset is shared so the two hooks mirror exactly.
        let mut left_hook = Vec::with_capacity(HOOK_SAMPLES);
        let mut right_hook = Vec::with_capacity(HOOK_SAMPLES);
        for i in 0..HOOK_SAMPLES {
            let angle = PI * (0.5 + i as f32 / 40.0);
            let dx = hook_width / 4.0 - angle.cos() * hook_width / 3.0;
            let y = stem_bottom + angle.sin() * hook_height;
            left_hook.push(Point::new(cx - dx, y));
            right_hook.push(Point::new(cx + dx, y));
        }

        let tip = |sign: f32| {
            [
                Point::new(cx + sign * hook_width * 0.42, stem_bottom + hook_height * 0.7),
                Point::new(cx + sign * hook_width * 0.47, stem_bottom + hook_height * 0.95),
                Point::new(cx + sign * hook_width * 0.32, stem_bottom + hook_height * 0.85),
            ]
        };

        Self {
            ring_center: Point::new(cx, stem_top),
            ring_radius,
            ring_stroke: (size * 0.08).trunc(),
            stem,
            crossbar,
            left_hook,
            right_hook,
            hook_stroke: (size * 0.12).trunc(),
            left_tip: tip(-1.0),
            right_tip: tip(1.0),
        }
    }
}

/// Outer and inner flame polygons; the inner one is drawn on top.
#[derive(Debug, Clone, PartialEq)]
pub struct FlameGeometry {
    pub outer: [Point; 6],
    pub inner: [Point; 6],
}

impl FlameGeometry {
    pub fn new(center: Point, size: f32) -> Self {
        let Point { x: cx, y: cy } = center;
        let h = size * 0.35;
        let w = size * 0.25;

        let outer = [
            Point::new(cx, cy - h * 0.7),
            Point::new(cx - w * 0.7, cy - h * 0.3),
            Point::new(cx - w * 0.4, cy),
            Point::new(cx, cy - h * 0.15),
            Point::new(cx + w * 0.4, cy),
            Point::new(cx + w * 0.7, cy - h * 0.3),
        ];
        let inner = [
            Point::new(cx, cy - h * 0.55),
            Point::new(cx - w * 0.35, cy - h * 0.2),
            Point::new(cx - w * 0.2, cy - h * 0.05),
            Point::new(cx, cy - h * 0.1),
            Point::new(cx + w * 0.2, cy - h * 0.05),
            Point::new(cx + w * 0.35, cy - h * 0.2),
        ];

        Self { outer, inner }
    }
}

/// Shared layout of both glyphs on a square canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    pub anchor_center: Point,
    pub flame_center: Point,
    pub symbol_size: f32,
    pub corner_radius: f32,
}

impl IconLayout {
    pub fn new(canvas_size: u32) -> Self {
        let center = (canvas_size / 2) as f32;
        let symbol_size = canvas_size as f32 * 0.55;
        Self {
            anchor_center: Point::new(center, center),
            flame_center: Point::new(center, center - symbol_size * 0.65),
            symbol_size,
            corner_radius: (canvas_size as f32 * 0.2237).trunc(),
        }
    }
}
