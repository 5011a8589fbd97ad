use glam::Vec2;

/// Straight-alpha RGBA color with channels in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// A single drawing command in viewport coordinates (origin top-left,
/// y growing downward, logical pixels).
///
/// Frames are described as primitive lists rather than painted directly so
/// that rule output is a plain value: comparable in tests and replayable by
/// any backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Open stroked path.
    Polyline {
        points: Vec<Vec2>,
        color: Rgba,
        width: f32,
    },
    /// Region between a sampled surface curve and the horizontal line
    /// `y = floor`, filled with a vertical gradient from `top` (at y = 0)
    /// to `bottom` (at y = floor).
    FillBelow {
        points: Vec<Vec2>,
        floor: f32,
        top: Rgba,
        bottom: Rgba,
    },
    /// Filled circle.
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    /// Axis-aligned filled rectangle.
    Rect { min: Vec2, size: Vec2, color: Rgba },
    /// Filled triangle.
    Triangle {
        a: Vec2,
        b: Vec2,
        c: Vec2,
        color: Rgba,
    },
}

/// One frame's worth of primitives, in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub primitives: Vec<Primitive>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    pub fn polyline(&mut self, points: Vec<Vec2>, color: Rgba, width: f32) {
        self.primitives.push(Primitive::Polyline { points, color, width });
    }

    pub fn fill_below(&mut self, points: Vec<Vec2>, floor: f32, top: Rgba, bottom: Rgba) {
        self.primitives.push(Primitive::FillBelow { points, floor, top, bottom });
    }

    pub fn disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.primitives.push(Primitive::Disc { center, radius, color });
    }

    pub fn rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        self.primitives.push(Primitive::Rect { min, size, color });
    }

    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        self.primitives.push(Primitive::Triangle { a, b, c, color });
    }
}
