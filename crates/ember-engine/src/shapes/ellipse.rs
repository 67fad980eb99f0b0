use std::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::{Canvas, Mesh, Topology};

/// Stroke drawn around an ellipse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Outline {
    pub color: Color,
    /// Stroke width in pixels, centered on the ellipse edge.
    pub thickness: f32,
}

/// Input of [`ellipse`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EllipseDesc {
    pub center: Vec2,
    /// Semi-axes along X and Y.
    pub radii: Vec2,
    pub fill: Color,
    pub outline: Option<Outline>,
    /// Rim points; values below 3 are raised to 3.
    pub point_count: u32,
}

impl EllipseDesc {
    pub const DEFAULT_POINT_COUNT: u32 = 100;

    pub fn new(center: Vec2, radii: Vec2, fill: Color) -> Self {
        Self {
            center,
            radii,
            fill,
            outline: None,
            point_count: Self::DEFAULT_POINT_COUNT,
        }
    }

    pub fn outline(mut self, color: Color, thickness: f32) -> Self {
        self.outline = Some(Outline { color, thickness });
        self
    }

    pub fn points(mut self, point_count: u32) -> Self {
        self.point_count = point_count;
        self
    }
}

/// Tessellated ellipse: a filled triangle list plus zero or more outline strips.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseMesh {
    pub fill: Mesh,
    pub outline: Vec<Mesh>,
}

impl EllipseMesh {
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_mesh(&self.fill);
        for strip in &self.outline {
            canvas.draw_mesh(strip);
        }
    }
}

/// Tessellates an ellipse.
///
/// The fill is a fan around the center expressed as a triangle list
/// (`3 * point_count` vertices). When the outline is visible (positive
/// thickness, non-transparent color) it is approximated by closed line strips
/// spread across the stroke width, no more than one pixel apart.
pub fn ellipse(desc: &EllipseDesc) -> EllipseMesh {
    let n = desc.point_count.max(3) as usize;
    let rim = |i: usize, grow: f32| -> Vec2 {
        let dir = Vec2::from_angle(TAU * (i % n) as f32 / n as f32);
        Vec2::new(
            desc.center.x + (desc.radii.x + grow).max(0.0) * dir.x,
            desc.center.y + (desc.radii.y + grow).max(0.0) * dir.y,
        )
    };

    let mut fill = Mesh::with_capacity(Topology::TriangleList, n * 3);
    for i in 0..n {
        fill.push(desc.center, desc.fill);
        fill.push(rim(i, 0.0), desc.fill);
        fill.push(rim(i + 1, 0.0), desc.fill);
    }

    let outline = match desc.outline {
        Some(o) if o.thickness > 0.0 && !o.color.is_transparent() => stroke_offsets(o.thickness)
            .map(|offset| {
                let mut strip = Mesh::with_capacity(Topology::LineStrip, n + 1);
                for i in 0..=n {
                    strip.push(rim(i, offset), o.color);
                }
                strip
            })
            .collect(),
        _ => Vec::new(),
    };

    EllipseMesh { fill, outline }
}

/// Evenly spaced offsets covering `[-thickness / 2, thickness / 2]`.
fn stroke_offsets(thickness: f32) -> impl Iterator<Item = f32> {
    let gaps = thickness.ceil().max(1.0) as usize;
    let step = thickness / gaps as f32;
    (0..=gaps).map(move |k| -thickness * 0.5 + step * k as f32)
}
