use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;

/// Colored vertex in surface pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4], // premultiplied
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec2, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}

/// How a mesh's vertices are assembled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Topology {
    /// Every three vertices form a triangle.
    TriangleList,
    /// Consecutive vertices are joined by 1px lines.
    LineStrip,
}

/// Immediate-mode geometry submitted through [`Canvas::draw_mesh`](super::Canvas::draw_mesh).
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub topology: Topology,
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(topology: Topology, capacity: usize) -> Self {
        Self {
            topology,
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Two triangles covering the axis-aligned rectangle `[min, max]`.
    pub fn rect(min: Vec2, max: Vec2, color: Color) -> Self {
        let corners = [
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
        ];
        let mut mesh = Self::with_capacity(Topology::TriangleList, 6);
        for i in [0, 1, 2, 0, 2, 3] {
            mesh.push(corners[i], color);
        }
        mesh
    }

    #[inline]
    pub fn push(&mut self, position: Vec2, color: Color) {
        self.vertices.push(Vertex::new(position, color));
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Expands the mesh into independent primitives: triangles stay as they
    /// are, a line strip of `n` vertices becomes `n - 1` line segments.
    pub fn to_primitive_list(&self) -> Vec<Vertex> {
        match self.topology {
            Topology::TriangleList => {
                let whole = self.vertices.len() - self.vertices.len() % 3;
                self.vertices[..whole].to_vec()
            }
            Topology::LineStrip => self
                .vertices
                .windows(2)
                .flat_map(|pair| [pair[0], pair[1]])
                .collect(),
        }
    }
}
