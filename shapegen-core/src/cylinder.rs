/// Cylinder composed of two circular caps and a quad-strip lateral surface
use log::debug;
use nalgebra::Point3;

use crate::circle::Circle;
use crate::error::ShapeError;
use crate::math::EPSILON;
use crate::mesh::{Color, Mesh, Triangle};

/// A cylinder between two axis endpoints.
///
/// Both caps are [`Circle`]s sampled with the same basis derived from the
/// axis `p1 - p2`, so rim vertices with the same index sit directly across
/// from each other and each lateral segment is a clean quad split into two
/// triangles. Caps face outward along the axis, the lateral surface faces
/// away from it.
#[derive(Debug, Clone)]
pub struct Cylinder {
    vertices: Vec<Point3<f32>>,
    segments: usize,
    mesh: Mesh,
}

impl Cylinder {
    /// Default number of rim segments ("smoothness").
    pub const DEFAULT_SEGMENTS: usize = 120;

    pub fn with_defaults(
        p1: Point3<f32>,
        p2: Point3<f32>,
        radius: f32,
        color: Color,
    ) -> Result<Self, ShapeError> {
        Self::new(p1, p2, radius, color, Self::DEFAULT_SEGMENTS)
    }

    pub fn new(
        p1: Point3<f32>,
        p2: Point3<f32>,
        radius: f32,
        color: Color,
        segments: usize,
    ) -> Result<Self, ShapeError> {
        let axis = p1 - p2;
        if axis.norm() <= EPSILON {
            return Err(ShapeError::CoincidentPoints {
                context: "cylinder endpoints",
            });
        }

        // Same normal for both circles: the deterministic basis derivation
        // then yields rims whose indices correspond.
        let top = Circle::new(p1, radius, axis, color, segments)?;
        let bottom = Circle::new(p2, radius, axis, color, segments)?;
        let rim1 = top.rim();
        let rim2 = bottom.rim();

        let mut mesh = Mesh::with_capacity(4 * segments);

        // Top cap already faces +axis.
        for t in top.triangles() {
            mesh.add_triangle(*t);
        }
        // Bottom cap re-wound to face -axis.
        for i in 0..segments {
            let a = rim2[i];
            let b = rim2[(i + 1) % segments];
            mesh.add_triangle(Triangle::new(p2, b, a, color));
        }

        // One quad per segment, wrapping the last pair back to the first.
        for i in 0..segments {
            let j = (i + 1) % segments;
            mesh.add_triangle(Triangle::new(rim2[i], rim2[j], rim1[i], color));
            mesh.add_triangle(Triangle::new(rim1[i], rim2[j], rim1[j], color));
        }

        let mut vertices = top.vertices().to_vec();
        vertices.extend_from_slice(bottom.vertices());

        debug!(
            "cylinder: {} segments, {} triangles",
            segments,
            mesh.len()
        );
        Ok(Self {
            vertices,
            segments,
            mesh,
        })
    }

    /// First cap's center and rim, then the second cap's center and rim.
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn triangles(&self) -> &[Triangle] {
        self.mesh.triangles()
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}
