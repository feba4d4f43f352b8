/// Triangle-fan approximation of a disk in an arbitrary 3D plane
use std::f32::consts::TAU;

use log::debug;
use nalgebra::{Point3, Vector3};

use crate::error::{check_radius, check_segments, ShapeError};
use crate::math::plane_basis;
use crate::mesh::{Color, Mesh, Triangle};

/// A flat disk approximated by a fan of `segments` triangles.
///
/// The rim is sampled with the parametric form
/// `p(t) = center + r*cos(t)*u + r*sin(t)*v` where `(u, v)` span the plane
/// orthogonal to the normal. Triangles face the side the normal points to.
#[derive(Debug, Clone)]
pub struct Circle {
    vertices: Vec<Point3<f32>>,
    mesh: Mesh,
}

impl Circle {
    /// Default number of triangles in the fan.
    pub const DEFAULT_SEGMENTS: usize = 20;
    pub const DEFAULT_RADIUS: f32 = 1.0;

    /// Unit circle in the xy-plane, facing +z.
    pub fn unit(center: Point3<f32>, color: Color) -> Result<Self, ShapeError> {
        Self::new(
            center,
            Self::DEFAULT_RADIUS,
            Vector3::z(),
            color,
            Self::DEFAULT_SEGMENTS,
        )
    }

    pub fn new(
        center: Point3<f32>,
        radius: f32,
        normal: Vector3<f32>,
        color: Color,
        segments: usize,
    ) -> Result<Self, ShapeError> {
        check_radius(radius)?;
        check_segments(segments)?;

        let (u, v) = plane_basis(normal)?;

        // Vertex 0 is the center, followed by the rim samples in order of
        // increasing angle. Composite shapes rely on this layout.
        let mut vertices = Vec::with_capacity(segments + 1);
        vertices.push(center);
        let dt = TAU / segments as f32;
        for i in 0..segments {
            let t = i as f32 * dt;
            vertices.push(center + u * (radius * t.cos()) + v * (radius * t.sin()));
        }

        let mut mesh = Mesh::with_capacity(segments);
        for i in 0..segments {
            let a = vertices[1 + i];
            let b = vertices[1 + (i + 1) % segments];
            mesh.add_triangle(Triangle::new(center, a, b, color));
        }

        debug!("circle: {} rim vertices, {} triangles", segments, mesh.len());
        Ok(Self { vertices, mesh })
    }

    /// Center followed by the rim samples.
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    /// The rim samples without the leading center vertex.
    pub fn rim(&self) -> &[Point3<f32>] {
        &self.vertices[1..]
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
