/// Hexahedron composed of two opposing squares
use log::debug;
use nalgebra::{Point3, Vector3};

use crate::error::{check_radius, ShapeError};
use crate::math::{try_normalize, EPSILON};
use crate::mesh::{Color, Mesh, Triangle};
use crate::square::Square;

/// A cube defined by its center, two independent face normals, and the
/// distance from the center to each face plane.
///
/// An orthonormal frame `(a1, a2, a3)` is derived from the two normals:
/// `a3 = n1 x n2` and the second axis is re-derived as `a3 x n1`, so the
/// frame is orthogonal even when the inputs are not. Every corner therefore
/// sits at distance `radius * sqrt(3)` from the center. Two opposing
/// [`Square`] faces normal to `±a3` contribute the 8 vertices; 12 outward
/// triangles close the six sides.
#[derive(Debug, Clone)]
pub struct Cube {
    vertices: Vec<Point3<f32>>,
    mesh: Mesh,
}

/// Lateral quads as index pairs into the two square rings, wound outward.
/// Ring 0..=3 is the `+a3` face, 4..=7 the `-a3` face.
const LATERAL_TRIANGLES: [[usize; 3]; 8] = [
    [1, 0, 4],
    [4, 7, 1],
    [2, 1, 7],
    [7, 6, 2],
    [3, 2, 6],
    [6, 5, 3],
    [0, 3, 5],
    [5, 4, 0],
];

impl Cube {
    pub fn new(
        center: Point3<f32>,
        n1: Vector3<f32>,
        n2: Vector3<f32>,
        radius: f32,
        color: Color,
    ) -> Result<Self, ShapeError> {
        check_radius(radius)?;
        let u1 = try_normalize(n1, "cube first normal")?;
        let u2 = try_normalize(n2, "cube second normal")?;

        let cross = u1.cross(&u2);
        if cross.norm() <= EPSILON {
            return Err(ShapeError::ParallelNormals);
        }

        // Orthonormal frame scaled to the face distance.
        let u3 = cross.normalize();
        let a1 = u1 * radius;
        let a2 = u3.cross(&u1) * radius;
        let a3 = u3 * radius;

        // Opposing faces normal to +/-a3; the shared corner offset a1+a2
        // lies in both face planes.
        let corner = a1 + a2;
        let top = Square::new(center + a3, center + a3 + corner, a3, color)?;
        let bottom = Square::new(center - a3, center - a3 + corner, -a3, color)?;

        let mut vertices = Vec::with_capacity(8);
        vertices.extend_from_slice(top.vertices());
        vertices.extend_from_slice(bottom.vertices());

        let mut mesh = Mesh::with_capacity(12);
        for t in top.triangles().iter().chain(bottom.triangles()) {
            mesh.add_triangle(*t);
        }
        for [i, j, k] in LATERAL_TRIANGLES {
            mesh.add_triangle(Triangle::new(vertices[i], vertices[j], vertices[k], color));
        }

        debug!("cube: radius {:.4}, 12 triangles", radius);
        Ok(Self { vertices, mesh })
    }

    /// The 8 corners: the `+a3` face ring first, then the `-a3` ring.
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
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
