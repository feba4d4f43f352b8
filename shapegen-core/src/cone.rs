/// Cone composed of a circular cap and a lateral fan to the apex
use log::debug;
use nalgebra::Point3;

use crate::circle::Circle;
use crate::error::ShapeError;
use crate::math::EPSILON;
use crate::mesh::{Color, Mesh, Triangle};

/// A cone built from an apex and a circular base.
///
/// The base circle's plane is orthogonal to the cone axis `apex - base`.
/// The cap faces away from the apex and the lateral surface faces outward,
/// so the closed mesh is wound consistently.
#[derive(Debug, Clone)]
pub struct Cone {
    vertices: Vec<Point3<f32>>,
    mesh: Mesh,
}

impl Cone {
    /// Default number of rim segments ("smoothness").
    pub const DEFAULT_SEGMENTS: usize = 120;
    pub const DEFAULT_RADIUS: f32 = 1.0;

    /// Unit-radius cone with the default smoothness.
    pub fn with_defaults(
        apex: Point3<f32>,
        base: Point3<f32>,
        color: Color,
    ) -> Result<Self, ShapeError> {
        Self::new(apex, base, Self::DEFAULT_RADIUS, color, Self::DEFAULT_SEGMENTS)
    }

    pub fn new(
        apex: Point3<f32>,
        base: Point3<f32>,
        radius: f32,
        color: Color,
        segments: usize,
    ) -> Result<Self, ShapeError> {
        let axis = apex - base;
        if axis.norm() <= EPSILON {
            return Err(ShapeError::CoincidentPoints {
                context: "cone apex and base center",
            });
        }

        let circle = Circle::new(base, radius, axis, color, segments)?;
        let rim = circle.rim();

        let mut mesh = Mesh::with_capacity(2 * segments);

        // Cap: the circle fan faces the apex, so re-wind it to face out the
        // bottom of the cone.
        for i in 0..segments {
            let a = rim[i];
            let b = rim[(i + 1) % segments];
            mesh.add_triangle(Triangle::new(base, b, a, color));
        }

        // Lateral fan from consecutive rim pairs to the apex.
        for i in 0..segments {
            let a = rim[i];
            let b = rim[(i + 1) % segments];
            mesh.add_triangle(Triangle::new(a, b, apex, color));
        }

        // Rim vertices first, apex last, mirroring the cap-then-tip build.
        let mut vertices = circle.vertices().to_vec();
        vertices.push(apex);

        debug!("cone: {} segments, {} triangles", segments, mesh.len());
        Ok(Self { vertices, mesh })
    }

    /// Base center, rim samples, then the apex.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq_point;
    use nalgebra::Vector3;

    #[test]
    fn test_triangle_count() {
        let cone = Cone::new(
            Point3::new(0.0, 0.0, 2.0),
            Point3::origin(),
            1.0,
            Color::WHITE,
            24,
        )
        .unwrap();
        assert_eq!(cone.triangles().len(), 48);
    }

    #[test]
    fn test_lateral_triangles_contain_apex() {
        let apex = Point3::new(1.0, 3.0, -2.0);
        let cone = Cone::new(apex, Point3::new(1.0, 0.0, -2.0), 0.5, Color::RED, 12).unwrap();
        let lateral = &cone.triangles()[12..];
        assert_eq!(lateral.len(), 12);
        for t in lateral {
            assert!(approx_eq_point(&t.vertices()[2], &apex, 1e-6));
        }
    }

    #[test]
    fn test_closed_mesh_faces_outward() {
        // For a convex solid, every face normal must point away from an
        // interior point.
        let apex = Point3::new(0.0, 0.0, 3.0);
        let base = Point3::origin();
        let interior = Point3::new(0.0, 0.0, 0.5);
        let cone = Cone::new(apex, base, 1.0, Color::GREEN, 16).unwrap();
        for t in cone.triangles() {
            let outward = t.centroid() - interior;
            assert!(t.normal().dot(&outward) > 0.0);
        }
    }

    #[test]
    fn test_cap_lies_in_base_plane() {
        let cone = Cone::new(
            Point3::new(0.0, 4.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            2.0,
            Color::BLUE,
            10,
        )
        .unwrap();
        let cap = &cone.triangles()[..10];
        for t in cap {
            for v in t.vertices() {
                assert!((v.y - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_rejects_coincident_apex_and_base() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(
            Cone::new(p, p, 1.0, Color::WHITE, 8).unwrap_err(),
            ShapeError::CoincidentPoints {
                context: "cone apex and base center"
            }
        );
    }

    #[test]
    fn test_default_axis_agrees_with_explicit_circle() {
        let apex = Point3::new(0.0, 0.0, 1.0);
        let base = Point3::origin();
        let cone = Cone::with_defaults(apex, base, Color::WHITE).unwrap();
        let circle = Circle::new(
            base,
            1.0,
            Vector3::z(),
            Color::WHITE,
            Cone::DEFAULT_SEGMENTS,
        )
        .unwrap();
        // Same rim samples in the same order.
        for (a, b) in cone.vertices()[1..=Cone::DEFAULT_SEGMENTS]
            .iter()
            .zip(circle.rim())
        {
            assert!(approx_eq_point(a, b, 1e-6));
        }
    }
}
