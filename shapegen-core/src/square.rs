/// Planar quad derived from a center, one corner, and a normal
use log::debug;
use nalgebra::{Point3, Vector3};

use crate::error::ShapeError;
use crate::math::{try_normalize, try_normalize_to, EPSILON};
use crate::mesh::{Color, Mesh, Triangle};

/// A square described by its center, one corner, and the plane normal.
///
/// The remaining corners are 90-degree rotations of the first about the
/// normal, produced by repeated cross products and re-scaled to the
/// corner's distance from the center. Corners are ordered counter-clockwise
/// viewed from the `+normal` side, and both triangles face that side.
#[derive(Debug, Clone)]
pub struct Square {
    vertices: Vec<Point3<f32>>,
    mesh: Mesh,
}

impl Square {
    pub fn new(
        center: Point3<f32>,
        corner: Point3<f32>,
        normal: Vector3<f32>,
        color: Color,
    ) -> Result<Self, ShapeError> {
        let first = corner - center;
        let size = first.norm();
        if size <= EPSILON {
            return Err(ShapeError::CoincidentPoints {
                context: "square corner and center",
            });
        }
        let n = try_normalize(normal, "square normal")?;

        // A corner with a component along the normal would make the
        // rotated ring non-planar; reject it instead of emitting a bent
        // quad.
        if first.dot(&n).abs() > 1e-4 * size {
            return Err(ShapeError::CornerOutOfPlane);
        }

        // Successive cross products with the unit normal rotate the corner
        // offset by 90 degrees; normalizing back to `size` sheds the
        // rounding drift of the chained products.
        let mut offsets = [first, Vector3::zeros(), Vector3::zeros(), Vector3::zeros()];
        for i in 1..4 {
            offsets[i] = try_normalize_to(n.cross(&offsets[i - 1]), size, "square corner")?;
        }
        let vertices: Vec<Point3<f32>> = offsets.iter().map(|o| center + o).collect();

        let mut mesh = Mesh::with_capacity(2);
        mesh.add_triangle(Triangle::new(vertices[0], vertices[1], vertices[2], color));
        mesh.add_triangle(Triangle::new(vertices[2], vertices[3], vertices[0], color));

        debug!("square: side {:.4}, 2 triangles", size * std::f32::consts::SQRT_2);
        Ok(Self { vertices, mesh })
    }

    /// The four corners, counter-clockwise viewed from the normal side.
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

    #[test]
    fn test_axis_aligned_square() {
        let square = Square::new(
            Point3::origin(),
            Point3::new(1.0, 1.0, 0.0),
            Vector3::z(),
            Color::WHITE,
        )
        .unwrap();

        let expected = [
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
        ];
        for (v, e) in square.vertices().iter().zip(&expected) {
            assert!(approx_eq_point(v, e, 1e-5), "got {:?}, expected {:?}", v, e);
        }
        assert_eq!(square.triangles().len(), 2);
    }

    #[test]
    fn test_corners_equidistant_from_center() {
        let center = Point3::new(2.0, -1.0, 4.0);
        let corner = Point3::new(2.0, 2.0, 4.0);
        let square = Square::new(center, corner, Vector3::z(), Color::RED).unwrap();
        let size = (corner - center).norm();
        for v in square.vertices() {
            assert!(((v - center).norm() - size).abs() < 1e-4);
        }
    }

    #[test]
    fn test_triangles_face_the_normal() {
        let normal = Vector3::new(1.0, 1.0, 0.0);
        // Corner offset orthogonal to the normal.
        let square = Square::new(
            Point3::origin(),
            Point3::new(0.0, 0.0, 1.0),
            normal,
            Color::GREEN,
        )
        .unwrap();
        for t in square.triangles() {
            assert!(t.normal().dot(&normal) > 0.0);
        }
    }

    #[test]
    fn test_adjacent_sides_are_equal_and_orthogonal() {
        let square = Square::new(
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Vector3::new(-1.0, 0.0, 1.0),
            Color::BLUE,
        )
        .unwrap();
        let v = square.vertices();
        let side_a = v[1] - v[0];
        let side_b = v[2] - v[1];
        assert!((side_a.norm() - side_b.norm()).abs() < 1e-4);
        assert!(side_a.dot(&side_b).abs() < 1e-4);
    }

    #[test]
    fn test_rejects_degenerate_inputs() {
        let c = Point3::origin();
        assert!(matches!(
            Square::new(c, c, Vector3::z(), Color::WHITE),
            Err(ShapeError::CoincidentPoints { .. })
        ));
        assert!(matches!(
            Square::new(c, Point3::new(1.0, 0.0, 0.0), Vector3::zeros(), Color::WHITE),
            Err(ShapeError::DegenerateVector { .. })
        ));
        // Corner with a component along the normal.
        assert_eq!(
            Square::new(c, Point3::new(1.0, 0.0, 1.0), Vector3::z(), Color::WHITE).unwrap_err(),
            ShapeError::CornerOutOfPlane
        );
    }
}
