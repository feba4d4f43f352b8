/// Icosphere built by recursive subdivision of a regular icosahedron
use log::debug;
use nalgebra::{Point3, Vector3};

use crate::error::{check_radius, ShapeError};
use crate::mesh::{Color, Mesh, Triangle};

/// The golden ratio, which fixes the icosahedron vertex coordinates.
const PHI: f32 = 1.618_034;

/// The 20 faces of the icosahedron as index triples into [`base_vertices`],
/// wound counter-clockwise viewed from outside.
const FACES: [[usize; 3]; 20] = [
    [0, 2, 10],
    [0, 10, 5],
    [0, 5, 4],
    [0, 4, 8],
    [0, 8, 2],
    [3, 1, 11],
    [3, 11, 7],
    [3, 7, 6],
    [3, 6, 9],
    [3, 9, 1],
    [2, 6, 7],
    [2, 7, 10],
    [10, 7, 11],
    [10, 11, 5],
    [5, 11, 1],
    [5, 1, 4],
    [4, 1, 9],
    [4, 9, 8],
    [8, 9, 6],
    [8, 6, 2],
];

/// A sphere approximated by recursively subdividing icosahedron faces and
/// projecting every new vertex onto the sphere surface.
///
/// Triangle count is `20 * 4^depth`. Generation happens about the origin
/// and the result is translated to the requested center once at the end,
/// so before translation every vertex sits at exactly `radius` from the
/// origin, at any depth.
#[derive(Debug, Clone)]
pub struct Sphere {
    mesh: Mesh,
}

impl Sphere {
    pub const DEFAULT_RADIUS: f32 = 1.0;
    pub const DEFAULT_DEPTH: u32 = 4;
    /// Upper bound on the subdivision depth; one past it already means
    /// 20 * 4^9 (about 5M) triangles.
    pub const MAX_DEPTH: u32 = 8;

    /// Unit sphere at the default subdivision depth.
    pub fn with_defaults(center: Point3<f32>, color: Color) -> Result<Self, ShapeError> {
        Self::new(center, Self::DEFAULT_RADIUS, color, Self::DEFAULT_DEPTH)
    }

    pub fn new(
        center: Point3<f32>,
        radius: f32,
        color: Color,
        depth: u32,
    ) -> Result<Self, ShapeError> {
        check_radius(radius)?;
        if depth > Self::MAX_DEPTH {
            return Err(ShapeError::DepthLimit {
                depth,
                max: Self::MAX_DEPTH,
            });
        }

        let vertices = base_vertices(radius);
        let mut mesh = Mesh::with_capacity(20 * 4usize.pow(depth));
        for [a, b, c] in FACES {
            subdivide(
                &mut mesh,
                vertices[a],
                vertices[b],
                vertices[c],
                depth,
                radius,
                color,
            );
        }

        // Translate into place only after subdivision: projection to the
        // radius assumes origin-centered coordinates.
        let offset = center.coords;
        let mut translated = Mesh::with_capacity(mesh.len());
        for t in mesh.iter() {
            let [v1, v2, v3] = *t.vertices();
            translated.add_triangle(Triangle::new(
                v1 + offset,
                v2 + offset,
                v3 + offset,
                t.color(),
            ));
        }

        debug!("sphere: depth {}, {} triangles", depth, translated.len());
        Ok(Self { mesh: translated })
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

/// The 12 vertices of a regular icosahedron, projected onto the sphere of
/// the given radius.
///
/// The raw golden-ratio construction places them at distance
/// `sqrt(1 + phi^2) / 2` from the origin; a single uniform scale puts them
/// exactly on the sphere.
fn base_vertices(radius: f32) -> [Point3<f32>; 12] {
    let h = 0.5;
    let p = PHI / 2.0;
    let scale = radius / (h * h + p * p).sqrt();
    let v = |x: f32, y: f32, z: f32| Point3::from(Vector3::new(x, y, z) * scale);
    [
        v(h, 0.0, p),
        v(h, 0.0, -p),
        v(-h, 0.0, p),
        v(-h, 0.0, -p),
        v(p, h, 0.0),
        v(p, -h, 0.0),
        v(-p, h, 0.0),
        v(-p, -h, 0.0),
        v(0.0, p, h),
        v(0.0, p, -h),
        v(0.0, -p, h),
        v(0.0, -p, -h),
    ]
}

/// Recursively split a face into four, projecting each edge midpoint onto
/// the sphere. Depth 0 emits the face as-is.
fn subdivide(
    mesh: &mut Mesh,
    v1: Point3<f32>,
    v2: Point3<f32>,
    v3: Point3<f32>,
    depth: u32,
    radius: f32,
    color: Color,
) {
    if depth == 0 {
        mesh.add_triangle(Triangle::new(v1, v2, v3, color));
        return;
    }

    // Midpoints of a face inscribed in the sphere are never at the origin,
    // so the projection cannot divide by zero.
    let project = |a: Point3<f32>, b: Point3<f32>| -> Point3<f32> {
        let sum = a.coords + b.coords;
        Point3::from(sum * (radius / sum.norm()))
    };
    let v12 = project(v1, v2);
    let v23 = project(v2, v3);
    let v31 = project(v3, v1);

    subdivide(mesh, v1, v12, v31, depth - 1, radius, color);
    subdivide(mesh, v2, v23, v12, depth - 1, radius, color);
    subdivide(mesh, v3, v31, v23, depth - 1, radius, color);
    subdivide(mesh, v12, v23, v31, depth - 1, radius, color);
}
