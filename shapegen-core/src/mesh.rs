/// Mesh primitives shared by every shape builder
use nalgebra::{Point3, Vector3};

/// A flat RGB color with channels normalized to 0.0..=1.0.
///
/// Normalization happens once at the input edge: renderers and shape
/// builders always see 0-1 floats, and byte-range input goes through
/// [`Color::from_rgb8`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert byte-range channels (0-255) to the normalized form.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// The channels as a float array, handy for vertex buffers.
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// A triangle face defined by three vertex positions and a flat color.
///
/// Immutable after construction. Every builder in this crate winds its
/// triangles counter-clockwise when viewed from the outside of the shape
/// (equivalently, from the side its surface normal points to).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3<f32>; 3],
    color: Color,
}

impl Triangle {
    pub fn new(v1: Point3<f32>, v2: Point3<f32>, v3: Point3<f32>, color: Color) -> Self {
        Self {
            vertices: [v1, v2, v3],
            color,
        }
    }

    pub fn vertices(&self) -> &[Point3<f32>; 3] {
        &self.vertices
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Calculate the face normal from the winding order.
    ///
    /// Unit length for non-degenerate triangles; the builders never emit
    /// degenerate ones.
    pub fn normal(&self) -> Vector3<f32> {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];
        edge1.cross(&edge2).normalize()
    }

    /// The arithmetic mean of the three vertices.
    pub fn centroid(&self) -> Point3<f32> {
        let sum = self.vertices[0].coords + self.vertices[1].coords + self.vertices[2].coords;
        Point3::from(sum / 3.0)
    }
}

/// An ordered collection of colored triangles.
///
/// Insertion order is generation order, which is stable and meaningful for
/// debugging but carries no contract for consumers.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Move every triangle of `other` to the end of this mesh.
    pub fn append(&mut self, other: &mut Mesh) {
        self.triangles.append(&mut other.triangles);
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }
}

impl IntoIterator for Mesh {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}
