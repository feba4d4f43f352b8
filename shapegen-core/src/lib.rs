/// ShapeGen Core Library - Parametric triangle-mesh generation
///
/// This library procedurally generates triangulated surface meshes for a
/// small catalogue of parametric shapes (circle, cone, square, cube,
/// cylinder, icosphere) from compact geometric descriptions plus a flat
/// color. The output is an ordered list of colored triangles; rendering,
/// persistence, and UI are external consumers.
///
/// All builders validate their inputs and wind triangles counter-clockwise
/// viewed from outside the shape.
pub mod circle;
pub mod cone;
pub mod cube;
pub mod cylinder;
pub mod error;
pub mod math;
pub mod mesh;
pub mod sphere;
pub mod square;

// Re-export commonly used types
pub use circle::Circle;
pub use cone::Cone;
pub use cube::Cube;
pub use cylinder::Cylinder;
pub use error::ShapeError;
pub use mesh::{Color, Mesh, Triangle};
pub use sphere::Sphere;
pub use square::Square;
