/// Vector helpers shared by the shape builders
use nalgebra::{Point3, Vector3};

use crate::error::ShapeError;

/// Threshold below which a length is treated as zero, and the default
/// tolerance for approximate comparisons.
pub const EPSILON: f32 = 1e-6;

/// Scale `v` to the exact length `len`.
///
/// This is the checked form of the usual normalize-then-scale chain: a
/// vector of near-zero length has no direction to preserve, so it is
/// rejected instead of producing NaN components.
pub fn try_normalize_to(
    v: Vector3<f32>,
    len: f32,
    context: &'static str,
) -> Result<Vector3<f32>, ShapeError> {
    let norm = v.norm();
    if norm <= EPSILON {
        return Err(ShapeError::DegenerateVector { context });
    }
    Ok(v * (len / norm))
}

/// Unit-length form of [`try_normalize_to`].
pub fn try_normalize(
    v: Vector3<f32>,
    context: &'static str,
) -> Result<Vector3<f32>, ShapeError> {
    try_normalize_to(v, 1.0, context)
}

/// Derive two orthonormal vectors spanning the plane orthogonal to `normal`.
///
/// A seed vector guaranteed non-parallel to the normal is obtained by
/// nudging the normal's z component by one, then two cross products yield
/// the in-plane pair. The returned basis `(u, v)` together with the unit
/// normal forms a right-handed frame: `u x v` points along `normal`.
/// Consequently a fan emitted as `(center, rim[i], rim[i+1])` over points
/// sampled at increasing angle faces the `+normal` side.
pub fn plane_basis(
    normal: Vector3<f32>,
) -> Result<(Vector3<f32>, Vector3<f32>), ShapeError> {
    let n = try_normalize(normal, "plane basis normal")?;

    // The z nudge only fails when n is parallel to the z axis; an x nudge
    // covers that case.
    let seed = Vector3::new(n.x, n.y, n.z + 1.0);
    let u = match try_normalize(n.cross(&seed), "plane basis seed") {
        Ok(u) => u,
        Err(_) => {
            let seed = Vector3::new(n.x + 1.0, n.y, n.z);
            try_normalize(n.cross(&seed), "plane basis seed")?
        }
    };
    let v = n.cross(&u);

    Ok((u, v))
}

/// Componentwise approximate equality of two vectors using an absolute
/// difference, so the comparison is symmetric in its arguments.
pub fn approx_eq_vec(a: &Vector3<f32>, b: &Vector3<f32>, eps: f32) -> bool {
    (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps && (a.z - b.z).abs() < eps
}

/// Componentwise approximate equality of two points.
pub fn approx_eq_point(a: &Point3<f32>, b: &Point3<f32>, eps: f32) -> bool {
    approx_eq_vec(&a.coords, &b.coords, eps)
}
