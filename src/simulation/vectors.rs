//! Vector type and sampling helpers for the simulation
//!
//! The crate-wide vector type is `NVec3`, an alias for nalgebra's
//! `Vector3<f64>`. Arithmetic, dot products, norms, and exact
//! component-wise equality all come from nalgebra; this module adds
//! - a fallible `normalized` (zero-magnitude input is an error, not a
//!   silent zero vector),
//! - uniform sampling in an axis-aligned box,
//! - uniform sampling on the unit sphere surface.

use nalgebra::Vector3;
use rand::Rng;
use std::f64::consts::TAU;

use crate::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

/// Unit vector along `v`, or `DivisionByZero` if `|v| == 0`.
///
/// The zero check is exact. Callers decide how to handle the degenerate
/// case; nothing is clamped or substituted here.
pub fn normalized(v: &NVec3) -> SimResult<NVec3> {
    let mag = v.norm();
    if mag == 0.0 {
        return Err(SimError::DivisionByZero);
    }
    Ok(*v / mag)
}

/// Uniform random point on the surface of the unit sphere.
///
/// Azimuth is uniform in [0, 2pi). The polar angle is acos of a uniform
/// draw from [-1, 1], so cos(phi) is uniform and the points are uniform
/// over the surface area. Sampling phi itself uniformly would cluster
/// points at the poles.
pub fn random_on_sphere(rng: &mut impl Rng) -> NVec3 {
    let theta = rng.gen_range(0.0..TAU); // azimuth
    let phi = f64::acos(rng.gen_range(-1.0..=1.0)); // polar angle

    // Spherical -> Cartesian on the unit sphere
    NVec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

/// Uniform random point inside the box spanned by `min` and `max`.
/// Each axis is sampled independently.
pub fn random_in_box(rng: &mut impl Rng, min: &NVec3, max: &NVec3) -> NVec3 {
    NVec3::new(
        rng.gen_range(min.x..max.x),
        rng.gen_range(min.y..max.y),
        rng.gen_range(min.z..max.z),
    )
}
