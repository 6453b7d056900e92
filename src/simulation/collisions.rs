//! Impulse-based sphere-sphere collision resolution
//!
//! Detects interpenetration between two spheres and resolves it with a
//! perfectly elastic impulse along the contact normal plus a positional
//! correction. The system-level sweep visits every unordered pair
//! `(i, j)` with `i < j` exactly once per frame, in collection order;
//! updates land in place, so later pairs see the corrections applied by
//! earlier pairs in the same frame.

use super::states::{Sphere, System};
use super::vectors::normalized;
use crate::error::SimResult;

/// Restitution coefficient; collisions are perfectly elastic.
const RESTITUTION: f64 = 1.0;

/// Small outward bias added to the positional correction so a resolved
/// pair sits just past tangency instead of re-triggering detection at
/// exact contact on the next frame.
const OVERLAP_BIAS: f64 = 1e-4;

/// Detect and resolve interpenetration between `a` and `b`.
///
/// No-op when the spheres are not overlapping, or when they are already
/// separating along the contact normal (in that case the residual overlap
/// is deliberately left for a later frame). Coincident centers make the
/// contact normal undefined and surface as `DivisionByZero`.
pub fn resolve_pair(a: &mut Sphere, b: &mut Sphere) -> SimResult<()> {
    let min_dist = a.radius() + b.radius();
    let dist = (a.x - b.x).norm();

    if dist >= min_dist {
        return Ok(());
    }

    // Contact normal points from a toward b
    let normal = normalized(&(b.x - a.x))?;

    let relative_velocity = b.v - a.v;
    let velocity_along_normal = relative_velocity.dot(&normal);
    if velocity_along_normal > 0.0 {
        return Ok(());
    }

    // Impulse scalar from relative speed along the normal and both masses
    let j = -(1.0 + RESTITUTION) * velocity_along_normal / (1.0 / a.mass() + 1.0 / b.mass());

    // Push the centers apart, half each way, so the pair no longer
    // interpenetrates. The split ignores the mass ratio.
    let overlap = (min_dist - dist) + OVERLAP_BIAS;
    a.x -= normal * (overlap / 2.0);
    b.x += normal * (overlap / 2.0);

    // Apply the impulse, scaled by each body's inverse mass
    a.v -= normal * (j / a.mass());
    b.v += normal * (j / b.mass());

    Ok(())
}

/// Resolve every unordered pair once, in collection order.
pub fn resolve_collisions(sys: &mut System) -> SimResult<()> {
    let n = sys.spheres.len();

    // Loop over each unordered pair (i, j) with i < j
    for i in 0..n {
        // Split so sphere i and every j > i can be borrowed mutably at once
        let (head, tail) = sys.spheres.split_at_mut(i + 1);
        let a = &mut head[i];

        for b in tail.iter_mut() {
            resolve_pair(a, b)?;
        }
    }

    Ok(())
}
