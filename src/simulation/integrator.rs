//! Fixed-step time integration and box confinement
//!
//! Provides the per-sphere semi-implicit Euler step (velocity update
//! before position update) with elastic wall/floor reflection, and a
//! system-level sweep driven by `Parameters`

use super::params::Parameters;
use super::states::{Sphere, System};
use super::vectors::NVec3;

/// Advance the whole system by one step.
/// Every sphere is integrated and confined in collection order, then the
/// system time moves forward by `params.h0`.
pub fn euler_integrator(sys: &mut System, params: &Parameters) {
    for b in sys.spheres.iter_mut() {
        advance(b, params);
    }

    // Increment the system time by one full step
    sys.t += params.h0;
}

/// Advance one sphere by one step and keep it inside the box.
///
/// Semi-implicit Euler: the velocity picks up the gravity kick first, and
/// the position drifts with the already-updated velocity. Wall contact
/// reflects the matching velocity component with no energy loss.
pub fn advance(body: &mut Sphere, params: &Parameters) {
    let dt = params.h0; // time step dt

    // Kick: v_n+1 = v_n + a * dt, gravity pulls along -y
    body.v += dt * NVec3::new(0.0, -params.gravity, 0.0);

    // Drift: x_n+1 = x_n + dt * v_n+1
    body.x += dt * body.v;

    reflect_walls(body, params.half_extent);
}

/// Per-axis elastic reflection against the floor (y = 0) and the four
/// walls at +-`h` on x and z. The sphere's own radius is the clearance;
/// axes are decoupled, so each check stands alone. There is no ceiling.
fn reflect_walls(body: &mut Sphere, h: f64) {
    let r = body.radius();

    // Floor: clamp the center to one radius above y = 0 and flip v.y
    if body.x.y < r {
        body.x.y = r;
        body.v.y = -body.v.y;
    }

    // x walls
    if body.x.x < r - h {
        body.x.x = r - h;
        body.v.x = -body.v.x;
    } else if body.x.x > h - r {
        body.x.x = h - r;
        body.v.x = -body.v.x;
    }

    // z walls
    if body.x.z < r - h {
        body.x.z = r - h;
        body.v.z = -body.v.z;
    } else if body.x.z > h - r {
        body.x.z = h - r;
        body.v.z = -body.v.z;
    }
}
