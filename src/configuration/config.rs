//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and box geometry
//! - [`SphereConfig`]     – fixed properties of each sphere
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   gravity: 1.0            # gravity magnitude, pulls along -y
//!   h0: 0.05                # fixed step size
//!   frame_count: 600        # total frames to simulate
//!   half_extent: 10.0       # box half width on x and z, floor at y = 0
//!   speed: 5.0              # initial speed scale
//!   seed: 42                # optional; omit for a fresh seed per run
//!
//! spheres:
//!   - radius: 1.0
//!     mass: 1.0
//!     material: "red"
//!   - radius: 1.0
//!     mass: 1.0
//!     material: "mirror"
//! ```
//!
//! Initial positions and velocities are not configured: each sphere spawns
//! at a uniform random point inside the box with a uniform random velocity
//! direction scaled by `speed`. Validation happens when the runtime
//! scenario is built, not here.

use serde::Deserialize;

/// Global numerical and geometric parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub gravity: f64,       // gravity magnitude
    pub h0: f64,            // time step size
    pub frame_count: usize, // total frames to run
    pub half_extent: f64,   // box half width on x and z
    pub speed: f64,         // initial speed scale for sampled velocities
    pub seed: Option<u64>,  // deterministic seed to make runs reproducible
}

/// Configuration for a single sphere's fixed properties
#[derive(Deserialize, Debug)]
pub struct SphereConfig {
    pub radius: f64,      // radius, also the wall/floor clearance
    pub mass: f64,        // mass used by the impulse model
    pub material: String, // opaque material tag carried through to the renderer
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and geometric parameters
    pub spheres: Vec<SphereConfig>,   // list of spheres to simulate
}
