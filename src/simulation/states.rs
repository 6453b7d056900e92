//! Core state types for the bouncing-sphere simulation.
//!
//! Defines the per-body record (`Sphere`) and the world state (`System`):
//! - position and velocity are the only fields the kernel mutates,
//! - radius, mass, and the material tag are fixed at construction,
//! - the system holds the ordered sphere collection and the current time `t`.

use crate::error::{SimError, SimResult};
use crate::simulation::vectors::NVec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    radius: f64, // fixed for the sphere's lifetime
    mass: f64, // fixed for the sphere's lifetime
    material: String, // opaque tag for the renderer, never read by the physics
}

impl Sphere {
    /// Build a sphere, rejecting non-positive radius or mass before the
    /// simulation can start.
    pub fn new(x: NVec3, v: NVec3, radius: f64, mass: f64, material: String) -> SimResult<Self> {
        if radius <= 0.0 {
            return Err(SimError::InvalidConfiguration {
                field: "radius",
                value: radius,
            });
        }
        if mass <= 0.0 {
            return Err(SimError::InvalidConfiguration {
                field: "mass",
                value: mass,
            });
        }
        Ok(Self {
            x,
            v,
            radius,
            mass,
            material,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn material(&self) -> &str {
        &self.material
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub spheres: Vec<Sphere>, // collection order fixes the pair-resolution order
    pub t: f64, // time
}
