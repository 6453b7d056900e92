//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with spheres at t = 0)
//!
//! Each configured sphere spawns at a uniform random point inside the box
//! and gets a uniform random velocity direction scaled by the configured
//! speed. A configured seed makes the placement reproducible; without one
//! every run draws fresh entropy.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::error::{SimError, SimResult};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Sphere, System};
use crate::simulation::vectors::{random_in_box, random_on_sphere, NVec3};

/// A fully-initialized simulation scenario.
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the parameters and the sphere collection in its initial
/// state, ready to be driven frame by frame.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    /// Validate the configuration and sample the initial sphere states.
    ///
    /// Setup values that must be strictly positive (step size, half
    /// extent, every radius and mass) are rejected here, before the first
    /// frame can run.
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            gravity: p_cfg.gravity,
            h0: p_cfg.h0,
            frame_count: p_cfg.frame_count,
            half_extent: p_cfg.half_extent,
            speed: p_cfg.speed,
            seed: p_cfg.seed,
        };

        if parameters.h0 <= 0.0 {
            return Err(SimError::InvalidConfiguration {
                field: "h0",
                value: parameters.h0,
            });
        }
        if parameters.half_extent <= 0.0 {
            return Err(SimError::InvalidConfiguration {
                field: "half_extent",
                value: parameters.half_extent,
            });
        }

        let mut rng = match parameters.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Spawn volume: full box width on x and z, floor to wall height on y
        let h = parameters.half_extent;
        let spawn_min = NVec3::new(-h, 0.0, -h);
        let spawn_max = NVec3::new(h, h, h);

        // Spheres: map SphereConfig -> runtime Sphere with sampled state
        let spheres = cfg
            .spheres
            .iter()
            .map(|sc| {
                Sphere::new(
                    random_in_box(&mut rng, &spawn_min, &spawn_max),
                    parameters.speed * random_on_sphere(&mut rng),
                    sc.radius,
                    sc.mass,
                    sc.material.clone(),
                )
            })
            .collect::<SimResult<Vec<Sphere>>>()?;

        // Initial system state: spheres at t = 0
        let system = System { spheres, t: 0.0 };

        Ok(Self { parameters, system })
    }
}
