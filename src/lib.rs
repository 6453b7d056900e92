pub mod simulation;
pub mod configuration;
pub mod error;
pub mod benchmark;

pub use simulation::vectors::{normalized, random_in_box, random_on_sphere, NVec3};
pub use simulation::states::{Sphere, System};
pub use simulation::params::Parameters;
pub use simulation::integrator::{advance, euler_integrator};
pub use simulation::collisions::{resolve_collisions, resolve_pair};
pub use simulation::scenario::Scenario;
pub use simulation::engine::{run, step, FrameSink};

pub use configuration::config::{ParametersConfig, ScenarioConfig, SphereConfig};

pub use error::{SimError, SimResult};

pub use benchmark::benchmark::{bench_step, bench_step_curve};
