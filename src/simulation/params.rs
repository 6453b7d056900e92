//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravity magnitude and fixed step size,
//! - number of frames to run,
//! - box half-extent on x and z (the floor sits at y = 0, no ceiling),
//! - initial speed scale and optional random seed for sphere placement

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gravity: f64, // gravity magnitude, pulls along -y
    pub h0: f64, // step size
    pub frame_count: usize, // total frames to simulate
    pub half_extent: f64, // box half width on x and z
    pub speed: f64, // initial speed given to each sampled velocity direction
    pub seed: Option<u64>, // deterministic seed; None draws a fresh one per run
}
