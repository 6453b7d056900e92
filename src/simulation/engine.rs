//! Frame-stepping driver for a built scenario
//!
//! Runs the per-frame sequence: integrate every sphere, then resolve
//! every unordered pair once, then hand the resulting state to the
//! caller's `FrameSink`. The sink is the seam where scene serialization
//! and rendering live; the kernel never reads anything back from it.

use super::collisions::resolve_collisions;
use super::integrator::euler_integrator;
use super::params::Parameters;
use super::scenario::Scenario;
use super::states::System;
use crate::error::SimResult;

/// Receives the full sphere collection after each simulated frame.
///
/// Spheres arrive in collection order; position, radius, and material are
/// readable per sphere, which is everything an external serializer needs.
pub trait FrameSink {
    fn frame(&mut self, index: usize, system: &System);
}

/// Advance the system by one frame: every sphere is integrated, then
/// every unordered pair is resolved once in collection order.
pub fn step(sys: &mut System, params: &Parameters) -> SimResult<()> {
    euler_integrator(sys, params);
    resolve_collisions(sys)
}

/// Run `scenario` for its configured frame count, emitting each frame to
/// `sink`. A degenerate state error stops the run immediately.
pub fn run(scenario: &mut Scenario, sink: &mut dyn FrameSink) -> SimResult<()> {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario { parameters, system } = scenario;

    for i in 0..parameters.frame_count {
        step(system, parameters)?;
        sink.frame(i, system);
    }

    Ok(())
}
