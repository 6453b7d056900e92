use std::time::Instant;

use crate::simulation::engine::step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Sphere, System};
use crate::simulation::vectors::NVec3;

/// Helper to build a System of size `n` with deterministic placements
fn make_system(n: usize) -> System {
    let mut spheres = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos().abs() * 5.0 + 0.2,
            (i_f * 0.07).sin() * 5.0,
        );
        let v = NVec3::new((i_f * 0.29).cos(), (i_f * 0.11).sin(), (i_f * 0.17).cos());

        let sphere = Sphere::new(x, v, 0.1, 1.0, String::from("bench"))
            .expect("bench sphere construction is infallible");
        spheres.push(sphere);
    }

    System { spheres, t: 0.0 }
}

/// Helper to build the shared benchmark parameters
fn make_params() -> Parameters {
    Parameters {
        gravity: 1.0,
        h0: 0.05,
        frame_count: 600,
        half_extent: 10.0,
        speed: 5.0,
        seed: Some(42),
    }
}

/// Time one full frame step (integration sweep + pair sweep) over a range
/// of system sizes
pub fn bench_step() {
    // Different system sizes to test
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 10; // frames per timing sample

    for n in ns {
        let mut sys = make_system(n);
        let params = make_params();

        // Warm up
        if step(&mut sys, &params).is_err() {
            println!("N = {n:5}, degenerate state, skipping");
            continue;
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            if step(&mut sys, &params).is_err() {
                break;
            }
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, frame step = {per_step:8.6} s");
    }
}

/// Benchmark the frame step for a dense range of n
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    // Steps of 50 to give a smoother graph
    for n in (50..=1600).step_by(50) {
        // Small n: average over more frames to smooth noise
        let steps = if n <= 400 { 20 } else { 5 };

        let mut sys = make_system(n);
        let params = make_params();

        // Warm-up one step
        if step(&mut sys, &params).is_err() {
            continue;
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            if step(&mut sys, &params).is_err() {
                break;
            }
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
