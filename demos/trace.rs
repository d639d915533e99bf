//! Traces one full period of an eccentric Earth orbit and prints the
//! inertial-frame samples as CSV.

use std::io::{self, Write};

use orbit_trace::{OrbitalElements, Sampling};

fn main() {
    // rp = 2054.8 km, ra = 8219.2 km, T just over an hour
    let elements = OrbitalElements::around_earth(5137.0, 0.6, 28.5, 90.0, 45.0);
    let sampling = Sampling::new(elements.period() / 256.0);

    eprintln!(
        "Orbit: rp = {:.1} km, ra = {:.1} km, T = {:.1} s",
        elements.periapsis(),
        elements.apoapsis(),
        elements.period(),
    );
    eprintln!(
        "Specific angular momentum: {}",
        elements.specific_angular_momentum().unwrap()
    );

    let points = orbit_trace::trajectory(&elements, &sampling).unwrap();

    let mut lock = io::stdout().lock();
    writeln!(&mut lock, "t,x,y,z").unwrap();
    for (k, point) in points.iter().enumerate() {
        let t = k as f64 * sampling.time_step;
        writeln!(
            &mut lock,
            "{t:.3},{:.3},{:.3},{:.3}",
            point.x, point.y, point.z
        )
        .unwrap();
    }
}
