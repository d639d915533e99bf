#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::DVec3;

use crate::{
    solver::{radius_at_true_anomaly, solve_kepler, true_anomaly_at_eccentric_anomaly},
    Error, InvalidElementsError, OrbitalElements, DEFAULT_TOLERANCE,
};

/// How to sample an orbit over one period.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sampling {
    /// The time between successive samples, in time units.
    /// Must be positive.
    pub time_step: f64,

    /// The Kepler-solver convergence tolerance, in radians.
    /// Must be positive.
    pub tolerance: f64,
}

impl Sampling {
    /// Creates a sampling with the given time step and the default
    /// solver tolerance ([`DEFAULT_TOLERANCE`][crate::DEFAULT_TOLERANCE]).
    pub fn new(time_step: f64) -> Sampling {
        Sampling {
            time_step,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Creates a sampling with an explicit solver tolerance.
    pub fn with_tolerance(time_step: f64, tolerance: f64) -> Sampling {
        Sampling {
            time_step,
            tolerance,
        }
    }

    /// Checks that both the time step and the tolerance are positive.
    pub fn validate(&self) -> Result<(), InvalidElementsError> {
        if !(self.time_step > 0.0) {
            return Err(InvalidElementsError::TimeStepNotPositive(self.time_step));
        }
        if !(self.tolerance > 0.0) {
            return Err(InvalidElementsError::ToleranceNotPositive(self.tolerance));
        }
        Ok(())
    }
}

/// Generates the body's full-period trajectory in the inertial frame.
///
/// The orbit is sampled at `t = 0, dt, 2dt, ...` up to and including the
/// orbital period, producing exactly `floor(T / dt) + 1` points in time
/// order. For each sample the Kepler solver yields the true anomaly and
/// radius, giving the perifocal-frame point
/// `(r cos f, r sin f, 0)`; the perifocal→inertial rotation is then
/// applied to every point.
///
/// The first point always corresponds to periapsis passage (`t = 0`,
/// `f = 0`, `r = a(1 - e)`). If the time step exceeds the period, the
/// result contains that single point.
///
/// The eccentric anomaly solved for each sample seeds the next one, so
/// the solver converges quickly along the grid; the seed never outlives
/// one call, and repeated calls with identical inputs return
/// bit-identical sequences. The returned vector is freshly allocated and
/// owned by the caller.
///
/// # Errors
/// - [`Error::InvalidElements`] if the elements or sampling parameters
///   are out of range; nothing is computed in that case.
/// - [`Error::Convergence`] if the Kepler solver stalls on any sample.
///
/// # Example
/// ```
/// use orbit_trace::{OrbitalElements, Sampling};
///
/// let elements = OrbitalElements::around_earth(5137.0, 0.6, 28.5, 90.0, 45.0);
/// let points = orbit_trace::trajectory(&elements, &Sampling::new(1.0)).unwrap();
///
/// let expected_len = (elements.period() / 1.0).floor() as usize + 1;
/// assert_eq!(points.len(), expected_len);
/// assert!((points[0].length() - elements.periapsis()).abs() < 1e-6);
/// ```
pub fn trajectory(elements: &OrbitalElements, sampling: &Sampling) -> Result<Vec<DVec3>, Error> {
    elements.validate()?;
    sampling.validate()?;

    let eccentricity = elements.eccentricity;
    let semi_latus_rectum = elements.semi_latus_rectum();
    let dt = sampling.time_step;

    // floor(T / dt) + 1 samples; zero full steps when dt > T
    let steps = (elements.period() / dt).floor() as usize;

    let mut points = Vec::with_capacity(steps + 1);
    let mut seed = None;

    for k in 0..=steps {
        let t = k as f64 * dt;
        let mean_anomaly = elements.mean_anomaly_at_time(t);
        let eccentric_anomaly =
            solve_kepler(mean_anomaly, eccentricity, sampling.tolerance, seed)?;
        seed = Some(eccentric_anomaly);

        let true_anomaly = true_anomaly_at_eccentric_anomaly(eccentric_anomaly, eccentricity);
        let radius = radius_at_true_anomaly(true_anomaly, semi_latus_rectum, eccentricity);

        let (sin_f, cos_f) = true_anomaly.sin_cos();
        points.push(DVec3::new(radius * cos_f, radius * sin_f, 0.0));
    }

    let rotation = elements.perifocal_to_inertial();
    for point in &mut points {
        *point = rotation * *point;
    }

    Ok(points)
}
