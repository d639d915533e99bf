//! The Kepler solver: mean anomaly to eccentric anomaly, true anomaly
//! and orbital radius.
//!
//! Kepler's equation `M = E - e sin(E)` has no closed-form inverse, so
//! the eccentric anomaly is found by Newton–Raphson iteration. Everything
//! downstream of it (true anomaly, radius) is closed-form.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    keplers_equation, keplers_equation_derivative, ConvergenceError, Error,
    InvalidElementsError, OrbitalElements, MAX_KEPLER_ITERS,
};

/// The solved anomalies and orbital radius for one time sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnomalySample {
    /// The eccentric anomaly, in radians.
    ///
    /// Feed this back as the seed of the next sample when walking a
    /// time grid; successive samples are close together and the solver
    /// converges in very few iterations from the previous solution.
    pub eccentric_anomaly: f64,

    /// The true anomaly, in radians.
    ///
    /// The angle at the focus between the periapsis direction and the
    /// body's position.
    pub true_anomaly: f64,

    /// The orbital radius, in length units.
    pub radius: f64,
}

/// Solves Kepler's equation `M = E - e sin(E)` for the eccentric
/// anomaly.
///
/// Newton–Raphson iteration: `E <- E - (E - e sin(E) - M) / (1 - e cos(E))`,
/// stopping once successive guesses differ by no more than `tolerance`
/// radians.
///
/// # Seeding
/// `seed` is the starting guess. Pass the eccentric anomaly solved for
/// the previous sample of a time grid to converge in one or two
/// iterations; pass `None` at the start of a pass (or for an isolated
/// solve) to start from the mean anomaly itself. Never carry a seed
/// across unrelated orbits.
///
/// # Errors
/// Returns a [`ConvergenceError`] if the tolerance is not reached within
/// [`MAX_KEPLER_ITERS`] iterations. This can happen for eccentricities
/// pathologically close to 1, or for tolerances tighter than
/// floating-point precision allows.
///
/// # Unchecked Operation
/// This function does not range-check `eccentricity` or `tolerance`;
/// the callers in this crate validate them first. Calling it directly
/// with `e >= 1` produces nonsensical results.
pub fn solve_kepler(
    mean_anomaly: f64,
    eccentricity: f64,
    tolerance: f64,
    seed: Option<f64>,
) -> Result<f64, ConvergenceError> {
    let mut eccentric_anomaly = seed.unwrap_or(mean_anomaly);

    for _ in 0..MAX_KEPLER_ITERS {
        let delta = keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity)
            / keplers_equation_derivative(eccentric_anomaly, eccentricity);

        eccentric_anomaly -= delta;

        if delta.abs() <= tolerance {
            return Ok(eccentric_anomaly);
        }
    }

    Err(ConvergenceError {
        mean_anomaly,
        eccentricity,
        iterations: MAX_KEPLER_ITERS,
    })
}

/// Gets the true anomaly at a given eccentric anomaly, in radians.
///
/// Uses the quadrant-safe two-argument form
/// `f = 2 atan2(sqrt(1 + e) sin(E/2), sqrt(1 - e) cos(E/2))` rather than
/// the textbook `2 atan(sqrt((1+e)/(1-e)) tan(E/2))`, whose `tan(E/2)`
/// blows up at `E = pi` (apoapsis) even though the limit is well
/// defined. The two agree everywhere else.
pub fn true_anomaly_at_eccentric_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly * 0.5;
    let y = (1.0 + eccentricity).sqrt() * half.sin();
    let x = (1.0 - eccentricity).sqrt() * half.cos();
    2.0 * y.atan2(x)
}

/// Gets the orbital radius at a given true anomaly, in length units.
///
/// `r = p / (1 + e cos(f))`, where `p = h^2 / mu = a(1 - e^2)` is the
/// semi-latus rectum.
#[inline]
pub fn radius_at_true_anomaly(
    true_anomaly: f64,
    semi_latus_rectum: f64,
    eccentricity: f64,
) -> f64 {
    semi_latus_rectum / (1.0 + eccentricity * true_anomaly.cos())
}

/// Solves the full anomaly chain for a given time since periapsis
/// passage.
///
/// Computes the mean anomaly `M = n t`, inverts Kepler's equation for
/// the eccentric anomaly (seeded as described in [`solve_kepler`]), and
/// derives the true anomaly and radius.
///
/// # Errors
/// - [`Error::InvalidElements`] if the elements fail
///   [`validate`][OrbitalElements::validate] or `tolerance` is not
///   positive, before any iteration runs.
/// - [`Error::Convergence`] if the Newton iteration stalls on this
///   sample.
pub fn sample_at_time(
    elements: &OrbitalElements,
    t: f64,
    tolerance: f64,
    seed: Option<f64>,
) -> Result<AnomalySample, Error> {
    elements.validate()?;
    if !(tolerance > 0.0) {
        return Err(InvalidElementsError::ToleranceNotPositive(tolerance).into());
    }

    let mean_anomaly = elements.mean_anomaly_at_time(t);
    let eccentric_anomaly = solve_kepler(mean_anomaly, elements.eccentricity, tolerance, seed)?;
    let true_anomaly = true_anomaly_at_eccentric_anomaly(eccentric_anomaly, elements.eccentricity);
    let radius = radius_at_true_anomaly(
        true_anomaly,
        elements.semi_latus_rectum(),
        elements.eccentricity,
    );

    Ok(AnomalySample {
        eccentric_anomaly,
        true_anomaly,
        radius,
    })
}
