//! # Keplerian Orbit Tracing
//! This library crate computes the trajectory of a body in a Keplerian
//! (two-body, unperturbed) orbit, along with the orbital-geometry values
//! a visualization layer typically needs: the specific-angular-momentum
//! vector and the perifocal→inertial frame transform.
//!
//! A Keplerian orbit is fully described by its classical orbital elements;
//! no time stepping or numerical integration is involved. For every time
//! sample the crate solves Kepler's equation for the eccentric anomaly,
//! derives the true anomaly and orbital radius from it, and places the
//! point in the perifocal (orbit-plane) frame. A single rotation built
//! from the inclination, argument of periapsis and right ascension of the
//! ascending node then re-expresses the whole point set in the inertial
//! frame.
//!
//! Only bound elliptical orbits are supported (`0 <= e < 1`). Hyperbolic
//! and parabolic trajectories, perturbations (J2, drag, third-body) and
//! orbit determination are out of scope.
//!
//! ## Getting started
//! The crate's surface is small:
//! - [`OrbitalElements`]: the classical elements of one orbit, plus the
//!   scalar quantities derived from them (period, mean motion, apsis
//!   radii, angular-momentum magnitude).
//! - [`trajectory`]: samples one full orbital period and returns the
//!   body's inertial-frame position history.
//! - [`perifocal_to_inertial`]: the standalone frame transform, also
//!   usable without generating any points.
//! - [`OrbitalElements::specific_angular_momentum`]: the orbit-normal
//!   angular-momentum vector in the inertial frame.
//!
//! Every operation is a pure function of its inputs: no shared state, no
//! I/O, no interior mutability. Two calls with identical inputs produce
//! bit-identical output, and concurrent callers need no locking.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//!
//! use orbit_trace::{OrbitalElements, Sampling};
//!
//! # fn main() {
//! // A perfectly circular orbit of radius 1 around a unit-mu body
//! let elements = OrbitalElements::default();
//! let points = orbit_trace::trajectory(&elements, &Sampling::new(1.0)).unwrap();
//!
//! // The first sample is always at periapsis, on the perifocal X axis
//! assert_eq!(points[0], DVec3::new(1.0, 0.0, 0.0));
//! # }
//! ```

#![warn(missing_docs)]

mod elements;
pub mod solver;
pub mod transform;
mod trajectory;

use core::fmt;
use std::error::Error as StdError;

pub use elements::OrbitalElements;
pub use solver::AnomalySample;
pub use trajectory::{trajectory, Sampling};
pub use transform::perifocal_to_inertial;

/// The standard gravitational parameter of Earth, in km^3 s^-2.
///
/// This is the default `mu` used by [`OrbitalElements::around_earth`].
/// All other lengths of such an orbit are then in kilometers and all
/// times in seconds.
pub const EARTH_MU: f64 = 398600.4415;

/// The default convergence tolerance for the Kepler solver, in radians.
///
/// The Newton iteration for the eccentric anomaly stops once successive
/// guesses differ by no more than this.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// The maximum number of Newton iterations for the Kepler solver.
///
/// This is used to prevent infinite loops in case the iteration fails to
/// converge, which can happen for eccentricities pathologically close
/// to 1 or tolerances tighter than floating-point precision allows.
/// Exceeding the cap surfaces as a [`ConvergenceError`].
pub const MAX_KEPLER_ITERS: u32 = 100;

/// An error describing why a set of orbital elements or sampling
/// parameters was rejected.
///
/// Every variant carries the offending value. Validation happens before
/// any iteration begins, so a rejected input never reaches the solver.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidElementsError {
    /// The semi-major axis must be positive for a bound orbit.
    SemiMajorAxisNotPositive(f64),

    /// The eccentricity must lie in `[0, 1)`.
    ///
    /// Parabolic (`e = 1`) and hyperbolic (`e > 1`) trajectories are not
    /// supported by this crate.
    EccentricityOutOfRange(f64),

    /// The gravitational parameter must be positive.
    MuNotPositive(f64),

    /// The sampling time step must be positive.
    TimeStepNotPositive(f64),

    /// The solver convergence tolerance must be positive.
    ToleranceNotPositive(f64),
}

impl fmt::Display for InvalidElementsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidElementsError::SemiMajorAxisNotPositive(a) => {
                write!(f, "semi-major axis must be positive, got {a}")
            }
            InvalidElementsError::EccentricityOutOfRange(e) => {
                write!(f, "eccentricity must be in [0, 1), got {e}")
            }
            InvalidElementsError::MuNotPositive(mu) => {
                write!(f, "gravitational parameter must be positive, got {mu}")
            }
            InvalidElementsError::TimeStepNotPositive(dt) => {
                write!(f, "time step must be positive, got {dt}")
            }
            InvalidElementsError::ToleranceNotPositive(tol) => {
                write!(f, "convergence tolerance must be positive, got {tol}")
            }
        }
    }
}

impl StdError for InvalidElementsError {}

/// An error describing a Kepler-solver convergence failure for one
/// time sample.
///
/// The Newton iteration for the eccentric anomaly did not reach the
/// requested tolerance within [`MAX_KEPLER_ITERS`] iterations. The
/// computation is deterministic, so retrying with the same inputs
/// reproduces the same failure; the caller has to loosen the tolerance
/// or adjust the elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvergenceError {
    /// The mean anomaly the solver was trying to invert, in radians.
    pub mean_anomaly: f64,
    /// The eccentricity of the orbit being solved.
    pub eccentricity: f64,
    /// The number of iterations performed before giving up.
    pub iterations: u32,
}

impl fmt::Display for ConvergenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Kepler solver failed to converge after {} iterations (M = {} rad, e = {})",
            self.iterations, self.mean_anomaly, self.eccentricity
        )
    }
}

impl StdError for ConvergenceError {}

/// Any error the trajectory generator can surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// The orbital elements or sampling parameters were rejected
    /// up front.
    InvalidElements(InvalidElementsError),
    /// The Kepler solver stalled on one of the time samples.
    Convergence(ConvergenceError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidElements(e) => e.fmt(f),
            Error::Convergence(e) => e.fmt(f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidElements(e) => Some(e),
            Error::Convergence(e) => Some(e),
        }
    }
}

impl From<InvalidElementsError> for Error {
    fn from(e: InvalidElementsError) -> Self {
        Error::InvalidElements(e)
    }
}

impl From<ConvergenceError> for Error {
    fn from(e: ConvergenceError) -> Self {
        Error::Convergence(e)
    }
}


#[inline]
fn keplers_equation(mean_anomaly: f64, eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - (eccentricity * eccentric_anomaly.sin()) - mean_anomaly
}
#[inline]
fn keplers_equation_derivative(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    1.0 - (eccentricity * eccentric_anomaly.cos())
}
