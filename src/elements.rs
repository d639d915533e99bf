#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::{DMat3, DVec3};
use std::f64::consts::TAU;

use crate::{transform, InvalidElementsError, EARTH_MU};

/// The classical orbital elements of one bound elliptical orbit.
///
/// This is a plain value type: construction does not validate or compute
/// anything, and every derived quantity is recomputed on demand. Fallible
/// operations call [`validate`][OrbitalElements::validate] first, so
/// out-of-range elements are rejected before any iteration runs.
///
/// # Units
/// The crate does not enforce a unit system; it only requires the length
/// and time units to be consistent with `mu`. The conventional choice
/// (and the one [`around_earth`][OrbitalElements::around_earth] makes) is
/// kilometers, seconds and km^3 s^-2. Angles are always in degrees, as
/// supplied by the element sets this crate is meant to consume; they are
/// converted to radians internally.
///
/// # Example
/// ```
/// use orbit_trace::OrbitalElements;
///
/// // A 0.6-eccentricity orbit in Earth's equatorial plane
/// let elements = OrbitalElements::around_earth(5137.0, 0.6, 0.0, 0.0, 0.0);
///
/// assert!(elements.validate().is_ok());
/// assert_eq!(elements.periapsis(), 5137.0 * 0.4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalElements {
    /// The semi-major axis of the orbit, in length units.
    ///
    /// Half the longest diameter of the ellipse. Must be positive;
    /// degenerate and unbound orbits are rejected by
    /// [`validate`][OrbitalElements::validate].
    pub semi_major_axis: f64,

    /// The eccentricity of the orbit.
    ///
    /// `e = 0` is a circle, values approaching 1 are increasingly
    /// elongated ellipses. Must lie in `[0, 1)`; this crate does not
    /// handle parabolic or hyperbolic trajectories.
    ///
    /// See more: <https://en.wikipedia.org/wiki/Orbital_eccentricity>
    pub eccentricity: f64,

    /// The inclination of the orbit, in degrees.
    ///
    /// The angle between the orbital plane and the reference plane,
    /// measured at the ascending node.
    pub inclination: f64,

    /// The argument of periapsis of the orbit, in degrees.
    ///
    /// The in-plane angle from the ascending node to the periapsis
    /// direction, measured in the direction of motion.
    /// <https://en.wikipedia.org/wiki/Argument_of_periapsis>
    pub arg_pe: f64,

    /// The right ascension of the ascending node, in degrees.
    ///
    /// The angle from the reference X direction to the ascending node,
    /// measured in the reference plane.
    /// <https://en.wikipedia.org/wiki/Longitude_of_the_ascending_node>
    pub long_asc_node: f64,

    /// The gravitational parameter of the central body, `mu = GM`,
    /// in length^3 time^-2.
    pub mu: f64,
}

impl OrbitalElements {
    /// Creates a new `OrbitalElements` instance with the given values.
    ///
    /// Nothing is validated here; call
    /// [`validate`][OrbitalElements::validate] to check the invariants,
    /// or rely on the fallible operations doing so themselves.
    ///
    /// ### Parameters
    /// - `semi_major_axis`: The semi-major axis, in length units.
    /// - `eccentricity`: The eccentricity, in `[0, 1)`.
    /// - `inclination`: The inclination, in degrees.
    /// - `arg_pe`: The argument of periapsis, in degrees.
    /// - `long_asc_node`: The right ascension of the ascending node,
    ///   in degrees.
    /// - `mu`: The gravitational parameter, in length^3 time^-2.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        arg_pe: f64,
        long_asc_node: f64,
        mu: f64,
    ) -> OrbitalElements {
        OrbitalElements {
            semi_major_axis,
            eccentricity,
            inclination,
            arg_pe,
            long_asc_node,
            mu,
        }
    }

    /// Creates a new `OrbitalElements` instance around Earth.
    ///
    /// Identical to [`OrbitalElements::new`] with `mu` set to
    /// [`EARTH_MU`][crate::EARTH_MU]; lengths are then in kilometers and
    /// times in seconds.
    pub fn around_earth(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        arg_pe: f64,
        long_asc_node: f64,
    ) -> OrbitalElements {
        OrbitalElements::new(
            semi_major_axis,
            eccentricity,
            inclination,
            arg_pe,
            long_asc_node,
            EARTH_MU,
        )
    }

    /// Checks the numeric-range invariants of the elements.
    ///
    /// Rejects `a <= 0`, `e` outside `[0, 1)` and `mu <= 0`. NaN inputs
    /// fail these comparisons too and are rejected along the way.
    pub fn validate(&self) -> Result<(), InvalidElementsError> {
        if !(self.semi_major_axis > 0.0) {
            return Err(InvalidElementsError::SemiMajorAxisNotPositive(
                self.semi_major_axis,
            ));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(InvalidElementsError::EccentricityOutOfRange(
                self.eccentricity,
            ));
        }
        if !(self.mu > 0.0) {
            return Err(InvalidElementsError::MuNotPositive(self.mu));
        }
        Ok(())
    }

    /// Gets the periapsis radius of the orbit, `a(1 - e)`.
    ///
    /// The distance from the focus at the closest point of the orbit.
    /// This is also the radius of the first point of every generated
    /// trajectory, since sampling starts at periapsis passage.
    #[inline]
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Gets the apoapsis radius of the orbit, `a(1 + e)`.
    ///
    /// The distance from the focus at the farthest point of the orbit.
    #[inline]
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Gets the semi-latus rectum of the orbit, `p = a(1 - e^2)`.
    ///
    /// The orbital radius at 90 degrees of true anomaly; the radius
    /// equation reduces to `r = p / (1 + e cos f)`.
    #[inline]
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Gets the magnitude of the specific angular momentum,
    /// `h = sqrt(mu a (1 - e^2))`.
    ///
    /// Constant along the whole orbit. For the full inertial-frame
    /// vector, see
    /// [`specific_angular_momentum`][OrbitalElements::specific_angular_momentum].
    #[inline]
    pub fn angular_momentum(&self) -> f64 {
        (self.mu * self.semi_latus_rectum()).sqrt()
    }

    /// Gets the mean motion of the orbit, `n = sqrt(mu / a^3)`,
    /// in radians per time unit.
    #[inline]
    pub fn mean_motion(&self) -> f64 {
        (self.mu / self.semi_major_axis.powi(3)).sqrt()
    }

    /// Gets the orbital period, `T = 2 pi sqrt(a^3 / mu)`, in time units.
    #[inline]
    pub fn period(&self) -> f64 {
        TAU * (self.semi_major_axis.powi(3) / self.mu).sqrt()
    }

    /// Gets the mean anomaly at a given time since periapsis passage,
    /// `M = n t`, in radians.
    ///
    /// Grows without bound as `t` grows; the trigonometry downstream is
    /// periodic, so no explicit wrap is applied.
    #[inline]
    pub fn mean_anomaly_at_time(&self, t: f64) -> f64 {
        self.mean_motion() * t
    }

    /// Builds the rotation mapping this orbit's perifocal frame to the
    /// inertial frame.
    ///
    /// See [`perifocal_to_inertial`][transform::perifocal_to_inertial]
    /// for the composition; this method just feeds it the element
    /// angles.
    #[inline]
    pub fn perifocal_to_inertial(&self) -> DMat3 {
        transform::perifocal_to_inertial(self.inclination, self.arg_pe, self.long_asc_node)
    }

    /// Gets the specific-angular-momentum vector in the inertial frame.
    ///
    /// The vector sits along the orbit normal (the perifocal Z axis)
    /// with magnitude `h = sqrt(mu a (1 - e^2))`, rotated into the
    /// inertial frame. It is perpendicular to every point of the orbit;
    /// its direction encodes both the inclination and the ascending-node
    /// direction.
    ///
    /// # Errors
    /// Returns [`InvalidElementsError`] if `a`, `e` or `mu` are out of
    /// range.
    pub fn specific_angular_momentum(&self) -> Result<DVec3, InvalidElementsError> {
        self.validate()?;
        let h = self.angular_momentum();
        Ok(self.perifocal_to_inertial() * DVec3::new(0.0, 0.0, h))
    }
}

impl Default for OrbitalElements {
    /// Creates the elements of a unit orbit.
    ///
    /// The unit orbit is a perfect circle of radius 1 in the reference
    /// plane, around a body with a gravitational parameter of 1.
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 0.0, 1.0)
    }
}
