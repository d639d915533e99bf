//! The perifocal→inertial frame transform.
//!
//! The perifocal (PQW) frame is aligned with the orbit: P points at
//! periapsis, Q is 90 degrees ahead in the direction of motion, and R is
//! the orbit normal. Three elementary rotations orient it relative to
//! the inertial frame: the argument of periapsis about the orbit normal,
//! the inclination about the line of nodes, and the right ascension of
//! the ascending node about the reference Z axis.

use glam::DMat3;

/// Builds the rotation mapping perifocal-frame coordinates to the
/// inertial frame.
///
/// Composed as `Rz(-W) * Rx(-i) * Rz(-w)`, where `Rx` and `Rz` are the
/// standard right-handed elementary rotations, `i` is the inclination,
/// `w` the argument of periapsis and `W` the right ascension of the
/// ascending node. Matrices compose by multiplication with the rightmost
/// factor acting first, so a perifocal column vector is mapped to the
/// inertial frame by left-multiplication with the result.
///
/// The composition order matters; rotation composition is not
/// commutative.
///
/// All angles are in degrees. The result is orthonormal for any real
/// inputs, so the inverse transform is simply its transpose.
///
/// # Example
/// ```
/// use glam::{DMat3, DVec3};
///
/// use orbit_trace::perifocal_to_inertial;
///
/// // No tilt at all: the frames coincide
/// let rot = perifocal_to_inertial(0.0, 0.0, 0.0);
/// assert_eq!(rot, DMat3::IDENTITY);
///
/// // A rotation never changes a vector's length
/// let rot = perifocal_to_inertial(63.4, 270.0, 45.0);
/// let v = rot * DVec3::new(3.0, 4.0, 0.0);
/// assert!((v.length() - 5.0).abs() < 1e-12);
/// ```
pub fn perifocal_to_inertial(inclination: f64, arg_pe: f64, long_asc_node: f64) -> DMat3 {
    let i = inclination.to_radians();
    let w = arg_pe.to_radians();
    let node = long_asc_node.to_radians();

    DMat3::from_rotation_z(-node) * DMat3::from_rotation_x(-i) * DMat3::from_rotation_z(-w)
}
