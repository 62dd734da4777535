//! Vector fields and finite-difference differential operators.
//!
//! A vector field is anything that maps a position to a vector: a closure,
//! or a type implementing [`VectorField`]. On top of that single
//! operation, [`Differentiator`] approximates partial derivatives by central
//! differences and composes them into divergence (the trace of the field's
//! local Jacobian) and curl (its antisymmetric part, in 3-D).
//!
//! Each operator costs a fixed, small number of field evaluations: 2 per
//! partial derivative, `2n` for an n-dimensional divergence, 12 for a curl.
//!
//! # Step size
//!
//! The perturbation `δ` trades truncation error (too large) against
//! floating-point cancellation in `f₂ − f₁` (too small). The central
//! difference is second-order accurate, so the default `δ = 1e-3` puts
//! truncation error near `1e-6` on well-scaled fields; pass a custom step to
//! [`Differentiator::new`] when the field's scale calls for it.

use crate::vector::Vector;
use crate::{Error, Result};

/// Default central-difference perturbation.
pub const DEFAULT_DELTA: f64 = 1e-3;

/// A vector field: a pure function from position vectors to vectors.
///
/// Implementations must be deterministic and side-effect free; the
/// differential operators evaluate the field several times per call and
/// assume every evaluation sees the same field.
pub trait VectorField {
    /// Evaluate the field at position `p`.
    fn value(&self, p: &Vector) -> Vector;
}

/// Any `Fn(&Vector) -> Vector` closure is a field.
impl<F> VectorField for F
where
    F: Fn(&Vector) -> Vector,
{
    fn value(&self, p: &Vector) -> Vector {
        self(p)
    }
}

/// An inverse-square radial field around a point source:
/// `strength · û / r²`, where `û` points from `center` toward the queried
/// position and `r` is the distance between them.
///
/// Positive `strength` pushes outward (a source), negative pulls inward (a
/// sink). Superpose several sources by summing their values in a closure.
#[derive(Debug, Clone)]
pub struct PointSource {
    /// Location of the source.
    pub center: Vector,
    /// Signed field strength.
    pub strength: f64,
}

impl PointSource {
    /// A point source of the given strength at `center`.
    pub fn new(center: Vector, strength: f64) -> Self {
        Self { center, strength }
    }
}

impl VectorField for PointSource {
    fn value(&self, p: &Vector) -> Vector {
        let r = Vector::distance(&self.center, p);
        match Vector::unit_toward(&self.center, p) {
            Ok(u) => u.scale(self.strength / (r * r)),
            // Probing the singularity itself: the direction is undefined, so
            // the field value is pinned to zero rather than NaN.
            Err(_) => Vector::zero(self.center.dim()),
        }
    }
}

/// Finite-difference engine: a central-difference step size and the
/// differential operators built on it.
///
/// `Differentiator::default()` uses [`DEFAULT_DELTA`].
#[derive(Debug, Clone, Copy)]
pub struct Differentiator {
    delta: f64,
}

impl Default for Differentiator {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
        }
    }
}

impl Differentiator {
    /// An engine with a custom perturbation step.
    ///
    /// Errors with [`Error::InvalidDelta`] unless `delta` is positive and
    /// finite.
    pub fn new(delta: f64) -> Result<Self> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(Error::InvalidDelta(delta));
        }
        Ok(Self { delta })
    }

    /// The configured perturbation step.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Central-difference partial derivative
    /// `∂ field_top / ∂ position_bottom` at `p`:
    ///
    /// \[
    /// \frac{f(p + \delta e_b)_t - f(p - \delta e_b)_t}{2\delta}
    /// \]
    ///
    /// `top` reads the field's output under zero-extension; `bottom` must
    /// address a declared component of `p`, else
    /// [`Error::IndexOutOfRange`].
    pub fn partial(
        &self,
        field: &impl VectorField,
        p: &Vector,
        top: usize,
        bottom: usize,
    ) -> Result<f64> {
        let center = p.component(bottom);
        let back = p.replace_component(bottom, center - self.delta)?;
        let forward = p.replace_component(bottom, center + self.delta)?;
        let f1 = field.value(&back).component(top);
        let f2 = field.value(&forward).component(top);
        Ok((f2 - f1) / (2.0 * self.delta))
    }

    /// Divergence of the field at `p`: the trace of the local Jacobian,
    /// `Σᵢ ∂fᵢ/∂xᵢ`.
    ///
    /// Defined only where the field's output dimension equals the position's;
    /// a mismatch errors with [`Error::FieldDimensionMismatch`] instead of
    /// quietly reporting zero outflow.
    pub fn divergence(&self, field: &impl VectorField, p: &Vector) -> Result<f64> {
        let out_dim = field.value(p).dim();
        if out_dim != p.dim() {
            return Err(Error::FieldDimensionMismatch(out_dim, p.dim()));
        }
        let mut sum = 0.0;
        for i in 0..p.dim() {
            sum += self.partial(field, p, i, i)?;
        }
        Ok(sum)
    }

    /// Curl of the field at `p`, as a 3-vector:
    ///
    /// \[
    /// (\partial_y f_z - \partial_z f_y,\;
    ///  \partial_z f_x - \partial_x f_z,\;
    ///  \partial_x f_y - \partial_y f_x)
    /// \]
    ///
    /// Positions of dimension below 3 are zero-extended before
    /// differentiation, so a planar field gets the usual scalar-curl-in-z
    /// reading. Positions above 3 dimensions error with
    /// [`Error::CurlDimension`]; curl has no standard vector form there.
    pub fn curl(&self, field: &impl VectorField, p: &Vector) -> Result<Vector> {
        if p.dim() > 3 {
            return Err(Error::CurlDimension(p.dim()));
        }
        let p = p.extended(3);
        let x = self.partial(field, &p, 2, 1)? - self.partial(field, &p, 1, 2)?;
        let y = self.partial(field, &p, 0, 2)? - self.partial(field, &p, 2, 0)?;
        let z = self.partial(field, &p, 1, 0)? - self.partial(field, &p, 0, 1)?;
        Ok(Vector::xyz(x, y, z))
    }
}

/// [`Differentiator::partial`] with the default step.
pub fn partial(field: &impl VectorField, p: &Vector, top: usize, bottom: usize) -> Result<f64> {
    Differentiator::default().partial(field, p, top, bottom)
}

/// [`Differentiator::divergence`] with the default step.
pub fn divergence(field: &impl VectorField, p: &Vector) -> Result<f64> {
    Differentiator::default().divergence(field, p)
}

/// [`Differentiator::curl`] with the default step.
pub fn curl(field: &impl VectorField, p: &Vector) -> Result<Vector> {
    Differentiator::default().curl(field, p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_one_thousandth() {
        assert_eq!(Differentiator::default().delta(), 1e-3);
    }

    #[test]
    fn new_rejects_bad_steps() {
        assert!(matches!(
            Differentiator::new(0.0),
            Err(Error::InvalidDelta(_))
        ));
        assert!(matches!(
            Differentiator::new(-1e-3),
            Err(Error::InvalidDelta(_))
        ));
        assert!(Differentiator::new(f64::NAN).is_err());
        assert!(Differentiator::new(f64::INFINITY).is_err());
        assert!(Differentiator::new(1e-5).is_ok());
    }

    #[test]
    fn partial_of_quadratic_is_exact() {
        // Central differences are exact (to rounding) on quadratics:
        // ((x+δ)² − (x−δ)²) / 2δ = 2x.
        let f = |p: &Vector| Vector::xy(p.x() * p.x(), 0.0);
        let d = partial(&f, &Vector::xy(3.0, 0.0), 0, 0).unwrap();
        assert!((d - 6.0).abs() < 1e-9, "got {}", d);
    }

    #[test]
    fn partial_mixed_indices() {
        // f_y = x·y, so ∂f_y/∂x = y.
        let f = |p: &Vector| Vector::xy(0.0, p.x() * p.y());
        let d = partial(&f, &Vector::xy(2.0, 5.0), 1, 0).unwrap();
        assert!((d - 5.0).abs() < 1e-9, "got {}", d);
    }

    #[test]
    fn partial_top_reads_zero_extended() {
        let f = |p: &Vector| Vector::xy(p.x(), p.y());
        // Component 5 of a 2-D output is 0 everywhere, so the derivative is 0.
        let d = partial(&f, &Vector::xy(1.0, 1.0), 5, 0).unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn partial_rejects_out_of_range_direction() {
        let f = |p: &Vector| p.clone();
        assert!(matches!(
            partial(&f, &Vector::xy(1.0, 1.0), 0, 2),
            Err(Error::IndexOutOfRange(2, 2))
        ));
    }

    #[test]
    fn divergence_of_identity_is_dimension() {
        let f = |p: &Vector| p.clone();
        let d = divergence(&f, &Vector::xy(0.3, -0.7)).unwrap();
        assert!((d - 2.0).abs() < 1e-9, "got {}", d);
    }

    #[test]
    fn divergence_rejects_dimension_mismatch() {
        let f = |_: &Vector| Vector::xyz(1.0, 2.0, 3.0);
        assert!(matches!(
            divergence(&f, &Vector::xy(0.0, 0.0)),
            Err(Error::FieldDimensionMismatch(3, 2))
        ));
    }

    #[test]
    fn curl_of_planar_rotation_points_along_z() {
        let f = |p: &Vector| Vector::xy(-p.y(), p.x());
        let c = curl(&f, &Vector::xy(0.4, 0.1)).unwrap();
        assert!(c.x().abs() < 1e-9 && c.y().abs() < 1e-9);
        assert!((c.z() - 2.0).abs() < 1e-9, "got {}", c.z());
    }

    #[test]
    fn curl_rejects_high_dimensional_positions() {
        let f = |p: &Vector| p.clone();
        let p = Vector::from(vec![1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(curl(&f, &p), Err(Error::CurlDimension(4))));
    }

    #[test]
    fn custom_step_changes_sampling() {
        // |x| is not differentiable at 0. From x = 0.25 a coarse stencil
        // straddles the kink and averages the two slopes; a fine one stays
        // on the smooth side and sees the true slope.
        let f = |p: &Vector| Vector::xy(p.x().abs(), 0.0);
        let coarse = Differentiator::new(0.5).unwrap();
        let d = coarse.partial(&f, &Vector::xy(0.25, 0.0), 0, 0).unwrap();
        assert!((d - 0.5).abs() < 1e-12, "got {}", d);
        let fine = Differentiator::new(1e-4).unwrap();
        let d = fine.partial(&f, &Vector::xy(0.25, 0.0), 0, 0).unwrap();
        assert!((d - 1.0).abs() < 1e-9, "got {}", d);
    }

    #[test]
    fn point_source_magnitude_follows_inverse_square() {
        let src = PointSource::new(Vector::xyz(0.0, 0.0, 0.0), 4.0);
        let v = src.value(&Vector::xyz(2.0, 0.0, 0.0));
        // strength / r² = 4 / 4 = 1, pointing outward along x.
        assert!((v.x() - 1.0).abs() < 1e-12);
        assert!(v.y().abs() < 1e-12 && v.z().abs() < 1e-12);
    }

    #[test]
    fn point_source_sink_points_inward() {
        let sink = PointSource::new(Vector::xy(0.0, 0.0), -1.0);
        let v = sink.value(&Vector::xy(3.0, 0.0));
        assert!(v.x() < 0.0);
    }

    #[test]
    fn point_source_is_zero_at_its_center() {
        let src = PointSource::new(Vector::xyz(1.0, 2.0, 3.0), 5.0);
        let v = src.value(&Vector::xyz(1.0, 2.0, 3.0));
        assert_eq!(v, Vector::zero(3));
    }
}
