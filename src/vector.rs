//! Immutable n-dimensional vectors.
//!
//! A [`Vector`] is an ordered, fixed-length sequence of `f64` components.
//! Every operation returns a new value; nothing mutates in place.
//!
//! # Mixed dimensions
//!
//! Arithmetic between vectors of different dimensions follows a single
//! convention, **zero-extension**: components past a vector's declared
//! dimension read as `0`. Sums take the larger dimension, dot products the
//! shared prefix. Reading an out-of-range component is therefore never an
//! error, but *writing* one is: [`Vector::replace_component`] rejects
//! indices outside the declared dimension.

use ndarray::{Array1, ArrayView1};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use crate::angle::Angle;
use crate::{Error, Result};

/// An immutable n-dimensional vector of `f64` components.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    comps: Array1<f64>,
}

/// Combine two vectors component-wise under zero-extension; the result has
/// the larger of the two dimensions.
fn zip_extended(a: &Vector, b: &Vector, f: impl Fn(f64, f64) -> f64) -> Vector {
    let dim = a.dim().max(b.dim());
    Vector {
        comps: Array1::from_shape_fn(dim, |i| f(a.component(i), b.component(i))),
    }
}

impl Vector {
    /// A 2-D vector from its components.
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            comps: Array1::from(vec![x, y]),
        }
    }

    /// A 3-D vector from its components.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            comps: Array1::from(vec![x, y, z]),
        }
    }

    /// A 2-D vector from a magnitude and a direction:
    /// `(m cos θ, m sin θ)`.
    pub fn polar(magnitude: f64, theta: Angle) -> Self {
        Self::xy(magnitude * theta.cos(), magnitude * theta.sin())
    }

    /// The zero vector of the given dimension.
    pub fn zero(dim: usize) -> Self {
        Self {
            comps: Array1::zeros(dim),
        }
    }

    /// The component at `index`, or `0.0` past the declared dimension
    /// (zero-extension).
    pub fn component(&self, index: usize) -> f64 {
        if index < self.comps.len() {
            self.comps[index]
        } else {
            0.0
        }
    }

    /// The x (first) component.
    pub fn x(&self) -> f64 {
        self.component(0)
    }

    /// The y (second) component.
    pub fn y(&self) -> f64 {
        self.component(1)
    }

    /// The z (third) component.
    pub fn z(&self) -> f64 {
        self.component(2)
    }

    /// The declared dimension.
    pub fn dim(&self) -> usize {
        self.comps.len()
    }

    /// A read-only view of the components.
    pub fn components(&self) -> ArrayView1<'_, f64> {
        self.comps.view()
    }

    /// The components as a freshly allocated `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.comps.to_vec()
    }

    /// The Euclidean norm `√(Σ cᵢ²)`.
    pub fn magnitude(&self) -> f64 {
        self.comps.dot(&self.comps).sqrt()
    }

    /// The direction of a 2-D vector as an [`Angle`] (`atan2(y, x)`,
    /// normalized into `[0, 2π)`).
    ///
    /// Errors with [`Error::AngleDimension`] for any other dimension; a
    /// heading is only meaningful in the plane.
    pub fn angle(&self) -> Result<Angle> {
        if self.dim() != 2 {
            return Err(Error::AngleDimension(self.dim()));
        }
        Ok(Angle::new(self.component(1).atan2(self.component(0))))
    }

    /// This vector scaled by `s`.
    pub fn scale(&self, s: f64) -> Vector {
        Vector {
            comps: &self.comps * s,
        }
    }

    /// The difference of two vectors, **note the operand order**:
    /// `difference(a, b)` is `b − a`, the displacement *from* `a` *to* `b`.
    ///
    /// The [`Sub`] operator is the conventional `self − rhs`; this named form
    /// reads as "how to get from `a` to `b`". Mixed dimensions zero-extend.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veccalc::Vector;
    ///
    /// let a = Vector::xy(1.0, 0.0);
    /// let b = Vector::xy(3.0, 4.0);
    /// assert_eq!(Vector::difference(&a, &b), Vector::xy(2.0, 4.0));
    /// assert_eq!(a.clone() - b.clone(), Vector::xy(-2.0, -4.0));
    /// ```
    pub fn difference(a: &Vector, b: &Vector) -> Vector {
        zip_extended(b, a, |x, y| x - y)
    }

    /// The dot product over the shared prefix of components; components past
    /// the shorter vector's dimension contribute `0`.
    pub fn dot(&self, other: &Vector) -> f64 {
        let n = self.dim().min(other.dim());
        (0..n).map(|i| self.comps[i] * other.comps[i]).sum()
    }

    /// The 3-D cross product. Operands of dimension below 3 are
    /// zero-extended; operands of dimension above 3 error with
    /// [`Error::CrossDimension`] rather than being silently truncated.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if self.dim() > 3 || other.dim() > 3 {
            return Err(Error::CrossDimension(self.dim(), other.dim()));
        }
        let (a, b) = (self, other);
        Ok(Vector::xyz(
            a.component(1) * b.component(2) - a.component(2) * b.component(1),
            a.component(2) * b.component(0) - a.component(0) * b.component(2),
            a.component(0) * b.component(1) - a.component(1) * b.component(0),
        ))
    }

    /// The unit vector in this vector's direction.
    ///
    /// Errors with [`Error::ZeroMagnitude`] on the zero vector instead of
    /// dividing by zero and propagating NaN.
    pub fn normalized(&self) -> Result<Vector> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(Error::ZeroMagnitude);
        }
        Ok(self.scale(1.0 / mag))
    }

    /// The Euclidean distance between two position vectors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veccalc::Vector;
    ///
    /// let d = Vector::distance(&Vector::xy(0.0, 0.0), &Vector::xy(3.0, 4.0));
    /// assert_eq!(d, 5.0);
    /// ```
    pub fn distance(p: &Vector, q: &Vector) -> f64 {
        Vector::difference(p, q).magnitude()
    }

    /// The unit vector pointing from position `p` toward position `q`.
    ///
    /// Errors with [`Error::ZeroMagnitude`] when the positions coincide.
    pub fn unit_toward(p: &Vector, q: &Vector) -> Result<Vector> {
        Vector::difference(p, q).normalized()
    }

    /// A copy of this vector with the component at `index` replaced by
    /// `value`.
    ///
    /// Unlike zero-extension *reads*, replacement addresses the declared
    /// components directly, so `index >= dim` errors with
    /// [`Error::IndexOutOfRange`]. This is the perturbation primitive the
    /// finite-difference engine is built on.
    pub fn replace_component(&self, index: usize, value: f64) -> Result<Vector> {
        if index >= self.dim() {
            return Err(Error::IndexOutOfRange(index, self.dim()));
        }
        let mut comps = self.comps.clone();
        comps[index] = value;
        Ok(Vector { comps })
    }

    /// This vector zero-extended to dimension `dim` (a no-op copy when
    /// already at least that large). Makes the implicit read convention an
    /// explicit value.
    pub fn extended(&self, dim: usize) -> Vector {
        if dim <= self.dim() {
            return self.clone();
        }
        Vector {
            comps: Array1::from_shape_fn(dim, |i| self.component(i)),
        }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(comps: Vec<f64>) -> Self {
        Self {
            comps: Array1::from(comps),
        }
    }
}

impl From<&[f64]> for Vector {
    fn from(comps: &[f64]) -> Self {
        Self {
            comps: Array1::from(comps.to_vec()),
        }
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(comps: [f64; N]) -> Self {
        Self {
            comps: Array1::from(comps.to_vec()),
        }
    }
}

impl From<Array1<f64>> for Vector {
    fn from(comps: Array1<f64>) -> Self {
        Self { comps }
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            comps: iter.into_iter().collect(),
        }
    }
}

/// Component-wise sum; the result has the larger operand's dimension.
impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        zip_extended(&self, &rhs, |a, b| a + b)
    }
}

/// Component-wise difference in the conventional order, `self − rhs`
/// (contrast [`Vector::difference`]).
impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        zip_extended(&self, &rhs, |a, b| a - b)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

/// Sum of arbitrarily many vectors under zero-extension. The identity is the
/// 0-dimensional vector, so an empty sum is well-defined.
impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::zero(0), Add::add)
    }
}

impl<'a> Sum<&'a Vector> for Vector {
    fn sum<I: Iterator<Item = &'a Vector>>(iter: I) -> Vector {
        iter.fold(Vector::zero(0), |acc, v| zip_extended(&acc, v, |a, b| a + b))
    }
}

/// Parenthesized, comma-separated component list, e.g. `(1, 2.5, 0)`.
/// Presentational only; there is no parsing round-trip.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.comps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
