//! # veccalc
//!
//! Vector algebra plus just enough vector calculus: n-dimensional vectors,
//! normalized angles, and numerically-differentiated divergence and curl for
//! any vector field you can write as a function.
//!
//! ## The Problem
//!
//! Given a field (a rule assigning a vector to every point in space), how
//! much does it flow outward at a point (divergence), and how much does it
//! rotate there (curl)? Neither needs a formula for the derivative: both are
//! built from a handful of field evaluations at slightly perturbed positions.
//!
//! ## Key Pieces
//!
//! | Item | Use Case | Cost per call |
//! |------|----------|---------------|
//! | [`Vector`] | immutable n-dimensional arithmetic | O(n) |
//! | [`Angle`] | radians normalized to `[0, 2π)` | O(1) |
//! | [`VectorField`] | anything `&Vector -> Vector` | - |
//! | [`divergence`] | local outflow, `Σᵢ ∂fᵢ/∂xᵢ` | 2n+1 field evals |
//! | [`curl`] | local rotation (3-D) | 12 field evals |
//! | [`Differentiator`] | same operators, custom step | - |
//!
//! ## Quick Start
//!
//! ```rust
//! use veccalc::{curl, divergence, Vector};
//!
//! // Rigid rotation about the z-axis: f(p) = (-y, x, 0).
//! let f = |p: &Vector| Vector::xyz(-p.y(), p.x(), 0.0);
//! let p = Vector::xyz(1.0, 2.0, 0.5);
//!
//! let d = divergence(&f, &p).unwrap();
//! let c = curl(&f, &p).unwrap();
//!
//! assert!(d.abs() < 1e-9); // rotation neither compresses nor expands
//! assert!((c.z() - 2.0).abs() < 1e-9); // and spins at twice the angular rate
//! ```
//!
//! ## What Can Go Wrong
//!
//! 1. **Step size**: the default `δ = 1e-3` suits fields with O(1) scales.
//!    Too small a step loses digits to cancellation in `f₂ − f₁`; too large
//!    a step loses accuracy to truncation. Tune via [`Differentiator::new`].
//! 2. **Dimension mismatch**: [`divergence`] requires the field's output
//!    dimension to equal the position's; you get an [`Error`], not a silent
//!    zero.
//! 3. **Zero vectors**: normalizing a zero-magnitude vector is an [`Error`],
//!    not NaN.
//! 4. **Mixed dimensions**: arithmetic zero-extends the shorter operand by
//!    convention; only *direct* indexed replacement is range-checked.
//! 5. **Operand order**: [`Vector::difference`]`(a, b)` is `b − a` (the
//!    displacement from `a` to `b`); the `-` operator is the conventional
//!    order.

use thiserror::Error;

pub mod angle;
pub mod field;
pub mod vector;

pub use angle::Angle;
pub use field::{
    curl, divergence, partial, Differentiator, PointSource, VectorField, DEFAULT_DELTA,
};
pub use vector::Vector;

/// Vector-algebra and field-calculus error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Cross product on an operand above three dimensions.
    #[error("cross product requires operands of dimension <= 3, got {0} and {1}")]
    CrossDimension(usize, usize),

    /// Angle extraction on a vector that is not 2-dimensional.
    #[error("angle is defined for 2-dimensional vectors only, got dimension {0}")]
    AngleDimension(usize),

    /// Direct component replacement outside the declared dimension.
    #[error("component index {0} out of range for dimension {1}")]
    IndexOutOfRange(usize, usize),

    /// Normalization or unit-vector construction on a zero-magnitude vector.
    #[error("cannot normalize a vector of zero magnitude")]
    ZeroMagnitude,

    /// Field output dimension differs from the position dimension.
    #[error("field output dimension {0} does not match position dimension {1}")]
    FieldDimensionMismatch(usize, usize),

    /// Curl at a position above three dimensions.
    #[error("curl requires a position of dimension <= 3, got {0}")]
    CurlDimension(usize),

    /// Finite-difference step that is not positive and finite.
    #[error("finite-difference step must be positive and finite, got {0}")]
    InvalidDelta(f64),
}

/// Result type for vector and field operations.
pub type Result<T> = std::result::Result<T, Error>;
