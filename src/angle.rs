//! Plane angles, stored normalized.
//!
//! An [`Angle`] always holds a radian value in `[0, 2π)`. Construction wraps
//! arbitrary inputs into that range, so two angles that differ by a whole
//! number of turns compare equal.

use std::f64::consts::TAU;
use std::fmt;

/// A plane angle in radians, normalized to `[0, 2π)` at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle {
    theta: f64,
}

impl Angle {
    /// Create an angle from a radian value, wrapping it into `[0, 2π)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veccalc::Angle;
    /// use std::f64::consts::PI;
    ///
    /// let a = Angle::new(-PI / 2.0);
    /// assert!((a.radians() - 3.0 * PI / 2.0).abs() < 1e-12);
    /// ```
    pub fn new(radians: f64) -> Self {
        Self {
            theta: Self::normalize(radians),
        }
    }

    /// Create an angle from a degree value, wrapping into `[0°, 360°)`.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::new(degrees.to_radians())
    }

    /// Wrap a radian value into `[0, 2π)`.
    ///
    /// Computed as `((θ mod 2π) + 2π) mod 2π`, which handles negative and
    /// multi-revolution inputs alike: `normalize(-π/2) = 3π/2`,
    /// `normalize(4π) = 0`.
    pub fn normalize(radians: f64) -> f64 {
        (radians % TAU + TAU) % TAU
    }

    /// The normalized radian value, in `[0, 2π)`.
    pub fn radians(self) -> f64 {
        self.theta
    }

    /// The normalized value in degrees, in `[0°, 360°)`.
    pub fn degrees(self) -> f64 {
        self.theta.to_degrees()
    }

    /// Sine of the angle.
    pub fn sin(self) -> f64 {
        self.theta.sin()
    }

    /// Cosine of the angle.
    pub fn cos(self) -> f64 {
        self.theta.cos()
    }

    /// Tangent of the angle.
    pub fn tan(self) -> f64 {
        self.theta.tan()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.theta)
    }
}
