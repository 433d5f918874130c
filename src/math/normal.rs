use std::ops;

use super::{tuple::Tuple, vector::Vector};
use crate::{approx_eq::ApproxEq, error::MathResult};

/// Surface normal. Kept apart from [`Vector`] because it transforms with the
/// inverse transpose rather than the forward matrix.
#[derive(Copy, Clone, Debug, Default)]
pub struct Normal {
    x: f64,
    y: f64,
    z: f64,
}

impl Tuple for Normal {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Normal { x, y, z }
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }

    fn w(&self) -> f64 {
        0.
    }
}

impl Normal {
    pub fn as_vector(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }

    pub fn dot(&self, rhs: Vector) -> f64 {
        self.as_vector().dot(rhs)
    }

    pub fn magnitude(&self) -> f64 {
        self.as_vector().magnitude()
    }

    pub fn normalize(&self) -> MathResult<Self> {
        self.as_vector().normalize().map(Self::from)
    }

    /// Flips the normal so that it points against `direction`.
    pub fn face_forward(&self, direction: Vector) -> Self {
        if self.dot(direction) > 0. { -*self } else { *self }
    }
}

impl From<Vector> for Normal {
    fn from(v: Vector) -> Self {
        Self::new(v.x(), v.y(), v.z())
    }
}

impl ApproxEq for Normal {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.as_vector()
            .approx_eq_epsilon(&other.as_vector(), epsilon)
    }
}

impl PartialEq for Normal {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add for Normal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl ops::Neg for Normal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl ops::Mul<f64> for Normal {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
