use std::ops;

use crate::approx_eq::ApproxEq;

/// 2D point used for surface uv coordinates and film/sampler positions.
#[derive(Copy, Clone, Debug, Default)]
pub struct Point2 {
    pub u: f64,
    pub v: f64,
}

impl Point2 {
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    pub fn is_in_unit_square(&self) -> bool {
        (0.0..=1.).contains(&self.u) && (0.0..=1.).contains(&self.v)
    }
}

impl ApproxEq for Point2 {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.u.approx_eq_epsilon(&other.u, epsilon) && self.v.approx_eq_epsilon(&other.v, epsilon)
    }
}

impl PartialEq for Point2 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.u + rhs.u, self.v + rhs.v)
    }
}

impl ops::Mul<f64> for Point2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.u * rhs, self.v * rhs)
    }
}
