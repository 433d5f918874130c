use std::ops::{self, Index};

use super::{
    normal::Normal,
    point::Point,
    tuple::{Axis, Tuple},
};
use crate::{
    approx_eq::ApproxEq,
    error::{MathError, MathResult},
};

/// Direction or displacement in 3D, `w = 0`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector([f64; 3]);

impl Tuple for Vector {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Vector([x, y, z])
    }

    fn x(&self) -> f64 {
        self.0[0]
    }

    fn y(&self) -> f64 {
        self.0[1]
    }

    fn z(&self) -> f64 {
        self.0[2]
    }

    fn w(&self) -> f64 {
        0.
    }
}

impl Index<Axis> for Vector {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        &self.0[axis as usize]
    }
}

impl Vector {
    pub fn zero() -> Self {
        Self([0.; 3])
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }

    fn zip_with(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let [a, b] = [self.0, rhs.0];
        Self([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2])])
    }

    pub fn dot(&self, rhs: Self) -> f64 {
        self.0.iter().zip(rhs.0).map(|(a, b)| a * b).sum()
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.dot(*self)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector with the same direction; zero and non-finite vectors have none.
    pub fn normalize(&self) -> MathResult<Self> {
        match self.magnitude() {
            len if len == 0. || !len.is_finite() => Err(MathError::ZeroLengthVector),
            len => Ok(*self / len),
        }
    }

    pub fn cross(&self, rhs: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }

    /// Mirror image of `self` about the plane with the given `normal`.
    pub fn reflect(&self, normal: Normal) -> Self {
        let normal = normal.as_vector();
        *self - normal * (2. * self.dot(normal))
    }
}

impl ApproxEq for Vector {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self[axis].approx_eq_epsilon(&other[axis], epsilon))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add<Point> for Vector {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        rhs + self
    }
}

impl ops::Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl ops::Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl ops::Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl ops::Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.map(|a| a * rhs)
    }
}

impl ops::Div<f64> for Vector {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.map(|a| a / rhs)
    }
}
