use std::ops::{self, Index};

use super::{
    tuple::{Axis, Tuple},
    vector::Vector,
};
use crate::approx_eq::ApproxEq;

#[derive(Copy, Clone, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Tuple for Point {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
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
        1.
    }
}

impl Index<Axis> for Point {
    type Output = f64;

    fn index(&self, index: Axis) -> &Self::Output {
        match index {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl Point {
    pub fn zero() -> Self {
        Self::new(0., 0., 0.)
    }

    /// Component-wise minimum.
    pub fn min(&self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    pub fn clamp(&self, lower: f64, upper: f64) -> Self {
        Self::new(
            self.x.clamp(lower, upper),
            self.y.clamp(lower, upper),
            self.z.clamp(lower, upper),
        )
    }

    pub fn as_vector(&self) -> Vector {
        *self - Self::zero()
    }
}

impl ApproxEq for Point {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.x.approx_eq_epsilon(&other.x, epsilon)
            && self.y.approx_eq_epsilon(&other.y, epsilon)
            && self.z.approx_eq_epsilon(&other.z, epsilon)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Self::Output {
        Self {
            x: self.x + rhs.x(),
            y: self.y + rhs.y(),
            z: self.z + rhs.z(),
        }
    }
}

impl ops::Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Self::Output {
        Self {
            x: self.x - rhs.x(),
            y: self.y - rhs.y(),
            z: self.z - rhs.z(),
        }
    }
}

impl ops::Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    fn point_minus_point_is_vector() {
        assert_approx_eq_low_prec!(
            Point::new(3., 2., 1.) - Point::new(5., 6., 7.),
            Vector::new(-2., -4., -6.)
        );
    }

    #[test]
    fn point_plus_and_minus_vector() {
        let p = Point::new(3., 2., 1.);
        let v = Vector::new(5., 6., 7.);
        assert_approx_eq_low_prec!(p + v, Point::new(8., 8., 8.));
        assert_approx_eq_low_prec!(p - v, Point::new(-2., -4., -6.));
    }

    #[test]
    fn component_wise_min_max() {
        let a = Point::new(1., 5., -3.);
        let b = Point::new(2., -1., 0.);
        assert_approx_eq_low_prec!(a.min(b), Point::new(1., -1., -3.));
        assert_approx_eq_low_prec!(a.max(b), Point::new(2., 5., 0.));
    }

    #[test]
    fn equality_absorbs_drift() {
        assert_eq!(Point::new(1., 2., 3.), Point::new(1. + 1e-12, 2., 3. - 1e-12));
        assert_ne!(Point::new(1., 2., 3.), Point::new(1.001, 2., 3.));
    }
}
