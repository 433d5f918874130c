use std::ops;

use super::{matrix::Matrix, normal::Normal, point::Point, tuple::Tuple, vector::Vector};
use crate::{
    approx_eq::ApproxEq,
    error::{MathError, MathResult},
};

/// Affine transformation stored together with its inverse, so inverting is free.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transformation {
    matrix: Matrix,
    inverse: Matrix,
}

impl Transformation {
    fn from_pair(matrix: Matrix, inverse: Matrix) -> Self {
        Self { matrix, inverse }
    }

    pub fn identity() -> Self {
        Self::from_pair(Matrix::identity(), Matrix::identity())
    }

    /// Wraps an arbitrary matrix, computing the inverse by elimination.
    pub fn from_matrix(matrix: Matrix) -> MathResult<Self> {
        Ok(Self::from_pair(matrix, matrix.inverse()?))
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::from_pair(
            Matrix::translation(x, y, z),
            Matrix::translation(-x, -y, -z),
        )
    }

    pub fn scaling(x: f64, y: f64, z: f64) -> MathResult<Self> {
        if [x, y, z].iter().any(|f| f.approx_eq(&0.)) {
            return Err(MathError::SingularMatrix);
        }
        Ok(Self::from_pair(
            Matrix::scaling(x, y, z),
            Matrix::scaling(1. / x, 1. / y, 1. / z),
        ))
    }

    pub fn scaling_uniform(factor: f64) -> MathResult<Self> {
        Self::scaling(factor, factor, factor)
    }

    pub fn rotation_x(degrees: f64) -> Self {
        let m = Matrix::rotation_x(degrees.to_radians());
        Self::from_pair(m, m.transpose())
    }

    pub fn rotation_y(degrees: f64) -> Self {
        let m = Matrix::rotation_y(degrees.to_radians());
        Self::from_pair(m, m.transpose())
    }

    pub fn rotation_z(degrees: f64) -> Self {
        let m = Matrix::rotation_z(degrees.to_radians());
        Self::from_pair(m, m.transpose())
    }

    /// Rotation by `degrees` around an arbitrary `axis` through the origin.
    pub fn rotation(degrees: f64, axis: Vector) -> MathResult<Self> {
        let m = Matrix::rotation(degrees.to_radians(), axis.normalize()?);
        Ok(Self::from_pair(m, m.transpose()))
    }

    /// Camera-to-world transformation for a camera at `eye` looking at `target`.
    ///
    /// Camera space looks down -z with +x to the right and +y up.
    pub fn look_at(eye: Point, target: Point, up: Vector) -> MathResult<Self> {
        let forward = (target - eye)
            .normalize()
            .map_err(|_| MathError::CoincidentEyeTarget)?;
        let right = forward
            .cross(up)
            .normalize()
            .map_err(|_| MathError::DegenerateUpVector)?;
        let true_up = right.cross(forward);

        let matrix = Matrix::from_columns(right, true_up, -forward, eye.as_vector());
        // rotation part is orthonormal, so the inverse is its transpose followed by -eye
        let rotation_inv =
            Matrix::from_columns(right, true_up, -forward, Vector::zero()).transpose();
        let inverse = rotation_inv * Matrix::translation(-eye.x(), -eye.y(), -eye.z());

        Ok(Self::from_pair(matrix, inverse))
    }

    pub fn inverse(&self) -> Self {
        Self::from_pair(self.inverse, self.matrix)
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn inverse_matrix(&self) -> &Matrix {
        &self.inverse
    }

    /// Applies `self` first and `next` afterwards.
    pub fn then(&self, next: &Transformation) -> Self {
        *next * *self
    }

    pub fn translate(self, x: f64, y: f64, z: f64) -> Self {
        self.then(&Self::translation(x, y, z))
    }

    pub fn scale(self, x: f64, y: f64, z: f64) -> MathResult<Self> {
        Ok(self.then(&Self::scaling(x, y, z)?))
    }

    pub fn rotate_x(self, degrees: f64) -> Self {
        self.then(&Self::rotation_x(degrees))
    }

    pub fn rotate_y(self, degrees: f64) -> Self {
        self.then(&Self::rotation_y(degrees))
    }

    pub fn rotate_z(self, degrees: f64) -> Self {
        self.then(&Self::rotation_z(degrees))
    }
}

/// `a * b` applies `b` first, then `a`.
impl ops::Mul for Transformation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_pair(self.matrix * rhs.matrix, rhs.inverse * self.inverse)
    }
}

pub trait Transform: Sized {
    fn transform_new(&self, transformation: &Transformation) -> Self;

    fn transform(&mut self, transformation: &Transformation) {
        *self = self.transform_new(transformation);
    }
}

impl Transform for Point {
    fn transform_new(&self, transformation: &Transformation) -> Self {
        transformation.matrix() * *self
    }
}

impl Transform for Vector {
    fn transform_new(&self, transformation: &Transformation) -> Self {
        transformation.matrix() * *self
    }
}

/// Normals use the inverse transpose of the linear block. The result is not normalized.
impl Transform for Normal {
    fn transform_new(&self, transformation: &Transformation) -> Self {
        transformation.inverse_matrix().mul_transposed(*self)
    }
}


impl ApproxEq for Transformation {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.matrix.approx_eq_epsilon(&other.matrix, epsilon)
            && self.inverse.approx_eq_epsilon(&other.inverse, epsilon)
    }
}
