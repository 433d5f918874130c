use std::ops;

use super::{tuple::Tuple, vector::Vector};
use crate::{
    approx_eq::ApproxEq,
    error::{MathError, MathResult},
};

type Row = [f64; 4];

/// Row-major 4x4 matrix acting on homogeneous column tuples.
#[derive(Debug, Clone, Copy)]
pub struct Matrix {
    rows: [Row; 4],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

fn dot(row: &Row, column: [f64; 4]) -> f64 {
    row.iter().zip(column).map(|(a, b)| a * b).sum()
}

fn homogeneous<T: Tuple>(t: &T) -> [f64; 4] {
    [t.x(), t.y(), t.z(), t.w()]
}

impl Matrix {
    pub fn new(rows: [Row; 4]) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::new([[0.; 4]; 4])
    }

    pub fn identity() -> Self {
        Self::scaling(1., 1., 1.)
    }

    /// Affine matrix whose linear block has the given columns.
    pub fn from_columns(x: Vector, y: Vector, z: Vector, translation: Vector) -> Self {
        let mut m = Self::new([x, y, z, translation].map(|v| homogeneous(&v))).transpose();
        m[(3, 3)] = 1.;
        m
    }

    fn column(&self, col: usize) -> [f64; 4] {
        self.rows.map(|row| row[col])
    }

    pub fn transpose(&self) -> Self {
        Self::new([0, 1, 2, 3].map(|col| self.column(col)))
    }

    /// `self^T * rhs` without building the transpose.
    pub fn mul_transposed<T: Tuple>(&self, rhs: T) -> T {
        let t = homogeneous(&rhs);
        let [x, y, z] = [0, 1, 2].map(|col| dot(&self.column(col), t));
        T::new(x, y, z)
    }

    /// Gauss-Jordan elimination with partial pivoting.
    pub fn inverse(&self) -> MathResult<Matrix> {
        let mut left = self.rows;
        let mut right = Self::identity().rows;

        for col in 0..4 {
            let pivot_row = (col..4)
                .max_by(|&a, &b| left[a][col].abs().total_cmp(&left[b][col].abs()))
                .unwrap_or(col);
            left.swap(col, pivot_row);
            right.swap(col, pivot_row);

            let pivot = left[col][col];
            if pivot.approx_eq(&0.) || !pivot.is_finite() {
                return Err(MathError::SingularMatrix);
            }
            left[col] = left[col].map(|v| v / pivot);
            right[col] = right[col].map(|v| v / pivot);

            let (pivot_left, pivot_right) = (left[col], right[col]);
            for row in (0..4).filter(|&row| row != col) {
                let factor = left[row][col];
                if factor == 0. {
                    continue;
                }
                for c in 0..4 {
                    left[row][c] -= pivot_left[c] * factor;
                    right[row][c] -= pivot_right[c] * factor;
                }
            }
        }

        Ok(Self::new(right))
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
        let mut m = Self::identity();
        m[(0, 3)] = x;
        m[(1, 3)] = y;
        m[(2, 3)] = z;
        m
    }

    pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
        let diagonal = [x, y, z, 1.];
        let mut m = Self::empty();
        for (i, value) in diagonal.into_iter().enumerate() {
            m[(i, i)] = value;
        }
        m
    }

    pub fn rotation_x(radians: f64) -> Matrix {
        Self::rotation(radians, Vector::new(1., 0., 0.))
    }

    pub fn rotation_y(radians: f64) -> Matrix {
        Self::rotation(radians, Vector::new(0., 1., 0.))
    }

    pub fn rotation_z(radians: f64) -> Matrix {
        Self::rotation(radians, Vector::new(0., 0., 1.))
    }

    /// Rodrigues rotation around `axis`, which must be unit length.
    #[rustfmt::skip]
    pub fn rotation(radians: f64, axis: Vector) -> Matrix {
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        let (sin, cos) = radians.sin_cos();
        let t = 1. - cos;
        Matrix::new([
            [t * x * x + cos,     t * x * y - sin * z, t * x * z + sin * y, 0.],
            [t * x * y + sin * z, t * y * y + cos,     t * y * z - sin * x, 0.],
            [t * x * z - sin * y, t * y * z + sin * x, t * z * z + cos,     0.],
            [0.,                  0.,                  0.,                  1.],
        ])
    }
}

impl ApproxEq for Matrix {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| a.approx_eq_epsilon(b, epsilon))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.rows[row][col]
    }
}

impl ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.rows[row][col]
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        let columns = [0, 1, 2, 3].map(|col| rhs.column(col));
        Matrix::new(self.rows.map(|row| columns.map(|column| dot(&row, column))))
    }
}

impl ops::Mul for Matrix {
    type Output = Self;

    fn mul(self, rhs: Matrix) -> Self {
        &self * &rhs
    }
}

/// Applies the matrix to a tuple; the homogeneous `w` decides whether translation applies.
impl<T: Tuple> ops::Mul<T> for &Matrix {
    type Output = T;

    fn mul(self, rhs: T) -> T {
        let t = homogeneous(&rhs);
        let [x, y, z] = [0, 1, 2].map(|row| dot(&self.rows[row], t));
        T::new(x, y, z)
    }
}

impl<T: Tuple> ops::Mul<T> for Matrix {
    type Output = T;

    #[allow(clippy::op_ref)]
    fn mul(self, rhs: T) -> T {
        &self * rhs
    }
}
