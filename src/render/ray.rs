use crate::{
    approx_eq::EPSILON,
    math::{
        point::Point,
        transform::{Transform, Transformation},
        tuple::Tuple,
        vector::Vector,
    },
};

/// Half-open ray segment: a parameter `t` is valid when `t_min <= t < t_max`.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    origin: Point,
    direction: Vector,
    /// Precomputed inverse of the direction vector
    /// to avoid division in the slab test
    dir_inv: Vector,
    t_min: f64,
    t_max: f64,
}

impl Transform for Ray {
    fn transform_new(&self, transformation: &Transformation) -> Self {
        Self::with_range(
            self.origin.transform_new(transformation),
            self.direction.transform_new(transformation),
            self.t_min,
            self.t_max,
        )
    }
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self::with_range(origin, direction, EPSILON, f64::INFINITY)
    }

    pub fn with_range(origin: Point, direction: Vector, t_min: f64, t_max: f64) -> Self {
        let dir_inv = Vector::new(1. / direction.x(), 1. / direction.y(), 1. / direction.z());
        Self {
            origin,
            direction,
            dir_inv,
            t_min,
            t_max,
        }
    }

    /// Same ray with the far end moved to `t_max`.
    pub fn with_t_max(&self, t_max: f64) -> Self {
        Self { t_max, ..*self }
    }

    pub fn position(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t < self.t_max
    }

    pub fn origin(&self) -> &Point {
        &self.origin
    }
    pub fn direction(&self) -> &Vector {
        &self.direction
    }
    pub fn dir_inv(&self) -> &Vector {
        &self.dir_inv
    }
    pub fn t_min(&self) -> f64 {
        self.t_min
    }
    pub fn t_max(&self) -> f64 {
        self.t_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{approx_eq::ApproxEq, assert_approx_eq_low_prec};

    #[test]
    fn position() {
        let ray = Ray::new(Point::new(2., 3., 4.), Vector::new(1., 0., 0.));

        assert_approx_eq_low_prec!(ray.position(0.), Point::new(2., 3., 4.));
        assert_approx_eq_low_prec!(ray.position(1.), Point::new(3., 3., 4.));
        assert_approx_eq_low_prec!(ray.position(-1.), Point::new(1., 3., 4.));
        assert_approx_eq_low_prec!(ray.position(2.5), Point::new(4.5, 3., 4.));
    }

    #[test]
    fn range_is_half_open() {
        let ray = Ray::with_range(Point::zero(), Vector::new(0., 0., 1.), 1., 5.);
        assert!(ray.contains(1.));
        assert!(ray.contains(4.999));
        assert!(!ray.contains(5.));
        assert!(!ray.contains(0.5));

        let shrunk = ray.with_t_max(2.);
        assert!(!shrunk.contains(2.));
        assert_eq!(shrunk.t_min(), 1.);
    }

    #[test]
    fn default_range_excludes_origin() {
        let ray = Ray::new(Point::zero(), Vector::new(1., 0., 0.));
        assert!(!ray.contains(0.));
        assert!(ray.contains(1e6));
        assert!(ray.t_max().approx_eq(&f64::INFINITY));
    }

    #[test]
    fn transforming_keeps_range() {
        let ray = Ray::with_range(Point::new(1., 2., 3.), Vector::new(0., 1., 0.), 0.5, 9.);
        let moved = ray.transform_new(&Transformation::translation(3., 4., 5.));
        assert_approx_eq_low_prec!(*moved.origin(), Point::new(4., 6., 8.));
        assert_approx_eq_low_prec!(*moved.direction(), Vector::new(0., 1., 0.));
        assert_eq!((moved.t_min(), moved.t_max()), (0.5, 9.));

        let scaled = ray.transform_new(&Transformation::scaling(2., 3., 4.).unwrap());
        assert_approx_eq_low_prec!(*scaled.origin(), Point::new(2., 6., 12.));
        assert_approx_eq_low_prec!(*scaled.direction(), Vector::new(0., 3., 0.));
    }
}
