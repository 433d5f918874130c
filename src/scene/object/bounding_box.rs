use crate::{
    approx_eq::ApproxEq,
    math::{
        point::Point,
        transform::{Transform, Transformation},
        tuple::{Axis, Tuple},
        vector::Vector,
    },
    render::ray::Ray,
};

pub trait Bounded {
    fn bounding_box(&self) -> &BoundingBox;
}

/// Axis-aligned bounding box, kept normalized so that `min <= max` on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Point,
    max: Point,
}

impl Bounded for BoundingBox {
    fn bounding_box(&self) -> &BoundingBox {
        self
    }
}

impl Transform for BoundingBox {
    fn transform_new(&self, transformation: &Transformation) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self::from_points(
            self.corners()
                .into_iter()
                .map(|corner| corner.transform_new(transformation)),
        )
    }
}

impl BoundingBox {
    pub fn empty() -> Self {
        Self {
            min: Point::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_point(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Box spanned by two opposite corners given in any order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut bounds = Self::empty();
        for point in points {
            bounds.add_point(point);
        }
        bounds
    }

    pub fn min(&self) -> Point {
        self.min
    }
    pub fn max(&self) -> Point {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        Axis::ALL.iter().any(|&axis| self.min[axis] > self.max[axis])
    }

    pub fn add_point(&mut self, point: Point) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn union(&self, other: &BoundingBox) -> Self {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn contains_point(&self, point: Point) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }

    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.is_empty() || (self.contains_point(other.min) && self.contains_point(other.max))
    }

    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && Axis::ALL.iter().all(|&axis| {
                self.min[axis] <= other.max[axis] && other.min[axis] <= self.max[axis]
            })
    }

    pub fn center(&self) -> Point {
        self.min + (self.max - self.min) / 2.
    }

    pub fn size(&self) -> Vector {
        self.max - self.min
    }

    pub fn corners(&self) -> [Point; 8] {
        let (min, max) = (self.min, self.max);
        [
            min,
            Point::new(min.x(), min.y(), max.z()),
            Point::new(min.x(), max.y(), min.z()),
            Point::new(min.x(), max.y(), max.z()),
            Point::new(max.x(), min.y(), min.z()),
            Point::new(max.x(), min.y(), max.z()),
            Point::new(max.x(), max.y(), min.z()),
            max,
        ]
    }

    /// Clamps every coordinate into `[-max_dim, max_dim]`, making unbounded shapes finite.
    pub fn limit_dimensions(&self, max_dim: f64) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            min: self.min.clamp(-max_dim, max_dim),
            max: self.max.clamp(-max_dim, max_dim),
        }
    }

    /// Slab test restricted to the ray's `[t_min, t_max]` range.
    pub fn is_hit_by(&self, ray: &Ray) -> bool {
        if self.is_empty() {
            return false;
        }
        let mut t_near = ray.t_min();
        let mut t_far = ray.t_max();

        for axis in Axis::ALL {
            let origin = ray.origin()[axis];
            let (min, max) = (self.min[axis], self.max[axis]);

            if ray.direction()[axis] == 0. {
                // parallel to the slab, it's either always inside or never
                if origin < min || origin > max {
                    return false;
                }
                continue;
            }

            let dir_inv = ray.dir_inv()[axis];
            let t0 = (min - origin) * dir_inv;
            let t1 = (max - origin) * dir_inv;
            let (t0, t1) = if t0 < t1 { (t0, t1) } else { (t1, t0) };

            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return false;
            }
        }
        true
    }
}

impl ApproxEq for BoundingBox {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.min.approx_eq_epsilon(&other.min, epsilon)
            && self.max.approx_eq_epsilon(&other.max, epsilon)
    }
}
