use std::f64::consts::{PI, TAU};

use super::shape::LocalHit;
use crate::{
    math::{normal::Normal, point::Point, point2::Point2, tuple::Tuple},
    render::ray::Ray,
    scene::object::bounding_box::BoundingBox,
};

pub struct UnitSphere {}

impl UnitSphere {
    pub fn bounding_box() -> BoundingBox {
        BoundingBox::new(Point::new(-1., -1., -1.), Point::new(1., 1., 1.))
    }

    /// Spherical coordinates of a point on the sphere, `phi` around y and `theta` from +y.
    pub fn uv_at(point: Point) -> Point2 {
        let phi = point.z().atan2(point.x()).rem_euclid(TAU);
        let theta = point.y().clamp(-1., 1.).acos();
        Point2::new(phi / TAU, theta / PI)
    }

    pub fn local_intersect(object_ray: &Ray) -> Option<LocalHit> {
        let vector_sphere_to_ray = *object_ray.origin() - Point::zero();
        let direction = *object_ray.direction();

        let a = direction.dot(direction);
        let b = 2. * direction.dot(vector_sphere_to_ray);
        let c = vector_sphere_to_ray.dot(vector_sphere_to_ray) - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return None;
        }

        let delta_sqrt = discriminant.sqrt();
        let near = (-b - delta_sqrt) / (2. * a);
        let far = (-b + delta_sqrt) / (2. * a);
        let t = [near, far].into_iter().find(|&t| object_ray.contains(t))?;

        let point = object_ray.position(t);
        Some(LocalHit {
            t,
            normal: Normal::from(point.as_vector()),
            uv: Self::uv_at(point),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq_low_prec, math::vector::Vector};

    #[test]
    fn ray_from_outside_hits_near_side() {
        let ray = Ray::new(Point::new(10., 0., 0.), Vector::new(-1., 0., 0.));
        let hit = UnitSphere::local_intersect(&ray).unwrap();
        assert_approx_eq_low_prec!(hit.t, 9.);
        assert_approx_eq_low_prec!(ray.position(hit.t), Point::new(1., 0., 0.));
        assert_approx_eq_low_prec!(hit.normal, Normal::new(1., 0., 0.));
    }

    #[test]
    fn ray_from_inside_hits_far_side() {
        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));
        let hit = UnitSphere::local_intersect(&ray).unwrap();
        assert_approx_eq_low_prec!(hit.t, 1.);
    }

    #[test]
    fn sphere_behind_ray_is_missed() {
        let ray = Ray::new(Point::new(0., 0., 5.), Vector::new(0., 0., 1.));
        assert!(UnitSphere::local_intersect(&ray).is_none());
    }

    #[test]
    fn range_selects_root() {
        let origin = Point::new(0., 0., -5.);
        let direction = Vector::new(0., 0., 1.);

        let skip_near = Ray::with_range(origin, direction, 4.5, f64::INFINITY);
        assert_approx_eq_low_prec!(UnitSphere::local_intersect(&skip_near).unwrap().t, 6.);

        let too_short = Ray::with_range(origin, direction, 0., 4.);
        assert!(UnitSphere::local_intersect(&too_short).is_none());
    }

    #[test]
    fn miss_and_tangent() {
        let miss = Ray::new(Point::new(0., 2., -5.), Vector::new(0., 0., 1.));
        assert!(UnitSphere::local_intersect(&miss).is_none());

        let tangent = Ray::new(Point::new(0., 1., -5.), Vector::new(0., 0., 1.));
        assert_approx_eq_low_prec!(UnitSphere::local_intersect(&tangent).unwrap().t, 5.);
    }

    #[test]
    fn uv_mapping() {
        assert_approx_eq_low_prec!(UnitSphere::uv_at(Point::new(0., 1., 0.)).v, 0.);
        assert_approx_eq_low_prec!(UnitSphere::uv_at(Point::new(0., -1., 0.)).v, 1.);
        assert_approx_eq_low_prec!(
            UnitSphere::uv_at(Point::new(1., 0., 0.)),
            Point2::new(0., 0.5)
        );
        assert_approx_eq_low_prec!(
            UnitSphere::uv_at(Point::new(0., 0., 1.)),
            Point2::new(0.25, 0.5)
        );
        assert_approx_eq_low_prec!(
            UnitSphere::uv_at(Point::new(0., 0., -1.)),
            Point2::new(0.75, 0.5)
        );
    }
}
