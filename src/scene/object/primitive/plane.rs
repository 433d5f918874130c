use super::shape::LocalHit;
use crate::{
    approx_eq::ApproxEq,
    math::{normal::Normal, point::Point, point2::Point2, tuple::Tuple},
    render::ray::Ray,
    scene::{Scene, object::bounding_box::BoundingBox},
};

pub struct PlaneXZ {}

impl PlaneXZ {
    pub fn normal() -> Normal {
        Normal::new(0., 1., 0.)
    }

    /// Infinite in x and z, clamped so the world-space box stays finite.
    pub fn bounding_box() -> BoundingBox {
        BoundingBox::new(
            Point::new(-Scene::MAX_DIM, 0., -Scene::MAX_DIM),
            Point::new(Scene::MAX_DIM, 0., Scene::MAX_DIM),
        )
    }

    pub fn local_intersect(object_ray: &Ray) -> Option<LocalHit> {
        let denominator = object_ray.direction().y();
        if denominator.approx_eq(&0.) {
            return None;
        }
        let t = -object_ray.origin().y() / denominator;
        if !object_ray.contains(t) {
            return None;
        }

        let point = object_ray.position(t);
        Some(LocalHit {
            t,
            normal: Self::normal(),
            uv: Point2::new(point.x() - point.x().floor(), point.z() - point.z().floor()),
        })
    }
}
