use crate::{
    math::{normal::Normal, point2::Point2},
    render::ray::Ray,
    scene::object::bounding_box::BoundingBox,
};

use super::{mesh::TriangleMesh, plane::PlaneXZ, sphere::UnitSphere, triangle::Triangle};

/// Intersection found in object space, before the owning object maps it to world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalHit {
    pub t: f64,
    /// Not necessarily normalized.
    pub normal: Normal,
    pub uv: Point2,
}

#[derive(Clone, Debug)]
pub enum Shape {
    /// Unit sphere at point zero
    Sphere,
    /// Plane extending in x and z directions, at y = 0
    Plane,
    Triangle(Triangle),
    Mesh(TriangleMesh),
}

impl Shape {
    /// Nearest hit of `object_ray` within its `[t_min, t_max)` range.
    pub fn local_intersect(&self, object_ray: &Ray) -> Option<LocalHit> {
        match self {
            Shape::Sphere => UnitSphere::local_intersect(object_ray),
            Shape::Plane => PlaneXZ::local_intersect(object_ray),
            Shape::Triangle(triangle) => triangle.local_intersect(object_ray),
            Shape::Mesh(mesh) => mesh.local_intersect(object_ray),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Sphere => UnitSphere::bounding_box(),
            Shape::Plane => PlaneXZ::bounding_box(),
            Shape::Triangle(triangle) => triangle.bounding_box(),
            Shape::Mesh(mesh) => *mesh.bounding_box(),
        }
    }
}
