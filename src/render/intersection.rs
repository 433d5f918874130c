use crate::{
    math::{normal::Normal, point::Point, point2::Point2, vector::Vector},
    render::ray::Ray,
    scene::object::Object,
};

/// Offset along the normal used to start secondary rays off the surface.
pub const OVER_POINT_BIAS: f64 = 1.0e-6;

/// Everything known about a ray-object hit, in world space.
#[derive(Clone, Copy, Debug)]
pub struct Collision<'a> {
    ray: Ray,
    object: &'a Object,
    distance: f64,
    point: Point,
    /// Unit length, facing against the incident ray
    normal: Normal,
    uv: Point2,
    /// True if the ray hit the side the geometric normal points to
    front_face: bool,
}

impl<'a> Collision<'a> {
    pub fn new(
        ray: Ray,
        object: &'a Object,
        distance: f64,
        normal: Normal,
        uv: Point2,
        front_face: bool,
    ) -> Self {
        Self {
            ray,
            object,
            distance,
            point: ray.position(distance),
            normal,
            uv,
            front_face,
        }
    }

    /// Replaces the stored ray, e.g. to drop a range shrunk during traversal.
    pub fn with_incident_ray(self, ray: Ray) -> Self {
        Self { ray, ..self }
    }

    pub fn ray(&self) -> &Ray {
        &self.ray
    }
    pub fn object(&self) -> &'a Object {
        self.object
    }
    pub fn distance(&self) -> f64 {
        self.distance
    }
    pub fn point(&self) -> Point {
        self.point
    }
    pub fn normal(&self) -> Normal {
        self.normal
    }
    pub fn uv(&self) -> Point2 {
        self.uv
    }
    pub fn front_face(&self) -> bool {
        self.front_face
    }

    pub fn over_point(&self) -> Point {
        self.point + self.normal.as_vector() * OVER_POINT_BIAS
    }

    pub fn under_point(&self) -> Point {
        self.point - self.normal.as_vector() * OVER_POINT_BIAS
    }

    /// Unit vector from the hit point back towards the ray origin.
    pub fn eye_v(&self) -> Vector {
        (-*self.ray.direction()).normalize().unwrap_or_default()
    }

    pub fn reflect_v(&self) -> Vector {
        self.ray.direction().reflect(self.normal)
    }
}
