pub mod bounding_box;
pub mod material;
pub mod primitive;
pub mod shader;

use std::sync::Arc;

use bounding_box::{Bounded, BoundingBox};
use primitive::{mesh::TriangleMesh, shape::Shape, triangle::Triangle};
use shader::Shader;

use crate::{
    error::SceneError,
    math::{
        point::Point,
        transform::{Transform, Transformation},
        tuple::Tuple,
    },
    render::{intersection::Collision, ray::Ray},
    scene::Scene,
};

/// A shape placed in the world with its shader.
#[derive(Clone, Debug)]
pub struct Object {
    shape: Shape,
    shader: Arc<Shader>,
    /// Object to world
    transformation: Transformation,
    /// World-space bounds used to reject rays before the exact test
    bounding_box: BoundingBox,
}

impl Bounded for Object {
    fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }
}

impl Object {
    pub fn new(shape: Shape, shader: Arc<Shader>, transformation: Transformation) -> Self {
        let bounding_box = shape
            .bounding_box()
            .transform_new(&transformation)
            .limit_dimensions(Scene::MAX_DIM);
        Self {
            shape,
            shader,
            transformation,
            bounding_box,
        }
    }

    pub fn with_shape(shape: Shape) -> Self {
        Self::new(shape, Arc::default(), Transformation::identity())
    }

    pub fn sphere(center: Point, radius: f64, shader: Arc<Shader>) -> Result<Self, SceneError> {
        if !(radius > 0. && radius.is_finite()) {
            return Err(SceneError::InvalidRadius(radius));
        }
        let transformation = Transformation::scaling_uniform(radius)?.translate(
            center.x(),
            center.y(),
            center.z(),
        );
        Ok(Self::new(Shape::Sphere, shader, transformation))
    }

    pub fn plane(shader: Arc<Shader>, transformation: Transformation) -> Self {
        Self::new(Shape::Plane, shader, transformation)
    }

    pub fn triangle(p1: Point, p2: Point, p3: Point, shader: Arc<Shader>) -> Result<Self, SceneError> {
        Ok(Self::new(
            Shape::Triangle(Triangle::new(p1, p2, p3)?),
            shader,
            Transformation::identity(),
        ))
    }

    pub fn mesh(mesh: TriangleMesh, shader: Arc<Shader>, transformation: Transformation) -> Self {
        Self::new(Shape::Mesh(mesh), shader, transformation)
    }

    /// Nearest hit within the ray's range, in world space.
    ///
    /// The ray is moved to object space once. Its direction is not renormalized
    /// there, so the object-space `t` is also the world-space distance parameter.
    pub fn intersect(&self, ray: &Ray) -> Option<Collision<'_>> {
        let object_ray = ray.transform_new(&self.transformation.inverse());
        let local = self.shape.local_intersect(&object_ray)?;

        let normal = local
            .normal
            .transform_new(&self.transformation)
            .normalize()
            .ok()?;
        let front_face = normal.dot(*ray.direction()) < 0.;

        Some(Collision::new(
            *ray,
            self,
            local.t,
            normal.face_forward(*ray.direction()),
            local.uv,
            front_face,
        ))
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shader(&self) -> &Shader {
        &self.shader
    }

    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }
}
