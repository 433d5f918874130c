pub mod camera;
pub mod light;
pub mod object;
pub mod presets;

use derive_builder::Builder;
use log::trace;

use crate::{
    error::SceneError,
    render::{intersection::Collision, ray::Ray},
};
use camera::Camera;
use light::Light;
use object::{
    Object,
    bounding_box::{Bounded, BoundingBox},
};

/// Everything that can be rendered: objects, lights and the cameras looking at them.
/// Filled while building, only read while rendering.
#[derive(Debug, Clone, Builder)]
#[builder(default, build_fn(error = "SceneError"))]
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<Light>,
    cameras: Vec<Camera>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::empty()
    }
}

impl SceneBuilder {
    pub fn object(&mut self, object: Object) -> &mut Self {
        self.objects.get_or_insert_with(Vec::new).push(object);
        self
    }

    pub fn light(&mut self, light: impl Into<Light>) -> &mut Self {
        self.lights.get_or_insert_with(Vec::new).push(light.into());
        self
    }

    pub fn camera(&mut self, camera: Camera) -> &mut Self {
        self.cameras.get_or_insert_with(Vec::new).push(camera);
        self
    }
}

impl Scene {
    /// Largest coordinate an object's bounds may reach; unbounded shapes are clamped to it.
    pub const MAX_DIM: f64 = 10.0e6;

    pub fn new(objects: Vec<Object>, lights: Vec<Light>, cameras: Vec<Camera>) -> Self {
        Self {
            objects,
            lights,
            cameras,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: impl Into<Light>) {
        self.lights.push(light.into());
    }

    pub fn add_camera(&mut self, camera: Camera) {
        self.cameras.push(camera);
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// Union of every object's world-space bounds.
    pub fn bounding_box(&self) -> BoundingBox {
        self.objects
            .iter()
            .fold(BoundingBox::empty(), |acc, object| {
                acc.union(object.bounding_box())
            })
    }

    /// Nearest object hit by `ray`. On equal distances the object added first wins.
    pub fn hit_object(&self, ray: &Ray) -> Option<Collision<'_>> {
        let mut search = *ray;
        let mut nearest = None;

        for object in &self.objects {
            if !object.bounding_box().is_hit_by(&search) {
                continue;
            }
            if let Some(collision) = object.intersect(&search) {
                // range is half open, so a later hit at the same distance is rejected
                search = search.with_t_max(collision.distance());
                nearest = Some(collision);
            }
        }

        if let Some(collision) = &nearest {
            trace!("ray hit at distance {}", collision.distance());
        }
        nearest.map(|collision| collision.with_incident_ray(*ray))
    }

    /// Any object hit by `ray`, not necessarily the nearest one.
    pub fn hit_object_for_shadow_ray(&self, ray: &Ray) -> Option<Collision<'_>> {
        self.objects
            .iter()
            .filter(|object| object.bounding_box().is_hit_by(ray))
            .find_map(|object| object.intersect(ray))
    }
}
