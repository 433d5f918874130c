use log::trace;

use super::Falloff;
use crate::{
    approx_eq::{ApproxEq, EPSILON},
    math::{color::Color, point::Point},
    render::ray::Ray,
    scene::Scene,
};

#[derive(PartialEq, Debug, Clone)]
pub struct PointLight {
    position: Point,
    color: Color,
    power: f64,
    falloff: Falloff,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Point::zero(),
            color: Color::white(),
            power: 1.,
            falloff: Falloff::default(),
        }
    }
}

impl PointLight {
    pub fn new(position: Point, color: Color, power: f64) -> Self {
        Self {
            position,
            color,
            power,
            falloff: Falloff::default(),
        }
    }

    pub fn with_falloff(mut self, falloff: Falloff) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn falloff(&self) -> Falloff {
        self.falloff
    }

    /// Unit-direction ray from `from` whose range ends at the light.
    pub fn shadow_ray(&self, from: Point) -> Option<Ray> {
        let to_light = self.position - from;
        let distance = to_light.magnitude();
        if distance.approx_eq(&0.) || !distance.is_finite() {
            return None;
        }
        Some(Ray::with_range(
            from,
            to_light / distance,
            EPSILON,
            distance,
        ))
    }

    /// Attenuated light reaching the start of `shadow_ray`, or black if an object is in the way.
    pub fn intensity_for_shadow_ray(&self, shadow_ray: &Ray, scene: &Scene) -> Color {
        if scene.hit_object_for_shadow_ray(shadow_ray).is_some() {
            trace!("shadow ray from {:?} occluded", shadow_ray.origin());
            return Color::black();
        }
        self.color * self.power * self.falloff.attenuation(shadow_ray.t_max())
    }
}
