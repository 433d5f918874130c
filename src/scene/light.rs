pub mod ambient_light;
pub mod point_light;

use ambient_light::AmbientLight;
use point_light::PointLight;

use crate::{
    math::{color::Color, point::Point},
    render::ray::Ray,
    scene::Scene,
};

/// Distance attenuation `1 / (1 + d)^k` of a point light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Falloff {
    None,
    Linear,
    #[default]
    Quadric,
    Cubic,
}

impl Falloff {
    pub fn exponent(&self) -> i32 {
        match self {
            Falloff::None => 0,
            Falloff::Linear => 1,
            Falloff::Quadric => 2,
            Falloff::Cubic => 3,
        }
    }

    pub fn attenuation(&self, distance: f64) -> f64 {
        1. / (1. + distance).powi(self.exponent())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    /// Single direction per shaded point, shadow tested
    Point(PointLight),
    /// Reaches every point from every direction, never shadow tested
    Ambient(AmbientLight),
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Self::Point(light)
    }
}

impl From<AmbientLight> for Light {
    fn from(light: AmbientLight) -> Self {
        Self::Ambient(light)
    }
}

impl Light {
    pub fn is_delta(&self) -> bool {
        matches!(self, Light::Point(_))
    }

    pub fn is_omnidirectional(&self) -> bool {
        matches!(self, Light::Ambient(_))
    }

    /// Ray from `from` towards the light, ending at the light.
    /// `None` for lights without a position or when `from` is the light itself.
    pub fn shadow_ray(&self, from: Point) -> Option<Ray> {
        match self {
            Light::Point(light) => light.shadow_ray(from),
            Light::Ambient(_) => None,
        }
    }

    /// Light arriving along `shadow_ray`, black if anything blocks it.
    pub fn intensity_for_shadow_ray(&self, shadow_ray: &Ray, scene: &Scene) -> Color {
        match self {
            Light::Point(light) => light.intensity_for_shadow_ray(shadow_ray, scene),
            Light::Ambient(light) => light.intensity(),
        }
    }

    pub fn ambient_intensity(&self) -> Color {
        match self {
            Light::Ambient(light) => light.intensity(),
            Light::Point(_) => Color::black(),
        }
    }
}

/// Fresnel reflectance of an interface approximated with Schlick's formula.
/// `cos_i` is the cosine between the eye and the normal on the `n1` side.
pub fn schlick_reflectance(cos_i: f64, n1: f64, n2: f64) -> f64 {
    let mut cos = cos_i;

    if n1 > n2 {
        let ratio = n1 / n2;
        let sin2_t = ratio.powi(2) * (1. - cos.powi(2));
        if sin2_t > 1. {
            return 1.;
        }
        // going into the lighter medium, use cos of theta_t
        cos = (1. - sin2_t).sqrt();
    }

    let r0 = ((n1 - n2) / (n1 + n2)).powi(2);
    r0 + (1. - r0) * (1. - cos).powi(5)
}
