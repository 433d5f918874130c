pub const AIR_REFRACTIVE_INDEX: f64 = 1.0;
pub const GLASS_REFRACTIVE_INDEX: f64 = 1.5;

/// Reflectance coefficients of a surface. The default is a plain Lambertian
/// surface that takes ambient and diffuse light at full strength.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient: f64,   // [0;1]
    pub diffuse: f64,   // [0;1]
    pub specular: f64,  // [0;1]
    pub shininess: f64, // [10;+inf) (typically up to 200.0)
    pub reflection: f64, // [0;1]

    pub refraction: f64,       // [0;1]
    pub refractive_index: f64, // [1;+inf)
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: 1.,
            diffuse: 1.,
            specular: 0.,
            shininess: 200.,
            reflection: 0.,
            refraction: 0.,
            refractive_index: AIR_REFRACTIVE_INDEX,
        }
    }
}

impl Material {
    pub fn glass() -> Self {
        Self {
            ambient: 0.,
            diffuse: 0.1,
            specular: 1.,
            shininess: 300.,
            reflection: 0.1,
            refraction: 0.9,
            refractive_index: GLASS_REFRACTIVE_INDEX,
        }
    }

    pub fn mirror() -> Self {
        Self {
            ambient: 0.,
            diffuse: 0.1,
            specular: 1.,
            shininess: 300.,
            reflection: 0.9,
            ..Default::default()
        }
    }

    pub fn shiny() -> Self {
        Self {
            ambient: 0.2,
            diffuse: 0.8,
            specular: 0.6,
            shininess: 120.,
            ..Default::default()
        }
    }

    /// Linear blend, `t = 0` gives `self` and `t = 1` gives `other`.
    pub fn lerp(&self, other: &Material, t: f64) -> Self {
        let mix = |a: f64, b: f64| a * (1. - t) + b * t;
        Self {
            ambient: mix(self.ambient, other.ambient),
            diffuse: mix(self.diffuse, other.diffuse),
            specular: mix(self.specular, other.specular),
            shininess: mix(self.shininess, other.shininess),
            reflection: mix(self.reflection, other.reflection),
            refraction: mix(self.refraction, other.refraction),
            refractive_index: mix(self.refractive_index, other.refractive_index),
        }
    }
}
