use derive_builder::Builder;

use crate::{
    math::color::Color,
    render::{intersection::Collision, ray::Ray, stats::RenderStats},
    scene::{
        Scene,
        light::schlick_reflectance,
        object::material::{AIR_REFRACTIVE_INDEX, Material},
    },
};

#[derive(PartialEq, Debug, Clone, Builder)]
#[builder(default)]
/// The tracer computes the color seen along a ray
pub struct Tracer {
    /// Color of rays that leave the scene
    background: Color,
    /// Depth of recursive calls for reflections and refractions
    /// 0 means no reflections or refractions
    #[builder(default = "Tracer::MAX_RECURSIVE_DEPTH")]
    max_depth: usize,
}

impl Default for Tracer {
    fn default() -> Self {
        Self {
            background: Color::black(),
            max_depth: Self::MAX_RECURSIVE_DEPTH,
        }
    }
}

impl Tracer {
    pub const MAX_RECURSIVE_DEPTH: usize = 5 - 1;

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The main method for calculating color for the given ray
    pub fn trace_ray(&self, ray: &Ray, scene: &Scene) -> Color {
        self.trace_ray_with_stats(ray, scene, &mut RenderStats::default())
    }

    pub fn trace_ray_with_stats(&self, ray: &Ray, scene: &Scene, stats: &mut RenderStats) -> Color {
        self.trace_at_depth(ray, scene, 0, stats)
    }

    fn trace_at_depth(&self, ray: &Ray, scene: &Scene, depth: usize, stats: &mut RenderStats) -> Color {
        match scene.hit_object(ray) {
            Some(hit) => {
                stats.hits += 1;
                self.shade_hit(&hit, scene, depth, stats)
            }
            None => self.background,
        }
    }

    fn shade_hit(
        &self,
        hit: &Collision,
        scene: &Scene,
        depth: usize,
        stats: &mut RenderStats,
    ) -> Color {
        let shader = hit.object().shader();
        let surface = shader.color_at(hit.uv());
        let material = shader.material_at(hit.uv());

        let local = self.direct_light(hit, scene, &material, surface, stats);
        let reflected = self.reflected_color(hit, scene, &material, depth, stats);
        let refracted = self.refracted_color(hit, scene, &material, depth, stats);

        let use_schlick = material.reflection > 0. && material.refraction > 0.;
        let reflected_refracted = if use_schlick {
            let (n1, n2) = Self::refractive_indices(hit, &material);
            let reflectance = schlick_reflectance(hit.eye_v().dot(hit.normal().as_vector()), n1, n2);
            reflected * reflectance + refracted * (1. - reflectance)
        } else {
            reflected + refracted
        };

        local + reflected_refracted
    }

    /// `surface * (sum of unoccluded delta lights * cos * diffuse + sum of ambient lights * ambient)`,
    /// plus a Phong highlight for specular materials.
    fn direct_light(
        &self,
        hit: &Collision,
        scene: &Scene,
        material: &Material,
        surface: Color,
        stats: &mut RenderStats,
    ) -> Color {
        let normal = hit.normal();
        let eye_v = hit.eye_v();

        let mut diffuse = Color::black();
        let mut ambient = Color::black();
        let mut specular = Color::black();

        for light in scene.lights() {
            if light.is_omnidirectional() {
                ambient += light.ambient_intensity();
                continue;
            }
            let Some(shadow_ray) = light.shadow_ray(hit.over_point()) else {
                continue;
            };

            // light is on the other side of surface
            let light_dot_normal = normal.dot(*shadow_ray.direction());
            if light_dot_normal <= 0. {
                continue;
            }

            stats.shadow_rays += 1;
            let intensity = light.intensity_for_shadow_ray(&shadow_ray, scene);
            if intensity.is_black() {
                continue;
            }
            diffuse += intensity * light_dot_normal;

            if material.specular > 0. {
                let reflect_dot_eye = (-*shadow_ray.direction()).reflect(normal).dot(eye_v);
                if reflect_dot_eye > 0. {
                    specular += intensity * material.specular * reflect_dot_eye.powf(material.shininess);
                }
            }
        }

        surface * (diffuse * material.diffuse + ambient * material.ambient) + specular
    }

    fn reflected_color(
        &self,
        hit: &Collision,
        scene: &Scene,
        material: &Material,
        depth: usize,
        stats: &mut RenderStats,
    ) -> Color {
        if depth >= self.max_depth || material.reflection <= 0. {
            return Color::black();
        }
        stats.secondary_rays += 1;
        let reflected_ray = Ray::new(hit.over_point(), hit.reflect_v());
        self.trace_at_depth(&reflected_ray, scene, depth + 1, stats) * material.reflection
    }

    fn refracted_color(
        &self,
        hit: &Collision,
        scene: &Scene,
        material: &Material,
        depth: usize,
        stats: &mut RenderStats,
    ) -> Color {
        if depth >= self.max_depth || material.refraction <= 0. {
            return Color::black();
        }

        let (n1, n2) = Self::refractive_indices(hit, material);
        let refraction_ratio = n1 / n2;
        let normal = hit.normal().as_vector();
        let eye_v = hit.eye_v();
        let cos_i = eye_v.dot(normal);

        let sin2_t = refraction_ratio.powi(2) * (1. - cos_i.powi(2));
        // total internal reflection
        if sin2_t > 1. {
            return Color::black();
        }

        let cos_t = (1. - sin2_t).sqrt();
        let direction = normal * (refraction_ratio * cos_i - cos_t) - eye_v * refraction_ratio;

        stats.secondary_rays += 1;
        let refracted_ray = Ray::new(hit.under_point(), direction);
        self.trace_at_depth(&refracted_ray, scene, depth + 1, stats) * material.refraction
    }

    /// Indices on the incoming and outgoing side; objects are assumed to sit in air.
    fn refractive_indices(hit: &Collision, material: &Material) -> (f64, f64) {
        if hit.front_face() {
            (AIR_REFRACTIVE_INDEX, material.refractive_index)
        } else {
            (material.refractive_index, AIR_REFRACTIVE_INDEX)
        }
    }
}
