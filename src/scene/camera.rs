use std::time::Instant;

use derive_builder::Builder;
use indicatif::ProgressBar;
use log::{debug, info};

use crate::{
    error::{RenderError, SceneError},
    math::{
        point::Point,
        point2::Point2,
        transform::{Transform, Transformation},
        tuple::Tuple,
        vector::Vector,
    },
    render::{film::Film, ray::Ray, sampler::Sampler, stats::RenderStats},
    scene::Scene,
    shading::tracer::Tracer,
};

/// How camera space points on the film become rays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Parallel rays through a `width` x `height` rectangle centered on the camera
    Orthographic { width: f64, height: f64 },
    /// Rays from the camera origin; vertical field of view in radians
    Perspective { field_of_view: f64 },
}

impl Projection {
    pub fn orthographic(width: f64, height: f64) -> Result<Self, SceneError> {
        let valid = |d: f64| d > 0. && d.is_finite();
        if !(valid(width) && valid(height)) {
            return Err(SceneError::InvalidViewRectangle { width, height });
        }
        Ok(Self::Orthographic { width, height })
    }

    /// Field of view in degrees, strictly between 0 and 180.
    pub fn perspective(field_of_view: f64) -> Result<Self, SceneError> {
        if !(field_of_view > 0. && field_of_view < 180.) {
            return Err(SceneError::InvalidFieldOfView(field_of_view));
        }
        Ok(Self::Perspective {
            field_of_view: field_of_view.to_radians(),
        })
    }
}

/// Result of rendering one camera.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub film: Film,
    pub stats: RenderStats,
}

// camera looks toward -z direction from point zero, +x is right and +y is up
#[derive(Clone, Debug, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "SceneError"))]
pub struct Camera {
    projection: Projection,
    /// Camera to world
    #[builder(default)]
    transformation: Transformation,
    /// Film width and height in pixels
    #[builder(default = "(Camera::DEFAULT_WIDTH, Camera::DEFAULT_HEIGHT)")]
    resolution: (usize, usize),
    #[builder(default)]
    sampler: Sampler,
}

impl CameraBuilder {
    fn validate(&self) -> Result<(), SceneError> {
        match self.resolution {
            Some((width, height)) if width == 0 || height == 0 => {
                Err(SceneError::EmptyResolution { width, height })
            }
            _ => Ok(()),
        }
    }
}

impl Camera {
    pub const DEFAULT_WIDTH: usize = 640;
    pub const DEFAULT_HEIGHT: usize = 480;

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    pub fn resolution(&self) -> (usize, usize) {
        self.resolution
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn aspect_ratio(&self) -> f64 {
        let (width, height) = self.resolution;
        width as f64 / height as f64
    }

    /// Same camera with a different film size.
    pub fn with_resolution(&self, width: usize, height: usize) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::EmptyResolution { width, height });
        }
        Ok(Self {
            resolution: (width, height),
            ..self.clone()
        })
    }

    pub fn with_sampler(&self, sampler: Sampler) -> Self {
        Self {
            sampler,
            ..self.clone()
        }
    }

    pub fn film(&self) -> Film {
        let (width, height) = self.resolution;
        Film::new(width, height)
    }

    /// World-space ray through `film_point`, where `(0, 0)` is the bottom-left
    /// corner of the film and `(1, 1)` the top-right one.
    pub fn create_camera_ray(&self, film_point: Point2) -> Result<Ray, RenderError> {
        if !film_point.is_in_unit_square() {
            return Err(RenderError::FilmPointOutOfRange {
                u: film_point.u,
                v: film_point.v,
            });
        }
        let Point2 { u, v } = film_point;

        let camera_ray = match self.projection {
            Projection::Orthographic { width, height } => {
                let origin = Point::new(-width / 2. + width * u, -height / 2. + height * v, 0.);
                Ray::new(origin, Vector::new(0., 0., -1.))
            }
            Projection::Perspective { field_of_view } => {
                let image_plane = -1. / (2. * (field_of_view / 2.).tan());
                let target = Vector::new((u - 0.5) * self.aspect_ratio(), v - 0.5, image_plane);
                let direction = target / target.magnitude();
                Ray::new(Point::zero(), direction)
            }
        };
        Ok(camera_ray.transform_new(&self.transformation))
    }

    /// Traces every sample of every pixel. Pixels are rendered in parallel.
    pub fn render_scene(
        &self,
        scene: &Scene,
        tracer: &Tracer,
        progressbar: Option<ProgressBar>,
    ) -> Result<Rendering, RenderError> {
        let (width, height) = self.resolution;
        let samples = self.sampler.unit_square_samples();

        info!("rendering image with {width}x{height} resolution");
        info!("rendering {} objects", scene.objects().len());
        info!("with {} rays", width * height * samples.len());
        debug!(
            "with {} samples per pixel ({:?}), {} maximum recursive depth",
            samples.len(),
            self.sampler.pattern(),
            tracer.max_depth()
        );

        let now = Instant::now();
        let mut film = self.film();
        let mut stats = film.fill_each_pixel(
            |x, y, stats| {
                samples
                    .iter()
                    .map(|sample| {
                        let film_point = Point2::new(
                            (x as f64 + sample.u) / width as f64,
                            (y as f64 + sample.v) / height as f64,
                        );
                        let ray = self.create_camera_ray(film_point)?;
                        stats.primary_rays += 1;
                        Ok(tracer.trace_ray_with_stats(&ray, scene, stats))
                    })
                    .collect()
            },
            progressbar,
        )?;
        stats.elapsed = now.elapsed();

        info!("render time: {:?}", stats.elapsed);
        info!("rays per second: {}", stats.rays_per_second().round());
        debug!("{stats}");

        Ok(Rendering { film, stats })
    }
}

#[cfg(test)]
mod tests {
    use std::{f64::consts::FRAC_1_SQRT_2, sync::Arc};

    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        math::color::Color,
        render::sampler::SamplingPattern,
        scene::{
            SceneBuilder,
            light::{ambient_light::AmbientLight, point_light::PointLight},
            object::{Object, shader::Shader},
        },
    };

    fn ortho_camera(width: f64, height: f64, resolution: (usize, usize)) -> Camera {
        CameraBuilder::default()
            .projection(Projection::orthographic(width, height).unwrap())
            .transformation(
                Transformation::look_at(
                    Point::new(0., 0., 100.),
                    Point::zero(),
                    Vector::new(0., 1., 0.),
                )
                .unwrap(),
            )
            .resolution(resolution)
            .build()
            .unwrap()
    }

    fn reference_scene(camera: Camera) -> Scene {
        SceneBuilder::default()
            .object(Object::sphere(Point::zero(), 1., Arc::new(Shader::constant(Color::white()))).unwrap())
            .light(PointLight::new(Point::new(0., 5., 0.), Color::white(), 25.))
            .light(AmbientLight::new(Color::white(), 0.25))
            .camera(camera)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_validates_input() {
        assert!(matches!(
            CameraBuilder::default().build(),
            Err(SceneError::MissingField("projection"))
        ));
        assert_eq!(
            CameraBuilder::default()
                .projection(Projection::perspective(60.).unwrap())
                .resolution((0, 10))
                .build()
                .unwrap_err(),
            SceneError::EmptyResolution {
                width: 0,
                height: 10
            }
        );
        assert_eq!(
            Projection::perspective(180.),
            Err(SceneError::InvalidFieldOfView(180.))
        );
        assert!(Projection::orthographic(0., 3.).is_err());
    }

    #[test]
    fn orthographic_ray_mapping() {
        let camera = ortho_camera(10., 10., (4, 3));

        let center = camera.create_camera_ray(Point2::new(0.5, 0.5)).unwrap();
        assert_approx_eq_low_prec!(*center.origin(), Point::new(0., 0., 100.));
        assert_approx_eq_low_prec!(*center.direction(), Vector::new(0., 0., -1.));

        for (film_point, origin) in [
            (Point2::new(0., 0.), Point::new(-5., -5., 100.)),
            (Point2::new(1., 1.), Point::new(5., 5., 100.)),
            (Point2::new(0., 1.), Point::new(-5., 5., 100.)),
        ] {
            let corner = camera.create_camera_ray(film_point).unwrap();
            assert_approx_eq_low_prec!(*corner.origin(), origin);
            assert_approx_eq_low_prec!(*corner.direction(), Vector::new(0., 0., -1.));
        }

        let quarter = camera.create_camera_ray(Point2::new(0.75, 0.25)).unwrap();
        assert_approx_eq_low_prec!(*quarter.origin(), Point::new(2.5, -2.5, 100.));
    }

    #[test]
    fn film_point_outside_unit_square_is_rejected() {
        let camera = ortho_camera(10., 10., (4, 3));
        for (u, v) in [(1.5, 0.5), (-0.1, 0.5), (0.5, 2.)] {
            assert!(matches!(
                camera.create_camera_ray(Point2::new(u, v)),
                Err(RenderError::FilmPointOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn perspective_ray_through_film_center() {
        let camera = CameraBuilder::default()
            .projection(Projection::perspective(90.).unwrap())
            .resolution((201, 101))
            .build()
            .unwrap();
        let ray = camera.create_camera_ray(Point2::new(0.5, 0.5)).unwrap();
        assert_approx_eq_low_prec!(*ray.origin(), Point::zero());
        assert_approx_eq_low_prec!(*ray.direction(), Vector::new(0., 0., -1.));
    }

    #[test]
    fn perspective_applies_aspect_horizontally() {
        // 90 degrees puts the image plane at z = -0.5
        let camera = CameraBuilder::default()
            .projection(Projection::perspective(90.).unwrap())
            .resolution((200, 100))
            .build()
            .unwrap();

        let right_edge = camera.create_camera_ray(Point2::new(1., 0.5)).unwrap();
        assert_approx_eq_low_prec!(
            *right_edge.direction(),
            Vector::new(1., 0., -0.5).normalize().unwrap()
        );

        let top_edge = camera.create_camera_ray(Point2::new(0.5, 1.)).unwrap();
        assert_approx_eq_low_prec!(
            *top_edge.direction(),
            Vector::new(0., FRAC_1_SQRT_2, -FRAC_1_SQRT_2)
        );
    }

    #[test]
    fn transformed_perspective_camera() {
        let transformation = Transformation::rotation_y(45.).translate(0., 2., -5.);
        let camera = CameraBuilder::default()
            .projection(Projection::perspective(90.).unwrap())
            .transformation(transformation)
            .build()
            .unwrap();

        let ray = camera.create_camera_ray(Point2::new(0.5, 0.5)).unwrap();
        assert_approx_eq_low_prec!(*ray.origin(), Point::new(0., 2., -5.));
        assert_approx_eq_low_prec!(
            *ray.direction(),
            Vector::new(-FRAC_1_SQRT_2, 0., -FRAC_1_SQRT_2)
        );
    }

    /// Color the tracer should produce for a world ray going down -z at `(x, y)`.
    fn reference_color(x: f64, y: f64) -> Color {
        let ambient = Color::gray(0.25);
        let r2 = x * x + y * y;
        if r2 > 1. {
            return Color::black();
        }
        let point = Point::new(x, y, (1. - r2).sqrt());
        let to_light = Point::new(0., 5., 0.) - point;
        let distance = to_light.magnitude();
        let cos = to_light.normalize().unwrap().dot(point.as_vector()).max(0.);
        Color::gray(25. / (1. + distance).powi(2) * cos) + ambient
    }

    #[test]
    fn reference_scene_with_wide_view_misses_sphere() {
        // pixel centers of a 4x3 film on a 10x10 rectangle all lie outside the unit sphere
        let scene = reference_scene(ortho_camera(10., 10., (4, 3)));
        let rendering = scene.cameras()[0]
            .render_scene(&scene, &Tracer::default(), None)
            .unwrap();

        assert_eq!(rendering.film.native_resolution(), (4, 3));
        assert_eq!(rendering.stats.primary_rays, 12);
        assert_eq!(rendering.stats.hits, 0);
        for y in 0..3 {
            for x in 0..4 {
                let samples = rendering.film.pixel_samples((x, y));
                assert_eq!(samples.len(), 1);
                let world_x = -5. + 10. * (x as f64 + 0.5) / 4.;
                let world_y = -5. + 10. * (y as f64 + 0.5) / 3.;
                assert_approx_eq_low_prec!(samples[0], reference_color(world_x, world_y));
            }
        }
    }

    #[test]
    fn reference_scene_with_tight_view_shades_sphere() {
        let scene = reference_scene(ortho_camera(2., 2., (4, 4)));
        let rendering = scene.cameras()[0]
            .render_scene(&scene, &Tracer::default(), None)
            .unwrap();

        assert!(rendering.stats.hits > 0);
        for y in 0..4 {
            for x in 0..4 {
                let world_x = -1. + 2. * (x as f64 + 0.5) / 4.;
                let world_y = -1. + 2. * (y as f64 + 0.5) / 4.;
                assert_approx_eq_low_prec!(
                    rendering.film.pixel_samples((x, y))[0],
                    reference_color(world_x, world_y)
                );
            }
        }

        // upper half faces the light and comes out brighter once developed
        let canvas = rendering.film.develop(1.);
        assert!(canvas.pixel_at(1, 1).r() > canvas.pixel_at(1, 2).r());
    }

    #[test]
    fn every_sample_is_kept() {
        let camera = ortho_camera(2., 2., (2, 2))
            .with_sampler(Sampler::new(SamplingPattern::Regular, 3, 0).unwrap());
        let scene = reference_scene(camera);
        let rendering = scene.cameras()[0]
            .render_scene(&scene, &Tracer::default(), None)
            .unwrap();

        assert_eq!(rendering.stats.primary_rays, 36);
        assert_eq!(rendering.film.pixel_samples((1, 0)).len(), 9);
    }

    #[test]
    fn with_resolution_overrides_film_size() {
        let camera = ortho_camera(2., 2., (2, 2)).with_resolution(8, 6).unwrap();
        assert_eq!(camera.film().native_resolution(), (8, 6));
        assert!(camera.with_resolution(0, 6).is_err());
    }
}
