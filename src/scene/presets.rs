use std::{f64::consts::FRAC_1_SQRT_2, fmt::Display, sync::Arc};

use clap::ValueEnum;

use super::{
    Scene, SceneBuilder,
    camera::{Camera, CameraBuilder, Projection},
    light::{ambient_light::AmbientLight, point_light::PointLight},
    object::{
        Object,
        material::Material,
        primitive::mesh::TriangleMesh,
        shader::{Shader, UvAxis},
    },
};
use crate::{
    error::SceneError,
    math::{
        color::Color, normal::Normal, point::Point, point2::Point2, transform::Transformation,
        tuple::Tuple, vector::Vector,
    },
    render::sampler::Sampler,
};

/// Scenes built in code, selectable from the command line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum ScenePreset {
    /// Three spheres of different materials on a floor
    #[default]
    Spheres,
    /// Smooth shaded octahedron mesh
    Mesh,
    /// Spheres between two facing mirrors
    Mirror,
    /// Checkered floor and a checkered ball
    Checker,
}

impl Display for ScenePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenePreset::Spheres => write!(f, "spheres"),
            ScenePreset::Mesh => write!(f, "mesh"),
            ScenePreset::Mirror => write!(f, "mirror"),
            ScenePreset::Checker => write!(f, "checker"),
        }
    }
}

impl ScenePreset {
    /// Builds the scene with a single camera that samples with `sampler`.
    pub fn build(&self, sampler: &Sampler) -> Result<Scene, SceneError> {
        match self {
            ScenePreset::Spheres => spheres(sampler),
            ScenePreset::Mesh => mesh(sampler),
            ScenePreset::Mirror => mirror(sampler),
            ScenePreset::Checker => checker(sampler),
        }
    }
}

fn perspective_camera(
    eye: Point,
    target: Point,
    field_of_view: f64,
    sampler: &Sampler,
) -> Result<Camera, SceneError> {
    CameraBuilder::default()
        .projection(Projection::perspective(field_of_view)?)
        .transformation(Transformation::look_at(eye, target, Vector::new(0., 1., 0.))?)
        .sampler(sampler.clone())
        .build()
}

fn floor(shader: Shader) -> Object {
    Object::plane(Arc::new(shader), Transformation::identity())
}

fn default_lights() -> (PointLight, AmbientLight) {
    (
        PointLight::new(Point::new(-10., 10., 10.), Color::white(), 400.),
        AmbientLight::new(Color::white(), 0.1),
    )
}

fn spheres(sampler: &Sampler) -> Result<Scene, SceneError> {
    let (key_light, ambient) = default_lights();
    let matte = Shader::with_material(
        Color::new(0.1, 1., 0.5),
        Material {
            diffuse: 0.7,
            specular: 0.3,
            ..Default::default()
        },
    );
    let shiny = Shader::with_material(Color::new(1., 0.2, 0.1), Material::shiny());
    let glass = Shader::with_material(Color::black(), Material::glass());

    SceneBuilder::default()
        .object(floor(Shader::constant(Color::new(1., 0.9, 0.9))))
        .object(Object::sphere(Point::new(-0.5, 1., 0.5), 1., Arc::new(matte))?)
        .object(Object::sphere(Point::new(1.5, 0.5, -0.5), 0.5, Arc::new(shiny))?)
        .object(Object::sphere(Point::new(-1.5, 0.33, -0.75), 0.33, Arc::new(glass))?)
        .light(key_light)
        .light(ambient)
        .camera(perspective_camera(
            Point::new(0., 1.5, 5.),
            Point::new(0., 1., 0.),
            60.,
            sampler,
        )?)
        .build()
}

fn octahedron() -> Result<TriangleMesh, SceneError> {
    let positions = vec![
        Point::new(1., 0., 0.),
        Point::new(-1., 0., 0.),
        Point::new(0., 1., 0.),
        Point::new(0., -1., 0.),
        Point::new(0., 0., 1.),
        Point::new(0., 0., -1.),
    ];
    // on a unit octahedron every vertex normal points away from the center
    let normals = positions
        .iter()
        .map(|p| Normal::from(p.as_vector()))
        .collect();
    let uvs = positions
        .iter()
        .map(|p| Point2::new((p.x() + 1.) / 2., (p.y() + 1.) / 2.))
        .collect();
    let faces = vec![
        [0, 2, 4],
        [4, 2, 1],
        [1, 2, 5],
        [5, 2, 0],
        [0, 4, 3],
        [4, 1, 3],
        [1, 5, 3],
        [5, 0, 3],
    ];
    TriangleMesh::from_parts(positions, Some(normals), Some(uvs), faces)
}

fn mesh(sampler: &Sampler) -> Result<Scene, SceneError> {
    let (key_light, ambient) = default_lights();
    let shader = Shader::gradient(
        Arc::new(Shader::with_material(Color::new(0.2, 0.3, 1.), Material::shiny())),
        Arc::new(Shader::with_material(Color::new(1., 0.8, 0.1), Material::shiny())),
        UvAxis::V,
    );
    let transformation = Transformation::rotation_y(30.).translate(0., 1.2, 0.);

    SceneBuilder::default()
        .object(floor(Shader::constant(Color::gray(0.8))))
        .object(Object::mesh(octahedron()?, Arc::new(shader), transformation))
        .light(key_light)
        .light(ambient)
        .camera(perspective_camera(
            Point::new(0., 2., 4.),
            Point::new(0., 1., 0.),
            60.,
            sampler,
        )?)
        .build()
}

fn mirror(sampler: &Sampler) -> Result<Scene, SceneError> {
    let (_, ambient) = default_lights();
    // the mirrors would shadow the default light
    let key_light = PointLight::new(Point::new(-2., 6., 1.), Color::white(), 100.);
    let mirror = Arc::new(Shader::with_material(Color::black(), Material::mirror()));
    let wall = |angle: f64, distance: f64| {
        Object::plane(
            mirror.clone(),
            Transformation::rotation_x(90.)
                .rotate_y(angle)
                .translate(
                    distance * angle.to_radians().sin(),
                    0.,
                    distance * angle.to_radians().cos(),
                ),
        )
    };

    SceneBuilder::default()
        .object(floor(Shader::constant(Color::new(0.9, 0.9, 1.))))
        .object(wall(0., -4.))
        .object(wall(180., -4.))
        .object(Object::sphere(
            Point::new(0., 1., 0.),
            1.,
            Arc::new(Shader::with_material(Color::new(1., 0.3, 0.2), Material::shiny())),
        )?)
        .object(Object::sphere(
            Point::new(1.8, 0.5, 1.),
            0.5,
            Arc::new(Shader::with_material(Color::black(), Material::glass())),
        )?)
        .light(key_light)
        .light(ambient)
        .camera(perspective_camera(
            Point::new(3. * FRAC_1_SQRT_2, 2., 3. * FRAC_1_SQRT_2),
            Point::new(0., 1., 0.),
            70.,
            sampler,
        )?)
        .build()
}

fn checker(sampler: &Sampler) -> Result<Scene, SceneError> {
    let (key_light, ambient) = default_lights();
    let light = Arc::new(Shader::constant(Color::gray(0.9)));
    let dark = Arc::new(Shader::constant(Color::gray(0.1)));
    let ball = Shader::checker(
        Arc::new(Shader::with_material(Color::new(1., 0.1, 0.1), Material::shiny())),
        Arc::new(Shader::with_material(Color::white(), Material::shiny())),
        16,
        8,
    );

    SceneBuilder::default()
        .object(floor(Shader::checker(light, dark, 2, 2)))
        .object(Object::sphere(Point::new(0., 1., 0.), 1., Arc::new(ball))?)
        .light(key_light)
        .light(ambient)
        .camera(perspective_camera(
            Point::new(0., 2.5, 6.),
            Point::new(0., 0.8, 0.),
            50.,
            sampler,
        )?)
        .build()
}
