use thiserror::Error;

/// Failures of the geometric algebra. These only happen while building a scene,
/// never per ray: ray code turns them into "no hit".
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    #[error("matrix is singular and has no inverse")]
    SingularMatrix,

    #[error("look-at eye and target are the same point")]
    CoincidentEyeTarget,

    #[error("look-at up vector is parallel to the viewing direction")]
    DegenerateUpVector,
}

pub type MathResult<T> = Result<T, MathError>;

/// Scene construction rejects. A scene that fails to build is never rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    #[error("triangle mesh has no faces")]
    EmptyMesh,

    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    InvalidVertexIndex {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("mesh has {found} {attribute} but {expected} vertices")]
    AttributeCountMismatch {
        attribute: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("orthographic view rectangle must be positive, got {width}x{height}")]
    InvalidViewRectangle { width: f64, height: f64 },

    #[error("film resolution must be non-zero, got {width}x{height}")]
    EmptyResolution { width: usize, height: usize },

    #[error("sampler needs at least one sample per axis")]
    ZeroSampleCount,

    #[error("field `{0}` was not set")]
    MissingField(&'static str),
}

impl From<derive_builder::UninitializedFieldError> for SceneError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::MissingField(err.field_name())
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("film point ({u}, {v}) lies outside the unit square")]
    FilmPointOutOfRange { u: f64, v: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),
}
