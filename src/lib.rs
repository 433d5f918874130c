pub mod approx_eq;
pub mod error;

pub mod math {
    pub mod color;
    pub mod matrix;
    pub mod normal;
    pub mod point;
    pub mod point2;
    pub mod transform;
    pub mod tuple;
    pub mod vector;
}

pub mod render {
    pub mod canvas;
    pub mod film;
    pub mod intersection;
    pub mod ray;
    pub mod sampler;
    pub mod stats;
}

pub mod scene;

pub mod shading {
    pub mod tracer;
}
