pub mod mesh;
pub mod plane;
pub mod shape;
pub mod sphere;
pub mod triangle;
