use std::sync::Arc;

use super::material::Material;
use crate::math::{color::Color, point2::Point2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UvAxis {
    U,
    V,
}

/// Surface description evaluated at the uv coordinates of a hit.
#[derive(Clone, Debug, PartialEq)]
pub enum Shader {
    Constant {
        color: Color,
        material: Material,
    },
    /// Alternates between two shaders on a `u_squares` x `v_squares` grid
    Checker {
        even: Arc<Shader>,
        odd: Arc<Shader>,
        u_squares: u32,
        v_squares: u32,
    },
    /// Linear blend from `start` at 0 to `end` at 1 along one uv axis
    Gradient {
        start: Arc<Shader>,
        end: Arc<Shader>,
        axis: UvAxis,
    },
}

impl Default for Shader {
    fn default() -> Self {
        Self::constant(Color::white())
    }
}

impl Shader {
    pub fn constant(color: Color) -> Self {
        Self::with_material(color, Material::default())
    }

    pub fn with_material(color: Color, material: Material) -> Self {
        Self::Constant { color, material }
    }

    pub fn checker(even: Arc<Shader>, odd: Arc<Shader>, u_squares: u32, v_squares: u32) -> Self {
        Self::Checker {
            even,
            odd,
            u_squares: u_squares.max(1),
            v_squares: v_squares.max(1),
        }
    }

    pub fn gradient(start: Arc<Shader>, end: Arc<Shader>, axis: UvAxis) -> Self {
        Self::Gradient { start, end, axis }
    }

    pub fn color_at(&self, uv: Point2) -> Color {
        match self {
            Shader::Constant { color, .. } => *color,
            Shader::Checker { .. } => self.checker_square(uv).color_at(uv),
            Shader::Gradient { start, end, axis } => {
                let t = Self::gradient_t(uv, *axis);
                start.color_at(uv) * (1. - t) + end.color_at(uv) * t
            }
        }
    }

    pub fn material_at(&self, uv: Point2) -> Material {
        match self {
            Shader::Constant { material, .. } => *material,
            Shader::Checker { .. } => self.checker_square(uv).material_at(uv),
            Shader::Gradient { start, end, axis } => {
                let t = Self::gradient_t(uv, *axis);
                start.material_at(uv).lerp(&end.material_at(uv), t)
            }
        }
    }

    fn checker_square(&self, uv: Point2) -> &Shader {
        match self {
            Shader::Checker {
                even,
                odd,
                u_squares,
                v_squares,
            } => {
                let u = (uv.u * *u_squares as f64).floor() as i64;
                let v = (uv.v * *v_squares as f64).floor() as i64;
                if (u + v).rem_euclid(2) == 0 { even } else { odd }
            }
            _ => self,
        }
    }

    fn gradient_t(uv: Point2, axis: UvAxis) -> f64 {
        match axis {
            UvAxis::U => uv.u,
            UvAxis::V => uv.v,
        }
        .clamp(0., 1.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    fn constant_shader_ignores_uv() {
        let shader = Shader::constant(Color::red());
        assert_eq!(shader.color_at(Point2::new(0.1, 0.9)), Color::red());
        assert_eq!(shader.material_at(Point2::new(0.7, 0.2)), Material::default());
        assert_eq!(Shader::default().color_at(Point2::default()), Color::white());
    }

    #[test]
    fn checker_alternates_squares() {
        let shader = Shader::checker(
            Arc::new(Shader::constant(Color::white())),
            Arc::new(Shader::with_material(Color::black(), Material::mirror())),
            2,
            2,
        );
        assert_eq!(shader.color_at(Point2::new(0.25, 0.25)), Color::white());
        assert_eq!(shader.color_at(Point2::new(0.75, 0.25)), Color::black());
        assert_eq!(shader.color_at(Point2::new(0.25, 0.75)), Color::black());
        assert_eq!(shader.color_at(Point2::new(0.75, 0.75)), Color::white());
        assert_eq!(
            shader.material_at(Point2::new(0.75, 0.25)),
            Material::mirror()
        );
    }

    #[test]
    fn gradient_blends_along_axis() {
        let shader = Shader::gradient(
            Arc::new(Shader::constant(Color::black())),
            Arc::new(Shader::constant(Color::white())),
            UvAxis::V,
        );
        assert_approx_eq_low_prec!(shader.color_at(Point2::new(0.9, 0.25)), Color::gray(0.25));
        assert_approx_eq_low_prec!(shader.color_at(Point2::new(0., 2.)), Color::white());
    }
}
