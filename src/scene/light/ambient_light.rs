use crate::math::color::Color;

#[derive(PartialEq, Debug, Clone)]
pub struct AmbientLight {
    color: Color,
    power: f64,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Color::white(),
            power: 0.1,
        }
    }
}

impl AmbientLight {
    pub fn new(color: Color, power: f64) -> Self {
        Self { color, power }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn intensity(&self) -> Color {
        self.color * self.power
    }
}
