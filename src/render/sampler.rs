use std::{
    f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU},
    sync::OnceLock,
};

use clap::ValueEnum;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::{
    error::SceneError,
    math::{point2::Point2, tuple::Tuple, vector::Vector},
};

/// Largest `f64` below one, keeps samples inside the half-open unit square.
pub const ONE_MINUS_EPSILON: f64 = 1. - f64::EPSILON / 2.;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum SamplingPattern {
    /// One sample in the middle of the pixel
    #[default]
    Centered,
    /// Centers of an n x n grid
    Regular,
    /// One random point in every cell of an n x n grid
    Jittered,
    /// n * n uniformly random points
    Random,
}

/// Finite set of points in `[0, 1)^2`, generated once and reused for every pixel.
#[derive(Debug, Clone)]
pub struct Sampler {
    pattern: SamplingPattern,
    samples_per_axis: usize,
    seed: u64,
    points: OnceLock<Vec<Point2>>,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            pattern: SamplingPattern::Centered,
            samples_per_axis: 1,
            seed: 0,
            points: OnceLock::new(),
        }
    }
}

impl Sampler {
    pub fn new(
        pattern: SamplingPattern,
        samples_per_axis: usize,
        seed: u64,
    ) -> Result<Self, SceneError> {
        if samples_per_axis == 0 {
            return Err(SceneError::ZeroSampleCount);
        }
        Ok(Self {
            pattern,
            samples_per_axis,
            seed,
            points: OnceLock::new(),
        })
    }

    pub fn pattern(&self) -> SamplingPattern {
        self.pattern
    }

    pub fn samples_per_axis(&self) -> usize {
        self.samples_per_axis
    }

    pub fn sample_count(&self) -> usize {
        match self.pattern {
            SamplingPattern::Centered => 1,
            _ => self.samples_per_axis * self.samples_per_axis,
        }
    }

    /// The memoized sample points. Every call returns the same sequence.
    pub fn unit_square_samples(&self) -> &[Point2] {
        self.points.get_or_init(|| self.generate())
    }

    /// Same points in a different order, determined by `seed`.
    pub fn shuffled(&self, seed: u64) -> Self {
        let mut points = self.unit_square_samples().to_vec();
        points.shuffle(&mut SmallRng::seed_from_u64(seed));

        Self {
            pattern: self.pattern,
            samples_per_axis: self.samples_per_axis,
            seed,
            points: OnceLock::from(points),
        }
    }

    /// Samples mapped to the unit disc with the concentric mapping.
    pub fn unit_disc_samples(&self) -> Vec<Point2> {
        self.unit_square_samples()
            .iter()
            .map(|&p| concentric_sample_disc(p))
            .collect()
    }

    /// Directions on the +z hemisphere with density proportional to `cos(theta)^exponent`.
    pub fn hemisphere_samples(&self, exponent: f64) -> Vec<Vector> {
        self.unit_square_samples()
            .iter()
            .map(|p| {
                let phi = TAU * p.u;
                let cos_theta = (1. - p.v).powf(1. / (exponent + 1.));
                let sin_theta = (1. - cos_theta * cos_theta).max(0.).sqrt();
                Vector::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
            })
            .collect()
    }

    fn generate(&self) -> Vec<Point2> {
        let n = self.samples_per_axis;
        let cell = 1. / n as f64;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let grid = (0..n).flat_map(|row| (0..n).map(move |col| (col as f64, row as f64)));

        match self.pattern {
            SamplingPattern::Centered => vec![Point2::new(0.5, 0.5)],
            SamplingPattern::Regular => grid
                .map(|(col, row)| Point2::new((col + 0.5) * cell, (row + 0.5) * cell))
                .collect(),
            SamplingPattern::Jittered => grid
                .map(|(col, row)| {
                    Point2::new(
                        clamp_sample((col + rng.random::<f64>()) * cell),
                        clamp_sample((row + rng.random::<f64>()) * cell),
                    )
                })
                .collect(),
            SamplingPattern::Random => (0..n * n)
                .map(|_| {
                    Point2::new(
                        clamp_sample(rng.random()),
                        clamp_sample(rng.random()),
                    )
                })
                .collect(),
        }
    }
}

fn clamp_sample(value: f64) -> f64 {
    value.clamp(0., ONE_MINUS_EPSILON)
}

/// Maps `[0, 1)^2` onto the unit disc keeping relative areas.
pub fn concentric_sample_disc(p: Point2) -> Point2 {
    let x = 2. * p.u - 1.;
    let y = 2. * p.v - 1.;

    if x == 0. && y == 0. {
        return Point2::default();
    }

    let (r, theta) = if x.abs() > y.abs() {
        (x, FRAC_PI_4 * (y / x))
    } else {
        (y, FRAC_PI_2 - FRAC_PI_4 * (x / y))
    };
    Point2::new(r * theta.cos(), r * theta.sin())
}
