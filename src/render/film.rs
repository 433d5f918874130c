use indicatif::{ParallelProgressIterator, ProgressBar};
use log::warn;
use rayon::prelude::*;

use super::{canvas::Canvas, stats::RenderStats};
use crate::{error::RenderError, math::color::Color};

/// Collects every camera sample per pixel. Pixel `(0, 0)` is the bottom-left corner.
#[derive(Debug, Clone)]
pub struct Film {
    width: usize,
    height: usize,
    pixels: Vec<Vec<Color>>,
}

impl Film {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec::new(); width * height],
        }
    }

    fn index(&self, (x, y): (usize, usize)) -> Option<usize> {
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    pub fn native_resolution(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn add_camera_sample(&mut self, pixel: (usize, usize), color: Color) {
        match self.index(pixel) {
            Some(id) => self.pixels[id].push(color),
            None => warn!("dropping sample for pixel {pixel:?} outside the film"),
        }
    }

    pub fn pixel_samples(&self, pixel: (usize, usize)) -> &[Color] {
        match self.index(pixel) {
            Some(id) => &self.pixels[id],
            None => &[],
        }
    }

    /// Box filter over the pixel's samples, black if it has none.
    pub fn average_at(&self, pixel: (usize, usize)) -> Color {
        let samples = self.pixel_samples(pixel);
        if samples.is_empty() {
            return Color::black();
        }
        samples.iter().copied().sum::<Color>() / samples.len() as f64
    }

    /// Averages every pixel and applies gamma. The canvas has row 0 at the top.
    pub fn develop(&self, gamma: f64) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let color = self.average_at((x, y)).gamma_corrected(gamma);
                canvas.write_pixel(x, self.height - 1 - y, color);
            }
        }
        canvas
    }

    /// Replaces the samples of each pixel with the output of `fun`, pixels in parallel.
    /// Stops at the first pixel that fails.
    pub fn fill_each_pixel<F>(
        &mut self,
        fun: F,
        progressbar: Option<ProgressBar>,
    ) -> Result<RenderStats, RenderError>
    where
        F: Fn(usize, usize, &mut RenderStats) -> Result<Vec<Color>, RenderError> + Sync,
    {
        let width = self.width;
        let progressbar = progressbar.unwrap_or_else(ProgressBar::hidden);

        self.pixels
            .par_iter_mut()
            .enumerate()
            .progress_with(progressbar)
            .map(|(id, samples)| {
                let mut stats = RenderStats::default();
                *samples = fun(id % width, id / width, &mut stats)?;
                Ok(stats)
            })
            .try_reduce(RenderStats::default, |a, b| Ok(a + b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    fn samples_are_kept_per_pixel() {
        let mut film = Film::new(3, 2);
        film.add_camera_sample((1, 1), Color::red());
        film.add_camera_sample((1, 1), Color::blue());
        film.add_camera_sample((7, 0), Color::green());

        assert_eq!(film.native_resolution(), (3, 2));
        assert_eq!(film.pixel_samples((1, 1)), &[Color::red(), Color::blue()]);
        assert!(film.pixel_samples((0, 0)).is_empty());
        assert!(film.pixel_samples((7, 0)).is_empty());
        assert_approx_eq_low_prec!(film.average_at((1, 1)), Color::new(0.5, 0., 0.5));
    }

    #[test]
    fn develop_flips_rows_and_applies_gamma() {
        let mut film = Film::new(2, 2);
        film.add_camera_sample((0, 0), Color::gray(0.25));
        film.add_camera_sample((1, 1), Color::white());

        let canvas = film.develop(0.5);
        assert_approx_eq_low_prec!(canvas.pixel_at(0, 1), Color::gray(0.5));
        assert_approx_eq_low_prec!(canvas.pixel_at(1, 0), Color::white());
        assert_approx_eq_low_prec!(canvas.pixel_at(0, 0), Color::black());
    }

    #[test]
    fn fill_each_pixel_visits_every_pixel_once() {
        let mut film = Film::new(4, 3);
        let stats = film
            .fill_each_pixel(
                |x, y, stats| {
                    stats.primary_rays += 1;
                    Ok(vec![Color::new(x as f64, y as f64, 0.)])
                },
                None,
            )
            .unwrap();

        assert_eq!(stats.primary_rays, 12);
        assert_eq!(film.pixel_samples((3, 2)), &[Color::new(3., 2., 0.)]);
        assert_eq!(film.pixel_samples((1, 2)), &[Color::new(1., 2., 0.)]);
    }

    #[test]
    fn fill_each_pixel_reports_failure() {
        let mut film = Film::new(2, 2);
        let result = film.fill_each_pixel(
            |x, y, _| match (x, y) {
                (1, 1) => Err(RenderError::FilmPointOutOfRange { u: 2., v: 2. }),
                _ => Ok(vec![Color::white()]),
            },
            None,
        );
        assert!(matches!(result, Err(RenderError::FilmPointOutOfRange { .. })));
    }
}
