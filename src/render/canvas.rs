use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use clap::ValueEnum;

use crate::{error::RenderError, math::color::Color};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum ImageFormat {
    Ppm,
    #[default]
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// Final image, row 0 at the top.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; height * width],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Color::black())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.width * y + x
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }
    pub fn write_pixel(&mut self, x: usize, y: usize, new_color: Color) {
        let id = self.index(x, y);
        self.pixels[id] = new_color;
    }

    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.as_scaled_values())
            .collect()
    }

    pub fn save_to_file(&self, path: &Path, format: ImageFormat) -> Result<(), RenderError> {
        let writer = BufWriter::new(File::create(path)?);
        match format {
            ImageFormat::Ppm => self.write_ppm(writer),
            ImageFormat::Png => self.write_png(writer),
        }
    }
}

/// plain ppm (P3)
impl Canvas {
    const MAX_LINE_LEN: usize = 70;

    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    /// One image row per line at least, wrapped so no line exceeds 70 characters.
    fn ppm_data(&self) -> String {
        let mut data = String::new();
        for row in self.pixels.chunks(self.width.max(1)) {
            let mut line_len = 0;
            for value in row.iter().flat_map(|color| color.as_scaled_values()) {
                let value = value.to_string();
                if line_len > 0 && line_len + 1 + value.len() > Self::MAX_LINE_LEN {
                    data.push('\n');
                    line_len = 0;
                }
                if line_len > 0 {
                    data.push(' ');
                    line_len += 1;
                }
                data.push_str(&value);
                line_len += value.len();
            }
            data.push('\n');
        }
        data
    }

    pub fn write_ppm(&self, mut writer: impl Write) -> Result<(), RenderError> {
        writer.write_all(self.ppm_header().as_bytes())?;
        writer.write_all(self.ppm_data().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// png, 8 bit rgb
impl Canvas {
    pub fn write_png(&self, writer: impl Write) -> Result<(), RenderError> {
        let mut encoder = png::Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.as_u8_rgb())?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    fn index() {
        let width = 5;
        let height = 3;
        let canvas = Canvas::new(width, height);
        assert_eq!(canvas.index(0, 1), width);
        assert_eq!(canvas.index(1, 0), 1);
        assert_eq!(canvas.index(width - 1, height - 1), width * height - 1);
        assert_eq!(canvas.index(2, 1), width + 2);
    }

    #[test]
    fn write_pixel() {
        let mut canvas = Canvas::new(10, 10);
        canvas.write_pixel(2, 3, Color::red());
        assert_approx_eq_low_prec!(canvas.pixel_at(2, 3), Color::red());
        assert_approx_eq_low_prec!(canvas.pixel_at(3, 2), Color::black());
    }

    #[test]
    fn ppm_header() {
        assert_eq!(Canvas::new(5, 3).ppm_header(), "P3\n5 3\n255\n");
    }

    #[test]
    fn ppm_pixel_data() {
        let mut canvas = Canvas::new(5, 3);

        canvas.write_pixel(0, 0, Color::new(1.5, 0., 0.));
        canvas.write_pixel(2, 1, Color::new(0., 0.5, 0.));
        canvas.write_pixel(4, 2, Color::new(-1.5, 0., 1.));

        assert_eq!(
            canvas.ppm_data(),
            "255 0 0 0 0 0 0 0 0 0 0 0 0 0 0\n\
             0 0 0 0 0 0 0 128 0 0 0 0 0 0 0\n\
             0 0 0 0 0 0 0 0 0 0 0 0 0 0 255\n"
        )
    }

    #[test]
    fn split_long_lines_ppm_data() {
        let canvas = Canvas::with_color(10, 2, Color::new(1., 0.8, 0.6));

        assert_eq!(
            canvas.ppm_data(),
            "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204\n\
             153 255 204 153 255 204 153 255 204 153 255 204 153\n\
             255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204\n\
             153 255 204 153 255 204 153 255 204 153 255 204 153\n"
        )
    }

    #[test]
    fn png_has_signature() {
        let mut bytes = Vec::new();
        Canvas::with_color(4, 2, Color::green())
            .write_png(&mut bytes)
            .unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
