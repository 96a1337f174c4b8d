use crate::error::ArtError;
use crate::geometry::{Line, Point, Vector};
use crate::imagery::RGB;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::path::Path;

// Sub-pixel stride for walking a stroke. Half a pixel leaves no gaps at any
// slope once each sample is stamped with the stroke's radius.
const STROKE_STEP: f64 = 0.5;

/// A square RGB raster owned by the render pipeline. Compositing is additive:
/// `a + b` sums channels with saturation at 255.
#[derive(Debug, Clone)]
pub struct Canvas(RgbImage);

impl Canvas {
    pub fn new(size: u32, fill: RGB) -> Self {
        Self(RgbImage::from_pixel(
            size,
            size,
            Rgb([fill.r, fill.g, fill.b]),
        ))
    }

    pub fn size(&self) -> u32 {
        self.0.width()
    }

    /// Stroke a straight line of the given width from `a` to `b`. Walks the
    /// segment at sub-pixel steps and stamps a filled disc at each sample;
    /// a zero-length segment stamps a single dot. Pixels falling outside the
    /// canvas are skipped, not an error.
    pub fn draw_line(&mut self, a: Point, b: Point, rgb: RGB, width: u32) {
        let radius = f64::max(width as f64 / 2.0, 0.5);
        if a == b {
            self.stamp(Vector::from(a), radius, rgb);
            return;
        }
        for center in Line::from((a, b)).iter(STROKE_STEP) {
            self.stamp(center, radius, rgb);
        }
    }

    fn stamp(&mut self, center: Vector, radius: f64, rgb: RGB) {
        let x_lo = (center.x() - radius).floor() as i64;
        let x_hi = (center.x() + radius).ceil() as i64;
        let y_lo = (center.y() - radius).floor() as i64;
        let y_hi = (center.y() + radius).ceil() as i64;
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                let dx = x as f64 - center.x();
                let dy = y as f64 - center.y();
                if dx * dx + dy * dy <= radius * radius {
                    self.put(x, y, rgb);
                }
            }
        }
    }

    fn put(&mut self, x: i64, y: i64, rgb: RGB) {
        let size = self.size() as i64;
        if x >= 0 && x < size && y >= 0 && y < size {
            self.0.put_pixel(x as u32, y as u32, Rgb([rgb.r, rgb.g, rgb.b]));
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> RGB {
        let p = self.0.get_pixel(x, y);
        RGB::new(p[0], p[1], p[2])
    }

    /// Downsample (or upsample) to a new edge length with a smooth
    /// anti-aliasing filter. This is what turns the supersampled strokes
    /// into clean edges at output resolution.
    pub fn resized(&self, new_size: u32) -> Self {
        Self(imageops::resize(
            &self.0,
            new_size,
            new_size,
            FilterType::Lanczos3,
        ))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ArtError> {
        self.0
            .save(path.as_ref())
            .map_err(|e| ArtError::persistence(path.as_ref(), e))
    }
}

impl std::ops::Add for Canvas {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        debug_assert_eq!(self.size(), rhs.size());
        self.0
            .pixels_mut()
            .zip(rhs.0.pixels())
            .for_each(|(a, b)| {
                a[0] = a[0].saturating_add(b[0]);
                a[1] = a[1].saturating_add(b[1]);
                a[2] = a[2].saturating_add(b[2]);
            });
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_is_filled() {
        let canvas = Canvas::new(4, RGB::new(9, 8, 7));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(RGB::new(9, 8, 7), canvas.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_add_sums_and_saturates() {
        let a = Canvas::new(2, RGB::new(200, 10, 0));
        let b = Canvas::new(2, RGB::new(100, 20, 5));
        let sum = a + b;
        assert_eq!(RGB::new(255, 30, 5), sum.pixel(0, 0));
        assert_eq!(RGB::new(255, 30, 5), sum.pixel(1, 1));
    }

    #[test]
    fn test_draw_line_covers_endpoints() {
        let mut canvas = Canvas::new(16, RGB::black());
        let red = RGB::new(255, 0, 0);
        canvas.draw_line(Point::new(2, 2), Point::new(13, 13), red, 1);
        assert_eq!(red, canvas.pixel(2, 2));
        assert_eq!(red, canvas.pixel(13, 13));
        assert_eq!(RGB::black(), canvas.pixel(13, 2));
    }

    #[test]
    fn test_draw_line_zero_length_is_a_dot() {
        let mut canvas = Canvas::new(8, RGB::black());
        let c = RGB::new(0, 255, 0);
        canvas.draw_line(Point::new(4, 4), Point::new(4, 4), c, 1);
        assert_eq!(c, canvas.pixel(4, 4));
        assert_eq!(RGB::black(), canvas.pixel(5, 5));
    }

    #[test]
    fn test_draw_line_width_spreads() {
        let mut canvas = Canvas::new(16, RGB::black());
        let c = RGB::new(0, 0, 255);
        canvas.draw_line(Point::new(2, 8), Point::new(13, 8), c, 5);
        // Two rows either side of the center row are covered at width 5.
        for y in 6..=10 {
            assert_eq!(c, canvas.pixel(8, y), "row {} uncovered", y);
        }
        assert_eq!(RGB::black(), canvas.pixel(8, 2));
    }

    #[test]
    fn test_draw_line_out_of_bounds_is_skipped() {
        let mut canvas = Canvas::new(8, RGB::black());
        // Entirely outside and crossing the corner: neither may panic.
        canvas.draw_line(Point::new(-10, -10), Point::new(-2, -2), RGB::white(), 3);
        canvas.draw_line(Point::new(-4, 4), Point::new(4, 4), RGB::white(), 3);
        assert_eq!(RGB::white(), canvas.pixel(0, 4));
    }

    #[test]
    fn test_resized_dimensions() {
        let canvas = Canvas::new(64, RGB::new(40, 40, 40));
        assert_eq!(16, canvas.resized(16).size());
        assert_eq!(64, canvas.size());
    }
}
