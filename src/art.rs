use crate::canvas::Canvas;
use crate::error::ArtError;
use crate::geometry::{self, Point};
use crate::imagery::{self, RGB};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::fs;
use std::path::{Path, PathBuf};

const BACKGROUND_COLOR: RGB = RGB { r: 0, g: 0, b: 0 };
const STARTING_THICKNESS: u32 = 1;

// Share of the supersampled edge reserved as a margin that point sampling
// stays out of.
const PADDING_RATIO: f64 = 0.1;

/// The validated knobs for one batch of images.
#[derive(Debug, Clone)]
pub struct ArtConfig {
    pub collection: String,
    pub count: u32,
    pub size_px: u32,
    pub line_count: u32,
    pub rescale_factor: u32,
    pub seed: Option<u64>,
    pub gallery_root: PathBuf,
    pub verbosity: u8,
}

impl ArtConfig {
    /// Edge length of the working canvas: everything renders supersampled
    /// and is downsampled once at the end.
    fn supersampled_size(&self) -> i64 {
        self.size_px as i64 * self.rescale_factor as i64
    }

    fn padding(&self) -> i64 {
        (self.supersampled_size() as f64 * PADDING_RATIO) as i64
    }

    pub fn validate(&self) -> Result<(), ArtError> {
        if self.collection.is_empty() {
            return Err(ArtError::Configuration(
                "collection name must not be empty".to_string(),
            ));
        }
        if self.size_px == 0 {
            return Err(ArtError::Configuration(
                "image size must be positive".to_string(),
            ));
        }
        if self.rescale_factor == 0 {
            return Err(ArtError::Configuration(
                "rescale factor must be positive".to_string(),
            ));
        }
        if self.supersampled_size() > u32::MAX as i64 {
            return Err(ArtError::Configuration(format!(
                "canvas edge of {} pixels is too large",
                self.supersampled_size()
            )));
        }
        match self.line_count {
            0 => {
                return Err(ArtError::Configuration(
                    "line count must be at least 2".to_string(),
                ))
            }
            1 => {
                return Err(ArtError::DegenerateInput(
                    "a single line cannot form a polygon".to_string(),
                ))
            }
            _ => {}
        }
        if 2 * self.padding() >= self.supersampled_size() {
            return Err(ArtError::Configuration(format!(
                "padding of {} leaves no room on a canvas edge of {}",
                self.padding(),
                self.supersampled_size()
            )));
        }
        Ok(())
    }
}

/// Generate every image of the collection, in parallel, best effort: a
/// failed image is reported and skipped, the rest of the batch still runs,
/// and the first failure comes back at the end so the caller can exit
/// nonzero. Already-written images are never rolled back.
pub fn generate_collection(config: &ArtConfig) -> Result<(), ArtError> {
    config.validate()?;

    let dir = config.gallery_root.join(&config.collection);
    fs::create_dir_all(&dir).map_err(|e| ArtError::persistence(&dir, e))?;

    let failures: Vec<(u32, ArtError)> = (0..config.count)
        .into_par_iter()
        .filter_map(|i| {
            let path = dir.join(format!("{}_image_{}.png", config.collection, i));
            let mut rng = rng_for(config.seed, i);
            generate_art(config, &mut rng, &path).err().map(|e| (i, e))
        })
        .collect();

    for (i, err) in &failures {
        eprintln!("image {} failed: {}", i, err);
    }

    match failures.into_iter().next() {
        Some((_, err)) => Err(err),
        None => Ok(()),
    }
}

// Each image draws from its own stream so parallel generations never share
// state. Seeded runs offset the seed by the image index.
fn rng_for(seed: Option<u64>, index: u32) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => StdRng::from_entropy(),
    }
}

fn generate_art<R: Rng>(config: &ArtConfig, rng: &mut R, path: &Path) -> Result<(), ArtError> {
    let size = config.supersampled_size();
    let padding = config.padding();

    let points = geometry::sample_points(rng, config.line_count as usize, size, padding);
    let points = geometry::recenter(&points, size, padding);

    let start_color = imagery::random_color(rng);
    let end_color = imagery::random_color(rng);

    if config.verbosity > 0 {
        println!(
            "rendering {} lines from {} to {} into {}",
            config.line_count,
            start_color,
            end_color,
            path.display()
        );
    }

    let art = render_polygon(&points, start_color, end_color, size as u32, config.line_count);
    art.resized(config.size_px).save(path)
}

/// Draw the closed polygon through `points` onto a black accumulator. Edge
/// colors sweep from `start` to `end`; stroke width grows edge by edge.
fn render_polygon(points: &[Point], start: RGB, end: RGB, size: u32, line_count: u32) -> Canvas {
    debug_assert!(points.len() >= 2);
    let mut accumulator = Canvas::new(size, BACKGROUND_COLOR);
    let last = points.len() - 1;

    for (i, &point) in points.iter().enumerate() {
        // The last edge closes the polygon.
        let second = if i == last { points[0] } else { points[i + 1] };

        let factor = i as f64 / last as f64;
        let rgb = imagery::interpolate(start, end, factor);

        // Each edge goes on its own black overlay so the additive blend adds
        // only the new line's pixels; everything already drawn is untouched
        // except where lines cross, where colors combine.
        let mut overlay = Canvas::new(size, BACKGROUND_COLOR);
        overlay.draw_line(point, second, rgb, stroke_width(i, line_count));
        accumulator = overlay + accumulator;
    }

    accumulator
}

// Strokes thicken by line_count / 5 per edge, so busier images thicken
// faster. Below 5 lines the increment is zero and every stroke stays thin.
fn stroke_width(edge: usize, line_count: u32) -> u32 {
    STARTING_THICKNESS + edge as u32 * (line_count / 5)
}
