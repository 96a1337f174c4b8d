use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGB {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RGB {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::new(u8::MIN, u8::MIN, u8::MIN)
    }

    pub fn white() -> Self {
        Self::new(u8::MAX, u8::MAX, u8::MAX)
    }
}

impl std::fmt::Display for RGB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "#{:0>2X}{:0>2X}{:0>2X}", self.r, self.g, self.b)
    }
}

impl std::ops::Add for RGB {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r.saturating_add(rhs.r),
            self.g.saturating_add(rhs.g),
            self.b.saturating_add(rhs.b),
        )
    }
}

/// Standard HSV to RGB conversion with all three components in `[0, 1]`.
/// Float channels map to bytes by truncation, not rounding.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> RGB {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    RGB::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// A vivid color: random hue, full saturation, full brightness.
pub fn random_color<R: Rng>(rng: &mut R) -> RGB {
    hsv_to_rgb(rng.gen::<f64>(), 1.0, 1.0)
}

/// The color exactly `factor` (0.0 - 1.0) between the two colors. Each
/// channel truncates toward zero, so `factor == 1.0` reproduces `end` only
/// up to truncation. That asymmetry is part of the contract.
pub fn interpolate(start: RGB, end: RGB, factor: f64) -> RGB {
    let channel = |s: u8, e: u8| (factor * e as f64 + (1.0 - factor) * s as f64) as u8;
    RGB::new(
        channel(start.r, end.r),
        channel(start.g, end.g),
        channel(start.b, end.b),
    )
}
