use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn len(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn basis(&self) -> Self {
        *self / self.len()
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl std::ops::Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, num: f64) -> Self {
        Self::new(self.x * num, self.y * num)
    }
}

impl std::ops::Div<f64> for Vector {
    type Output = Self;
    fn div(self, num: f64) -> Self {
        Self::new(self.x / num, self.y / num)
    }
}

impl std::convert::From<Point> for Vector {
    fn from(point: Point) -> Self {
        Self::new(point.x as f64, point.y as f64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line(Vector, Vector);

impl Line {
    pub fn iter(&self, step_size: f64) -> LineIter {
        let step = (self.1 - self.0).basis() * step_size;
        let current = self.0;
        let distance = (self.1 - self.0).len();

        LineIter {
            step,
            current,
            distance,
            step_size,
        }
    }
}

impl<T: Into<Vector>> std::convert::From<(T, T)> for Line {
    fn from((a, b): (T, T)) -> Self {
        Self(a.into(), b.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineIter {
    step: Vector,
    current: Vector,
    distance: f64,
    step_size: f64,
}

impl Iterator for LineIter {
    type Item = Vector;
    fn next(&mut self) -> Option<Vector> {
        if self.distance >= 0.0 {
            let current = self.current;
            self.current = self.current + self.step;
            self.distance -= self.step_size;
            Some(current)
        } else {
            None
        }
    }
}

/// A canvas coordinate. Signed because the centering shift is unclamped and
/// may legally push a point past the canvas edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "({:>6}, {:>6})", self.x, self.y)
    }
}

impl std::convert::From<Vector> for Point {
    fn from(vector: Vector) -> Self {
        Self::new(vector.x.round() as i64, vector.y.round() as i64)
    }
}

/// Draw `count` points uniformly at random from the square
/// `[padding, size - padding]` on both axes, inclusive. Duplicates allowed.
pub fn sample_points<R: Rng>(rng: &mut R, count: usize, size: i64, padding: i64) -> Vec<Point> {
    (0..count)
        .map(|_| {
            Point::new(
                rng.gen_range(padding..=size - padding),
                rng.gen_range(padding..=size - padding),
            )
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl BoundingBox {
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        Some(points.iter().fold(
            Self {
                min_x: first.x,
                max_x: first.x,
                min_y: first.y,
                max_y: first.y,
            },
            |b, p| Self {
                min_x: b.min_x.min(p.x),
                max_x: b.max_x.max(p.x),
                min_y: b.min_y.min(p.y),
                max_y: b.max_y.max(p.y),
            },
        ))
    }
}

/// Shift every point so the shape's bounding box sits centered in the padded
/// canvas. The offset measures the asymmetry of the box's two margins on each
/// axis; every point moves by half of it, floored. No re-clamping afterward.
pub fn recenter(points: &[Point], size: i64, padding: i64) -> Vec<Point> {
    let b = match BoundingBox::of(points) {
        Some(b) => b,
        None => return Vec::new(),
    };

    let off_x = (b.min_x - padding) - (size - padding - b.max_x);
    let off_y = (b.min_y - padding) - (size - padding - b.max_y);

    // div_euclid floors for negative offsets; truncating division would bias
    // shapes up and to the left by a pixel.
    points
        .iter()
        .map(|p| Point::new(p.x - off_x.div_euclid(2), p.y - off_y.div_euclid(2)))
        .collect()
}
