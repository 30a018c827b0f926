/// Plain 2D vector in playfield units (pixels, y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    pub fn sub(&self, other: Vec2) -> Self {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    pub fn add(&self, other: Vec2) -> Self {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    pub fn scale(&self, scalar: f64) -> Self {
        Vec2::new(self.x * scalar, self.y * scalar)
    }

    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn distance_sq(&self, other: Vec2) -> f64 {
        self.sub(other).length_sq()
    }
}

/// Anything that collides as a circle.
pub trait Circle {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f64;
}

/// Two circles overlap when their centres are no further apart than the sum
/// of their radii. Touching counts.
pub fn overlaps(a: &impl Circle, b: &impl Circle) -> bool {
    let reach = a.radius() + b.radius();
    a.center().distance_sq(b.center()) <= reach * reach
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
