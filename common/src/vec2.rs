use rand::Rng;
use std::fmt;
use std::ops::{Add, Sub};

/// Cartesian 2D vector, also used as a point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Length (magnitude) of the vector.
    pub fn mag(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Normalized vector. The zero vector normalizes to zero.
    pub fn norm(self) -> Self {
        let mag = self.mag();
        if mag == 0.0 {
            return Self::default();
        }
        Self::new(self.x / mag, self.y / mag)
    }

    /// Distance between two points.
    pub fn dist(self, other: Self) -> f32 {
        (self - other).mag()
    }

    /// Inclusive point-in-rectangle test against the corners `nw` (min) and
    /// `se` (max).
    pub fn within(self, nw: Self, se: Self) -> bool {
        self.x >= nw.x && self.y >= nw.y && self.x <= se.x && self.y <= se.y
    }

    /// Advances one step of `speed` toward `to`, snapping to `to` when the
    /// remaining distance would be overshot.
    pub fn move_to(self, to: Self, speed: f32) -> Self {
        let delta = to - self;
        let mag = delta.mag();
        if mag <= speed {
            return to;
        }
        let norm = delta.norm();
        Self::new(self.x + speed * norm.x, self.y + speed * norm.y)
    }

    /// Random offset vector with magnitude up to `radius`, uniform in angle.
    pub fn rand_from<R: Rng>(radius: f32, rng: &mut R) -> Self {
        let polar = PVec2 {
            r: rng.gen_range(-radius..=radius),
            phi: rng.gen_range(0.0..std::f32::consts::TAU),
        };
        Self::from(polar)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x:{:.2}, y:{:.2}}}", self.x, self.y)
    }
}

/// Polar counterpart of [`Vec2`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PVec2 {
    pub r: f32,
    pub phi: f32,
}

impl From<PVec2> for Vec2 {
    fn from(p: PVec2) -> Self {
        Vec2::new(p.r * p.phi.cos(), p.r * p.phi.sin())
    }
}

impl From<Vec2> for PVec2 {
    fn from(v: Vec2) -> Self {
        PVec2 {
            r: (v.x * v.x + v.y * v.y).sqrt(),
            phi: v.y.atan2(v.x),
        }
    }
}
