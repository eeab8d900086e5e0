// Two-component vector used for pixel coordinates, sizes and SDF math.
// Every operation returns a new value; scalar operands broadcast to both components.

use std::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    #[allow(dead_code)]
    pub const ONE: Vector2 = Vector2::new(1.0, 1.0);
    #[allow(dead_code)]
    pub const LEFT: Vector2 = Vector2::new(-1.0, 0.0);
    pub const RIGHT: Vector2 = Vector2::new(1.0, 0.0);
    // Screen space: y grows downwards.
    #[allow(dead_code)]
    pub const UP: Vector2 = Vector2::new(0.0, -1.0);
    pub const DOWN: Vector2 = Vector2::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction.
    /// A zero vector has no direction: the result is NaN in both components.
    #[allow(dead_code)]
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.magnitude()
    }

    /// Component-wise maximum over all vectors; `None` for an empty slice.
    pub fn max(vectors: &[Vector2]) -> Option<Vector2> {
        let (first, rest) = vectors.split_first()?;
        Some(rest.iter().fold(*first, |acc, v| {
            Vector2::new(acc.x.max(v.x), acc.y.max(v.y))
        }))
    }

    #[inline]
    pub fn abs(v: Vector2) -> Vector2 {
        Vector2::new(v.x.abs(), v.y.abs())
    }

    #[inline]
    pub fn dot(a: Vector2, b: Vector2) -> f64 {
        a.x * b.x + a.y * b.y
    }

    /// Unsigned distance between two points.
    #[inline]
    pub fn distance(a: Vector2, b: Vector2) -> f64 {
        (b - a).magnitude()
    }
}

macro_rules! impl_vector_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Vector2 {
            type Output = Vector2;
            #[inline]
            fn $method(self, rhs: Vector2) -> Vector2 {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl $trait<f64> for Vector2 {
            type Output = Vector2;
            #[inline]
            fn $method(self, rhs: f64) -> Vector2 {
                Vector2::new(self.x $op rhs, self.y $op rhs)
            }
        }
    };
}

impl_vector_op!(Add, add, +);
impl_vector_op!(Sub, sub, -);
impl_vector_op!(Mul, mul, *);
impl_vector_op!(Div, div, /);
