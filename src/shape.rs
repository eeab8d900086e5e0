// Shape model: the closed set of shape kinds, their parameter schemas, and
// typed parameter values. A `Shape` always carries exactly its schema's keys
// because the values are the variant's fields.

use std::fmt::{self, Display};

use clap::ValueEnum;

use crate::color::Color;
use crate::error::Error;
use crate::sdf::{self, Field};
use crate::vector::Vector2;

pub const POSITION: &str = "Position";
pub const SIZE: &str = "Size";
pub const RADIUS: &str = "Radius";
pub const COLOR: &str = "Color";
pub const BLUR_RADIUS: &str = "Blur Radius";
pub const POSITION_A: &str = "Position A";
pub const POSITION_B: &str = "Position B";
pub const THICKNESS: &str = "Thickness";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ShapeKind {
    Circle,
    Box,
    Line,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Box, ShapeKind::Line];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Box => "box",
            ShapeKind::Line => "line",
        }
    }

    /// Next kind in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ShapeKind::Circle => ShapeKind::Box,
            ShapeKind::Box => ShapeKind::Line,
            ShapeKind::Line => ShapeKind::Circle,
        }
    }

    /// Ordered parameter names and the kind of value each one takes.
    pub fn schema(self) -> &'static [(&'static str, ParamKind)] {
        use ParamKind as K;
        match self {
            ShapeKind::Circle => &[
                (POSITION, K::Vector),
                (RADIUS, K::Number),
                (COLOR, K::Color),
                (BLUR_RADIUS, K::Number),
            ],
            ShapeKind::Box => &[
                (POSITION, K::Vector),
                (SIZE, K::Vector),
                (RADIUS, K::Number),
                (COLOR, K::Color),
                (BLUR_RADIUS, K::Number),
            ],
            ShapeKind::Line => &[
                (POSITION_A, K::Vector),
                (POSITION_B, K::Vector),
                (THICKNESS, K::Number),
                (COLOR, K::Color),
                (BLUR_RADIUS, K::Number),
            ],
        }
    }

    pub fn param_kind(self, name: &str) -> Option<ParamKind> {
        self.schema().iter().find(|(n, _)| *n == name).map(|(_, k)| *k)
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    Vector,
    Color,
}

impl Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamKind::Number => "a number",
            ParamKind::Vector => "a vector",
            ParamKind::Color => "a color",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Vector(Vector2),
    Color(Color),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Number(_) => ParamKind::Number,
            ParamValue::Vector(_) => ParamKind::Vector,
            ParamValue::Color(_) => ParamKind::Color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle {
        position: Vector2,
        radius: f64,
        color: Color,
        blur_radius: f64,
    },
    Box {
        position: Vector2,
        size: Vector2,
        radius: f64,
        color: Color,
        blur_radius: f64,
    },
    Line {
        a: Vector2,
        b: Vector2,
        thickness: f64,
        color: Color,
        blur_radius: f64,
    },
}

impl Shape {
    /// Starting values for a `width` x `height` canvas.
    pub fn default_for(kind: ShapeKind, width: f64, height: f64, blur_radius: f64) -> Self {
        let third = Vector2::new(width, height) / 3.0;
        match kind {
            ShapeKind::Circle => Shape::Circle {
                position: Vector2::new(width, height) / 2.0,
                radius: 30.0,
                color: Color::WHITE,
                blur_radius,
            },
            ShapeKind::Box => Shape::Box {
                position: third,
                size: third,
                radius: 10.0,
                color: Color::WHITE,
                blur_radius,
            },
            ShapeKind::Line => Shape::Line {
                a: third,
                b: third * 2.0,
                thickness: 10.0,
                color: Color::WHITE,
                blur_radius,
            },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Box { .. } => ShapeKind::Box,
            Shape::Line { .. } => ShapeKind::Line,
        }
    }

    /// Current values in schema order.
    pub fn params(&self) -> Vec<(&'static str, ParamValue)> {
        use ParamValue as V;
        match *self {
            Shape::Circle { position, radius, color, blur_radius } => vec![
                (POSITION, V::Vector(position)),
                (RADIUS, V::Number(radius)),
                (COLOR, V::Color(color)),
                (BLUR_RADIUS, V::Number(blur_radius)),
            ],
            Shape::Box { position, size, radius, color, blur_radius } => vec![
                (POSITION, V::Vector(position)),
                (SIZE, V::Vector(size)),
                (RADIUS, V::Number(radius)),
                (COLOR, V::Color(color)),
                (BLUR_RADIUS, V::Number(blur_radius)),
            ],
            Shape::Line { a, b, thickness, color, blur_radius } => vec![
                (POSITION_A, V::Vector(a)),
                (POSITION_B, V::Vector(b)),
                (THICKNESS, V::Number(thickness)),
                (COLOR, V::Color(color)),
                (BLUR_RADIUS, V::Number(blur_radius)),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.params().into_iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Copy of this shape with one parameter replaced.
    /// Unknown names and values of the wrong kind are rejected.
    pub fn with_param(&self, name: &str, value: ParamValue) -> Result<Shape, Error> {
        let kind = self.kind();
        let expected = kind.param_kind(name).ok_or_else(|| Error::UnknownParam {
            shape: kind.name(),
            name: name.to_string(),
        })?;
        if value.kind() != expected {
            return Err(Error::ParamKind {
                name: name.to_string(),
                expected,
                got: value.kind(),
            });
        }

        let mut next = *self;
        match (&mut next, value) {
            (Shape::Circle { position: v, .. }, ParamValue::Vector(x)) if name == POSITION => *v = x,
            (Shape::Box { position: v, .. }, ParamValue::Vector(x)) if name == POSITION => *v = x,
            (Shape::Box { size: v, .. }, ParamValue::Vector(x)) if name == SIZE => *v = x,
            (Shape::Line { a: v, .. }, ParamValue::Vector(x)) if name == POSITION_A => *v = x,
            (Shape::Line { b: v, .. }, ParamValue::Vector(x)) if name == POSITION_B => *v = x,

            (Shape::Circle { radius: v, .. }, ParamValue::Number(x))
            | (Shape::Box { radius: v, .. }, ParamValue::Number(x))
                if name == RADIUS =>
            {
                *v = x
            }
            (Shape::Line { thickness: v, .. }, ParamValue::Number(x)) if name == THICKNESS => *v = x,
            (
                Shape::Circle { blur_radius: v, .. }
                | Shape::Box { blur_radius: v, .. }
                | Shape::Line { blur_radius: v, .. },
                ParamValue::Number(x),
            ) if name == BLUR_RADIUS => *v = x,

            (
                Shape::Circle { color: v, .. }
                | Shape::Box { color: v, .. }
                | Shape::Line { color: v, .. },
                ParamValue::Color(x),
            ) => *v = x,

            // The schema check above leaves no other combination.
            _ => unreachable!("schema and shape fields disagree for '{name}'"),
        }
        Ok(next)
    }

    /// The distance-field evaluator for the current values.
    pub fn field(&self) -> Box<dyn Field> {
        match *self {
            Shape::Circle { position, radius, color, blur_radius } => {
                Box::new(sdf::circle(position, radius, color, blur_radius))
            }
            Shape::Box { position, size, radius, color, blur_radius } => {
                Box::new(sdf::rounded_box(position, size, radius, color, blur_radius))
            }
            Shape::Line { a, b, thickness, color, blur_radius } => {
                Box::new(sdf::line(a, b, thickness, color, blur_radius))
            }
        }
    }
}
