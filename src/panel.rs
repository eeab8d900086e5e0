// Parameter editor. Turns abstract window input into `ParamChange` events for
// the focused parameter of the current shape, and describes itself as HUD text.

use crate::color::Color;
use crate::session::ParamChange;
use crate::shape::{ParamValue, Shape};
use crate::vector::Vector2;

/// Editor input, already decoded from keys/mouse by the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    NextShape,
    FocusPrev,
    FocusNext,
    /// Left/Right: number, vector x, or color alpha. `sign` is -1 or +1.
    Adjust { sign: f64, coarse: bool },
    /// `[`/`]`: vector y.
    AdjustY { sign: f64, coarse: bool },
    /// Space: next palette color, alpha kept.
    CyclePalette,
    /// 0-9 / A-F: one digit of a typed `rrggbb`, applied at the sixth digit.
    HexDigit(char),
    /// Backspace: drop the last typed digit.
    HexErase,
    /// Left mouse button at a window pixel.
    PointAt(Vector2),
}

pub struct Panel {
    focus: usize,
    step: f64,
    coarse_step: f64,
    palette: Vec<Color>,
    palette_next: usize,
    hex_entry: String, // digits typed so far for the focused color
}

// Numbers are edited as integers, digits beyond this are cut for display.
fn trunc(v: f64, digits: i32) -> f64 {
    let m = 10f64.powi(digits);
    (v * m).trunc() / m
}

impl Panel {
    pub fn new(step: f64, coarse_step: f64, palette: Vec<Color>) -> Self {
        Self {
            focus: 0,
            step,
            coarse_step,
            palette,
            palette_next: 0,
            hex_entry: String::new(),
        }
    }

    /// Name of the focused parameter of `shape`.
    pub fn focused_name(&self, shape: &Shape) -> &'static str {
        let schema = shape.kind().schema();
        schema[self.focus.min(schema.len() - 1)].0
    }

    fn amount(&self, sign: f64, coarse: bool) -> f64 {
        sign * if coarse { self.coarse_step } else { self.step }
    }

    /// React to one input. Returns the event to dispatch, if any.
    pub fn handle(&mut self, input: Input, shape: &Shape) -> Option<ParamChange> {
        let count = shape.kind().schema().len();
        self.focus = self.focus.min(count - 1);

        let name = self.focused_name(shape);
        let current = shape.get(name)?;
        let value = match (input, current) {
            (Input::NextShape, _) => {
                self.focus = 0;
                self.hex_entry.clear();
                return Some(ParamChange::SelectShape(shape.kind().next()));
            }
            (Input::FocusPrev, _) => {
                self.focus = (self.focus + count - 1) % count;
                self.hex_entry.clear();
                return None;
            }
            (Input::FocusNext, _) => {
                self.focus = (self.focus + 1) % count;
                self.hex_entry.clear();
                return None;
            }

            (Input::Adjust { sign, coarse }, ParamValue::Number(n)) => {
                ParamValue::Number(n.trunc() + self.amount(sign, coarse))
            }
            (Input::Adjust { sign, coarse }, ParamValue::Vector(v)) => ParamValue::Vector(
                Vector2::new(v.x.trunc(), v.y) + Vector2::RIGHT * self.amount(sign, coarse),
            ),
            (Input::AdjustY { sign, coarse }, ParamValue::Vector(v)) => ParamValue::Vector(
                Vector2::new(v.x, v.y.trunc()) + Vector2::DOWN * self.amount(sign, coarse),
            ),
            (Input::PointAt(p), ParamValue::Vector(_)) => {
                ParamValue::Vector(Vector2::new(p.x.trunc(), p.y.trunc()))
            }

            (Input::Adjust { sign, coarse }, ParamValue::Color(c)) => {
                let a = (c.a.trunc() + self.amount(sign, coarse)).clamp(0.0, 255.0);
                ParamValue::Color(Color { a, ..c })
            }
            (Input::CyclePalette, ParamValue::Color(c)) => {
                if self.palette.is_empty() {
                    return None;
                }
                let next = self.palette[self.palette_next % self.palette.len()];
                self.palette_next = (self.palette_next + 1) % self.palette.len();
                ParamValue::Color(Color { a: c.a, ..next })
            }
            (Input::HexDigit(d), ParamValue::Color(c)) => {
                if !d.is_ascii_hexdigit() {
                    return None;
                }
                self.hex_entry.push(d.to_ascii_lowercase());
                if self.hex_entry.len() < 6 {
                    return None;
                }
                let typed = Color::from_hex(&self.hex_entry, c.a);
                self.hex_entry.clear();
                ParamValue::Color(typed.ok()?)
            }
            (Input::HexErase, ParamValue::Color(_)) => {
                self.hex_entry.pop();
                return None;
            }

            // Input that means nothing for this parameter kind.
            _ => return None,
        };

        Some(ParamChange::Set { name: name.to_string(), value })
    }

    /// HUD text for `shape`, one line per row; the focused parameter is marked.
    pub fn lines(&self, shape: &Shape) -> Vec<String> {
        let mut out = vec![format!("SHAPE: {} (TAB)", shape.kind())];
        for (i, (name, value)) in shape.params().into_iter().enumerate() {
            let marker = if i == self.focus { '>' } else { ' ' };
            let text = match value {
                ParamValue::Number(n) => format!("{}", trunc(n, 2)),
                ParamValue::Vector(v) => format!("{}, {}", trunc(v.x, 2), trunc(v.y, 2)),
                ParamValue::Color(c) if i == self.focus && !self.hex_entry.is_empty() => {
                    format!("#{:_<6} A:{}", self.hex_entry, trunc(c.a, 2))
                }
                ParamValue::Color(c) => format!("{} A:{}", c.hex(), trunc(c.a, 2)),
            };
            out.push(format!("{marker} {name}: {text}"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{BLUR_RADIUS, COLOR, POSITION, RADIUS, ShapeKind};

    fn circle() -> Shape {
        Shape::default_for(ShapeKind::Circle, 200.0, 100.0, 5.0)
    }

    fn panel() -> Panel {
        Panel::new(1.0, 10.0, vec![Color::rgb(255.0, 0.0, 0.0), Color::rgb(0.0, 255.0, 0.0)])
    }

    fn expect_set(change: Option<ParamChange>) -> (String, ParamValue) {
        match change {
            Some(ParamChange::Set { name, value }) => (name, value),
            other => panic!("expected Set, got {other:?}"),
        }
    }

    #[test]
    fn focus_wraps_around_schema() {
        let mut p = panel();
        let c = circle();
        assert_eq!(p.focused_name(&c), POSITION);
        assert_eq!(p.handle(Input::FocusPrev, &c), None);
        assert_eq!(p.focused_name(&c), BLUR_RADIUS);
        p.handle(Input::FocusNext, &c);
        assert_eq!(p.focused_name(&c), POSITION);
    }

    #[test]
    fn next_shape_resets_focus() {
        let mut p = panel();
        let c = circle();
        p.handle(Input::FocusNext, &c);
        assert_eq!(p.handle(Input::NextShape, &c), Some(ParamChange::SelectShape(ShapeKind::Box)));
        let b = Shape::default_for(ShapeKind::Box, 200.0, 100.0, 5.0);
        assert_eq!(p.focused_name(&b), POSITION);
    }

    #[test]
    fn number_steps_are_integer() {
        let mut p = panel();
        let c = circle().with_param(RADIUS, ParamValue::Number(30.7)).unwrap();
        p.handle(Input::FocusNext, &c);
        let (name, value) = expect_set(p.handle(Input::Adjust { sign: 1.0, coarse: false }, &c));
        assert_eq!(name, RADIUS);
        assert_eq!(value, ParamValue::Number(31.0));
        let (_, value) = expect_set(p.handle(Input::Adjust { sign: -1.0, coarse: true }, &c));
        assert_eq!(value, ParamValue::Number(20.0));
    }

    #[test]
    fn vector_edits_and_pointing() {
        let mut p = panel();
        let c = circle();
        let (_, v) = expect_set(p.handle(Input::Adjust { sign: 1.0, coarse: false }, &c));
        assert_eq!(v, ParamValue::Vector(Vector2::new(101.0, 50.0)));
        let (_, v) = expect_set(p.handle(Input::AdjustY { sign: -1.0, coarse: true }, &c));
        assert_eq!(v, ParamValue::Vector(Vector2::new(100.0, 40.0)));
        let (_, v) = expect_set(p.handle(Input::PointAt(Vector2::new(12.6, 3.2)), &c));
        assert_eq!(v, ParamValue::Vector(Vector2::new(12.0, 3.0)));
    }

    #[test]
    fn color_alpha_is_clamped_and_palette_keeps_alpha() {
        let mut p = panel();
        let c = circle();
        p.handle(Input::FocusNext, &c);
        p.handle(Input::FocusNext, &c);
        let (name, v) = expect_set(p.handle(Input::Adjust { sign: 1.0, coarse: true }, &c));
        assert_eq!(name, COLOR);
        assert_eq!(v, ParamValue::Color(Color::WHITE));

        let c = c.with_param(COLOR, ParamValue::Color(Color::rgba(9.0, 9.0, 9.0, 3.0))).unwrap();
        let (_, v) = expect_set(p.handle(Input::Adjust { sign: -1.0, coarse: true }, &c));
        assert_eq!(v, ParamValue::Color(Color::rgba(9.0, 9.0, 9.0, 0.0)));

        let (_, v) = expect_set(p.handle(Input::CyclePalette, &c));
        assert_eq!(v, ParamValue::Color(Color::rgba(255.0, 0.0, 0.0, 3.0)));
        let (_, v) = expect_set(p.handle(Input::CyclePalette, &c));
        assert_eq!(v, ParamValue::Color(Color::rgba(0.0, 255.0, 0.0, 3.0)));
    }

    #[test]
    fn typed_hex_sets_rgb_and_keeps_alpha() {
        let mut p = panel();
        let c = circle().with_param(COLOR, ParamValue::Color(Color::rgba(1.0, 1.0, 1.0, 77.0))).unwrap();
        p.handle(Input::FocusNext, &c);
        p.handle(Input::FocusNext, &c);
        for d in "1A2b3".chars() {
            assert_eq!(p.handle(Input::HexDigit(d), &c), None);
        }
        assert_eq!(p.lines(&c)[3], "> Color: #1a2b3_ A:77");
        let (name, v) = expect_set(p.handle(Input::HexDigit('c'), &c));
        assert_eq!(name, COLOR);
        assert_eq!(v, ParamValue::Color(Color::rgba(26.0, 43.0, 60.0, 77.0)));
        assert_eq!(p.lines(&c)[3], "> Color: #010101 A:77");
    }

    #[test]
    fn hex_entry_erases_and_resets_on_focus_change() {
        let mut p = panel();
        let c = circle();
        p.handle(Input::FocusNext, &c);
        p.handle(Input::FocusNext, &c);
        for d in "ff".chars() {
            p.handle(Input::HexDigit(d), &c);
        }
        p.handle(Input::HexErase, &c);
        assert_eq!(p.lines(&c)[3], "> Color: #f_____ A:255");
        assert_eq!(p.handle(Input::HexDigit('g'), &c), None);
        p.handle(Input::FocusNext, &c);
        p.handle(Input::FocusPrev, &c);
        assert_eq!(p.lines(&c)[3], "> Color: #ffffff A:255");
    }

    #[test]
    fn inputs_for_other_kinds_are_ignored() {
        let mut p = panel();
        let c = circle();
        assert_eq!(p.handle(Input::CyclePalette, &c), None);
        assert_eq!(p.handle(Input::HexDigit('a'), &c), None);
        p.handle(Input::FocusNext, &c);
        assert_eq!(p.handle(Input::AdjustY { sign: 1.0, coarse: false }, &c), None);
        assert_eq!(p.handle(Input::PointAt(Vector2::ZERO), &c), None);
    }

    #[test]
    fn hud_lines_mark_focus() {
        let p = panel();
        let c = circle().with_param(RADIUS, ParamValue::Number(3.14159)).unwrap();
        let lines = p.lines(&c);
        assert_eq!(lines[0], "SHAPE: circle (TAB)");
        assert_eq!(lines[1], "> Position: 100, 50");
        assert_eq!(lines[2], "  Radius: 3.14");
        assert_eq!(lines[3], "  Color: #ffffff A:255");
        assert_eq!(lines.len(), 5);
    }
}
