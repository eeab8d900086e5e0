// Distance-field generators.
// Each generator captures its shape parameters and returns an evaluator that
// maps a pixel coordinate to a color, or `None` when the point is not covered.
//
// Edge policy (shared): d <= r is solid, r < d <= r + blur fades linearly to
// the transparent variant of the color, anything further is uncovered.

use crate::color::Color;
use crate::vector::Vector2;

/// Per-point evaluator. `None` leaves the underlying pixel untouched.
pub trait Field: Fn(Vector2) -> Option<Color> + Send + Sync {}

impl<F> Field for F where F: Fn(Vector2) -> Option<Color> + Send + Sync {}

#[inline]
fn edge(d: f64, r: f64, color: Color, blur_radius: f64) -> Option<Color> {
    if d <= r {
        Some(color)
    } else if d <= r + blur_radius {
        // Only reachable with blur_radius > 0, so the ratio is finite.
        Some(Color::lerp(color, color.transparent(), (d - r) / blur_radius))
    } else {
        None
    }
}

/// Disc centered at `center`.
pub fn circle(center: Vector2, radius: f64, color: Color, blur_radius: f64) -> impl Field {
    move |p| edge(Vector2::distance(p, center), radius, color, blur_radius)
}

/// Axis-aligned box with top-left `position` and full `size`.
/// `radius` rounds the corners and is also the solid threshold.
pub fn rounded_box(
    position: Vector2,
    size: Vector2,
    radius: f64,
    color: Color,
    blur_radius: f64,
) -> impl Field {
    let half = size / 2.0;
    let center = position + half;
    move |p| {
        let q = Vector2::abs(p - center) - half;
        let outside = Vector2::max(&[q, Vector2::ZERO]).unwrap_or(Vector2::ZERO);
        let d = outside.magnitude() + q.x.max(q.y).min(0.0);
        edge(d, radius, color, blur_radius)
    }
}

/// Capsule around the segment `a`-`b`.
/// A zero-length segment measures the distance to `a`.
pub fn line(a: Vector2, b: Vector2, thickness: f64, color: Color, blur_radius: f64) -> impl Field {
    let ba = b - a;
    let len_sq = Vector2::dot(ba, ba);
    let r = thickness / 2.0;
    move |p| {
        let pa = p - a;
        let h = if len_sq > 0.0 {
            (Vector2::dot(pa, ba) / len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let d = (pa - ba * h).magnitude();
        edge(d, r, color, blur_radius)
    }
}
