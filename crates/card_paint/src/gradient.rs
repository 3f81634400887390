//! Gradient fills

use card_core::{Color, Point};

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient between two points
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a linear gradient from evenly spaced colors
    pub fn linear(start: Point, end: Point, colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, color)| GradientStop::new(i as f32 / last, *color))
            .collect();
        Self { start, end, stops }
    }

    /// Color at an arbitrary point (projected onto the gradient axis)
    pub fn color_at(&self, point: Point) -> Color {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq <= f32::EPSILON {
            0.0
        } else {
            ((point.x - self.start.x) * dx + (point.y - self.start.y) * dy) / len_sq
        };
        self.sample(t)
    }

    /// Color at offset `t` along the axis (clamped to 0..=1)
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let Some(first) = self.stops.first() else {
            return Color::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = (b.offset - a.offset).max(f32::EPSILON);
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        self.stops.last().map(|s| s.color).unwrap_or(first.color)
    }
}
