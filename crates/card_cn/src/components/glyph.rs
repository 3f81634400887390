//! Small monochrome glyphs drawn from primitives
//!
//! Stand-ins for the icon set; each fits a square box.

use card_core::{Color, Rect};
use card_paint::PaintContext;
use card_state::StrengthIcon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Palette,
    Upload,
    Download,
    Shuffle,
    Star,
    Strength(StrengthIcon),
}

/// Paint `glyph` into `bounds` in `color`
pub fn paint_glyph(ctx: &mut PaintContext, glyph: Glyph, bounds: Rect, color: Color) {
    let s = bounds.width.min(bounds.height);
    let (x, y) = (bounds.x, bounds.y);
    let c = bounds.center();
    let stroke = (s / 8.0).max(1.0);

    match glyph {
        Glyph::Palette => {
            ctx.stroke_circle(c.x, c.y, s * 0.42, color, stroke);
            for (dx, dy) in [(-0.15, -0.12), (0.12, -0.18), (0.18, 0.08)] {
                ctx.fill_circle(c.x + dx * s, c.y + dy * s, s * 0.08, color);
            }
        }
        Glyph::Upload | Glyph::Download => {
            // Shaft, head bar and base tray
            ctx.fill_rect(c.x - stroke / 2.0, y + s * 0.15, stroke, s * 0.55, color);
            let head_y = if glyph == Glyph::Upload {
                y + s * 0.15
            } else {
                y + s * 0.62
            };
            ctx.fill_rect(c.x - s * 0.22, head_y, s * 0.44, stroke, color);
            ctx.fill_rect(x + s * 0.1, y + s * 0.82, s * 0.8, stroke, color);
        }
        Glyph::Shuffle => {
            ctx.fill_rect(x + s * 0.1, y + s * 0.3, s * 0.8, stroke, color);
            ctx.fill_rect(x + s * 0.1, y + s * 0.65, s * 0.8, stroke, color);
            ctx.fill_circle(x + s * 0.85, y + s * 0.3 + stroke / 2.0, stroke, color);
            ctx.fill_circle(x + s * 0.85, y + s * 0.65 + stroke / 2.0, stroke, color);
        }
        Glyph::Star => {
            ctx.fill_circle(c.x, c.y, s * 0.3, color);
        }
        Glyph::Strength(StrengthIcon::Zap) => {
            ctx.fill_rounded_rect(c.x - s * 0.05, y + s * 0.1, s * 0.2, s * 0.45, s * 0.05, color);
            ctx.fill_rounded_rect(c.x - s * 0.15, y + s * 0.45, s * 0.2, s * 0.45, s * 0.05, color);
        }
        Glyph::Strength(StrengthIcon::Megaphone) => {
            ctx.fill_rect(x + s * 0.15, y + s * 0.35, s * 0.2, s * 0.3, color);
            ctx.fill_rounded_rect(x + s * 0.35, y + s * 0.15, s * 0.45, s * 0.7, s * 0.1, color);
        }
        Glyph::Strength(StrengthIcon::Users) => {
            ctx.fill_circle(x + s * 0.35, y + s * 0.35, s * 0.16, color);
            ctx.fill_circle(x + s * 0.68, y + s * 0.38, s * 0.13, color);
            ctx.fill_rounded_rect(x + s * 0.12, y + s * 0.6, s * 0.76, s * 0.28, s * 0.12, color);
        }
        Glyph::Strength(StrengthIcon::Lightbulb) => {
            ctx.fill_circle(c.x, y + s * 0.4, s * 0.28, color);
            ctx.fill_rect(c.x - s * 0.12, y + s * 0.72, s * 0.24, s * 0.16, color);
        }
    }
}

/// A ring of dots whose brightest dot sits at `angle_deg`
pub fn paint_spinner(ctx: &mut PaintContext, bounds: Rect, color: Color, angle_deg: f32) {
    const DOTS: usize = 8;
    let c = bounds.center();
    let radius = bounds.width.min(bounds.height) * 0.38;
    let dot = radius * 0.28;
    let lead = angle_deg.rem_euclid(360.0) / 360.0 * DOTS as f32;

    for i in 0..DOTS {
        let theta = (i as f32 / DOTS as f32) * std::f32::consts::TAU;
        // Distance behind the leading dot, in dot steps
        let behind = (lead - i as f32).rem_euclid(DOTS as f32);
        let alpha = 1.0 - behind / DOTS as f32 * 0.85;
        ctx.fill_circle(
            c.x + radius * theta.sin(),
            c.y - radius * theta.cos(),
            dot,
            color.with_alpha(color.a * alpha),
        );
    }
}
