//! Animated slider
//!
//! A rounded track, a fill in the strength color whose width follows a
//! spring toward `(value - min) / (max - min)`, and a white thumb at the
//! fill's end.
//!
//! ```ignore
//! let mut anims = SliderAnimations::new(profile.strengths());
//! // after an edit
//! anims.sync(profile.strengths());
//! anims.tick(1.0 / 60.0);
//! AnimatedSlider::new(value, color).fill(anims.fraction(0)).paint(builder, id, rect);
//! ```

use card_animation::{AnimationScheduler, SpringConfig, SpringId};
use card_core::{Color, Point, Rect};
use card_paint::{Gradient, Shadow};
use card_state::strengths::{MAX_VALUE, MIN_VALUE};
use card_state::StrengthCategory;

use crate::layout::THUMB_SIZE;
use crate::scene::{Element, ElementKind, SceneBuilder};

/// Fill fraction for a rating. Not clamped; out-of-range ratings give
/// fractions outside 0..=1.
pub fn fill_fraction(value: i32) -> f32 {
    (value - MIN_VALUE) as f32 / (MAX_VALUE - MIN_VALUE) as f32
}

/// Rating under a pointer at `x`, snapped to whole steps and clamped to the
/// slider range
pub fn slider_value_at(x: f32, track: Rect) -> i32 {
    if track.width <= 0.0 {
        return MIN_VALUE;
    }
    let t = ((x - track.x) / track.width).clamp(0.0, 1.0);
    let value = MIN_VALUE as f32 + t * (MAX_VALUE - MIN_VALUE) as f32;
    (value.round() as i32).clamp(MIN_VALUE, MAX_VALUE)
}

/// Spring-driven fill positions for the four strength sliders
pub struct SliderAnimations {
    scheduler: AnimationScheduler,
    springs: [SpringId; 4],
}

impl SliderAnimations {
    /// Springs at rest on the current ratings
    pub fn new(strengths: &[StrengthCategory; 4]) -> Self {
        let mut scheduler = AnimationScheduler::new();
        let springs = std::array::from_fn(|i| {
            scheduler.spring_at(SpringConfig::stiff(), fill_fraction(strengths[i].value))
        });
        Self { scheduler, springs }
    }

    /// Retarget every spring to the current ratings
    pub fn sync(&mut self, strengths: &[StrengthCategory; 4]) {
        for (id, strength) in self.springs.iter().zip(strengths) {
            self.scheduler.set_target(*id, fill_fraction(strength.value));
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.scheduler.tick(dt);
    }

    /// Jump every spring to its target
    pub fn settle(&mut self) {
        for id in self.springs {
            if let Some(spring) = self.scheduler.get_spring_mut(id) {
                let target = spring.target();
                spring.set_immediate(target);
            }
        }
    }

    /// Current animated fill for the slider at catalog `ordinal`
    pub fn fraction(&self, ordinal: usize) -> f32 {
        self.springs
            .get(ordinal)
            .and_then(|id| self.scheduler.value(*id))
            .unwrap_or(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.has_active_animations()
    }
}

/// One slider's paint parameters
#[derive(Clone, Copy, Debug)]
pub struct AnimatedSlider {
    pub value: i32,
    pub color: Color,
    /// Drawn fill fraction; defaults to the value's resting fraction
    pub fill: f32,
}

impl AnimatedSlider {
    pub fn new(value: i32, color: Color) -> Self {
        Self {
            value,
            color,
            fill: fill_fraction(value),
        }
    }

    pub fn fill(mut self, fraction: f32) -> Self {
        self.fill = fraction;
        self
    }

    pub fn paint(&self, builder: &mut SceneBuilder<'_>, id: &str, track: Rect) {
        let radius = track.height / 2.0;
        let track_color = builder.theme().slider_track;
        builder.ctx.fill_rounded_rect(
            track.x,
            track.y,
            track.width,
            track.height,
            radius,
            track_color,
        );

        // The visible fill stays inside the track
        let fill = self.fill.clamp(0.0, 1.0);
        let fill_width = track.width * fill;
        if fill_width > 0.0 {
            builder.ctx.fill_rounded_rect(
                track.x,
                track.y,
                fill_width,
                track.height,
                radius,
                self.color,
            );
            let shine = Gradient::linear(
                Point::new(track.x, track.y),
                Point::new(track.x + fill_width, track.y),
                &[
                    Color::TRANSPARENT,
                    Color::WHITE.with_alpha(0.2),
                    Color::TRANSPARENT,
                ],
            );
            builder.ctx.fill_rounded_rect(
                track.x,
                track.y,
                fill_width,
                track.height,
                radius,
                shine,
            );
        }

        let thumb_x = track.x + fill_width;
        let thumb_y = track.y + track.height / 2.0;
        let thumb = Rect::new(
            thumb_x - THUMB_SIZE / 2.0,
            thumb_y - THUMB_SIZE / 2.0,
            THUMB_SIZE,
            THUMB_SIZE,
        );
        builder.ctx.draw_shadow(thumb, THUMB_SIZE / 2.0, Shadow::sm());
        builder
            .ctx
            .fill_circle(thumb_x, thumb_y, THUMB_SIZE / 2.0, Color::WHITE);
        builder
            .ctx
            .stroke_circle(thumb_x, thumb_y, THUMB_SIZE / 2.0 - 1.0, self.color, 2.0);

        builder.push(
            Element::new(id, ElementKind::Slider, track)
                .text(self.value.to_string())
                .color(self.color)
                .value(self.fill),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_state::categories_for;
    use card_theme::ThemeName;

    #[test]
    fn test_fill_fraction_bounds() {
        assert_eq!(fill_fraction(1), 0.0);
        assert_eq!(fill_fraction(3), 0.5);
        assert_eq!(fill_fraction(5), 1.0);
        assert!(fill_fraction(9) > 1.0);
    }

    #[test]
    fn test_slider_value_at_snaps_and_clamps() {
        let track = Rect::new(100.0, 0.0, 400.0, 12.0);
        assert_eq!(slider_value_at(100.0, track), 1);
        assert_eq!(slider_value_at(300.0, track), 3);
        assert_eq!(slider_value_at(349.0, track), 3);
        assert_eq!(slider_value_at(351.0, track), 4);
        assert_eq!(slider_value_at(-50.0, track), 1);
        assert_eq!(slider_value_at(10_000.0, track), 5);
    }

    #[test]
    fn test_animations_follow_new_values() {
        let mut strengths = categories_for(ThemeName::Minimal);
        let mut anims = SliderAnimations::new(&strengths);
        assert_eq!(anims.fraction(0), fill_fraction(3));
        assert!(!anims.is_animating());

        strengths[0].value = 5;
        anims.sync(&strengths);
        anims.tick(1.0 / 60.0);
        assert!(anims.is_animating());
        let mid = anims.fraction(0);
        assert!(mid > 0.5 && mid < 1.0);

        anims.settle();
        assert_eq!(anims.fraction(0), 1.0);
        assert!(!anims.is_animating());
    }
}
