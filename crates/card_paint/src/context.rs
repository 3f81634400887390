//! Paint context - the recording drawing API

use card_core::{Color, Point, Rect};

use crate::bitmap::Bitmap;
use crate::gradient::Gradient;

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl FillStyle {
    /// Resolve the fill color at a point
    pub fn color_at(&self, point: Point) -> Color {
        match self {
            FillStyle::Color(color) => *color,
            FillStyle::Gradient(gradient) => gradient.color_at(point),
        }
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// Text weight; rasterizers pick the closest available face
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
}

impl FontWeight {
    /// CSS-style numeric weight
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
        }
    }
}

/// Drop shadow parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_y: f32,
    pub blur_radius: f32,
    pub color: Color,
}

impl Shadow {
    /// Large elevation shadow used under the card
    pub fn xl() -> Self {
        Self {
            offset_y: 25.0,
            blur_radius: 50.0,
            color: Color::new(0.0, 0.0, 0.0, 0.25),
        }
    }

    pub fn sm() -> Self {
        Self {
            offset_y: 1.0,
            blur_radius: 3.0,
            color: Color::new(0.0, 0.0, 0.0, 0.15),
        }
    }
}

/// A paint command for the rasterizer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        style: FillStyle,
    },
    FillRoundedRect {
        rect: Rect,
        radius: f32,
        style: FillStyle,
    },
    StrokeRoundedRect {
        rect: Rect,
        radius: f32,
        width: f32,
        style: FillStyle,
    },
    FillCircle {
        center: Point,
        radius: f32,
        style: FillStyle,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        width: f32,
        color: Color,
    },
    DrawShadow {
        rect: Rect,
        radius: f32,
        shadow: Shadow,
    },
    /// Image scaled to cover `rect`, clipped to a rounded rect of `radius`
    DrawImage {
        rect: Rect,
        radius: f32,
        bitmap: Bitmap,
    },
    /// Single line of text; `position` is the left end of the baseline
    DrawText {
        text: String,
        position: Point,
        size: f32,
        color: Color,
        weight: FontWeight,
    },
}

/// The paint context used by views to record drawing
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Append commands recorded elsewhere
    pub fn extend(&mut self, commands: impl IntoIterator<Item = PaintCommand>) {
        self.commands.extend(commands);
    }

    // === Shape drawing ===

    pub fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: impl Into<FillStyle>,
    ) {
        self.commands.push(PaintCommand::FillRect {
            rect: Rect::new(x, y, width, height),
            style: style.into(),
        });
    }

    pub fn fill_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        style: impl Into<FillStyle>,
    ) {
        self.commands.push(PaintCommand::FillRoundedRect {
            rect: Rect::new(x, y, width, height),
            radius,
            style: style.into(),
        });
    }

    pub fn stroke_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        width: f32,
        style: impl Into<FillStyle>,
    ) {
        self.commands.push(PaintCommand::StrokeRoundedRect {
            rect,
            radius,
            width,
            style: style.into(),
        });
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillCircle {
            center: Point::new(cx, cy),
            radius,
            style: style.into(),
        });
    }

    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color, width: f32) {
        self.commands.push(PaintCommand::StrokeCircle {
            center: Point::new(cx, cy),
            radius,
            width,
            color,
        });
    }

    // === Images ===

    pub fn draw_image(&mut self, rect: Rect, radius: f32, bitmap: Bitmap) {
        self.commands.push(PaintCommand::DrawImage {
            rect,
            radius,
            bitmap,
        });
    }

    // === Text ===

    pub fn draw_text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, color: Color) {
        self.draw_text_weighted(text, x, y, size, color, FontWeight::Normal);
    }

    pub fn draw_text_weighted(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        weight: FontWeight,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.commands.push(PaintCommand::DrawText {
            text,
            position: Point::new(x, y),
            size,
            color,
            weight,
        });
    }

    // === Shadows ===

    pub fn draw_shadow(&mut self, rect: Rect, radius: f32, shadow: Shadow) {
        self.commands.push(PaintCommand::DrawShadow {
            rect,
            radius,
            shadow,
        });
    }
}
