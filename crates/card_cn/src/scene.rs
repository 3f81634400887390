//! Retained scene: a display list plus addressable elements
//!
//! Views paint into a [`SceneBuilder`]. Alongside the paint commands every
//! view registers [`Element`]s (id, bounds, text) so that clicks can be
//! routed and headless runs can assert on what is on screen.

use card_core::{Color, Point, Rect};
use card_paint::{FontWeight, PaintCommand, PaintContext};
use card_text::TextMeasurer;
use card_theme::Theme;
use serde::Serialize;

/// What an element is, for routing and diagnostics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Container,
    Text,
    Button,
    Input,
    Image,
    Badge,
    Slider,
    Spinner,
    /// Hover text; registered but never painted
    Tooltip,
}

/// An addressable piece of the scene
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    #[serde(serialize_with = "serialize_rect")]
    pub rect: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Accent color, as `#rrggbb`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Numeric state: slider fill fraction, spinner angle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
    pub active: bool,
    pub disabled: bool,
}

fn serialize_rect<S: serde::Serializer>(rect: &Rect, serializer: S) -> Result<S::Ok, S::Error> {
    [rect.x, rect.y, rect.width, rect.height].serialize(serializer)
}

impl Element {
    pub fn new(id: impl Into<String>, kind: ElementKind, rect: Rect) -> Self {
        Self {
            id: id.into(),
            kind,
            rect,
            text: None,
            placeholder: None,
            color: None,
            value: None,
            active: false,
            disabled: false,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn value(mut self, value: f32) -> Self {
        self.value = Some(value);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether clicks on this element mean anything
    pub fn is_interactive(&self) -> bool {
        !self.disabled
            && matches!(
                self.kind,
                ElementKind::Button | ElementKind::Input | ElementKind::Slider
            )
    }
}

/// A rendered view tree
#[derive(Clone, Debug, PartialEq)]
pub struct CardScene {
    pub width: f32,
    pub height: f32,
    /// Backdrop color; `None` leaves the area outside painted shapes clear
    pub background: Option<Color>,
    pub commands: Vec<PaintCommand>,
    pub elements: Vec<Element>,
}

impl CardScene {
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Text of an element, if it exists and has any
    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.text.as_deref())
    }

    /// Topmost interactive element under `point`
    pub fn hit_test(&self, point: Point) -> Option<&Element> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.is_interactive() && e.rect.contains(point))
    }

    /// Every text fragment in the scene, in paint order
    pub fn painted_text(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            PaintCommand::DrawText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Size, color and weight of a run of text
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub weight: FontWeight,
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            weight: FontWeight::Normal,
        }
    }

    pub fn medium(mut self) -> Self {
        self.weight = FontWeight::Medium;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }
}

/// Accumulates paint commands and elements while views render
pub struct SceneBuilder<'a> {
    pub ctx: PaintContext,
    elements: Vec<Element>,
    measurer: &'a dyn TextMeasurer,
    theme: &'static Theme,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(theme: &'static Theme, measurer: &'a dyn TextMeasurer) -> Self {
        Self {
            ctx: PaintContext::new(),
            elements: Vec::new(),
            measurer,
            theme,
        }
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn measurer(&self) -> &'a dyn TextMeasurer {
        self.measurer
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn text_width(&self, text: &str, size: f32, weight: FontWeight) -> f32 {
        self.measurer.text_width(text, size, weight.value())
    }

    pub fn line_height(&self, size: f32) -> f32 {
        self.measurer.line_height(size)
    }

    /// Draw one line of text vertically centered in a row
    pub fn text_in_row(&mut self, text: &str, x: f32, row: (f32, f32), style: TextStyle) {
        let (row_top, row_height) = row;
        let baseline = row_top + row_height / 2.0 + style.size * 0.35;
        self.ctx
            .draw_text_weighted(text, x, baseline, style.size, style.color, style.weight);
    }

    /// Draw one line of text horizontally centered on `center_x`
    pub fn text_centered(&mut self, text: &str, center_x: f32, row: (f32, f32), style: TextStyle) {
        let width = self.text_width(text, style.size, style.weight);
        self.text_in_row(text, center_x - width / 2.0, row, style);
    }

    /// A fresh builder sharing theme and measurer, for content whose size
    /// must be known before its backdrop is painted
    pub fn layer(&self) -> SceneBuilder<'a> {
        SceneBuilder::new(self.theme, self.measurer)
    }

    /// Append a layer's commands and elements on top of this builder's
    pub fn merge(&mut self, mut layer: SceneBuilder<'a>) {
        self.ctx.extend(layer.ctx.take_commands());
        self.elements.append(&mut layer.elements);
    }

    pub fn finish(mut self, width: f32, height: f32, background: Option<Color>) -> CardScene {
        CardScene {
            width,
            height,
            background,
            commands: self.ctx.take_commands(),
            elements: self.elements,
        }
    }
}
