//! Scene rasterization
//!
//! [`Rasterizer`] turns a [`CardScene`] into PNG bytes. The
//! [`SoftwareRasterizer`] replays the scene's paint commands into a
//! [`Framebuffer`] at `scale` device pixels per logical pixel, with
//! signed-distance antialiasing for shapes and swash coverage masks for
//! text.

use std::io::Cursor;
use std::ops::Range;

use card_cn::CardScene;
use card_core::{Color, Point, Rect};
use card_image::{calculate_fit_rects, ObjectFit, ObjectPosition};
use card_paint::{Bitmap, FillStyle, FontWeight, PaintCommand, Shadow};
use card_text::{FontMeasurer, FontRegistry, GlyphRasterizer};
use image::{ImageFormat, RgbaImage};

use crate::framebuffer::Framebuffer;
use crate::{ExportError, Result};

/// Output density and backdrop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOptions {
    /// Device pixels per logical pixel
    pub scale: f32,
    /// Backdrop painted before the scene. Falls back to the scene's own
    /// background; with neither the backdrop stays transparent.
    pub background: Option<Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: None,
        }
    }
}

impl RasterOptions {
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }
}

/// Renders a scene to PNG bytes
pub trait Rasterizer: Send + Sync {
    fn render(&self, scene: &CardScene, options: &RasterOptions) -> Result<Vec<u8>>;
}

/// CPU rasterizer writing into an RGBA framebuffer
pub struct SoftwareRasterizer {
    fonts: Option<FontMeasurer>,
}

impl SoftwareRasterizer {
    /// Rasterizer using the system sans-serif faces. Without any installed
    /// font, text is skipped.
    pub fn new() -> Self {
        Self::with_registry(&mut FontRegistry::new())
    }

    /// Rasterizer using faces from `registry`
    pub fn with_registry(registry: &mut FontRegistry) -> Self {
        match FontMeasurer::new(registry) {
            Ok(fonts) => Self { fonts: Some(fonts) },
            Err(err) => {
                tracing::warn!(error = %err, "no usable font; exported text will be skipped");
                Self { fonts: None }
            }
        }
    }

    /// Rasterizer that paints shapes and images only
    pub fn without_text() -> Self {
        Self { fonts: None }
    }

    pub fn has_fonts(&self) -> bool {
        self.fonts.is_some()
    }

    /// Paint `scene` into a new framebuffer
    pub fn rasterize(&self, scene: &CardScene, options: &RasterOptions) -> Result<Framebuffer> {
        let scale = options.scale;
        let width = (scene.width * scale).ceil().max(0.0) as u32;
        let height = (scene.height * scale).ceil().max(0.0) as u32;
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyScene { width, height });
        }

        let mut painter = Painter {
            fb: Framebuffer::new(width, height),
            scale,
            glyphs: GlyphRasterizer::new(),
            skipped_text: 0,
        };
        if let Some(background) = options.background.or(scene.background) {
            painter.fb.clear(background);
        }

        for command in &scene.commands {
            painter.paint(command, self.fonts.as_ref())?;
        }

        if painter.skipped_text > 0 {
            tracing::warn!(runs = painter.skipped_text, "skipped text without a font");
        }
        tracing::debug!(
            width,
            height,
            commands = scene.commands.len(),
            glyphs = painter.glyphs.cached_glyphs(),
            "rasterized scene"
        );
        Ok(painter.fb)
    }
}

impl Default for SoftwareRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for SoftwareRasterizer {
    fn render(&self, scene: &CardScene, options: &RasterOptions) -> Result<Vec<u8>> {
        let fb = self.rasterize(scene, options)?;
        encode_png(fb)
    }
}

/// Encode a framebuffer as PNG
pub fn encode_png(fb: Framebuffer) -> Result<Vec<u8>> {
    let (width, height) = (fb.width(), fb.height());
    let image = RgbaImage::from_raw(width, height, fb.into_data())
        .ok_or_else(|| ExportError::Render(format!("framebuffer is not {width}x{height}")))?;
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

struct Painter {
    fb: Framebuffer,
    scale: f32,
    glyphs: GlyphRasterizer,
    skipped_text: usize,
}

impl Painter {
    fn paint(&mut self, command: &PaintCommand, fonts: Option<&FontMeasurer>) -> Result<()> {
        match command {
            PaintCommand::FillRect { rect, style } => self.fill_rounded(*rect, 0.0, style),
            PaintCommand::FillRoundedRect {
                rect,
                radius,
                style,
            } => self.fill_rounded(*rect, *radius, style),
            PaintCommand::StrokeRoundedRect {
                rect,
                radius,
                width,
                style,
            } => self.stroke_rounded(*rect, *radius, *width, style),
            PaintCommand::FillCircle {
                center,
                radius,
                style,
            } => self.fill_circle(*center, *radius, style),
            PaintCommand::StrokeCircle {
                center,
                radius,
                width,
                color,
            } => self.stroke_circle(*center, *radius, *width, *color),
            PaintCommand::DrawShadow {
                rect,
                radius,
                shadow,
            } => self.shadow(*rect, *radius, shadow),
            PaintCommand::DrawImage {
                rect,
                radius,
                bitmap,
            } => self.image(*rect, *radius, bitmap),
            PaintCommand::DrawText {
                text,
                position,
                size,
                color,
                weight,
            } => match fonts {
                Some(fonts) => self.text(fonts, text, *position, *size, *color, *weight)?,
                None => self.skipped_text += 1,
            },
        }
        Ok(())
    }

    /// Visit every device pixel whose square overlaps `bounds` (device
    /// space), with the pixel center in device and logical space
    fn each_pixel(&mut self, bounds: Rect, mut visit: impl FnMut(&mut Framebuffer, u32, u32, Point, Point)) {
        let xs = span(bounds.x, bounds.right(), self.fb.width());
        let ys = span(bounds.y, bounds.bottom(), self.fb.height());
        for y in ys {
            for x in xs.clone() {
                let device = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                let logical = Point::new(device.x / self.scale, device.y / self.scale);
                visit(&mut self.fb, x, y, device, logical);
            }
        }
    }

    fn fill_rounded(&mut self, rect: Rect, radius: f32, style: &FillStyle) {
        let shape = rect.scaled(self.scale);
        let radius = radius * self.scale;
        self.each_pixel(grow(shape, 1.0), |fb, x, y, device, logical| {
            let coverage = edge_coverage(rounded_rect_distance(device, shape, radius));
            fb.blend(x, y, style.color_at(logical), coverage);
        });
    }

    /// Stroke along the inside of the rect's edge
    fn stroke_rounded(&mut self, rect: Rect, radius: f32, width: f32, style: &FillStyle) {
        let shape = rect.scaled(self.scale);
        let radius = radius * self.scale;
        let half = width * self.scale / 2.0;
        self.each_pixel(grow(shape, 1.0), |fb, x, y, device, logical| {
            let d = rounded_rect_distance(device, shape, radius) + half;
            let coverage = edge_coverage(d.abs() - half);
            fb.blend(x, y, style.color_at(logical), coverage);
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, style: &FillStyle) {
        let c = Point::new(center.x * self.scale, center.y * self.scale);
        let r = radius * self.scale;
        let bounds = Rect::new(c.x - r - 1.0, c.y - r - 1.0, r * 2.0 + 2.0, r * 2.0 + 2.0);
        self.each_pixel(bounds, |fb, x, y, device, logical| {
            let coverage = edge_coverage(distance(device, c) - r);
            fb.blend(x, y, style.color_at(logical), coverage);
        });
    }

    /// Stroke centered on the circle's radius
    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color) {
        let c = Point::new(center.x * self.scale, center.y * self.scale);
        let r = radius * self.scale;
        let half = width * self.scale / 2.0;
        let extent = r + half + 1.0;
        let bounds = Rect::new(c.x - extent, c.y - extent, extent * 2.0, extent * 2.0);
        self.each_pixel(bounds, |fb, x, y, device, _| {
            let coverage = edge_coverage((distance(device, c) - r).abs() - half);
            fb.blend(x, y, color, coverage);
        });
    }

    fn shadow(&mut self, rect: Rect, radius: f32, shadow: &Shadow) {
        let mut shape = rect.scaled(self.scale);
        shape.y += shadow.offset_y * self.scale;
        let radius = radius * self.scale;
        let blur = (shadow.blur_radius * self.scale).max(1.0);
        self.each_pixel(grow(shape, blur), |fb, x, y, device, _| {
            let d = rounded_rect_distance(device, shape, radius);
            let coverage = 1.0 - smoothstep(-blur / 2.0, blur / 2.0, d);
            fb.blend(x, y, shadow.color, coverage);
        });
    }

    /// Cover-fit `bitmap` into `rect`, clipped to a rounded rect of `radius`
    fn image(&mut self, rect: Rect, radius: f32, bitmap: &Bitmap) {
        let shape = rect.scaled(self.scale);
        let radius = radius * self.scale;
        let (src, dst) = calculate_fit_rects(
            bitmap.width(),
            bitmap.height(),
            shape.width,
            shape.height,
            ObjectFit::Cover,
            ObjectPosition::CENTER,
        );
        if dst.width <= 0.0 || dst.height <= 0.0 {
            return;
        }
        self.each_pixel(shape, |fb, x, y, device, _| {
            let coverage = edge_coverage(rounded_rect_distance(device, shape, radius));
            if coverage <= 0.0 {
                return;
            }
            let u = src.x + (device.x - shape.x - dst.x) / dst.width * src.width;
            let v = src.y + (device.y - shape.y - dst.y) / dst.height * src.height;
            if u < 0.0 || v < 0.0 {
                return;
            }
            if let Some([r, g, b, a]) = bitmap.pixel(u as u32, v as u32) {
                fb.blend(x, y, Color::from_rgba8(r, g, b, a), coverage);
            }
        });
    }

    fn text(
        &mut self,
        fonts: &FontMeasurer,
        text: &str,
        position: Point,
        size: f32,
        color: Color,
        weight: FontWeight,
    ) -> Result<()> {
        let Some(face) = fonts.face_for(weight.value()) else {
            self.skipped_text += 1;
            return Ok(());
        };
        let size = size * self.scale;
        let mut pen_x = position.x * self.scale;
        let baseline = (position.y * self.scale).round() as i64;

        for ch in text.chars() {
            let glyph = self.glyphs.rasterize(face, face.glyph_id(ch), size)?;
            let left = pen_x.round() as i64 + glyph.bearing_x as i64;
            let top = baseline - glyph.bearing_y as i64;
            self.coverage_mask(left, top, glyph.width, glyph.height, &glyph.bitmap, color);
            pen_x += glyph.advance;
        }
        Ok(())
    }

    fn coverage_mask(&mut self, left: i64, top: i64, width: u32, height: u32, mask: &[u8], color: Color) {
        for row in 0..height {
            let y = top + row as i64;
            if y < 0 {
                continue;
            }
            for col in 0..width {
                let x = left + col as i64;
                if x < 0 {
                    continue;
                }
                let idx = (row * width + col) as usize;
                if let Some(&alpha) = mask.get(idx) {
                    if alpha > 0 {
                        self.fb.blend(x as u32, y as u32, color, alpha as f32 / 255.0);
                    }
                }
            }
        }
    }
}

/// Pixel indices overlapping `[lo, hi)`, clamped to `[0, max)`
fn span(lo: f32, hi: f32, max: u32) -> Range<u32> {
    let start = lo.floor().max(0.0) as u32;
    let end = (hi.ceil().max(0.0) as u32).min(max);
    start.min(end)..end
}

fn grow(rect: Rect, amount: f32) -> Rect {
    Rect::new(
        rect.x - amount,
        rect.y - amount,
        rect.width + amount * 2.0,
        rect.height + amount * 2.0,
    )
}

fn distance(a: Point, b: Point) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Signed distance from `p` to a rounded rect; negative inside
fn rounded_rect_distance(p: Point, rect: Rect, radius: f32) -> f32 {
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;
    let r = radius.min(half_w).min(half_h).max(0.0);
    let center = rect.center();
    let qx = (p.x - center.x).abs() - (half_w - r);
    let qy = (p.y - center.y).abs() - (half_h - r);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - r
}

/// Coverage of a pixel whose center is `d` pixels outside an edge
fn edge_coverage(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with(commands: Vec<PaintCommand>, width: f32, height: f32) -> CardScene {
        CardScene {
            width,
            height,
            background: None,
            commands,
            elements: Vec::new(),
        }
    }

    #[test]
    fn test_rounded_rect_distance_signs() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rounded_rect_distance(Point::new(5.0, 5.0), rect, 2.0) < 0.0);
        assert!(rounded_rect_distance(Point::new(20.0, 5.0), rect, 2.0) > 0.0);
        // Corner is cut off by the radius
        assert!(rounded_rect_distance(Point::new(0.2, 0.2), rect, 4.0) > 0.0);
        assert!(rounded_rect_distance(Point::new(0.2, 0.2), rect, 0.0) < 0.0);
    }

    #[test]
    fn test_scale_sets_output_size() {
        let scene = scene_with(Vec::new(), 10.0, 5.5);
        let fb = SoftwareRasterizer::without_text()
            .rasterize(&scene, &RasterOptions::default())
            .unwrap();
        assert_eq!((fb.width(), fb.height()), (20, 11));
        assert_eq!(fb.painted_pixels(), 0);
    }

    #[test]
    fn test_empty_scene_is_an_error() {
        let scene = scene_with(Vec::new(), 0.0, 10.0);
        let err = SoftwareRasterizer::without_text()
            .rasterize(&scene, &RasterOptions::default())
            .unwrap_err();
        assert!(matches!(err, ExportError::EmptyScene { width: 0, .. }));
    }

    #[test]
    fn test_fill_and_background() {
        let red = Color::from_hex(0xff0000);
        let scene = scene_with(
            vec![PaintCommand::FillRect {
                rect: Rect::new(2.0, 2.0, 4.0, 4.0),
                style: red.into(),
            }],
            8.0,
            8.0,
        );
        let options = RasterOptions::default()
            .with_scale(1.0)
            .with_background(Some(Color::WHITE));
        let fb = SoftwareRasterizer::without_text().rasterize(&scene, &options).unwrap();

        assert_eq!(fb.get_pixel(3, 3), Some([255, 0, 0, 255]));
        assert_eq!(fb.get_pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(fb.get_pixel(7, 7), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_circle_leaves_corners_clear() {
        let scene = scene_with(
            vec![PaintCommand::FillCircle {
                center: Point::new(5.0, 5.0),
                radius: 5.0,
                style: Color::BLACK.into(),
            }],
            10.0,
            10.0,
        );
        let options = RasterOptions::default().with_scale(1.0);
        let fb = SoftwareRasterizer::without_text().rasterize(&scene, &options).unwrap();
        assert_eq!(fb.get_pixel(5, 5), Some([0, 0, 0, 255]));
        assert_eq!(fb.get_pixel(0, 0).map(|p| p[3]), Some(0));
    }

    #[test]
    fn test_image_covers_its_rect() {
        let bitmap = Bitmap::new(1, 2, vec![0, 0, 255, 255, 0, 255, 0, 255]).unwrap();
        let scene = scene_with(
            vec![PaintCommand::DrawImage {
                rect: Rect::new(0.0, 0.0, 4.0, 4.0),
                radius: 0.0,
                bitmap,
            }],
            4.0,
            4.0,
        );
        let options = RasterOptions::default().with_scale(1.0);
        let fb = SoftwareRasterizer::without_text().rasterize(&scene, &options).unwrap();

        // Cover crops the tall image to its middle; top half blue, bottom green
        assert_eq!(fb.get_pixel(1, 0), Some([0, 0, 255, 255]));
        assert_eq!(fb.get_pixel(1, 3), Some([0, 255, 0, 255]));
        assert_eq!(fb.painted_pixels(), 16);
    }

    #[test]
    fn test_text_is_skipped_without_fonts() {
        let scene = scene_with(
            vec![PaintCommand::DrawText {
                text: "Aria".to_string(),
                position: Point::new(1.0, 8.0),
                size: 10.0,
                color: Color::BLACK,
                weight: FontWeight::Normal,
            }],
            20.0,
            10.0,
        );
        let fb = SoftwareRasterizer::without_text()
            .rasterize(&scene, &RasterOptions::default())
            .unwrap();
        assert_eq!(fb.painted_pixels(), 0);
    }

    #[test]
    fn test_png_signature() {
        let png = encode_png(Framebuffer::new(3, 2)).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }
}
