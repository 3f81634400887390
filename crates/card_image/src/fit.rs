//! CSS-style object-fit

use card_core::Rect;

/// How an image fills its box (CSS `object-fit`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectFit {
    /// Fill the box, cropping the image; aspect ratio kept
    #[default]
    Cover,
    /// Fit the whole image inside the box; aspect ratio kept
    Contain,
    /// Stretch to the box
    Fill,
}

/// Image alignment within its box (CSS `object-position`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectPosition {
    /// 0.0 = left, 0.5 = center, 1.0 = right
    pub x: f32,
    /// 0.0 = top, 0.5 = center, 1.0 = bottom
    pub y: f32,
}

impl ObjectPosition {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };
    pub const TOP_LEFT: Self = Self { x: 0.0, y: 0.0 };
}

impl Default for ObjectPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Compute the source crop (image pixels) and destination rect (relative to
/// the container origin) for drawing an image into a container.
pub fn calculate_fit_rects(
    image_width: u32,
    image_height: u32,
    container_width: f32,
    container_height: f32,
    fit: ObjectFit,
    position: ObjectPosition,
) -> (Rect, Rect) {
    let img_w = image_width as f32;
    let img_h = image_height as f32;
    let full_src = Rect::new(0.0, 0.0, img_w, img_h);

    if img_w <= 0.0 || img_h <= 0.0 {
        return (full_src, Rect::new(0.0, 0.0, 0.0, 0.0));
    }

    match fit {
        ObjectFit::Fill => (
            full_src,
            Rect::new(0.0, 0.0, container_width, container_height),
        ),
        ObjectFit::Contain => {
            let scale = (container_width / img_w).min(container_height / img_h);
            let dst_w = img_w * scale;
            let dst_h = img_h * scale;
            let dst_x = (container_width - dst_w) * position.x;
            let dst_y = (container_height - dst_h) * position.y;
            (full_src, Rect::new(dst_x, dst_y, dst_w, dst_h))
        }
        ObjectFit::Cover => {
            let scale = (container_width / img_w).max(container_height / img_h);
            let src_w = container_width / scale;
            let src_h = container_height / scale;
            let src_x = (img_w - src_w) * position.x;
            let src_y = (img_h - src_h) * position.y;
            (
                Rect::new(src_x, src_y, src_w, src_h),
                Rect::new(0.0, 0.0, container_width, container_height),
            )
        }
    }
}
