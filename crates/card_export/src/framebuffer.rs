//! RGBA8 framebuffer with source-over blending

use card_core::Color;

/// Straight-alpha RGBA8 pixels, row-major
#[derive(Clone, Debug)]
pub struct Framebuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// A fully transparent framebuffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get a pixel at (x, y) as RGBA
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data
            .get(idx..idx + 4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Replace every pixel
    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        for pixel in self.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    /// Composite `color` over the pixel at (x, y), scaled by `coverage`
    pub fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let src_a = (color.a * coverage).clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let Some(dst) = self.data.get_mut(idx..idx + 4) else {
            return;
        };

        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }
        let mix = |src: f32, dst: u8| {
            let dst = dst as f32 / 255.0;
            let value = (src * src_a + dst * dst_a * (1.0 - src_a)) / out_a;
            (value.clamp(0.0, 1.0) * 255.0).round() as u8
        };
        dst[0] = mix(color.r, dst[0]);
        dst[1] = mix(color.g, dst[1]);
        dst[2] = mix(color.b, dst[2]);
        dst[3] = (out_a * 255.0).round() as u8;
    }

    /// Number of pixels with any opacity
    pub fn painted_pixels(&self) -> usize {
        self.data.chunks_exact(4).filter(|p| p[3] > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let fb = Framebuffer::new(4, 3);
        assert_eq!(fb.data().len(), 48);
        assert_eq!(fb.get_pixel(3, 2), Some([0, 0, 0, 0]));
        assert_eq!(fb.get_pixel(4, 0), None);
        assert_eq!(fb.painted_pixels(), 0);
    }

    #[test]
    fn test_opaque_blend_replaces() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(Color::WHITE);
        fb.blend(1, 1, Color::from_hex(0xff0000), 1.0);
        assert_eq!(fb.get_pixel(1, 1), Some([255, 0, 0, 255]));
        assert_eq!(fb.get_pixel(0, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_partial_coverage_over_transparent_keeps_color() {
        let mut fb = Framebuffer::new(1, 1);
        fb.blend(0, 0, Color::from_hex(0x0000ff), 0.5);
        assert_eq!(fb.get_pixel(0, 0), Some([0, 0, 255, 128]));
    }

    #[test]
    fn test_half_black_over_white() {
        let mut fb = Framebuffer::new(1, 1);
        fb.clear(Color::WHITE);
        fb.blend(0, 0, Color::BLACK.with_alpha(0.5), 1.0);
        assert_eq!(fb.get_pixel(0, 0), Some([128, 128, 128, 255]));
    }

    #[test]
    fn test_blend_out_of_bounds_is_ignored() {
        let mut fb = Framebuffer::new(1, 1);
        fb.blend(5, 5, Color::BLACK, 1.0);
        assert_eq!(fb.painted_pixels(), 0);
    }
}
