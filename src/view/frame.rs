//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use chirp::layout::Rect;

use super::fonts::FontSet;
use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// fit so drawing can never index past the end.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    /// Constrain subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    fn max_x(&self) -> usize {
        self.clip.map_or(self.width, |c| c.x1)
    }

    #[inline]
    fn max_y(&self) -> usize {
        self.clip.map_or(self.height, |c| c.y1)
    }

    #[inline]
    fn min_x(&self) -> usize {
        self.clip.map_or(0, |c| c.x0)
    }

    #[inline]
    fn min_y(&self) -> usize {
        self.clip.map_or(0, |c| c.y0)
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x = rect.x.max(0.0).round() as usize;
        let y = rect.y.max(0.0).round() as usize;
        let w = rect.width.max(0.0).round() as usize;
        let h = rect.height.max(0.0).round() as usize;
        self.fill_rect_px(x, y, w, h, color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x0 = x.min(self.width).max(self.min_x());
        let y0 = y.min(self.height).max(self.min_y());
        let x1 = (x + w).min(self.max_x());
        let y1 = (y + h).min(self.max_y());

        for py in y0..y1 {
            let row_start = py * self.width;
            for px in x0..x1 {
                self.buffer[row_start + px] = color;
            }
        }
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    #[allow(dead_code)]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a pixel with a coverage value (0.0 - 1.0), respecting the clip
    #[inline]
    fn blend_pixel(&mut self, x: usize, y: usize, color: u32, alpha: f32) {
        if x < self.min_x() || x >= self.max_x() || y < self.min_y() || y >= self.max_y() {
            return;
        }
        let idx = y * self.width + x;
        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    /// Draw a rectangle with a 1px border
    pub fn draw_bordered_rect(&mut self, rect: Rect, fill_color: u32, border_color: u32) {
        let x = rect.x.max(0.0).round() as usize;
        let y = rect.y.max(0.0).round() as usize;
        let w = rect.width.max(0.0).round() as usize;
        let h = rect.height.max(0.0).round() as usize;

        self.fill_rect_px(x, y, w, h, fill_color);

        // Top
        self.fill_rect_px(x, y, w, 1, border_color);
        // Bottom
        self.fill_rect_px(x, y + h.saturating_sub(1), w, 1, border_color);
        // Left
        self.fill_rect_px(x, y, 1, h, border_color);
        // Right
        self.fill_rect_px(x + w.saturating_sub(1), y, 1, h, border_color);
    }
}

/// Text rendering context wrapping the font chain and glyph cache.
///
/// Glyphs are placed on a fixed `char_width` grid so text lines up with
/// the layout's column math.
pub struct TextPainter<'a> {
    fonts: &'a FontSet,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    char_width: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        fonts: &'a FontSet,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        char_width: f32,
        line_height: usize,
    ) -> Self {
        Self {
            fonts,
            glyph_cache,
            font_size,
            ascent,
            char_width,
            line_height,
        }
    }

    /// Get the character width for monospace layout calculations
    #[inline]
    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    /// Get the line height in pixels
    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw text at the specified position
    pub fn draw(&mut self, frame: &mut Frame, x: usize, y: usize, text: &str, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.ascent;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let fonts = self.fonts;
            let font_size = self.font_size;
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| fonts.font_for(ch).rasterize(ch, font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let bitmap_idx = bitmap_y * metrics.width + bitmap_x;
                    let Some(&alpha) = bitmap.get(bitmap_idx) else {
                        continue;
                    };
                    if alpha == 0 {
                        continue;
                    }
                    let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize;
                    let py = (glyph_top + bitmap_y as f32) as isize;
                    if px >= 0 && py >= 0 {
                        frame.blend_pixel(px as usize, py as usize, color, alpha as f32 / 255.0);
                    }
                }
            }

            current_x += self.char_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_fill_rect() {
        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);

        frame.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), 0xFFFF0000);

        assert_eq!(frame.get_pixel(15, 15), 0xFFFF0000);
        assert_eq!(frame.get_pixel(5, 5), 0);
    }

    #[test]
    fn test_frame_out_of_bounds() {
        let mut buffer = vec![0u32; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);

        // These should not panic
        frame.fill_rect_px(8, 8, 100, 100, 0xFFFFFFFF);
        frame.blend_pixel(100, 100, 0xFFFFFFFF, 0.5);
        assert_eq!(frame.get_pixel(9, 9), 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(100, 100), 0);
    }

    #[test]
    fn test_frame_with_clip_restricts_fill_rect() {
        let mut buffer = vec![0u32; 100 * 100];
        let mut frame = Frame::new(&mut buffer, 100, 100);
        frame.set_clip(Rect::new(10.0, 10.0, 30.0, 30.0));

        frame.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0), 0xFFFF0000);

        assert_eq!(frame.get_pixel(20, 20), 0xFFFF0000);
        assert_eq!(frame.get_pixel(5, 5), 0);
        assert_eq!(frame.get_pixel(40, 40), 0);

        frame.clear_clip();
        frame.fill_rect_px(0, 0, 1, 1, 0xFF00FF00);
        assert_eq!(frame.get_pixel(0, 0), 0xFF00FF00);
    }

    #[test]
    fn test_bordered_rect() {
        let mut buffer = vec![0u32; 20 * 20];
        let mut frame = Frame::new(&mut buffer, 20, 20);
        frame.draw_bordered_rect(Rect::new(2.0, 2.0, 10.0, 10.0), 0xFF111111, 0xFF222222);
        assert_eq!(frame.get_pixel(2, 2), 0xFF222222);
        assert_eq!(frame.get_pixel(11, 11), 0xFF222222);
        assert_eq!(frame.get_pixel(5, 5), 0xFF111111);
    }

    #[test]
    fn test_short_buffer_is_clamped() {
        let mut buffer = vec![0u32; 10 * 5];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        frame.fill_rect_px(0, 0, 10, 10, 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(0, 7), 0);
    }

    #[test]
    fn test_blend_colors_halfway() {
        let result = blend_colors(0xFFFFFFFF, 0xFF000000, 0.5);
        let r = (result >> 16) & 0xFF;
        assert!(r > 100 && r < 160, "R channel: {}", r);
    }
}
