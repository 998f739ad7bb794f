use super::{Canvas, Font, Rect, Rgb, Viewport, banner};
use glam::Vec2;
use std::io::{self, Write};

/// Circles narrower than this (in terminal pixels) plot a single pixel.
const MIN_RADIUS: f32 = 0.75;

/// Half-block terminal renderer: every cell shows two stacked pixels.
pub struct TermCanvas<W: Write> {
    viewport: Viewport,
    pixels: Vec<(f32, f32, f32)>,
    /// Text drawn straight into cells, on top of the pixels
    overlay: Vec<Option<(char, Rgb)>>,
    output_buf: Vec<u8>,
    out: W,
}

impl<W: Write> TermCanvas<W> {
    pub fn new(viewport: Viewport, out: W) -> Self {
        let pixel_count = viewport.pixel_width() * viewport.pixel_height();
        Self {
            viewport,
            pixels: vec![(0.0, 0.0, 0.0); pixel_count],
            overlay: vec![None; viewport.cols * viewport.rows],
            output_buf: Vec::with_capacity(pixel_count * 25),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn blend(&mut self, px: i32, py: i32, color: Rgb, alpha: f32) {
        let (w, h) = (self.viewport.pixel_width() as i32, self.viewport.pixel_height() as i32);
        if px < 0 || py < 0 || px >= w || py >= h {
            return;
        }
        let p = &mut self.pixels[py as usize * w as usize + px as usize];
        p.0 = p.0 * (1.0 - alpha) + color.0 as f32 * alpha;
        p.1 = p.1 * (1.0 - alpha) + color.1 as f32 * alpha;
        p.2 = p.2 * (1.0 - alpha) + color.2 as f32 * alpha;
    }

    fn pixel(&self, px: usize, py: usize) -> Rgb {
        let p = self.pixels[py * self.viewport.pixel_width() + px];
        (p.0 as u8, p.1 as u8, p.2 as u8)
    }

    fn put_cells(&mut self, text: &str, color: Rgb, anchor: Vec2) {
        let len = text.chars().count() as i32;
        let col = (anchor.x / self.viewport.scale) as i32 - len / 2;
        let row = (anchor.y / self.viewport.scale / 2.0) as i32;
        if row < 0 || row >= self.viewport.rows as i32 {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let x = col + i as i32;
            if x >= 0 && x < self.viewport.cols as i32 {
                self.overlay[row as usize * self.viewport.cols + x as usize] = Some((ch, color));
            }
        }
    }
}

impl<W: Write> Canvas for TermCanvas<W> {
    fn clear(&mut self, color: Rgb) {
        let c = (color.0 as f32, color.1 as f32, color.2 as f32);
        self.pixels.fill(c);
        self.overlay.fill(None);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let a = alpha as f32 / 255.0;
        let cx = center.x / self.viewport.scale;
        let cy = center.y / self.viewport.scale;
        let r = radius / self.viewport.scale;

        if r < MIN_RADIUS {
            self.blend(cx.floor() as i32, cy.floor() as i32, color, a);
            return;
        }

        let r2 = r * r;
        for py in (cy - r).floor() as i32..=(cy + r).ceil() as i32 {
            for px in (cx - r).floor() as i32..=(cx + r).ceil() as i32 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend(px, py, color, a);
                }
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let a = alpha as f32 / 255.0;
        let scale = self.viewport.scale;
        let x0 = (rect.x / scale).floor() as i32;
        let y0 = (rect.y / scale).floor() as i32;
        let x1 = ((rect.x + rect.w) / scale).ceil().max(x0 as f32 + 1.0) as i32;
        let y1 = ((rect.y + rect.h) / scale).ceil().max(y0 as f32 + 1.0) as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color, a);
            }
        }
    }

    fn draw_text(&mut self, text: &str, font: Font, color: Rgb, anchor: Vec2) {
        match font {
            Font::Cell => self.put_cells(text, color, anchor),
            Font::Banner { pixel } => banner::draw(self, text, pixel, color, anchor),
        }
    }

    fn present(&mut self) -> io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H"); // Move to home

        let width = self.viewport.pixel_width();
        let height = self.viewport.pixel_height();
        let mut prev_bg: Rgb = (255, 255, 255);
        let mut prev_fg: Rgb = (255, 255, 255);
        let mut first = true;

        for y in (0..height).step_by(2) {
            for x in 0..width {
                let top = self.pixel(x, y);
                let bot = self.pixel(x, y + 1);

                let (bg, fg, glyph) = match self.overlay[(y / 2) * width + x] {
                    Some((ch, text_color)) => {
                        let mix = (
                            ((top.0 as u16 + bot.0 as u16) / 2) as u8,
                            ((top.1 as u16 + bot.1 as u16) / 2) as u8,
                            ((top.2 as u16 + bot.2 as u16) / 2) as u8,
                        );
                        (mix, text_color, ch)
                    }
                    None => (top, bot, '▄'),
                };

                // Only emit color codes if changed
                if first || bg != prev_bg {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", bg.0, bg.1, bg.2)?;
                    prev_bg = bg;
                }
                if first || fg != prev_fg {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", fg.0, fg.1, fg.2)?;
                    prev_fg = fg;
                }
                first = false;

                let mut utf8 = [0u8; 4];
                self.output_buf
                    .extend_from_slice(glyph.encode_utf8(&mut utf8).as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            first = true;
            if y + 2 < height {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        self.out.write_all(&self.output_buf)?;
        self.out.flush()?;
        Ok(())
    }
}
