//! Drawing seam between the show and the terminal
//!
//! All coordinates are logical pixels: the viewport is always
//! [`LOGICAL_HEIGHT`] units tall and as wide as the terminal's aspect allows.

pub mod banner;
pub mod term;

use glam::Vec2;
use std::io;

pub use term::TermCanvas;

pub type Rgb = (u8, u8, u8);

pub const WHITE: Rgb = (255, 255, 255);

/// Height of the logical drawing space, independent of terminal size.
pub const LOGICAL_HEIGHT: f32 = 1080.0;

/// Terminal geometry, queried once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: usize,
    pub rows: usize,
    /// Logical width
    pub width: f32,
    /// Logical height
    pub height: f32,
    /// Logical units per terminal pixel (two pixels per cell vertically)
    pub scale: f32,
}

impl Viewport {
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        let cols = (cols as usize).max(1);
        let rows = (rows as usize).max(1);
        let scale = LOGICAL_HEIGHT / (rows * 2) as f32;
        Self {
            cols,
            rows,
            width: cols as f32 * scale,
            height: LOGICAL_HEIGHT,
            scale,
        }
    }

    pub fn pixel_width(&self) -> usize {
        self.cols
    }

    pub fn pixel_height(&self) -> usize {
        self.rows * 2
    }

    /// Logical point at the middle of a terminal cell.
    pub fn cell_center(&self, column: u16, row: u16) -> Vec2 {
        Vec2::new(
            (column as f32 + 0.5) * self.scale,
            (row as f32 * 2.0 + 1.0) * self.scale,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Font {
    /// One character per terminal cell
    Cell,
    /// 3x5 block glyphs, `pixel` logical units per glyph dot
    Banner { pixel: f32 },
}

impl Font {
    pub fn scaled(self, factor: f32) -> Font {
        match self {
            Font::Cell => Font::Cell,
            Font::Banner { pixel } => Font::Banner {
                pixel: pixel * factor,
            },
        }
    }
}

/// Pre-sized fonts for every piece of text on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fonts {
    pub timer: Font,
    pub message: Font,
    pub close: Font,
}

impl Fonts {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        // Wide enough for a 15 character banner with room to pulse
        let pixel = (viewport.width * 0.014).min(viewport.height / 20.0);
        Self {
            timer: Font::Cell,
            message: Font::Banner { pixel },
            close: Font::Cell,
        }
    }
}

pub trait Canvas {
    fn clear(&mut self, color: Rgb);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: u8);
    fn fill_rect(&mut self, rect: Rect, color: Rgb, alpha: u8);
    /// Draw `text` centred on `anchor`.
    fn draw_text(&mut self, text: &str, font: Font, color: Rgb, anchor: Vec2);
    fn present(&mut self) -> io::Result<()>;
}

#[cfg(test)]
pub mod testing {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Clear(Rgb),
        Circle {
            center: Vec2,
            radius: f32,
            color: Rgb,
            alpha: u8,
        },
        Rect {
            rect: Rect,
            color: Rgb,
            alpha: u8,
        },
        Text {
            text: String,
            font: Font,
            anchor: Vec2,
        },
        Present,
    }

    /// Canvas that remembers every call in order.
    #[derive(Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingCanvas {
        pub fn circles(&self) -> impl Iterator<Item = (f32, u8)> + '_ {
            self.calls.iter().filter_map(|c| match c {
                DrawCall::Circle { radius, alpha, .. } => Some((*radius, *alpha)),
                _ => None,
            })
        }

        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, color: Rgb) {
            self.calls.push(DrawCall::Clear(color));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: u8) {
            self.calls.push(DrawCall::Circle {
                center,
                radius,
                color,
                alpha,
            });
        }

        fn fill_rect(&mut self, rect: Rect, color: Rgb, alpha: u8) {
            self.calls.push(DrawCall::Rect { rect, color, alpha });
        }

        fn draw_text(&mut self, text: &str, font: Font, _color: Rgb, anchor: Vec2) {
            self.calls.push(DrawCall::Text {
                text: text.to_string(),
                font,
                anchor,
            });
        }

        fn present(&mut self) -> io::Result<()> {
            self.calls.push(DrawCall::Present);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_is_fixed_height() {
        let small = Viewport::from_terminal(80, 24);
        let large = Viewport::from_terminal(200, 60);
        assert_eq!(small.height, LOGICAL_HEIGHT);
        assert_eq!(large.height, LOGICAL_HEIGHT);
        assert!((small.scale - 22.5).abs() < 1e-4);
        assert!((small.width - 1800.0).abs() < 1e-2);
        assert_eq!(large.pixel_height(), 120);
    }

    #[test]
    fn test_cell_center_maps_back_into_cell() {
        let viewport = Viewport::from_terminal(80, 24);
        let p = viewport.cell_center(10, 3);
        assert_eq!((p.x / viewport.scale) as usize, 10);
        assert_eq!((p.y / viewport.scale / 2.0) as usize, 3);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 40.0, 40.0);
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(49.0, 30.0)));
        assert!(!rect.contains(Vec2::new(50.0, 30.0)));
        assert_eq!(rect.center(), Vec2::new(30.0, 30.0));
    }

    #[test]
    fn test_font_scaling() {
        assert_eq!(Font::Cell.scaled(2.0), Font::Cell);
        match (Font::Banner { pixel: 10.0 }).scaled(1.1) {
            Font::Banner { pixel } => assert!((pixel - 11.0).abs() < 1e-4),
            other => panic!("unexpected font {:?}", other),
        }
    }
}
