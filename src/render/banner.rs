//! Block letters for text that has to scale.

use super::{Canvas, Rect, Rgb};
use glam::Vec2;

const GLYPH_W: usize = 3;
const GLYPH_H: usize = 5;
/// Glyph width plus one dot of spacing
const ADVANCE: usize = GLYPH_W + 1;

/// 3x5 dot pattern, one row per entry, bit 2 is the left column.
fn glyph(ch: char) -> [u8; GLYPH_H] {
    match ch.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b110, 0b001, 0b010, 0b100, 0b111],
        '3' => [0b110, 0b001, 0b010, 0b001, 0b110],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b110, 0b001, 0b110],
        '6' => [0b011, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b110],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        _ => [0; GLYPH_H],
    }
}

/// Logical size of `text` at `pixel` units per dot.
pub fn measure(text: &str, pixel: f32) -> Vec2 {
    let chars = text.chars().count();
    if chars == 0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (chars * ADVANCE - 1) as f32 * pixel,
        GLYPH_H as f32 * pixel,
    )
}

/// Draw `text` as filled squares centred on `anchor`.
pub fn draw<C: Canvas + ?Sized>(canvas: &mut C, text: &str, pixel: f32, color: Rgb, anchor: Vec2) {
    let origin = anchor - measure(text, pixel) / 2.0;

    for (i, ch) in text.chars().enumerate() {
        let rows = glyph(ch);
        let left = origin.x + (i * ADVANCE) as f32 * pixel;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (0b100 >> col) != 0 {
                    canvas.fill_rect(
                        Rect::new(
                            left + col as f32 * pixel,
                            origin.y + row as f32 * pixel,
                            pixel,
                            pixel,
                        ),
                        color,
                        255,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{DrawCall, RecordingCanvas};

    #[test]
    fn test_measure() {
        assert_eq!(measure("", 10.0), Vec2::ZERO);
        assert_eq!(measure("A", 10.0), Vec2::new(30.0, 50.0));
        assert_eq!(measure("AB", 2.0), Vec2::new(14.0, 10.0));
    }

    #[test]
    fn test_draw_dot_count_and_bounds() {
        let mut canvas = RecordingCanvas::default();
        draw(&mut canvas, "H", 10.0, (255, 255, 255), Vec2::new(100.0, 100.0));

        // H has 11 lit dots
        assert_eq!(canvas.calls.len(), 11);
        for call in &canvas.calls {
            match call {
                DrawCall::Rect { rect, .. } => {
                    assert!(rect.x >= 85.0 && rect.x + rect.w <= 115.0);
                    assert!(rect.y >= 75.0 && rect.y + rect.h <= 125.0);
                }
                other => panic!("unexpected call {:?}", other),
            }
        }
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(glyph('y'), glyph('Y'));
        assert_eq!(glyph(' '), [0; GLYPH_H]);
    }
}
