//! Bitmap font text rendering for the pixel canvas.
//!
//! Labels are drawn with an 8×8 bitmap font scaled by an integer factor,
//! on a filled box in the label background color.

use super::Canvas;
use crate::config::RgbColor;
use crate::diagram::primitives::TextAnchor;

const GLYPH_SIZE: usize = 8;
const GLYPH_SPACING: usize = 1;
const LABEL_PADDING: usize = 1;

/// Pixel width of `text` at `scale`.
pub fn text_width(text: &str, scale: usize) -> usize {
    let n = text.chars().count();
    if n == 0 {
        return 0;
    }
    n * (GLYPH_SIZE + GLYPH_SPACING) * scale - GLYPH_SPACING * scale
}

/// Draw a label whose top edge sits at `y`, placed horizontally per `anchor`.
#[allow(clippy::too_many_arguments)]
pub fn render_label(
    canvas: &mut Canvas,
    x: f64,
    y: f64,
    text: &str,
    scale: usize,
    anchor: TextAnchor,
    ink: RgbColor,
    background: RgbColor,
) {
    let width = text_width(text, scale) as f64;
    let left = match anchor {
        TextAnchor::Center => x - width / 2.0,
        TextAnchor::End => x - width,
    }
    .round() as isize;
    let top = y.round() as isize;

    let pad = (LABEL_PADDING * scale) as isize;
    canvas.fill_rect(
        left - pad,
        top - pad,
        width as usize + 2 * pad as usize,
        GLYPH_SIZE * scale + 2 * pad as usize,
        background,
    );

    for (i, ch) in text.chars().enumerate() {
        let char_x = left + (i * (GLYPH_SIZE + GLYPH_SPACING) * scale) as isize;
        render_char(canvas, char_x, top, ch, scale, ink);
    }
}

/// 8×8 glyphs for the characters labels use. Each byte is one row.
fn get_char_bitmap(ch: char) -> Option<[u8; 8]> {
    Some(match ch {
        '0' => [0x3C, 0x42, 0x46, 0x5A, 0x62, 0x42, 0x3C, 0x00],
        '1' => [0x08, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00],
        '2' => [0x3C, 0x42, 0x02, 0x0C, 0x30, 0x40, 0x7E, 0x00],
        '3' => [0x3C, 0x42, 0x02, 0x1C, 0x02, 0x42, 0x3C, 0x00],
        '4' => [0x04, 0x0C, 0x14, 0x24, 0x7E, 0x04, 0x04, 0x00],
        '5' => [0x7E, 0x40, 0x7C, 0x02, 0x02, 0x42, 0x3C, 0x00],
        '6' => [0x1C, 0x20, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00],
        '7' => [0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x10, 0x00],
        '8' => [0x3C, 0x42, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00],
        '9' => [0x3C, 0x42, 0x42, 0x3E, 0x02, 0x04, 0x38, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00],
        '\u{00B0}' => [0x18, 0x24, 0x24, 0x18, 0x00, 0x00, 0x00, 0x00],
        ' ' => [0x00; 8],
        _ => return None,
    })
}

fn render_char(canvas: &mut Canvas, x: isize, y: isize, ch: char, scale: usize, ink: RgbColor) {
    let bitmap = match get_char_bitmap(ch) {
        Some(b) => b,
        None => return,
    };

    for (row_idx, &row) in bitmap.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            if (row >> (7 - col)) & 1 == 1 {
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = x + (col * scale + sx) as isize;
                        let py = y + (row_idx * scale + sy) as isize;
                        canvas.set(px, py, ink);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::styles::{BLACK, WHITE};

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("0", 1), 8);
        assert_eq!(text_width("90°", 2), 3 * 18 - 2);
    }

    #[test]
    fn test_label_lands_left_of_end_anchor() {
        let mut canvas = Canvas::new(100, 40, WHITE);
        render_label(&mut canvas, 60.0, 10.0, "8", 1, TextAnchor::End, BLACK, WHITE);
        let inked: Vec<usize> = (0..100)
            .filter(|&x| (10..18).any(|y| canvas.get(x, y) == BLACK))
            .collect();
        assert!(!inked.is_empty());
        assert!(inked.iter().all(|&x| (52..60).contains(&x)));
    }

    #[test]
    fn test_every_label_character_has_a_glyph() {
        for ch in "0123456789-.\u{00B0}".chars() {
            assert!(get_char_bitmap(ch).is_some(), "missing glyph {:?}", ch);
        }
    }
}
