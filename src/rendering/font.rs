//! 5x7 dot-matrix glyphs for composite labels.
//!
//! Only the characters the labels need are defined; anything else advances
//! the pen by one blank cell.

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between neighbouring glyphs.
pub const GLYPH_SPACING: u32 = 1;

/// One row per entry, most significant of the low five bits is the left column.
pub type Glyph = [u8; GLYPH_HEIGHT as usize];

const BLANK: Glyph = [0; GLYPH_HEIGHT as usize];

/// Glyph for `c` (letters are matched case-insensitively).
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let g: &'static Glyph = match c.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'I' => &[0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'S' => &[0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '%' => &[0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ' ' => &BLANK,
        _ => return None,
    };
    Some(g)
}

/// Whether the dot at `(col, row)` of a glyph is lit.
pub fn is_set(glyph: &Glyph, col: u32, row: u32) -> bool {
    col < GLYPH_WIDTH
        && row < GLYPH_HEIGHT
        && glyph[row as usize] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
}

/// Horizontal pen advance per character at `scale`.
pub fn advance(scale: u32) -> u32 {
    (GLYPH_WIDTH + GLYPH_SPACING) * scale
}

/// Rendered width of `text` at `scale`, without trailing spacing.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    n * advance(scale) - GLYPH_SPACING * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_characters_are_covered() {
        for c in "FIGMA DESIGN LIVE IMPLEMENTATION DIFF (0123456789.%)".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {c:?}");
        }
        assert!(glyph('?').is_none());
        assert!(glyph('Q').is_none());
    }

    #[test]
    fn lowercase_maps_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
    }

    #[test]
    fn glyph_bits_read_left_to_right() {
        let t = glyph('T').unwrap();
        assert!((0..GLYPH_WIDTH).all(|c| is_set(t, c, 0)));
        assert!(is_set(t, 2, 6));
        assert!(!is_set(t, 0, 6));
        assert!(!is_set(t, GLYPH_WIDTH, 0));
    }

    #[test]
    fn glyphs_fit_in_five_columns() {
        for c in "ADEFGILMNOPSTV0123456789()%. ".chars() {
            assert!(glyph(c).unwrap().iter().all(|row| *row < 1 << GLYPH_WIDTH));
        }
    }

    #[test]
    fn width_accounts_for_spacing() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 2), 2 * 12 - 2);
    }
}
