//! 3x5 bitmap font. Each glyph is five rows, most significant of the low
//! three bits is the leftmost column. Lowercase letters render as uppercase;
//! anything unmapped renders blank.

pub(crate) const GLYPH_WIDTH: i32 = 3;
pub(crate) const GLYPH_HEIGHT: i32 = 5;
/// Horizontal advance in font cells, including one column of spacing.
pub(crate) const GLYPH_ADVANCE_CELLS: i32 = GLYPH_WIDTH + 1;

pub(crate) type GlyphRows = [u8; GLYPH_HEIGHT as usize];

const BLANK: GlyphRows = [0; GLYPH_HEIGHT as usize];

pub(crate) fn glyph_rows(ch: char) -> GlyphRows {
    mapped_rows(ch.to_ascii_uppercase()).unwrap_or(BLANK)
}

pub(crate) fn is_mapped(ch: char) -> bool {
    ch == ' ' || mapped_rows(ch.to_ascii_uppercase()).is_some()
}

/// Pixel width of `text` at `scale` pixels per font cell, without trailing
/// spacing.
pub(crate) fn text_width_px(text: &str, scale: i32) -> i32 {
    let count = text.chars().count() as i32;
    if count == 0 {
        return 0;
    }
    (count * GLYPH_ADVANCE_CELLS - 1) * scale
}

fn mapped_rows(ch: char) -> Option<GlyphRows> {
    let rows = match ch {
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
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
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
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '[' => [0b110, 0b100, 0b100, 0b100, 0b110],
        ']' => [0b011, 0b001, 0b001, 0b001, 0b011],
        '(' => [0b010, 0b100, 0b100, 0b100, 0b010],
        ')' => [0b010, 0b001, 0b001, 0b001, 0b010],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b110, 0b001, 0b010, 0b000, 0b010],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        '%' => [0b101, 0b001, 0b010, 0b100, 0b101],
        '\'' => [0b010, 0b010, 0b000, 0b000, 0b000],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_and_banner_text_is_fully_mapped() {
        for text in [
            "VEL.X: -6",
            "VEL.Y: 12",
            "TILE: -1",
            "GAME PAUSED",
            "PRESS [ENTER] TO PLAY AGAIN",
            "fps 59.9 tps 60.0",
        ] {
            for ch in text.chars() {
                assert!(is_mapped(ch), "{ch:?} in {text:?}");
            }
        }
    }

    #[test]
    fn lowercase_shares_uppercase_glyphs() {
        assert_eq!(glyph_rows('a'), glyph_rows('A'));
        assert_eq!(glyph_rows('z'), glyph_rows('Z'));
    }

    #[test]
    fn unknown_characters_are_blank() {
        assert_eq!(glyph_rows('~'), BLANK);
        assert_eq!(glyph_rows('é'), BLANK);
        assert!(!is_mapped('~'));
    }

    #[test]
    fn glyph_rows_fit_in_three_columns() {
        for ch in (' '..='~').chain('a'..='z') {
            for row in glyph_rows(ch) {
                assert!(row < 1 << GLYPH_WIDTH, "{ch:?}");
            }
        }
    }

    #[test]
    fn text_width_excludes_trailing_spacing() {
        assert_eq!(text_width_px("", 2), 0);
        assert_eq!(text_width_px("A", 2), 6);
        assert_eq!(text_width_px("AB", 1), 7);
    }
}
