//! Fixed-width bitmap fonts
//!
//! A font is a plain table of glyphs, one per character starting at `' '`.
//! Each glyph is `height` rows, each row packed MSB first and padded to a
//! whole number of bytes, the same packing as a canvas plane.

/// First character encoded in every font table
pub const FIRST_CHAR: char = ' ';

/// Immutable fixed-width glyph table
///
/// ## Example
///
/// ```
/// use il0373::Font;
///
/// static TABLE: [u8; 3 * 12] = [0; 36];
/// let font = Font::new(8, 12, &TABLE);
/// assert_eq!(font.glyph_offset('!'), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font<'a> {
    /// Glyph width in pixels, also the horizontal advance
    pub width: u16,
    /// Glyph height in pixels
    pub height: u16,
    /// Packed glyphs for `' '` onwards
    pub data: &'a [u8],
}

impl<'a> Font<'a> {
    /// Describe a glyph table
    pub const fn new(width: u16, height: u16, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Bytes per glyph row
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Bytes per glyph
    pub const fn glyph_size(&self) -> usize {
        self.height as usize * self.row_bytes()
    }

    /// Byte offset of `ch` in the table
    ///
    /// # Panics
    ///
    /// Panics if `ch` sorts before [`FIRST_CHAR`].
    pub fn glyph_offset(&self, ch: char) -> usize {
        let Some(index) = (ch as usize).checked_sub(FIRST_CHAR as usize) else {
            panic!("{ch:?} precedes the first glyph of the font");
        };
        index * self.glyph_size()
    }

    /// Packed rows of `ch`
    ///
    /// # Panics
    ///
    /// Panics if the table has no glyph for `ch`.
    pub fn glyph(&self, ch: char) -> &'a [u8] {
        let offset = self.glyph_offset(ch);
        &self.data[offset..offset + self.glyph_size()]
    }

    /// Number of glyphs in the table
    pub fn glyph_count(&self) -> usize {
        match self.glyph_size() {
            0 => 0,
            size => self.data.len() / size,
        }
    }

    /// Whether the table has a glyph for `ch`
    pub fn covers(&self, ch: char) -> bool {
        (ch as usize)
            .checked_sub(FIRST_CHAR as usize)
            .is_some_and(|index| index < self.glyph_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: [u8; 4 * 12] = [0; 48];

    #[test]
    fn test_offset_of_uppercase_a_in_8x12_font() {
        let font = Font::new(8, 12, &TABLE);
        assert_eq!(font.glyph_offset('A'), (0x41 - 0x20) * 12);
        assert_eq!(font.glyph_offset('A'), 396);
    }

    #[test]
    fn test_row_bytes_round_up() {
        assert_eq!(Font::new(5, 8, &[]).row_bytes(), 1);
        assert_eq!(Font::new(8, 8, &[]).row_bytes(), 1);
        assert_eq!(Font::new(11, 16, &[]).row_bytes(), 2);
        assert_eq!(Font::new(17, 24, &[]).glyph_size(), 72);
    }

    #[test]
    fn test_glyph_slices_table() {
        let mut data = [0u8; 3 * 2];
        data[4] = 0xAA;
        data[5] = 0x55;
        let font = Font::new(8, 2, &data);
        assert_eq!(font.glyph('"'), &[0xAA, 0x55]);
        assert_eq!(font.glyph_count(), 3);
    }

    #[test]
    fn test_covers() {
        let font = Font::new(8, 12, &TABLE);
        assert!(font.covers(' '));
        assert!(font.covers('#'));
        assert!(!font.covers('$'));
        assert!(!font.covers('\n'));
    }

    #[test]
    #[should_panic]
    fn test_control_character_panics() {
        Font::new(8, 12, &TABLE).glyph_offset('\t');
    }
}
