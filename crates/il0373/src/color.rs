//! Tri-color pixel values
//!
//! The panel shows white, black or red. Each color maps onto the pair of
//! planes: the black plane colors black pixels, the accent plane colors red
//! ones, and the controller shows red wherever the accent plane is colored.

/// Color of one pixel on the black/white/red panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    /// Neither plane colored
    #[default]
    White,
    /// Black plane colored
    Black,
    /// Accent plane colored
    Red,
}

impl Color {
    /// Whether the black and accent planes are colored for this color
    pub fn plane_bits(self) -> (bool, bool) {
        match self {
            Color::White => (false, false),
            Color::Black => (true, false),
            Color::Red => (false, true),
        }
    }

    /// Byte filling the black plane with this color
    pub fn black_byte(self) -> u8 {
        if self.plane_bits().0 { 0x00 } else { 0xFF }
    }

    /// Byte filling the accent plane with this color
    pub fn accent_byte(self) -> u8 {
        if self.plane_bits().1 { 0x00 } else { 0xFF }
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::pixelcolor::PixelColor for Color {
    type Raw = ();
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        if color.is_on() {
            Color::Black
        } else {
            Color::White
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_bytes() {
        assert_eq!((Color::White.black_byte(), Color::White.accent_byte()), (0xFF, 0xFF));
        assert_eq!((Color::Black.black_byte(), Color::Black.accent_byte()), (0x00, 0xFF));
        assert_eq!((Color::Red.black_byte(), Color::Red.accent_byte()), (0xFF, 0x00));
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::White);
    }
}
