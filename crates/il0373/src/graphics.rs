//! Graphics support via embedded-graphics
//!
//! [`Canvas`] is a `DrawTarget<Color = BinaryColor>` for single-plane
//! drawing, and [`GraphicDisplay`] bundles a [`Display`] with a black and an
//! accent canvas as a `DrawTarget<Color = Color>`, so the embedded-graphics
//! primitives, fonts and images can target the tri-color panel directly.
//!
//! ## Example
//!
//! ```rust,ignore
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//! };
//! use il0373::{Color, GraphicDisplay};
//!
//! let mut display = GraphicDisplay::new(display_driver, black_buffer, red_buffer)?;
//! display.clear(Color::White);
//!
//! Circle::new(Point::new(170, 5), 20)
//!     .into_styled(PrimitiveStyle::with_fill(Color::Red))
//!     .draw(&mut display)?;
//!
//! display.update(&mut delay)?;
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
};
use embedded_hal::delay::DelayNs;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::Rotation;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

impl<B> OriginDimensions for Canvas<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl<B> DrawTarget for Canvas<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

/// Display with a black and an accent plane
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Buffer type for both planes
pub struct GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    display: Display<I>,
    black: Canvas<B>,
    accent: Canvas<B>,
}

impl<I, B> GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap a display and two plane buffers, both cleared to white
    ///
    /// The planes use the display's configured rotation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if either buffer cannot hold a plane.
    pub fn new(display: Display<I>, black_buffer: B, red_buffer: B) -> Result<Self, Error<I>> {
        let rotation = display.rotation();
        let mut black = Canvas::new(black_buffer, rotation)?;
        let mut accent = Canvas::new(red_buffer, rotation)?;
        black.clear();
        accent.clear();
        Ok(Self {
            display,
            black,
            accent,
        })
    }

    /// Fill both planes with one color
    pub fn clear(&mut self, color: Color) {
        self.black.fill(color.black_byte());
        self.accent.fill(color.accent_byte());
    }

    /// Send both planes to the panel and refresh
    pub fn update<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.display
            .display_canvases(Some(&self.black), Some(&self.accent), delay)
    }

    /// Rotate both planes
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.black.set_rotation(rotation);
        self.accent.set_rotation(rotation);
    }

    /// Color one logical pixel on both planes
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let (black, accent) = color.plane_bits();
        self.black.set_pixel(x, y, black);
        self.accent.set_pixel(x, y, accent);
    }

    /// Access the underlying Display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably, e.g. to `init` or `sleep`
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Black plane
    pub fn black(&self) -> &Canvas<B> {
        &self.black
    }

    /// Black plane, for drawing with [`Draw`](crate::raster::Draw)
    pub fn black_mut(&mut self) -> &mut Canvas<B> {
        &mut self.black
    }

    /// Accent (red) plane
    pub fn accent(&self) -> &Canvas<B> {
        &self.accent
    }

    /// Accent plane, for drawing with [`Draw`](crate::raster::Draw)
    pub fn accent_mut(&mut self) -> &mut Canvas<B> {
        &mut self.accent
    }

    /// Split back into the display and both buffers
    pub fn release(self) -> (Display<I>, B, B) {
        (self.display, self.black.release(), self.accent.release())
    }
}

impl<I, B> DrawTarget for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            GraphicDisplay::set_pixel(self, point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        GraphicDisplay::clear(self, color);
        Ok(())
    }
}

impl<I, B> OriginDimensions for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        self.black.size()
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use crate::canvas::physical_location;
    use crate::command::{DATA_START_TRANSMISSION_1, DATA_START_TRANSMISSION_2};
    use crate::config::{BUFFER_SIZE, Builder};
    use alloc::vec::Vec;
    use embedded_graphics_core::geometry::Point;

    #[derive(Debug, Default)]
    struct MockInterface {
        commands: Vec<u8>,
        data: Vec<Vec<u8>>,
    }

    impl DisplayInterface for MockInterface {
        type Error = u8;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.commands.push(command);
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.data.push(data.to_vec());
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }

        fn busy_wait<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct MockDelay;

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    type TestDisplay = GraphicDisplay<MockInterface, [u8; BUFFER_SIZE]>;

    fn graphic_display(rotation: Rotation) -> TestDisplay {
        let display = Display::new(
            MockInterface::default(),
            Builder::new().rotation(rotation).build(),
        );
        GraphicDisplay::new(display, [0u8; BUFFER_SIZE], [0u8; BUFFER_SIZE]).unwrap()
    }

    fn bit(plane: &[u8], x: i32, y: i32) -> bool {
        let (index, mask) = physical_location(x, y).unwrap();
        plane[index] & mask != 0
    }

    #[test]
    fn test_new_starts_white() {
        let display = graphic_display(Rotation::Rotate0);
        assert!(display.black().buffer().iter().all(|&b| b == 0xFF));
        assert!(display.accent().buffer().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        let display = Display::new(MockInterface::default(), Builder::new().build());
        let (mut black, mut red) = ([0u8; 8], [0u8; 8]);
        let result = GraphicDisplay::new(display, &mut black[..], &mut red[..]);
        assert!(matches!(
            result.err(),
            Some(Error::BufferTooSmall {
                required: BUFFER_SIZE,
                provided: 8
            })
        ));
    }

    #[test]
    fn test_size_follows_rotation() {
        assert_eq!(graphic_display(Rotation::Rotate0).size(), Size::new(104, 212));
        assert_eq!(graphic_display(Rotation::Rotate270).size(), Size::new(212, 104));
    }

    #[test]
    fn test_colors_land_on_their_planes() {
        let mut display = graphic_display(Rotation::Rotate0);
        display
            .draw_iter([
                Pixel(Point::new(1, 0), Color::Black),
                Pixel(Point::new(2, 0), Color::Red),
            ])
            .unwrap();

        let black = display.black().buffer();
        let accent = display.accent().buffer();
        assert!(!bit(black, 1, 0));
        assert!(bit(accent, 1, 0));
        assert!(bit(black, 2, 0));
        assert!(!bit(accent, 2, 0));
        assert_eq!(black[0], 0xBF);
        assert_eq!(accent[0], 0xDF);
    }

    #[test]
    fn test_white_erases_both_planes() {
        let mut display = graphic_display(Rotation::Rotate0);
        display.set_pixel(5, 5, Color::Black);
        display.set_pixel(5, 5, Color::White);
        assert!(display.black().buffer().iter().all(|&b| b == 0xFF));
        assert!(display.accent().buffer().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_clear_fills_planes() {
        let mut display = graphic_display(Rotation::Rotate0);
        DrawTarget::clear(&mut display, Color::Red).unwrap();
        assert!(display.black().buffer().iter().all(|&b| b == 0xFF));
        assert!(display.accent().buffer().iter().all(|&b| b == 0x00));

        display.clear(Color::Black);
        assert!(display.black().buffer().iter().all(|&b| b == 0x00));
        assert!(display.accent().buffer().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_canvas_binary_draw_target() {
        let mut canvas = Canvas::new([0u8; BUFFER_SIZE], Rotation::Rotate0).unwrap();
        canvas.clear();
        canvas
            .draw_iter([
                Pixel(Point::new(0, 0), BinaryColor::On),
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(0, 300), BinaryColor::On),
            ])
            .unwrap();
        assert_eq!(canvas.buffer()[0], 0x7F);
        assert_eq!(canvas.buffer().iter().filter(|&&b| b != 0xFF).count(), 1);

        canvas
            .draw_iter([Pixel(Point::new(0, 0), BinaryColor::Off)])
            .unwrap();
        assert_eq!(canvas.buffer()[0], 0xFF);
    }

    #[test]
    fn test_update_sends_both_planes() {
        let mut display = graphic_display(Rotation::Rotate0);
        display.display_mut().init(&mut MockDelay).unwrap();
        display.set_pixel(0, 0, Color::Red);
        display.update(&mut MockDelay).unwrap();

        let (driver, _, _) = display.release();
        let interface = driver.release();
        assert!(interface.commands.contains(&DATA_START_TRANSMISSION_1));
        assert!(interface.commands.contains(&DATA_START_TRANSMISSION_2));

        let planes: Vec<&Vec<u8>> = interface
            .data
            .iter()
            .filter(|d| d.len() == BUFFER_SIZE)
            .collect();
        assert_eq!(planes.len(), 2);
        assert_eq!(planes[0][0], 0xFF);
        assert_eq!(planes[1][0], 0x7F);
    }
}
