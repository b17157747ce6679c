//! Bit-packed frame planes
//!
//! A plane packs one pixel per bit, MSB first, row-major at the physical
//! resolution: pixel `(x, y)` lives in byte `(x + y * WIDTH) / 8` under mask
//! `0x80 >> (x % 8)`. A set bit is blank (white), a cleared bit is colored
//! ink, so a fresh plane is all `0xFF`.
//!
//! Callers address pixels in logical coordinates. The plane's [`Rotation`]
//! maps them onto the physical grid before the bit is touched.

use crate::config::{BUFFER_SIZE, HEIGHT, Rotation, WIDTH};
use crate::error::CanvasError;

/// Anything the rasterizer can draw on
///
/// Coordinates are logical and may lie outside the surface; implementors
/// drop such writes silently.
pub trait PixelTarget {
    /// Logical width in pixels
    fn width(&self) -> i32;

    /// Logical height in pixels
    fn height(&self) -> i32;

    /// Color (`true`) or blank (`false`) one logical pixel
    fn set_pixel(&mut self, x: i32, y: i32, colored: bool);
}

/// Map a logical coordinate onto the physical grid
///
/// The 90/180/270 cases use the panel extents rather than `extent - 1`, so
/// one logical row or column per quarter turn lands just outside the panel
/// and is dropped by the physical bounds check.
pub fn to_physical(rotation: Rotation, x: i32, y: i32) -> (i32, i32) {
    let (pw, ph) = (WIDTH as i32, HEIGHT as i32);
    match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (pw - y, x),
        Rotation::Rotate180 => (pw - x, ph - y),
        Rotation::Rotate270 => (y, ph - x),
    }
}

/// Byte index and bit mask of a physical pixel, if it is on the panel
pub fn physical_location(x: i32, y: i32) -> Option<(usize, u8)> {
    if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
        return None;
    }
    let index = (x + y * WIDTH as i32) as usize / 8;
    Some((index, 0x80 >> (x % 8)))
}

/// One packed 1-bit plane (black or accent)
///
/// Wraps any byte buffer of at least [`BUFFER_SIZE`] bytes, so it works with
/// a static array on a microcontroller or a `Vec` on a host.
///
/// ## Example
///
/// ```
/// use il0373::{BUFFER_SIZE, Canvas, Rotation};
///
/// let mut black = Canvas::new([0u8; BUFFER_SIZE], Rotation::Rotate90).unwrap();
/// black.clear();
/// assert_eq!((black.width(), black.height()), (212, 104));
///
/// black.set_pixel(10, 20, true);
/// assert_eq!(black.get_pixel(10, 20), Some(true));
/// ```
#[derive(Clone, Debug)]
pub struct Canvas<B> {
    buffer: B,
    rotation: Rotation,
}

impl<B> Canvas<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap a buffer as a plane
    ///
    /// The buffer content is kept as is; call [`Canvas::clear`] for a blank plane.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::BufferTooSmall`] if the buffer is shorter than
    /// [`BUFFER_SIZE`].
    pub fn new(buffer: B, rotation: Rotation) -> Result<Self, CanvasError> {
        let provided = buffer.as_ref().len();
        if provided < BUFFER_SIZE {
            return Err(CanvasError::BufferTooSmall {
                required: BUFFER_SIZE,
                provided,
            });
        }
        Ok(Self { buffer, rotation })
    }

    /// Blank every pixel (all bytes `0xFF`)
    pub fn clear(&mut self) {
        self.fill(0xFF);
    }

    /// Set every byte of the plane, `0x00` colors everything
    pub fn fill(&mut self, byte: u8) {
        self.buffer.as_mut().fill(byte);
    }

    /// Active rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Change the rotation used for subsequent pixel access
    ///
    /// Pixels already drawn stay where they are physically.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Logical width under the active rotation
    pub fn width(&self) -> u16 {
        self.rotation.logical_size().0
    }

    /// Logical height under the active rotation
    pub fn height(&self) -> u16 {
        self.rotation.logical_size().1
    }

    /// Packed plane bytes, exactly [`BUFFER_SIZE`] long
    pub fn buffer(&self) -> &[u8] {
        &self.buffer.as_ref()[..BUFFER_SIZE]
    }

    /// Give the underlying buffer back
    pub fn release(self) -> B {
        self.buffer
    }

    /// Color or blank a logical pixel
    ///
    /// Coordinates outside the logical extents, or that the rotation maps
    /// outside the panel, are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, colored: bool) {
        if !self.in_logical_bounds(x, y) {
            return;
        }
        let (px, py) = to_physical(self.rotation, x, y);
        self.set_absolute_pixel(px, py, colored);
    }

    /// Color or blank a physical pixel, ignoring rotation
    pub fn set_absolute_pixel(&mut self, x: i32, y: i32, colored: bool) {
        let Some((index, mask)) = physical_location(x, y) else {
            return;
        };
        let byte = &mut self.buffer.as_mut()[index];
        if colored {
            *byte &= !mask;
        } else {
            *byte |= mask;
        }
    }

    /// Whether a logical pixel is colored, `None` if it is off the panel
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<bool> {
        if !self.in_logical_bounds(x, y) {
            return None;
        }
        let (px, py) = to_physical(self.rotation, x, y);
        let (index, mask) = physical_location(px, py)?;
        Some(self.buffer.as_ref()[index] & mask == 0)
    }

    fn in_logical_bounds(&self, x: i32, y: i32) -> bool {
        let (width, height) = self.rotation.logical_size();
        0 <= x && x < width as i32 && 0 <= y && y < height as i32
    }
}

impl<B> PixelTarget for Canvas<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn width(&self) -> i32 {
        Canvas::width(self) as i32
    }

    fn height(&self) -> i32 {
        Canvas::height(self) as i32
    }

    fn set_pixel(&mut self, x: i32, y: i32, colored: bool) {
        Canvas::set_pixel(self, x, y, colored);
    }
}
