//! Integer rasterization on top of [`PixelTarget`]
//!
//! Every primitive is built from single pixel writes, so clipping is left to
//! the target: anything drawn past an edge is dropped pixel by pixel.
//!
//! ```
//! use il0373::{BUFFER_SIZE, Canvas, Draw, Rotation};
//!
//! let mut red = Canvas::new([0u8; BUFFER_SIZE], Rotation::Rotate90).unwrap();
//! red.clear();
//! red.draw_rectangle(128, 66, 180, 85, true);
//! red.draw_filled_circle(180, 15, 10, true);
//! ```

use crate::canvas::PixelTarget;
use crate::font::Font;

/// Drawing primitives, available on every [`PixelTarget`]
pub trait Draw: PixelTarget {
    /// Bresenham line from `(x0, y0)` towards `(x1, y1)`
    ///
    /// The loop runs only while *both* coordinates differ from the end
    /// point. A line stops as soon as it reaches either `x1` or `y1`, so the
    /// end point is never drawn and a purely horizontal or vertical segment
    /// draws nothing. Use [`Draw::draw_horizontal_line`] and
    /// [`Draw::draw_vertical_line`] for axis-aligned runs.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colored: bool) {
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        while x != x1 && y != y1 {
            self.set_pixel(x, y, colored);
            if 2 * err >= dy {
                err += dy;
                x += sx;
            }
            if 2 * err <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Run of `width` pixels to the right of `(x, y)`
    fn draw_horizontal_line(&mut self, x: i32, y: i32, width: i32, colored: bool) {
        for i in x..x + width {
            self.set_pixel(i, y, colored);
        }
    }

    /// Run of `height` pixels below `(x, y)`
    fn draw_vertical_line(&mut self, x: i32, y: i32, height: i32, colored: bool) {
        for j in y..y + height {
            self.set_pixel(x, j, colored);
        }
    }

    /// Outline of the box spanned by two corners, both edges inclusive
    fn draw_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colored: bool) {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));
        let (w, h) = (max_x - min_x + 1, max_y - min_y + 1);

        self.draw_horizontal_line(min_x, min_y, w, colored);
        self.draw_horizontal_line(min_x, max_y, w, colored);
        self.draw_vertical_line(min_x, min_y, h, colored);
        self.draw_vertical_line(max_x, min_y, h, colored);
    }

    /// Solid box spanned by two corners, both edges inclusive
    fn draw_filled_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colored: bool) {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));

        for x in min_x..=max_x {
            self.draw_vertical_line(x, min_y, max_y - min_y + 1, colored);
        }
    }

    /// Circle outline around `(x, y)`
    ///
    /// Nothing is drawn when the center itself is at or past the logical
    /// width or height. Centers left of or above the surface still draw
    /// their visible part.
    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, colored: bool) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        for_each_circle_step(radius, |dx, dy| {
            self.set_pixel(x - dx, y + dy, colored);
            self.set_pixel(x + dx, y + dy, colored);
            self.set_pixel(x + dx, y - dy, colored);
            self.set_pixel(x - dx, y - dy, colored);
        });
    }

    /// Filled disc around `(x, y)`, same center guard as [`Draw::draw_circle`]
    fn draw_filled_circle(&mut self, x: i32, y: i32, radius: i32, colored: bool) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        for_each_circle_step(radius, |dx, dy| {
            self.set_pixel(x - dx, y + dy, colored);
            self.set_pixel(x + dx, y + dy, colored);
            self.set_pixel(x + dx, y - dy, colored);
            self.set_pixel(x - dx, y - dy, colored);
            self.draw_horizontal_line(x + dx, y + dy, 2 * -dx + 1, colored);
            self.draw_horizontal_line(x + dx, y - dy, 2 * -dx + 1, colored);
        });
    }

    /// One glyph with its top-left corner at `(x, y)`
    ///
    /// Only set glyph bits are drawn; the background is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `ch` is not covered by the font's table, i.e. below
    /// `' '` or past the last encoded glyph.
    fn draw_char(&mut self, x: i32, y: i32, ch: char, font: &Font<'_>, colored: bool) {
        let glyph = font.glyph(ch);
        let row_bytes = font.row_bytes();

        for (j, row) in glyph.chunks_exact(row_bytes).enumerate() {
            for i in 0..font.width as usize {
                if row[i / 8] & (0x80 >> (i % 8)) != 0 {
                    self.set_pixel(x + i as i32, y + j as i32, colored);
                }
            }
        }
    }

    /// Glyphs left to right from `(x, y)`, advancing by the font width
    ///
    /// No wrapping and no line breaks; text past the right edge is clipped.
    ///
    /// # Panics
    ///
    /// Panics on the first character the font does not cover.
    fn draw_string(&mut self, x: i32, y: i32, text: &str, font: &Font<'_>, colored: bool) {
        let mut column = x;
        for ch in text.chars() {
            self.draw_char(column, y, ch, font, colored);
            column += font.width as i32;
        }
    }
}

impl<T: PixelTarget + ?Sized> Draw for T {}

/// Walk one quadrant of a Bresenham circle
///
/// Calls `plot(dx, dy)` with `dx` running from `-radius` up to 0 and `dy`
/// from 0 up to `radius`; callers mirror the point into all four quadrants.
fn for_each_circle_step(radius: i32, mut plot: impl FnMut(i32, i32)) {
    let mut dx = -radius;
    let mut dy = 0;
    let mut err = 2 - 2 * radius;

    loop {
        plot(dx, dy);
        let mut e2 = err;
        if e2 <= dy {
            dy += 1;
            err += dy * 2 + 1;
            if -dx == dy && e2 <= dx {
                e2 = 0;
            }
        }
        if e2 > dx {
            dx += 1;
            err += dx * 2 + 1;
        }
        if dx > 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Small unrotated grid that records colored pixels
    struct Grid {
        width: i32,
        height: i32,
        cells: Vec<bool>,
        writes: usize,
    }

    impl Grid {
        fn new(width: i32, height: i32) -> Self {
            Self {
                width,
                height,
                cells: vec![false; (width * height) as usize],
                writes: 0,
            }
        }

        fn colored(&self) -> Vec<(i32, i32)> {
            let mut out = Vec::new();
            for y in 0..self.height {
                for x in 0..self.width {
                    if self.cells[(x + y * self.width) as usize] {
                        out.push((x, y));
                    }
                }
            }
            out
        }

        fn is_colored(&self, x: i32, y: i32) -> bool {
            self.cells[(x + y * self.width) as usize]
        }
    }

    impl PixelTarget for Grid {
        fn width(&self) -> i32 {
            self.width
        }

        fn height(&self) -> i32 {
            self.height
        }

        fn set_pixel(&mut self, x: i32, y: i32, colored: bool) {
            self.writes += 1;
            if 0 <= x && x < self.width && 0 <= y && y < self.height {
                self.cells[(x + y * self.width) as usize] = colored;
            }
        }
    }

    #[test]
    fn test_diagonal_line_stops_before_end_point() {
        let mut grid = Grid::new(10, 10);
        grid.draw_line(0, 0, 5, 5, true);
        assert_eq!(grid.colored(), vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_axis_aligned_line_draws_nothing() {
        let mut grid = Grid::new(10, 10);
        grid.draw_line(0, 0, 5, 0, true);
        grid.draw_line(3, 1, 3, 8, true);
        assert_eq!(grid.writes, 0);
    }

    #[test]
    fn test_shallow_line_stops_when_y_reaches_end() {
        let mut grid = Grid::new(10, 10);
        grid.draw_line(0, 0, 6, 2, true);
        assert_eq!(grid.colored(), vec![(0, 0), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_reversed_line_steps_negative() {
        let mut grid = Grid::new(10, 10);
        grid.draw_line(5, 5, 0, 0, true);
        assert_eq!(grid.colored(), vec![(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
    }

    #[test]
    fn test_horizontal_and_vertical_runs() {
        let mut grid = Grid::new(10, 10);
        grid.draw_horizontal_line(2, 1, 3, true);
        grid.draw_vertical_line(8, 4, 2, true);
        assert_eq!(grid.colored(), vec![(2, 1), (3, 1), (4, 1), (8, 4), (8, 5)]);
    }

    #[test]
    fn test_rectangle_outline_is_inclusive() {
        let mut grid = Grid::new(10, 10);
        grid.draw_rectangle(6, 5, 2, 2, true);
        for x in 2..=6 {
            assert!(grid.is_colored(x, 2) && grid.is_colored(x, 5));
        }
        for y in 2..=5 {
            assert!(grid.is_colored(2, y) && grid.is_colored(6, y));
        }
        assert!(!grid.is_colored(4, 3));
        assert_eq!(grid.colored().len(), 14);
    }

    #[test]
    fn test_filled_rectangle_covers_inclusive_block() {
        let mut grid = Grid::new(10, 10);
        grid.draw_filled_rectangle(2, 2, 4, 4, true);
        let expected: Vec<(i32, i32)> = (2..=4)
            .flat_map(|y| (2..=4).map(move |x| (x, y)))
            .collect();
        assert_eq!(grid.colored(), expected);
    }

    #[test]
    fn test_filled_rectangle_uncolor_clears() {
        let mut grid = Grid::new(10, 10);
        grid.draw_filled_rectangle(0, 0, 9, 9, true);
        grid.draw_filled_rectangle(4, 4, 3, 3, false);
        assert_eq!(grid.colored().len(), 100 - 4);
    }

    #[test]
    fn test_circle_with_center_past_extents_is_noop() {
        let mut grid = Grid::new(4, 4);
        grid.draw_circle(5, 5, 3, true);
        grid.draw_filled_circle(5, 5, 3, true);
        grid.draw_circle(2, 4, 1, true);
        assert_eq!(grid.writes, 0);
    }

    #[test]
    fn test_circle_center_left_of_surface_still_draws() {
        let mut grid = Grid::new(10, 10);
        grid.draw_circle(-1, 5, 3, true);
        assert!(grid.is_colored(2, 5));
    }

    #[test]
    fn test_circle_radius_one() {
        let mut grid = Grid::new(5, 5);
        grid.draw_circle(2, 2, 1, true);
        assert_eq!(grid.colored(), vec![(2, 1), (1, 2), (3, 2), (2, 3)]);
    }

    #[test]
    fn test_circle_is_symmetric_and_on_radius() {
        let mut grid = Grid::new(21, 21);
        grid.draw_circle(10, 10, 6, true);
        let points = grid.colored();
        assert!(points.contains(&(4, 10)) && points.contains(&(16, 10)));
        assert!(points.contains(&(10, 4)) && points.contains(&(10, 16)));
        assert!(!grid.is_colored(10, 10));
        for &(x, y) in &points {
            assert!(grid.is_colored(20 - x, y) && grid.is_colored(x, 20 - y));
            let d2 = (x - 10).pow(2) + (y - 10).pow(2);
            assert!((25..=49).contains(&d2), "({x}, {y}) at d2={d2}");
        }
    }

    #[test]
    fn test_filled_circle_covers_outline_and_center() {
        let mut outline = Grid::new(21, 21);
        outline.draw_circle(10, 10, 6, true);
        let mut disc = Grid::new(21, 21);
        disc.draw_filled_circle(10, 10, 6, true);

        for (x, y) in outline.colored() {
            assert!(disc.is_colored(x, y));
        }
        assert!(disc.is_colored(10, 10));
        assert!(disc.is_colored(7, 12));
        assert!(!disc.is_colored(3, 3));
    }

    // 8x2 glyphs for ' ', '!' and '"'
    const TINY: [u8; 6] = [0x00, 0x00, 0x18, 0x18, 0x81, 0x00];

    fn tiny_font() -> Font<'static> {
        Font::new(8, 2, &TINY)
    }

    #[test]
    fn test_char_draws_only_set_bits() {
        let mut grid = Grid::new(10, 10);
        grid.draw_char(1, 1, '!', &tiny_font(), true);
        assert_eq!(grid.colored(), vec![(4, 1), (5, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_char_leaves_background_untouched() {
        let mut grid = Grid::new(10, 10);
        grid.draw_filled_rectangle(0, 0, 9, 9, true);
        grid.draw_char(0, 0, '"', &tiny_font(), false);
        assert!(!grid.is_colored(0, 0) && !grid.is_colored(7, 0));
        assert!(grid.is_colored(1, 0));
        assert!(grid.is_colored(0, 1));
    }

    #[test]
    fn test_char_with_padded_rows() {
        // 3x2 glyphs, one byte per row: ' ' then '!'
        let data = [0x00, 0x00, 0xA0, 0x40];
        let font = Font::new(3, 2, &data);
        let mut grid = Grid::new(5, 5);
        grid.draw_char(0, 0, '!', &font, true);
        assert_eq!(grid.colored(), vec![(0, 0), (2, 0), (1, 1)]);
    }

    #[test]
    fn test_char_with_two_byte_rows() {
        // 10x1 glyphs, two bytes per row: ' ' then '!'
        let data = [0x00, 0x00, 0x80, 0x40];
        let font = Font::new(10, 1, &data);
        let mut grid = Grid::new(12, 2);
        grid.draw_char(0, 0, '!', &font, true);
        assert_eq!(grid.colored(), vec![(0, 0), (9, 0)]);
    }

    #[test]
    fn test_string_advances_by_glyph_width() {
        let mut grid = Grid::new(30, 4);
        grid.draw_string(0, 0, "!!\"", &tiny_font(), true);
        assert!(grid.is_colored(3, 0) && grid.is_colored(11, 0));
        assert!(grid.is_colored(16, 0) && grid.is_colored(23, 0));
        assert_eq!(grid.colored().len(), 10);
    }

    #[test]
    fn test_string_clips_at_edge() {
        let mut grid = Grid::new(10, 4);
        grid.draw_string(0, 0, "!!!", &tiny_font(), true);
        assert_eq!(grid.colored().len(), 4);
    }

    #[test]
    #[should_panic]
    fn test_char_outside_font_panics() {
        let mut grid = Grid::new(10, 10);
        grid.draw_char(0, 0, 'A', &tiny_font(), true);
    }
}
