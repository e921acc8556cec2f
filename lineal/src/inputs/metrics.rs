// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::Font;

/// Glyph measurement capability provided by the rendering frontend.
///
/// All values are in pixels. Implementations must be total: every font and
/// code point yields a value.
pub trait FontMetrics {
    /// Advance width of `c` set in `font`.
    fn width(&self, font: &Font, c: char) -> i32;

    /// Maximum ascent of `font` above the baseline.
    fn max_ascent(&self, font: &Font) -> i32;

    /// Maximum descent of `font` below the baseline.
    fn max_descent(&self, font: &Font) -> i32;

    /// Advance width of a whole string set in `font`.
    fn string_width(&self, font: &Font, s: &str) -> i32 {
        s.chars().map(|c| self.width(font, c)).sum()
    }

    /// Height of a row holding only `font`.
    fn max_height(&self, font: &Font) -> i32 {
        self.max_ascent(font) + self.max_descent(font)
    }
}

impl<T: FontMetrics + ?Sized> FontMetrics for &T {
    fn width(&self, font: &Font, c: char) -> i32 {
        (**self).width(font, c)
    }

    fn max_ascent(&self, font: &Font) -> i32 {
        (**self).max_ascent(font)
    }

    fn max_descent(&self, font: &Font) -> i32 {
        (**self).max_descent(font)
    }
}

/// Drawing capability provided by the rendering frontend.
///
/// Coordinates are in pixels; `y` is the baseline for text and the top edge
/// for boxes.
pub trait Painter {
    /// Draws `text` with its left edge at `x` on baseline `y`.
    fn text(&mut self, x: i32, y: i32, text: &str, font: &Font);

    /// Strokes the outline of a rectangle.
    fn rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Draws a straight line.
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
}
