// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Add, AddAssign};

use crate::inputs::{Font, FontMetrics};

/// Size of a box: a run, a row, a paragraph or a whole text.
///
/// All values are in pixels and never negative.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    /// Horizontal extent.
    pub width: i32,
    /// Extent above the baseline.
    pub ascent: i32,
    /// Extent below the baseline.
    pub descent: i32,
}

impl Dimension {
    /// Creates a box from its width, ascent and descent.
    pub fn new(width: i32, ascent: i32, descent: i32) -> Self {
        debug_assert!(
            width >= 0 && ascent >= 0 && descent >= 0,
            "negative dimension {width}x{ascent}+{descent}"
        );
        Self {
            width,
            ascent,
            descent,
        }
    }

    /// A zero-width box as tall as `font`.
    pub fn from_font(fonts: &dyn FontMetrics, font: &Font) -> Self {
        Self::new(0, fonts.max_ascent(font), fonts.max_descent(font))
    }

    /// Total vertical extent.
    pub fn height(&self) -> i32 {
        self.ascent + self.descent
    }

    /// Returns true if the box has no extent at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 && self.height() == 0
    }

    /// Places `below` under this box.
    ///
    /// The width becomes the wider of the two, the ascent stays the one of
    /// the top box and the descent grows by the height of `below`.
    pub fn stack_below(&mut self, below: &Self) {
        self.width = self.width.max(below.width);
        self.descent += below.height();
    }
}

impl AddAssign for Dimension {
    /// Horizontal concatenation: widths add up, ascent and descent take the
    /// envelope.
    fn add_assign(&mut self, rhs: Self) {
        self.width += rhs.width;
        self.ascent = self.ascent.max(rhs.ascent);
        self.descent = self.descent.max(rhs.descent);
    }
}

impl Add for Dimension {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}
