// Copyright 2021 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use super::Dimension;
use crate::inputs::RowFlags;

/// Why a row ended where it did.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub enum RowEnd {
    /// The paragraph ended.
    #[default]
    Paragraph,
    /// The row was full and ended at a break opportunity.
    Fill,
    /// A break flag forced the row to end.
    Forced,
    /// The row was full and had no break opportunity.
    Overflow,
}

/// Horizontal geometry of a broken row.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct RowGeometry {
    /// Left margin, including nesting and indentation.
    pub left_margin: i32,
    /// Right margin, including the end marker allowance on the last row.
    pub right_margin: i32,
    /// How far the label overshoots the body indentation.
    pub label_fill: i32,
    /// Space inserted between the label and the body.
    pub label_hfill: i32,
    /// Extra width given to each inner separator by justification.
    pub separator: i32,
    /// Left edge of the row's first element.
    pub x: i32,
}

/// One visual line of a paragraph.
#[derive(Clone, Default, Debug)]
pub struct Row {
    pub(crate) start: usize,
    pub(crate) end: usize,
    /// Content width, without a trailing separator.
    pub(crate) width: i32,
    pub(crate) dim: Dimension,
    /// Flags of the first and last elements.
    pub(crate) flags: RowFlags,
    pub(crate) end_reason: RowEnd,
    /// Whether the row ends with a separator excluded from its width.
    pub(crate) trailing_separator: bool,
    /// Number of separators that justification may stretch.
    pub(crate) separators: usize,
    pub(crate) geometry: RowGeometry,
    pub(crate) changed: bool,
}

impl Row {
    /// First position of the row.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last position of the row.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Positions covered by the row.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns true only for the row of an empty paragraph.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Visible width of the row's content.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Width, ascent and descent of the row.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Ascent plus descent.
    pub fn height(&self) -> i32 {
        self.dim.height()
    }

    /// Union of the break flags of the row's elements.
    pub fn flags(&self) -> RowFlags {
        self.flags
    }

    /// Why the row ended where it did.
    pub fn end_reason(&self) -> RowEnd {
        self.end_reason
    }

    /// Margins, spacing and offset of the row.
    pub fn geometry(&self) -> &RowGeometry {
        &self.geometry
    }

    /// Returns true if the row differs from the row at the same index before
    /// the last recomputation, and so needs repainting.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Returns true if the row ends with a separator that hangs past its width.
    pub fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    pub(crate) fn same_layout(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.width == other.width
            && self.dim == other.dim
            && self.flags == other.flags
            && self.end_reason == other.end_reason
            && self.geometry == other.geometry
    }
}
