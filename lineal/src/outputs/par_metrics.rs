// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use super::{Dimension, Row};

/// Broken rows of one paragraph and their aggregate size.
#[derive(Clone, Default, Debug)]
pub struct ParagraphMetrics {
    /// Index of the paragraph.
    pub(crate) pit: usize,
    /// Rows in order.
    pub(crate) rows: SmallVec<[Row; 2]>,
    pub(crate) dim: Dimension,
    /// Top of the paragraph in text coordinates.
    pub(crate) position: i32,
    /// Revision of the paragraph the rows were computed from.
    pub(crate) revision: u64,
    /// Revision of the document defaults the rows were computed from.
    pub(crate) defaults_revision: u64,
    /// Width budget the rows were computed for.
    pub(crate) max_width: i32,
}

impl ParagraphMetrics {
    /// Index of the paragraph these metrics belong to.
    pub fn pit(&self) -> usize {
        self.pit
    }

    /// Width budget the rows were computed for.
    pub fn max_width(&self) -> i32 {
        self.max_width
    }

    /// Rows in order, covering the whole paragraph.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row `index`, if there is one.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Size of the paragraph: its rows stacked vertically.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Height of the paragraph.
    pub fn height(&self) -> i32 {
        self.dim.height()
    }

    /// Ascent of the first row.
    pub fn ascent(&self) -> i32 {
        self.dim.ascent
    }

    /// Top of the paragraph in text coordinates.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Index of the row holding `pos`.
    ///
    /// A position at the end of one row is also the start of the next; with
    /// `boundary` set, the earlier row is chosen.
    pub fn row_index(&self, pos: usize, boundary: bool) -> usize {
        let next = self.rows.partition_point(|row| row.start <= pos);
        let mut index = next.saturating_sub(1);
        if boundary && index > 0 && self.rows[index].start == pos {
            index -= 1;
        }
        index
    }

    /// The row holding `pos`; see [`row_index`](Self::row_index).
    pub fn pos_to_row(&self, pos: usize, boundary: bool) -> &Row {
        &self.rows[self.row_index(pos, boundary)]
    }

    /// Offset of the top of row `index` from the top of the paragraph.
    pub fn row_top(&self, index: usize) -> i32 {
        self.rows[..index].iter().map(Row::height).sum()
    }

    /// Index of the row covering `y`, relative to the paragraph top. Clamps
    /// to the first or last row.
    pub fn row_near_y(&self, y: i32) -> usize {
        let mut top = 0;
        for (index, row) in self.rows.iter().enumerate() {
            top += row.height();
            if y < top {
                return index;
            }
        }
        self.rows.len().saturating_sub(1)
    }
}
