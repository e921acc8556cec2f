// Copyright 2021 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between pixel coordinates and paragraph positions.

use super::{LayoutCx, RowElements, TextMetrics};
use crate::inputs::{FontMetrics, RowFlags, Text};
use crate::outputs::Row;

impl TextMetrics {
    /// Finds the position in `row` of paragraph `pit` closest to `x`.
    ///
    /// `x` is in the coordinates of the row's geometry. An element is hit on
    /// its left half before it and on its right half after it. The returned
    /// flag is the boundary flag: it is set when the position is the end of
    /// a row that wrapped, so that the cursor stays on this row rather than
    /// at the start of the next one.
    pub fn get_column_near_x(
        &self,
        text: &Text,
        fonts: &dyn FontMetrics,
        pit: usize,
        row: &Row,
        x: i32,
    ) -> (usize, bool) {
        if row.is_empty() || x <= row.geometry.x {
            return (row.start, false);
        }
        let cx = LayoutCx::new(text, fonts, &self.config);
        let par = cx.paragraph(pit);

        let mut pos = row.end;
        for element in RowElements::new(cx, pit, row, self.budget_of(pit)) {
            if x < element.x + element.width {
                pos = if x - element.x > element.width / 2 {
                    element.pos + 1
                } else {
                    element.pos
                };
                break;
            }
        }

        let mut boundary = false;
        if pos == row.end && row.end < par.len() {
            let last = row.end - 1;
            // Never put the cursor after a break that is not visible as a
            // position of its own.
            if row.trailing_separator || par.row_flags(last).contains(RowFlags::ALWAYS_BREAK_AFTER)
            {
                pos = last;
            } else {
                boundary = true;
            }
        }
        (pos, boundary)
    }

    /// Finds the position closest to `x` in row `row_index` of paragraph
    /// `pit`.
    ///
    /// # Panics
    ///
    /// Panics if the paragraph has not been computed or has no such row.
    pub fn x2pos(
        &self,
        text: &Text,
        fonts: &dyn FontMetrics,
        pit: usize,
        row_index: usize,
        x: i32,
    ) -> usize {
        let row = &self.par_metrics(pit).rows()[row_index];
        self.get_column_near_x(text, fonts, pit, row, x).0
    }

    /// Horizontal pixel offset of the cursor at `pos` in paragraph `pit`.
    ///
    /// With `boundary` set, a position at the end of a wrapped row is placed
    /// after the last element of that row instead of at the start of the
    /// next one.
    pub fn cursor_x(
        &self,
        text: &Text,
        fonts: &dyn FontMetrics,
        pit: usize,
        pos: usize,
        boundary: bool,
    ) -> i32 {
        let row = self.par_metrics(pit).pos_to_row(pos, boundary);
        let cx = LayoutCx::new(text, fonts, &self.config);
        let mut x = row.geometry.x;
        for element in RowElements::new(cx, pit, row, self.budget_of(pit)) {
            if element.pos == pos {
                return element.x;
            }
            x = element.x + element.width;
        }
        x
    }

    /// Index of the computed paragraph covering `y`, in text coordinates.
    ///
    /// Coordinates above the first paragraph map to the first one and
    /// coordinates below the last paragraph map to the last one. Returns
    /// `None` if no paragraph has been computed.
    pub fn pit_near_y(&self, text: &Text, y: i32) -> Option<usize> {
        let mut last = None;
        for pit in 0..text.len() {
            let Some(pm) = self.cache.get(pit) else {
                continue;
            };
            if y < pm.position() + pm.height() {
                return Some(pit);
            }
            last = Some(pit);
        }
        last
    }

    /// Index of the row of paragraph `pit` covering `y`, in text
    /// coordinates.
    pub fn row_near_y(&self, pit: usize, y: i32) -> usize {
        let pm = self.par_metrics(pit);
        pm.row_near_y(y - pm.position())
    }

    /// Hit-tests a point in text coordinates.
    ///
    /// Returns the paragraph, the position and the boundary flag closest to
    /// `(x, y)`, or `None` if nothing has been computed.
    pub fn pos_near_xy(
        &self,
        text: &Text,
        fonts: &dyn FontMetrics,
        x: i32,
        y: i32,
    ) -> Option<(usize, usize, bool)> {
        let pit = self.pit_near_y(text, y)?;
        let pm = self.par_metrics(pit);
        let row = &pm.rows()[pm.row_near_y(y - pm.position())];
        let (pos, boundary) = self.get_column_near_x(text, fonts, pit, row, x);
        Some((pit, pos, boundary))
    }
}
