// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::inputs::{Font, Paragraph};
use crate::layout::{FontRun, LayoutCx};
use crate::outputs::Row;

/// An element of a row placed at its final horizontal position.
#[derive(Copy, Clone, Debug)]
pub(crate) struct PlacedElement {
    pub(crate) pos: usize,
    /// Left edge, in the coordinates of the row's geometry.
    pub(crate) x: i32,
    pub(crate) width: i32,
    pub(crate) font: Font,
}

/// Walks the elements of a computed row from left to right, applying the
/// label indentation and justification recorded in its geometry.
#[derive(Debug)]
pub(crate) struct RowElements<'a> {
    cx: LayoutCx<'a>,
    par: &'a Paragraph,
    row: &'a Row,
    fonts: FontRun<'a>,
    pos: usize,
    x: i32,
    body_indent: i32,
    max_width: i32,
}

impl<'a> RowElements<'a> {
    pub(crate) fn new(cx: LayoutCx<'a>, pit: usize, row: &'a Row, max_width: i32) -> Self {
        let par = cx.paragraph(pit);
        let body = par.begin_of_body();
        let body_indent = if body > row.start {
            cx.body_indent(par)
        } else {
            0
        };
        Self {
            cx,
            par,
            row,
            fonts: FontRun::new(cx.defaults(), par, row.start),
            pos: row.start,
            x: row.geometry.x,
            body_indent,
            max_width,
        }
    }
}

impl Iterator for RowElements<'_> {
    type Item = PlacedElement;

    fn next(&mut self) -> Option<PlacedElement> {
        let pos = self.pos;
        if pos >= self.row.end {
            return None;
        }
        let body = self.par.begin_of_body();
        if pos == body && body > self.row.start {
            self.x = self.x.max(self.row.geometry.x + self.body_indent);
        }
        let font = *self.fonts.font();
        let mut width = self.cx.element_width(self.par, pos, &font, self.max_width);
        let trailing = self.row.trailing_separator && pos + 1 == self.row.end;
        if pos >= body && !trailing && self.par.is_separator(pos) {
            width += self.row.geometry.separator;
        }
        let element = PlacedElement {
            pos,
            x: self.x,
            width,
            font,
        };
        self.x = self.x.saturating_add(width);
        self.pos += 1;
        if self.pos < self.row.end {
            let _ = self.fonts.advance();
        }
        Some(element)
    }
}
