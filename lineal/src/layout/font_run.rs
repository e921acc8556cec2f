// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::inputs::{resolve_font, Font, Paragraph};

/// Forward-only walk over the display fonts of a paragraph.
///
/// The font is re-resolved whenever the walk crosses the end of a character
/// font span or reaches the body boundary, even when the resolved font does
/// not change there.
#[derive(Clone, Debug)]
pub struct FontRun<'a> {
    defaults: &'a Font,
    par: &'a Paragraph,
    pos: usize,
    font: Font,
    /// Last position of the current character font span.
    span_last: usize,
    body: usize,
}

/// A maximal range of positions set in one display font.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FontSpanRun {
    /// Realized font of the run.
    pub font: Font,
    /// First position of the run.
    pub start: usize,
    /// Position after the last one of the run.
    pub end: usize,
}

impl FontSpanRun {
    /// Positions covered by the run.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl<'a> FontRun<'a> {
    /// Starts a walk at `pos`, which must lie inside the paragraph (or be
    /// zero for an empty one).
    pub fn new(defaults: &'a Font, par: &'a Paragraph, pos: usize) -> Self {
        debug_assert!(
            pos < par.len() || pos == 0,
            "position {pos} out of range for paragraph of length {}",
            par.len()
        );
        let span_last = if par.is_empty() {
            0
        } else {
            par.font_span(pos).last
        };
        Self {
            defaults,
            par,
            pos,
            font: resolve_font(defaults, par, pos),
            span_last,
            body: par.begin_of_body(),
        }
    }

    /// Current position of the walk.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Display font at the current position.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// One past the last position sharing the current font.
    pub fn end(&self) -> usize {
        if self.par.is_empty() {
            return 0;
        }
        let end = self.span_last + 1;
        if self.pos < self.body {
            end.min(self.body)
        } else {
            end
        }
    }

    fn resync(&mut self) {
        self.font = resolve_font(self.defaults, self.par, self.pos);
        self.span_last = self.par.font_span(self.pos).last;
    }

    /// Steps to the next position and returns its font and span end.
    pub fn advance(&mut self) -> (Font, usize) {
        self.pos += 1;
        if self.pos < self.par.len() && (self.pos > self.span_last || self.pos == self.body) {
            self.resync();
        }
        (self.font, self.end())
    }
}

impl Iterator for FontRun<'_> {
    type Item = FontSpanRun;

    /// Yields the span starting at the current position and moves past it.
    fn next(&mut self) -> Option<FontSpanRun> {
        if self.pos >= self.par.len() {
            return None;
        }
        let run = FontSpanRun {
            font: self.font,
            start: self.pos,
            end: self.end(),
        };
        self.pos = run.end;
        if self.pos < self.par.len() {
            self.resync();
        }
        Some(run)
    }
}
