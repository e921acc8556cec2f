// Copyright 2021 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builder for paragraphs with ranged attributes.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::Range;

use super::paragraph::META_INSET;
use super::{FontInfo, Inset, Paragraph, ParagraphStyle, RowFlags};
use crate::ParagraphError;

/// Builder for constructing a paragraph.
///
/// Content is appended in order; ranged fonts and flags are validated and
/// applied by [`build`](Self::build).
#[must_use]
#[derive(Debug, Default)]
pub struct ParagraphBuilder {
    text: Vec<char>,
    fonts: Vec<FontInfo>,
    insets: Vec<(usize, Box<dyn Inset>)>,
    ranged_fonts: Vec<(Range<usize>, FontInfo)>,
    flags: Vec<(usize, RowFlags)>,
    body: Option<usize>,
    style: ParagraphStyle,
}

impl ParagraphBuilder {
    /// Starts an empty paragraph with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paragraph style.
    pub fn style(mut self, style: ParagraphStyle) -> Self {
        self.style = style;
        self
    }

    /// Appends a label followed by its separating space; the body starts
    /// right after it.
    pub fn label(mut self, label: &str) -> Self {
        self = self.text(label).text(" ");
        self.body = Some(self.text.len());
        self
    }

    /// Sets the body boundary explicitly.
    pub fn begin_of_body(mut self, pos: usize) -> Self {
        self.body = Some(pos);
        self
    }

    /// Appends text in the inherited font.
    pub fn text(self, text: &str) -> Self {
        self.text_with_font(text, FontInfo::INHERIT)
    }

    /// Appends text in `font`.
    pub fn text_with_font(mut self, text: &str, font: FontInfo) -> Self {
        for c in text.chars() {
            self.text.push(c);
            self.fonts.push(font);
        }
        self
    }

    /// Appends an inset.
    pub fn inset(mut self, inset: impl Inset + 'static) -> Self {
        self.insets.push((self.text.len(), Box::new(inset)));
        self.text.push(META_INSET);
        self.fonts.push(FontInfo::INHERIT);
        self
    }

    /// Applies `font` to `range` once the paragraph is built.
    pub fn font(mut self, range: Range<usize>, font: FontInfo) -> Self {
        self.ranged_fonts.push((range, font));
        self
    }

    /// Adds break flags to the element at `pos` once the paragraph is built.
    pub fn row_flags(mut self, pos: usize, flags: RowFlags) -> Self {
        self.flags.push((pos, flags));
        self
    }

    /// Builds the paragraph, checking every recorded range and position.
    pub fn build(self) -> Result<Paragraph, ParagraphError> {
        let len = self.text.len();
        let mut par = Paragraph::new();
        par.text = self.text;
        par.fonts = self.fonts;
        par.insets = self.insets;
        par.style = self.style;
        if let Some(body) = self.body {
            if body > len {
                return Err(ParagraphError::BodyOutOfRange { body, len });
            }
            par.begin_of_body = body;
        }
        for (range, font) in self.ranged_fonts {
            if range.start > range.end || range.end > len {
                return Err(ParagraphError::InvalidRange {
                    start: range.start,
                    end: range.end,
                    len,
                });
            }
            par.fonts[range].fill(font);
        }
        for (pos, flags) in self.flags {
            if pos >= len {
                return Err(ParagraphError::PositionOutOfRange { pos, len });
            }
            *par.extra_flags.entry(pos).or_default() |= flags;
        }
        Ok(par)
    }
}
