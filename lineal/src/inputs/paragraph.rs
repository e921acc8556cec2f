// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;
use core::sync::atomic::{AtomicU64, Ordering};

use hashbrown::HashMap;

use super::{FontInfo, Inset, RowFlags};

/// Placeholder character stored at positions holding an inset.
pub const META_INSET: char = '\u{1}';

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Returns a revision number never handed out before.
pub(crate) fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// Horizontal alignment of a paragraph's rows.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Justify every row but the last by stretching inter-word spaces.
    #[default]
    Block,
    /// Align rows to the left margin.
    Left,
    /// Align rows to the right margin.
    Right,
    /// Center rows between the margins.
    Center,
}

/// Paragraph-level layout parameters.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParagraphStyle {
    /// Horizontal alignment of the rows.
    pub align: Alignment,
    /// Nesting depth, e.g. inside lists.
    pub depth: u8,
    /// Indent the first row by the configured paragraph indentation.
    pub indent_first_line: bool,
    /// Extra left margin of the style, in pixels.
    pub left_margin: i32,
    /// Extra right margin of the style, in pixels.
    pub right_margin: i32,
    /// Sample label whose width sets the body indentation of labelled
    /// paragraphs. Empty means the configured default.
    pub label_width: String,
    /// Font of the label region.
    pub label_font: FontInfo,
    /// Font of the body.
    pub body_font: FontInfo,
}

/// Closed interval of positions sharing the same character font.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FontSpan {
    /// First position of the span.
    pub first: usize,
    /// Last position of the span, inclusive.
    pub last: usize,
}

/// A sequence of characters and insets with their fonts.
///
/// Every mutation gives the paragraph a fresh [`revision`](Self::revision),
/// which is how cached metrics learn that they are out of date.
#[derive(Debug)]
pub struct Paragraph {
    pub(crate) text: Vec<char>,
    pub(crate) fonts: Vec<FontInfo>,
    /// Sorted by position.
    pub(crate) insets: Vec<(usize, Box<dyn Inset>)>,
    pub(crate) extra_flags: HashMap<usize, RowFlags>,
    pub(crate) begin_of_body: usize,
    pub(crate) style: ParagraphStyle,
    revision: u64,
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Paragraph {
    /// Creates an empty paragraph.
    pub fn new() -> Self {
        Self {
            text: Vec::new(),
            fonts: Vec::new(),
            insets: Vec::new(),
            extra_flags: HashMap::new(),
            begin_of_body: 0,
            style: ParagraphStyle::default(),
            revision: next_revision(),
        }
    }

    /// Creates a paragraph of plain text in the inherited font.
    pub fn from_text(text: &str) -> Self {
        let mut par = Self::new();
        par.text = text.chars().collect();
        par.fonts = alloc::vec![FontInfo::INHERIT; par.text.len()];
        par
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the paragraph has no positions.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Revision of the content, bumped by every edit.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = next_revision();
    }

    /// Layout parameters of the paragraph.
    pub fn style(&self) -> &ParagraphStyle {
        &self.style
    }

    /// Gives mutable access to the style.
    pub fn style_mut(&mut self) -> &mut ParagraphStyle {
        self.touch();
        &mut self.style
    }

    /// First position of the body. Positions before it form the label.
    pub fn begin_of_body(&self) -> usize {
        self.begin_of_body
    }

    /// Moves the boundary between label and body to `pos`.
    pub fn set_begin_of_body(&mut self, pos: usize) {
        assert!(
            pos <= self.len(),
            "body boundary {pos} past paragraph end {}",
            self.len()
        );
        self.begin_of_body = pos;
        self.touch();
    }

    /// Character at `pos`; [`META_INSET`] where an inset sits.
    pub fn char_at(&self, pos: usize) -> char {
        self.text[pos]
    }

    /// The text of `range`, with insets shown as [`META_INSET`].
    pub fn text(&self, range: Range<usize>) -> String {
        self.text[range].iter().collect()
    }

    /// Returns true if `pos` holds an inter-word space.
    pub fn is_separator(&self, pos: usize) -> bool {
        self.text[pos] == ' '
    }

    /// Character font change at `pos`.
    pub fn font_at(&self, pos: usize) -> &FontInfo {
        &self.fonts[pos]
    }

    /// Maximal closed interval around `pos` with the same character font.
    pub fn font_span(&self, pos: usize) -> FontSpan {
        let font = &self.fonts[pos];
        let first = self.fonts[..pos]
            .iter()
            .rposition(|f| f != font)
            .map_or(0, |i| i + 1);
        let last = self.fonts[pos..]
            .iter()
            .position(|f| f != font)
            .map_or(self.len() - 1, |i| pos + i - 1);
        FontSpan { first, last }
    }

    /// The inset at `pos`, if that position holds one.
    pub fn inset_at(&self, pos: usize) -> Option<&dyn Inset> {
        self.inset_index(pos)
            .ok()
            .map(|index| self.insets[index].1.as_ref())
    }

    /// Gives mutable access to the inset at `pos`, e.g. to update its size.
    pub fn inset_mut(&mut self, pos: usize) -> Option<&mut (dyn Inset + 'static)> {
        let index = self.inset_index(pos).ok()?;
        self.touch();
        Some(self.insets[index].1.as_mut())
    }

    /// Iterates over insets and their positions, in position order.
    pub fn insets(&self) -> impl Iterator<Item = (usize, &dyn Inset)> + '_ {
        self.insets.iter().map(|(pos, inset)| (*pos, inset.as_ref()))
    }

    fn inset_index(&self, pos: usize) -> Result<usize, usize> {
        self.insets.binary_search_by_key(&pos, |(p, _)| *p)
    }

    /// Break flags of the element at `pos`.
    pub fn row_flags(&self, pos: usize) -> RowFlags {
        let own = match self.inset_at(pos) {
            Some(inset) => inset.row_flags(),
            None if self.is_separator(pos) => RowFlags::CAN_BREAK_AFTER,
            None => RowFlags::INLINE,
        };
        own | self.extra_flags.get(&pos).copied().unwrap_or_default()
    }

    /// Adds explicit break flags to the element at `pos`.
    pub fn add_row_flags(&mut self, pos: usize, flags: RowFlags) {
        assert!(pos < self.len(), "position {pos} out of range");
        *self.extra_flags.entry(pos).or_default() |= flags;
        self.touch();
    }

    /// Inserts a character before `pos`.
    pub fn insert_char(&mut self, pos: usize, c: char, font: FontInfo) {
        assert!(pos <= self.len(), "position {pos} out of range");
        self.text.insert(pos, c);
        self.fonts.insert(pos, font);
        self.shift(pos, 1);
        self.touch();
    }

    /// Inserts an inset before `pos`.
    pub fn insert_inset(&mut self, pos: usize, inset: Box<dyn Inset>, font: FontInfo) {
        self.insert_char(pos, META_INSET, font);
        let index = self.inset_index(pos).unwrap_err();
        self.insets.insert(index, (pos, inset));
    }

    /// Removes the element at `pos`.
    pub fn erase(&mut self, pos: usize) {
        assert!(pos < self.len(), "position {pos} out of range");
        if let Ok(index) = self.inset_index(pos) {
            drop(self.insets.remove(index));
        }
        let _ = self.extra_flags.remove(&pos);
        self.text.remove(pos);
        self.fonts.remove(pos);
        self.shift(pos + 1, -1);
        self.touch();
    }

    /// Applies `font` to every position of `range`.
    pub fn set_font(&mut self, range: Range<usize>, font: FontInfo) {
        assert!(
            range.start <= range.end && range.end <= self.len(),
            "invalid range {range:?}"
        );
        self.fonts[range].fill(font);
        self.touch();
    }

    /// Moves every position at or after `from` by `delta`.
    fn shift(&mut self, from: usize, delta: isize) {
        let moved = |pos: usize| {
            if pos >= from {
                pos.saturating_add_signed(delta)
            } else {
                pos
            }
        };
        for (pos, _) in &mut self.insets {
            *pos = moved(*pos);
        }
        if !self.extra_flags.is_empty() {
            self.extra_flags = self
                .extra_flags
                .drain()
                .map(|(pos, flags)| (moved(pos), flags))
                .collect();
        }
        if self.begin_of_body > 0 && self.begin_of_body >= from {
            self.begin_of_body = moved(self.begin_of_body);
        }
    }
}
