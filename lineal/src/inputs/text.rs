// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use super::paragraph::next_revision;
use super::{Font, Paragraph};

/// An ordered list of paragraphs sharing document defaults.
#[derive(Debug)]
pub struct Text {
    paragraphs: Vec<Paragraph>,
    default_font: Font,
    defaults_revision: u64,
}

impl Default for Text {
    fn default() -> Self {
        Self::new(Font::default())
    }
}

impl Text {
    /// Creates a text without paragraphs.
    pub fn new(default_font: Font) -> Self {
        Self {
            paragraphs: Vec::new(),
            default_font,
            defaults_revision: next_revision(),
        }
    }

    /// Creates a text from paragraphs.
    pub fn from_paragraphs(default_font: Font, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            ..Self::new(default_font)
        }
    }

    /// Number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Returns true if there are no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Returns the paragraph at `pit`.
    ///
    /// # Panics
    ///
    /// Panics if `pit` is out of range.
    pub fn paragraph(&self, pit: usize) -> &Paragraph {
        &self.paragraphs[pit]
    }

    /// Mutable access to paragraph `pit`.
    ///
    /// # Panics
    ///
    /// Panics if `pit` is out of range.
    pub fn paragraph_mut(&mut self, pit: usize) -> &mut Paragraph {
        &mut self.paragraphs[pit]
    }

    /// Paragraph `pit`, if there is one.
    pub fn get(&self, pit: usize) -> Option<&Paragraph> {
        self.paragraphs.get(pit)
    }

    /// All paragraphs in order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Appends a paragraph.
    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Inserts a paragraph before `pit`. Cached metrics keyed by index must
    /// be cleared by the caller.
    pub fn insert(&mut self, pit: usize, paragraph: Paragraph) {
        self.paragraphs.insert(pit, paragraph);
    }

    /// Removes and returns paragraph `pit`, shifting the ones after it.
    pub fn remove(&mut self, pit: usize) -> Paragraph {
        self.paragraphs.remove(pit)
    }

    /// Document default font every paragraph font is realized against.
    pub fn default_font(&self) -> &Font {
        &self.default_font
    }

    /// Changes the document default font, which affects every paragraph.
    pub fn set_default_font(&mut self, font: Font) {
        self.default_font = font;
        self.defaults_revision = next_revision();
    }

    /// Revision of the document defaults.
    pub fn defaults_revision(&self) -> u64 {
        self.defaults_revision
    }
}
