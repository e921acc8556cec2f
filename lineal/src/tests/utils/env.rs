// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::inputs::{Alignment, Font, FontMetrics, Paragraph, ParagraphStyle, Text};
use crate::outputs::ParagraphMetrics;
use crate::{LayoutConfig, TextMetrics};

/// Advance of every glyph at normal size.
pub(crate) const ADVANCE: i32 = 10;
pub(crate) const ASCENT: i32 = 8;
pub(crate) const DESCENT: i32 = 2;

/// Font metrics where every glyph has the same advance. Sizes scale all
/// values by their percentage.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Monospace;

impl FontMetrics for Monospace {
    fn width(&self, font: &Font, _c: char) -> i32 {
        ADVANCE * font.size.percent() / 100
    }

    fn max_ascent(&self, font: &Font) -> i32 {
        ASCENT * font.size.percent() / 100
    }

    fn max_descent(&self, font: &Font) -> i32 {
        DESCENT * font.size.percent() / 100
    }
}

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A text, its layout and the font metrics to compute it with.
pub(crate) struct TestEnv {
    pub(crate) text: Text,
    pub(crate) metrics: TextMetrics,
    pub(crate) fonts: Monospace,
}

impl TestEnv {
    pub(crate) fn new(config: LayoutConfig) -> Self {
        init_logger();
        Self {
            text: Text::new(Font::default()),
            metrics: TextMetrics::new(config),
            fonts: Monospace,
        }
    }

    /// An environment without margins or indentation.
    pub(crate) fn zero() -> Self {
        Self::new(LayoutConfig::zero())
    }

    /// Appends a paragraph and returns its index.
    pub(crate) fn push(&mut self, paragraph: Paragraph) -> usize {
        self.text.push(paragraph);
        self.text.len() - 1
    }

    /// Appends a plain paragraph aligned to the left.
    pub(crate) fn push_left(&mut self, text: &str) -> usize {
        let mut paragraph = Paragraph::from_text(text);
        paragraph.style_mut().align = Alignment::Left;
        self.push(paragraph)
    }

    /// Appends a plain paragraph with `style`.
    pub(crate) fn push_styled(&mut self, text: &str, style: ParagraphStyle) -> usize {
        let mut paragraph = Paragraph::from_text(text);
        *paragraph.style_mut() = style;
        self.push(paragraph)
    }

    pub(crate) fn layout(&mut self, max_width: i32) -> bool {
        self.metrics.metrics(&self.text, &self.fonts, max_width)
    }

    pub(crate) fn par_metrics(&self, pit: usize) -> &ParagraphMetrics {
        self.metrics.par_metrics(pit)
    }
}
