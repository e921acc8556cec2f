// Copyright 2021 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row breaking, row geometry and the metrics cache.

mod cache;
mod cursor;
mod draw;
mod elements;
mod font_run;
mod line;
mod row_metrics;
mod text_metrics;

pub use cache::{ParagraphMetricsCache, SlotState};
pub use font_run::{FontRun, FontSpanRun};
pub use text_metrics::TextMetrics;

pub(crate) use elements::RowElements;
pub(crate) use line::break_row;

use crate::inputs::{Font, FontMetrics, MetricsInfo, Paragraph, Text};
use crate::LayoutConfig;

/// Everything row breaking and row geometry read from the outside.
#[derive(Copy, Clone)]
pub(crate) struct LayoutCx<'a> {
    pub(crate) text: &'a Text,
    pub(crate) fonts: &'a dyn FontMetrics,
    pub(crate) config: &'a LayoutConfig,
}

impl core::fmt::Debug for LayoutCx<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutCx")
            .field("paragraphs", &self.text.len())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> LayoutCx<'a> {
    pub(crate) fn new(text: &'a Text, fonts: &'a dyn FontMetrics, config: &'a LayoutConfig) -> Self {
        Self {
            text,
            fonts,
            config,
        }
    }

    pub(crate) fn paragraph(&self, pit: usize) -> &'a Paragraph {
        self.text.paragraph(pit)
    }

    pub(crate) fn defaults(&self) -> &'a Font {
        self.text.default_font()
    }

    pub(crate) fn metrics_info(&self, base_font: Font, max_width: i32) -> MetricsInfo<'a> {
        MetricsInfo {
            fonts: self.fonts,
            base_font,
            max_width,
        }
    }

    /// Width of the element at `pos`, set in `font`.
    pub(crate) fn element_width(
        &self,
        par: &Paragraph,
        pos: usize,
        font: &Font,
        max_width: i32,
    ) -> i32 {
        match par.inset_at(pos) {
            Some(inset) => inset.metrics(&self.metrics_info(*font, max_width)).width,
            None => self.fonts.width(font, par.char_at(pos)),
        }
    }

    /// Resolved font of the label region.
    pub(crate) fn label_font(&self, par: &Paragraph) -> Font {
        par.style().label_font.realize(self.defaults())
    }

    /// Distance from the row's left margin to the start of the body in a
    /// labelled paragraph.
    pub(crate) fn body_indent(&self, par: &Paragraph) -> i32 {
        let sample = &par.style().label_width;
        if sample.is_empty() {
            self.config.label_indent
        } else {
            self.fonts.string_width(&self.label_font(par), sample)
        }
    }
}
