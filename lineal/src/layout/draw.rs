// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use log::trace;

use super::{LayoutCx, RowElements, TextMetrics};
use crate::inputs::{Font, FontMetrics, PaintInfo, Painter, Text};

/// Text waiting to be handed to the painter in one call.
struct PendingText {
    x: i32,
    font: Font,
    text: String,
}

impl PendingText {
    fn flush(&mut self, painter: &mut dyn Painter, baseline: i32) {
        if !self.text.is_empty() {
            painter.text(self.x, baseline, &self.text, &self.font);
            self.text.clear();
        }
    }
}

impl TextMetrics {
    /// Paints the rows of paragraph `pit` with the text origin at `(x, y)`.
    ///
    /// Contiguous characters sharing a font go out in a single text call;
    /// insets draw themselves on the row baseline. With `only_changed` set,
    /// rows whose layout did not change in the last recomputation are
    /// skipped. Returns the number of rows painted.
    ///
    /// # Panics
    ///
    /// Panics if the paragraph has not been computed.
    pub fn draw_paragraph(
        &self,
        text: &Text,
        fonts: &dyn FontMetrics,
        painter: &mut dyn Painter,
        pit: usize,
        x: i32,
        y: i32,
        only_changed: bool,
    ) -> usize {
        let pm = self.par_metrics(pit);
        let cx = LayoutCx::new(text, fonts, &self.config);
        let par = cx.paragraph(pit);

        let mut painted = 0;
        let mut top = y + pm.position();
        for row in pm.rows() {
            let row_top = top;
            top += row.height();
            if only_changed && !row.changed() {
                continue;
            }
            let baseline = row_top + row.dimension().ascent;
            let mut pending = PendingText {
                x,
                font: Font::default(),
                text: String::new(),
            };
            let mut next_x = x;
            for element in RowElements::new(cx, pit, row, pm.max_width()) {
                let element_x = x + element.x;
                if let Some(inset) = par.inset_at(element.pos) {
                    pending.flush(painter, baseline);
                    let mut pi = PaintInfo {
                        painter: &mut *painter,
                        fonts,
                        base_font: element.font,
                    };
                    inset.draw(&mut pi, element_x, baseline);
                } else {
                    if pending.font != element.font || element_x != next_x {
                        pending.flush(painter, baseline);
                    }
                    if pending.text.is_empty() {
                        pending.x = element_x;
                        pending.font = element.font;
                    }
                    let c = par.char_at(element.pos);
                    pending.text.push(c);
                    // Stretched separators move the following text.
                    if element.width != fonts.width(&element.font, c) {
                        pending.flush(painter, baseline);
                    }
                }
                next_x = element_x + element.width;
            }
            pending.flush(painter, baseline);
            trace!("painted row {}..{} of paragraph {pit}", row.start(), row.end());
            painted += 1;
        }
        painted
    }
}
