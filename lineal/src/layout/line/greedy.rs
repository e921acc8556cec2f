// Copyright 2021 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy row breaking.

use log::trace;

use crate::inputs::{boundary_break, BoundaryBreak, Font};
use crate::layout::{FontRun, LayoutCx};
use crate::outputs::{Dimension, Row, RowEnd};

/// A place where the current row may end, remembered so that we can go back
/// and take it once the row overflows.
#[derive(Copy, Clone, Debug)]
struct BreakOpportunity {
    /// First position of the next row.
    pos: usize,
    /// Visible width of the row if it ends here.
    width: i32,
    /// Whether the row would end with a separator.
    trailing: bool,
}

/// Iteration state of the breaker.
#[derive(Clone, Debug)]
struct BreakerState {
    pos: usize,
    font: Font,
    /// Accumulated width of the current row.
    x: i32,
    prev_boundary: Option<BreakOpportunity>,
}

/// Computes the row of paragraph `pit` that starts at `start`.
///
/// Elements are added until the row is `available_width` wide. An element
/// ending exactly on the budget still fits. The first element of a row is
/// always accepted, so an element wider than the budget overflows instead of
/// producing an empty row.
pub(crate) fn break_row(cx: &LayoutCx<'_>, pit: usize, available_width: i32, start: usize) -> Row {
    let par = cx.paragraph(pit);
    let len = par.len();
    if start >= len {
        debug_assert!(len == 0, "empty row requested inside paragraph {pit}");
        let mut row = Row {
            start,
            end: start,
            ..Default::default()
        };
        row.dim = row_dimension(cx, pit, start, start, available_width);
        return row;
    }

    let degenerate = available_width <= 0;
    let body = par.begin_of_body();
    let body_indent = if body > start {
        cx.body_indent(par)
    } else {
        0
    };
    let mut fonts = FontRun::new(cx.defaults(), par, start);
    let mut state = BreakerState {
        pos: start,
        font: *fonts.font(),
        x: 0,
        prev_boundary: None,
    };

    let (end, width, reason, trailing_separator) = loop {
        let pos = state.pos;
        if pos == body && body > start {
            // The body starts no earlier than the label indentation.
            state.x = state.x.max(body_indent);
        }
        let w = cx.element_width(par, pos, &state.font, available_width);
        let next = pos + 1;

        if pos > start && (degenerate || state.x.saturating_add(w) > available_width) {
            // Hang an overflowing separator at the end of the row, unless the
            // row must not break after it.
            let breaks_after = next == len
                || boundary_break(par.row_flags(pos), par.row_flags(next)) != BoundaryBreak::None;
            if !degenerate && par.is_separator(pos) && breaks_after {
                let reason = if next == len {
                    RowEnd::Paragraph
                } else {
                    RowEnd::Fill
                };
                break (next, state.x, reason, true);
            }
            if let Some(prev) = state.prev_boundary.take() {
                break (prev.pos, prev.width, RowEnd::Fill, prev.trailing);
            }
            break (pos, state.x, RowEnd::Overflow, false);
        }

        let before = state.x;
        state.x = state.x.saturating_add(w);
        if next == len {
            break (len, state.x, RowEnd::Paragraph, false);
        }

        let trailing = par.is_separator(pos);
        let visible = if trailing { before } else { state.x };
        match boundary_break(par.row_flags(pos), par.row_flags(next)) {
            BoundaryBreak::Forced => break (next, visible, RowEnd::Forced, trailing),
            BoundaryBreak::Allowed => {
                state.prev_boundary = Some(BreakOpportunity {
                    pos: next,
                    width: visible,
                    trailing,
                });
            }
            BoundaryBreak::None => {}
        }

        let (font, _) = fonts.advance();
        state.font = font;
        state.pos = next;
    };

    trace!("paragraph {pit}: row {start}..{end} width {width} ({reason:?})");

    let mut row = Row {
        start,
        end,
        width,
        end_reason: reason,
        trailing_separator,
        flags: par.row_flags(start) | par.row_flags(end - 1),
        ..Default::default()
    };
    row.dim = row_dimension(cx, pit, start, end, available_width);
    row.dim.width = width;
    row
}

/// Vertical envelope of the elements in `start..end`.
///
/// An empty range is as tall as the font at its position.
fn row_dimension(
    cx: &LayoutCx<'_>,
    pit: usize,
    start: usize,
    end: usize,
    available_width: i32,
) -> Dimension {
    let par = cx.paragraph(pit);
    if start == end {
        let font = FontRun::new(cx.defaults(), par, start.min(par.len().saturating_sub(1)));
        return Dimension::from_font(cx.fonts, font.font());
    }
    let mut dim = Dimension::default();
    for span in FontRun::new(cx.defaults(), par, start) {
        if span.start >= end {
            break;
        }
        let mut has_text = false;
        for pos in span.start..span.end.min(end) {
            if let Some(inset) = par.inset_at(pos) {
                let inset_dim = inset.metrics(&cx.metrics_info(span.font, available_width));
                dim.ascent = dim.ascent.max(inset_dim.ascent);
                dim.descent = dim.descent.max(inset_dim.descent);
            } else {
                has_text = true;
            }
        }
        if has_text {
            dim += Dimension::from_font(cx.fonts, &span.font);
        }
    }
    dim
}
