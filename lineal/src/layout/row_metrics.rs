// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{FontRun, LayoutCx};
use crate::inputs::{Alignment, ParagraphStyle, RowFlags};
use crate::outputs::{Row, RowEnd, RowGeometry};
use crate::LayoutConfig;

/// Left margin of the row of paragraph `pit` starting at `row_start`.
pub(crate) fn left_margin(cx: &LayoutCx<'_>, pit: usize, row_start: usize) -> i32 {
    let par = cx.paragraph(pit);
    let style = par.style();
    let config = cx.config;
    let mut margin = config.left_margin
        + i32::from(style.depth) * config.depth_indent
        + style.left_margin;
    if row_start == 0 && style.indent_first_line {
        margin += config.parindent;
    }
    let body = par.begin_of_body();
    if body > 0 && row_start >= body {
        // Continuation rows of a labelled paragraph line up with the body.
        margin += cx.body_indent(par);
    }
    margin
}

/// Right margin of paragraph `pit`, without the end marker allowance.
///
/// The style margin shrinks with nesting depth.
pub(crate) fn right_margin(config: &LayoutConfig, style: &ParagraphStyle) -> i32 {
    let depth = i32::from(style.depth);
    config.right_margin + style.right_margin * 4 / (depth + 4)
}

/// Natural width of `start..end`, without any indentation.
fn natural_width(cx: &LayoutCx<'_>, pit: usize, start: usize, end: usize, max_width: i32) -> i32 {
    let par = cx.paragraph(pit);
    let mut width = 0;
    for span in FontRun::new(cx.defaults(), par, start) {
        if span.start >= end {
            break;
        }
        for pos in span.start..span.end.min(end) {
            width += cx.element_width(par, pos, &span.font, max_width);
        }
    }
    width
}

/// Fills in the geometry of a broken row: margins, label spacing,
/// justification and alignment offset.
pub(crate) fn compute_row_metrics(
    cx: &LayoutCx<'_>,
    pit: usize,
    row: &mut Row,
    max_width: i32,
    is_last: bool,
) {
    let par = cx.paragraph(pit);
    let style = par.style();
    let mut geometry = RowGeometry {
        left_margin: left_margin(cx, pit, row.start),
        right_margin: right_margin(cx.config, style),
        ..Default::default()
    };
    if is_last {
        geometry.right_margin += cx.config.end_marker_width;
    }

    let body = par.begin_of_body();
    if body > row.start && body <= row.end {
        let label = natural_width(cx, pit, row.start, body, max_width);
        let indent = cx.body_indent(par);
        geometry.label_fill = (label - indent).max(0);
        geometry.label_hfill = (indent - label).max(0);
    }

    let content_end = if row.trailing_separator {
        row.end - 1
    } else {
        row.end
    };
    row.separators = (row.start.max(body)..content_end)
        .filter(|&pos| par.is_separator(pos))
        .count();

    // Alignment flags and display centering only apply to an element that
    // sits alone in its row.
    let flags = if row.end == row.start + 1 {
        par.row_flags(row.start)
    } else {
        RowFlags::empty()
    };
    let align = if flags.contains(RowFlags::ALIGN_LEFT) {
        Alignment::Left
    } else if flags.contains(RowFlags::ALIGN_RIGHT) {
        Alignment::Right
    } else if flags.is_display() {
        Alignment::Center
    } else {
        style.align
    };

    let free = max_width
        .saturating_sub(geometry.left_margin)
        .saturating_sub(geometry.right_margin)
        .saturating_sub(row.width)
        .max(0);
    let offset = match align {
        Alignment::Left => 0,
        Alignment::Right => free,
        Alignment::Center => free / 2,
        Alignment::Block => {
            let justify = !is_last && row.end_reason != RowEnd::Forced && row.separators > 0;
            if justify {
                let separators = i32::try_from(row.separators).unwrap_or(i32::MAX);
                geometry.separator = free / separators;
            }
            0
        }
    };
    geometry.x = geometry.left_margin.saturating_add(offset);
    row.geometry = geometry;
}
