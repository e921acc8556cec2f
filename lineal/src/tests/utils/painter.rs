// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::inputs::{Font, Painter};

#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) enum PaintOp {
    Text {
        x: i32,
        y: i32,
        text: String,
        font: Font,
    },
    Rectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
}

/// A painter that remembers every call.
#[derive(Default, Debug)]
pub(crate) struct RecordingPainter {
    pub(crate) ops: Vec<PaintOp>,
}

impl RecordingPainter {
    /// The text calls only, as `(x, y, text)`.
    pub(crate) fn texts(&self) -> Vec<(i32, i32, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Text { x, y, text, .. } => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn text(&mut self, x: i32, y: i32, text: &str, font: &Font) {
        self.ops.push(PaintOp::Text {
            x,
            y,
            text: text.to_owned(),
            font: *font,
        });
    }

    fn rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.push(PaintOp::Rectangle {
            x,
            y,
            width,
            height,
        });
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.ops.push(PaintOp::Line { x1, y1, x2, y2 });
    }
}
