// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::inputs::{FontInfo, FontSeries, GraphicInset, ParagraphBuilder};
use crate::Font;

use super::utils::{PaintOp, RecordingPainter, TestEnv};

#[test]
fn same_font_text_is_one_call() {
    let mut env = TestEnv::zero();
    let pit = env.push_left("ab cd");
    env.layout(100);

    let mut painter = RecordingPainter::default();
    let painted = env
        .metrics
        .draw_paragraph(&env.text, &env.fonts, &mut painter, pit, 5, 100, false);
    assert_eq!(painted, 1);
    assert_eq!(
        painter.ops,
        [PaintOp::Text {
            x: 5,
            y: 108,
            text: "ab cd".into(),
            font: Font::default(),
        }]
    );
}

#[test]
fn font_changes_split_text() {
    let mut env = TestEnv::zero();
    let bold = FontInfo::INHERIT.series(FontSeries::Bold);
    let pit = env.push(
        ParagraphBuilder::new()
            .text("ab")
            .text_with_font("cd", bold)
            .text("ef")
            .build()
            .unwrap(),
    );
    env.layout(100);

    let mut painter = RecordingPainter::default();
    env.metrics
        .draw_paragraph(&env.text, &env.fonts, &mut painter, pit, 0, 0, false);
    assert_eq!(painter.texts(), [(0, 8, "ab"), (20, 8, "cd"), (40, 8, "ef")]);
}

#[test]
fn insets_draw_on_the_baseline() {
    let mut env = TestEnv::zero();
    let pit = env.push(
        ParagraphBuilder::new()
            .text("ab")
            .inset(GraphicInset::new(10, 5))
            .text("c")
            .build()
            .unwrap(),
    );
    env.layout(100);

    let mut painter = RecordingPainter::default();
    env.metrics
        .draw_paragraph(&env.text, &env.fonts, &mut painter, pit, 0, 0, false);
    assert_eq!(painter.ops.len(), 3);
    assert_eq!(
        painter.ops[1],
        PaintOp::Rectangle {
            x: 20,
            y: 3,
            width: 10,
            height: 5,
        }
    );
    assert_eq!(painter.texts(), [(0, 8, "ab"), (30, 8, "c")]);
}

#[test]
fn stretched_separators_split_text() {
    let mut env = TestEnv::zero();
    let pit = env.push(crate::Paragraph::from_text("aa bb cc dd"));
    env.layout(100);

    let mut painter = RecordingPainter::default();
    let painted = env
        .metrics
        .draw_paragraph(&env.text, &env.fonts, &mut painter, pit, 0, 0, false);
    assert_eq!(painted, 2);
    assert_eq!(
        painter.texts(),
        [
            (0, 8, "aa "),
            (40, 8, "bb "),
            (80, 8, "cc "),
            (0, 18, "dd"),
        ]
    );
}

#[test]
fn only_changed_rows_are_repainted() {
    let mut env = TestEnv::zero();
    let pit = env.push_left("aaaa bbbb");
    env.layout(50);

    env.text
        .paragraph_mut(pit)
        .insert_char(9, 'b', FontInfo::INHERIT);
    let _ = env.metrics.redo_paragraph(&env.text, &env.fonts, pit);

    let mut painter = RecordingPainter::default();
    let painted = env
        .metrics
        .draw_paragraph(&env.text, &env.fonts, &mut painter, pit, 0, 0, true);
    assert_eq!(painted, 1);
    assert_eq!(painter.texts(), [(0, 18, "bbbbb")]);
}
