// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::inputs::{DisplayAlign, MathInset, ParagraphBuilder, ParagraphStyle, RowFlags};
use crate::outputs::RowEnd;
use crate::{Alignment, LayoutConfig};

use super::utils::{row_ranges, TestEnv};

fn aligned(align: Alignment) -> ParagraphStyle {
    ParagraphStyle {
        align,
        ..Default::default()
    }
}

#[test]
fn alignment_offsets() {
    let mut env = TestEnv::zero();
    let left = env.push_styled("abc", aligned(Alignment::Left));
    let right = env.push_styled("abc", aligned(Alignment::Right));
    let center = env.push_styled("abc", aligned(Alignment::Center));
    let block = env.push_styled("abc", aligned(Alignment::Block));
    env.layout(100);

    let x = |pit| env.par_metrics(pit).rows()[0].geometry().x;
    assert_eq!(x(left), 0);
    assert_eq!(x(right), 70);
    assert_eq!(x(center), 35);
    assert_eq!(x(block), 0, "the last row of a block paragraph is not stretched");
}

#[test]
fn block_rows_are_justified() {
    let mut env = TestEnv::zero();
    let pit = env.push_styled("aa bb cc dd", aligned(Alignment::Block));
    env.layout(100);

    let pm = env.par_metrics(pit);
    assert_eq!(row_ranges(pm), [0..9, 9..11]);
    let first = pm.rows()[0].geometry();
    assert_eq!(first.x, 0);
    // 20 pixels of slack over the two inner spaces.
    assert_eq!(first.separator, 10);
    assert_eq!(pm.rows()[1].geometry().separator, 0);

    assert_eq!(env.metrics.cursor_x(&env.text, &env.fonts, pit, 3, false), 40);
    assert_eq!(env.metrics.cursor_x(&env.text, &env.fonts, pit, 6, false), 80);
}

#[test]
fn forced_rows_are_not_justified() {
    let mut env = TestEnv::zero();
    let pit = env.push(
        ParagraphBuilder::new()
            .text("aa bb")
            .inset(crate::inputs::NewlineInset)
            .text("cc")
            .build()
            .unwrap(),
    );
    env.layout(100);

    let pm = env.par_metrics(pit);
    assert_eq!(row_ranges(pm), [0..6, 6..8]);
    assert_eq!(pm.rows()[0].geometry().separator, 0);
}

#[test]
fn left_margin_adds_nesting_and_first_line_indent() {
    let mut env = TestEnv::new(LayoutConfig::default());
    let style = ParagraphStyle {
        depth: 2,
        left_margin: 5,
        indent_first_line: true,
        ..Default::default()
    };
    let pit = env.push_styled("aaaa bbbb", style);

    let margin = |pos| env.metrics.left_margin(&env.text, &env.fonts, pit, pos);
    assert_eq!(margin(0), 10 + 2 * 15 + 5 + 20);
    assert_eq!(margin(5), 10 + 2 * 15 + 5);
}

#[test]
fn right_margin_shrinks_with_depth() {
    let mut env = TestEnv::new(LayoutConfig::default());
    let shallow = env.push_styled(
        "a",
        ParagraphStyle {
            right_margin: 20,
            ..Default::default()
        },
    );
    let deep = env.push_styled(
        "a",
        ParagraphStyle {
            right_margin: 20,
            depth: 4,
            ..Default::default()
        },
    );
    env.layout(200);

    assert_eq!(env.metrics.right_margin(&env.text, shallow), 30);
    assert_eq!(env.metrics.right_margin(&env.text, deep), 20);
    let pm = env.par_metrics(deep);
    assert_eq!(env.metrics.right_margin_of(&env.text, pm), 20);
}

#[test]
fn end_marker_widens_last_right_margin() {
    let config = LayoutConfig {
        end_marker_width: 7,
        ..LayoutConfig::zero()
    };
    let mut env = TestEnv::new(config);
    let pit = env.push_left("aaaa bbbb");
    env.layout(50);

    let rows = env.par_metrics(pit).rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].geometry().right_margin, 0);
    assert_eq!(rows[1].geometry().right_margin, 7);
}

#[test]
fn single_display_element_is_centered() {
    let mut env = TestEnv::zero();
    let pit = env.push(
        ParagraphBuilder::new()
            .text("aa")
            .inset(MathInset::display("x+y", DisplayAlign::Default))
            .text("bb")
            .build()
            .unwrap(),
    );
    env.layout(200);

    let pm = env.par_metrics(pit);
    assert_eq!(row_ranges(pm), [0..2, 2..3, 3..5]);
    // Three glyphs and the padding on both sides.
    assert_eq!(pm.rows()[1].width(), 32);
    assert_eq!(pm.rows()[1].geometry().x, (200 - 32) / 2);
}

#[test]
fn inset_alignment_overrides_paragraph() {
    let mut env = TestEnv::zero();
    let left = env.push(
        ParagraphBuilder::new()
            .style(aligned(Alignment::Center))
            .inset(MathInset::display("x", DisplayAlign::Left))
            .build()
            .unwrap(),
    );
    let right = env.push(
        ParagraphBuilder::new()
            .inset(MathInset::display("x", DisplayAlign::Right))
            .build()
            .unwrap(),
    );
    env.layout(100);

    assert_eq!(env.par_metrics(left).rows()[0].geometry().x, 0);
    assert_eq!(env.par_metrics(right).rows()[0].geometry().x, 100 - 12);
}

#[test]
fn alignment_flag_needs_element_alone_in_row() {
    let mut env = TestEnv::zero();
    let shared = env.push(
        ParagraphBuilder::new()
            .style(aligned(Alignment::Center))
            .text("abc")
            .row_flags(1, RowFlags::ALIGN_RIGHT)
            .build()
            .unwrap(),
    );
    let alone = env.push(
        ParagraphBuilder::new()
            .style(aligned(Alignment::Center))
            .text("a")
            .row_flags(0, RowFlags::ALIGN_RIGHT)
            .build()
            .unwrap(),
    );
    env.layout(100);

    assert_eq!(env.par_metrics(shared).rows()[0].geometry().x, 35);
    assert_eq!(env.par_metrics(alone).rows()[0].geometry().x, 90);
}

#[test]
fn last_row_leaves_room_for_end_marker() {
    let config = LayoutConfig {
        end_marker_width: 7,
        ..LayoutConfig::zero()
    };
    let mut env = TestEnv::new(config);
    let tight = env.push_left("aaaa bbbb");
    let roomy = env.push_left("aaaa bbb");
    env.layout(90);

    let pm = env.par_metrics(tight);
    assert_eq!(row_ranges(pm), [0..5, 5..9]);
    assert_eq!(pm.rows()[0].end_reason(), RowEnd::Fill);
    assert_eq!(pm.rows()[1].geometry().right_margin, 7);
    assert_eq!(row_ranges(env.par_metrics(roomy)), [0..8]);
}

#[test]
fn label_narrower_than_indent_is_padded() {
    let config = LayoutConfig {
        label_indent: 40,
        ..LayoutConfig::zero()
    };
    let mut env = TestEnv::new(config);
    let pit = env.push(
        ParagraphBuilder::new()
            .style(aligned(Alignment::Left))
            .label("1.")
            .text("ab")
            .build()
            .unwrap(),
    );
    env.layout(1000);

    let geometry = *env.par_metrics(pit).rows()[0].geometry();
    assert_eq!(geometry.label_fill, 0);
    assert_eq!(geometry.label_hfill, 10);
    assert_eq!(env.metrics.cursor_x(&env.text, &env.fonts, pit, 3, false), 40);
}

#[test]
fn label_wider_than_indent_overshoots() {
    let config = LayoutConfig {
        label_indent: 40,
        ..LayoutConfig::zero()
    };
    let mut env = TestEnv::new(config);
    let pit = env.push(
        ParagraphBuilder::new()
            .style(aligned(Alignment::Left))
            .label("Definition")
            .text("ab")
            .build()
            .unwrap(),
    );
    env.layout(1000);

    let geometry = *env.par_metrics(pit).rows()[0].geometry();
    assert_eq!(geometry.label_fill, 110 - 40);
    assert_eq!(geometry.label_hfill, 0);
    assert_eq!(env.metrics.cursor_x(&env.text, &env.fonts, pit, 11, false), 110);
}

#[test]
fn label_width_sample_sets_indent() {
    let mut env = TestEnv::zero();
    let style = ParagraphStyle {
        align: Alignment::Left,
        label_width: "MMMMMM".into(),
        ..Default::default()
    };
    let pit = env.push(
        ParagraphBuilder::new()
            .style(style)
            .label("1.")
            .text("ab cd ef gh")
            .build()
            .unwrap(),
    );
    env.layout(100);

    let pm = env.par_metrics(pit);
    assert_eq!(pm.rows()[0].geometry().label_hfill, 30);
    // Continuation rows start at the body indentation.
    assert!(pm.rows().len() > 1);
    assert_eq!(pm.rows()[1].geometry().left_margin, 60);
}
