// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::inputs::{
    boundary_break, BoundaryBreak, FontInfo, FootnoteInset, GraphicInset, InsetKind, MetricsInfo,
    ParagraphBuilder, RowFlags, TableInset, Text,
};
use crate::{ConfigError, Dimension, Font, LayoutConfig, Paragraph, ParagraphError, TextMetrics};

use super::utils::Monospace;

#[test]
fn builder_rejects_body_past_end() {
    let err = ParagraphBuilder::new()
        .text("ab")
        .begin_of_body(3)
        .build()
        .unwrap_err();
    assert_eq!(err, ParagraphError::BodyOutOfRange { body: 3, len: 2 });
}

#[test]
fn builder_rejects_bad_font_range() {
    let err = ParagraphBuilder::new()
        .text("ab")
        .font(1..5, FontInfo::INHERIT)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ParagraphError::InvalidRange {
            start: 1,
            end: 5,
            len: 2
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid range 1..5 for a paragraph of 2 positions"
    );
}

#[test]
fn builder_rejects_flags_past_end() {
    let err = ParagraphBuilder::new()
        .text("ab")
        .row_flags(2, RowFlags::BREAK_AFTER)
        .build()
        .unwrap_err();
    assert_eq!(err, ParagraphError::PositionOutOfRange { pos: 2, len: 2 });
}

#[test]
fn config_rejects_negative_values() {
    assert_eq!(LayoutConfig::default().validate(), Ok(()));
    let config = LayoutConfig {
        parindent: -1,
        ..LayoutConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::Negative {
            field: "parindent",
            value: -1
        })
    );

    let metrics = TextMetrics::new(config);
    assert_eq!(*metrics.config(), LayoutConfig::default());
}

#[test]
fn boundary_policy() {
    use BoundaryBreak::{Allowed, Forced, None};

    let cases = [
        (RowFlags::INLINE, RowFlags::INLINE, None),
        (RowFlags::CAN_BREAK_AFTER, RowFlags::INLINE, Allowed),
        (RowFlags::INLINE, RowFlags::CAN_BREAK_BEFORE, Allowed),
        (RowFlags::BREAK_AFTER, RowFlags::INLINE, Forced),
        (RowFlags::INLINE, RowFlags::BREAK_BEFORE, Forced),
        (RowFlags::BREAK_AFTER, RowFlags::NO_BREAK_BEFORE, None),
        (
            RowFlags::CAN_BREAK_AFTER | RowFlags::NO_BREAK_AFTER,
            RowFlags::INLINE,
            None,
        ),
        (
            RowFlags::ALWAYS_BREAK_AFTER,
            RowFlags::NO_BREAK_BEFORE,
            Forced,
        ),
        (RowFlags::DISPLAY, RowFlags::NO_BREAK_BEFORE, Forced),
        (RowFlags::NO_BREAK_AFTER, RowFlags::DISPLAY, Forced),
    ];
    for (before, after, expected) in cases {
        assert_eq!(
            boundary_break(before, after),
            expected,
            "{before:?} then {after:?}"
        );
    }
}

#[test]
fn editing_moves_insets_and_body() {
    let mut par = ParagraphBuilder::new()
        .label("1.")
        .text("ab")
        .inset(GraphicInset::new(4, 4))
        .build()
        .unwrap();
    assert_eq!(par.begin_of_body(), 3);
    assert!(par.inset_at(5).is_some());

    let revision = par.revision();
    par.insert_char(0, 'x', FontInfo::INHERIT);
    assert!(par.revision() > revision);
    assert_eq!(par.begin_of_body(), 4);
    assert!(par.inset_at(5).is_none());
    assert_eq!(par.inset_at(6).map(|inset| inset.kind()), Some(InsetKind::Graphic));

    par.erase(4);
    assert_eq!(par.text(0..par.len()), "x1. b\u{1}");
    assert_eq!(par.inset_at(5).map(|inset| inset.kind()), Some(InsetKind::Graphic));

    par.erase(5);
    assert_eq!(par.insets().count(), 0);
}

#[test]
fn separators_may_break_after() {
    let par = Paragraph::from_text("a b");
    assert!(par.is_separator(1));
    assert_eq!(par.row_flags(1), RowFlags::CAN_BREAK_AFTER);
    assert_eq!(par.row_flags(0), RowFlags::INLINE);
}

#[test]
fn font_span_covers_equal_fonts() {
    let mut par = Paragraph::from_text("abcdef");
    par.set_font(2..4, FontInfo::INHERIT.size(crate::inputs::FontSize::Small));
    let span = par.font_span(3);
    assert_eq!((span.first, span.last), (2, 3));
    let span = par.font_span(5);
    assert_eq!((span.first, span.last), (4, 5));
}

#[test]
fn text_tracks_default_revision() {
    let mut text = Text::new(Font::default());
    let revision = text.defaults_revision();
    text.set_default_font(Font::default());
    assert!(text.defaults_revision() > revision);
}

#[test]
fn dimension_arithmetic() {
    let mut row = Dimension::new(10, 8, 2);
    row += Dimension::new(5, 12, 1);
    assert_eq!(row, Dimension::new(15, 12, 2));

    let mut par = row;
    par.stack_below(&Dimension::new(30, 8, 2));
    assert_eq!(par, Dimension::new(30, 12, 12));
    assert_eq!(par.height(), 24);
}

#[test]
fn inset_metrics() {
    let mi = MetricsInfo {
        fonts: &Monospace,
        base_font: Font::default(),
        max_width: 100,
    };

    let footnote = FootnoteInset::new("12");
    // Small size is 80 percent: 8 pixels per glyph.
    assert_eq!(
        crate::Inset::metrics(&footnote, &mi),
        Dimension::new(16 + 4, 6 + 2, 1 + 2)
    );

    let table = TableInset::new(vec![
        vec!["a".into(), "bb".into()],
        vec!["ccc".into()],
    ]);
    assert_eq!((table.rows(), table.columns()), (2, 2));
    let dim = crate::Inset::metrics(&table, &mi);
    assert_eq!(dim.width, (30 + 6) + (20 + 6));
    assert_eq!(dim.height(), 2 * (10 + 6));
    assert_eq!(dim.ascent, 8 + 3);
    assert!(crate::Inset::row_flags(&table).is_display());
}
