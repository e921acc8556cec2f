// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embedded objects laid out as opaque boxes.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use super::{Color, Font, FontFamily, FontMetrics, FontSize, Painter, RowFlags};
use crate::outputs::Dimension;

/// Inputs available to an inset when it computes its size.
#[derive(Copy, Clone)]
pub struct MetricsInfo<'a> {
    /// Glyph measurement.
    pub fonts: &'a dyn FontMetrics,
    /// Display font at the inset's position.
    pub base_font: Font,
    /// Width available to the row holding the inset.
    pub max_width: i32,
}

impl Debug for MetricsInfo<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MetricsInfo")
            .field("base_font", &self.base_font)
            .field("max_width", &self.max_width)
            .finish_non_exhaustive()
    }
}

/// Inputs available to an inset when it draws itself.
pub struct PaintInfo<'a> {
    /// Destination of the drawing calls.
    pub painter: &'a mut dyn Painter,
    /// Metrics of the fonts the inset is drawn with.
    pub fonts: &'a dyn FontMetrics,
    /// Font in effect at the inset's position.
    pub base_font: Font,
}

impl Debug for PaintInfo<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaintInfo")
            .field("base_font", &self.base_font)
            .finish_non_exhaustive()
    }
}

/// The concrete kind of an inset.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum InsetKind {
    /// A forced row break.
    Newline,
    /// A formula.
    Math,
    /// An image of fixed size.
    Graphic,
    /// A collapsed footnote.
    Footnote,
    /// A grid of fixed size cells.
    Table,
}

/// An object embedded at a single paragraph position.
///
/// The layout engine only sees its size and its break flags.
pub trait Inset: Debug {
    /// Computes the box of the inset.
    fn metrics(&self, mi: &MetricsInfo<'_>) -> Dimension;

    /// Draws the inset with its left edge at `x` on baseline `y`.
    fn draw(&self, pi: &mut PaintInfo<'_>, x: i32, y: i32);

    /// How rows may break around the inset.
    fn row_flags(&self) -> RowFlags {
        RowFlags::INLINE
    }

    fn kind(&self) -> InsetKind;
}

/// Horizontal placement requested by a displayed inset.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum DisplayAlign {
    /// Follow the default placement of displayed material.
    #[default]
    Default,
    Left,
    Right,
}

impl DisplayAlign {
    fn flags(self) -> RowFlags {
        match self {
            Self::Default => RowFlags::empty(),
            Self::Left => RowFlags::ALIGN_LEFT,
            Self::Right => RowFlags::ALIGN_RIGHT,
        }
    }
}

/// A manual line break.
#[derive(Clone, Default, Debug)]
pub struct NewlineInset;

impl Inset for NewlineInset {
    fn metrics(&self, mi: &MetricsInfo<'_>) -> Dimension {
        let mut dim = Dimension::from_font(mi.fonts, &mi.base_font);
        dim.width = mi.fonts.width(&mi.base_font, 'n');
        dim
    }

    fn draw(&self, pi: &mut PaintInfo<'_>, x: i32, y: i32) {
        let w = pi.fonts.width(&pi.base_font, 'n');
        let h = pi.fonts.max_ascent(&pi.base_font) / 2;
        pi.painter.line(x + w - 1, y - h, x + w - 1, y);
        pi.painter.line(x, y, x + w - 1, y);
    }

    fn row_flags(&self) -> RowFlags {
        RowFlags::ALWAYS_BREAK_AFTER
    }

    fn kind(&self) -> InsetKind {
        InsetKind::Newline
    }
}

/// Padding around a formula, on each side.
const MATH_PADDING: i32 = 1;

/// A formula, set inline or displayed on its own row.
#[derive(Clone, Debug)]
pub struct MathInset {
    formula: String,
    display: bool,
    align: DisplayAlign,
}

impl MathInset {
    /// An inline formula.
    pub fn inline(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            display: false,
            align: DisplayAlign::Default,
        }
    }

    /// A displayed formula.
    pub fn display(formula: impl Into<String>, align: DisplayAlign) -> Self {
        Self {
            formula: formula.into(),
            display: true,
            align,
        }
    }

    /// Source of the formula.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    fn font(base: &Font) -> Font {
        Font {
            family: FontFamily::Symbol,
            color: Color::Red,
            ..*base
        }
    }
}

impl Inset for MathInset {
    fn metrics(&self, mi: &MetricsInfo<'_>) -> Dimension {
        let font = Self::font(&mi.base_font);
        let mut dim = Dimension::from_font(mi.fonts, &font);
        dim.width = mi.fonts.string_width(&font, &self.formula) + 2 * MATH_PADDING;
        dim
    }

    fn draw(&self, pi: &mut PaintInfo<'_>, x: i32, y: i32) {
        let font = Self::font(&pi.base_font);
        pi.painter.text(x + MATH_PADDING, y, &self.formula, &font);
    }

    fn row_flags(&self) -> RowFlags {
        if self.display {
            RowFlags::DISPLAY | self.align.flags()
        } else {
            RowFlags::INLINE
        }
    }

    fn kind(&self) -> InsetKind {
        InsetKind::Math
    }
}

/// An image of known pixel size, resting on the baseline.
#[derive(Clone, Debug)]
pub struct GraphicInset {
    width: i32,
    height: i32,
    display: bool,
}

impl GraphicInset {
    /// Creates an inline image. Negative sizes count as zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            display: false,
        }
    }

    /// Puts the image on a row of its own.
    pub fn displayed(mut self) -> Self {
        self.display = true;
        self
    }

    /// Updates the size, e.g. once the image has finished loading.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
    }
}

impl Inset for GraphicInset {
    fn metrics(&self, _mi: &MetricsInfo<'_>) -> Dimension {
        Dimension::new(self.width, self.height, 0)
    }

    fn draw(&self, pi: &mut PaintInfo<'_>, x: i32, y: i32) {
        pi.painter.rectangle(x, y - self.height, self.width, self.height);
    }

    fn row_flags(&self) -> RowFlags {
        if self.display {
            RowFlags::DISPLAY
        } else {
            RowFlags::INLINE
        }
    }

    fn kind(&self) -> InsetKind {
        InsetKind::Graphic
    }
}

/// Space between a button frame and its label.
const BUTTON_MARGIN: i32 = 2;

/// A footnote shown collapsed as a labelled button.
#[derive(Clone, Debug)]
pub struct FootnoteInset {
    label: String,
}

impl FootnoteInset {
    /// Creates a footnote shown as `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    fn font(base: &Font) -> Font {
        Font {
            color: Color::Gray,
            ..base.with_size(FontSize::Small)
        }
    }
}

impl Inset for FootnoteInset {
    fn metrics(&self, mi: &MetricsInfo<'_>) -> Dimension {
        let font = Self::font(&mi.base_font);
        Dimension::new(
            mi.fonts.string_width(&font, &self.label) + 2 * BUTTON_MARGIN,
            mi.fonts.max_ascent(&font) + BUTTON_MARGIN,
            mi.fonts.max_descent(&font) + BUTTON_MARGIN,
        )
    }

    fn draw(&self, pi: &mut PaintInfo<'_>, x: i32, y: i32) {
        let dim = self.metrics(&MetricsInfo {
            fonts: pi.fonts,
            base_font: pi.base_font,
            max_width: i32::MAX,
        });
        pi.painter
            .rectangle(x, y - dim.ascent, dim.width, dim.height());
        let font = Self::font(&pi.base_font);
        pi.painter.text(x + BUTTON_MARGIN, y, &self.label, &font);
    }

    fn kind(&self) -> InsetKind {
        InsetKind::Footnote
    }
}

/// Padding inside every table cell, on each side.
const CELL_PADDING: i32 = 3;

/// A grid of text cells, displayed on a row of its own.
#[derive(Clone, Debug)]
pub struct TableInset {
    cells: Vec<Vec<String>>,
}

impl TableInset {
    /// Creates a table from its rows. Short rows are padded with empty cells.
    pub fn new(cells: Vec<Vec<String>>) -> Self {
        let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
        let cells = cells
            .into_iter()
            .map(|mut row| {
                row.resize(columns, String::new());
                row
            })
            .collect();
        Self { cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    fn column_widths(&self, fonts: &dyn FontMetrics, font: &Font) -> Vec<i32> {
        let mut widths = alloc::vec![0; self.columns()];
        for row in &self.cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(fonts.string_width(font, cell) + 2 * CELL_PADDING);
            }
        }
        widths
    }

    fn row_height(fonts: &dyn FontMetrics, font: &Font) -> i32 {
        fonts.max_height(font) + 2 * CELL_PADDING
    }
}

impl Inset for TableInset {
    fn metrics(&self, mi: &MetricsInfo<'_>) -> Dimension {
        let width = self
            .column_widths(mi.fonts, &mi.base_font)
            .iter()
            .sum::<i32>();
        let rows = i32::try_from(self.rows()).unwrap_or(i32::MAX);
        let height = Self::row_height(mi.fonts, &mi.base_font).saturating_mul(rows);
        // The first row sits on the baseline of the surrounding text.
        let ascent = mi.fonts.max_ascent(&mi.base_font) + CELL_PADDING;
        Dimension::new(width, ascent.min(height), (height - ascent).max(0))
    }

    fn draw(&self, pi: &mut PaintInfo<'_>, x: i32, y: i32) {
        let font = pi.base_font;
        let widths = self.column_widths(pi.fonts, &font);
        let row_height = Self::row_height(pi.fonts, &font);
        let mut top = y - pi.fonts.max_ascent(&font) - CELL_PADDING;
        for row in &self.cells {
            let mut left = x;
            for (cell, width) in row.iter().zip(&widths) {
                pi.painter.rectangle(left, top, *width, row_height);
                let baseline = top + CELL_PADDING + pi.fonts.max_ascent(&font);
                pi.painter.text(left + CELL_PADDING, baseline, cell, &font);
                left += width;
            }
            top += row_height;
        }
    }

    fn row_flags(&self) -> RowFlags {
        RowFlags::DISPLAY
    }

    fn kind(&self) -> InsetKind {
        InsetKind::Table
    }
}
