// Copyright 2021 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row breaking and metrics for structured paragraphs.
//!
//! A [`Text`] is a sequence of [`Paragraph`]s: positions holding either a
//! character or an embedded [`Inset`], each with an optional font change on
//! top of the paragraph's label and body fonts. [`TextMetrics`] breaks every
//! paragraph into [`Row`]s for a width budget, measures them with the
//! caller's [`FontMetrics`], and caches the result per paragraph so that an
//! edit only recomputes what it touched.
//!
//! ```
//! use lineal::{Font, FontMetrics, LayoutConfig, Paragraph, Text, TextMetrics};
//!
//! struct Monospace;
//!
//! impl FontMetrics for Monospace {
//!     fn width(&self, _: &Font, _: char) -> i32 { 10 }
//!     fn max_ascent(&self, _: &Font) -> i32 { 8 }
//!     fn max_descent(&self, _: &Font) -> i32 { 2 }
//! }
//!
//! let mut text = Text::new(Font::default());
//! text.push(Paragraph::from_text("The quick brown fox"));
//!
//! let mut metrics = TextMetrics::new(LayoutConfig::zero());
//! metrics.metrics(&text, &Monospace, 100);
//!
//! let rows = metrics.par_metrics(0).rows();
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].range(), 0..10);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod config;
mod error;

pub mod inputs;
pub mod layout;
pub mod outputs;

#[cfg(test)]
mod tests;

pub use config::LayoutConfig;
pub use error::{ConfigError, ParagraphError};

pub use inputs::{
    resolve_font, Alignment, Font, FontInfo, FontMetrics, Inset, Painter, Paragraph,
    ParagraphBuilder, ParagraphStyle, RowFlags, Text,
};
pub use layout::{FontRun, ParagraphMetricsCache, SlotState, TextMetrics};
pub use outputs::{Dimension, ParagraphMetrics, Row, RowEnd, RowGeometry};
