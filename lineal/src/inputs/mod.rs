// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document model consumed by the layout engine.

mod builder;
mod font;
mod inset;
mod metrics;
mod paragraph;
mod row_flags;
mod text;

pub use builder::*;
pub use font::*;
pub use inset::*;
pub use metrics::*;
pub use paragraph::{Alignment, FontSpan, Paragraph, ParagraphStyle, META_INSET};
pub use row_flags::RowFlags;
pub use text::*;

pub(crate) use row_flags::{boundary_break, BoundaryBreak};
