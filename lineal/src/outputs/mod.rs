// Copyright 2021 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry produced by the layout engine.

mod dimension;
mod par_metrics;
mod row;

pub use dimension::Dimension;
pub use par_metrics::ParagraphMetrics;
pub use row::{Row, RowEnd, RowGeometry};
