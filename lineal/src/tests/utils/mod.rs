// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod asserts;
mod env;
mod painter;

pub(crate) use asserts::{assert_partition, row_ranges};
pub(crate) use env::{Monospace, TestEnv};
pub(crate) use painter::{PaintOp, RecordingPainter};
