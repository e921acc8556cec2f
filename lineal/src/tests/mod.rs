// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_draw;
mod test_inputs;
mod test_row_metrics;
mod utils;
