// Copyright 2021 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod greedy;

pub(crate) use greedy::break_row;
