// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers to assert truths about computed rows.

use core::ops::Range;

use crate::outputs::ParagraphMetrics;

/// Ranges of the rows of a paragraph.
pub(crate) fn row_ranges(pm: &ParagraphMetrics) -> Vec<Range<usize>> {
    pm.rows().iter().map(|row| row.range()).collect()
}

/// Asserts that the rows cover `0..len` in order, without gaps or overlaps,
/// and that only an empty paragraph has an empty row.
pub(crate) fn assert_partition(pm: &ParagraphMetrics, len: usize) {
    let rows = pm.rows();
    assert!(!rows.is_empty(), "a paragraph always has a row");
    assert_eq!(rows[0].start(), 0, "first row must start at 0");
    assert_eq!(rows[rows.len() - 1].end(), len, "last row must end at {len}");
    for pair in rows.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start(), "rows must be contiguous");
    }
    if len > 0 {
        for row in rows {
            assert!(!row.is_empty(), "empty row {:?} in a non-empty paragraph", row.range());
        }
    } else {
        assert_eq!(rows.len(), 1, "an empty paragraph has one row");
    }
}
