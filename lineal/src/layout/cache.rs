// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use log::debug;
use smallvec::SmallVec;

use super::row_metrics::{compute_row_metrics, left_margin, right_margin};
use super::{break_row, LayoutCx};
use crate::outputs::{ParagraphMetrics, Row};

/// Lifecycle state of a cached paragraph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SlotState {
    /// Never computed, or evicted.
    Uncomputed,
    /// Up to date.
    Valid,
    /// Computed, but the paragraph or the layout parameters changed since.
    Stale,
}

#[derive(Debug)]
struct Slot {
    stale: bool,
    metrics: ParagraphMetrics,
}

/// Computed rows of paragraphs, keyed by paragraph index.
#[derive(Debug, Default)]
pub struct ParagraphMetricsCache {
    slots: HashMap<usize, Slot>,
}

impl ParagraphMetricsCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifecycle state of `pit`.
    pub fn state(&self, pit: usize) -> SlotState {
        match self.slots.get(&pit) {
            None => SlotState::Uncomputed,
            Some(slot) if slot.stale => SlotState::Stale,
            Some(_) => SlotState::Valid,
        }
    }

    /// Number of cached paragraphs, stale or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no paragraph is cached.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Cached metrics of `pit`, stale or not.
    pub fn get(&self, pit: usize) -> Option<&ParagraphMetrics> {
        self.slots.get(&pit).map(|slot| &slot.metrics)
    }

    pub(crate) fn get_mut(&mut self, pit: usize) -> Option<&mut ParagraphMetrics> {
        self.slots.get_mut(&pit).map(|slot| &mut slot.metrics)
    }

    /// Cached metrics of `pit`.
    ///
    /// # Panics
    ///
    /// Panics if `pit` has not been computed. Stale metrics are returned
    /// as they are.
    pub fn par_metrics(&self, pit: usize) -> &ParagraphMetrics {
        match self.get(pit) {
            Some(metrics) => metrics,
            None => panic!("metrics of paragraph {pit} requested before they were computed"),
        }
    }

    /// Cached metrics of `pit`, computing them first if `redo` is set or
    /// nothing is cached.
    pub(crate) fn par_metrics_mut(
        &mut self,
        cx: &LayoutCx<'_>,
        pit: usize,
        max_width: i32,
        redo: bool,
    ) -> &mut ParagraphMetrics {
        if redo || !self.slots.contains_key(&pit) {
            let _ = self.redo_paragraph(cx, pit, max_width);
        }
        &mut self.slots.get_mut(&pit).expect("paragraph was just computed").metrics
    }

    /// Recomputes the rows of `pit`.
    ///
    /// Returns true if the number of rows changed, in which case everything
    /// below the paragraph moved. A paragraph that was not cached counts as
    /// having no rows.
    pub(crate) fn redo_paragraph(&mut self, cx: &LayoutCx<'_>, pit: usize, max_width: i32) -> bool {
        let previous = self.slots.remove(&pit).map(|slot| slot.metrics);
        let metrics = compute_paragraph(cx, pit, max_width, previous.as_ref());
        let old_rows = previous.as_ref().map_or(0, |pm| pm.rows.len());
        let rows_changed = old_rows != metrics.rows.len();
        debug!(
            "paragraph {pit}: {} rows ({} before), {}x{}",
            metrics.rows.len(),
            old_rows,
            metrics.dim.width,
            metrics.dim.height()
        );
        let _ = self.slots.insert(
            pit,
            Slot {
                stale: false,
                metrics,
            },
        );
        rows_changed
    }

    /// Drops every cached paragraph.
    pub fn clear(&mut self) {
        debug!("evicting {} cached paragraphs", self.slots.len());
        self.slots.clear();
    }

    /// Marks `pit` as out of date. Does nothing if it is not cached.
    pub fn mark_stale(&mut self, pit: usize) {
        if let Some(slot) = self.slots.get_mut(&pit) {
            slot.stale = true;
        }
    }

    /// Marks every cached paragraph as out of date.
    pub fn mark_all_stale(&mut self) {
        for slot in self.slots.values_mut() {
            slot.stale = true;
        }
    }

    /// Drops cached paragraphs at or after `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.slots.retain(|pit, _| *pit < len);
    }

    /// Marks stale every cached paragraph whose source changed. Returns the
    /// number of newly stale paragraphs.
    pub(crate) fn invalidate_changed(&mut self, cx: &LayoutCx<'_>, max_width: i32) -> usize {
        let mut count = 0;
        for (pit, slot) in &mut self.slots {
            if slot.stale {
                continue;
            }
            let metrics = &slot.metrics;
            let changed = metrics.revision != cx.paragraph(*pit).revision()
                || metrics.defaults_revision != cx.text.defaults_revision()
                || metrics.max_width != max_width;
            if changed {
                slot.stale = true;
                count += 1;
            }
        }
        count
    }
}

/// Breaks paragraph `pit` into rows and measures them. Rows are compared
/// with `previous` to flag the ones that need repainting.
fn compute_paragraph(
    cx: &LayoutCx<'_>,
    pit: usize,
    max_width: i32,
    previous: Option<&ParagraphMetrics>,
) -> ParagraphMetrics {
    let par = cx.paragraph(pit);
    let right = right_margin(cx.config, par.style());
    let marker = cx.config.end_marker_width;
    let mut rows: SmallVec<[Row; 2]> = SmallVec::new();
    let mut pos = 0;
    loop {
        let left = left_margin(cx, pit, pos);
        let available = max_width.saturating_sub(left).saturating_sub(right);
        let mut row = break_row(cx, pit, available, pos);
        // The last row also has to leave room for the end marker.
        if marker > 0 && row.end >= par.len() {
            let without_marker = available.saturating_sub(marker);
            if row.width > without_marker {
                row = break_row(cx, pit, without_marker, pos);
            }
        }
        pos = row.end;
        rows.push(row);
        if pos >= par.len() {
            break;
        }
    }

    let last = rows.len() - 1;
    for (index, row) in rows.iter_mut().enumerate() {
        compute_row_metrics(cx, pit, row, max_width, index == last);
        row.changed = previous
            .and_then(|pm| pm.rows.get(index))
            .is_none_or(|old| !old.same_layout(row));
    }

    let mut dim = rows[0].dim;
    for row in &rows[1..] {
        dim.stack_below(&row.dim);
    }

    ParagraphMetrics {
        pit,
        rows,
        dim,
        position: previous.map_or(0, |pm| pm.position),
        revision: par.revision(),
        defaults_revision: cx.text.defaults_revision(),
        max_width,
    }
}
