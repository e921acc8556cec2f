// Copyright 2021 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::{debug, warn};

use super::row_metrics::{compute_row_metrics, left_margin, right_margin};
use super::{break_row, LayoutCx, ParagraphMetricsCache, SlotState};
use crate::inputs::{FontMetrics, Text};
use crate::outputs::{Dimension, ParagraphMetrics, Row};
use crate::LayoutConfig;

/// Layout of one text: the rows of its paragraphs and their metrics.
///
/// `TextMetrics` does not own the [`Text`]; every call that may compute
/// geometry takes the text and the font metrics to measure it with.
/// Results are cached per paragraph and recomputed lazily when the
/// paragraph, the document defaults or the width budget change.
#[derive(Debug, Default)]
pub struct TextMetrics {
    pub(crate) cache: ParagraphMetricsCache,
    dim: Dimension,
    max_width: Option<i32>,
    pub(crate) config: LayoutConfig,
}

impl TextMetrics {
    /// Creates an empty layout.
    ///
    /// An invalid configuration is replaced by the default one.
    pub fn new(config: LayoutConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!("{err}; using the default layout configuration");
                LayoutConfig::default()
            }
        };
        Self {
            config,
            ..Default::default()
        }
    }

    /// Configuration the rows are laid out with.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replaces the configuration. Every cached paragraph becomes stale.
    pub fn set_config(&mut self, config: LayoutConfig) {
        if config != self.config {
            self.config = config;
            self.cache.mark_all_stale();
        }
    }

    /// Width budget of the last [`metrics`](Self::metrics) or
    /// [`set_max_width`](Self::set_max_width) call, if any.
    pub fn max_width(&self) -> Option<i32> {
        self.max_width
    }

    /// Sets the width budget used by [`par_metrics_mut`](Self::par_metrics_mut)
    /// and [`redo_paragraph`](Self::redo_paragraph). Every cached paragraph
    /// becomes stale if the budget changed.
    pub fn set_max_width(&mut self, max_width: i32) {
        if self.max_width != Some(max_width) {
            debug!("width budget changed from {:?} to {max_width}", self.max_width);
            self.max_width = Some(max_width);
            self.cache.mark_all_stale();
        }
    }

    /// The width budget to compute rows for. Rows are unbounded until a
    /// budget has been set.
    fn width_budget(&self) -> i32 {
        self.max_width.unwrap_or(i32::MAX)
    }

    /// The width budget the cached rows of `pit` were computed for.
    pub(crate) fn budget_of(&self, pit: usize) -> i32 {
        self.cache
            .get(pit)
            .map_or_else(|| self.width_budget(), ParagraphMetrics::max_width)
    }

    /// Size of the whole text: its paragraphs stacked vertically.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Height of the whole text.
    pub fn height(&self) -> i32 {
        self.dim.height()
    }

    /// The per-paragraph cache.
    pub fn cache(&self) -> &ParagraphMetricsCache {
        &self.cache
    }

    /// Lifecycle state of the metrics of `pit`.
    pub fn state(&self, pit: usize) -> SlotState {
        self.cache.state(pit)
    }

    /// Returns true if `pit` has cached metrics, stale or not.
    pub fn contains(&self, pit: usize) -> bool {
        self.cache.get(pit).is_some()
    }

    /// Computed metrics of `pit`.
    ///
    /// # Panics
    ///
    /// Panics if `pit` has never been computed; see
    /// [`ParagraphMetricsCache::par_metrics`].
    pub fn par_metrics(&self, pit: usize) -> &ParagraphMetrics {
        self.cache.par_metrics(pit)
    }

    /// Metrics of `pit`, computed first if `redo` is set or if they are
    /// missing.
    ///
    /// Before any width budget has been set, rows are computed without a
    /// width limit.
    pub fn par_metrics_mut(
        &mut self,
        text: &Text,
        fonts: &dyn FontMetrics,
        pit: usize,
        redo: bool,
    ) -> &mut ParagraphMetrics {
        let cx = LayoutCx::new(text, fonts, &self.config);
        let max_width = self.width_budget();
        self.cache.par_metrics_mut(&cx, pit, max_width, redo)
    }

    /// Recomputes the rows of `pit` for the current width budget.
    ///
    /// Returns true if the number of rows changed, so that the paragraphs
    /// below must be redrawn as well.
    pub fn redo_paragraph(&mut self, text: &Text, fonts: &dyn FontMetrics, pit: usize) -> bool {
        let cx = LayoutCx::new(text, fonts, &self.config);
        self.cache.redo_paragraph(&cx, pit, self.width_budget())
    }

    /// Drops every cached paragraph, e.g. after paragraphs were inserted or
    /// removed.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.dim = Dimension::default();
    }

    /// Marks `pit` as out of date, e.g. after the size of one of its insets
    /// changed.
    pub fn mark_stale(&mut self, pit: usize) {
        self.cache.mark_stale(pit);
    }

    /// Marks stale every cached paragraph whose content or defaults changed
    /// since it was computed, and drops paragraphs past the end of `text`.
    /// Returns the number of newly stale paragraphs.
    pub fn invalidate_changed(&mut self, text: &Text, fonts: &dyn FontMetrics) -> usize {
        self.cache.truncate(text.len());
        let cx = LayoutCx::new(text, fonts, &self.config);
        self.cache.invalidate_changed(&cx, self.width_budget())
    }

    /// Brings every paragraph up to date for the width budget `max_width`.
    ///
    /// Returns true if the size of the text changed.
    pub fn metrics(&mut self, text: &Text, fonts: &dyn FontMetrics, max_width: i32) -> bool {
        if self.max_width != Some(max_width) {
            debug!("width budget changed from {:?} to {max_width}", self.max_width);
            self.max_width = Some(max_width);
        }
        let stale = self.invalidate_changed(text, fonts);
        let cx = LayoutCx::new(text, fonts, &self.config);
        let mut redone = 0;
        for pit in 0..text.len() {
            if self.cache.state(pit) != SlotState::Valid {
                let _ = self.cache.redo_paragraph(&cx, pit, max_width);
                redone += 1;
            }
        }
        debug!("{stale} paragraphs went stale, {redone} recomputed");
        let old = self.dim;
        self.update_positions(text);
        old != self.dim
    }

    /// Recomputes one paragraph after an edit and moves the paragraphs
    /// below it if its height changed.
    ///
    /// Returns true if more than this paragraph must be redrawn.
    pub fn single_par_update(&mut self, text: &Text, fonts: &dyn FontMetrics, pit: usize) -> bool {
        let old_height = self.cache.get(pit).map(ParagraphMetrics::height);
        let rows_changed = self.redo_paragraph(text, fonts, pit);
        let new_height = self.par_metrics(pit).height();
        let moved = old_height != Some(new_height);
        self.update_positions(text);
        rows_changed || moved
    }

    /// Stacks the cached paragraphs from the top and updates the size of
    /// the text.
    fn update_positions(&mut self, text: &Text) {
        let mut y = 0;
        let mut dim: Option<Dimension> = None;
        for pit in 0..text.len() {
            let Some(pm) = self.cache.get_mut(pit) else {
                continue;
            };
            pm.position = y;
            y += pm.height();
            dim = Some(match dim {
                Some(mut above) => {
                    above.stack_below(&pm.dim);
                    above
                }
                None => pm.dim,
            });
        }
        self.dim = dim.unwrap_or_default();
    }

    /// Computes the row of `pit` starting at `start` within
    /// `available_width`, without its geometry.
    pub fn break_row(
        &self,
        text: &Text,
        fonts: &dyn FontMetrics,
        pit: usize,
        available_width: i32,
        start: usize,
    ) -> Row {
        let cx = LayoutCx::new(text, fonts, &self.config);
        break_row(&cx, pit, available_width, start)
    }

    /// Fills in the margins, label spacing, justification and alignment of
    /// a row of `pit` for the current width budget.
    pub fn compute_row_metrics(
        &self,
        text: &Text,
        fonts: &dyn FontMetrics,
        pit: usize,
        row: &mut Row,
        is_last: bool,
    ) {
        let cx = LayoutCx::new(text, fonts, &self.config);
        compute_row_metrics(&cx, pit, row, self.width_budget(), is_last);
    }

    /// Left margin of the row of `pit` starting at `pos`.
    pub fn left_margin(&self, text: &Text, fonts: &dyn FontMetrics, pit: usize, pos: usize) -> i32 {
        let cx = LayoutCx::new(text, fonts, &self.config);
        left_margin(&cx, pit, pos)
    }

    /// Right margin of paragraph `pit`.
    pub fn right_margin(&self, text: &Text, pit: usize) -> i32 {
        right_margin(&self.config, text.paragraph(pit).style())
    }

    /// Right margin of the paragraph `pm` was computed for.
    pub fn right_margin_of(&self, text: &Text, pm: &ParagraphMetrics) -> i32 {
        self.right_margin(text, pm.pit())
    }
}
