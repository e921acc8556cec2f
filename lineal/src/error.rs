// Copyright 2025 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors raised while building a paragraph from ranged attributes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParagraphError {
    /// A position lies outside the paragraph.
    #[error("position {pos} is out of range for a paragraph of {len} positions")]
    PositionOutOfRange {
        /// The offending position.
        pos: usize,
        /// Length of the paragraph.
        len: usize,
    },

    /// A range is reversed or extends past the paragraph end.
    #[error("invalid range {start}..{end} for a paragraph of {len} positions")]
    InvalidRange {
        /// Start of the range.
        start: usize,
        /// End of the range, exclusive.
        end: usize,
        /// Length of the paragraph.
        len: usize,
    },

    /// The body boundary lies past the paragraph end.
    #[error("body boundary {body} is past the end of a paragraph of {len} positions")]
    BodyOutOfRange {
        /// The requested body boundary.
        body: usize,
        /// Length of the paragraph.
        len: usize,
    },
}

/// Errors raised by [`LayoutConfig::validate`](crate::LayoutConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A margin or indentation is negative.
    #[error("`{field}` must not be negative, got {value}")]
    Negative {
        /// Name of the field.
        field: &'static str,
        /// Its value.
        value: i32,
    },
}
