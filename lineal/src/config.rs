// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ConfigError;

/// Document-wide layout parameters, in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Left margin of the text area.
    pub left_margin: i32,
    /// Right margin of the text area.
    pub right_margin: i32,
    /// Indentation of first rows in paragraphs that ask for it.
    pub parindent: i32,
    /// Indentation added per nesting level.
    pub depth_indent: i32,
    /// Body indentation of labelled paragraphs without a label width sample.
    pub label_indent: i32,
    /// Room kept free after the last row of a paragraph for the end marker.
    pub end_marker_width: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_margin: 10,
            right_margin: 10,
            parindent: 20,
            depth_indent: 15,
            label_indent: 40,
            end_marker_width: 0,
        }
    }
}

impl LayoutConfig {
    /// A configuration without any margin or indentation.
    pub fn zero() -> Self {
        Self {
            left_margin: 0,
            right_margin: 0,
            parindent: 0,
            depth_indent: 0,
            label_indent: 0,
            end_marker_width: 0,
        }
    }

    /// Checks that no value is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("left_margin", self.left_margin),
            ("right_margin", self.right_margin),
            ("parindent", self.parindent),
            ("depth_indent", self.depth_indent),
            ("label_indent", self.label_indent),
            ("end_marker_width", self.end_marker_width),
        ];
        match fields.into_iter().find(|(_, value)| *value < 0) {
            Some((field, value)) => Err(ConfigError::Negative { field, value }),
            None => Ok(()),
        }
    }
}
