// Copyright 2021 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font values and font resolution.

use super::Paragraph;

/// Generic font family.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontFamily {
    /// Proportional serif face.
    #[default]
    Roman,
    /// Proportional sans-serif face.
    Sans,
    /// Fixed-pitch face.
    Typewriter,
    /// Math symbol face.
    Symbol,
}

/// Font weight class.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontSeries {
    /// Regular weight.
    #[default]
    Medium,
    /// Bold weight.
    Bold,
}

/// Font shape.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontShape {
    /// Upright glyphs.
    #[default]
    Up,
    /// Italic glyphs.
    Italic,
    /// Slanted (oblique) glyphs.
    Slanted,
    /// Small capitals.
    SmallCaps,
}

/// Relative font size, from `Tiny` to `Huger`.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontSize {
    /// Smallest size.
    Tiny,
    /// Footnote size.
    Small,
    /// Body text size.
    #[default]
    Normal,
    /// Larger than body text.
    Large,
    /// Section heading size.
    Huge,
    /// Title size.
    Huger,
}

impl FontSize {
    /// Scale factor of this size relative to `Normal`, in percent.
    pub fn percent(self) -> i32 {
        match self {
            Self::Tiny => 50,
            Self::Small => 80,
            Self::Normal => 100,
            Self::Large => 120,
            Self::Huge => 170,
            Self::Huger => 200,
        }
    }
}

/// Text color.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Foreground text color.
    #[default]
    Black,
    /// Color used for labels.
    Blue,
    /// Color used for math.
    Red,
    /// Color used for insets' frames and buttons.
    Gray,
}

/// A fully resolved font.
///
/// Two fonts are equal when all of their attributes are.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Typeface family.
    pub family: FontFamily,
    /// Weight.
    pub series: FontSeries,
    /// Slant and capitalization.
    pub shape: FontShape,
    /// Relative size.
    pub size: FontSize,
    /// Color of the glyphs.
    pub color: Color,
}

impl Font {
    /// Returns a copy of this font with another size.
    pub fn with_size(mut self, size: FontSize) -> Self {
        self.size = size;
        self
    }
}

/// A partial font. Unset attributes are inherited when realized.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontInfo {
    /// Family, or `None` to inherit.
    pub family: Option<FontFamily>,
    /// Series, or `None` to inherit.
    pub series: Option<FontSeries>,
    /// Shape, or `None` to inherit.
    pub shape: Option<FontShape>,
    /// Size, or `None` to inherit.
    pub size: Option<FontSize>,
    /// Color, or `None` to inherit.
    pub color: Option<Color>,
}

impl FontInfo {
    /// A font change that inherits everything.
    pub const INHERIT: Self = Self {
        family: None,
        series: None,
        shape: None,
        size: None,
        color: None,
    };

    /// Returns true if no attribute is set.
    pub fn is_inherit(&self) -> bool {
        *self == Self::INHERIT
    }

    /// Sets the family.
    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Sets the series.
    pub fn series(mut self, series: FontSeries) -> Self {
        self.series = Some(series);
        self
    }

    /// Sets the shape.
    pub fn shape(mut self, shape: FontShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Sets the size.
    pub fn size(mut self, size: FontSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Fills unset attributes from `base`.
    pub fn realize(&self, base: &Font) -> Font {
        Font {
            family: self.family.unwrap_or(base.family),
            series: self.series.unwrap_or(base.series),
            shape: self.shape.unwrap_or(base.shape),
            size: self.size.unwrap_or(base.size),
            color: self.color.unwrap_or(base.color),
        }
    }
}

/// Resolves the display font at `pos` in `paragraph`.
///
/// Resolution starts from the document `defaults`, applies the paragraph
/// style font (the label font before the body boundary, the body font from
/// it onwards) and finally the character font change covering `pos`.
pub fn resolve_font(defaults: &Font, paragraph: &Paragraph, pos: usize) -> Font {
    let style = paragraph.style();
    let layout_font = if pos < paragraph.begin_of_body() {
        &style.label_font
    } else {
        &style.body_font
    };
    let base = layout_font.realize(defaults);
    if paragraph.is_empty() {
        return base;
    }
    paragraph.font_at(pos).realize(&base)
}
