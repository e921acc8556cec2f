// Copyright 2024 the Lineal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Flags governing how a row may break around an element.
    ///
    /// When flags conflict at one boundary, `ALWAYS_BREAK_AFTER`, a display
    /// element and `BREAK_BEFORE` on the following element win over
    /// `NO_BREAK_AFTER` and `NO_BREAK_BEFORE`. Those in turn win over a lone
    /// `BREAK_AFTER` and the optional breaks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RowFlags: u16 {
        /// Break the row before this element.
        const BREAK_BEFORE = 1 << 0;
        /// The row may break before this element.
        const CAN_BREAK_BEFORE = 1 << 1;
        /// Force a new row after this element.
        const ALWAYS_BREAK_AFTER = 1 << 2;
        /// Break the row after this element.
        const BREAK_AFTER = 1 << 3;
        /// The row may break after this element.
        const CAN_BREAK_AFTER = 1 << 4;
        /// The row may not break before this element.
        const NO_BREAK_BEFORE = 1 << 5;
        /// The row may not break after this element.
        const NO_BREAK_AFTER = 1 << 6;
        /// The element may itself break across rows.
        const CAN_BREAK_INSIDE = 1 << 7;
        /// Align this element to the left margin.
        const ALIGN_LEFT = 1 << 8;
        /// Align this element to the right margin.
        const ALIGN_RIGHT = 1 << 9;
    }
}

impl RowFlags {
    /// An element that flows with the text.
    pub const INLINE: Self = Self::empty();
    /// An element that occupies a row on its own.
    pub const DISPLAY: Self = Self::BREAK_BEFORE.union(Self::BREAK_AFTER);

    /// Returns true if this element sits on a row of its own.
    pub fn is_display(self) -> bool {
        self.contains(Self::DISPLAY)
    }
}

/// What may happen at the boundary between two adjacent elements.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum BoundaryBreak {
    /// The row must end here.
    Forced,
    /// The row may end here.
    Allowed,
    /// The row continues.
    None,
}

/// Classifies the boundary between an element with flags `before` and the
/// following element with flags `after`.
pub(crate) fn boundary_break(before: RowFlags, after: RowFlags) -> BoundaryBreak {
    if before.contains(RowFlags::ALWAYS_BREAK_AFTER)
        || before.is_display()
        || after.contains(RowFlags::BREAK_BEFORE)
    {
        BoundaryBreak::Forced
    } else if before.contains(RowFlags::NO_BREAK_AFTER) || after.contains(RowFlags::NO_BREAK_BEFORE)
    {
        BoundaryBreak::None
    } else if before.contains(RowFlags::BREAK_AFTER) {
        BoundaryBreak::Forced
    } else if before.contains(RowFlags::CAN_BREAK_AFTER)
        || after.contains(RowFlags::CAN_BREAK_BEFORE)
    {
        BoundaryBreak::Allowed
    } else {
        BoundaryBreak::None
    }
}
