//! Alignment flags for [`Area::fit_size`](crate::Area::fit_size).
//!
//! Absence of an axis's flag centers that axis. Only one flag per axis is
//! meaningful: setting both `LEFT` and `RIGHT` (or `TOP` and `BOTTOM`) is
//! the same as setting neither.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::defaults::CENTER_RATIO;

const TOP: u8 = 1;
const BOTTOM: u8 = 2;
const LEFT: u8 = 4;
const RIGHT: u8 = 8;
const ALL: u8 = TOP | BOTTOM | LEFT | RIGHT;

/// Bitmask over {TOP, BOTTOM, LEFT, RIGHT}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Align(u8);

/// Where a fitted child sits along one axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Left or top edge
    Start,
    Center,
    /// Right or bottom edge
    End,
}

impl Anchor {
    /// Share of the free space placed before the child
    pub fn share(self) -> f64 {
        match self {
            Anchor::Start => 0.0,
            Anchor::Center => CENTER_RATIO,
            Anchor::End => 1.0,
        }
    }
}

impl Align {
    /// No flags: both axes centered
    pub const CENTER: Align = Align(0);
    /// Stick to the top edge
    pub const TOP: Align = Align(TOP);
    /// Stick to the bottom edge
    pub const BOTTOM: Align = Align(BOTTOM);
    /// Stick to the left edge
    pub const LEFT: Align = Align(LEFT);
    /// Stick to the right edge
    pub const RIGHT: Align = Align(RIGHT);

    /// Raw flag bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `None` if a bit outside the four flags is set
    pub const fn from_bits(bits: u8) -> Option<Align> {
        if bits & !ALL == 0 {
            Some(Align(bits))
        } else {
            None
        }
    }

    /// Drops bits outside the four flags
    pub const fn from_bits_truncate(bits: u8) -> Align {
        Align(bits & ALL)
    }

    pub const fn contains(self, other: Align) -> bool {
        self.0 & other.0 == other.0
    }

    /// Horizontal anchor: the mask with the vertical flags cleared must be
    /// exactly `LEFT` or exactly `RIGHT`, anything else centers.
    pub fn horizontal(self) -> Anchor {
        match self.0 & !(TOP | BOTTOM) {
            LEFT => Anchor::Start,
            RIGHT => Anchor::End,
            _ => Anchor::Center,
        }
    }

    /// Vertical anchor, symmetric to [`horizontal`](Self::horizontal)
    pub fn vertical(self) -> Anchor {
        match self.0 & !(LEFT | RIGHT) {
            TOP => Anchor::Start,
            BOTTOM => Anchor::End,
            _ => Anchor::Center,
        }
    }
}

impl BitOr for Align {
    type Output = Align;
    fn bitor(self, rhs: Align) -> Align {
        Align(self.0 | rhs.0)
    }
}

impl BitOrAssign for Align {
    fn bitor_assign(&mut self, rhs: Align) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Align {
    type Output = Align;
    fn bitand(self, rhs: Align) -> Align {
        Align(self.0 & rhs.0)
    }
}
