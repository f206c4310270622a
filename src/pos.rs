//! Left and top offsets sharing one unit.

use std::fmt;
use std::path::Path;

use crate::component::Component;
use crate::convert::{Composite, Convert, MorphPart, morph_composite, unit_or};
use crate::defaults::IMAGE_UNIT;
use crate::errors::Result;
use crate::length::Length;
use crate::probe::{ImageProbe, probe_pixels};
use crate::unit::Unit;
use crate::value::ScalarValue;

/// A position, measured from the top-left origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pos {
    left: Length,
    top: Length,
    unit: Unit,
}

impl Pos {
    /// The origin in `unit`
    pub fn origin(unit: Unit) -> Self {
        Self { left: Length::zero(unit), top: Length::zero(unit), unit }
    }

    /// Build from two lengths, converted to `unit` (default: the left's unit)
    pub fn from_lengths(left: Length, top: Length, unit: impl Into<Option<Unit>>) -> Self {
        let unit = unit_or(unit, left.unit());
        Self {
            left: left.clone_to_unit(unit),
            top: top.clone_to_unit(unit),
            unit,
        }
    }

    /// Build from two scalar values (default unit: the left's unit)
    pub fn from_values(left: ScalarValue, top: ScalarValue, unit: impl Into<Option<Unit>>) -> Self {
        let unit = unit_or(unit, left.unit());
        Self::from_lengths(Length::from_value(left, unit), Length::from_value(top, unit), unit)
    }

    /// Build from raw magnitudes in `unit`
    pub fn from_numbers(left: f64, top: f64, unit: Unit) -> Result<Self> {
        Ok(Self::from_lengths(
            Length::from_number(left, unit)?,
            Length::from_number(top, unit)?,
            unit,
        ))
    }

    /// Copy of `other`, converted to `unit` when one is given
    pub fn from_pos(other: &Pos, unit: impl Into<Option<Unit>>) -> Self {
        other.clone_to_unit(unit_or(unit, other.unit))
    }

    /// The pixel width and height of an image file as a position, read as
    /// points and converted to `unit` (default: points)
    #[cfg(feature = "image")]
    pub fn from_image_file(path: impl AsRef<Path>, unit: impl Into<Option<Unit>>) -> Result<Self> {
        Self::from_image_probe(&crate::probe::ImageCrateProbe, path, unit)
    }

    /// Like [`from_image_file`](Self::from_image_file) with a caller-supplied probe
    pub fn from_image_probe<P: ImageProbe + ?Sized>(
        probe: &P,
        path: impl AsRef<Path>,
        unit: impl Into<Option<Unit>>,
    ) -> Result<Self> {
        let (width, height) = probe_pixels(probe, path.as_ref(), "Pos", "from_image_file")?;
        let mut pos = Self::from_numbers(width, height, IMAGE_UNIT)?;
        pos.morph_to_unit(unit_or(unit, IMAGE_UNIT));
        Ok(pos)
    }

    /// `(left, top)` read in `unit` (default: the position's unit)
    pub fn components(&self, unit: impl Into<Option<Unit>>) -> (f64, f64) {
        let unit = unit_or(unit, self.unit);
        (self.left.to_number(unit), self.top.to_number(unit))
    }

    /// Left offset, converted to `unit` when one is given
    pub fn left(&self, unit: impl Into<Option<Unit>>) -> Length {
        Length::from_length(&self.left, unit)
    }

    /// Top offset, converted to `unit` when one is given
    pub fn top(&self, unit: impl Into<Option<Unit>>) -> Length {
        Length::from_length(&self.top, unit)
    }

    /// Component by name; a position has no `width` or `height`
    pub fn get(&self, component: Component, unit: impl Into<Option<Unit>>) -> Result<Length> {
        match component {
            Component::Left => Ok(self.left(unit)),
            Component::Top => Ok(self.top(unit)),
            other => Err(other.undefined_for("Pos")),
        }
    }

    /// Both offsets multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Result<Pos> {
        Ok(Self::from_lengths(self.left.scaled(factor)?, self.top.scaled(factor)?, self.unit))
    }

    /// Add `other` field-wise, in place.
    ///
    /// The receiver is morphed to `unit` (default: its own unit) first and
    /// `other` is read in that unit. Unlike [`Length::sum`] this mutates and
    /// returns the receiver. On an `Unsuited` overflow the receiver is left
    /// as it was.
    pub fn sum(&mut self, other: &Pos, unit: impl Into<Option<Unit>>) -> Result<&mut Self> {
        self.combine(other, unit, |a, b, unit| a.sum(b, unit))
    }

    /// Subtract `other` field-wise, in place. Same conversion rules as
    /// [`sum`](Self::sum).
    pub fn difference(&mut self, other: &Pos, unit: impl Into<Option<Unit>>) -> Result<&mut Self> {
        self.combine(other, unit, |a, b, unit| a.difference(b, unit))
    }

    fn combine(
        &mut self,
        other: &Pos,
        unit: impl Into<Option<Unit>>,
        op: impl Fn(&Length, &Length, Unit) -> Result<Length>,
    ) -> Result<&mut Self> {
        let unit = unit_or(unit, self.unit);
        let other = other.clone_to_unit(unit);
        let mut moved = self.clone_to_unit(unit);
        moved.left = op(&moved.left, &other.left, unit)?;
        moved.top = op(&moved.top, &other.top, unit)?;
        *self = moved;
        Ok(self)
    }
}

impl Composite for Pos {
    fn unit_tag(&self) -> Unit {
        self.unit
    }

    fn set_unit_tag(&mut self, unit: Unit) {
        self.unit = unit;
    }

    fn parts_mut(&mut self) -> [&mut dyn MorphPart; 2] {
        [&mut self.left, &mut self.top]
    }
}

impl Convert for Pos {
    fn unit(&self) -> Unit {
        self.unit
    }

    fn morph_to_unit(&mut self, unit: Unit) -> &mut Self {
        morph_composite(self, unit);
        self
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, top) = self.components(None);
        write!(f, "Pos({})[left: {left}, top: {top}]", self.unit)
    }
}
