//! Width and height pair sharing one unit.

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

/// A two-dimensional extent
///
/// Both lengths are always expressed in the size's own unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    width: Length,
    height: Length,
    unit: Unit,
}

impl Size {
    /// Build from two lengths, converted to `unit` (default: the width's unit)
    pub fn from_lengths(width: Length, height: Length, unit: impl Into<Option<Unit>>) -> Self {
        let unit = unit_or(unit, width.unit());
        Self {
            width: width.clone_to_unit(unit),
            height: height.clone_to_unit(unit),
            unit,
        }
    }

    /// Build from two scalar values (default unit: the width's unit)
    pub fn from_values(
        width: ScalarValue,
        height: ScalarValue,
        unit: impl Into<Option<Unit>>,
    ) -> Self {
        let unit = unit_or(unit, width.unit());
        Self::from_lengths(Length::from_value(width, unit), Length::from_value(height, unit), unit)
    }

    /// Build from raw magnitudes in `unit`
    pub fn from_numbers(width: f64, height: f64, unit: Unit) -> Result<Self> {
        Ok(Self::from_lengths(
            Length::from_number(width, unit)?,
            Length::from_number(height, unit)?,
            unit,
        ))
    }

    /// Copy of `other`, converted to `unit` when one is given
    pub fn from_size(other: &Size, unit: impl Into<Option<Unit>>) -> Self {
        other.clone_to_unit(unit_or(unit, other.unit))
    }

    /// Pixel dimensions of an image file, read as points and converted to
    /// `unit` (default: points)
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
        let (width, height) = probe_pixels(probe, path.as_ref(), "Size", "from_image_file")?;
        let mut size = Self::from_numbers(width, height, IMAGE_UNIT)?;
        size.morph_to_unit(unit_or(unit, IMAGE_UNIT));
        Ok(size)
    }

    /// `(width, height)` read in `unit` (default: the size's unit)
    pub fn components(&self, unit: impl Into<Option<Unit>>) -> (f64, f64) {
        let unit = unit_or(unit, self.unit);
        (self.width.to_number(unit), self.height.to_number(unit))
    }

    /// Horizontal extent, converted to `unit` when one is given
    pub fn width(&self, unit: impl Into<Option<Unit>>) -> Length {
        Length::from_length(&self.width, unit)
    }

    /// Vertical extent, converted to `unit` when one is given
    pub fn height(&self, unit: impl Into<Option<Unit>>) -> Length {
        Length::from_length(&self.height, unit)
    }

    /// Component by name; a size has no `left` or `top`
    pub fn get(&self, component: Component, unit: impl Into<Option<Unit>>) -> Result<Length> {
        match component {
            Component::Width => Ok(self.width(unit)),
            Component::Height => Ok(self.height(unit)),
            other => Err(other.undefined_for("Size")),
        }
    }

    /// Both dimensions multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Result<Size> {
        Ok(Self::from_lengths(self.width.scaled(factor)?, self.height.scaled(factor)?, self.unit))
    }
}

impl Composite for Size {
    fn unit_tag(&self) -> Unit {
        self.unit
    }

    fn set_unit_tag(&mut self, unit: Unit) {
        self.unit = unit;
    }

    fn parts_mut(&mut self) -> [&mut dyn MorphPart; 2] {
        [&mut self.width, &mut self.height]
    }
}

impl Convert for Size {
    fn unit(&self) -> Unit {
        self.unit
    }

    fn morph_to_unit(&mut self, unit: Unit) -> &mut Self {
        morph_composite(self, unit);
        self
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.components(None);
        write!(f, "Size({})[width: {width}, height: {height}]", self.unit)
    }
}
