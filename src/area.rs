//! Rectangles: a position plus a size, with move and fit operations.

use std::fmt;
use std::path::Path;

use glam::{DVec2, dvec2};

use crate::align::Align;
use crate::component::Component;
use crate::convert::{Composite, Convert, MorphPart, morph_composite, unit_or};
use crate::defaults::IMAGE_UNIT;
use crate::errors::{Error, Result};
use crate::length::Length;
use crate::log::{debug, trace, warn};
use crate::pos::Pos;
use crate::probe::{ImageProbe, probe_pixels};
use crate::size::Size;
use crate::unit::Unit;
use crate::value::ScalarValue;

/// A rectangle with its top-left corner at `pos`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Area {
    pos: Pos,
    size: Size,
    unit: Unit,
}

impl Area {
    /// Build from a position and a size, both converted to `unit`
    /// (default: the position's unit)
    pub fn from_pos_size(pos: Pos, size: Size, unit: impl Into<Option<Unit>>) -> Self {
        let unit = unit_or(unit, pos.unit());
        Self {
            pos: pos.clone_to_unit(unit),
            size: size.clone_to_unit(unit),
            unit,
        }
    }

    /// Build from four lengths (default unit: the left's unit)
    pub fn from_lengths(
        left: Length,
        top: Length,
        width: Length,
        height: Length,
        unit: impl Into<Option<Unit>>,
    ) -> Self {
        let unit = unit_or(unit, left.unit());
        Self::from_pos_size(
            Pos::from_lengths(left, top, unit),
            Size::from_lengths(width, height, unit),
            unit,
        )
    }

    /// Build from four scalar values (default unit: the left's unit)
    pub fn from_values(
        left: ScalarValue,
        top: ScalarValue,
        width: ScalarValue,
        height: ScalarValue,
        unit: impl Into<Option<Unit>>,
    ) -> Self {
        let unit = unit_or(unit, left.unit());
        Self::from_pos_size(
            Pos::from_values(left, top, unit),
            Size::from_values(width, height, unit),
            unit,
        )
    }

    /// Build from raw magnitudes in `unit`
    pub fn from_numbers(left: f64, top: f64, width: f64, height: f64, unit: Unit) -> Result<Self> {
        Ok(Self::from_pos_size(
            Pos::from_numbers(left, top, unit)?,
            Size::from_numbers(width, height, unit)?,
            unit,
        ))
    }

    /// Copy of `other`, converted to `unit` when one is given
    pub fn from_area(other: &Area, unit: impl Into<Option<Unit>>) -> Self {
        other.clone_to_unit(unit_or(unit, other.unit))
    }

    /// An image at the origin, its pixel dimensions read as points and
    /// converted to `unit` (default: points)
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
        let (width, height) = probe_pixels(probe, path.as_ref(), "Area", "from_image_file")?;
        let mut area = Self::from_numbers(0.0, 0.0, width, height, IMAGE_UNIT)?;
        area.morph_to_unit(unit_or(unit, IMAGE_UNIT));
        Ok(area)
    }

    /// `(left, top, width, height)` read in `unit` (default: the area's unit)
    pub fn components(&self, unit: impl Into<Option<Unit>>) -> (f64, f64, f64, f64) {
        let unit = unit_or(unit, self.unit);
        let (left, top) = self.pos.components(unit);
        let (width, height) = self.size.components(unit);
        (left, top, width, height)
    }

    /// Top-left corner, converted to `unit` when one is given
    pub fn pos(&self, unit: impl Into<Option<Unit>>) -> Pos {
        Pos::from_pos(&self.pos, unit)
    }

    /// Width and height, converted to `unit` when one is given
    pub fn size(&self, unit: impl Into<Option<Unit>>) -> Size {
        Size::from_size(&self.size, unit)
    }

    /// Left edge, converted to `unit` when one is given
    pub fn left(&self, unit: impl Into<Option<Unit>>) -> Length {
        self.pos.left(unit)
    }

    /// Top edge, converted to `unit` when one is given
    pub fn top(&self, unit: impl Into<Option<Unit>>) -> Length {
        self.pos.top(unit)
    }

    /// Horizontal extent, converted to `unit` when one is given
    pub fn width(&self, unit: impl Into<Option<Unit>>) -> Length {
        self.size.width(unit)
    }

    /// Vertical extent, converted to `unit` when one is given
    pub fn height(&self, unit: impl Into<Option<Unit>>) -> Length {
        self.size.height(unit)
    }

    /// `left + width`, computed on demand in `unit` (default: the area's unit)
    pub fn right(&self, unit: impl Into<Option<Unit>>) -> Result<Length> {
        let unit = unit_or(unit, self.unit);
        self.left(unit).sum(&self.width(unit), unit)
    }

    /// `top + height`, computed on demand in `unit` (default: the area's unit)
    pub fn bottom(&self, unit: impl Into<Option<Unit>>) -> Result<Length> {
        let unit = unit_or(unit, self.unit);
        self.top(unit).sum(&self.height(unit), unit)
    }

    /// Component by name; an area declares all four
    pub fn get(&self, component: Component, unit: impl Into<Option<Unit>>) -> Length {
        match component {
            Component::Left => self.left(unit),
            Component::Top => self.top(unit),
            Component::Width => self.width(unit),
            Component::Height => self.height(unit),
        }
    }

    /// Position and size each multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Result<Area> {
        Ok(Self::from_pos_size(self.pos.scaled(factor)?, self.size.scaled(factor)?, self.unit))
    }

    /// Replace the position outright.
    ///
    /// The receiver is morphed to `unit` (default: its own unit) and `pos`
    /// is converted to it before being stored.
    pub fn move_to(&mut self, pos: Pos, unit: impl Into<Option<Unit>>) -> &mut Self {
        let unit = unit_or(unit, self.unit);
        self.morph_to_unit(unit);
        self.pos = pos.clone_to_unit(unit);
        self
    }

    /// Shift the position by `delta`, with the same conversion as
    /// [`move_to`](Self::move_to).
    ///
    /// Fails with `Unsuited` when the shifted position leaves the magnitude
    /// bound; the receiver is then left as it was.
    pub fn move_by(&mut self, delta: &Pos, unit: impl Into<Option<Unit>>) -> Result<&mut Self> {
        let unit = unit_or(unit, self.unit);
        let mut moved = self.clone_to_unit(unit);
        moved.pos.sum(delta, unit)?;
        *self = moved;
        Ok(self)
    }

    /// The largest copy of `target` that fits inside this area's size,
    /// keeping `target`'s aspect ratio. Never upscales: a target that already
    /// fits comes back unchanged (converted to `unit`).
    ///
    /// Fails with `Unsuited` when the container has a zero or negative side.
    pub fn put_size(&self, target: &Size, unit: impl Into<Option<Unit>>) -> Result<Size> {
        let unit = unit_or(unit, self.unit);
        let target = target.clone_to_unit(unit);
        let container = DVec2::from(self.size.components(unit));
        if container.min_element() <= 0.0 {
            warn!(width = container.x, height = container.y, "degenerate container");
            return Err(Error::unsuited("Area", "put_size", "Unsuited container size 'size'")
                .with_context("width", container.x)
                .with_context("height", container.y));
        }

        let wanted = DVec2::from(target.components(None));
        let ratio = (wanted / container).max_element();
        trace!(ratio, "put_size ratio");
        if ratio <= 1.0 {
            return Ok(target);
        }
        let shrunk = wanted / ratio;
        Size::from_numbers(shrunk.x, shrunk.y, unit)
    }

    /// Fit `target` into this area and place it according to `align`.
    ///
    /// The size comes from [`put_size`](Self::put_size); each axis then
    /// keeps the near edge, moves to the far edge, or centers in the free
    /// space. The receiver is not modified.
    pub fn fit_size(
        &self,
        target: &Size,
        align: Align,
        unit: impl Into<Option<Unit>>,
    ) -> Result<Area> {
        let unit = unit_or(unit, self.unit);
        let fitted = self.put_size(target, unit)?;

        let (left, top, width, height) = self.components(unit);
        let free = dvec2(width, height) - DVec2::from(fitted.components(None));
        let share = dvec2(align.horizontal().share(), align.vertical().share());
        let origin = dvec2(left, top) + free * share;
        debug!(?align, x = origin.x, y = origin.y, "fitted size");

        Ok(Self::from_pos_size(Pos::from_numbers(origin.x, origin.y, unit)?, fitted, unit))
    }
}

impl Composite for Area {
    fn unit_tag(&self) -> Unit {
        self.unit
    }

    fn set_unit_tag(&mut self, unit: Unit) {
        self.unit = unit;
    }

    fn parts_mut(&mut self) -> [&mut dyn MorphPart; 2] {
        [&mut self.pos, &mut self.size]
    }
}

impl Convert for Area {
    fn unit(&self) -> Unit {
        self.unit
    }

    fn morph_to_unit(&mut self, unit: Unit) -> &mut Self {
        morph_composite(self, unit);
        self
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, top, width, height) = self.components(None);
        write!(
            f,
            "Area({})[left: {left}, top: {top}, width: {width}, height: {height}]",
            self.unit
        )
    }
}
