//! Unit-tagged scalar magnitude, the atom every other type is built from.

use std::fmt;

use crate::convert::{Convert, unit_or};
use crate::defaults::MAX_MAGNITUDE_FT;
use crate::errors::{Error, Result};
use crate::unit::Unit;

/// A finite magnitude expressed in a [`Unit`].
///
/// The magnitude never exceeds [`MAX_MAGNITUDE_FT`] once read in feet, so
/// unit changes cannot overflow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalarValue {
    magnitude: f64,
    unit: Unit,
}

/// Reject NaN and infinities with an `Unsuited` error for `type_name::operation`
pub(crate) fn check_finite(
    number: f64,
    name: &'static str,
    type_name: &'static str,
    operation: &'static str,
) -> Result<f64> {
    if number.is_finite() {
        Ok(number)
    } else {
        Err(
            Error::unsuited(type_name, operation, format!("Unsuited scalar object '{name}'"))
                .with_context("object", number),
        )
    }
}

/// Like [`check_finite`], also rejecting magnitudes past [`MAX_MAGNITUDE_FT`]
pub(crate) fn check_magnitude(
    number: f64,
    unit: Unit,
    name: &'static str,
    type_name: &'static str,
    operation: &'static str,
) -> Result<f64> {
    let number = check_finite(number, name, type_name, operation)?;
    // factor to feet is at most 1.0, so the product is finite
    if (number * Unit::factor(unit, Unit::Ft)).abs() <= MAX_MAGNITUDE_FT {
        Ok(number)
    } else {
        Err(
            Error::unsuited(type_name, operation, format!("Unsuited scalar object '{name}'"))
                .with_context("object", number)
                .with_context("unit", unit),
        )
    }
}

impl ScalarValue {
    /// Build from a raw magnitude; fails with `Unsuited` for NaN, infinity
    /// or a magnitude past [`MAX_MAGNITUDE_FT`]
    pub fn from_number(magnitude: f64, unit: Unit) -> Result<Self> {
        let magnitude = check_magnitude(magnitude, unit, "scalar", "ScalarValue", "from_number")?;
        Ok(Self { magnitude, unit })
    }

    /// Zero in `unit`
    pub const fn zero(unit: Unit) -> Self {
        Self { magnitude: 0.0, unit }
    }

    /// Copy of `other`, converted to `unit` when one is given
    pub fn from_value(other: &ScalarValue, unit: impl Into<Option<Unit>>) -> Self {
        other.value(unit)
    }

    /// The magnitude expressed in `unit` (default: current unit)
    pub fn to_number(&self, unit: impl Into<Option<Unit>>) -> f64 {
        Unit::convert(self.magnitude, self.unit, unit_or(unit, self.unit))
    }

    /// [`to_number`](Self::to_number) rounded half away from zero
    pub fn to_int(&self, unit: impl Into<Option<Unit>>) -> i64 {
        self.to_number(unit).round() as i64
    }

    /// Converted copy of the value (default: current unit)
    pub fn value(&self, unit: impl Into<Option<Unit>>) -> ScalarValue {
        self.clone_to_unit(unit_or(unit, self.unit))
    }

    /// Same unit, magnitude replaced; the caller has checked `magnitude`
    pub(crate) fn with_magnitude(self, magnitude: f64) -> Self {
        Self { magnitude, ..self }
    }
}

impl Convert for ScalarValue {
    fn unit(&self) -> Unit {
        self.unit
    }

    fn morph_to_unit(&mut self, unit: Unit) -> &mut Self {
        self.magnitude = Unit::convert(self.magnitude, self.unit, unit);
        self.unit = unit;
        self
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}
