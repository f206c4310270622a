//! One-dimensional physical extent with unit-aware arithmetic.

use std::fmt;

use crate::convert::{Convert, unit_or};
use crate::errors::Result;
use crate::unit::Unit;
use crate::value::{ScalarValue, check_finite, check_magnitude};

/// A length, wrapping a [`ScalarValue`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    value: ScalarValue,
}

impl Length {
    /// Build from a raw magnitude; fails with `Unsuited` for NaN, infinity
    /// or a magnitude past [`MAX_MAGNITUDE_FT`](crate::defaults::MAX_MAGNITUDE_FT)
    pub fn from_number(magnitude: f64, unit: Unit) -> Result<Self> {
        let magnitude = check_magnitude(magnitude, unit, "length", "Length", "from_number")?;
        Ok(Self::from_value(ScalarValue::from_number(magnitude, unit)?, None))
    }

    /// Promote a scalar value, converted to `unit` when one is given
    pub fn from_value(value: ScalarValue, unit: impl Into<Option<Unit>>) -> Self {
        let unit = unit_or(unit, value.unit());
        Self { value: value.clone_to_unit(unit) }
    }

    /// Copy of `other`, converted to `unit` when one is given
    pub fn from_length(other: &Length, unit: impl Into<Option<Unit>>) -> Self {
        other.clone_to_unit(unit_or(unit, other.unit()))
    }

    /// Zero in `unit`
    pub fn zero(unit: Unit) -> Self {
        Self { value: ScalarValue::zero(unit) }
    }

    /// The magnitude expressed in `unit` (default: current unit)
    pub fn to_number(&self, unit: impl Into<Option<Unit>>) -> f64 {
        self.value.to_number(unit)
    }

    /// Converted copy of the underlying scalar value
    pub fn value(&self, unit: impl Into<Option<Unit>>) -> ScalarValue {
        self.value.value(unit)
    }

    /// `self + other`, both read in `unit` (default: receiver's unit).
    ///
    /// Neither operand is modified; the result carries `unit`. Fails with
    /// `Unsuited` when the result leaves the magnitude bound.
    pub fn sum(&self, other: &Length, unit: impl Into<Option<Unit>>) -> Result<Length> {
        let unit = unit_or(unit, self.unit());
        self.combined(other.to_number(unit), unit, "sum", |a, b| a + b)
    }

    /// `self - other`, both read in `unit` (default: receiver's unit).
    ///
    /// Same rules as [`sum`](Self::sum).
    pub fn difference(&self, other: &Length, unit: impl Into<Option<Unit>>) -> Result<Length> {
        let unit = unit_or(unit, self.unit());
        self.combined(other.to_number(unit), unit, "difference", |a, b| a - b)
    }

    /// Magnitude multiplied by `factor`, same unit.
    ///
    /// Fails with `Unsuited` for a non-finite factor or a product past the
    /// magnitude bound.
    pub fn scaled(&self, factor: f64) -> Result<Length> {
        let factor = check_finite(factor, "factor", "Length", "scaled")?;
        let product = self.to_number(None) * factor;
        let product = check_magnitude(product, self.unit(), "length", "Length", "scaled")?;
        Ok(Length { value: self.value.with_magnitude(product) })
    }

    fn combined(
        &self,
        rhs: f64,
        unit: Unit,
        operation: &'static str,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Length> {
        let magnitude = op(self.to_number(unit), rhs);
        let magnitude = check_magnitude(magnitude, unit, "length", "Length", operation)?;
        Ok(Length { value: self.value.clone_to_unit(unit).with_magnitude(magnitude) })
    }
}

impl Convert for Length {
    fn unit(&self) -> Unit {
        self.value.unit()
    }

    fn morph_to_unit(&mut self, unit: Unit) -> &mut Self {
        self.value.morph_to_unit(unit);
        self
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn len(n: f64, unit: Unit) -> Length {
        Length::from_number(n, unit).unwrap()
    }

    // ==================== construction tests ====================

    #[test]
    fn from_number_rejects_magnitude_past_bound() {
        let err = Length::from_number(1e308, Unit::Ft).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsuited);
        assert_eq!(err.type_name(), "Length");
    }

    #[test]
    fn from_number_rejects_nan() {
        let err = Length::from_number(f64::NAN, Unit::Pt).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsuited);
        assert_eq!(err.type_name(), "Length");
    }

    #[test]
    fn from_value_converts_when_asked() {
        let v = ScalarValue::from_number(1.0, Unit::Ft).unwrap();
        assert_eq!(Length::from_value(v, None).unit(), Unit::Ft);

        let l = Length::from_value(v, Unit::In);
        assert_eq!(l.unit(), Unit::In);
        assert_eq!(l.to_number(None), 12.0);
    }

    #[test]
    fn from_length_is_independent_copy() {
        let a = len(10.0, Unit::Cm);
        let mut b = Length::from_length(&a, None);
        b.morph_to_unit(Unit::Mm);
        assert_eq!(a.unit(), Unit::Cm);
        assert_eq!(a.to_number(None), 10.0);
        assert_eq!(b.to_number(None), 100.0);
    }

    // ==================== arithmetic tests ====================

    #[test]
    fn sum_same_unit() {
        let sum = len(100.0, Unit::Pt).sum(&len(50.0, Unit::Pt), None).unwrap();
        assert_eq!(sum.to_number(None), 150.0);
        assert_eq!(sum.unit(), Unit::Pt);
    }

    #[test]
    fn sum_reads_other_in_receiver_unit() {
        let sum = len(1.0, Unit::In).sum(&len(72.0, Unit::Pt), None).unwrap();
        assert_eq!(sum.unit(), Unit::In);
        // 72pt is 1.000000008in through the table
        assert!((sum.to_number(None) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn sum_in_explicit_unit() {
        let a = len(1.0, Unit::Cm);
        let b = len(5.0, Unit::Mm);
        let sum = a.sum(&b, Unit::Mm).unwrap();
        assert_eq!(sum.unit(), Unit::Mm);
        assert_eq!(sum.to_number(None), 15.0);
        // operands untouched
        assert_eq!(a.unit(), Unit::Cm);
        assert_eq!(b.to_number(None), 5.0);
    }

    #[test]
    fn difference_can_go_negative() {
        let diff = len(10.0, Unit::Mm).difference(&len(2.0, Unit::Cm), None).unwrap();
        assert_eq!(diff.to_number(None), -10.0);
    }

    #[test]
    fn scaled_keeps_unit() {
        let l = len(3.0, Unit::Pi).scaled(0.5).unwrap();
        assert_eq!(l.unit(), Unit::Pi);
        assert_eq!(l.to_number(None), 1.5);
    }

    #[test]
    fn scaled_rejects_infinite_factor() {
        let err = len(3.0, Unit::Pi).scaled(f64::INFINITY).unwrap_err();
        assert_eq!(err.operation(), "scaled");
    }

    #[test]
    fn scaled_rejects_overflowing_product() {
        let err = len(1e308, Unit::Pt).scaled(10.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsuited);
        assert_eq!(err.operation(), "scaled");
    }

    #[test]
    fn sum_rejects_overflow() {
        let big = len(1e308, Unit::Pt);
        let err = big.sum(&big, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsuited);
        assert_eq!(err.operation(), "sum");

        let err = big.difference(&len(-1e308, Unit::Pt), None).unwrap_err();
        assert_eq!(err.operation(), "difference");
    }

    #[test]
    fn sum_past_bound_in_larger_unit_fails() {
        // each operand fits, but the sum read in feet does not
        let half = len(crate::defaults::MAX_MAGNITUDE_FT * 0.6, Unit::Ft);
        assert!(half.sum(&half, None).is_err());
        assert!(half.sum(&half.scaled(-1.0).unwrap(), None).is_ok());
    }

    #[test]
    fn morph_of_largest_length_stays_finite() {
        let mut l = len(1e305, Unit::Ft);
        l.morph_to_unit(Unit::Pt);
        assert!(l.to_number(None).is_finite());
        assert!((l.to_number(None) - 8.64e307).abs() < 1e301);
    }

    #[test]
    fn zero_has_unit() {
        let z = Length::zero(Unit::Dm);
        assert_eq!(z.unit(), Unit::Dm);
        assert_eq!(z.to_number(Unit::Pt), 0.0);
    }
}
