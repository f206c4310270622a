//! The seven supported length units and the conversion table between them.
//!
//! This is the only place unit arithmetic happens; every value type delegates
//! its conversions to [`Unit::convert`].

use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};
use crate::log::warn;

/// A physical length unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    /// Millimeter
    Mm,
    /// Centimeter
    Cm,
    /// Decimeter
    Dm,
    /// Point, 1/72 inch
    Pt,
    /// Pica, 12 points
    Pi,
    /// Inch
    In,
    /// Foot
    Ft,
}

/// `FACTORS[source][target]`, rows and columns in [`Unit::ALL`] order.
///
/// Entries are authored per pair, not derived from a base unit. Rounding to
/// nine or ten significant digits means `f(a, b) * f(b, a)` is only 1 within
/// [`ROUND_TRIP_TOLERANCE`](crate::defaults::ROUND_TRIP_TOLERANCE).
const FACTORS: [[f64; 7]; 7] = [
    //  mm           cm            dm             pt             pi             in            ft
    [1.0, 0.1, 0.01, 2.834645669, 0.236220472, 0.039370079, 0.00328084],
    [10.0, 1.0, 0.1, 28.346456693, 2.362204724, 0.393700787, 0.032808399],
    [100.0, 10.0, 1.0, 283.464566929, 23.622047244, 3.937007874, 0.32808399],
    [0.352777778, 0.035277778, 0.003527778, 1.0, 0.083333333, 0.013888889, 0.001157407],
    [4.233333333, 0.423333333, 0.042333333, 12.0, 1.0, 0.166666667, 0.013888889],
    [25.4, 2.54, 0.254, 72.0, 6.0, 1.0, 0.083333333],
    [304.8, 30.48, 3.048, 864.0, 72.0, 12.0, 1.0],
];

impl Unit {
    /// Every unit, in conversion table order
    pub const ALL: [Unit; 7] = [
        Unit::Mm,
        Unit::Cm,
        Unit::Dm,
        Unit::Pt,
        Unit::Pi,
        Unit::In,
        Unit::Ft,
    ];

    /// The unit token (`"mm"`, `"pt"`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::Dm => "dm",
            Unit::Pt => "pt",
            Unit::Pi => "pi",
            Unit::In => "in",
            Unit::Ft => "ft",
        }
    }

    /// Validate a unit token.
    ///
    /// Tokens are matched exactly; anything but the seven lowercase tokens
    /// fails with [`Unsuited`](crate::ErrorKind::Unsuited).
    pub fn validate(token: &str) -> Result<Unit> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == token)
            .ok_or_else(|| {
                warn!(token, "rejected unit token");
                Error::unsuited("Unit", "validate", "Unsuited unit object 'unit'")
                    .with_context("object", token)
            })
    }

    /// Multiplicative factor taking a magnitude from `source` to `target`
    #[inline]
    pub fn factor(source: Unit, target: Unit) -> f64 {
        FACTORS[source as usize][target as usize]
    }

    /// `magnitude` expressed in `source`, converted to `target`.
    ///
    /// Same-unit conversion multiplies by exactly 1.0 and so returns the
    /// magnitude unchanged.
    #[inline]
    pub fn convert(magnitude: f64, source: Unit, target: Unit) -> f64 {
        magnitude * Unit::factor(source, target)
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Unit::validate(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
