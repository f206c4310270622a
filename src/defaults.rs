//! Default units and numeric settings

use crate::unit::Unit;

/// Unit that image pixel dimensions are read in
pub const IMAGE_UNIT: Unit = Unit::Pt;

/// Relative tolerance of a two-hop conversion `a -> b -> a`.
///
/// The conversion table is authored per pair with nine or ten significant
/// digits, so round trips drift by up to ~4e-7 (pt <-> ft is the worst pair).
pub const ROUND_TRIP_TOLERANCE: f64 = 1e-6;

/// Share of the free space placed before a centered child
pub const CENTER_RATIO: f64 = 0.5;

/// Largest accepted magnitude, measured in feet.
///
/// Every stored magnitude stays within this bound once read in feet, the
/// largest unit. The biggest factor in the table is 864 (ft to pt), so a
/// value inside the bound converts to any unit without overflowing.
pub const MAX_MAGNITUDE_FT: f64 = f64::MAX / 1024.0;
