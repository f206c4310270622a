//! Unit change shared by every value type.
//!
//! Each type has the same matched pair: [`Convert::morph_to_unit`] rewrites
//! the receiver in place, [`Convert::clone_to_unit`] leaves it alone and
//! returns a converted deep copy. Composites get both from [`morph_composite`]
//! over their two unit-bearing parts.

use crate::unit::Unit;

/// A value tagged with a [`Unit`] that can be re-expressed in another one
pub trait Convert: Clone {
    /// The unit the value is currently expressed in
    fn unit(&self) -> Unit;

    /// Convert the receiver in place. Returns the receiver for chaining.
    fn morph_to_unit(&mut self, unit: Unit) -> &mut Self;

    /// Independent copy converted to `unit`; the receiver is untouched.
    fn clone_to_unit(&self, unit: Unit) -> Self {
        let mut clone = self.clone();
        clone.morph_to_unit(unit);
        clone
    }
}

/// Object-safe view of a part nested inside a composite
pub(crate) trait MorphPart {
    fn morph_part(&mut self, unit: Unit);
}

impl<T: Convert> MorphPart for T {
    fn morph_part(&mut self, unit: Unit) {
        self.morph_to_unit(unit);
    }
}

/// A value made of two unit-bearing parts that share its declared unit
pub(crate) trait Composite {
    fn unit_tag(&self) -> Unit;
    fn set_unit_tag(&mut self, unit: Unit);
    fn parts_mut(&mut self) -> [&mut dyn MorphPart; 2];
}

/// Morph every part of `composite` to `unit`, then retag it.
///
/// Already being in `unit` is a no-op.
pub(crate) fn morph_composite<C: Composite>(composite: &mut C, unit: Unit) {
    if composite.unit_tag() == unit {
        return;
    }
    for part in composite.parts_mut() {
        part.morph_part(unit);
    }
    composite.set_unit_tag(unit);
}

/// Resolve an optional unit argument against a default
#[inline]
pub(crate) fn unit_or(unit: impl Into<Option<Unit>>, default: Unit) -> Unit {
    unit.into().unwrap_or(default)
}
