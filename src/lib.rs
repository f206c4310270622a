//! Unit based arithmetic for two-dimensional geometry.
//!
//! Lengths, sizes, positions and areas carry one of seven physical units
//! ([`Unit`]) and convert between them on demand. Every type offers the same
//! pair of unit changes through [`Convert`]: `morph_to_unit` rewrites the
//! value in place, `clone_to_unit` returns a converted copy.
//!
//! ```
//! use urithmetic::{Align, Area, Size, Unit};
//!
//! let page = Area::from_numbers(0.0, 0.0, 100.0, 100.0, Unit::Pt)?;
//! let image = Size::from_numbers(200.0, 100.0, Unit::Pt)?;
//! let placed = page.fit_size(&image, Align::CENTER, None)?;
//! assert_eq!(placed.components(None), (0.0, 25.0, 100.0, 50.0));
//! # Ok::<(), urithmetic::Error>(())
//! ```

pub mod align;
pub mod area;
pub mod component;
pub mod convert;
pub mod defaults;
pub mod errors;
pub mod length;
pub mod log;
pub mod pos;
pub mod probe;
pub mod size;
pub mod unit;
pub mod value;

pub use align::{Align, Anchor};
pub use area::Area;
pub use component::Component;
pub use convert::Convert;
pub use errors::{Error, ErrorKind, Result};
pub use length::Length;
pub use pos::Pos;
#[cfg(feature = "image")]
pub use probe::ImageCrateProbe;
pub use probe::ImageProbe;
pub use size::Size;
pub use unit::Unit;
pub use value::ScalarValue;
