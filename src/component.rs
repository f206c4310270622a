//! Named components of the composite types.
//!
//! Each composite declares a subset: [`Size`](crate::Size) has width and
//! height, [`Pos`](crate::Pos) has left and top, [`Area`](crate::Area) has
//! all four. Asking a kind for a component it lacks is `Undefined`.

use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Left,
    Top,
    Width,
    Height,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Left,
        Component::Top,
        Component::Width,
        Component::Height,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Component::Left => "left",
            Component::Top => "top",
            Component::Width => "width",
            Component::Height => "height",
        }
    }

    /// The error a kind raises for a component it does not declare
    pub(crate) fn undefined_for(self, type_name: &'static str) -> Error {
        Error::undefined(type_name, "get", format!("Undefined attribute '{self}'"))
            .with_context("attr", self.as_str())
    }
}

impl FromStr for Component {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Component::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                Error::undefined("Component", "from_str", format!("Undefined attribute '{s}'"))
                    .with_context("attr", s)
            })
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
