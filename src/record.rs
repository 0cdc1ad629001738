//! Person records parsed from roster lines.

use std::fmt;

use crate::fields::parse_year;
use crate::window::YearWindow;

/// One roster entry: a name and the raw birth/death years as parsed.
///
/// Years here are unclamped; [`lifespan_within`] applies the window
/// rules before a record reaches the tally.
///
/// [`lifespan_within`]: PersonRecord::lifespan_within
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub name: String,
    pub birth_year: i32,
    pub death_year: i32,
}

impl PersonRecord {
    /// Create a record directly.
    pub fn new(name: impl Into<String>, birth_year: i32, death_year: i32) -> Self {
        Self {
            name: name.into(),
            birth_year,
            death_year,
        }
    }

    /// Build a record from split fields: `[name, birth, death, ...]`.
    ///
    /// Returns `None` for fewer than 3 fields. Year fields parse with
    /// atoi semantics, so non-numeric content becomes year 0 and is
    /// left for the window rules to reject.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        if fields.len() < 3 {
            return None;
        }

        Some(Self {
            name: fields[0].to_string(),
            birth_year: parse_year(fields[1]),
            death_year: parse_year(fields[2]),
        })
    }

    /// The record's lifespan clamped into `window`, or `None` if the
    /// record falls outside it or is inverted. See [`YearWindow::clamp_span`].
    #[inline]
    pub fn lifespan_within(&self, window: &YearWindow) -> Option<(i32, i32)> {
        window.clamp_span(self.birth_year, self.death_year)
    }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.name, self.birth_year, self.death_year)
    }
}
