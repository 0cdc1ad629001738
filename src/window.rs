//! The fixed year range the census is computed over.

/// First year of the census window (inclusive).
pub const START_YEAR: i32 = 1900;

/// Last year of the census window (inclusive).
pub const END_YEAR: i32 = 2000;

/// An inclusive range of years.
///
/// Spans are clamped into the window before tallying, so a table indexed
/// by year offset never needs bounds checks beyond what [`clamp_span`]
/// already guarantees.
///
/// [`clamp_span`]: YearWindow::clamp_span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub start: i32,
    pub end: i32,
}

impl YearWindow {
    /// Create a window over `[start, end]`. Panics if `start > end`.
    #[inline]
    pub fn new(start: i32, end: i32) -> Self {
        assert!(start <= end, "year window start must not exceed end");
        Self { start, end }
    }

    /// Number of years covered, endpoints included.
    #[inline]
    pub fn total_years(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// The year represented by a table index.
    #[inline]
    pub fn year_at(&self, index: usize) -> i32 {
        self.start + index as i32
    }

    /// The table index for a year inside the window.
    #[inline]
    pub fn index_of(&self, year: i32) -> usize {
        debug_assert!(self.contains(year));
        (year - self.start) as usize
    }

    /// Whether a year falls inside the window.
    #[inline]
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    /// Clamp a raw lifespan into the window.
    ///
    /// The birth year is raised to the window start and the death year
    /// lowered to the window end, truncating a partially overlapping span
    /// to the overlapping portion. Returns `None` when the span lies
    /// entirely outside the window or is inverted after clamping.
    pub fn clamp_span(&self, birth: i32, death: i32) -> Option<(i32, i32)> {
        let birth = birth.max(self.start);
        let death = death.min(self.end);

        if birth > self.end || death < self.start || death < birth {
            return None;
        }

        Some((birth, death))
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::new(START_YEAR, END_YEAR)
    }
}
