//! Per-year population counting.

use crate::window::YearWindow;

/// A count of living people for every year in a window.
///
/// One table is built per run and fed clamped lifespans; counts only
/// grow during accumulation. The peak scan afterwards is read-only.
#[derive(Debug, Clone)]
pub struct PopulationTable {
    window: YearWindow,
    counts: Vec<u32>,
}

impl PopulationTable {
    /// Create an all-zero table covering `window`.
    pub fn new(window: YearWindow) -> Self {
        Self {
            window,
            counts: vec![0; window.total_years()],
        }
    }

    /// The window this table covers.
    #[inline]
    pub fn window(&self) -> &YearWindow {
        &self.window
    }

    /// Record one person alive from `birth` through `death` inclusive.
    ///
    /// Both years must already be clamped into the window, as
    /// [`YearWindow::clamp_span`] guarantees.
    pub fn record_span(&mut self, birth: i32, death: i32) {
        debug_assert!(self.window.contains(birth));
        debug_assert!(self.window.contains(death));
        debug_assert!(birth <= death);

        let start = self.window.index_of(birth);
        let end = self.window.index_of(death);
        for count in &mut self.counts[start..=end] {
            *count += 1;
        }
    }

    /// The count for a single year inside the window.
    #[inline]
    pub fn count(&self, year: i32) -> u32 {
        self.counts[self.window.index_of(year)]
    }

    /// Iterate `(year, count)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (self.window.year_at(i), count))
    }

    /// The year with the highest count and that count.
    ///
    /// Ties keep the earliest year: the scan only moves on a strictly
    /// greater count. An all-zero table reports the window's first year.
    pub fn peak(&self) -> (i32, u32) {
        let mut best = 0;
        for (i, &count) in self.counts.iter().enumerate() {
            if count > self.counts[best] {
                best = i;
            }
        }
        (self.window.year_at(best), self.counts[best])
    }
}
