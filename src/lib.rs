//! lifetally: peak concurrent population counting.
//!
//! Reads delimited roster files of `Name,BirthYear,DeathYear` records and
//! computes, for the fixed 1900-2000 window, the year in which the most
//! listed people were alive at the same time.
//!
//! # Example
//!
//! ```rust
//! use lifetally::{CensusCommand, CensusStats, PopulationTable, YearWindow};
//!
//! let cmd = CensusCommand::new();
//! let mut table = PopulationTable::new(YearWindow::default());
//! let mut stats = CensusStats::default();
//!
//! let roster = "Alice,1950,1960\nBob,1955,1965\n";
//! cmd.tally_reader(roster.as_bytes(), &mut table, &mut stats).unwrap();
//!
//! assert_eq!(table.peak(), (1955, 2));
//! ```

pub mod census;
pub mod fields;
pub mod record;
pub mod roster;
pub mod tally;
pub mod window;

// Re-export commonly used types
pub use census::{CensusCommand, CensusStats};
pub use record::PersonRecord;
pub use roster::{parse_records, read_records, RosterError, RosterReader};
pub use tally::PopulationTable;
pub use window::{YearWindow, END_YEAR, START_YEAR};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::census::{CensusCommand, CensusStats};
    pub use crate::record::PersonRecord;
    pub use crate::roster::{parse_records, read_records, RosterError, RosterReader};
    pub use crate::tally::PopulationTable;
    pub use crate::window::{YearWindow, END_YEAR, START_YEAR};
}
