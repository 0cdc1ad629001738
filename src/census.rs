//! Census command: the file loop driver and report writer.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::roster::{Result, RosterReader, DEFAULT_DELIMITER};
use crate::tally::PopulationTable;
use crate::window::YearWindow;

/// Buffer size for report output (64KB).
const BUF_SIZE: usize = 64 * 1024;

/// Census command configuration.
#[derive(Debug, Clone)]
pub struct CensusCommand {
    /// Year window to tally over
    pub window: YearWindow,
    /// Field delimiter for roster files
    pub delimiter: u8,
}

impl Default for CensusCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CensusCommand {
    pub fn new() -> Self {
        Self {
            window: YearWindow::default(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_window(mut self, window: YearWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Run the census over a list of roster files and write the report.
    ///
    /// Paths that fail to open are skipped, counted in the stats, and
    /// never abort the run. Zero paths still produce a full report over
    /// an all-zero table.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        paths: &[P],
        output: &mut W,
    ) -> Result<CensusStats> {
        let mut table = PopulationTable::new(self.window);
        let mut stats = CensusStats::default();

        for path in paths {
            // Unopenable paths are not fatal; move on to the next one.
            let file = match File::open(path.as_ref()) {
                Ok(file) => file,
                Err(_) => {
                    stats.files_skipped += 1;
                    continue;
                }
            };

            self.tally_reader(file, &mut table, &mut stats)?;
            stats.files_read += 1;
        }

        self.write_report(&table, output)?;
        Ok(stats)
    }

    /// Feed every record from one source into the table.
    pub fn tally_reader<R: Read>(
        &self,
        reader: R,
        table: &mut PopulationTable,
        stats: &mut CensusStats,
    ) -> Result<()> {
        let mut reader = RosterReader::with_delimiter(reader, self.delimiter);

        while let Some(record) = reader.read_record()? {
            match record.lifespan_within(&self.window) {
                Some((birth, death)) => {
                    table.record_span(birth, death);
                    stats.records_tallied += 1;
                }
                None => stats.records_rejected += 1,
            }
        }

        stats.lines_read += reader.lines_read();
        stats.lines_skipped += reader.lines_skipped();
        Ok(())
    }

    /// Write the per-year table and the peak summary.
    pub fn write_report<W: Write>(&self, table: &PopulationTable, output: &mut W) -> Result<()> {
        let mut writer = BufWriter::with_capacity(BUF_SIZE, output);
        let mut itoa_buf = itoa::Buffer::new();

        writer.write_all(b"Year:    Alive:\n")?;

        for (year, count) in table.iter() {
            writer.write_all(itoa_buf.format(year).as_bytes())?;
            writer.write_all(b"     ")?;
            writer.write_all(itoa_buf.format(count).as_bytes())?;
            writer.write_all(b"\n")?;
        }

        let (peak_year, peak_count) = table.peak();
        writeln!(
            writer,
            "\nThe year the most people were alive was {} and the total people alive was {}.",
            peak_year, peak_count
        )?;

        writer.flush()?;
        Ok(())
    }
}

/// Statistics from a census run.
#[derive(Debug, Default, Clone)]
pub struct CensusStats {
    pub files_read: usize,
    pub files_skipped: usize,
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub records_tallied: usize,
    pub records_rejected: usize,
}

impl fmt::Display for CensusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Files: {} read, {} skipped; Lines: {} read, {} skipped; Records: {} tallied, {} rejected",
            self.files_read,
            self.files_skipped,
            self.lines_read,
            self.lines_skipped,
            self.records_tallied,
            self.records_rejected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_on_content(content: &str) -> (String, CensusStats) {
        let cmd = CensusCommand::new();
        let mut table = PopulationTable::new(cmd.window);
        let mut stats = CensusStats::default();
        cmd.tally_reader(content.as_bytes(), &mut table, &mut stats)
            .unwrap();

        let mut out = Vec::new();
        cmd.write_report(&table, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn test_report_header_and_summary() {
        let (report, _) = run_on_content("Alice,1950,1955\n");

        assert!(report.starts_with("Year:    Alive:\n"));
        assert!(report.contains("1950     1\n"));
        assert!(report.contains("1949     0\n"));
        assert!(report.ends_with(
            "\nThe year the most people were alive was 1950 and the total people alive was 1.\n"
        ));
    }

    #[test]
    fn test_report_line_count() {
        let (report, _) = run_on_content("");
        // Header + 101 year lines + blank line + summary
        assert_eq!(report.lines().count(), 104);
    }

    #[test]
    fn test_empty_input_reports_window_start() {
        let (report, stats) = run_on_content("");

        assert!(report.contains(
            "The year the most people were alive was 1900 and the total people alive was 0."
        ));
        assert_eq!(stats.records_tallied, 0);
    }

    #[test]
    fn test_rejected_records_counted() {
        let content = "Old,1800,1850\nInverted,1960,1950\nAlice,1950,1955\nshort\n";
        let (_, stats) = run_on_content(content);

        assert_eq!(stats.records_tallied, 1);
        assert_eq!(stats.records_rejected, 2);
        assert_eq!(stats.lines_skipped, 1);
        assert_eq!(stats.lines_read, 4);
    }

    #[test]
    fn test_two_person_overlap() {
        let (report, stats) = run_on_content("Alice,1950,1960\nBob,1955,1965\n");

        assert!(report.contains("1955     2\n"));
        assert!(report.contains("1960     2\n"));
        assert!(report.contains("1961     1\n"));
        assert!(report.contains(
            "The year the most people were alive was 1955 and the total people alive was 2."
        ));
        assert_eq!(stats.records_tallied, 2);
    }

    #[test]
    fn test_clamped_record_covers_whole_window() {
        let (report, _) = run_on_content("X,1850,2050\n");

        assert!(report.contains("1900     1\n"));
        assert!(report.contains("2000     1\n"));
        assert!(report.contains(
            "The year the most people were alive was 1900 and the total people alive was 1."
        ));
    }

    #[test]
    fn test_builder_window_and_delimiter() {
        let cmd = CensusCommand::new()
            .with_window(YearWindow::new(1950, 1960))
            .with_delimiter(b'|');

        let mut table = PopulationTable::new(cmd.window);
        let mut stats = CensusStats::default();
        cmd.tally_reader("Alice|1940|1955\nBob|1953|1975\n".as_bytes(), &mut table, &mut stats)
            .unwrap();

        // Both lifespans clamp to the narrowed window.
        assert_eq!(stats.records_tallied, 2);
        assert_eq!(table.count(1950), 1);
        assert_eq!(table.count(1954), 2);
        assert_eq!(table.count(1960), 1);
        assert_eq!(table.peak(), (1953, 2));
    }

    #[test]
    fn test_run_skips_unopenable_paths() {
        let cmd = CensusCommand::new();
        let mut out = Vec::new();
        let paths = ["/nonexistent/roster-a.txt", "/nonexistent/roster-b.txt"];
        let stats = cmd.run(&paths, &mut out).unwrap();

        assert_eq!(stats.files_read, 0);
        assert_eq!(stats.files_skipped, 2);
        // The all-zero report is still written.
        let report = String::from_utf8(out).unwrap();
        assert!(report.starts_with("Year:    Alive:\n"));
    }

    #[test]
    fn test_stats_display() {
        let stats = CensusStats {
            files_read: 2,
            files_skipped: 1,
            lines_read: 10,
            lines_skipped: 3,
            records_tallied: 6,
            records_rejected: 1,
        };
        let rendered = stats.to_string();
        assert!(rendered.contains("2 read"));
        assert!(rendered.contains("6 tallied"));
    }
}
