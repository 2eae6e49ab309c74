//! Tab-separated score report output.

use std::io::Write;

use crate::scoring::ScoreReport;
use crate::types::GuideError;

/// Column header line written before the report rows
const REPORT_HEADER: &str = "region\tstrand\toffset\tguide\toff_target_sites";

/// Writes the score report as TSV: a header line, then one row per scored
/// candidate in report order.
///
/// # Errors
///
/// Returns [`GuideError::IoError`] if the writer fails.
pub fn write_report<W: Write>(writer: &mut W, report: &ScoreReport) -> Result<(), GuideError> {
    writeln!(writer, "{REPORT_HEADER}")?;
    for row in report {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            row.region,
            row.strand.strand_symbol(),
            row.offset,
            row.guide,
            row.off_target_sites
        )?;
    }
    writer.flush()?;
    Ok(())
}
