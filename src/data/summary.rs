use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::SummaryRow;

/// Write the final-value table: one `label<TAB><TAB>value` line per row.
///
/// The empty middle field yields the double tab of the historic format.
/// Labels are written verbatim, never quoted.
pub fn write_summary<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    for row in rows {
        wtr.write_record([row.label.as_str(), "", row.value_text().as_str()])
            .with_context(|| format!("writing summary row for {}", row.label))?;
    }
    wtr.flush().context("flushing summary table")?;
    Ok(())
}

/// Create (or truncate) `path` and write the table into it.
pub fn write_summary_file(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating summary file {}", path.display()))?;
    write_summary(file, rows)
}
