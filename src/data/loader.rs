use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::model::{Header, Series};

/// `"X label" "Y label"` at the start of a line; at most one whitespace
/// character between the two quoted labels.
static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"(.*?)"\s?"(.*?)""#).expect("Invalid regex pattern"));

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a monitor file could not be turned into a [`Series`].
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line numbers are 1-based, counted over the whole file.
    #[error("line {line}: expected at least two whitespace-separated columns")]
    MissingColumn { line: usize },

    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },

    #[error("no data rows left after skipping the header rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Header inference
// ---------------------------------------------------------------------------

/// Infer axis labels from the `"X" "Y"` header line of a monitor file.
///
/// Every line is scanned and the last matching line wins. Without any match
/// the header is [`Header::unrecognized`].
pub fn infer_header(path: &Path) -> Result<Header> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut header = None;
    for line in reader.lines() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        if let Some(caps) = HEADER_REGEX.captures(&line) {
            let (x_label, y_label) = (&caps[1], &caps[2]);
            log::info!("Identified X/Y axes of the data files as '{x_label}' and '{y_label}'");
            header = Some(Header::from_labels(x_label, y_label));
        }
    }

    Ok(header.unwrap_or_else(|| {
        log::warn!(
            "no \"X\" \"Y\" header line in {}; using placeholder axis labels",
            path.display()
        );
        Header::unrecognized()
    }))
}

// ---------------------------------------------------------------------------
// Series reader
// ---------------------------------------------------------------------------

/// Read the first two columns of every line of `path`.
///
/// All lines are split first; `lineskip` leading rows are then discarded and
/// the rest parsed as `f64`. A line with fewer than two columns is an error
/// even if it falls within the skipped rows.
pub fn read_series(path: &Path, lineskip: usize) -> Result<Series, ReadError> {
    let reader = BufReader::new(File::open(path)?);
    parse_columns(reader, lineskip)
}

fn parse_columns(reader: impl BufRead, lineskip: usize) -> Result<Series, ReadError> {
    let mut column1 = Vec::new();
    let mut column2 = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(a), Some(b)) => {
                column1.push(a.to_string());
                column2.push(b.to_string());
            }
            _ => return Err(ReadError::MissingColumn { line: i + 1 }),
        }
    }

    let skip = lineskip.min(column1.len());
    let x = parse_floats(&column1[skip..], skip)?;
    let y = parse_floats(&column2[skip..], skip)?;

    if x.is_empty() {
        return Err(ReadError::Empty);
    }
    Ok(Series { x, y })
}

fn parse_floats(tokens: &[String], first_line: usize) -> Result<Vec<f64>, ReadError> {
    tokens
        .iter()
        .enumerate()
        .map(|(j, tok)| {
            tok.parse::<f64>().map_err(|_| ReadError::InvalidNumber {
                line: first_line + j + 1,
                token: tok.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::HeaderMode;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp(tag: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "spectral-history-loader-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{tag}.out"));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn header_with_temperature_converts() {
        let path = write_temp(
            "celsius",
            "\"Convergence history of Static Temperature on point-1\"\n\
             \"Time (s)\" \"Static Temperature (K)\"\n\
             1 300.0\n\
             2 301.5\n",
        );
        let header = infer_header(&path).unwrap();
        assert_eq!(header.mode, HeaderMode::CelsiusConversion);
        assert_eq!(header.x_label, "Time (s)");
        assert_eq!(header.y_label, "Static Temperature (K) (°C)");
    }

    #[test]
    fn header_starting_with_temperature_is_as_is() {
        let path = write_temp("as-is", "\"Time (s)\" \"Temperature (K)\"\n1 300\n");
        let header = infer_header(&path).unwrap();
        assert_eq!(header.mode, HeaderMode::AsIs);
        assert_eq!(header.y_label, "Temperature (K)");
    }

    #[test]
    fn header_without_separator_space_matches() {
        let path = write_temp("tight", "\"Iteration\"\"Mass Flow\"\n");
        let header = infer_header(&path).unwrap();
        assert_eq!(header.mode, HeaderMode::AsIs);
        assert_eq!(header.x_label, "Iteration");
        assert_eq!(header.y_label, "Mass Flow");
    }

    #[test]
    fn last_matching_header_wins() {
        let path = write_temp(
            "last",
            "\"Iteration\" \"Pressure\"\n1 2\n\"Flow Time\" \"Wall Temperature\"\n3 4\n",
        );
        let header = infer_header(&path).unwrap();
        assert_eq!(header.x_label, "Flow Time");
        assert_eq!(header.mode, HeaderMode::CelsiusConversion);
    }

    #[test]
    fn no_header_is_unrecognized() {
        let path = write_temp("none", "title line\n1 2\n3 4\n");
        let header = infer_header(&path).unwrap();
        assert_eq!(header.mode, HeaderMode::Unrecognized);
        assert_eq!(header.x_label, "Unknown");
        assert_eq!(header.y_label, "Unknown");
    }

    #[test]
    fn header_must_start_the_line() {
        let path = write_temp("indented", "  \"A\" \"B\"\n");
        assert_eq!(infer_header(&path).unwrap().mode, HeaderMode::Unrecognized);
    }

    #[test]
    fn skips_rows_after_parsing() {
        let input = "\"title\" line\n\"Iteration\" \"Value\"\n1 10.5\n2 11.5 extra\n3 12.5\n";
        let series = parse_columns(input.as_bytes(), 2).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.x, vec![1.0, 2.0, 3.0]);
        assert_eq!(series.y, vec![10.5, 11.5, 12.5]);
        assert_eq!(series.last_y(), Some(12.5));
    }

    #[test]
    fn non_numeric_retained_token_is_an_error() {
        let input = "a b\nc d\n1 2\nx 3\n";
        match parse_columns(input.as_bytes(), 2) {
            Err(ReadError::InvalidNumber { line, token }) => {
                assert_eq!(line, 4);
                assert_eq!(token, "x");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn short_row_is_an_error_even_when_skipped() {
        let input = "title\n\"X\" \"Y\"\n1 2\n";
        assert!(matches!(
            parse_columns(input.as_bytes(), 2),
            Err(ReadError::MissingColumn { line: 1 })
        ));
    }

    #[test]
    fn blank_line_is_an_error() {
        let input = "a b\nc d\n1 2\n\n3 4\n";
        assert!(matches!(
            parse_columns(input.as_bytes(), 2),
            Err(ReadError::MissingColumn { line: 4 })
        ));
    }

    #[test]
    fn nothing_after_skip_is_empty() {
        assert!(matches!(parse_columns("a b\nc d\n".as_bytes(), 2), Err(ReadError::Empty)));
    }

    #[test]
    fn reads_from_disk() {
        let path = write_temp("disk", "h1 h2\nh3 h4\n0 273.15\n1 373.15\n");
        let series = read_series(&path, 2).unwrap();
        assert_eq!(series.y, vec![273.15, 373.15]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("spectral-history-loader-missing.out");
        assert!(matches!(read_series(&path, 2), Err(ReadError::Io(_))));
    }
}
