use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};

use crate::color;
use crate::config::RunConfig;
use crate::data::loader::{infer_header, read_series};
use crate::data::model::{Header, HeaderMode, SummaryRow};
use crate::data::scan::{list_files, natural_sort};
use crate::data::summary::write_summary_file;
use crate::render::{ChartSpec, PlotSeries, render_chart};

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of files plotted.
    pub files: usize,
    pub header: Header,
    /// Final values, in plotting order.
    pub summary: Vec<SummaryRow>,
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Plot every monitor file of `config.data_dir` on one chart and write the
/// final-value table.
///
/// All files are read before anything is written, so a bad file leaves no
/// artifacts behind.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let started = Instant::now();

    let files = natural_sort(list_files(&config.data_dir, &config.extension)?);
    let Some(first) = files.first() else {
        bail!(
            "no '{}' files found in {}",
            config.extension,
            config.data_dir.display()
        );
    };

    let header = infer_header(&config.data_dir.join(first))?;
    let (chart, summary) = build_chart(config, &files, &header)?;

    write_summary_file(&config.summary_path, &summary)?;
    log::info!("wrote summary table to {}", config.summary_path.display());
    render_chart(&chart, &config.plot_path)?;

    Ok(RunReport {
        files: files.len(),
        header,
        summary,
        elapsed: started.elapsed(),
    })
}

/// Read every file in order and assemble the chart and table rows.
fn build_chart(
    config: &RunConfig,
    files: &[String],
    header: &Header,
) -> Result<(ChartSpec, Vec<SummaryRow>)> {
    let count = files.len();
    let mut series = Vec::with_capacity(count);
    let mut summary = Vec::with_capacity(count);
    let palette = color::spectral_palette(count);

    for (index, name) in files.iter().enumerate() {
        let path = config.data_dir.join(name);
        let mut data = read_series(&path, config.lineskip)
            .with_context(|| format!("reading {}", path.display()))?;

        if header.mode == HeaderMode::CelsiusConversion {
            data.kelvin_to_celsius();
        }

        let label = config.label_for(name);
        log::debug!(
            "{name}: {} rows, colour position {:.3}",
            data.len(),
            color::gradient_position(index, count)
        );

        let last = data.last_y().context("series has no rows")?;
        summary.push(SummaryRow::new(label.clone(), last));
        series.push(PlotSeries {
            points: data.points().collect(),
            label,
            color: palette[index],
        });
    }

    let chart = ChartSpec {
        title: header.title().to_string(),
        x_label: header.x_label.clone(),
        y_label: header.y_label.clone(),
        series,
    };
    Ok((chart, summary))
}
