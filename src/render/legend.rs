use anyhow::Result;
use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{PathElement, Rectangle, Text};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont};

use super::chart::PlotSeries;
use super::{FONT_FAMILY, FONT_SIZE_LEGEND, LINE_WIDTH_LEGEND};

/// Pixels from the top of the legend panel to the first entry, roughly the
/// top of the axes once the chart caption is laid out.
pub const LEGEND_TOP: i32 = 50;
pub const ROW_HEIGHT: i32 = 18;
pub const PADDING: i32 = 8;
pub const SWATCH_LENGTH: i32 = 24;

/// Bottom edge of the legend box for `entries` rows, in panel pixels.
pub fn legend_bottom(entries: usize) -> i32 {
    LEGEND_TOP + entries as i32 * ROW_HEIGHT + 2 * PADDING
}

/// Vertical centre of legend row `index`, in panel pixels.
pub fn row_center(index: usize) -> i32 {
    LEGEND_TOP + PADDING + index as i32 * ROW_HEIGHT + ROW_HEIGHT / 2
}

/// Draw one entry per series (swatch + label) in a framed box at the top of
/// `area`, which sits to the right of the axes. `area` must be at least
/// [`legend_bottom`] pixels tall.
pub fn draw_legend(
    area: &DrawingArea<BitMapBackend, Shift>,
    series: &[PlotSeries],
) -> Result<()> {
    if series.is_empty() {
        return Ok(());
    }

    let (x_range, _) = area.get_pixel_range();
    let width = x_range.end - x_range.start;

    let left = PADDING;
    let right = width - PADDING;
    let bottom = legend_bottom(series.len());

    area.draw(&Rectangle::new([(left, LEGEND_TOP), (right, bottom)], WHITE.filled()))?;
    area.draw(&Rectangle::new(
        [(left, LEGEND_TOP), (right, bottom)],
        BLACK.mix(0.4).stroke_width(1),
    ))?;

    let font = (FONT_FAMILY, FONT_SIZE_LEGEND).into_font().color(&BLACK);
    let swatch_start = left + PADDING;
    for (i, s) in series.iter().enumerate() {
        let mid = row_center(i);
        area.draw(&PathElement::new(
            vec![(swatch_start, mid), (swatch_start + SWATCH_LENGTH, mid)],
            s.color.stroke_width(LINE_WIDTH_LEGEND),
        ))?;
        area.draw(&Text::new(
            s.label.clone(),
            (swatch_start + SWATCH_LENGTH + 6, mid - FONT_SIZE_LEGEND / 2),
            font.clone(),
        ))?;
    }
    Ok(())
}
