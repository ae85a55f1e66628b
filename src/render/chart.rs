use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::PathElement;
use plotters::series::LineSeries;
use plotters::style::colors::WHITE;
use plotters::style::{Color, RGBColor};

use super::{
    FONT_FAMILY, FONT_SIZE_AXIS_DESC, FONT_SIZE_AXIS_LABEL, FONT_SIZE_TITLE, GRID_COLOR,
    GRID_DASHES, LEGEND_MARGIN_PX, LEGEND_WIDTH, LINE_WIDTH_PLOT, PLOT_HEIGHT, PLOT_WIDTH,
    TIGHT_PAD_PX, X_TICKS, Y_TICKS, legend,
};

/// One line on the chart.
#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub points: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
}

/// Everything drawn into the image.
#[derive(Debug, Clone, Default)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<PlotSeries>,
}

impl ChartSpec {
    /// Data extent over all series, padded by 5% on each side.
    pub fn ranges(&self) -> (Range<f64>, Range<f64>) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for &(px, py) in self.series.iter().flat_map(|s| s.points.iter()) {
            if px.is_finite() {
                x = (x.0.min(px), x.1.max(px));
            }
            if py.is_finite() {
                y = (y.0.min(py), y.1.max(py));
            }
        }
        (padded_range(x.0, x.1), padded_range(y.0, y.1))
    }
}

/// Pad `[min, max]` by 5%, or by a fixed amount when it is (nearly) a point.
pub fn padded_range(min_val: f64, max_val: f64) -> Range<f64> {
    if !min_val.is_finite() || !max_val.is_finite() {
        return 0.0..1.0;
    }
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let span = max - min;
    let padding = if span < 1e-9 { 0.5 } else { span * 0.05 };
    (min - padding)..(max + padding)
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

/// Canvas height for `entries` legend rows: the chart height, grown when the
/// legend would run past the bottom edge.
pub fn canvas_height(entries: usize) -> u32 {
    let legend = (legend::legend_bottom(entries) + LEGEND_MARGIN_PX).max(0) as u32;
    PLOT_HEIGHT.max(legend)
}

/// Render `figure` and save it to `path`, cropped to its content.
pub fn render_chart(figure: &ChartSpec, path: &Path) -> Result<()> {
    let canvas = draw_canvas(figure)?;
    crop_to_content(&canvas, Rgb([255, 255, 255]), TIGHT_PAD_PX)
        .save(path)
        .with_context(|| format!("saving chart to {}", path.display()))?;
    log::info!("wrote chart to {}", path.display());
    Ok(())
}

/// Draw the axes and the legend panel into an uncropped RGB canvas.
///
/// The axes always take the top `PLOT_HEIGHT` pixels; the legend panel to
/// their right runs the full canvas height.
pub fn draw_canvas(figure: &ChartSpec) -> Result<RgbImage> {
    let height = canvas_height(figure.series.len());
    let mut buffer = vec![0u8; (PLOT_WIDTH * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (PLOT_WIDTH, height))
            .into_drawing_area();
        root.fill(&WHITE)?;
        let (plot_column, legend_area) = root.split_horizontally(PLOT_WIDTH - LEGEND_WIDTH);
        let (plot_area, _) = plot_column.split_vertically(PLOT_HEIGHT);
        draw_axes_and_series(&plot_area, figure)?;
        legend::draw_legend(&legend_area, &figure.series)?;
        root.present()?;
    }

    RgbImage::from_raw(PLOT_WIDTH, height, buffer)
        .context("chart buffer does not match the canvas size")
}

fn draw_axes_and_series(
    area: &DrawingArea<BitMapBackend, Shift>,
    figure: &ChartSpec,
) -> Result<()> {
    let (x_range, y_range) = figure.ranges();

    let mut chart = ChartBuilder::on(area)
        .caption(&figure.title, (FONT_FAMILY, FONT_SIZE_TITLE))
        .margin(15)
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(X_TICKS)
        .y_labels(Y_TICKS)
        .x_desc(&figure.x_label)
        .y_desc(&figure.y_label)
        .axis_desc_style((FONT_FAMILY, FONT_SIZE_AXIS_DESC))
        .label_style((FONT_FAMILY, FONT_SIZE_AXIS_LABEL))
        .draw()?;

    // Dashed grid at the tick positions, under the data.
    let grid_style = GRID_COLOR.stroke_width(1);
    let x_ticks = RangedCoordf64::from(x_range.clone()).key_points(X_TICKS);
    let y_ticks = RangedCoordf64::from(y_range.clone()).key_points(Y_TICKS);
    let vertical = x_ticks.iter().flat_map(|&x| {
        dashes(y_range.clone()).map(move |(y0, y1)| vec![(x, y0), (x, y1)])
    });
    let horizontal = y_ticks.iter().flat_map(|&y| {
        dashes(x_range.clone()).map(move |(x0, x1)| vec![(x0, y), (x1, y)])
    });
    chart.draw_series(
        vertical
            .chain(horizontal)
            .map(|segment| PathElement::new(segment, grid_style)),
    )?;

    for s in &figure.series {
        chart.draw_series(LineSeries::new(
            s.points.iter().copied(),
            s.color.stroke_width(LINE_WIDTH_PLOT),
        ))?;
    }
    Ok(())
}

/// Split `range` into `GRID_DASHES` dashes separated by equal gaps.
fn dashes(range: Range<f64>) -> impl Iterator<Item = (f64, f64)> {
    let step = (range.end - range.start) / (GRID_DASHES as f64 * 2.0);
    (0..GRID_DASHES).map(move |i| {
        let start = range.start + (i as f64 * 2.0) * step;
        (start, start + step)
    })
}

// ---------------------------------------------------------------------------
// Tight bounding box
// ---------------------------------------------------------------------------

/// Crop away uniform `background` borders, keeping `pad` pixels around the
/// content. A blank image is returned unchanged.
pub fn crop_to_content(img: &RgbImage, background: Rgb<u8>, pad: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    let Some((x0, y0, x1, y1)) = bounds else {
        return img.clone();
    };
    let left = x0.saturating_sub(pad);
    let top = y0.saturating_sub(pad);
    let right = (x1 + pad).min(width - 1);
    let bottom = (y1 + pad).min(height - 1);

    image::imageops::crop_imm(img, left, top, right - left + 1, bottom - top + 1).to_image()
}
