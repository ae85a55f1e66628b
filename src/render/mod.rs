/// Rendering: one combined line chart with a legend panel on its right,
/// cropped to its content before saving.

pub mod chart;
pub mod legend;

use plotters::style::RGBColor;

pub use chart::{ChartSpec, PlotSeries, render_chart};

// Canvas
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 800;
pub const LEGEND_WIDTH: u32 = 260;
/// Blank space kept below the legend box when the canvas grows to fit it.
pub const LEGEND_MARGIN_PX: i32 = 20;
/// Border kept around the content when cropping.
pub const TIGHT_PAD_PX: u32 = 8;

// Fonts
pub const FONT_FAMILY: &str = "sans-serif";
pub const FONT_SIZE_TITLE: i32 = 26;
pub const FONT_SIZE_AXIS_DESC: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 15;
pub const FONT_SIZE_LEGEND: i32 = 13;

// Lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const GRID_COLOR: RGBColor = RGBColor(176, 176, 176);
/// Dashes per grid line.
pub const GRID_DASHES: usize = 60;

pub const X_TICKS: usize = 10;
pub const Y_TICKS: usize = 8;
