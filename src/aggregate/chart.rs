//! Chart output contract shared with the rendering front-end.
//!
//! The aggregator hands the renderer a flat row table plus an optional
//! marker list; all visual encoding, legends, and interaction belong to
//! the renderer.

use serde::Serialize;

use crate::records::Level;

/// One chart point: a bin, a curve sample, or a category share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    /// Bin center, frequency rank, or category index.
    pub x: f64,
    /// Count, coverage percentage, or median share.
    pub y: f64,
    pub level: Level,
    /// Tooltip text: a bin range, a word, or a category name.
    pub label: String,
}

/// A per-level reference line, drawn only when the matching UI toggle
/// is on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub level: Level,
    pub value: f64,
}

/// Everything the renderer needs for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub rows: Vec<ChartRow>,
    pub markers: Vec<Marker>,
}

/// Shared chart template: titles and axis labels declared once instead
/// of repeated in every chart function.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    title: String,
    x_title: String,
    y_title: String,
}

impl ChartSpec {
    pub fn new(title: &str, x_title: &str, y_title: &str) -> Self {
        ChartSpec {
            title: title.to_string(),
            x_title: x_title.to_string(),
            y_title: y_title.to_string(),
        }
    }

    pub fn build(&self, rows: Vec<ChartRow>, markers: Vec<Marker>) -> ChartData {
        ChartData {
            title: self.title.clone(),
            x_title: self.x_title.clone(),
            y_title: self.y_title.clone(),
            rows,
            markers,
        }
    }
}
