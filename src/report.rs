//! Memoized front-end over the aggregation functions.
//!
//! The UI re-requests charts on every toggle, and the loaded tables are
//! immutable for the process lifetime, so each (chart, flags) request is
//! computed once and then served from the cache.

use std::collections::HashMap;
use std::sync::Arc;

use crate::aggregate::chart::ChartData;
use crate::aggregate::correlation::{
    self, CorrelationMatrix, LevelCorrelation, correlation_matrix,
};
use crate::aggregate::coverage::coverage_chart;
use crate::aggregate::metric::Metric;
use crate::aggregate::summary::summarize;
use crate::error::ReportError;
use crate::records::Dataset;

/// A chart request as the UI issues it: a metric plus its toggle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartRequest {
    Summary {
        metric: Metric,
        show_reference_markers: bool,
    },
    Coverage {
        zoom: bool,
    },
}

pub struct Report {
    dataset: Dataset,
    charts: HashMap<ChartRequest, Arc<ChartData>>,
    correlation: Option<Arc<CorrelationMatrix>>,
}

impl Report {
    pub fn new(dataset: Dataset) -> Self {
        Report {
            dataset,
            charts: HashMap::new(),
            correlation: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Computes (or replays) the chart for a request.
    pub fn chart(&mut self, request: ChartRequest) -> Arc<ChartData> {
        if let Some(hit) = self.charts.get(&request) {
            return hit.clone();
        }

        let chart = match request {
            ChartRequest::Summary {
                metric,
                show_reference_markers,
            } => summarize(&self.dataset.videos, metric, show_reference_markers),
            ChartRequest::Coverage { zoom } => coverage_chart(&self.dataset.coverage, zoom),
        };

        let chart = Arc::new(chart);
        self.charts.insert(request, chart.clone());
        chart
    }

    /// The full correlation matrix, computed at most once per process.
    pub fn correlation(&mut self) -> Arc<CorrelationMatrix> {
        if let Some(matrix) = &self.correlation {
            return matrix.clone();
        }
        let matrix = Arc::new(correlation_matrix(&self.dataset.metrics));
        self.correlation = Some(matrix.clone());
        matrix
    }

    pub fn level_correlations(
        &mut self,
        sort_by_magnitude: bool,
    ) -> Result<Vec<LevelCorrelation>, ReportError> {
        let matrix = self.correlation();
        correlation::level_correlations(&matrix, sort_by_magnitude)
    }
}
