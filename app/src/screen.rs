//! FILENAME: app/src/screen.rs
// PURPOSE: Headless state of the sales chart screen.
// CONTEXT: Owns the user's selections and the derived summary/drill-down
// sets. Every event replaces derived state whole; the dataset handle is
// shared and never mutated.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sales_engine::{
    drill_down, encode_csv, summarize, Dataset, Dimension, ProductFilter, SaleRecord,
    SummaryBucket, ALL_PRODUCTS,
};
use sales_persistence::save_export;
use serde::Serialize;
use serde_json::Value;

use crate::chart::{build_chart_option, ChartType};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::logging::{log_debug, log_enter_info, log_exit_info, log_info};

/// Picker label for the "all products" sentinel.
pub const ALL_PRODUCTS_LABEL: &str = "All Products";

/// One product picker entry: the value passed back to `select_product`
/// and the text shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductOption {
    pub value: String,
    pub label: String,
}

impl ProductOption {
    fn product(id: String) -> Self {
        ProductOption {
            label: format!("Product {}", id),
            value: id,
        }
    }
}

pub struct SalesScreen {
    dataset: Arc<Dataset>,
    dimension: Dimension,
    product_filter: ProductFilter,
    chart_type: ChartType,
    export_file_name: String,

    /// Chart series for the current selections
    summary: Vec<SummaryBucket>,

    /// Records behind the last clicked bucket; empty until a click
    drill_down: Vec<SaleRecord>,
}

impl SalesScreen {
    /// Opens the screen with the configured defaults and computes the
    /// initial summary.
    pub fn new(dataset: Arc<Dataset>, config: &AppConfig) -> Self {
        let mut screen = SalesScreen {
            dataset,
            dimension: config.default_dimension,
            product_filter: ProductFilter::All,
            chart_type: config.default_chart_type,
            export_file_name: config.export_file_name.clone(),
            summary: Vec::new(),
            drill_down: Vec::new(),
        };
        screen.refresh();
        screen
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn product_filter(&self) -> &ProductFilter {
        &self.product_filter
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn summary(&self) -> &[SummaryBucket] {
        &self.summary
    }

    pub fn drill_down(&self) -> &[SaleRecord] {
        &self.drill_down
    }

    /// Product picker entries: the "All" sentinel, then every product id.
    pub fn product_options(&self) -> Vec<ProductOption> {
        let mut options = vec![ProductOption {
            value: ALL_PRODUCTS.to_string(),
            label: ALL_PRODUCTS_LABEL.to_string(),
        }];
        options.extend(self.dataset.product_ids().into_iter().map(ProductOption::product));
        options
    }

    // ========================================================================
    // EVENTS
    // ========================================================================

    /// Changes the grouping dimension. Re-selecting the current dimension
    /// keeps the drill-down set.
    pub fn set_dimension(&mut self, dimension: Dimension) {
        if dimension != self.dimension {
            self.dimension = dimension;
            self.refresh();
        }
    }

    /// Picker form of `set_dimension`, taking the dimension's field name.
    pub fn select_dimension(&mut self, name: &str) -> Result<(), AppError> {
        let dimension = name.parse::<Dimension>()?;
        self.set_dimension(dimension);
        Ok(())
    }

    pub fn set_product_filter(&mut self, filter: ProductFilter) {
        if filter != self.product_filter {
            self.product_filter = filter;
            self.refresh();
        }
    }

    /// Picker form of `set_product_filter`; `"All"` clears the filter.
    pub fn select_product(&mut self, selection: &str) {
        self.set_product_filter(ProductFilter::from_selection(selection));
    }

    /// Bar/line toggle. Leaves the summary and drill-down untouched.
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    /// Handles the label posted back by the chart and replaces the
    /// drill-down set.
    pub fn on_chart_click(&mut self, label: &str) -> &[SaleRecord] {
        self.drill_down = drill_down(
            self.dataset.records(),
            self.dimension,
            label,
            &self.product_filter,
        );
        log_info!(
            "SCREEN",
            "click label={:?} dimension={} records={}",
            label,
            self.dimension,
            self.drill_down.len()
        );
        &self.drill_down
    }

    // ========================================================================
    // EXPORT
    // ========================================================================

    /// The export control is only offered for a non-empty drill-down.
    pub fn can_export(&self) -> bool {
        !self.drill_down.is_empty()
    }

    pub fn export_csv(&self) -> Result<String, AppError> {
        Ok(encode_csv(&self.drill_down)?)
    }

    /// Writes the drill-down set to `dir` for hand-off to the share sheet.
    pub fn export(&self, dir: &Path) -> Result<PathBuf, AppError> {
        log_enter_info!("SCREEN", "export", "dir={:?} records={}", dir, self.drill_down.len());
        let path = save_export(dir, &self.export_file_name, &self.drill_down)?;
        log_exit_info!("SCREEN", "export", "path={:?}", path);
        Ok(path)
    }

    pub fn chart_option(&self) -> Value {
        build_chart_option(self.dimension, self.chart_type, &self.summary)
    }

    fn refresh(&mut self) {
        self.summary = summarize(self.dataset.records(), self.dimension, &self.product_filter);
        self.drill_down.clear();
        log_debug!(
            "SCREEN",
            "summary dimension={} product={} buckets={}",
            self.dimension,
            self.product_filter.as_selection(),
            self.summary.len()
        );
    }
}
