//! FILENAME: app/src/cli.rs
// PURPOSE: Command-line front end over the screen backend.
// CONTEXT: Each subcommand replays the screen events a user would trigger:
// pick dimension and product, click a bucket, press export.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use sales_engine::{format_decimal, Dataset, FieldValue, SaleRecord, ALL_PRODUCTS};

use crate::chart::ChartType;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::logging::log_warn;
use crate::screen::SalesScreen;

#[derive(Parser, Debug)]
#[command(
    name = "sales-chart",
    version,
    about = "Summarize, drill into and export sales data"
)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset file (defaults to the bundled asset)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct Selection {
    /// Grouping dimension: "Month", "Week", "Day" or "Day of Week"
    #[arg(long)]
    pub dimension: Option<String>,

    /// Product id, or "All"
    #[arg(long, default_value = ALL_PRODUCTS)]
    pub product: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the summary series
    Summary {
        #[command(flatten)]
        selection: Selection,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the product picker entries
    Products,

    /// Print the raw records behind a bucket
    Drill {
        #[command(flatten)]
        selection: Selection,

        /// Bucket label, as shown on the chart
        #[arg(long)]
        label: String,
    },

    /// Write the records behind a bucket to the export file
    Export {
        #[command(flatten)]
        selection: Selection,

        #[arg(long)]
        label: String,

        /// Export directory (overrides the config)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Print the chart option JSON
    Chart {
        #[command(flatten)]
        selection: Selection,

        #[arg(long, value_enum)]
        chart_type: Option<ChartType>,
    },
}

impl Cli {
    /// Config file values with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<AppConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(path) = &self.dataset {
            config.dataset_path = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
            config.log_level_filter()?;
        }
        Ok(config)
    }
}

/// Runs one command, writing its output to `out`.
pub fn run<W: Write>(cli: &Cli, config: &AppConfig, out: &mut W) -> Result<(), AppError> {
    let dataset = Arc::new(crate::load_dataset(config)?);
    if dataset.is_empty() {
        log_warn!("CLI", "dataset has no records");
    }

    match &cli.command {
        Command::Summary { selection, json } => {
            let screen = open_screen(dataset, config, selection)?;
            if *json {
                serde_json::to_writer_pretty(&mut *out, screen.summary())?;
                writeln!(out)?;
            } else {
                writeln!(out, "Sales by {}", screen.dimension())?;
                for bucket in screen.summary() {
                    writeln!(out, "{}\t{}", bucket.label, format_total(bucket.total))?;
                }
            }
        }
        Command::Products => {
            let screen = SalesScreen::new(dataset, config);
            for option in screen.product_options() {
                writeln!(out, "{}\t{}", option.value, option.label)?;
            }
        }
        Command::Drill { selection, label } => {
            let mut screen = open_screen(dataset, config, selection)?;
            let records = screen.on_chart_click(label);
            writeln!(out, "Raw Data ({} records)", records.len())?;
            for record in records {
                writeln!(out, "{}", record_line(record))?;
            }
        }
        Command::Export {
            selection,
            label,
            out_dir,
        } => {
            let mut screen = open_screen(dataset, config, selection)?;
            screen.on_chart_click(label);
            let dir = out_dir.as_ref().unwrap_or(&config.export_dir);
            let path = screen.export(dir)?;
            writeln!(out, "{}", path.display())?;
        }
        Command::Chart {
            selection,
            chart_type,
        } => {
            let mut screen = open_screen(dataset, config, selection)?;
            if let Some(chart_type) = chart_type {
                screen.set_chart_type(*chart_type);
            }
            serde_json::to_writer_pretty(&mut *out, &screen.chart_option())?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn open_screen(
    dataset: Arc<Dataset>,
    config: &AppConfig,
    selection: &Selection,
) -> Result<SalesScreen, AppError> {
    let mut screen = SalesScreen::new(dataset, config);
    if let Some(name) = &selection.dimension {
        screen.select_dimension(name)?;
    }
    screen.select_product(&selection.product);
    Ok(screen)
}

/// Totals print with exactly two decimals.
fn format_total(total: rust_decimal::Decimal) -> String {
    format!("{:.2}", total)
}

/// One drill-down line: `Sale ID - Product ID - Total Sale Amount`.
fn record_line(record: &SaleRecord) -> String {
    let text = |value: Option<&FieldValue>| value.map(|v| v.to_string()).unwrap_or_default();
    format!(
        "{} - {} - {}",
        text(record.sale_id()),
        text(record.product_id()),
        format_decimal(&record.amount())
    )
}
