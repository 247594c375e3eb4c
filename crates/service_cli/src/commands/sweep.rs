//! Sweep command implementation
//!
//! Without `--marker` the full series of every Greek is written (JSON), or
//! price and P&L per sample (table). With `--marker` the series are
//! interpolated at that display-unit position instead.

use pricer_models::greeks::GreeksResult;
use pricer_risk::scenarios::{FieldSeries, MarkerValue, ScenarioSweep, SweepAxis};
use serde::Serialize;
use tracing::info;

use super::{format_value, greeks_table, print_json, render_table, Context, OutputFormat};
use crate::{CliError, Result};

/// Arguments of the sweep command
#[derive(Debug, Clone, Copy)]
pub struct SweepArgs {
    /// Swept axis
    pub axis: SweepAxis,
    /// Sample count; the configured default when absent
    pub steps: Option<usize>,
    /// Price every sample at expiry
    pub expiry: bool,
    /// Marker position in display units (days, percent, or spot)
    pub marker: Option<f64>,
}

#[derive(Serialize)]
struct SweepReport {
    axis: SweepAxis,
    expiry: bool,
    x_values: Vec<f64>,
    display_x_values: Vec<f64>,
    fields: Vec<FieldSeries>,
}

#[derive(Serialize)]
struct MarkerReport {
    axis: SweepAxis,
    marker: f64,
    x: f64,
    series: Vec<MarkerValue>,
}

/// Run the sweep command
pub fn run(ctx: &Context, args: SweepArgs) -> Result<()> {
    let steps = args.steps.unwrap_or(ctx.config.engine.steps);
    if steps == 0 {
        return Err(CliError::InvalidArgument(
            "steps must be greater than 0".to_string(),
        ));
    }

    info!(axis = %args.axis, steps, expiry = args.expiry, "running sweep");
    let sweep = ctx.generator().sweep(
        &ctx.config.params,
        &ctx.strategy(),
        args.axis,
        steps,
        args.expiry,
    );

    match args.marker {
        Some(marker) => report_marker(ctx, &sweep, marker),
        None => report_series(ctx, &sweep, args.expiry),
    }
}

fn report_series(ctx: &Context, sweep: &ScenarioSweep, expiry: bool) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_json(&SweepReport {
            axis: sweep.axis,
            expiry,
            x_values: sweep.x_values.clone(),
            display_x_values: sweep.display_x_values(),
            fields: sweep.series_per_field(),
        }),
        OutputFormat::Table => {
            let headers: Vec<String> = std::iter::once(axis_header(sweep.axis))
                .chain(sweep.series.iter().flat_map(|s| {
                    [format!("{} price", s.name), format!("{} P&L", s.name)]
                }))
                .collect();
            let rows: Vec<Vec<String>> = sweep
                .display_x_values()
                .iter()
                .enumerate()
                .map(|(i, x)| {
                    std::iter::once(format!("{:.2}", x))
                        .chain(sweep.series.iter().flat_map(|s| {
                            let r = s.results[i];
                            [format_value(r.price), format_value(r.pnl.unwrap_or(f64::NAN))]
                        }))
                        .collect()
                })
                .collect();
            println!("{}", render_table(&headers, &rows));
            Ok(())
        }
    }
}

fn report_marker(ctx: &Context, sweep: &ScenarioSweep, marker: f64) -> Result<()> {
    let x = sweep.axis.from_display(marker);
    let values = sweep.marker(x);

    match ctx.format {
        OutputFormat::Json => print_json(&MarkerReport {
            axis: sweep.axis,
            marker,
            x,
            series: values,
        }),
        OutputFormat::Table => {
            println!("{} = {}", axis_header(sweep.axis), marker);
            let columns: Vec<(String, GreeksResult)> =
                values.into_iter().map(|v| (v.name, v.greeks)).collect();
            println!("{}", greeks_table(&columns));
            Ok(())
        }
    }
}

fn axis_header(axis: SweepAxis) -> String {
    match axis {
        SweepAxis::Spot => "Spot".to_string(),
        SweepAxis::VolTime => "Days".to_string(),
        SweepAxis::Volatility => "Vol %".to_string(),
        SweepAxis::Rate => "Rate %".to_string(),
    }
}
