//! Surface command implementation

use pricer_models::greeks::GreekKind;
use pricer_risk::SurfaceResult;
use tracing::info;

use super::{format_value, print_json, render_table, Context, OutputFormat};
use crate::{CliError, Result};

/// Run the surface command
pub fn run(ctx: &Context, field: GreekKind, grid: Option<usize>) -> Result<()> {
    let grid_size = grid.unwrap_or(ctx.config.engine.grid_size);
    if grid_size == 0 {
        return Err(CliError::InvalidArgument(
            "grid must be greater than 0".to_string(),
        ));
    }

    info!(field = %field, grid_size, "generating surface");
    let surface = ctx
        .generator()
        .surface(&ctx.config.params, &ctx.strategy(), field, grid_size);

    match ctx.format {
        OutputFormat::Json => print_json(&surface),
        OutputFormat::Table => {
            print_summary(&surface);
            Ok(())
        }
    }
}

fn print_summary(surface: &SurfaceResult) {
    let values = surface.points.iter().map(|p| p.2).filter(|v| v.is_finite());
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    println!("Surface: {} on a {}x{} grid", surface.field, surface.grid_size, surface.grid_size);
    println!(
        "  spot  {:.2} .. {:.2}",
        surface.spot_range.0, surface.spot_range.1
    );
    println!(
        "  time  {:.4} .. {:.4} years",
        surface.time_range.0, surface.time_range.1
    );
    println!("  value {} .. {}", format_value(min), format_value(max));

    if let Some(breakevens) = &surface.breakevens {
        let headers = vec!["Time".to_string(), "Breakeven spot".to_string()];
        let rows: Vec<Vec<String>> = breakevens
            .iter()
            .map(|p| vec![format!("{:.4}", p.1), format!("{:.4}", p.0)])
            .collect();
        println!("{}", render_table(&headers, &rows));
    }
}
