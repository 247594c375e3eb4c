//! Legs command implementation

use pricer_core::types::to_percent;
use pricer_models::instruments::LegDefinition;

use super::{print_json, render_table, Context, OutputFormat};
use crate::Result;

/// Run the legs command
pub fn run(ctx: &Context) -> Result<()> {
    let evaluator = ctx.evaluator();
    let legs = evaluator.legs();

    match ctx.format {
        OutputFormat::Json => print_json(legs),
        OutputFormat::Table => {
            if legs.is_empty() {
                println!("No legs for strategy '{}'", ctx.strategy().selector);
                return Ok(());
            }
            println!("{}", legs_table(legs));
            Ok(())
        }
    }
}

fn legs_table(legs: &[LegDefinition]) -> String {
    let headers: Vec<String> = [
        "#", "Kind", "Qty", "Strike", "Trading d", "Calendar d", "Vol %", "Rate %",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();
    let rows: Vec<Vec<String>> = legs
        .iter()
        .enumerate()
        .map(|(i, leg)| {
            vec![
                (i + 1).to_string(),
                leg.kind.to_string(),
                format!("{:+}", leg.quantity),
                format!("{:.2}", leg.strike),
                format!("{:.1}", leg.trading_days()),
                format!("{:.1}", leg.calendar_days()),
                format!("{:.2}", to_percent(leg.volatility)),
                format!("{:.2}", to_percent(leg.rate)),
            ]
        })
        .collect();
    render_table(&headers, &rows)
}
