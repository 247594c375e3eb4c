//! Price command implementation
//!
//! Aggregate Greeks of the configured strategy at the base parameters, with
//! the weighted contribution of every leg.

use pricer_models::greeks::GreeksResult;
use pricer_models::instruments::ScalarParams;
use pricer_risk::{LegContribution, SweepOverrides};
use serde::Serialize;
use tracing::{info, warn};

use super::{greeks_table, print_json, Context, OutputFormat};
use crate::Result;

#[derive(Serialize)]
struct PriceReport<'a> {
    strategy: &'a str,
    params: ScalarParams,
    total: GreeksResult,
    legs: Vec<LegContribution>,
}

/// Run the price command
pub fn run(ctx: &Context) -> Result<()> {
    let strategy = ctx.strategy();
    let evaluator = ctx.evaluator();
    let base = *evaluator.base();
    info!(strategy = %strategy.selector, legs = evaluator.legs().len(), "pricing strategy");

    for leg in evaluator.legs() {
        let input = leg.pricing_input(base.spot, base.dividend, base.textbook_mode);
        for warning in input.warnings() {
            warn!(leg = %leg, "{}", warning);
        }
    }

    let total = evaluator.evaluate_pnl(&SweepOverrides::default(), evaluator.initial_cost());
    let legs = evaluator.leg_breakdown();

    match ctx.format {
        OutputFormat::Json => print_json(&PriceReport {
            strategy: strategy.selector.name(),
            params: base,
            total,
            legs,
        }),
        OutputFormat::Table => {
            println!("Strategy: {}", strategy.selector);
            for (i, contribution) in legs.iter().enumerate() {
                println!("  Leg {}: {}", i + 1, contribution.leg);
            }
            let columns: Vec<(String, GreeksResult)> = legs
                .iter()
                .enumerate()
                .map(|(i, c)| (format!("Leg {}", i + 1), c.greeks))
                .chain(std::iter::once(("Total".to_string(), total)))
                .collect();
            println!("{}", greeks_table(&columns));
            Ok(())
        }
    }
}
