//! Check command implementation
//!
//! Prints the effective configuration after the file, environment and
//! command-line overrides have been applied and validated.

use serde::Serialize;
use tracing::info;

use super::{print_json, Context, OutputFormat};
use crate::config::GreeksConfig;
use crate::Result;

#[derive(Serialize)]
struct CheckReport<'a> {
    config: &'a GreeksConfig,
    strategy: String,
    leg_count: usize,
}

/// Run the check command
pub fn run(ctx: &Context) -> Result<()> {
    let strategy = ctx.strategy();
    let leg_count = ctx.evaluator().legs().len();
    info!("Configuration is valid");

    match ctx.format {
        OutputFormat::Json => print_json(&CheckReport {
            config: &ctx.config,
            strategy: strategy.selector.to_string(),
            leg_count,
        }),
        OutputFormat::Table => {
            println!("{}", toml::to_string_pretty(&ctx.config)?);
            println!("# strategy '{}' composes {} leg(s)", strategy.selector, leg_count);
            Ok(())
        }
    }
}
