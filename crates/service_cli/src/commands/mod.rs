//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Results go to stdout as
//! JSON or as a box-drawn table; logs go to stderr.

pub mod check;
pub mod legs;
pub mod price;
pub mod surface;
pub mod sweep;

use clap::ValueEnum;
use pricer_models::greeks::{GreekKind, GreeksResult};
use pricer_models::instruments::Strategy;
use pricer_risk::{ScenarioGenerator, StrategyEvaluator};
use serde::Serialize;

use crate::config::GreeksConfig;
use crate::Result;

/// Output format of every command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable table
    Table,
}

/// Validated configuration shared by the commands
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective configuration
    pub config: GreeksConfig,
    /// Requested output format
    pub format: OutputFormat,
}

impl Context {
    /// Configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.config.strategy.to_strategy()
    }

    /// Evaluator over the base parameter set.
    pub fn evaluator(&self) -> StrategyEvaluator {
        StrategyEvaluator::new(self.config.params.base(), &self.strategy())
    }

    /// Scenario generator using the configured parallel threshold.
    pub fn generator(&self) -> ScenarioGenerator {
        ScenarioGenerator::new(self.config.engine.parallel())
    }
}

/// Prints any serialisable value as pretty JSON.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One row per Greek, one column per labelled result.
pub(crate) fn greeks_table(columns: &[(String, GreeksResult)]) -> String {
    let headers: Vec<String> = std::iter::once("Greek".to_string())
        .chain(columns.iter().map(|(name, _)| name.clone()))
        .collect();
    let rows: Vec<Vec<String>> = GreekKind::ALL
        .iter()
        .filter(|&&kind| kind != GreekKind::Pnl || columns.iter().any(|(_, r)| r.pnl.is_some()))
        .map(|&kind| {
            std::iter::once(kind.to_string())
                .chain(columns.iter().map(|(_, r)| format_value(r.get(kind))))
                .collect()
        })
        .collect();
    render_table(&headers, &rows)
}

/// Fixed-precision rendering shared by every table.
pub(crate) fn format_value(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{:.6}", value)
    }
}

/// Renders a box-drawn table sized to its widest cells.
pub(crate) fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = w.saturating_sub(cell.chars().count());
                format!(" {}{} ", cell, " ".repeat(pad))
            })
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let mut out = vec![border("┌", "┬", "┐"), line(headers), border("├", "┼", "┤")];
    out.extend(rows.iter().map(|row| line(row.as_slice())));
    out.push(border("└", "┴", "┘"));
    out.join("\n")
}
