//! Integration tests: strategy sweeps and surfaces through the public API.

use approx::assert_relative_eq;
use pricer_models::analytical::{BlackScholes, PricingInput};
use pricer_models::greeks::GreekKind;
use pricer_models::instruments::{
    LegDefinition, OptionKind, OptionParams, Strategy, StrategySelector,
};
use pricer_risk::{
    ParallelConfig, ScenarioGenerator, StrategyEvaluator, SweepAxis, SweepOverrides,
};
use proptest::prelude::*;

// ========================================
// Vertical spreads at expiry
// ========================================

#[test]
fn test_vertical_call_spread_expiry_payoff() {
    let params = OptionParams::new(100.0, 100.0, 0.25, 0.2, 0.05);
    let strategy = Strategy::new(StrategySelector::VerticalCallSpread).with_width(10.0);
    let sweep = ScenarioGenerator::default().sweep(&params, &strategy, SweepAxis::Spot, 101, true);

    assert_relative_eq!(sweep.marker(80.0)[0].greeks.price, 0.0, epsilon = 0.1);
    assert_relative_eq!(sweep.marker(130.0)[0].greeks.price, 10.0, epsilon = 0.1);
    assert_relative_eq!(sweep.marker(150.0)[0].greeks.price, 10.0, epsilon = 0.1);
}

#[test]
fn test_vertical_call_spread_near_zero_tenor() {
    let params = OptionParams::new(100.0, 100.0, 0.001, 0.2, 0.05);
    let evaluator =
        StrategyEvaluator::new(params.base(), &Strategy::new(StrategySelector::VerticalCallSpread));

    let low = evaluator.evaluate(&SweepOverrides::default().with_spot(80.0));
    let high = evaluator.evaluate(&SweepOverrides::default().with_spot(130.0));
    assert_relative_eq!(low.price, 0.0, epsilon = 0.1);
    assert_relative_eq!(high.price, 10.0, epsilon = 0.1);
}

#[test]
fn test_vertical_put_spread_expiry_payoff() {
    let params = OptionParams::new(100.0, 100.0, 0.25, 0.2, 0.05);
    let strategy = Strategy::new(StrategySelector::VerticalPutSpread);
    let sweep = ScenarioGenerator::default().sweep(&params, &strategy, SweepAxis::Spot, 101, true);

    assert_relative_eq!(sweep.marker(80.0)[0].greeks.price, 10.0, epsilon = 0.1);
    assert_relative_eq!(sweep.marker(130.0)[0].greeks.price, 0.0, epsilon = 0.1);
}

// ========================================
// Multi-tenor sweeps
// ========================================

#[test]
fn test_calendar_time_sweep_keeps_expiry_gap() {
    let params = OptionParams::new(100.0, 100.0, 0.25, 0.2, 0.02);
    let strategy = Strategy::new(StrategySelector::CalendarSpread);
    let sweep = ScenarioGenerator::default().sweep(&params, &strategy, SweepAxis::VolTime, 6, false);
    let gap = 30.0 / 365.0;

    for (x, result) in sweep.x_values.iter().zip(&sweep.series[0].results) {
        let near = BlackScholes::price(
            &PricingInput::new(100.0, 100.0, *x, 0.2, 0.02).with_discount_time(*x),
            OptionKind::Call,
        );
        let far = BlackScholes::price(
            &PricingInput::new(100.0, 100.0, x + gap, 0.2, 0.02).with_discount_time(x + gap),
            OptionKind::Call,
        );
        assert_relative_eq!(result.price, far - near, epsilon = 1e-9);
    }
}

#[test]
fn test_custom_legs_match_generated_single() {
    let params = OptionParams::new(100.0, 95.0, 0.5, 0.25, 0.03);
    let custom = Strategy::new(StrategySelector::Custom(vec![LegDefinition::new(
        OptionKind::Call,
        1.0,
        95.0,
        0.5,
        0.25,
        0.03,
    )]));

    let generator = ScenarioGenerator::default();
    let from_custom = generator.sweep(&params, &custom, SweepAxis::Volatility, 15, false);
    let from_single = generator.sweep(&params, &Strategy::default(), SweepAxis::Volatility, 15, false);

    for (a, b) in from_custom.series[0].results.iter().zip(&from_single.series[0].results) {
        assert_relative_eq!(a.price, b.price, epsilon = 1e-12);
        assert_relative_eq!(a.vega, b.vega, epsilon = 1e-12);
    }
}

#[test]
fn test_unrecognised_strategy_sweeps_to_zero() {
    let params = OptionParams::new(100.0, 100.0, 0.25, 0.2, 0.05);
    let strategy = Strategy::new(StrategySelector::from_name("jade_lizard"));
    let sweep = ScenarioGenerator::default().sweep(&params, &strategy, SweepAxis::Spot, 9, false);

    for result in &sweep.series[0].results {
        assert_eq!(result.price, 0.0);
        assert_eq!(result.delta, 0.0);
        assert_eq!(result.pnl, Some(0.0));
    }
}

// ========================================
// Surfaces
// ========================================

#[test]
fn test_long_straddle_breakevens_on_shortest_row() {
    let params = OptionParams::new(100.0, 100.0, 1.0, 0.2, 0.0);
    let strategy = Strategy::new(StrategySelector::Straddle);
    let surface = ScenarioGenerator::default().surface(&params, &strategy, GreekKind::Pnl, 41);

    let cost = StrategyEvaluator::new(params.base(), &strategy).initial_cost();
    assert!(cost > 0.0);

    let row = surface.breakevens_at(surface.time_range.0);
    assert_eq!(row.len(), 2);
    assert!(row[0].0 < 100.0 && row[1].0 > 100.0);
    assert_relative_eq!(100.0 - row[0].0, row[1].0 - 100.0, epsilon = 0.1);
}

#[test]
fn test_long_straddle_breakevens_on_base_tenor_row() {
    // t = 0.5 sits on row 44 of a 100-node grid over [0.1, 1.0]
    let params = OptionParams::new(100.0, 100.0, 0.5, 0.2, 0.0);
    let strategy = Strategy::new(StrategySelector::Straddle);
    let surface = ScenarioGenerator::default().surface(&params, &strategy, GreekKind::Pnl, 100);

    let base_row = surface.row(44);
    let t = base_row[0].1;
    assert_relative_eq!(t, 0.5, epsilon = 1e-9);

    // With r = q = 0 the P&L minimum is at K·exp(-σ²t/2), just below K,
    // so both crossings bracket that point rather than the strike.
    let minimum = 100.0 * (-0.5 * 0.2 * 0.2 * 0.5_f64).exp();
    let crossings = surface.breakevens_at(t);
    assert_eq!(crossings.len(), 2);
    let (lower, upper) = (crossings[0].0, crossings[1].0);
    assert!(lower < minimum && minimum < upper);
    assert!(upper < 100.0 + 100.0 / 99.0);
    assert_relative_eq!((lower + upper) / 2.0, minimum, epsilon = 0.01);
    assert_relative_eq!(lower, 98.137, epsilon = 0.01);
    assert_relative_eq!(upper, 99.873, epsilon = 0.01);

    for p in base_row.iter().filter(|p| p.0 > lower && p.0 < upper) {
        assert!(p.2 < 0.0);
    }
}

#[test]
fn test_surface_serialises_points_as_triples() {
    let params = OptionParams::new(100.0, 100.0, 0.5, 0.2, 0.0);
    let generator = ScenarioGenerator::default();

    let pnl = generator.surface(&params, &Strategy::default(), GreekKind::Pnl, 4);
    let json = serde_json::to_value(&pnl).unwrap();
    assert_eq!(json["field"], "pnl");
    assert_eq!(json["points"].as_array().unwrap().len(), 16);
    assert_eq!(json["points"][0].as_array().unwrap().len(), 3);
    assert!(json.get("breakevens").is_some());

    let gamma = generator.surface(&params, &Strategy::default(), GreekKind::Gamma, 4);
    let json = serde_json::to_value(&gamma).unwrap();
    assert!(json.get("breakevens").is_none());
}

// ========================================
// Parallel execution
// ========================================

#[test]
fn test_parallel_output_matches_sequential() {
    let params = OptionParams::new(100.0, 100.0, 0.25, 0.2, 0.05).with_volatility(vec![0.15, 0.3]);
    let strategy = Strategy::new(StrategySelector::IronCondor);
    let parallel = ScenarioGenerator::new(ParallelConfig::new(1));
    let sequential = ScenarioGenerator::new(ParallelConfig::sequential());

    assert_eq!(
        parallel.sweep(&params, &strategy, SweepAxis::Spot, 64, false),
        sequential.sweep(&params, &strategy, SweepAxis::Spot, 64, false)
    );
    assert_eq!(
        parallel.surface(&params, &strategy, GreekKind::Pnl, 20),
        sequential.surface(&params, &strategy, GreekKind::Pnl, 20)
    );
}

// ========================================
// Properties
// ========================================

proptest! {
    #[test]
    fn prop_sweep_axis_strictly_increasing(
        strike in 20.0..300.0_f64,
        rate in 0.0..0.3_f64,
        steps in 2usize..60,
        axis_index in 0usize..4,
    ) {
        let params = OptionParams::new(100.0, strike, 0.25, 0.2, rate);
        let axis = SweepAxis::ALL[axis_index];
        let sweep = ScenarioGenerator::default().sweep(&params, &Strategy::default(), axis, steps, false);

        prop_assert_eq!(sweep.x_values.len(), steps);
        prop_assert!(sweep.x_values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_marker_within_series_bounds(
        strike in 50.0..200.0_f64,
        offset in -0.7..0.7_f64,
        steps in 2usize..40,
    ) {
        let params = OptionParams::new(strike, strike, 0.25, 0.25, 0.03);
        let strategy = Strategy::new(StrategySelector::IronCondor).with_width(strike * 0.05);
        let sweep = ScenarioGenerator::default().sweep(&params, &strategy, SweepAxis::Spot, steps, false);

        let x = strike * (1.0 + offset);
        for (series, marker) in sweep.series.iter().zip(sweep.marker(x)) {
            let prices = series.values(GreekKind::Price);
            let lo = prices.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(marker.greeks.price >= lo - 1e-9 && marker.greeks.price <= hi + 1e-9);
        }
    }

    #[test]
    fn prop_parallel_surface_matches_sequential(grid_size in 1usize..12) {
        let params = OptionParams::new(100.0, 100.0, 0.75, 0.3, 0.02);
        let strategy = Strategy::new(StrategySelector::Butterfly);
        let parallel = ScenarioGenerator::new(ParallelConfig::new(1));
        let sequential = ScenarioGenerator::new(ParallelConfig::sequential());

        prop_assert_eq!(
            parallel.surface(&params, &strategy, GreekKind::Pnl, grid_size),
            sequential.surface(&params, &strategy, GreekKind::Pnl, grid_size)
        );
    }

    #[test]
    fn prop_straddle_breakevens_symmetric_without_carry(
        strike in 20.0..300.0_f64,
        vol_time in 0.5..1.5_f64,
        volatility in 0.1..0.4_f64,
    ) {
        let params = OptionParams::new(strike, strike, vol_time, volatility, 0.0);
        let strategy = Strategy::new(StrategySelector::Straddle);
        let surface = ScenarioGenerator::default().surface(&params, &strategy, GreekKind::Pnl, 41);

        let row = surface.breakevens_at(surface.time_range.0);
        prop_assert_eq!(row.len(), 2);
        prop_assert!(row[0].0 < strike && strike < row[1].0);
        prop_assert!(((row[0].0 + row[1].0) / 2.0 - strike).abs() < 0.01 * strike);
    }
}
