mod common;

use approx::assert_relative_eq;

use common::SCENARIO_COST;
use lp_duality::{create_solver, solve_pair, sweep_cost, LoadedProblem, Report, SolverType};

fn load_scenario() -> LoadedProblem {
    LoadedProblem::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/data/problem.json")).unwrap()
}

#[test]
fn test_report_benefits_add_up_to_profit() {
    let problem = load_scenario();
    let solver = create_solver(SolverType::default());
    let pair = solve_pair(&problem.definition, solver.as_ref(), 1e-6).unwrap();

    let report = Report::build(&problem, &pair, None).unwrap();

    assert_eq!(report.dual.prices.len(), 5);
    assert_eq!(report.dual.prices[0].id, "rifles");
    let benefits: f64 = report.dual.prices.iter().map(|p| p.benefit).sum();
    assert_relative_eq!(benefits, SCENARIO_COST, max_relative = 1e-6);

    let line_costs: f64 = report.primal.lots.iter().map(|l| l.line_cost).sum();
    assert_relative_eq!(line_costs, SCENARIO_COST, max_relative = 1e-6);
    assert!(report.comparison.consistent);
}

#[test]
fn test_report_serializes_sweep_rows_in_order() {
    let problem = load_scenario();
    let solver = create_solver(SolverType::default());
    let pair = solve_pair(&problem.definition, solver.as_ref(), 1e-6).unwrap();
    let points = sweep_cost(&problem.definition, 0, &[5.0, 10.0], solver.as_ref(), false).unwrap();

    let json = Report::build(&problem, &pair, Some((0, points.as_slice())))
        .unwrap()
        .to_json_pretty()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let rows = value["sensitivity"]["rows"].as_array().unwrap();
    assert_eq!(value["sensitivity"]["lot"], "Lot 1");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["value"], 5.0);
    assert_eq!(rows[1]["value"], 10.0);
    assert_eq!(rows[1]["primal_status"], "optimal");
}
