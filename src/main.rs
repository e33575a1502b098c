use std::env;
use std::process::ExitCode;

use dotenv::dotenv;
use log::{error, info};

use lp_duality::{
    create_solver, solve_pair, sweep_cost, value_range, Config, LoadedProblem, Report, Result,
};

fn run() -> Result<String> {
    let mut config = Config::from_env()?;
    if let Some(path) = env::args().nth(1) {
        config.problem_file = path.into();
    }

    let problem = LoadedProblem::from_path(&config.problem_file)?;
    let solver = create_solver(config.solver);
    info!(
        "solving {} with {} ({} lots, {} requirements)",
        config.problem_file.display(),
        solver.name(),
        problem.definition.lot_count(),
        problem.definition.requirement_count()
    );

    let pair = solve_pair(&problem.definition, solver.as_ref(), config.tolerance)?;

    let values = value_range(config.sweep_from, config.sweep_to, config.sweep_step)?;
    let points = sweep_cost(
        &problem.definition,
        config.sweep_index,
        &values,
        solver.as_ref(),
        config.sweep_parallel,
    )?;

    let report = Report::build(&problem, &pair, Some((config.sweep_index, points.as_slice())))?;
    report.to_json_pretty()
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
