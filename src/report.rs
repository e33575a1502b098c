//! Serializable summary of a primal/dual run, for display by the caller.

use serde::Serialize;

use crate::catalog::ItemBenefit;
use crate::domain::duality::DualityReport;
use crate::domain::sensitivity::SweepPoint;
use crate::error::Result;
use crate::models::{Solution, Status};
use crate::problem::LoadedProblem;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputRow {
    pub item: String,
    pub coefficients: Vec<f64>,
    pub requirement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputTable {
    pub lots: Vec<String>,
    pub costs: Vec<f64>,
    pub rows: Vec<InputRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotRow {
    pub lot: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub line_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimalSection {
    pub status: Status,
    pub lots: Vec<LotRow>,
    pub total_cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualSection {
    pub status: Status,
    pub prices: Vec<ItemBenefit>,
    pub total_profit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub total_cost: Option<f64>,
    pub total_profit: Option<f64>,
    pub gap: Option<f64>,
    pub consistent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub value: f64,
    pub primal_status: Status,
    pub total_cost: Option<f64>,
    pub lots: Option<Vec<f64>>,
    pub dual_status: Status,
    pub total_profit: Option<f64>,
    pub prices: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivitySection {
    pub lot: String,
    pub rows: Vec<SweepRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub inputs: InputTable,
    pub primal: PrimalSection,
    pub dual: DualSection,
    pub comparison: Comparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<SensitivitySection>,
}

impl Report {
    /// Builds the report. `sweep` is the varied cost index with its points.
    pub fn build(
        problem: &LoadedProblem,
        pair: &DualityReport,
        sweep: Option<(usize, &[SweepPoint])>,
    ) -> Result<Self> {
        let sensitivity = sweep.map(|(index, points)| SensitivitySection {
            lot: problem
                .lot_labels
                .get(index)
                .cloned()
                .unwrap_or_else(|| format!("Lot {}", index + 1)),
            rows: points.iter().map(sweep_row).collect(),
        });

        Ok(Self {
            inputs: input_table(problem),
            primal: primal_section(problem, &pair.primal),
            dual: dual_section(problem, &pair.dual)?,
            comparison: Comparison {
                total_cost: pair.primal.objective(),
                total_profit: pair.dual.objective(),
                gap: pair.gap,
                consistent: pair.consistent,
            },
            sensitivity,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn input_table(problem: &LoadedProblem) -> InputTable {
    let rows = problem
        .catalog
        .items()
        .iter()
        .zip(&problem.definition.constraints)
        .map(|(item, coefficients)| InputRow {
            item: item.id.clone(),
            coefficients: coefficients.clone(),
            requirement: item.requirement,
        })
        .collect();

    InputTable {
        lots: problem.lot_labels.clone(),
        costs: problem.definition.costs.clone(),
        rows,
    }
}

fn primal_section(problem: &LoadedProblem, solution: &Solution) -> PrimalSection {
    let lots: Vec<LotRow> = solution
        .values()
        .map(|values| {
            problem
                .lot_labels
                .iter()
                .zip(values.iter().zip(&problem.definition.costs))
                .map(|(lot, (&quantity, &unit_cost))| LotRow {
                    lot: lot.clone(),
                    quantity,
                    unit_cost,
                    line_cost: quantity * unit_cost,
                })
                .collect()
        })
        .unwrap_or_default();

    PrimalSection {
        status: solution.status(),
        lots,
        total_cost: solution.objective(),
    }
}

fn dual_section(problem: &LoadedProblem, solution: &Solution) -> Result<DualSection> {
    let prices = match solution.values() {
        Some(values) => problem.catalog.benefits(values)?,
        None => Vec::new(),
    };

    Ok(DualSection {
        status: solution.status(),
        prices,
        total_profit: solution.objective(),
    })
}

fn sweep_row(point: &SweepPoint) -> SweepRow {
    SweepRow {
        value: point.value,
        primal_status: point.primal.status(),
        total_cost: point.primal.objective(),
        lots: point.primal.values().map(<[f64]>::to_vec),
        dual_status: point.dual.status(),
        total_profit: point.dual.objective(),
        prices: point.dual.values().map(<[f64]>::to_vec),
    }
}
