use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::catalog::ItemCatalog;
use crate::domain::validate::validate_problem;
use crate::error::{Error, Result};
use crate::models::{ProblemDefinition, RequirementVector};

/// On-disk problem document.
///
/// ```json
/// {
///   "costs": [10, 12, 15],
///   "constraints": [[500, 300, 800], [1000, 2000, 1500]],
///   "requirements": [100000, 200000],
///   "items": ["rifles", "grenades"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemFile {
    pub costs: Vec<f64>,
    pub constraints: Vec<Vec<f64>>,
    pub requirements: RequirementVector,
    #[serde(default, alias = "armes")]
    pub items: Vec<String>,
    #[serde(default)]
    pub lots: Vec<String>,
}

/// A validated problem with its reporting labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProblem {
    pub definition: ProblemDefinition,
    pub catalog: ItemCatalog,
    pub lot_labels: Vec<String>,
}

impl LoadedProblem {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: ProblemFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading problem from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl TryFrom<ProblemFile> for LoadedProblem {
    type Error = Error;

    fn try_from(file: ProblemFile) -> Result<Self> {
        let definition = ProblemDefinition::new(file.costs, file.constraints, file.requirements);
        validate_problem(&definition)?;

        let catalog = if file.items.is_empty() {
            ItemCatalog::numbered(&definition.requirements)
        } else {
            ItemCatalog::new(&file.items, &definition.requirements)?
        };

        let lot_labels = if file.lots.is_empty() {
            default_lot_labels(definition.lot_count())
        } else if file.lots.len() != definition.lot_count() {
            return Err(Error::shape("lot labels", definition.lot_count(), file.lots.len()));
        } else {
            file.lots
        };

        Ok(Self {
            definition,
            catalog,
            lot_labels,
        })
    }
}

fn default_lot_labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Lot {}", i)).collect()
}

/// Builder for constructing problems with a fluent API
#[derive(Debug, Default)]
pub struct ProblemBuilder {
    lots: Vec<String>,
    costs: Vec<f64>,
    items: Vec<String>,
    constraints: Vec<Vec<f64>>,
    requirements: Vec<f64>,
}

impl ProblemBuilder {
    /// Create a new problem builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a purchasable lot with its unit cost
    pub fn add_lot(mut self, label: impl Into<String>, cost: f64) -> Self {
        self.lots.push(label.into());
        self.costs.push(cost);
        self
    }

    /// Add a requirement: `coefficients[j]` units of `item` come with one unit
    /// of lot `j`, and at least `threshold` units are needed.
    ///
    /// # Example
    ///
    /// ```
    /// use lp_duality::ProblemBuilder;
    ///
    /// let problem = ProblemBuilder::new()
    ///     .add_lot("Lot 1", 10.0)
    ///     .add_lot("Lot 2", 12.0)
    ///     .add_requirement("rifles", vec![500.0, 300.0], 100000.0)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(problem.definition.lot_count(), 2);
    /// ```
    pub fn add_requirement(
        mut self,
        item: impl Into<String>,
        coefficients: Vec<f64>,
        threshold: f64,
    ) -> Self {
        self.items.push(item.into());
        self.constraints.push(coefficients);
        self.requirements.push(threshold);
        self
    }

    /// Validate shapes and labels and build the problem
    pub fn build(self) -> Result<LoadedProblem> {
        LoadedProblem::try_from(ProblemFile {
            costs: self.costs,
            constraints: self.constraints,
            requirements: self.requirements,
            items: self.items,
            lots: self.lots,
        })
    }
}
