use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Error, Result};

/// An item the buyer needs, paired with its requirement.
///
/// The requirement doubles as the benefit multiplier in the seller's report:
/// selling `requirement` units at the dual price `y` yields `y * requirement`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: String,
    pub requirement: f64,
}

/// Explicit mapping from item id to its requirement, one entry per constraint
/// row, validated when the problem is loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

/// One dual price with the benefit it earns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemBenefit {
    pub id: String,
    pub unit_price: f64,
    pub benefit: f64,
}

impl ItemCatalog {
    /// Pairs labels with requirements by position.
    ///
    /// Ids must be non-empty and unique (case-insensitive), and there must be
    /// exactly one per requirement.
    pub fn new(labels: &[String], requirements: &[f64]) -> Result<Self> {
        if labels.len() != requirements.len() {
            return Err(Error::Catalog(format!(
                "{} item labels for {} requirements",
                labels.len(),
                requirements.len()
            )));
        }

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(labels.len());
        for (label, &requirement) in labels.iter().zip(requirements) {
            let id = label.trim();
            if id.is_empty() {
                return Err(Error::Catalog("empty item label".to_string()));
            }
            if !seen.insert(id.to_lowercase()) {
                return Err(Error::Catalog(format!("duplicate item label {}", id)));
            }
            items.push(Item {
                id: id.to_string(),
                requirement,
            });
        }

        Ok(Self { items })
    }

    /// Catalog with generated ids `requirement 1`, `requirement 2`, ...
    pub fn numbered(requirements: &[f64]) -> Self {
        let items = requirements
            .iter()
            .enumerate()
            .map(|(i, &requirement)| Item {
                id: format!("requirement {}", i + 1),
                requirement,
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn benefit_multiplier(&self, id: &str) -> Option<f64> {
        let id = id.trim().to_lowercase();
        self.items
            .iter()
            .find(|item| item.id.to_lowercase() == id)
            .map(|item| item.requirement)
    }

    /// Benefit of each item at the given unit prices. The benefits sum to the
    /// dual profit.
    pub fn benefits(&self, prices: &[f64]) -> Result<Vec<ItemBenefit>> {
        if prices.len() != self.items.len() {
            return Err(Error::shape("unit prices", self.items.len(), prices.len()));
        }
        Ok(self
            .items
            .iter()
            .zip(prices)
            .map(|(item, &unit_price)| ItemBenefit {
                id: item.id.clone(),
                unit_price,
                benefit: unit_price * item.requirement,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_catalog_maps_ids_to_requirements() {
        let catalog =
            ItemCatalog::new(&labels(&["rifles", "Grenades"]), &[100000.0, 200000.0]).unwrap();
        assert_eq!(catalog.benefit_multiplier("rifles"), Some(100000.0));
        assert_eq!(catalog.benefit_multiplier("grenades"), Some(200000.0));
        assert_eq!(catalog.benefit_multiplier("tanks"), None);
    }

    #[test]
    fn test_catalog_given_label_count_mismatch_should_return_error() {
        assert!(matches!(
            ItemCatalog::new(&labels(&["rifles"]), &[1.0, 2.0]),
            Err(Error::Catalog(_))
        ));
    }

    #[test]
    fn test_catalog_given_duplicate_label_should_return_error() {
        assert!(matches!(
            ItemCatalog::new(&labels(&["tanks", "Tanks"]), &[1.0, 2.0]),
            Err(Error::Catalog(_))
        ));
    }

    #[test]
    fn test_benefits_multiply_price_by_requirement() {
        let catalog = ItemCatalog::numbered(&[100.0, 400.0]);
        let benefits = catalog.benefits(&[0.5, 0.25]).unwrap();
        assert_eq!(benefits[0].id, "requirement 1");
        assert_eq!(benefits[0].benefit, 50.0);
        assert_eq!(benefits[1].benefit, 100.0);
        assert!(catalog.benefits(&[1.0]).is_err());
    }
}
