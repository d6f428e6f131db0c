//! Criterion and Alternative input records.

use serde::{Deserialize, Serialize};

/// Whether higher or lower raw values are preferred on a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriterionType {
    /// Higher raw value is preferred.
    Benefit,
    /// Lower raw value is preferred.
    Cost,
}

impl CriterionType {
    /// Returns true for benefit criteria.
    pub fn is_benefit(&self) -> bool {
        matches!(self, CriterionType::Benefit)
    }
}

/// A weighted, typed criterion.
///
/// `weight` is the raw, pre-normalization weight; it must be positive when
/// the criterion is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    #[serde(rename = "type")]
    pub criterion_type: CriterionType,
    pub weight: f64,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Criterion {
    /// Creates an active criterion.
    pub fn new(name: impl Into<String>, criterion_type: CriterionType, weight: f64) -> Self {
        Self {
            name: name.into(),
            criterion_type,
            weight,
            active: true,
        }
    }

    /// Creates an active benefit criterion.
    pub fn benefit(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, CriterionType::Benefit, weight)
    }

    /// Creates an active cost criterion.
    pub fn cost(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, CriterionType::Cost, weight)
    }

    /// Marks the criterion inactive.
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

/// A candidate being ranked.
///
/// `values` holds one entry per *active* criterion, in the active criteria's
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub values: Vec<f64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Alternative {
    /// Creates an active alternative.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            active: true,
        }
    }

    /// Marks the alternative inactive.
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_deserializes_type_field() {
        let json = r#"{"name": "Price", "type": "Cost", "weight": 0.5, "active": false}"#;
        let criterion: Criterion = serde_json::from_str(json).unwrap();

        assert_eq!(criterion.name, "Price");
        assert_eq!(criterion.criterion_type, CriterionType::Cost);
        assert!(!criterion.active);
    }

    #[test]
    fn criterion_defaults_to_active() {
        let json = r#"{"name": "Quality", "type": "Benefit", "weight": 2}"#;
        let criterion: Criterion = serde_json::from_str(json).unwrap();
        assert!(criterion.active);
        assert_eq!(criterion.weight, 2.0);
    }

    #[test]
    fn criterion_serializes_type_field() {
        let json = serde_json::to_value(Criterion::benefit("Quality", 1.0)).unwrap();
        assert_eq!(json["type"], "Benefit");
    }

    #[test]
    fn unknown_criterion_type_is_rejected() {
        let json = r#"{"name": "Quality", "type": "Neutral", "weight": 1}"#;
        assert!(serde_json::from_str::<Criterion>(json).is_err());
    }

    #[test]
    fn alternative_defaults_to_active() {
        let json = r#"{"name": "A", "values": [1, 2.5]}"#;
        let alternative: Alternative = serde_json::from_str(json).unwrap();
        assert!(alternative.active);
        assert_eq!(alternative.values, vec![1.0, 2.5]);
    }

    #[test]
    fn deactivated_clears_active_flag() {
        assert!(!Criterion::cost("Price", 1.0).deactivated().active);
        assert!(!Alternative::new("A", vec![1.0]).deactivated().active);
    }
}
