use async_trait::async_trait;
use bodycomp_model::composition::BodyComposition;
use bodycomp_model::measurement::Measurement;
use log::debug;

use crate::calculators::calculator::{CalculationError, Calculator};
use crate::{classifier, estimator};

/// Computes the full result in-process. This is the authoritative
/// strategy; its formulas define the contract the remote variant is
/// checked against.
#[derive(Debug, Default)]
pub struct LocalCalculator;

impl LocalCalculator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Calculator for LocalCalculator {
    async fn assess(
        &self,
        measurement: &Measurement,
    ) -> Result<BodyComposition, CalculationError> {
        let bmi = classifier::body_mass_index(measurement.weight_kg, measurement.height_m());
        let bmr = estimator::basal_metabolic_rate(measurement);
        let tdee = estimator::total_energy_expenditure(bmr, measurement.activity_level);
        debug!(
            "Local assessment: bmi={:.2}, bmr={:.1}, tdee={:.0}",
            bmi, bmr, tdee
        );

        Ok(BodyComposition::new(bmi, bmr, tdee))
    }
}
