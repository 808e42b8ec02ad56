pub mod calculators;
pub mod classifier;
pub mod estimator;
pub mod input;
pub mod presenter;

use bodycomp_model::measurement::MeasurementForm;
use log::{debug, info};

use crate::calculators::calculator::{CalculationError, Calculator};
use crate::input::InputError;
use crate::presenter::ResultView;

/// Any way a submission can fail. Every variant is terminal for the
/// current submission only; the form stays usable.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

/// Drives one form submission through the pipeline: normalize, assess
/// with the configured strategy, present. Each call is an independent
/// request-scoped computation; nothing is retained between submissions.
pub struct Evaluator {
    calculator: Box<dyn Calculator>,
}

impl Evaluator {
    pub fn new(calculator: Box<dyn Calculator>) -> Self {
        Self { calculator }
    }

    pub async fn evaluate(
        &self,
        form: &MeasurementForm,
    ) -> Result<ResultView, EvaluationError> {
        debug!("Validating form input");
        let measurement = input::parse_form(form)?;

        info!("Assessing body composition");
        let composition = self.calculator.assess(&measurement).await?;
        debug!("Assessed: {:?}", composition);

        Ok(ResultView::from_composition(&composition))
    }
}
