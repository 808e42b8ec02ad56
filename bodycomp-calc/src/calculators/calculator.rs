use async_trait::async_trait;
use bodycomp_model::composition::BodyComposition;
use bodycomp_model::measurement::Measurement;

#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    #[error("no active session")]
    AuthenticationMissing,
    #[error("remote calculation failed")]
    RemoteComputation(#[source] bodycomp_client::Error),
}

impl From<bodycomp_client::Error> for CalculationError {
    fn from(error: bodycomp_client::Error) -> Self {
        match error {
            bodycomp_client::Error::MissingToken => CalculationError::AuthenticationMissing,
            other => CalculationError::RemoteComputation(other),
        }
    }
}

/// A strategy producing a `BodyComposition` for a validated measurement.
/// `LocalCalculator` computes in-process; `RemoteCalculator` delegates to
/// the clinical backend.
#[mockall::automock]
#[async_trait]
pub trait Calculator: Send + Sync {
    async fn assess(&self, measurement: &Measurement)
        -> Result<BodyComposition, CalculationError>;
}
