use async_trait::async_trait;
use bodycomp_client::{BmrRequest, Client, ImcRequest};
use bodycomp_model::composition::{BodyComposition, Classification};
use bodycomp_model::measurement::Measurement;
use futures::try_join;
use log::{debug, info, warn};

use crate::calculators::calculator::{CalculationError, Calculator};
use crate::estimator;

/// Delegates both calculations to the clinical backend. The two calls are
/// independent and issued concurrently; a result is produced only once
/// both have completed, and either failure aborts the whole assessment.
pub struct RemoteCalculator {
    client: Box<dyn Client>,
}

impl RemoteCalculator {
    pub fn new(client: Box<dyn Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Calculator for RemoteCalculator {
    async fn assess(
        &self,
        measurement: &Measurement,
    ) -> Result<BodyComposition, CalculationError> {
        let imc_request = ImcRequest {
            weight: measurement.weight_kg,
            height: measurement.height_cm,
        };
        let bmr_request = BmrRequest {
            weight: measurement.weight_kg,
            height: measurement.height_cm,
            age: measurement.age_years,
            sex: measurement.sex,
            activity_level: measurement.activity_level,
        };

        info!("Requesting IMC and BMR from the calculations service");
        let (imc, bmr) = try_join!(
            self.client.fetch_imc(imc_request),
            self.client.fetch_bmr(bmr_request),
        )?;
        debug!("Server returned imc={:.2}, bmr={:.1}", imc.imc, bmr.bmr);

        // The band table is authoritative; the server's classification
        // string is only cross-checked through the legacy label shim.
        let composition = BodyComposition::new(
            imc.imc,
            bmr.bmr,
            estimator::total_energy_expenditure(bmr.bmr, measurement.activity_level),
        );
        match Classification::from_legacy_label(&imc.classification) {
            Some(server_classification) if server_classification != composition.classification => {
                warn!(
                    "Server classified {:.2} as {:?}, local banding says {:?}",
                    imc.imc, server_classification, composition.classification
                );
            }
            None => warn!(
                "Unrecognized server classification label {:?}",
                imc.classification
            ),
            _ => {}
        }

        Ok(composition)
    }
}
