use bodycomp_model::composition::Classification;

/// Body mass index from weight in kilograms and height in meters.
pub fn body_mass_index(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Classification always operates on the unrounded BMI; display rounding
/// happens in the presenter.
pub fn classify(bmi: f64) -> Classification {
    Classification::from_bmi(bmi)
}
