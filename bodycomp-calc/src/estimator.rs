use bodycomp_model::measurement::{ActivityLevel, Measurement, Sex};

/// Basal metabolic rate in kcal/day, revised Harris-Benedict equation.
/// Height enters in centimeters.
pub fn basal_metabolic_rate(measurement: &Measurement) -> f64 {
    let weight = measurement.weight_kg;
    let height = measurement.height_cm;
    let age = measurement.age_years as f64;

    match measurement.sex {
        Sex::Female => 447.593 + 9.247 * weight + 3.098 * height - 4.330 * age,
        Sex::Male => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
    }
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier,
/// rounded to the nearest kcal (half away from zero).
pub fn total_energy_expenditure(bmr: f64, activity_level: ActivityLevel) -> f64 {
    (bmr * activity_level.multiplier()).round()
}
