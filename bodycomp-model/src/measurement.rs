#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Sex as selected on the intake form. The token values are the ones the
/// browser form and the backend wire contract use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sex {
    #[strum(serialize = "masculino")]
    #[cfg_attr(feature = "serde", serde(rename = "masculino"))]
    Male,
    #[strum(serialize = "feminino")]
    #[cfg_attr(feature = "serde", serde(rename = "feminino"))]
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActivityLevel {
    #[strum(serialize = "sedentario")]
    #[cfg_attr(feature = "serde", serde(rename = "sedentario"))]
    Sedentary,
    #[strum(serialize = "leve")]
    #[cfg_attr(feature = "serde", serde(rename = "leve"))]
    Light,
    #[strum(serialize = "moderado")]
    #[cfg_attr(feature = "serde", serde(rename = "moderado"))]
    Moderate,
    #[strum(serialize = "intenso")]
    #[cfg_attr(feature = "serde", serde(rename = "intenso"))]
    Intense,
    #[strum(serialize = "muito-intenso")]
    #[cfg_attr(feature = "serde", serde(rename = "muito-intenso"))]
    VeryIntense,
}

impl ActivityLevel {
    /// Factor applied to the basal metabolic rate to estimate total daily
    /// energy expenditure.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Intense => 1.725,
            ActivityLevel::VeryIntense => 1.9,
        }
    }
}

/// Raw text fields exactly as submitted by the calculator form. Nothing
/// here is validated; `bodycomp-calc` turns this into a `Measurement`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasurementForm {
    #[cfg_attr(feature = "serde", serde(rename = "peso"))]
    pub weight: String,
    #[cfg_attr(feature = "serde", serde(rename = "altura"))]
    pub height: String,
    #[cfg_attr(feature = "serde", serde(rename = "idade"))]
    pub age: String,
    #[cfg_attr(feature = "serde", serde(rename = "sexo"))]
    pub sex: String,
    #[cfg_attr(feature = "serde", serde(rename = "nivelAtividade"))]
    pub activity_level: String,
}

impl MeasurementForm {
    pub fn new(
        weight: impl Into<String>,
        height: impl Into<String>,
        age: impl Into<String>,
        sex: impl Into<String>,
        activity_level: impl Into<String>,
    ) -> Self {
        Self {
            weight: weight.into(),
            height: height.into(),
            age: age.into(),
            sex: sex.into(),
            activity_level: activity_level.into(),
        }
    }
}

/// A validated set of anthropometric inputs. Lives only for the duration
/// of a single calculation request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
}

impl Measurement {
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        sex: Sex,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
            activity_level,
        }
    }

    /// Height in meters, as used by the BMI formula. The BMR equation
    /// keeps the centimeter form.
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn activity_multipliers_match_reference_table() {
        let test_data = [
            (ActivityLevel::Sedentary, 1.2),
            (ActivityLevel::Light, 1.375),
            (ActivityLevel::Moderate, 1.55),
            (ActivityLevel::Intense, 1.725),
            (ActivityLevel::VeryIntense, 1.9),
        ];

        for (level, expected) in test_data {
            assert_eq!(level.multiplier(), expected, "{:?}", level);
        }
    }

    #[test]
    fn sex_parses_from_form_tokens() {
        assert_eq!("masculino".parse(), Ok(Sex::Male));
        assert_eq!("feminino".parse(), Ok(Sex::Female));
        assert!("male".parse::<Sex>().is_err());
    }

    #[test]
    fn activity_level_parses_from_form_tokens() {
        let test_data = [
            ("sedentario", ActivityLevel::Sedentary),
            ("leve", ActivityLevel::Light),
            ("moderado", ActivityLevel::Moderate),
            ("intenso", ActivityLevel::Intense),
            ("muito-intenso", ActivityLevel::VeryIntense),
        ];

        for (token, expected) in test_data {
            assert_eq!(token.parse(), Ok(expected));
        }
        assert!("extremo".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn tokens_round_trip_through_display() {
        for level in ActivityLevel::iter() {
            assert_eq!(level.to_string().parse(), Ok(level));
        }
        for sex in Sex::iter() {
            assert_eq!(sex.to_string().parse(), Ok(sex));
        }
    }

    #[test]
    fn height_is_converted_to_meters() {
        let measurement =
            Measurement::new(70.0, 175.0, 30, Sex::Male, ActivityLevel::Moderate);
        assert!((measurement.height_m() - 1.75).abs() < f64::EPSILON);
    }
}
