use bodycomp_model::measurement::{ActivityLevel, Measurement, MeasurementForm, Sex};

/// Unparseable or out-of-range form input. Terminal for the submission;
/// the caller surfaces it to the user and the form stays usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
    #[error("unknown sex token: {0:?}")]
    UnknownSex(String),
    #[error("unknown activity level token: {0:?}")]
    UnknownActivityLevel(String),
}

/// Validates the raw form fields and produces a `Measurement`. Pure; no
/// side effects.
pub fn parse_form(form: &MeasurementForm) -> Result<Measurement, InputError> {
    let weight_kg = parse_positive_number("weight", &form.weight)?;
    let height_cm = parse_positive_number("height", &form.height)?;
    let age_years = parse_positive_age(&form.age)?;
    let sex = form
        .sex
        .trim()
        .parse::<Sex>()
        .map_err(|_| InputError::UnknownSex(form.sex.clone()))?;
    let activity_level = form
        .activity_level
        .trim()
        .parse::<ActivityLevel>()
        .map_err(|_| InputError::UnknownActivityLevel(form.activity_level.clone()))?;

    Ok(Measurement::new(
        weight_kg,
        height_cm,
        age_years,
        sex,
        activity_level,
    ))
}

fn parse_positive_number(field: &'static str, value: &str) -> Result<f64, InputError> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            field,
            value: value.to_owned(),
        })?;

    if !parsed.is_finite() {
        return Err(InputError::NotANumber {
            field,
            value: value.to_owned(),
        });
    }
    if parsed <= 0.0 {
        return Err(InputError::NotPositive { field });
    }
    Ok(parsed)
}

fn parse_positive_age(value: &str) -> Result<u32, InputError> {
    let parsed = value
        .trim()
        .parse::<u32>()
        .map_err(|_| InputError::NotANumber {
            field: "age",
            value: value.to_owned(),
        })?;

    if parsed == 0 {
        return Err(InputError::NotPositive { field: "age" });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> MeasurementForm {
        MeasurementForm::new("70", "175", "30", "masculino", "moderado")
    }

    #[test]
    fn parses_a_complete_form() {
        let measurement = parse_form(&valid_form()).unwrap();
        assert_eq!(
            measurement,
            Measurement::new(70.0, 175.0, 30, Sex::Male, ActivityLevel::Moderate)
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let form = MeasurementForm::new(" 70.5 ", "175", " 30", " feminino ", "muito-intenso");
        let measurement = parse_form(&form).unwrap();
        assert_eq!(measurement.weight_kg, 70.5);
        assert_eq!(measurement.sex, Sex::Female);
        assert_eq!(measurement.activity_level, ActivityLevel::VeryIntense);
    }

    #[test]
    fn rejects_non_numeric_weight() {
        let form = MeasurementForm {
            weight: "heavy".to_owned(),
            ..valid_form()
        };
        assert_eq!(
            parse_form(&form),
            Err(InputError::NotANumber {
                field: "weight",
                value: "heavy".to_owned(),
            })
        );
    }

    #[test]
    fn rejects_zero_height() {
        let form = MeasurementForm {
            height: "0".to_owned(),
            ..valid_form()
        };
        assert_eq!(
            parse_form(&form),
            Err(InputError::NotPositive { field: "height" })
        );
    }

    #[test]
    fn rejects_negative_weight() {
        let form = MeasurementForm {
            weight: "-70".to_owned(),
            ..valid_form()
        };
        assert_eq!(
            parse_form(&form),
            Err(InputError::NotPositive { field: "weight" })
        );
    }

    #[test]
    fn rejects_non_finite_weight() {
        let form = MeasurementForm {
            weight: "inf".to_owned(),
            ..valid_form()
        };
        assert!(matches!(
            parse_form(&form),
            Err(InputError::NotANumber { field: "weight", .. })
        ));
    }

    #[test]
    fn rejects_fractional_age() {
        let form = MeasurementForm {
            age: "30.5".to_owned(),
            ..valid_form()
        };
        assert!(matches!(
            parse_form(&form),
            Err(InputError::NotANumber { field: "age", .. })
        ));
    }

    #[test]
    fn rejects_zero_age() {
        let form = MeasurementForm {
            age: "0".to_owned(),
            ..valid_form()
        };
        assert_eq!(
            parse_form(&form),
            Err(InputError::NotPositive { field: "age" })
        );
    }

    #[test]
    fn rejects_unknown_tokens() {
        let form = MeasurementForm {
            sex: "other".to_owned(),
            ..valid_form()
        };
        assert_eq!(
            parse_form(&form),
            Err(InputError::UnknownSex("other".to_owned()))
        );

        let form = MeasurementForm {
            activity_level: "crossfit".to_owned(),
            ..valid_form()
        };
        assert_eq!(
            parse_form(&form),
            Err(InputError::UnknownActivityLevel("crossfit".to_owned()))
        );
    }
}
