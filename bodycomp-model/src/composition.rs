#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Clinical BMI band. Bands are half-open: the lower bound belongs to the
/// band, the upper bound to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Classification {
    Underweight,
    Normal,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

impl Classification {
    /// Maps an unrounded BMI to its band, ascending, first match wins.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Classification::Underweight
        } else if bmi < 25.0 {
            Classification::Normal
        } else if bmi < 30.0 {
            Classification::Overweight
        } else if bmi < 35.0 {
            Classification::ObesityI
        } else if bmi < 40.0 {
            Classification::ObesityII
        } else {
            Classification::ObesityIII
        }
    }

    pub fn color_band(&self) -> ColorBand {
        match self {
            Classification::Underweight => ColorBand::Blue,
            Classification::Normal => ColorBand::GreenTranslucent,
            Classification::Overweight => ColorBand::Yellow,
            Classification::ObesityI => ColorBand::Orange,
            Classification::ObesityII => ColorBand::Red,
            Classification::ObesityIII => ColorBand::DarkRed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Underweight => "Underweight",
            Classification::Normal => "Normal",
            Classification::Overweight => "Overweight",
            Classification::ObesityI => "Obesity class I",
            Classification::ObesityII => "Obesity class II",
            Classification::ObesityIII => "Obesity class III",
        }
    }

    /// Compatibility shim for the classification strings the legacy
    /// backend returns. Matched by exact equality, as the backend emits
    /// them; the numeric band table above stays authoritative.
    pub fn from_legacy_label(label: &str) -> Option<Self> {
        match label {
            "Abaixo do Peso" => Some(Classification::Underweight),
            "Normal" => Some(Classification::Normal),
            "Sobrepeso" => Some(Classification::Overweight),
            "Obesidade Grau I" => Some(Classification::ObesityI),
            "Obesidade Grau II" => Some(Classification::ObesityII),
            "Obesidade Grau III" => Some(Classification::ObesityIII),
            _ => None,
        }
    }
}

/// Display token for a classification, 1:1 with the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorBand {
    Blue,
    GreenTranslucent,
    Yellow,
    Orange,
    Red,
    DarkRed,
}

impl ColorBand {
    pub fn token(&self) -> &'static str {
        match self {
            ColorBand::Blue => "blue",
            ColorBand::GreenTranslucent => "green-translucent",
            ColorBand::Yellow => "yellow",
            ColorBand::Orange => "orange",
            ColorBand::Red => "red",
            ColorBand::DarkRed => "dark-red",
        }
    }
}

/// Derived result of one calculation request. `bmi` keeps the unrounded
/// value; rounding happens at presentation. `tdee` is already rounded to
/// the nearest kcal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyComposition {
    pub bmi: f64,
    pub classification: Classification,
    pub color_band: ColorBand,
    pub bmr: f64,
    pub tdee: f64,
}

impl BodyComposition {
    /// Classification and color band are derived from `bmi` here, so a
    /// result can never carry a band that disagrees with its BMI.
    pub fn new(bmi: f64, bmr: f64, tdee: f64) -> Self {
        let classification = Classification::from_bmi(bmi);
        Self {
            bmi,
            classification,
            color_band: classification.color_band(),
            bmr,
            tdee,
        }
    }
}
