use bodycomp_model::composition::{BodyComposition, ColorBand};

/// One labeled display panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: &'static str,
    pub value: String,
    pub caption: String,
    pub color: Option<ColorBand>,
}

/// Display-ready aggregation of a calculation result: the BMI panel and
/// the energy panel. Formatting only, no computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub bmi: Panel,
    pub energy: Panel,
}

impl ResultView {
    pub fn from_composition(composition: &BodyComposition) -> Self {
        Self {
            bmi: Panel {
                title: "Body mass index",
                value: format!("{:.1}", composition.bmi),
                caption: composition.classification.label().to_owned(),
                color: Some(composition.color_band),
            },
            energy: Panel {
                title: "Daily energy expenditure",
                value: format!("{:.0} kcal", composition.tdee),
                caption: "Estimated daily calorie needs for the selected activity level"
                    .to_owned(),
                color: None,
            },
        }
    }
}
