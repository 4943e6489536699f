//! Form page and prediction handlers.

use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::info;

use fertiscan_core::SoilSample;

use crate::render;
use crate::state::SharedState;

/// The twelve nutrient readings submitted by the form.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NutrientForm {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub electrical_conductivity: f64,
    pub organic_carbon: f64,
    pub sulphur: f64,
    pub zinc: f64,
    pub iron: f64,
    pub copper: f64,
    pub manganese: f64,
    pub boron: f64,
}

impl From<NutrientForm> for SoilSample {
    fn from(form: NutrientForm) -> Self {
        Self {
            nitrogen: form.nitrogen,
            phosphorus: form.phosphorus,
            potassium: form.potassium,
            ph: form.ph,
            electrical_conductivity: form.electrical_conductivity,
            organic_carbon: form.organic_carbon,
            sulphur: form.sulphur,
            zinc: form.zinc,
            iron: form.iron,
            copper: form.copper,
            manganese: form.manganese,
            boron: form.boron,
        }
    }
}

/// GET / — the input form, or the startup warning when no model is loaded.
pub async fn index(State(state): State<SharedState>) -> Html<String> {
    if state.model.is_none() {
        return Html(render::warning_page(&state.model_path));
    }
    Html(render::form_page(None, None))
}

/// POST /predict — one synchronous inference per submission.
///
/// The browser enforces the input ranges, but the readings are validated
/// again here; an out-of-range value gets a styled message, not an error.
pub async fn predict(
    State(state): State<SharedState>,
    Form(input): Form<NutrientForm>,
) -> Html<String> {
    let Some(model) = state.model.as_ref() else {
        return Html(render::warning_page(&state.model_path));
    };

    let sample = SoilSample::from(input);
    if let Err(e) = sample.validate() {
        let panel = render::error_panel(&e.to_string());
        return Html(render::form_page(Some(&sample), Some(&panel)));
    }

    match model.predict(&sample) {
        Ok(prediction) => {
            info!(label = prediction.label, class = %prediction.class, "prediction served");
            let panel = render::result_panel(prediction.class);
            Html(render::form_page(Some(&sample), Some(&panel)))
        }
        Err(e) => {
            let panel = render::error_panel(&e.to_string());
            Html(render::form_page(Some(&sample), Some(&panel)))
        }
    }
}
