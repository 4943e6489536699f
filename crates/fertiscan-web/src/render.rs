//! HTML rendering for the predictor pages.
//!
//! One page, no client-side framework: the form posts to `/predict` and the
//! response is the same page with a styled result panel underneath.

use std::fmt::Write;
use std::path::Path;

use fertiscan_core::{FertilityClass, INPUT_STEP, Nutrient, SoilSample};

const STYLE: &str = r#"
body {
    font-family: 'Trebuchet MS', sans-serif;
    color: #2D1B0A;
    background-color: #FAF3E0;
    margin: 0;
    padding: 2em;
}
h1 { color: #D35400; font-weight: bold; }
h2 { color: #5D4037; }
h3 { color: #BF360C; }
label {
    font-weight: 900;
    font-size: 1.05rem;
    color: #212121;
    display: block;
    margin-top: 0.8em;
}
input[type=number] {
    background-color: #FFFFFF;
    color: #1B1B1B;
    font-weight: bold;
    border: 2px solid #5D4037;
    border-radius: 10px;
    padding: 0.4em;
    width: 90%;
}
.columns { display: flex; gap: 2em; }
.column { flex: 1; }
button {
    margin-top: 1.5em;
    background: linear-gradient(90deg, #F57C00, #FFB300);
    color: #2B1D0E;
    font-weight: bold;
    border: none;
    border-radius: 12px;
    padding: 0.6em 1.6em;
    font-size: 1.05rem;
    cursor: pointer;
}
.panel {
    margin-top: 2em;
    padding: 25px;
    border-radius: 15px;
}
.panel h3 { text-align: center; color: #3E2723; }
.panel p { font-size: 17px; color: #212121; }
.panel ul { font-size: 16px; color: #4E342E; }
.warning {
    margin-top: 2em;
    padding: 20px;
    border-radius: 12px;
    background-color: #FFF3CD;
    border: 2px solid #D35400;
    color: #5D4037;
    font-weight: bold;
}
.footer { margin-top: 3em; text-align: center; color: #4E342E; }
"#;

/// Wraps a body fragment in the page shell.
fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>AI Soil Fertility Predictor</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n{body}\n\
         <div class=\"footer\">Developed for Smart Agriculture — Empowering Farmers \
         with AI-driven Soil Insights.</div>\n</body>\n</html>"
    )
}

fn nutrient_input(nutrient: Nutrient, value: f64) -> String {
    let key = nutrient.key();
    format!(
        "<label for=\"{key}\">{label}</label>\n\
         <input type=\"number\" id=\"{key}\" name=\"{key}\" min=\"0\" max=\"{max}\" \
         step=\"{step}\" value=\"{value}\" required>",
        label = nutrient.label(),
        max = nutrient.max(),
        step = INPUT_STEP,
    )
}

/// The input form with an optional panel (result or error) underneath.
/// Submitted values are retained when `sample` is given.
pub fn form_page(sample: Option<&SoilSample>, panel: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str("<h1>🌾 AI-Based Soil Fertility Prediction System</h1>\n");
    body.push_str(
        "<h2>Analyze soil nutrient levels to predict fertility and get smart crop \
         recommendations 🌱</h2>\n",
    );
    body.push_str("<h2>🧪 Enter Soil Nutrient Values</h2>\n");
    body.push_str("<form method=\"post\" action=\"/predict\">\n<div class=\"columns\">\n");

    // Three columns of four readings, in model feature order.
    for column in Nutrient::ALL.chunks(4) {
        body.push_str("<div class=\"column\">\n");
        for &nutrient in column {
            let value = sample.map(|s| s.get(nutrient)).unwrap_or(0.0);
            let _ = writeln!(body, "{}", nutrient_input(nutrient, value));
        }
        body.push_str("</div>\n");
    }

    body.push_str(
        "</div>\n<button type=\"submit\">🔍 Predict Fertility Level</button>\n</form>\n",
    );

    if let Some(panel) = panel {
        body.push_str(panel);
        body.push('\n');
    }

    page(&body)
}

/// The colored result panel for a predicted fertility class.
pub fn result_panel(class: FertilityClass) -> String {
    let mut crops = String::new();
    for crop in class.crops() {
        let _ = write!(crops, "<li>{crop}</li>");
    }

    format!(
        "<div class=\"panel\" style=\"background-color:{color};\">\n\
         <h3>{title}</h3>\n<p>{description}</p>\n\
         <h4>🌾 Recommended Crops:</h4>\n<ul>{crops}</ul>\n</div>",
        color = class.color(),
        title = class.title(),
        description = class.description(),
    )
}

/// A styled message for rejected input or a failed inference.
pub fn error_panel(message: &str) -> String {
    format!("<div class=\"warning\">⚠️ {message}</div>")
}

/// Startup warning served when no model artifact could be loaded.
pub fn warning_page(model_path: &Path) -> String {
    let body = format!(
        "<h1>🌾 AI-Based Soil Fertility Prediction System</h1>\n\
         <div class=\"warning\">⚠️ Model file not found! Train a model first — \
         expected artifact at {path:?}.</div>",
        path = model_path
    );
    page(&body)
}
