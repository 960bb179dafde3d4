//! Interactive HTML form
//!
//! Server-rendered page over the same pipeline as `/predict`. Numeric
//! fields arrive as text so a typo becomes a field message rather than a
//! rejected request.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use tracing::{error, warn};

use premium_common::{Assessment, Occupation, PremiumError, RawUserInput, ValidationError};
use premium_engine::{humanize, known_cities};

use crate::routes::AppState;

/// City select value that switches to the free-text field
pub const OTHER_CITY: &str = "Other";

/// Urlencoded form body, also used to re-populate the inputs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormSubmission {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub income_lpa: String,
    pub smoker: String,
    pub city: String,
    pub other_city: String,
    pub occupation: String,
}

impl Default for FormSubmission {
    fn default() -> Self {
        Self {
            age: "30".to_string(),
            weight: "70.0".to_string(),
            height: "5.6".to_string(),
            income_lpa: "10.0".to_string(),
            smoker: "no".to_string(),
            city: known_cities().first().copied().unwrap_or(OTHER_CITY).to_string(),
            other_city: String::new(),
            occupation: Occupation::ALL[0].as_str().to_string(),
        }
    }
}

impl FormSubmission {
    fn is_smoker(&self) -> bool {
        self.smoker == "yes"
    }

    /// Parse the text fields into a [`RawUserInput`], collecting every problem
    pub fn to_raw(&self) -> Result<RawUserInput, ValidationError> {
        let mut errors = ValidationError::default();

        let age = self.age.trim().parse::<i64>().map_err(|_| {
            errors.push("age", "must be a whole number");
        });
        let weight = parse_number(&mut errors, "weight", &self.weight);
        let height = parse_number(&mut errors, "height", &self.height);
        let income_lpa = parse_number(&mut errors, "income_lpa", &self.income_lpa);

        let city = if self.city == OTHER_CITY {
            self.other_city.trim().to_string()
        } else {
            self.city.clone()
        };
        if city.trim().is_empty() {
            errors.push("city", "enter your city name or select a city from the list");
        }

        match (age, weight, height, income_lpa) {
            (Ok(age), Some(weight), Some(height), Some(income_lpa)) if errors.is_empty() => {
                Ok(RawUserInput {
                    age,
                    weight,
                    height,
                    income_lpa,
                    smoker: self.is_smoker(),
                    city,
                    occupation: self.occupation.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_number(errors: &mut ValidationError, field: &'static str, text: &str) -> Option<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(field, "must be a number");
            None
        }
    }
}

enum Outcome<'a> {
    Blank,
    Rejected(&'a ValidationError),
    Failed(&'a str),
    Assessed(&'a Assessment),
}

// ============ HANDLERS ============

pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    Html(render_page(
        state.service.model_version(),
        &FormSubmission::default(),
        Outcome::Blank,
    ))
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> (StatusCode, Html<String>) {
    let version = state.service.model_version();

    let result = submission
        .to_raw()
        .map_err(PremiumError::from)
        .and_then(|raw| state.service.assess(&raw));

    match result {
        Ok(assessment) => (
            StatusCode::OK,
            Html(render_page(version, &submission, Outcome::Assessed(&assessment))),
        ),
        Err(PremiumError::Validation(errors)) => {
            warn!(violations = %errors, "Rejected form input");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render_page(version, &submission, Outcome::Rejected(&errors))),
            )
        }
        Err(other) => {
            error!(error = %other, "Form prediction failed");
            let message = other.to_string();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_page(version, &submission, Outcome::Failed(&message))),
            )
        }
    }
}

// ============ RENDERING ============

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Colour marker shown next to a predicted category
pub fn category_marker(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "low" => "🟢",
        "medium" => "🟡",
        "high" => "🔴",
        _ => "⚪",
    }
}

fn percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

fn render_page(version: &str, values: &FormSubmission, outcome: Outcome<'_>) -> String {
    let body = match outcome {
        Outcome::Blank => String::new(),
        Outcome::Rejected(errors) => render_errors(errors),
        Outcome::Failed(message) => format!(
            "<section class=\"error\"><h2>Prediction failed</h2><p>{}</p></section>",
            escape_html(message)
        ),
        Outcome::Assessed(assessment) => render_result(assessment, values.is_smoker()),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Insurance Premium Predictor</title>
</head>
<body>
<aside class="sidebar">
<h2>About</h2>
<p>Predicts an insurance premium category from a short personal profile.</p>
<p><strong>Model Version:</strong> {version}</p>
<p>Features used: BMI, age group, life-style risk, city tier, income, occupation.</p>
<h3>Instructions</h3>
<ol>
<li>Fill in all the required fields</li>
<li>Click 'Predict Premium Category'</li>
<li>View your predicted premium category</li>
</ol>
</aside>
<main>
<h1>Insurance Premium Predictor</h1>
{form}
{body}
</main>
<footer>Insurance Premium Predictor | Model Version {version}</footer>
</body>
</html>
"#,
        version = escape_html(version),
        form = render_form(values),
        body = body,
    )
}

fn render_form(values: &FormSubmission) -> String {
    let mut cities = String::new();
    for city in known_cities().into_iter().chain([OTHER_CITY]) {
        let selected = if values.city == city { " selected" } else { "" };
        cities.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>",
            escape_html(city),
            selected
        ));
    }

    let mut occupations = String::new();
    for occupation in Occupation::ALL {
        let selected = if values.occupation == occupation.as_str() {
            " selected"
        } else {
            ""
        };
        occupations.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            occupation.as_str(),
            selected,
            humanize(occupation.as_str())
        ));
    }

    let (smoker_yes, smoker_no) = if values.is_smoker() {
        (" checked", "")
    } else {
        ("", " checked")
    };

    format!(
        r#"<form method="post" action="/form">
<label>Age <input type="number" name="age" min="19" value="{age}"></label>
<label>Weight (kg) <input type="number" step="0.1" name="weight" value="{weight}"></label>
<label>Height (ft) <input type="number" step="0.1" name="height" value="{height}"></label>
<label>Annual Income (LPA) <input type="number" step="0.1" name="income_lpa" value="{income}"></label>
<fieldset><legend>Smoker</legend>
<label><input type="radio" name="smoker" value="yes"{smoker_yes}> Yes</label>
<label><input type="radio" name="smoker" value="no"{smoker_no}> No</label>
</fieldset>
<label>City <select name="city">{cities}</select></label>
<label>Other city <input type="text" name="other_city" value="{other_city}"></label>
<label>Occupation <select name="occupation">{occupations}</select></label>
<button type="submit">Predict Premium Category</button>
</form>"#,
        age = escape_html(&values.age),
        weight = escape_html(&values.weight),
        height = escape_html(&values.height),
        income = escape_html(&values.income_lpa),
        other_city = escape_html(&values.other_city),
    )
}

fn render_errors(errors: &ValidationError) -> String {
    let items: String = errors
        .violations()
        .iter()
        .map(|v| {
            format!(
                "<li><strong>{}</strong>: {}</li>",
                humanize(v.field),
                escape_html(&v.constraint)
            )
        })
        .collect();
    format!("<section class=\"error\"><h2>Please fix the following</h2><ul>{items}</ul></section>")
}

fn render_result(assessment: &Assessment, smoker: bool) -> String {
    let prediction = &assessment.prediction;
    let features = &assessment.features;

    let probabilities: String = prediction
        .class_prob
        .iter()
        .map(|(label, p)| {
            format!(
                "<li>{} {}: {}</li>",
                category_marker(label),
                escape_html(&label.to_uppercase()),
                percent(*p)
            )
        })
        .collect();

    format!(
        r#"<section class="result">
<h2>Predicted Premium Category</h2>
<p class="category">{marker} {category}</p>
<p>Confidence: {confidence}</p>
<p>BMI: {bmi:.2}</p>
<h3>Probability Distribution</h3>
<ul>{probabilities}</ul>
<h3>Profile Summary</h3>
<ul>
<li>Age Group: {age_group}</li>
<li>Life Style Risk: {risk}</li>
<li>City Tier: {tier}</li>
<li>Occupation: {occupation}</li>
<li>Annual Income: ₹{income:.1} LPA</li>
<li>Smoking Status: {smoking}</li>
</ul>
</section>"#,
        marker = category_marker(&prediction.predicted_category),
        category = escape_html(&prediction.predicted_category.to_uppercase()),
        confidence = percent(prediction.confidence),
        bmi = features.bmi,
        age_group = humanize(features.age_group.as_str()),
        risk = features.life_style_risk.as_str().to_uppercase(),
        tier = features.city_tier,
        occupation = humanize(features.occupation.as_str()),
        income = features.income_lpa,
        smoking = if smoker { "Yes" } else { "No" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(city: &str, other_city: &str) -> FormSubmission {
        FormSubmission {
            city: city.to_string(),
            other_city: other_city.to_string(),
            ..FormSubmission::default()
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Mumbai"), "Mumbai");
    }

    #[test]
    fn test_category_marker() {
        assert_eq!(category_marker("Low"), "🟢");
        assert_eq!(category_marker("MEDIUM"), "🟡");
        assert_eq!(category_marker("high"), "🔴");
        assert_eq!(category_marker("Unknown"), "⚪");
    }

    #[test]
    fn test_other_city_uses_free_text() {
        let raw = submission(OTHER_CITY, "  Shimla ").to_raw().unwrap();
        assert_eq!(raw.city, "Shimla");

        let raw = submission("Pune", "ignored").to_raw().unwrap();
        assert_eq!(raw.city, "Pune");
    }

    #[test]
    fn test_other_city_requires_text() {
        let errors = submission(OTHER_CITY, "   ").to_raw().unwrap_err();
        assert!(errors.has_field("city"));
    }

    #[test]
    fn test_unparseable_numbers_collected() {
        let form = FormSubmission {
            age: "thirty".to_string(),
            weight: "".to_string(),
            income_lpa: "10,5".to_string(),
            ..FormSubmission::default()
        };

        let errors = form.to_raw().unwrap_err();
        assert!(errors.has_field("age"));
        assert!(errors.has_field("weight"));
        assert!(errors.has_field("income_lpa"));
        assert!(!errors.has_field("height"));
    }

    #[test]
    fn test_default_form_parses() {
        let raw = FormSubmission::default().to_raw().unwrap();
        assert_eq!(raw.age, 30);
        assert_eq!(raw.weight, 70.0);
        assert_eq!(raw.height, 5.6);
        assert_eq!(raw.income_lpa, 10.0);
        assert!(!raw.smoker);
        assert_eq!(raw.occupation, Occupation::ALL[0].as_str());
    }

    #[test]
    fn test_blank_page_has_sidebar() {
        let html = render_page("1.0.0.2", &FormSubmission::default(), Outcome::Blank);
        assert!(html.contains("<strong>Model Version:</strong> 1.0.0.2"));
        assert!(html.contains("<h3>Instructions</h3>"));
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains(r#"name="weight" value="70.0""#));
        assert!(html.contains(r#"name="height" value="5.6""#));
    }

    #[test]
    fn test_render_form_keeps_values() {
        let form = FormSubmission {
            age: "42".to_string(),
            smoker: "yes".to_string(),
            city: OTHER_CITY.to_string(),
            other_city: "<Shimla>".to_string(),
            ..FormSubmission::default()
        };

        let html = render_form(&form);
        assert!(html.contains(r#"name="age" min="19" value="42""#));
        assert!(html.contains(r#"value="yes" checked"#));
        assert!(html.contains(r#"<option value="Other" selected>Other</option>"#));
        assert!(html.contains("&lt;Shimla&gt;"));
        assert!(html.contains(">Business Owner</option>"));
    }
}
