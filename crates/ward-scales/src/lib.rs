//! ward-scales
//!
//! Clinical scoring engine for ward documentation. Pure calculators: no
//! I/O, no shared state. Each scale turns validated measurements into a
//! point total and/or an interpretation band that the ward application
//! stores with the observation.

pub mod config;
pub mod error;
pub mod recording;
pub mod scales;
pub mod scoring;

use config::ScoringConfig;
use error::ScaleError;
use scoring::{ItemKind, ScaleItem, ValidationError, check_range};
use ward_core::models::outcome::ScaleOutcome;

/// Trait implemented by each clinical scale.
pub trait Scale: Send + Sync {
    /// Unique identifier for this scale (e.g., "norton", "news").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Norton Scale").
    fn name(&self) -> &str;

    /// The input fields this scale reads.
    fn items(&self) -> &[ScaleItem];

    /// Score a raw input record as submitted by a ward form.
    fn score(&self, inputs: &serde_json::Value) -> Result<ScaleOutcome, ScaleError>;

    /// Check every field present in `inputs` against its item definition.
    /// Missing fields are reported by [`Scale::score`], not here.
    fn validate_inputs(&self, inputs: &serde_json::Value) -> Vec<ValidationError> {
        let Some(fields) = inputs.as_object() else {
            return vec![ValidationError {
                field: String::new(),
                value: inputs.clone(),
                expected_range: None,
                message: format!("{}: inputs must be a JSON object", self.name()),
            }];
        };

        let mut errors = Vec::new();
        for item in self.items() {
            let Some(value) = fields.get(&item.id) else {
                continue;
            };
            let invalid = |message: String| ValidationError {
                field: item.id.clone(),
                value: value.clone(),
                expected_range: None,
                message,
            };
            match &item.kind {
                ItemKind::Numeric { range, .. } => match value.as_f64() {
                    Some(number) => {
                        if let Err(mut e) = check_range(&item.id, number, *range) {
                            e.message = format!(
                                "{}: {} {} is outside range [{}, {}]",
                                self.name(),
                                item.name,
                                number,
                                range.min,
                                range.max,
                            );
                            errors.push(e);
                        }
                    }
                    None => errors.push(invalid(format!(
                        "{}: {} must be a number",
                        self.name(),
                        item.name
                    ))),
                },
                ItemKind::Choice { options } => {
                    let code = value.as_str();
                    if !options.iter().any(|o| Some(o.code.as_str()) == code) {
                        errors.push(invalid(format!(
                            "{}: {} must be one of {}",
                            self.name(),
                            item.name,
                            options
                                .iter()
                                .map(|o| o.code.as_str())
                                .collect::<Vec<_>>()
                                .join(", "),
                        )));
                    }
                }
                ItemKind::Flag => {
                    if !value.is_boolean() {
                        errors.push(invalid(format!(
                            "{}: {} must be true or false",
                            self.name(),
                            item.name
                        )));
                    }
                }
            }
        }
        errors
    }
}

/// Return all registered scales, configured by `config`.
pub fn all_scales(config: &ScoringConfig) -> Vec<Box<dyn Scale>> {
    vec![
        Box::new(scales::norton::Norton),
        Box::new(scales::glasgow::Glasgow),
        Box::new(scales::news::News),
        Box::new(scales::pain::Pain),
        Box::new(scales::bmi::Bmi::new(config.bmi.class_iii_bound)),
    ]
}

/// Look up a scale by ID.
pub fn get_scale(id: &str, config: &ScoringConfig) -> Option<Box<dyn Scale>> {
    all_scales(config).into_iter().find(|s| s.id() == id)
}

/// Score `inputs` with the scale named `id`.
pub fn score(
    id: &str,
    config: &ScoringConfig,
    inputs: &serde_json::Value,
) -> Result<ScaleOutcome, ScaleError> {
    get_scale(id, config)
        .ok_or_else(|| ScaleError::UnknownScale(id.to_string()))?
        .score(inputs)
}
