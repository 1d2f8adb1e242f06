use super::ports::FeatureLayout;
use crate::domain::errors::PredictionError;
use serde_json::{Map, Value};

/// Fields every prediction request must carry, in validation order.
/// The first absent one is the one reported back to the caller.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "income",
    "credit_score",
    "loan_amount",
    "years_employed",
    "points",
];

/// Single model input row, aligned to a `FeatureLayout`
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }
}

/// Returns the first required field absent from the request.
pub fn validate_required_fields(input: &Map<String, Value>) -> Result<(), PredictionError> {
    match REQUIRED_FIELDS
        .iter()
        .find(|field| !input.contains_key(**field))
    {
        Some(field) => Err(PredictionError::MissingField {
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

/// Builds the model row in the layout's column order.
///
/// Known request fields fill the column of the same name. Every other column
/// (one-hot dummies from training) is zero. Known fields the layout does not
/// list are dropped without being parsed.
pub fn align_features(
    layout: &dyn FeatureLayout,
    input: &Map<String, Value>,
) -> Result<FeatureVector, PredictionError> {
    let names = layout.feature_names();
    let mut values = vec![0.0; names.len()];

    for field in REQUIRED_FIELDS {
        let Some(raw) = input.get(field) else {
            continue;
        };
        let Some(column) = names.iter().position(|name| name == field) else {
            continue;
        };
        values[column] = coerce_numeric(field, raw)?;
    }

    Ok(FeatureVector::new(values))
}

/// Numeric view of a JSON value: numbers as-is, booleans as 1/0, numeric
/// strings parsed, null zero-filled.
fn coerce_numeric(field: &str, raw: &Value) -> Result<f64, PredictionError> {
    let invalid = || PredictionError::Inference {
        reason: format!("could not convert value for '{}' to float: {}", field, raw),
    };

    match raw {
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64().ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid()),
        Value::Array(_) | Value::Object(_) => Err(invalid()),
    }
}
