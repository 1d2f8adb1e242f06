use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Version reported by the health endpoint
pub const SERVICE_VERSION: &str = "1.0.0";

/// Formats a timestamp as ISO-8601 local time with microsecond precision.
pub fn iso_timestamp(at: DateTime<Local>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Loan decision derived from the classifier's label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Approved,
    Rejected,
}

impl LoanStatus {
    pub fn from_approved(approved: bool) -> Self {
        if approved {
            LoanStatus::Approved
        } else {
            LoanStatus::Rejected
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, LoanStatus::Approved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Approved => "approved",
            LoanStatus::Rejected => "rejected",
        }
    }
}

/// Body of a successful prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub approved: bool,
    pub probability: f64,
    pub status: LoanStatus,
    pub timestamp: String,
}

impl PredictionResponse {
    /// Builds a response where `approved` and `status` come from the same label.
    pub fn new(approved: bool, probability: f64, at: DateTime<Local>) -> Self {
        Self {
            approved,
            probability,
            status: LoanStatus::from_approved(approved),
            timestamp: iso_timestamp(at),
        }
    }
}

/// Body of the health endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub model_loaded: bool,
    pub preprocessing_loaded: bool,
    pub timestamp: String,
    pub version: String,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.model_loaded && self.preprocessing_loaded
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
