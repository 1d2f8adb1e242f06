use super::types::{HealthReport, SERVICE_VERSION, iso_timestamp};
use chrono::{DateTime, Local};

/// Which artifacts loaded at startup.
///
/// Built once by the artifact loader and never mutated afterwards, so it can be
/// shared across request handlers without locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessState {
    model_loaded: bool,
    preprocessing_loaded: bool,
    started_at: DateTime<Local>,
}

impl ReadinessState {
    pub fn new(model_loaded: bool, preprocessing_loaded: bool, started_at: DateTime<Local>) -> Self {
        Self {
            model_loaded,
            preprocessing_loaded,
            started_at,
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.model_loaded
    }

    pub fn preprocessing_loaded(&self) -> bool {
        self.preprocessing_loaded
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn is_ready(&self) -> bool {
        self.model_loaded && self.preprocessing_loaded
    }

    pub fn to_health_report(&self) -> HealthReport {
        HealthReport {
            status: "running".to_string(),
            model_loaded: self.model_loaded,
            preprocessing_loaded: self.preprocessing_loaded,
            timestamp: iso_timestamp(self.started_at),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_requires_both_artifacts() {
        let now = Local::now();
        assert!(ReadinessState::new(true, true, now).is_ready());
        assert!(!ReadinessState::new(true, false, now).is_ready());
        assert!(!ReadinessState::new(false, true, now).is_ready());
        assert!(!ReadinessState::new(false, false, now).is_ready());
    }

    #[test]
    fn test_health_report_reflects_flags() {
        let state = ReadinessState::new(true, false, Local::now());
        let report = state.to_health_report();

        assert_eq!(report.status, "running");
        assert!(report.model_loaded);
        assert!(!report.preprocessing_loaded);
        assert_eq!(report.version, "1.0.0");
        assert!(!report.is_healthy());
        assert_eq!(report.timestamp, iso_timestamp(state.started_at()));
    }
}
