// Domain-specific error types
pub mod errors;

// Feature layout, alignment and model interfaces
pub mod ml;

// Startup readiness of the loaded artifacts
pub mod readiness;

// Request/response value types
pub mod types;
