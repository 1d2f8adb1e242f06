pub mod descriptor;
pub mod feature_registry;
pub mod ports;

pub use descriptor::PreprocessingDescriptor;
pub use feature_registry::{FeatureVector, REQUIRED_FIELDS};
pub use ports::{ClassProbabilities, FeatureLayout, LoanClassifier};
