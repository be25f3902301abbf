pub mod cost_model;
pub mod error;
pub mod measure;
pub mod reference;
pub mod types;
pub mod utils;
pub mod validator;

pub use cost_model::{estimate, Calibration, CostModel};
pub use error::{CostModelError, Result};
pub use types::{BenchmarkPoint, CostEstimate, Group};
pub use validator::{
    calibrate, validate, validate_with, PointError, ValidationReport, ValidationSummary,
};
