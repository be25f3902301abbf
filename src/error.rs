//! Cost model error types

use thiserror::Error;

use crate::types::{Group, MAX_MSM_SIZE, MIN_SCALAR_BITS};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostModelError {
    #[error("Invalid MSM size {0}: size must be at least 1")]
    InvalidSize(i64),

    #[error("MSM size {0} exceeds the largest modelled size {}", MAX_MSM_SIZE)]
    SizeTooLarge(u64),

    #[error("Invalid scalar width {0}: must be at least {} bits", MIN_SCALAR_BITS)]
    InvalidScalarBits(u32),

    #[error("Empty benchmark table for {0}")]
    EmptyTable(Group),

    #[error(
        "Invalid measurement at size {size}: {measured_time_ms} ms is not a positive finite time"
    )]
    InvalidMeasurement { size: u64, measured_time_ms: f64 },

    #[error(
        "Invalid calibration for {group}: {ns_per_unit} ns/unit is not a positive finite constant"
    )]
    InvalidCalibration { group: Group, ns_per_unit: f64 },
}

pub type Result<T> = std::result::Result<T, CostModelError>;
