use crate::{
    cost_model::{check_size, CostModel},
    error::{CostModelError, Result},
    types::{BenchmarkPoint, Group, NS_PER_MS},
};
use tracing::{debug, trace, warn};

/// Relative error above which a point is reported as badly calibrated.
const WARN_RELATIVE_ERROR: f64 = 1.0;

/// Model prediction next to one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointError {
    pub size: u64,
    pub measured_time_ms: f64,
    pub estimated_time_ms: f64,
    /// `(estimated - measured) / measured`; positive when the model overshoots.
    pub signed_relative_error: f64,
    pub abs_relative_error: f64,
}

impl PointError {
    fn new(model: &CostModel, group: Group, point: &BenchmarkPoint) -> Self {
        let estimated_time_ms = model.floored_estimate(group, point.size);
        let signed_relative_error =
            (estimated_time_ms - point.measured_time_ms) / point.measured_time_ms;
        Self {
            size: point.size,
            measured_time_ms: point.measured_time_ms,
            estimated_time_ms,
            signed_relative_error,
            abs_relative_error: signed_relative_error.abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationSummary {
    pub mean_abs_relative_error: f64,
    pub max_abs_relative_error: f64,
    /// Size of the first point reaching `max_abs_relative_error`.
    pub max_error_size: u64,
}

/// Outcome of [`validate`]. Per-point errors are recomputed on every call to
/// [`ValidationReport::points`]; the table is borrowed, never copied.
#[derive(Debug, Clone)]
pub struct ValidationReport<'a> {
    group: Group,
    model: CostModel,
    table: &'a [BenchmarkPoint],
    summary: ValidationSummary,
}

impl<'a> ValidationReport<'a> {
    pub fn group(&self) -> Group {
        self.group
    }

    pub fn model(&self) -> &CostModel {
        &self.model
    }

    pub fn summary(&self) -> &ValidationSummary {
        &self.summary
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = PointError> + '_ {
        let (model, group) = (&self.model, self.group);
        self.table
            .iter()
            .map(move |point| PointError::new(model, group, point))
    }
}

fn check_table(group: Group, table: &[BenchmarkPoint]) -> Result<()> {
    if table.is_empty() {
        return Err(CostModelError::EmptyTable(group));
    }
    for point in table {
        check_size(point.size)?;
        if !point.measured_time_ms.is_finite() || point.measured_time_ms <= 0.0 {
            return Err(CostModelError::InvalidMeasurement {
                size: point.size,
                measured_time_ms: point.measured_time_ms,
            });
        }
    }
    Ok(())
}

/// Compares `model`'s predictions for `group` against `table` point by point.
pub fn validate_with<'a>(
    model: &CostModel,
    group: Group,
    table: &'a [BenchmarkPoint],
) -> Result<ValidationReport<'a>> {
    check_table(group, table)?;

    let mut total = 0.0;
    let mut max_abs_relative_error = f64::NEG_INFINITY;
    let mut max_error_size = table[0].size;
    for point in table {
        let error = PointError::new(model, group, point);
        trace!(
            %group,
            size = error.size,
            measured_ms = error.measured_time_ms,
            estimated_ms = error.estimated_time_ms,
            relative_error = error.signed_relative_error,
            "validated point"
        );
        if error.abs_relative_error > WARN_RELATIVE_ERROR {
            warn!(
                %group,
                size = error.size,
                relative_error = error.signed_relative_error,
                "estimate is off by more than 100%"
            );
        }
        total += error.abs_relative_error;
        if error.abs_relative_error > max_abs_relative_error {
            max_abs_relative_error = error.abs_relative_error;
            max_error_size = error.size;
        }
    }

    let summary = ValidationSummary {
        mean_abs_relative_error: total / table.len() as f64,
        max_abs_relative_error,
        max_error_size,
    };
    debug!(
        %group,
        points = table.len(),
        mean = summary.mean_abs_relative_error,
        max = summary.max_abs_relative_error,
        max_size = summary.max_error_size,
        "validation summary"
    );

    Ok(ValidationReport {
        group,
        model: *model,
        table,
        summary,
    })
}

/// [`validate_with`] using the default model.
pub fn validate(group: Group, table: &[BenchmarkPoint]) -> Result<ValidationReport<'_>> {
    validate_with(&CostModel::default(), group, table)
}

/// Nanoseconds per complexity unit that minimise the squared relative error of
/// `model`'s formula against `table`. Only the scale is fitted; the formula
/// shape and scalar width stay as they are.
pub fn calibrate(model: &CostModel, group: Group, table: &[BenchmarkPoint]) -> Result<f64> {
    check_table(group, table)?;

    // minimise sum((c * u_i / NS_PER_MS - m_i) / m_i)^2 over c
    let (num, den) = table.iter().try_fold((0.0, 0.0), |(num, den), point| {
        let units = model.complexity(point.size)? / NS_PER_MS;
        let ratio = units / point.measured_time_ms;
        Ok::<_, CostModelError>((num + ratio, den + ratio * ratio))
    })?;
    let ns_per_unit = num / den;
    debug!(
        %group,
        points = table.len(),
        previous = model.calibration().ns_per_unit(group),
        fitted = ns_per_unit,
        "calibrated constant"
    );
    Ok(ns_per_unit)
}
