use crate::{
    error::{CostModelError, Result},
    types::{
        CostEstimate, Group, G1_NS_PER_UNIT, G2_NS_PER_UNIT, MAX_MSM_SIZE, MIN_EFFECTIVE_SIZE,
        MIN_SCALAR_BITS, NS_PER_MS, SCALAR_BIT_WIDTH,
    },
};
use ark_ec::AffineCurve;
use ark_ff::PrimeField;

/// Per-group cost of one complexity unit, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    g1_ns_per_unit: f64,
    g2_ns_per_unit: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            g1_ns_per_unit: G1_NS_PER_UNIT,
            g2_ns_per_unit: G2_NS_PER_UNIT,
        }
    }
}

impl Calibration {
    pub fn new(g1_ns_per_unit: f64, g2_ns_per_unit: f64) -> Result<Self> {
        Self::default()
            .with(Group::G1, g1_ns_per_unit)?
            .with(Group::G2, g2_ns_per_unit)
    }

    /// Returns a copy with the constant for `group` replaced.
    pub fn with(mut self, group: Group, ns_per_unit: f64) -> Result<Self> {
        if !ns_per_unit.is_finite() || ns_per_unit <= 0.0 {
            return Err(CostModelError::InvalidCalibration { group, ns_per_unit });
        }
        match group {
            Group::G1 => self.g1_ns_per_unit = ns_per_unit,
            Group::G2 => self.g2_ns_per_unit = ns_per_unit,
        }
        Ok(self)
    }

    pub fn ns_per_unit(&self, group: Group) -> f64 {
        match group {
            Group::G1 => self.g1_ns_per_unit,
            Group::G2 => self.g2_ns_per_unit,
        }
    }
}

/// Closed-form MSM cost heuristic.
///
/// A Pippenger-style MSM over `n` pairs of `b`-bit scalars costs roughly
/// `b + (b * n) / log2(b * n)` group operations: linear work amortized by
/// the bucket count. The calibration converts that count to wall time.
///
/// Sizes below 2 are costed as size 2, so `estimate(g, 1) == estimate(g, 2)`.
/// Sizes above [`MAX_MSM_SIZE`] are rejected with
/// [`CostModelError::SizeTooLarge`]; within `2..=MAX_MSM_SIZE` the estimate is
/// strictly increasing.
///
/// [`CostModel::estimate`] takes an `i64` so that non-positive requests surface
/// as [`CostModelError::InvalidSize`]. The other size-taking methods work on
/// table sizes, which are `u64` like [`BenchmarkPoint::size`], and reject `0`
/// the same way.
///
/// [`BenchmarkPoint::size`]: crate::types::BenchmarkPoint::size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    scalar_bits: u32,
    calibration: Calibration,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            scalar_bits: SCALAR_BIT_WIDTH,
            calibration: Calibration::default(),
        }
    }
}

impl CostModel {
    pub fn new(scalar_bits: u32, calibration: Calibration) -> Result<Self> {
        if scalar_bits < MIN_SCALAR_BITS {
            return Err(CostModelError::InvalidScalarBits(scalar_bits));
        }
        Ok(Self {
            scalar_bits,
            calibration,
        })
    }

    /// Model with the scalar bit width of `A`'s scalar field and the default
    /// calibration. Every arkworks prime field is wider than two bits.
    pub fn for_curve<A: AffineCurve>() -> Self {
        Self {
            scalar_bits: <A::ScalarField as PrimeField>::size_in_bits() as u32,
            calibration: Calibration::default(),
        }
    }

    pub fn with_calibration(self, calibration: Calibration) -> Self {
        Self {
            calibration,
            ..self
        }
    }

    pub fn scalar_bits(&self) -> u32 {
        self.scalar_bits
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Abstract operation count for an MSM of `size` pairs.
    pub fn complexity(&self, size: u64) -> Result<f64> {
        check_size(size)?;
        Ok(self.floored_complexity(size))
    }

    fn floored_complexity(&self, size: u64) -> f64 {
        let n = size.max(MIN_EFFECTIVE_SIZE) as f64;
        let b = self.scalar_bits as f64;
        b + (b * n) / (b * n).log2()
    }

    /// Estimate without the size checks; zero is floored like any size below 2.
    pub(crate) fn floored_estimate(&self, group: Group, size: u64) -> f64 {
        self.floored_complexity(size) * self.calibration.ns_per_unit(group) / NS_PER_MS
    }

    /// Estimated time in milliseconds of an MSM of `size` pairs in `group`.
    pub fn estimate(&self, group: Group, size: i64) -> Result<f64> {
        if size <= 0 {
            return Err(CostModelError::InvalidSize(size));
        }
        self.estimate_unsigned(group, size as u64)
    }

    pub(crate) fn estimate_unsigned(&self, group: Group, size: u64) -> Result<f64> {
        check_size(size)?;
        Ok(self.floored_estimate(group, size))
    }

    pub fn cost_estimate(&self, group: Group, size: u64) -> Result<CostEstimate> {
        Ok(CostEstimate {
            size,
            group,
            estimated_time_ms: self.estimate_unsigned(group, size)?,
        })
    }

    /// Estimate curve over `sizes`, in input order.
    pub fn estimate_series<I>(&self, group: Group, sizes: I) -> Result<Vec<CostEstimate>>
    where
        I: IntoIterator<Item = u64>,
    {
        sizes
            .into_iter()
            .map(|size| self.cost_estimate(group, size))
            .collect()
    }
}

pub(crate) fn check_size(size: u64) -> Result<()> {
    match size {
        0 => Err(CostModelError::InvalidSize(0)),
        size if size > MAX_MSM_SIZE => Err(CostModelError::SizeTooLarge(size)),
        _ => Ok(()),
    }
}

/// [`CostModel::estimate`] with the default model.
pub fn estimate(group: Group, size: i64) -> Result<f64> {
    CostModel::default().estimate(group, size)
}

#[cfg(test)]
mod cost_model_tests {
    use super::*;
    use all_asserts::assert_lt;
    use ark_bls12_381::{G1Affine, G2Affine};

    #[test]
    fn test_estimate_known_value() {
        let b = 254.0_f64;
        let n = 1024.0_f64;
        let expected = (b + b * n / (b * n).log2()) * 315.0 / 1_000_000.0;
        assert_eq!(estimate(Group::G1, 1024).unwrap(), expected);
        assert!((expected - 4.6346).abs() < 1e-4);
    }

    #[test]
    fn test_estimate_rejects_non_positive_sizes() {
        assert_eq!(estimate(Group::G1, 0), Err(CostModelError::InvalidSize(0)));
        let err = estimate(Group::G2, -5).unwrap_err();
        assert_eq!(err, CostModelError::InvalidSize(-5));
    }

    #[test]
    fn test_estimate_upper_bound() {
        let max = MAX_MSM_SIZE as i64;
        for group in Group::ALL {
            let below = estimate(group, max - 1).unwrap();
            assert_lt!(below, estimate(group, max).unwrap());
            assert_eq!(
                estimate(group, max + 1),
                Err(CostModelError::SizeTooLarge(MAX_MSM_SIZE + 1))
            );
            // past 2^53 neighbouring sizes collapse to the same f64
            assert_eq!(
                estimate(group, (1 << 53) + 1),
                Err(CostModelError::SizeTooLarge((1 << 53) + 1))
            );
            assert_eq!(
                estimate(group, i64::MAX),
                Err(CostModelError::SizeTooLarge(i64::MAX as u64))
            );
        }
    }

    #[test]
    fn test_new_rejects_narrow_scalars() {
        for bits in [0, 1] {
            assert_eq!(
                CostModel::new(bits, Calibration::default()),
                Err(CostModelError::InvalidScalarBits(bits))
            );
        }
        let model = CostModel::new(MIN_SCALAR_BITS, Calibration::default()).unwrap();
        assert!(model.estimate(Group::G1, 1).unwrap().is_finite());
    }

    #[test]
    fn test_size_one_is_floored_to_two() {
        for group in Group::ALL {
            let one = estimate(group, 1).unwrap();
            assert!(one.is_finite() && one >= 0.0);
            assert_eq!(one, estimate(group, 2).unwrap());
        }
    }

    #[test]
    fn test_g2_uses_its_own_constant() {
        let model = CostModel::default();
        let g1 = model.estimate(Group::G1, 4096).unwrap();
        let g2 = model.estimate(Group::G2, 4096).unwrap();
        assert!(((g2 / g1) - 880.0 / 315.0).abs() < 1e-12);
    }

    #[test]
    fn test_calibration_rejects_bad_constants() {
        assert!(Calibration::new(0.0, 880.0).is_err());
        assert!(Calibration::new(315.0, f64::NAN).is_err());
        assert!(Calibration::new(315.0, -1.0).is_err());
        let calibration = Calibration::new(100.0, 200.0).unwrap();
        assert_eq!(calibration.ns_per_unit(Group::G1), 100.0);
        assert_eq!(calibration.ns_per_unit(Group::G2), 200.0);
    }

    #[test]
    fn test_recalibration_scales_estimate() {
        let base = CostModel::default();
        let doubled = base.with_calibration(Calibration::new(630.0, 880.0).unwrap());
        let a = base.estimate(Group::G1, 1 << 16).unwrap();
        let b = doubled.estimate(Group::G1, 1 << 16).unwrap();
        assert!((b - 2.0 * a).abs() < 1e-9);
        assert_eq!(
            base.estimate(Group::G2, 1 << 16).unwrap(),
            doubled.estimate(Group::G2, 1 << 16).unwrap()
        );
    }

    #[test]
    fn test_for_curve_reads_scalar_field() {
        assert_eq!(CostModel::for_curve::<G1Affine>().scalar_bits(), 255);
        // G1 and G2 share the scalar field
        assert_eq!(
            CostModel::for_curve::<G2Affine>().scalar_bits(),
            CostModel::for_curve::<G1Affine>().scalar_bits()
        );
    }

    #[test]
    fn test_estimate_series_keeps_order() {
        let model = CostModel::default();
        let series = model.estimate_series(Group::G2, [64, 16, 1024]).unwrap();
        let sizes: Vec<_> = series.iter().map(|e| e.size).collect();
        assert_eq!(sizes, vec![64, 16, 1024]);
        assert!(series.iter().all(|e| e.group == Group::G2));
        assert_eq!(
            series[2].estimated_time_ms,
            model.estimate(Group::G2, 1024).unwrap()
        );
    }

    #[test]
    fn test_estimate_series_rejects_zero() {
        let model = CostModel::default();
        assert_eq!(
            model.estimate_series(Group::G1, [16, 0]),
            Err(CostModelError::InvalidSize(0))
        );
    }
}
