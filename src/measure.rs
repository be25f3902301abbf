//! Times real arkworks MSMs to produce benchmark points.
//!
//! This is a data source for [`crate::validator`], not part of the model:
//! nothing in the estimator calls it.

use crate::{
    cost_model::check_size,
    error::Result,
    types::{BenchmarkPoint, Group},
    utils::generate_msm_inputs,
};
use ark_bls12_381::{G1Affine, G2Affine};
use ark_ec::{msm::VariableBaseMSM, AffineCurve};
use std::{hint::black_box, time::Instant};
use tracing::{debug, info};

/// Fastest of `repetitions` runs of a variable-base MSM of `size` random
/// pairs over `A`. At least one run is always made.
pub fn measure_msm<A: AffineCurve>(size: u64, repetitions: usize) -> Result<BenchmarkPoint> {
    check_size(size)?;
    let mut rng = ark_std::test_rng();
    let (points, scalars) = generate_msm_inputs::<A, _>(size as usize, &mut rng);

    let mut best_ms = f64::INFINITY;
    for run in 0..repetitions.max(1) {
        let start = Instant::now();
        let _ = black_box(VariableBaseMSM::multi_scalar_mul(
            black_box(points.as_slice()),
            black_box(scalars.as_slice()),
        ));
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        debug!(size, run, elapsed_ms, "msm run");
        best_ms = best_ms.min(elapsed_ms);
    }
    Ok(BenchmarkPoint::new(size, best_ms))
}

/// Measures every size in `sizes` over BLS12-381 `group`, in input order,
/// keeping the fastest of `runs` runs per size.
pub fn measure_table<I>(group: Group, sizes: I, runs: usize) -> Result<Vec<BenchmarkPoint>>
where
    I: IntoIterator<Item = u64>,
{
    sizes
        .into_iter()
        .map(|size| {
            let point = match group {
                Group::G1 => measure_msm::<G1Affine>(size, runs)?,
                Group::G2 => measure_msm::<G2Affine>(size, runs)?,
            };
            info!(%group, size, measured_ms = point.measured_time_ms, "measured msm");
            Ok(point)
        })
        .collect()
}
