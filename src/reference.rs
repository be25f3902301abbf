//! Benchmark table the default calibration was tuned against.
//!
//! Times are milliseconds for one MSM over random BLS12-381 inputs, one run
//! per size. The small sizes are noisy (G1 at 64 is faster than at 32).

use crate::types::{BenchmarkPoint, Group};

pub const SIZES: [u64; 19] = [
    16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65536, 131072, 262144,
    524288, 1048576, 2097152, 4194304,
];

pub const G1_TIMES_MS: [f64; 19] = [
    1.2, 1.6, 1.0, 3.0, 5.2, 4.1, 7.0, 12.9, 23.5, 39.3, 72.0, 139.4, 265.8, 489.96, 836.4,
    1000.54, 3000.55, 5000.75, 11000.9,
];

pub const G2_TIMES_MS: [f64; 19] = [
    3.4, 3.6, 5.2, 8.0, 9.9, 11.0, 18.5, 34.5, 61.9, 106.0, 193.6, 374.0, 662.0, 1000.28,
    2000.32, 4000.19, 9000.76, 15000.7, 31000.7,
];

pub fn times_ms(group: Group) -> &'static [f64; 19] {
    match group {
        Group::G1 => &G1_TIMES_MS,
        Group::G2 => &G2_TIMES_MS,
    }
}

/// The reference table for `group`, in ascending size order.
pub fn table(group: Group) -> Vec<BenchmarkPoint> {
    SIZES
        .iter()
        .zip(times_ms(group).iter())
        .map(|(&size, &measured_time_ms)| BenchmarkPoint::new(size, measured_time_ms))
        .collect()
}
