use std::fmt;
use std::str::FromStr;

/// Scalar bit width the reference heuristic was tuned with.
pub const SCALAR_BIT_WIDTH: u32 = 254;

/// Narrowest scalar width the formula accepts; `log2(b * n)` must stay above 1.
pub const MIN_SCALAR_BITS: u32 = 2;

/// Nanoseconds per complexity unit for a G1 MSM.
pub const G1_NS_PER_UNIT: f64 = 315.0;
/// Nanoseconds per complexity unit for a G2 MSM.
pub const G2_NS_PER_UNIT: f64 = 880.0;

pub const NS_PER_MS: f64 = 1_000_000.0;

/// Sizes below this are costed as this size, keeping `log2(b * n)` well
/// away from its singularity.
pub const MIN_EFFECTIVE_SIZE: u64 = 2;

/// Largest size the model accepts. Up to here neighbouring sizes still map
/// to distinct, increasing `f64` estimates.
pub const MAX_MSM_SIZE: u64 = 1 << 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    G1,
    G2,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::G1, Group::G2];
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::G1 => write!(f, "G1"),
            Group::G2 => write!(f, "G2"),
        }
    }
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "g1" | "1" => Ok(Group::G1),
            "g2" | "2" => Ok(Group::G2),
            _ => Err(format!("Unknown group: {s}. Valid groups: g1, g2")),
        }
    }
}

/// One measured MSM run: `size` scalar-point pairs took `measured_time_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkPoint {
    pub size: u64,
    pub measured_time_ms: f64,
}

impl BenchmarkPoint {
    pub const fn new(size: u64, measured_time_ms: f64) -> Self {
        Self {
            size,
            measured_time_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimate {
    pub size: u64,
    pub group: Group,
    pub estimated_time_ms: f64,
}
