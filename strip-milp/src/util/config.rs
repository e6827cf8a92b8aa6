use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::util::Tolerance;

///Configuration of the [`StripPacker`](crate::packer::StripPacker)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackerConfig {
    ///Overrides of the derived Big-M constants
    #[serde(default)]
    pub big_m: BigMConfig,
    ///Maximum distance of a solved binary indicator from 0 or 1
    pub binary_tolerance: Tolerance,
    ///Tolerance used when checking the extracted layout for overlaps and bound violations
    pub geometric_tolerance: Tolerance,
    ///Wall-clock budget for the solver in milliseconds. If undefined, the solver runs until it finishes
    pub time_limit_ms: Option<u64>,
}

impl PackerConfig {
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            big_m: BigMConfig::default(),
            binary_tolerance: Tolerance(1e-6),
            geometric_tolerance: Tolerance(1e-6),
            time_limit_ms: None,
        }
    }
}

///Optional overrides of the Big-M constants. Undefined values are derived from the instance.
///An override smaller than the derived value is rejected, since it would cut off feasible layouts.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct BigMConfig {
    ///`M1` and `M3`, must be at least the strip width
    pub vertical: Option<f64>,
    ///`M2` and `M4`, must be at least the strip length upper bound
    pub horizontal: Option<f64>,
}
