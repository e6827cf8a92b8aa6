use serde::{Deserialize, Serialize};

use strip_milp::util::PackerConfig;

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the spmilp driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct SPMilpConfig {
    /// Configuration of the packer: Big-M overrides, tolerances and time limit
    #[serde(default)]
    pub packer_config: PackerConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: SPMilpConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SPMilpConfig::default());
    }

    #[test]
    fn packer_section_is_read() {
        let json = r#"{
            "packer_config": {
                "big_m": { "horizontal": 100.0 },
                "binary_tolerance": 1e-5,
                "geometric_tolerance": 1e-7,
                "time_limit_ms": 2500
            }
        }"#;
        let config: SPMilpConfig = serde_json::from_str(json).unwrap();
        let packer = config.packer_config;
        assert_eq!(packer.big_m.horizontal, Some(100.0));
        assert_eq!(packer.big_m.vertical, None);
        assert_eq!(packer.binary_tolerance.0, 1e-5);
        assert_eq!(packer.time_limit_ms, Some(2500));
        assert_eq!(config.svg_draw_options, SvgDrawOptions::default());
    }
}
