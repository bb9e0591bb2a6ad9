use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use maskpack::io::svg::svg_util::SvgDrawOptions;
use maskpack::util::ImportConfig;

/// Configuration for the first-fit optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FFConfig {
    /// Rotation step in degrees. Angles `0, step, 2*step, ...` below 360° are tried in ascending order
    pub angle_step_deg: f32,
    /// Translation step in pixels, for both rows and columns
    pub shift_step: usize,
    /// Wall-clock budget for the whole run in seconds. If undefined, the search runs to completion
    #[serde(default)]
    pub time_limit_s: Option<f64>,
    /// Configuration of the conversion of external masks
    #[serde(default)]
    pub import_config: ImportConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl FFConfig {
    /// Rejects configurations the optimizer cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.shift_step > 0, "shift step must be positive");
        ensure!(
            self.angle_step_deg > 0.0 && self.angle_step_deg < 360.0,
            "angle step must be in (0, 360), got {}",
            self.angle_step_deg
        );
        if let Some(limit) = self.time_limit_s {
            ensure!(
                limit.is_finite() && limit >= 0.0,
                "time limit must be a finite, non-negative number of seconds, got {limit}"
            );
        }
        Ok(())
    }

    /// The rotation angles of the search grid, in ascending order
    pub fn angles(&self) -> impl Iterator<Item = f32> + use<> {
        let step = self.angle_step_deg;
        (0..)
            .map(move |i| i as f32 * step)
            .take_while(|&a| a < 360.0)
    }
}

impl Default for FFConfig {
    fn default() -> Self {
        Self {
            angle_step_deg: 10.0,
            shift_step: 10,
            time_limit_s: None,
            import_config: ImportConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(10.0, 36, 350.0; "divides 360")]
    #[test_case(7.0, 52, 357.0; "does not divide 360")]
    #[test_case(90.0, 4, 270.0; "quarter turns")]
    #[test_case(359.0, 2, 359.0; "almost a full turn")]
    fn angles_ascend_below_full_turn(step: f32, n_angles: usize, last: f32) {
        let config = FFConfig {
            angle_step_deg: step,
            ..FFConfig::default()
        };
        let angles = config.angles().collect::<Vec<_>>();
        assert_eq!(angles.len(), n_angles);
        assert_eq!(angles.first(), Some(&0.0));
        assert_eq!(angles.last(), Some(&last));
        assert!(angles.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn quarter_turn_grid() {
        let config = FFConfig {
            angle_step_deg: 90.0,
            ..FFConfig::default()
        };
        assert_eq!(config.angles().collect::<Vec<_>>(), vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test_case(Some(-1.0); "negative")]
    #[test_case(Some(f64::NAN); "nan")]
    #[test_case(Some(f64::INFINITY); "infinite")]
    fn invalid_time_limit_is_rejected(time_limit_s: Option<f64>) {
        let config = FFConfig {
            time_limit_s,
            ..FFConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test_case(None; "no limit")]
    #[test_case(Some(0.0); "zero")]
    #[test_case(Some(2.5); "positive")]
    fn valid_time_limit_is_accepted(time_limit_s: Option<f64>) {
        let config = FFConfig {
            time_limit_s,
            ..FFConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_time_limit_in_config_file_is_rejected() {
        let config: FFConfig = serde_json::from_str(
            r#"{"angle_step_deg": 10.0, "shift_step": 10, "time_limit_s": -1.0}"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test_case(0.0, 10; "zero angle step")]
    #[test_case(360.0, 10; "full turn angle step")]
    #[test_case(10.0, 0; "zero shift step")]
    fn invalid_steps_are_rejected(angle_step_deg: f32, shift_step: usize) {
        let config = FFConfig {
            angle_step_deg,
            shift_step,
            ..FFConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
