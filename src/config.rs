//! Run configuration.
//!
//! Everything here is parsed and validated before the simulation is
//! constructed; the core never sees an invalid value. Defaults reproduce the
//! classic look: 100 white dots on black, 640×480, link radius 200.

use crate::color::Rgba;
use crate::error::ConfigError;
use crate::graph::DEFAULT_LINK_RADIUS;

/// Validated configuration for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of points. Zero is a valid (empty) simulation.
    pub points: u32,
    /// Initial window width in pixels.
    pub width: u32,
    /// Initial window height in pixels.
    pub height: u32,
    /// Lower bound of the per-axis speed range, pixels per frame.
    pub min_speed: f32,
    /// Upper bound of the per-axis speed range, pixels per frame.
    pub max_speed: f32,
    /// Distance under which two points are linked, in pixels.
    pub link_radius: f32,
    /// Fade line opacity with distance instead of using a flat value.
    pub fade: bool,
    /// Also link points to the mouse cursor.
    pub mouse_link: bool,
    pub dot_color: Rgba,
    pub line_color: Rgba,
    pub background: Rgba,
    /// Dot diameter in pixels.
    pub dot_size: f32,
    /// Line width in pixels.
    pub line_width: f32,
    pub fullscreen: bool,
    /// Ask the compositor for a transparent window surface.
    pub transparent: bool,
    pub decorations: bool,
    /// Modulate line opacity with captured audio.
    pub audio: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            points: 100,
            width: 640,
            height: 480,
            min_speed: 0.0,
            max_speed: 2.0,
            link_radius: DEFAULT_LINK_RADIUS,
            fade: true,
            mouse_link: true,
            dot_color: Rgba::WHITE,
            line_color: Rgba::WHITE,
            background: Rgba::BLACK,
            dot_size: 4.0,
            line_width: 1.0,
            fullscreen: false,
            transparent: false,
            decorations: true,
            audio: false,
        }
    }
}

impl Config {
    /// Reject out-of-range values. Degenerate-but-valid settings (zero
    /// points, zero speed) pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_speed >= 0.0 && self.max_speed >= self.min_speed) {
            return Err(ConfigError::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if !(self.link_radius > 0.0) {
            return Err(ConfigError::LinkRadius(self.link_radius));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::WindowSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_points_is_valid() {
        let config = Config {
            points: 0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_speed_range_is_valid() {
        let config = Config {
            min_speed: 0.0,
            max_speed: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_speed_range_rejected() {
        let config = Config {
            min_speed: 3.0,
            max_speed: 1.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpeedRange { .. })
        ));
    }

    #[test]
    fn test_negative_speed_rejected() {
        let config = Config {
            min_speed: -1.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_speed_rejected() {
        let config = Config {
            min_speed: f32::NAN,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_radius_rejected() {
        let config = Config {
            link_radius: 0.0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::LinkRadius(_))));
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = Config {
            width: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WindowSize { .. })
        ));
    }
}
