//! Command-line interface.

use clap::{ArgAction, Parser};

use crate::color::Rgba;
use crate::config::Config;
use crate::error::ConfigError;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Number of points
    #[arg(short = 'n', long, default_value_t = 100)]
    pub points: u32,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Minimum point speed in pixels per frame
    #[arg(long, default_value_t = 0.0)]
    pub min_speed: f32,

    /// Maximum point speed in pixels per frame
    #[arg(long, default_value_t = 2.0)]
    pub max_speed: f32,

    /// Distance under which points are linked, in pixels
    #[arg(long, default_value_t = 200.0)]
    pub link_radius: f32,

    /// Fade line opacity with distance
    #[arg(long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1, default_missing_value = "true")]
    pub fade: bool,

    /// Link points to the mouse cursor
    #[arg(long, action = ArgAction::Set, default_value_t = true, num_args = 0..=1, default_missing_value = "true")]
    pub mouse_link: bool,

    /// Dot color as #rrggbb or #rrggbbaa
    #[arg(long, default_value = "#ffffff", value_parser = Rgba::from_hex)]
    pub dot_color: Rgba,

    /// Line color as #rrggbb or #rrggbbaa
    #[arg(long, default_value = "#ffffff", value_parser = Rgba::from_hex)]
    pub line_color: Rgba,

    /// Background color as #rrggbb or #rrggbbaa
    #[arg(long, default_value = "#000000", value_parser = Rgba::from_hex)]
    pub background: Rgba,

    /// Dot diameter in pixels
    #[arg(long, default_value_t = 4.0)]
    pub dot_size: f32,

    /// Line width in pixels
    #[arg(long, default_value_t = 1.0)]
    pub line_width: f32,

    /// Start fullscreen
    #[arg(long, default_value_t = false)]
    pub fullscreen: bool,

    /// Ask for a transparent window surface
    #[arg(long, default_value_t = false)]
    pub transparent: bool,

    /// Draw the window without decorations
    #[arg(long, default_value_t = false)]
    pub no_decorations: bool,

    /// Modulate line opacity with audio input
    #[arg(long, default_value_t = false)]
    pub audio: bool,
}

impl Args {
    /// Turn parsed arguments into a validated [`Config`].
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let config = Config {
            points: self.points,
            width: self.width,
            height: self.height,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            link_radius: self.link_radius,
            fade: self.fade,
            mouse_link: self.mouse_link,
            dot_color: self.dot_color,
            line_color: self.line_color,
            background: self.background,
            dot_size: self.dot_size,
            line_width: self.line_width,
            fullscreen: self.fullscreen,
            transparent: self.transparent,
            decorations: !self.no_decorations,
            audio: self.audio,
        };
        config.validate()?;
        Ok(config)
    }
}
